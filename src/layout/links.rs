//! # Link Registry
//!
//! Collects clickable-region rectangles during placement. Geometry comes
//! straight from the measured metrics of the rendered anchor text — never
//! from estimated offsets — so the region coincides with the visible,
//! colored span. Malformed targets are dropped with a warning; the text
//! still renders, the region is simply omitted.

/// A clickable rectangle in page coordinates (top-left origin) paired with
/// its target URL.
#[derive(Debug, Clone)]
pub struct LinkRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub url: String,
}

/// Registers `(rectangle, url)` pairs per page during placement.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    regions: Vec<(usize, LinkRect)>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region if the target normalizes to a usable URL.
    pub fn register(&mut self, page: usize, x: f64, y: f64, width: f64, height: f64, raw: &str) {
        match normalize_url(raw) {
            Some(url) => self.regions.push((
                page,
                LinkRect {
                    x,
                    y,
                    width,
                    height,
                    url,
                },
            )),
            None => log::warn!("dropping malformed hyperlink target {:?}", raw),
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions registered against a given page index.
    pub fn for_page(&self, page: usize) -> impl Iterator<Item = &LinkRect> {
        self.regions
            .iter()
            .filter(move |(p, _)| *p == page)
            .map(|(_, r)| r)
    }

    pub fn drain(self) -> Vec<(usize, LinkRect)> {
        self.regions
    }
}

/// Normalize a raw link target. Scheme-less targets that look like a host
/// get `https://` prepended; anything with whitespace or no dot is rejected.
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Some(trimmed.to_string());
    }
    if trimmed.contains('.') {
        return Some(format!("https://{}", trimmed));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_urls_pass_through() {
        assert_eq!(
            normalize_url("https://example.com/x"),
            Some("https://example.com/x".to_string())
        );
    }

    #[test]
    fn bare_domains_get_a_scheme() {
        assert_eq!(
            normalize_url("example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn whitespace_targets_are_rejected() {
        assert_eq!(normalize_url("not a url"), None);
        assert_eq!(normalize_url("   "), None);
    }

    #[test]
    fn schemeless_non_domains_are_rejected() {
        assert_eq!(normalize_url("justaword"), None);
    }

    #[test]
    fn registry_skips_malformed_targets() {
        let mut registry = LinkRegistry::new();
        registry.register(0, 0.0, 0.0, 10.0, 5.0, "not a url");
        registry.register(0, 0.0, 0.0, 10.0, 5.0, "https://ok.example");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.for_page(0).count(), 1);
    }
}

//! Header section: centered name, contact line, and social links.
//!
//! The link line is built span by span so the clickable region for each
//! link starts exactly where its label text ends — the region's x-origin
//! is the measured width of everything before the link's display text, and
//! its width is the measured width of the display text itself.

use super::{Block, Line, RenderContext, Rule, Span};
use crate::font::FontSpec;
use crate::model::PersonalDetails;

/// Render the header as a single unbreakable block.
pub fn render(details: &PersonalDetails, ctx: &RenderContext<'_>) -> Vec<Block> {
    let profile = ctx.profile;
    let mut lines = Vec::new();

    let name_font = FontSpec::new(profile.font_family, profile.name_font_size).bold();
    lines.push(
        Line::new(
            vec![Span::new(
                details.name.clone(),
                name_font,
                profile.primary_color,
            )],
            profile.line_advance(profile.name_font_size) + 6.0,
        )
        .centered(),
    );

    let body = ctx.body_font();
    let contact = contact_line(details);
    if !contact.is_empty() {
        lines.push(
            Line::new(
                vec![Span::new(contact, body, profile.secondary_color)],
                ctx.body_advance() + 3.0,
            )
            .centered(),
        );
    }

    let mut link_spans: Vec<Span> = Vec::new();
    let link_color = if profile.enable_hyperlinks {
        profile.hyperlink_color
    } else {
        profile.secondary_color
    };

    if let Some(handle) = non_empty(details.linkedin.as_deref()) {
        link_spans.push(Span::new("LinkedIn: ", body, link_color));
        let mut value = Span::new(handle, body, link_color);
        if profile.enable_hyperlinks {
            value = value.with_href(linkedin_url(handle));
        }
        link_spans.push(value);
    }
    if let Some(handle) = non_empty(details.github.as_deref()) {
        if !link_spans.is_empty() {
            link_spans.push(Span::new(" | ", body, profile.secondary_color));
        }
        link_spans.push(Span::new("GitHub: ", body, link_color));
        let mut value = Span::new(handle, body, link_color);
        if profile.enable_hyperlinks {
            value = value.with_href(github_url(handle));
        }
        link_spans.push(value);
    }

    if !link_spans.is_empty() {
        lines.push(Line::new(link_spans, ctx.body_advance() + 4.0).centered());
    }

    // Thin separator between the header and the body sections.
    if let Some(last) = lines.last_mut() {
        last.rule_below = Some(Rule {
            color: profile.primary_color,
            thickness: 0.5,
        });
        last.advance += 3.0;
    }

    vec![Block::new(lines).with_spacing_after(profile.section_spacing)]
}

/// `address | phone | email`, omitting absent fields.
fn contact_line(details: &PersonalDetails) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(address) = non_empty(details.address.as_deref()) {
        parts.push(address);
    }
    if let Some(phone) = non_empty(details.phone.as_deref()) {
        parts.push(phone);
    }
    if !details.email.trim().is_empty() {
        parts.push(details.email.trim());
    }
    parts.join(" | ")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Build a canonical profile URL from a handle or pasted profile link.
/// The case-insensitive host scan uses `to_ascii_lowercase` so byte
/// offsets stay valid in the original string even when the handle
/// contains multi-byte characters.
fn linkedin_url(handle: &str) -> String {
    let lower = handle.to_ascii_lowercase();
    let slug = match lower.find("linkedin.com/in/") {
        Some(pos) => &handle[pos + "linkedin.com/in/".len()..],
        None => handle,
    };
    format!("https://www.linkedin.com/in/{}", slug.trim_matches('/'))
}

fn github_url(handle: &str) -> String {
    let lower = handle.to_ascii_lowercase();
    let slug = match lower.find("github.com/") {
        Some(pos) => &handle[pos + "github.com/".len()..],
        None => handle,
    };
    format!("https://github.com/{}", slug.trim_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleOverrides;

    fn details() -> PersonalDetails {
        PersonalDetails {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: Some("555-0100".into()),
            address: Some("Springfield".into()),
            linkedin: Some("janedoe".into()),
            github: Some("octocat".into()),
        }
    }

    #[test]
    fn contact_line_omits_absent_fields() {
        let mut d = details();
        d.address = None;
        assert_eq!(contact_line(&d), "555-0100 | jane@example.com");
    }

    #[test]
    fn header_is_one_block_with_centered_name() {
        let profile = StyleOverrides::default().resolve();
        let ctx = RenderContext::new(&profile, profile.content_width());
        let blocks = render(&details(), &ctx);
        assert_eq!(blocks.len(), 1);
        let name = &blocks[0].lines[0];
        assert_eq!(name.spans[0].text, "Jane Doe");
        assert_eq!(name.align, super::super::Align::Center);
    }

    #[test]
    fn link_spans_carry_canonical_urls() {
        let profile = StyleOverrides::default().resolve();
        let ctx = RenderContext::new(&profile, profile.content_width());
        let blocks = render(&details(), &ctx);
        let link_line = &blocks[0].lines[2];
        let hrefs: Vec<_> = link_line
            .spans
            .iter()
            .filter_map(|s| s.href.as_deref())
            .collect();
        assert_eq!(
            hrefs,
            vec![
                "https://www.linkedin.com/in/janedoe",
                "https://github.com/octocat"
            ]
        );
    }

    #[test]
    fn pasted_profile_urls_are_normalized() {
        assert_eq!(
            linkedin_url("https://www.linkedin.com/in/janedoe/"),
            "https://www.linkedin.com/in/janedoe"
        );
        assert_eq!(
            github_url("https://github.com/octocat"),
            "https://github.com/octocat"
        );
    }

    #[test]
    fn multibyte_handles_do_not_misalign_the_host_scan() {
        // Lowercasing can change byte lengths (e.g. U+0130); the host scan
        // must keep its offsets aligned with the original handle.
        assert_eq!(
            linkedin_url("\u{130}linkedin.com/in/\u{e9}jane"),
            "https://www.linkedin.com/in/\u{e9}jane"
        );
        assert_eq!(
            github_url("\u{130}github.com/\u{e9}octocat"),
            "https://github.com/\u{e9}octocat"
        );

        let profile = StyleOverrides::default().resolve();
        let ctx = RenderContext::new(&profile, profile.content_width());
        let mut d = details();
        d.linkedin = Some("\u{130}linkedin.com/in/\u{e9}jane".to_string());
        d.github = Some("\u{130}github.com/\u{e9}octocat".to_string());
        let blocks = render(&d, &ctx);
        assert!(!blocks.is_empty());
    }

    #[test]
    fn disabled_hyperlinks_render_text_without_hrefs() {
        let profile = StyleOverrides {
            enable_hyperlinks: Some(false),
            ..Default::default()
        }
        .resolve();
        let ctx = RenderContext::new(&profile, profile.content_width());
        let blocks = render(&details(), &ctx);
        let link_line = &blocks[0].lines[2];
        assert!(link_line.spans.iter().all(|s| s.href.is_none()));
        assert!(link_line.spans.iter().any(|s| s.text == "octocat"));
    }
}

//! HTML rendering for related-page lists
//!
//! Produces a fragment suitable for embedding in a rendered page; styling is
//! left to the embedding page's stylesheet.

use crate::config::StoreConfig;
use crate::related::RankedCandidate;

/// Escape text for embedding in HTML
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render a ranked related-page list as an HTML fragment.
///
/// An empty list renders a fallback paragraph instead of an empty `<ul>`.
pub fn render_related_html(results: &[RankedCandidate], config: &StoreConfig) -> String {
    if results.is_empty() {
        return "<p><i>No related pages found.</i></p>".to_string();
    }

    let mut html = String::from("<ul class=\"related-pages\">");
    for candidate in results {
        let page = &candidate.page;
        html.push_str("<li>");

        html.push_str(&format!(
            "<a href=\"{}\">{}</a>",
            escape_html(&page.url_path),
            escape_html(&page.title)
        ));
        if let Some(space) = &page.space {
            let display = config.space_display_name(space);
            html.push_str(&format!(
                " <span class=\"space-name\">({})</span>",
                escape_html(&display)
            ));
        }

        if !page.labels.is_empty() {
            html.push_str("<ul class=\"label-list\">");
            for label in &page.labels {
                html.push_str(&format!(
                    "<li><a href=\"{}\" rel=\"tag\">{}</a></li>",
                    escape_html(&label.url_path()),
                    escape_html(label.name())
                ));
            }
            html.push_str("</ul>");
        }

        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::PageMeta;
    use crate::label::Label;

    fn candidate(id: &str, title: &str, space: Option<&str>, labels: &[&str]) -> RankedCandidate {
        let labels: Vec<Label> = labels.iter().map(|l| Label::new(l).unwrap()).collect();
        RankedCandidate {
            page: PageMeta {
                id: id.to_string(),
                title: title.to_string(),
                space: space.map(str::to_string),
                url_path: format!("/{}/{}", space.unwrap_or("main"), id),
                labels: labels.clone(),
                created: None,
                updated: None,
            },
            shared_labels: labels,
            weight: 0,
        }
    }

    #[test]
    fn test_empty_fallback() {
        let html = render_related_html(&[], &StoreConfig::default());
        assert_eq!(html, "<p><i>No related pages found.</i></p>");
    }

    #[test]
    fn test_renders_link_space_and_labels() {
        let mut config = StoreConfig::default();
        config.set_space_display_name("ops".to_string(), "Operations".to_string());

        let results = vec![candidate("pg-a1b2", "Oncall Guide", Some("ops"), &["runbook"])];
        let html = render_related_html(&results, &config);

        assert!(html.starts_with("<ul class=\"related-pages\">"));
        assert!(html.contains("<a href=\"/ops/pg-a1b2\">Oncall Guide</a>"));
        assert!(html.contains("<span class=\"space-name\">(Operations)</span>"));
        assert!(html.contains("<a href=\"/labels/runbook\" rel=\"tag\">runbook</a>"));
        assert!(html.ends_with("</ul>"));
    }

    #[test]
    fn test_space_key_is_fallback_display_name() {
        let results = vec![candidate("pg-a1b2", "Guide", Some("ops"), &[])];
        let html = render_related_html(&results, &StoreConfig::default());
        assert!(html.contains("(ops)"));
        // No labels, no label list
        assert!(!html.contains("label-list"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let results = vec![candidate(
            "pg-a1b2",
            "Tips & <script>Tricks</script>",
            None,
            &[],
        )];
        let html = render_related_html(&results, &StoreConfig::default());
        assert!(html.contains("Tips &amp; &lt;script&gt;Tricks&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<i>\"hi\"</i>"), "&lt;i&gt;&quot;hi&quot;&lt;/i&gt;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }
}

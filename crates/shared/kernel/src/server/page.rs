//! Page metadata and the shared HTML layout.
//!
//! A page slice produces a [`PageMeta`] and a body [`Markup`]; [`render`]
//! wraps both in the document shell (head, nav, footer). The metadata is
//! derived from the configuration snapshot on every render, never cached.

use maud::{DOCTYPE, Markup, html};
use shub_domain::config::SiteConfig;
use shub_domain::constants::{CONTACT_PATH, FOIA_PATH};

/// Document-level metadata consumed by the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
}

impl PageMeta {
    /// Builds the metadata record for a labelled page: `"<label> - <app name>"`.
    #[must_use]
    pub fn titled(label: &str, app_name: &str) -> Self {
        Self { title: format!("{label} - {app_name}"), description: None }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Wraps page content with the standard HTML document structure.
///
/// The caller provides page-specific body markup; the wrapper owns the
/// doctype, head (including the `<title>` from [`PageMeta`]), site navigation,
/// and footer.
pub fn render(meta: &PageMeta, site: &SiteConfig, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                @if let Some(description) = &meta.description {
                    meta name="description" content=(description);
                }
                link rel="stylesheet" href="/assets/site.css";
            }
            body {
                header class="site-header" {
                    nav class="site-nav" {
                        span class="brand" { (site.app_name) }
                        a href=(FOIA_PATH) { "FOIA Toolkit" }
                        a href=(CONTACT_PATH) { "Contact" }
                    }
                }
                main id="content" { (body) }
                footer class="site-footer" {
                    p { "© 2025 " (site.app_name) ". All rights reserved." }
                    p { a href=(format!("mailto:{}", site.support_email)) { (site.support_email) } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titled_interpolates_app_name() {
        let meta = PageMeta::titled("Contact Us", "Acme Corp");
        assert_eq!(meta.title, "Contact Us - Acme Corp");
        assert!(meta.description.is_none());
    }

    #[test]
    fn render_places_title_in_head() {
        let meta = PageMeta::titled("FOIA Toolkit", "Acme Corp");
        let site = SiteConfig::default();
        let doc = render(&meta, &site, html! { p { "body" } }).into_string();

        assert!(doc.contains("<title>FOIA Toolkit - Acme Corp</title>"));
        assert!(doc.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn render_emits_description_only_when_present() {
        let site = SiteConfig::default();
        let bare = render(&PageMeta::titled("A", "B"), &site, html! {}).into_string();
        assert!(!bare.contains("name=\"description\""));

        let meta = PageMeta::titled("A", "B").with_description("desc");
        let described = render(&meta, &site, html! {}).into_string();
        assert!(described.contains("name=\"description\" content=\"desc\""));
    }
}

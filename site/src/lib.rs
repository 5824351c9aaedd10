//! # maintainme-site
//!
//! Leptos components and SSR renderer for the MaintainME landing page.
//!
//! The page is a hero, a warranty comparison, a benefits grid and a plan
//! comparison, with a light/dark toggle whose choice is persisted under the
//! `theme` key. The same components are rendered to static HTML here (feature
//! `ssr`, on by default) and mounted in the browser by the `maintainme-web`
//! crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use maintainme_site::{render_page, RenderOptions, Theme};
//!
//! let html = render_page(&RenderOptions {
//!     theme: Theme::Light,
//!     ..Default::default()
//! });
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`theme`] - `Theme` and the single theme-to-classes mapping
//! - [`store`] - `ThemeStore` and its storage backends
//! - [`content`] - literal page content (plans, comparison, benefits)
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ---
//!
//! Developed by the MaintainME web team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod store;
pub mod styles;
pub mod theme;

pub use content::{PLANS, Plan, PlanTier, SiteMetadata};
pub use store::{
    MemoryBackend, PrerenderBackend, StorageError, THEME_STORAGE_KEY, ThemeBackend, ThemeStore,
};
pub use theme::{ParseThemeError, Theme, ThemeTokens};

/// What to pre-render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Theme baked into the static markup.
    pub theme: Theme,
    /// Title, description and language of the document.
    pub metadata: SiteMetadata,
}

/// Render the complete landing page as an HTML document.
///
/// Rendering happens outside any interactive context, so storage is treated
/// as unavailable and the page uses `options.theme` as-is.
///
/// # Example
///
/// ```rust
/// use maintainme_site::{render_page, RenderOptions};
///
/// let html = render_page(&RenderOptions::default());
/// assert!(html.contains("MaintainME Premium"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(options: &RenderOptions) -> String {
    use components::SiteDocument;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let store = ThemeStore::with_theme(options.theme, Box::new(PrerenderBackend));
    let doc = view! { <SiteDocument metadata=options.metadata.clone() store=store /> };

    let html = doc.to_html();
    tracing::debug!(theme = %options.theme, bytes = html.len(), "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn renders_document_shell() {
        let html = render_page(&RenderOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en" class="dark""#));
        assert!(html.contains("<title>MaintainME - Smart Grounds Maintenance Solutions</title>"));
        assert!(html.contains("Enterprise-grade maintenance solutions"));
        assert!(html.contains(r#"<body class="font-sans antialiased">"#));
        assert!(html.contains("--font-inter"));
    }

    #[test]
    fn prerender_defaults_to_dark() {
        let html = render_page(&RenderOptions::default());
        assert!(html.contains("page bg-gray-900"));
        assert!(html.contains(r#"data-icon="sun""#));
    }

    #[test]
    fn renders_requested_light_theme() {
        let html = render_page(&RenderOptions {
            theme: Theme::Light,
            ..Default::default()
        });
        assert!(html.contains("page bg-white"));
        assert!(html.contains(r#"data-icon="moon""#));
        assert!(!html.contains(r#"class="dark""#));
    }

    #[test]
    fn metadata_override_reaches_head() {
        let html = render_page(&RenderOptions {
            metadata: SiteMetadata {
                title: "Spring Promo".into(),
                description: "Half off aeration".into(),
                lang: "en-US".into(),
            },
            ..Default::default()
        });
        assert!(html.contains("<title>Spring Promo</title>"));
        assert!(html.contains(r#"content="Half off aeration""#));
        assert!(html.contains(r#"lang="en-US""#));
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let html = render_page(&RenderOptions::default());
        let order = [
            "Smart, sustainable grounds maintenance solutions",
            "Standard vs. MaintainME Coverage",
            "Peace of Mind",
            "MaintainME Basic",
            "MaintainME Premium",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| html.find(needle).expect("section text present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

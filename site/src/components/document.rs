//! Root document component - the complete HTML page

use super::LandingPage;
use crate::content::SiteMetadata;
use crate::store::ThemeStore;
use crate::styles::{FONT_STYLESHEET, SITE_CSS};
use leptos::prelude::*;

/// Document shell: metadata, font and stylesheet around the landing page.
///
/// The root element carries the marker class for the store's theme, matching
/// what the store applies in the browser.
#[component]
pub fn SiteDocument(metadata: SiteMetadata, store: ThemeStore) -> impl IntoView {
    let root_class = store.theme().root_class();

    view! {
        <html lang=metadata.lang class=root_class>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{metadata.title}</title>
                <meta name="description" content=metadata.description />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="stylesheet" href=FONT_STYLESHEET />
                <style>{SITE_CSS}</style>
            </head>
            <body class="font-sans antialiased">
                <LandingPage store=store />
            </body>
        </html>
    }
}

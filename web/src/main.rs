// MaintainME landing page - client-side entry point

mod browser;

use browser::BrowserBackend;
use leptos::prelude::*;
use maintainme_site::ThemeStore;
use maintainme_site::components::LandingPage;
use maintainme_site::styles::SITE_CSS;

fn main() {
    console_error_panic_hook::set_once();
    // Store and backend events go to the browser console.
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(|| {
        // Storage is only read here, once an interactive document exists.
        let store = ThemeStore::load(Box::new(BrowserBackend));
        view! {
            <style>{SITE_CSS}</style>
            <LandingPage store=store />
        }
    });
}

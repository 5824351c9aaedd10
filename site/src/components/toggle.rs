//! Fixed-position light/dark toggle button

use super::{Icon, IconId};
use crate::theme::Theme;
use leptos::prelude::*;

/// Shows a sun while dark mode is active and a moon in light mode.
#[component]
pub fn ThemeToggle<F>(#[prop(into)] theme: Signal<Theme>, on_toggle: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            type="button"
            class=move || format!("theme-toggle {}", theme.get().tokens().toggle)
            aria-label="Toggle theme"
            title="Toggle light/dark mode"
            data-role="theme-toggle"
            on:click=move |_| on_toggle()
        >
            {move || {
                let current = theme.get();
                let icon = if current.is_dark() { IconId::Sun } else { IconId::Moon };
                view! { <Icon icon=icon class=current.tokens().toggle_icon /> }
            }}
        </button>
    }
}

//! Service highlight - icon and label in a pill

use super::{Icon, IconId};
use crate::theme::Theme;
use leptos::prelude::*;

/// Pill-shaped highlight shown under the hero tagline.
#[component]
pub fn ServiceHighlight(
    icon: IconId,
    #[prop(into)] text: String,
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    view! {
        <div class=move || format!("service-highlight {}", theme.get().tokens().pill)>
            <Icon icon=icon class="icon text-lime-400" />
            <span class=move || theme.get().tokens().secondary_text>{text}</span>
        </div>
    }
}

//! Feature row - icon plus one line of text

use super::{Icon, IconId};
use crate::theme::Theme;
use leptos::prelude::*;

/// A single feature bullet.
///
/// Empty text is rendered as an empty label.
#[component]
pub fn FeatureRow(
    #[prop(into)] text: String,
    #[prop(into)] theme: Signal<Theme>,
    /// Leading icon
    #[prop(default = IconId::CheckCircle)]
    icon: IconId,
) -> impl IntoView {
    view! {
        <div class="feature-row">
            <Icon icon=icon class="icon text-lime-400" />
            <span class=move || theme.get().tokens().secondary_text>{text}</span>
        </div>
    }
}

//! Plan card - one pricing tier with its feature list

use super::{FeatureRow, Icon, IconId};
use crate::theme::Theme;
use leptos::prelude::*;

/// Tier-dependent part of a plan card. Nothing else on the card depends on
/// the tier flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanCardTreatment {
    /// Heading icon.
    pub icon: IconId,
    /// Extra layout/border classes on the card container.
    pub frame: &'static str,
    /// Corner badge text.
    pub badge: Option<&'static str>,
}

impl PlanCardTreatment {
    /// Treatment for the given tier flag.
    pub fn for_tier(premium: bool) -> Self {
        if premium {
            Self {
                icon: IconId::ShieldCheck,
                frame: "plan-card-premium border-lime-400",
                badge: Some("Recommended"),
            }
        } else {
            Self {
                icon: IconId::Shield,
                frame: "",
                badge: None,
            }
        }
    }

    /// Full class list for the card container under `theme`.
    pub fn container_class(&self, theme: Theme) -> String {
        let tokens = theme.tokens();
        if self.frame.is_empty() {
            format!("card plan-card {}", tokens.card)
        } else {
            format!("card plan-card {} {}", self.frame, tokens.accent_card)
        }
    }
}

/// A pricing tier card. Feature rows appear in input order.
#[component]
pub fn PlanCard(
    #[prop(into)] title: String,
    #[prop(into)] price: String,
    /// Suffix rendered after the price ("/acre/year")
    #[prop(into)]
    billing: String,
    #[prop(into)] description: String,
    /// Small print under the price
    note: Option<String>,
    #[prop(into)] features: Vec<String>,
    #[prop(into)] theme: Signal<Theme>,
    /// Premium tier gets the accent border, shield-check icon and badge
    #[prop(optional)]
    premium: bool,
) -> impl IntoView {
    let treatment = PlanCardTreatment::for_tier(premium);
    let tier = if premium { "premium" } else { "basic" };

    let rows = features
        .into_iter()
        .map(|text| view! { <FeatureRow text=text theme=theme /> })
        .collect::<Vec<_>>();

    view! {
        <div class=move || treatment.container_class(theme.get()) data-tier=tier>
            {treatment.badge.map(|badge| view! {
                <div class="card-badge">
                    <span class="badge badge-lime">{badge}</span>
                </div>
            })}
            <h3 class=move || format!("card-title {}", theme.get().tokens().text)>
                <Icon icon=treatment.icon class="icon-lg text-lime-400" />
                {title}
            </h3>
            <div class="plan-price">
                <span class=move || format!("price {}", theme.get().tokens().text)>{price}</span>
                <span class=move || theme.get().tokens().secondary_text>{billing}</span>
                {note.map(|note| view! {
                    <p class=move || format!("plan-note {}", theme.get().tokens().secondary_text)>
                        {note}
                    </p>
                })}
            </div>
            <p class=move || format!("plan-description {}", theme.get().tokens().secondary_text)>
                {description}
            </p>
            <div class="feature-list">{rows}</div>
        </div>
    }
}

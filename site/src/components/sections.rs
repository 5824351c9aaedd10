//! The four content sections of the landing page, in page order.

use super::{Icon, IconId, PlanCard, ServiceHighlight};
use crate::content::{
    BENEFITS, CoverageColumn, CoverageKind, HIGHLIGHTS, MAINTAINME_COVERAGE, PLANS,
    STANDARD_WARRANTY, TAGLINE,
};
use crate::theme::Theme;
use leptos::prelude::*;

/// Brand heading, tagline and service highlights
#[component]
pub fn Hero(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section class="section hero" id="hero">
            <div class="hero-brand fade-in">
                <Icon icon=IconId::Leaf class="icon-hero text-lime-400" />
                <h1 class=move || format!("hero-title {}", theme.get().tokens().text)>
                    "Maintain"<span class="accent">"ME"</span>
                </h1>
            </div>
            <p class=move || {
                format!("hero-tagline fade-in-delayed {}", theme.get().tokens().secondary_text)
            }>
                {TAGLINE}
            </p>
            <div class="highlights">
                {HIGHLIGHTS
                    .iter()
                    .map(|h| view! { <ServiceHighlight icon=h.icon text=h.text theme=theme /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Standard warranty vs. MaintainME coverage
#[component]
pub fn CoverageComparison(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section class="section" id="coverage">
            <h2 class=move || format!("section-title {}", theme.get().tokens().text)>
                "Standard vs. MaintainME Coverage"
            </h2>
            <div class="grid grid-2 fade-in">
                <CoverageCard column=STANDARD_WARRANTY theme=theme />
                <CoverageCard column=MAINTAINME_COVERAGE theme=theme />
            </div>
        </section>
    }
}

#[component]
fn CoverageCard(column: CoverageColumn, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let kind = column.kind;
    let (badge_class, heading_icon, heading_icon_class, row_icon_class) = match kind {
        CoverageKind::Limited => (
            "badge badge-red",
            IconId::Warning,
            "icon-lg text-red-500",
            "icon text-red-500",
        ),
        CoverageKind::Comprehensive => (
            "badge badge-lime",
            IconId::Shield,
            "icon-lg text-lime-400",
            "icon text-lime-400",
        ),
    };
    let surface = move || {
        let tokens = theme.get().tokens();
        match kind {
            CoverageKind::Limited => format!("card {}", tokens.card),
            CoverageKind::Comprehensive => format!("card border-lime-400 {}", tokens.accent_card),
        }
    };

    let rows = column
        .items
        .iter()
        .map(|item| {
            view! {
                <div class=move || format!("coverage-item {}", theme.get().tokens().inset)>
                    <Icon icon=item.icon class=row_icon_class />
                    <div>
                        <h4 class=move || format!("coverage-item-title {}", theme.get().tokens().text)>
                            {item.title}
                        </h4>
                        <p class=move || theme.get().tokens().secondary_text>{item.detail}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=surface>
            <div class="card-badge">
                <span class=badge_class>{column.badge}</span>
            </div>
            <h3 class=move || format!("card-title {}", theme.get().tokens().text)>
                <Icon icon=heading_icon class=heading_icon_class />
                {column.title}
            </h3>
            <div class="coverage-list">{rows}</div>
        </div>
    }
}

/// "Why choose" benefits grid
#[component]
pub fn Benefits(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section class="section" id="benefits">
            <h2 class=move || format!("section-title {}", theme.get().tokens().text)>
                "Why Choose Maintain"<span class="accent">"ME"</span>"?"
            </h2>
            <div class="grid grid-3 fade-in">
                {BENEFITS
                    .iter()
                    .map(|benefit| view! {
                        <div class=move || format!("card {}", theme.get().tokens().card)>
                            <Icon icon=IconId::CheckCircle class="icon-xl text-lime-400 benefit-icon" />
                            <h3 class=move || format!("benefit-title {}", theme.get().tokens().text)>
                                {benefit.title}
                            </h3>
                            <p class=move || theme.get().tokens().secondary_text>{benefit.detail}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Plan comparison - one card per plan
#[component]
pub fn PlanComparison(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section class="section" id="plans">
            <h2 class=move || format!("section-title {}", theme.get().tokens().text)>
                "Choose Your Maintain"<span class="accent">"ME"</span>" Plan"
            </h2>
            <div class="grid grid-plans fade-in">
                {PLANS
                    .iter()
                    .map(|plan| view! {
                        <PlanCard
                            premium=plan.tier.is_premium()
                            title=plan.name
                            price=plan.price
                            billing=plan.billing
                            description=plan.description
                            note=plan.note.map(String::from)
                            features=plan.feature_list()
                            theme=theme
                        />
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}


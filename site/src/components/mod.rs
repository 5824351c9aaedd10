//! Leptos UI components for the landing page.
//!
//! Every component that paints themed surfaces takes the current theme as a
//! `Signal<Theme>` input and reads its classes from [`crate::theme::Theme::tokens`].
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! └── LandingPage (owns ThemeStore through ThemeHandle)
//!     ├── ThemeToggle
//!     ├── Hero
//!     │   └── ServiceHighlight (per highlight)
//!     ├── CoverageComparison
//!     │   └── CoverageCard (standard, MaintainME)
//!     ├── Benefits
//!     └── PlanComparison
//!         └── PlanCard (per plan)
//!             └── FeatureRow (per feature)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use maintainme_site::components::PlanCard;
//! use maintainme_site::Theme;
//!
//! view! {
//!     <PlanCard
//!         premium=true
//!         title="Premium"
//!         price="$59"
//!         billing="/acre/month"
//!         description="Everything included"
//!         note=None
//!         features=vec!["Regular blade changes".to_string()]
//!         theme=Signal::stored(Theme::Dark)
//!     />
//! }
//! ```

mod document;
mod feature;
mod icons;
mod page;
mod plan_card;
mod sections;
mod service_highlight;
mod toggle;

pub use document::SiteDocument;
pub use feature::FeatureRow;
pub use icons::{Icon, IconId};
pub use page::{LandingPage, ThemeHandle};
pub use plan_card::{PlanCard, PlanCardTreatment};
pub use sections::{Benefits, CoverageComparison, Hero, PlanComparison};
pub use service_highlight::ServiceHighlight;
pub use toggle::ThemeToggle;

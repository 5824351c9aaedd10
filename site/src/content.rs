//! Static page content: metadata, coverage comparison, benefits, plans.
//!
//! Everything here is literal and fixed at build time.

use crate::components::IconId;
use serde::{Deserialize, Serialize};

/// Document title used when configuration does not override it.
pub const SITE_TITLE: &str = "MaintainME - Smart Grounds Maintenance Solutions";

/// Document description used when configuration does not override it.
pub const SITE_DESCRIPTION: &str = "Enterprise-grade maintenance solutions for optimal performance. Sustainable, efficient, and reliable grounds maintenance services.";

/// Hero tagline under the brand heading.
pub const TAGLINE: &str = "Smart, sustainable grounds maintenance solutions";

/// Page-level metadata consumed by the document shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// `<title>` contents.
    pub title: String,
    /// `<meta name="description">` contents.
    pub description: String,
    /// `<html lang>` value.
    pub lang: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            lang: "en".to_string(),
        }
    }
}

// ============================================================================
// Hero highlights
// ============================================================================

/// One pill under the hero tagline.
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    /// Leading icon.
    pub icon: IconId,
    /// Label.
    pub text: &'static str,
}

/// Service highlights, in display order.
pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: IconId::Clock,
        text: "Scheduled inspections",
    },
    Highlight {
        icon: IconId::Lightning,
        text: "Rapid response",
    },
    Highlight {
        icon: IconId::ShieldCheck,
        text: "Parts and labor covered",
    },
    Highlight {
        icon: IconId::Leaf,
        text: "Sustainable care",
    },
];

// ============================================================================
// Warranty comparison
// ============================================================================

/// Which side of the comparison a column is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageKind {
    /// Standard manufacturer warranty (red accents).
    Limited,
    /// MaintainME coverage (lime accents, accent border).
    Comprehensive,
}

/// One row inside a coverage column.
#[derive(Debug, Clone, Copy)]
pub struct CoverageItem {
    /// Leading icon.
    pub icon: IconId,
    /// Row heading.
    pub title: &'static str,
    /// Row body.
    pub detail: &'static str,
}

/// One column of the warranty comparison.
#[derive(Debug, Clone, Copy)]
pub struct CoverageColumn {
    /// Column heading.
    pub title: &'static str,
    /// Corner badge.
    pub badge: &'static str,
    /// Limited or comprehensive.
    pub kind: CoverageKind,
    /// Rows in display order.
    pub items: &'static [CoverageItem],
}

/// Standard warranty column.
pub const STANDARD_WARRANTY: CoverageColumn = CoverageColumn {
    title: "Standard Warranty",
    badge: "Limited Coverage",
    kind: CoverageKind::Limited,
    items: &[
        CoverageItem {
            icon: IconId::WarningCircle,
            title: "Limited Defect Coverage",
            detail: "Only covers manufacturer defects, excluding wear and tear.",
        },
        CoverageItem {
            icon: IconId::WarningCircle,
            title: "No Proactive Maintenance",
            detail: "No scheduled inspections or preventative actions.",
        },
        CoverageItem {
            icon: IconId::WarningCircle,
            title: "Delayed Response Time",
            detail: "Typically responds within 48 hours, with no guaranteed timeframe.",
        },
        CoverageItem {
            icon: IconId::CurrencyDollar,
            title: "Unexpected Costs",
            detail: "Additional fees for labor and parts not included.",
        },
    ],
};

/// MaintainME coverage column.
pub const MAINTAINME_COVERAGE: CoverageColumn = CoverageColumn {
    title: "MaintainME Coverage",
    badge: "Comprehensive Care",
    kind: CoverageKind::Comprehensive,
    items: &[
        CoverageItem {
            icon: IconId::CheckCircle,
            title: "Comprehensive Protection",
            detail: "Covers wear, tear, and manufacturer defects.",
        },
        CoverageItem {
            icon: IconId::CheckCircle,
            title: "Proactive Maintenance",
            detail: "Scheduled inspections and preventative maintenance included.",
        },
        CoverageItem {
            icon: IconId::CheckCircle,
            title: "Rapid Response",
            detail: "Guaranteed response within 48 hours, striving for 24-hour support.",
        },
        CoverageItem {
            icon: IconId::CheckCircle,
            title: "All-Inclusive Pricing",
            detail: "No hidden fees; all parts and labor included in Premium plans.",
        },
    ],
};

// ============================================================================
// Benefits
// ============================================================================

/// One tile of the benefits grid.
#[derive(Debug, Clone, Copy)]
pub struct Benefit {
    /// Tile heading.
    pub title: &'static str,
    /// Tile body.
    pub detail: &'static str,
}

/// Benefits, in display order.
pub const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Proactive Maintenance",
        detail: "Stay ahead with regular inspections and preventative care to minimize downtime.",
    },
    Benefit {
        title: "Cost-Effectiveness",
        detail: "Predictable monthly expenses with no surprise charges for parts or labor.",
    },
    Benefit {
        title: "Expert Support",
        detail: "Get assistance from our knowledgeable technicians whenever needed.",
    },
    Benefit {
        title: "Peace of Mind",
        detail: "Focus on your core business while we ensure your equipment runs smoothly.",
    },
];

// ============================================================================
// Plans
// ============================================================================

/// Pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Entry tier.
    Basic,
    /// Recommended all-inclusive tier.
    Premium,
}

impl PlanTier {
    /// Whether the card gets the premium treatment.
    pub fn is_premium(self) -> bool {
        matches!(self, PlanTier::Premium)
    }
}

/// A hardcoded pricing tier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Plan {
    /// Tier.
    pub tier: PlanTier,
    /// Display name.
    pub name: &'static str,
    /// Headline price.
    pub price: &'static str,
    /// Suffix after the price ("/acre/year").
    pub billing: &'static str,
    /// One-line pitch.
    pub description: &'static str,
    /// Small print under the price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    /// Feature bullets in display order.
    pub features: &'static [&'static str],
}

impl Plan {
    /// Features as owned strings, in order.
    pub fn feature_list(&self) -> Vec<String> {
        self.features.iter().map(|f| f.to_string()).collect()
    }
}

/// Basic plan.
pub const BASIC_PLAN: Plan = Plan {
    tier: PlanTier::Basic,
    name: "MaintainME Basic",
    price: "$249",
    billing: "/acre/year",
    description: "Essential coverage with discounted services for cost-conscious operations",
    note: None,
    features: &[
        "Priority service access with discounted rates ($90/hr vs $150/hr)",
        "Annual blade replacement included",
        "50% off winter servicing",
        "Access to mower loan program",
        "Basic fleet monitoring",
        "Warranty processing assistance",
        "Pay-as-you-go service model",
    ],
};

/// Premium plan.
pub const PREMIUM_PLAN: Plan = Plan {
    tier: PlanTier::Premium,
    name: "MaintainME Premium",
    price: "$59",
    billing: "/acre/month",
    description: "Comprehensive coverage with rapid response and all-inclusive service",
    note: Some(
        "10-month billing cycle ($590/acre/year, 4 months half off for Tennessee transition zone) $100 for the first acre",
    ),
    features: &[
        "24/7 monitoring & rapid response (within 48 hours)",
        "All labor included - no hourly charges",
        "Monthly manager check-ins",
        "Comprehensive winter storage & servicing",
        "Advanced fleet monitoring & analytics",
        "Quarterly maintenance included",
        "All software updates & service bulletins",
        "Regular blade changes",
        "Annual inspection & full cleaning",
    ],
};

/// Both plans, in display order.
pub const PLANS: [Plan; 2] = [BASIC_PLAN, PREMIUM_PLAN];

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::super::catalog::Metric;

/// Narrative an investor pitch can credibly lean on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessCategory {
    ExcitingGrowthPotential,
    UpcomingProfitabilityPerspectives,
    SignificantMarketConfirmation,
}

impl ReadinessCategory {
    /// Qualifying members of the group needed to claim the category.
    pub const MIN_QUALIFIERS: usize = 2;

    pub const fn ordered() -> [Self; 3] {
        [
            Self::ExcitingGrowthPotential,
            Self::UpcomingProfitabilityPerspectives,
            Self::SignificantMarketConfirmation,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ExcitingGrowthPotential => "exciting growth potential",
            Self::UpcomingProfitabilityPerspectives => "upcoming profitability perspectives",
            Self::SignificantMarketConfirmation => "significant market confirmation",
        }
    }

    pub const fn members(self) -> &'static [Metric] {
        match self {
            Self::ExcitingGrowthPotential => &[
                Metric::ArrGrowth,
                Metric::LateStagePipelineGrowth,
                Metric::FullyRampedQuotaCarriers,
                Metric::AcvExpansion,
            ],
            Self::UpcomingProfitabilityPerspectives => &[
                Metric::CacPayback,
                Metric::BurnMultiple,
                Metric::Repeatability,
            ],
            Self::SignificantMarketConfirmation => &[
                Metric::Arr,
                Metric::NetRevenueRetention,
                Metric::Repeatability,
            ],
        }
    }

    pub fn is_satisfied(self, qualifies: &BTreeMap<Metric, bool>) -> bool {
        self.members()
            .iter()
            .filter(|metric| qualifies.get(*metric).copied().unwrap_or(false))
            .count()
            >= Self::MIN_QUALIFIERS
    }
}

impl fmt::Display for ReadinessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every rule is checked against the same map, so one metric can feed
/// several categories.
pub fn compute_categories(qualifies: &BTreeMap<Metric, bool>) -> Vec<ReadinessCategory> {
    ReadinessCategory::ordered()
        .into_iter()
        .filter(|category| category.is_satisfied(qualifies))
        .collect()
}

pub const NOT_READY_HEADLINE: &str =
    "You are not ready to raise a Series A round but are doing so based on feels.";

pub fn headline(categories: &[ReadinessCategory]) -> String {
    if categories.is_empty() {
        return NOT_READY_HEADLINE.to_string();
    }
    let joined = categories
        .iter()
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(" & ");
    format!("You are raising a Series A round based on {joined}.")
}

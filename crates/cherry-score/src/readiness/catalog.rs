use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validation::ScoringError;

/// The nine growth metrics assessed by the readiness form, in form order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Arr,
    ArrGrowth,
    LateStagePipelineGrowth,
    FullyRampedQuotaCarriers,
    NetRevenueRetention,
    AcvExpansion,
    Repeatability,
    CacPayback,
    BurnMultiple,
}

impl Metric {
    pub const COUNT: usize = 9;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Arr,
            Self::ArrGrowth,
            Self::LateStagePipelineGrowth,
            Self::FullyRampedQuotaCarriers,
            Self::NetRevenueRetention,
            Self::AcvExpansion,
            Self::Repeatability,
            Self::CacPayback,
            Self::BurnMultiple,
        ]
    }

    /// Zero-based position in the form; the form numbers metrics from one.
    pub const fn index(self) -> usize {
        match self {
            Self::Arr => 0,
            Self::ArrGrowth => 1,
            Self::LateStagePipelineGrowth => 2,
            Self::FullyRampedQuotaCarriers => 3,
            Self::NetRevenueRetention => 4,
            Self::AcvExpansion => 5,
            Self::Repeatability => 6,
            Self::CacPayback => 7,
            Self::BurnMultiple => 8,
        }
    }

    /// Name used in qualification rules and advice text.
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Arr => "arr",
            Self::ArrGrowth => "arr_growth",
            Self::LateStagePipelineGrowth => "late_stage_pipeline_growth",
            Self::FullyRampedQuotaCarriers => "fully_ramped_quota_carriers",
            Self::NetRevenueRetention => "net_revenue_retention",
            Self::AcvExpansion => "acv_expansion",
            Self::Repeatability => "repeatability",
            Self::CacPayback => "cac_payback",
            Self::BurnMultiple => "burn_multiple",
        }
    }

    pub fn definition(self) -> &'static MetricDefinition {
        &CATALOG[self.index()]
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ScoringError;

    /// Accepts the display name ("ARR Growth"), the form title
    /// ("Net Revenue Retention (NRR)") or the key in snake or kebab case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let as_key = trimmed.to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ordered()
            .into_iter()
            .find(|metric| {
                let definition = metric.definition();
                definition.name.eq_ignore_ascii_case(trimmed)
                    || definition.title.eq_ignore_ascii_case(trimmed)
                    || metric.key() == as_key
            })
            .ok_or_else(|| ScoringError::UnknownMetric {
                name: raw.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// Which end of the domain maps to a score of 10.
///
/// Independent of [`Direction`]: Fully Ramped Quota Carriers qualifies when
/// low but still normalizes ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Millions,
    Percent,
    Months,
    Multiple,
}

impl Unit {
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Millions => format!("{value:.2}m"),
            Self::Percent => format!("{value:.0}%"),
            Self::Months => format!("{value:.1} months"),
            Self::Multiple => format!("{value:.2}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRule {
    pub min: f64,
    pub max: f64,
    pub direction: Direction,
    pub threshold: f64,
    pub normalization: Normalization,
    pub unit: Unit,
    /// Slider starting position.
    pub default: f64,
    pub step: f64,
}

impl NumericRule {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoricalOption {
    pub label: &'static str,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoricalRule {
    pub options: &'static [CategoricalOption],
    pub qualifying_option: &'static str,
    pub default_index: usize,
}

impl CategoricalRule {
    pub fn option(&self, label: &str) -> Option<&'static CategoricalOption> {
        self.options
            .iter()
            .find(|option| option.label.eq_ignore_ascii_case(label.trim()))
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.options.iter().map(|option| option.label).collect()
    }

    pub fn default_label(&self) -> &'static str {
        self.options
            .get(self.default_index)
            .or_else(|| self.options.first())
            .map(|option| option.label)
            .unwrap_or(self.qualifying_option)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricKind {
    Numeric(NumericRule),
    Categorical(CategoricalRule),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDefinition {
    pub metric: Metric,
    pub name: &'static str,
    /// Heading shown above the slider.
    pub title: &'static str,
    pub kind: MetricKind,
}

/// Read-only lookup into the static catalog.
pub fn definition(metric: Metric) -> &'static MetricDefinition {
    metric.definition()
}

pub fn catalog() -> &'static [MetricDefinition; Metric::COUNT] {
    &CATALOG
}

const REPEATABILITY_OPTIONS: [CategoricalOption; 3] = [
    CategoricalOption {
        label: "Early",
        score: 0.0,
    },
    CategoricalOption {
        label: "Moderate",
        score: 5.0,
    },
    CategoricalOption {
        label: "Strong",
        score: 10.0,
    },
];

static CATALOG: [MetricDefinition; Metric::COUNT] = [
    MetricDefinition {
        metric: Metric::Arr,
        name: "ARR",
        title: "Annual Recurring Revenue (ARR)",
        kind: MetricKind::Numeric(NumericRule {
            min: 1.0,
            max: 3.0,
            direction: Direction::HigherIsBetter,
            threshold: 2.25,
            normalization: Normalization::Ascending,
            unit: Unit::Millions,
            default: 1.0,
            step: 0.01,
        }),
    },
    MetricDefinition {
        metric: Metric::ArrGrowth,
        name: "ARR Growth",
        title: "ARR Growth",
        kind: MetricKind::Numeric(NumericRule {
            min: 150.0,
            max: 500.0,
            direction: Direction::HigherIsBetter,
            threshold: 375.0,
            normalization: Normalization::Ascending,
            unit: Unit::Percent,
            default: 150.0,
            step: 10.0,
        }),
    },
    MetricDefinition {
        metric: Metric::LateStagePipelineGrowth,
        name: "Late Stage Pipeline Growth",
        title: "Late Stage Pipeline Growth",
        kind: MetricKind::Numeric(NumericRule {
            min: 100.0,
            max: 300.0,
            direction: Direction::HigherIsBetter,
            threshold: 225.0,
            normalization: Normalization::Ascending,
            unit: Unit::Percent,
            default: 100.0,
            step: 10.0,
        }),
    },
    MetricDefinition {
        metric: Metric::FullyRampedQuotaCarriers,
        name: "Fully Ramped Quota Carriers",
        title: "Fully Ramped Quota Carriers",
        kind: MetricKind::Numeric(NumericRule {
            min: 0.0,
            max: 3.0,
            direction: Direction::LowerIsBetter,
            threshold: 1.0,
            // Ascending despite LowerIsBetter; the published scores depend on it.
            normalization: Normalization::Ascending,
            unit: Unit::Months,
            default: 0.0,
            step: 0.1,
        }),
    },
    MetricDefinition {
        metric: Metric::NetRevenueRetention,
        name: "Net Revenue Retention",
        title: "Net Revenue Retention (NRR)",
        kind: MetricKind::Numeric(NumericRule {
            min: 100.0,
            max: 300.0,
            direction: Direction::HigherIsBetter,
            threshold: 250.0,
            normalization: Normalization::Ascending,
            unit: Unit::Percent,
            default: 100.0,
            step: 10.0,
        }),
    },
    MetricDefinition {
        metric: Metric::AcvExpansion,
        name: "ACV Expansion",
        title: "ACV Expansion",
        kind: MetricKind::Numeric(NumericRule {
            min: 15.0,
            max: 50.0,
            direction: Direction::HigherIsBetter,
            threshold: 35.0,
            normalization: Normalization::Ascending,
            unit: Unit::Percent,
            default: 15.0,
            step: 1.0,
        }),
    },
    MetricDefinition {
        metric: Metric::Repeatability,
        name: "Repeatability",
        title: "Repeatability",
        kind: MetricKind::Categorical(CategoricalRule {
            options: &REPEATABILITY_OPTIONS,
            qualifying_option: "Strong",
            default_index: 0,
        }),
    },
    MetricDefinition {
        metric: Metric::CacPayback,
        name: "CAC Payback",
        title: "CAC Payback",
        kind: MetricKind::Numeric(NumericRule {
            min: 6.0,
            max: 15.0,
            direction: Direction::LowerIsBetter,
            threshold: 9.0,
            normalization: Normalization::Descending,
            unit: Unit::Months,
            default: 15.0,
            step: 0.1,
        }),
    },
    MetricDefinition {
        metric: Metric::BurnMultiple,
        name: "Burn Multiple",
        title: "Burn Multiple",
        kind: MetricKind::Numeric(NumericRule {
            min: 1.5,
            max: 2.0,
            direction: Direction::LowerIsBetter,
            threshold: 1.7,
            normalization: Normalization::Descending,
            unit: Unit::Multiple,
            default: 2.0,
            step: 0.01,
        }),
    },
];

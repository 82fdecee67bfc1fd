use serde::{Deserialize, Serialize};

use super::catalog::{Metric, MetricKind};
use super::domain::MetricValue;

/// A value as it arrives from a caller, before it is checked against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMetricValue {
    Number(f64),
    Label(String),
}

impl From<f64> for RawMetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawMetricValue {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

/// Why a provided value falls outside its metric's declared domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainViolation {
    #[error("{metric} value {value} is outside [{min}, {max}]")]
    OutOfRange {
        metric: Metric,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{metric} value must be a finite number")]
    NotFinite { metric: Metric },
    #[error("{metric} option '{label}' is not one of {options:?}")]
    UnknownOption {
        metric: Metric,
        label: String,
        options: Vec<&'static str>,
    },
    #[error("{metric} expects a {expected} value")]
    KindMismatch {
        metric: Metric,
        expected: &'static str,
    },
}

/// Local validation failure; aborts the whole evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("unknown metric '{name}'")]
    UnknownMetric { name: String },
    #[error("{metric} was supplied more than once")]
    DuplicateMetric { metric: Metric },
    #[error(transparent)]
    Domain(#[from] DomainViolation),
}

impl ScoringError {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownMetric { .. } => "unknown_metric",
            Self::DuplicateMetric { .. } => "duplicate_metric",
            Self::Domain(_) => "domain",
        }
    }
}

/// Check a raw value against the catalog entry for `metric`.
///
/// Numeric bounds are inclusive. Labels match case-insensitively and are
/// canonicalised to the catalog spelling.
pub fn validate(metric: Metric, raw: &RawMetricValue) -> Result<MetricValue, ScoringError> {
    match (&metric.definition().kind, raw) {
        (MetricKind::Numeric(rule), RawMetricValue::Number(value)) => {
            let value = *value;
            if !value.is_finite() {
                return Err(DomainViolation::NotFinite { metric }.into());
            }
            if !rule.contains(value) {
                return Err(DomainViolation::OutOfRange {
                    metric,
                    value,
                    min: rule.min,
                    max: rule.max,
                }
                .into());
            }
            Ok(MetricValue::Number(value))
        }
        (MetricKind::Categorical(rule), RawMetricValue::Label(label)) => rule
            .option(label)
            .map(|option| MetricValue::Label(option.label))
            .ok_or_else(|| {
                DomainViolation::UnknownOption {
                    metric,
                    label: label.clone(),
                    options: rule.labels(),
                }
                .into()
            }),
        (MetricKind::Numeric(_), RawMetricValue::Label(_)) => Err(DomainViolation::KindMismatch {
            metric,
            expected: "numeric",
        }
        .into()),
        (MetricKind::Categorical(_), RawMetricValue::Number(_)) => {
            Err(DomainViolation::KindMismatch {
                metric,
                expected: "categorical",
            }
            .into())
        }
    }
}

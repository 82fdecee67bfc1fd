use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::catalog::{Metric, MetricKind};
use super::validation::{validate, RawMetricValue, ScoringError};

/// Caller-supplied metrics keyed by name; `None` marks an explicit skip.
pub type RawMetricMap = BTreeMap<String, Option<RawMetricValue>>;

/// Deserialize a [`RawMetricMap`], failing when a key appears twice instead
/// of keeping the last value.
pub fn deserialize_unique_metrics<'de, D>(deserializer: D) -> Result<RawMetricMap, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueKeys;

    impl<'de> Visitor<'de> for UniqueKeys {
        type Value = RawMetricMap;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of metric names to numbers, labels, or null")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut metrics = RawMetricMap::new();
            while let Some((name, value)) =
                access.next_entry::<String, Option<RawMetricValue>>()?
            {
                if metrics.contains_key(&name) {
                    return Err(serde::de::Error::custom(format!(
                        "metric '{name}' appears more than once"
                    )));
                }
                metrics.insert(name, value);
            }
            Ok(metrics)
        }
    }

    deserializer.deserialize_map(UniqueKeys)
}

/// A value that has passed validation against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Label(&'static str),
}

impl MetricValue {
    /// Render with the unit the form slider uses.
    pub fn display(&self, metric: Metric) -> String {
        match (self, &metric.definition().kind) {
            (Self::Number(value), MetricKind::Numeric(rule)) => rule.unit.format(*value),
            (Self::Number(value), MetricKind::Categorical(_)) => value.to_string(),
            (Self::Label(label), _) => (*label).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "value")]
pub enum MetricInput {
    Provided(MetricValue),
    Skipped,
}

impl MetricInput {
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    pub const fn value(&self) -> Option<&MetricValue> {
        match self {
            Self::Provided(value) => Some(value),
            Self::Skipped => None,
        }
    }
}

/// What to do with a metric the caller did not mention at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMetricPolicy {
    #[default]
    Skip,
    FormDefault,
}

impl MissingMetricPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skip" | "skipped" => Some(Self::Skip),
            "default" | "form_default" | "form-default" => Some(Self::FormDefault),
            _ => None,
        }
    }
}

impl fmt::Display for MissingMetricPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str("skip"),
            Self::FormDefault => f.write_str("default"),
        }
    }
}

/// One validated input per catalog metric. Every metric starts skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricInputs {
    entries: [MetricInput; Metric::COUNT],
}

impl Default for MetricInputs {
    fn default() -> Self {
        Self {
            entries: [MetricInput::Skipped; Metric::COUNT],
        }
    }
}

impl MetricInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a value for `metric`.
    pub fn provide(
        &mut self,
        metric: Metric,
        raw: impl Into<RawMetricValue>,
    ) -> Result<&mut Self, ScoringError> {
        let value = validate(metric, &raw.into())?;
        self.entries[metric.index()] = MetricInput::Provided(value);
        Ok(self)
    }

    pub fn skip(&mut self, metric: Metric) -> &mut Self {
        self.entries[metric.index()] = MetricInput::Skipped;
        self
    }

    pub fn get(&self, metric: Metric) -> &MetricInput {
        &self.entries[metric.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &MetricInput)> + '_ {
        Metric::ordered()
            .into_iter()
            .map(move |metric| (metric, &self.entries[metric.index()]))
    }

    /// Build inputs from a name-keyed map. Any unknown name or invalid value
    /// rejects the whole map.
    pub fn from_raw(raw: &RawMetricMap, missing: MissingMetricPolicy) -> Result<Self, ScoringError> {
        let mut seen = BTreeSet::new();
        let mut inputs = match missing {
            MissingMetricPolicy::Skip => Self::new(),
            MissingMetricPolicy::FormDefault => FormState::default().inputs(),
        };

        for (name, value) in raw {
            let metric: Metric = name.parse()?;
            if !seen.insert(metric) {
                return Err(ScoringError::DuplicateMetric { metric });
            }
            match value {
                Some(value) => {
                    inputs.provide(metric, value.clone())?;
                }
                None => {
                    inputs.skip(metric);
                }
            }
        }

        Ok(inputs)
    }
}

/// Per-session skip toggles. Owned by the caller and passed into each
/// evaluation; the engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipFlags {
    skipped: BTreeSet<Metric>,
}

impl SkipFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag and return the new state.
    pub fn toggle(&mut self, metric: Metric) -> bool {
        if self.skipped.remove(&metric) {
            false
        } else {
            self.skipped.insert(metric);
            true
        }
    }

    pub fn set(&mut self, metric: Metric, skipped: bool) {
        if skipped {
            self.skipped.insert(metric);
        } else {
            self.skipped.remove(&metric);
        }
    }

    pub fn is_skipped(&self, metric: Metric) -> bool {
        self.skipped.contains(&metric)
    }

    pub fn iter(&self) -> impl Iterator<Item = Metric> + '_ {
        self.skipped.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Slider positions plus skip toggles, as a form session holds them.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: [MetricValue; Metric::COUNT],
    pub skips: SkipFlags,
}

impl Default for FormState {
    fn default() -> Self {
        let values = Metric::ordered().map(|metric| match &metric.definition().kind {
            MetricKind::Numeric(rule) => MetricValue::Number(rule.default),
            MetricKind::Categorical(rule) => MetricValue::Label(rule.default_label()),
        });
        Self {
            values,
            skips: SkipFlags::new(),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, metric: Metric) -> MetricValue {
        self.values[metric.index()]
    }

    /// Move a slider. The skip flag is left untouched.
    pub fn set(
        &mut self,
        metric: Metric,
        raw: impl Into<RawMetricValue>,
    ) -> Result<(), ScoringError> {
        self.values[metric.index()] = validate(metric, &raw.into())?;
        Ok(())
    }

    /// Apply a name-keyed map: values move sliders and clear the skip flag,
    /// `None` sets it.
    pub fn apply(&mut self, raw: &RawMetricMap) -> Result<(), ScoringError> {
        let mut staged = self.clone();
        let mut seen = BTreeSet::new();
        for (name, value) in raw {
            let metric: Metric = name.parse()?;
            if !seen.insert(metric) {
                return Err(ScoringError::DuplicateMetric { metric });
            }
            match value {
                Some(value) => {
                    staged.set(metric, value.clone())?;
                    staged.skips.set(metric, false);
                }
                None => staged.skips.set(metric, true),
            }
        }
        *self = staged;
        Ok(())
    }

    pub fn inputs(&self) -> MetricInputs {
        let mut inputs = MetricInputs::new();
        for metric in Metric::ordered() {
            inputs.entries[metric.index()] = if self.skips.is_skipped(metric) {
                MetricInput::Skipped
            } else {
                MetricInput::Provided(self.values[metric.index()])
            };
        }
        inputs
    }
}

use super::super::catalog::{Direction, MetricDefinition, MetricKind, Normalization};
use super::super::domain::{MetricInput, MetricValue};

/// Linear map of a raw value onto 0..=10. `None` when skipped.
///
/// No clamping: a value outside the domain yields a score outside 0..=10.
pub fn normalize(definition: &MetricDefinition, input: &MetricInput) -> Option<f64> {
    let value = input.value()?;
    match (&definition.kind, value) {
        (MetricKind::Numeric(rule), MetricValue::Number(v)) => Some(match rule.normalization {
            Normalization::Ascending => (v - rule.min) / (rule.max - rule.min) * 10.0,
            Normalization::Descending => (rule.max - v) / (rule.max - rule.min) * 10.0,
        }),
        (MetricKind::Categorical(rule), MetricValue::Label(label)) => {
            rule.option(label).map(|option| option.score)
        }
        _ => None,
    }
}

/// Threshold check. Skipped metrics never qualify.
pub fn qualifies(definition: &MetricDefinition, input: &MetricInput) -> bool {
    let Some(value) = input.value() else {
        return false;
    };
    match (&definition.kind, value) {
        (MetricKind::Numeric(rule), MetricValue::Number(v)) => match rule.direction {
            Direction::HigherIsBetter => *v >= rule.threshold,
            Direction::LowerIsBetter => *v <= rule.threshold,
        },
        (MetricKind::Categorical(rule), MetricValue::Label(label)) => {
            rule.qualifying_option.eq_ignore_ascii_case(label)
        }
        _ => false,
    }
}

/// Mean of the present scores; exactly 0 when every metric was skipped.
pub fn average_score<I>(scores: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = scores
        .into_iter()
        .flatten()
        .fold((0.0_f64, 0_usize), |(sum, count), score| (sum + score, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

mod advice;
mod categories;
mod rules;

pub use advice::{generate_advice, Advice, RECOMMENDATIONS};
pub use categories::{compute_categories, headline, ReadinessCategory, NOT_READY_HEADLINE};
pub use rules::{average_score, normalize, qualifies};

use super::catalog::Metric;
use super::domain::{MetricInput, MetricInputs, MissingMetricPolicy, RawMetricMap};
use super::report::views::ScoreReport;
use super::validation::ScoringError;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Stateless evaluator; each call recomputes the full bundle from its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    missing_metrics: MissingMetricPolicy,
}

impl ScoringEngine {
    pub fn new(missing_metrics: MissingMetricPolicy) -> Self {
        Self { missing_metrics }
    }

    pub fn missing_metrics(&self) -> MissingMetricPolicy {
        self.missing_metrics
    }

    pub fn evaluate(&self, inputs: &MetricInputs) -> ScoreResult {
        evaluate(inputs)
    }

    /// Validate a name-keyed map first; nothing is scored if any entry is bad.
    pub fn evaluate_raw(&self, raw: &RawMetricMap) -> Result<ScoreResult, ScoringError> {
        let inputs = MetricInputs::from_raw(raw, self.missing_metrics)?;
        Ok(self.evaluate(&inputs))
    }
}

pub fn evaluate(inputs: &MetricInputs) -> ScoreResult {
    let outcomes: Vec<MetricOutcome> = inputs
        .iter()
        .map(|(metric, input)| {
            let definition = metric.definition();
            MetricOutcome {
                metric,
                name: definition.name,
                input: *input,
                score: normalize(definition, input),
                qualifies: qualifies(definition, input),
            }
        })
        .collect();

    let average_score = average_score(outcomes.iter().map(|outcome| outcome.score));
    let qualification = outcomes
        .iter()
        .map(|outcome| (outcome.metric, outcome.qualifies))
        .collect::<BTreeMap<_, _>>();
    let categories = compute_categories(&qualification);
    let advice = generate_advice(&outcomes);

    debug!(
        average_score,
        skipped = outcomes.iter().filter(|o| o.input.is_skipped()).count(),
        categories = categories.len(),
        "evaluated readiness metrics"
    );

    ScoreResult {
        outcomes,
        average_score,
        categories,
        advice,
    }
}

/// Score and qualification for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricOutcome {
    pub metric: Metric,
    pub name: &'static str,
    pub input: MetricInput,
    pub score: Option<f64>,
    pub qualifies: bool,
}

/// Result bundle for one evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub outcomes: Vec<MetricOutcome>,
    /// The Cherry Score.
    pub average_score: f64,
    pub categories: Vec<ReadinessCategory>,
    pub advice: Advice,
}

impl ScoreResult {
    pub fn outcome(&self, metric: Metric) -> Option<&MetricOutcome> {
        self.outcomes.iter().find(|outcome| outcome.metric == metric)
    }

    pub fn score(&self, metric: Metric) -> Option<f64> {
        self.outcome(metric).and_then(|outcome| outcome.score)
    }

    pub fn qualifies(&self, metric: Metric) -> bool {
        self.outcome(metric)
            .map(|outcome| outcome.qualifies)
            .unwrap_or(false)
    }

    pub fn normalized_scores(&self) -> BTreeMap<Metric, Option<f64>> {
        self.outcomes
            .iter()
            .map(|outcome| (outcome.metric, outcome.score))
            .collect()
    }

    pub fn qualifications(&self) -> BTreeMap<Metric, bool> {
        self.outcomes
            .iter()
            .map(|outcome| (outcome.metric, outcome.qualifies))
            .collect()
    }

    pub fn headline(&self) -> String {
        headline(&self.categories)
    }

    pub fn score_line(&self) -> String {
        format!("Your overall Cherry Score: {:.2}/10", self.average_score)
    }

    pub fn report(&self) -> ScoreReport {
        ScoreReport::from_result(self)
    }
}

use super::super::catalog::{catalog, Direction, Metric, MetricKind, Normalization, Unit};
use super::super::engine::{ReadinessCategory, ScoreResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricScoreView {
    pub position: usize,
    pub metric: Metric,
    pub name: &'static str,
    pub title: &'static str,
    pub skipped: bool,
    pub value: Option<String>,
    pub score: Option<f64>,
    pub qualifies: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdviceView {
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub strength_text: String,
    pub weakness_text: Vec<String>,
    pub recommendations: &'static str,
    pub markdown: String,
}

/// Serialized response for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub metrics: Vec<MetricScoreView>,
    pub average_score: f64,
    pub score_line: String,
    pub categories: Vec<ReadinessCategory>,
    pub category_labels: Vec<&'static str>,
    pub headline: String,
    pub ready: bool,
    pub advice: AdviceView,
}

impl ScoreReport {
    pub fn from_result(result: &ScoreResult) -> Self {
        let metrics = result
            .outcomes
            .iter()
            .map(|outcome| MetricScoreView {
                position: outcome.metric.index() + 1,
                metric: outcome.metric,
                name: outcome.name,
                title: outcome.metric.definition().title,
                skipped: outcome.input.is_skipped(),
                value: outcome
                    .input
                    .value()
                    .map(|value| value.display(outcome.metric)),
                score: outcome.score,
                qualifies: outcome.qualifies,
            })
            .collect();

        let advice = &result.advice;
        Self {
            metrics,
            average_score: result.average_score,
            score_line: result.score_line(),
            categories: result.categories.clone(),
            category_labels: result.categories.iter().map(|c| c.label()).collect(),
            headline: result.headline(),
            ready: !result.categories.is_empty(),
            advice: AdviceView {
                strengths: advice.strengths.iter().map(|m| m.name()).collect(),
                weaknesses: advice.weaknesses.iter().map(|m| m.name()).collect(),
                strength_text: advice.strength_text.clone(),
                weakness_text: advice.weakness_text.clone(),
                recommendations: advice.recommendations,
                markdown: advice.to_markdown(),
            },
        }
    }
}

/// Catalog row for clients that draw their own form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntryView {
    pub position: usize,
    pub metric: Metric,
    pub name: &'static str,
    pub title: &'static str,
    #[serde(flatten)]
    pub rule: CatalogRuleView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogRuleView {
    Numeric {
        min: f64,
        max: f64,
        direction: Direction,
        threshold: f64,
        normalization: Normalization,
        unit: Unit,
        default: f64,
        step: f64,
    },
    Categorical {
        options: Vec<CategoricalOptionView>,
        qualifying_option: &'static str,
        default: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalOptionView {
    pub label: &'static str,
    pub score: f64,
}

pub fn catalog_view() -> Vec<CatalogEntryView> {
    catalog()
        .iter()
        .map(|definition| {
            let rule = match &definition.kind {
                MetricKind::Numeric(rule) => CatalogRuleView::Numeric {
                    min: rule.min,
                    max: rule.max,
                    direction: rule.direction,
                    threshold: rule.threshold,
                    normalization: rule.normalization,
                    unit: rule.unit,
                    default: rule.default,
                    step: rule.step,
                },
                MetricKind::Categorical(rule) => CatalogRuleView::Categorical {
                    options: rule
                        .options
                        .iter()
                        .map(|option| CategoricalOptionView {
                            label: option.label,
                            score: option.score,
                        })
                        .collect(),
                    qualifying_option: rule.qualifying_option,
                    default: rule.default_label(),
                },
            };
            CatalogEntryView {
                position: definition.metric.index() + 1,
                metric: definition.metric,
                name: definition.name,
                title: definition.title,
                rule,
            }
        })
        .collect()
}

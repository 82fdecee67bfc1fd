//! Series A readiness scoring.
//!
//! The catalog fixes the nine metrics and their rules. The engine turns
//! validated inputs (or skip markers) into per-metric scores, quartile
//! qualification, the averaged Cherry Score, narrative categories, and advice.
//! Every evaluation is a pure function of its inputs.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod report;
pub mod router;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{
    catalog, definition, CategoricalOption, CategoricalRule, Direction, Metric, MetricDefinition,
    MetricKind, Normalization, NumericRule, Unit,
};
pub use domain::{
    FormState, MetricInput, MetricInputs, MetricValue, MissingMetricPolicy, RawMetricMap,
    SkipFlags,
};
pub use engine::{
    average_score, compute_categories, evaluate, generate_advice, headline, normalize, qualifies,
    Advice, MetricOutcome, ReadinessCategory, ScoreResult, ScoringEngine, NOT_READY_HEADLINE,
    RECOMMENDATIONS,
};
pub use report::{catalog_view, CatalogEntryView, CatalogRuleView, MetricScoreView, ScoreReport};
pub use router::{scoring_router, ScoreRequest};
pub use validation::{validate, DomainViolation, RawMetricValue, ScoringError};

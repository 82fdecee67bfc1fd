pub mod views;

pub use views::{
    catalog_view, AdviceView, CatalogEntryView, CatalogRuleView, CategoricalOptionView,
    MetricScoreView, ScoreReport,
};

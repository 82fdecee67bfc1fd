use cherry_score::config::ScoringConfig;
use cherry_score::readiness::{Metric, ScoringEngine};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn scoring_engine(config: &ScoringConfig) -> Arc<ScoringEngine> {
    Arc::new(ScoringEngine::new(config.missing_metrics))
}

/// Accepts display names, titles, or snake/kebab case keys.
pub(crate) fn parse_metric(raw: &str) -> Result<Metric, String> {
    raw.parse::<Metric>().map_err(|err| err.to_string())
}

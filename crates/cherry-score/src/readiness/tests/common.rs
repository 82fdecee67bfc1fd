use axum::body::Body;
use axum::http::{Request, Response};
use serde_json::Value;

use crate::readiness::{Metric, MetricInputs, RawMetricMap, RawMetricValue};

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Worked example: seven of nine metrics qualify and every category is met.
pub(super) fn scenario_inputs() -> MetricInputs {
    let mut inputs = MetricInputs::new();
    inputs
        .provide(Metric::Arr, 2.5)
        .and_then(|i| i.provide(Metric::ArrGrowth, 400.0))
        .and_then(|i| i.provide(Metric::LateStagePipelineGrowth, 100.0))
        .and_then(|i| i.provide(Metric::FullyRampedQuotaCarriers, 1.0))
        .and_then(|i| i.provide(Metric::NetRevenueRetention, 100.0))
        .and_then(|i| i.provide(Metric::AcvExpansion, 35.0))
        .and_then(|i| i.provide(Metric::Repeatability, "Strong"))
        .and_then(|i| i.provide(Metric::CacPayback, 9.0))
        .and_then(|i| i.provide(Metric::BurnMultiple, 1.7))
        .expect("scenario values are inside their domains");
    inputs
}

/// Expected normalized scores for [`scenario_inputs`], in catalog order.
pub(super) fn scenario_scores() -> [f64; Metric::COUNT] {
    [
        7.5,
        50.0 / 7.0,
        0.0,
        10.0 / 3.0,
        0.0,
        40.0 / 7.0,
        10.0,
        20.0 / 3.0,
        6.0,
    ]
}

pub(super) fn scenario_raw() -> RawMetricMap {
    let mut raw = RawMetricMap::new();
    raw.insert("ARR".to_string(), Some(RawMetricValue::Number(2.5)));
    raw.insert("arr_growth".to_string(), Some(RawMetricValue::Number(400.0)));
    raw.insert(
        "Late Stage Pipeline Growth".to_string(),
        Some(RawMetricValue::Number(100.0)),
    );
    raw.insert(
        "fully-ramped-quota-carriers".to_string(),
        Some(RawMetricValue::Number(1.0)),
    );
    raw.insert(
        "Net Revenue Retention (NRR)".to_string(),
        Some(RawMetricValue::Number(100.0)),
    );
    raw.insert("acv_expansion".to_string(), Some(RawMetricValue::Number(35.0)));
    raw.insert(
        "repeatability".to_string(),
        Some(RawMetricValue::Label("strong".to_string())),
    );
    raw.insert("CAC Payback".to_string(), Some(RawMetricValue::Number(9.0)));
    raw.insert("burn_multiple".to_string(), Some(RawMetricValue::Number(1.7)));
    raw
}

pub(super) fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

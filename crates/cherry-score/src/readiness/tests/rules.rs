use super::common::*;
use crate::readiness::catalog::{catalog, Metric, MetricKind, Normalization};
use crate::readiness::domain::{MetricInput, MetricValue};
use crate::readiness::engine::{average_score, normalize, qualifies};

fn number(value: f64) -> MetricInput {
    MetricInput::Provided(MetricValue::Number(value))
}

#[test]
fn numeric_scores_span_zero_to_ten_across_the_domain() {
    for definition in catalog() {
        let MetricKind::Numeric(rule) = &definition.kind else {
            continue;
        };
        let at_min = normalize(definition, &number(rule.min)).expect("score at min");
        let at_max = normalize(definition, &number(rule.max)).expect("score at max");
        match rule.normalization {
            Normalization::Ascending => {
                assert_close(at_min, 0.0);
                assert_close(at_max, 10.0);
            }
            Normalization::Descending => {
                assert_close(at_min, 10.0);
                assert_close(at_max, 0.0);
            }
        }
    }
}

#[test]
fn inverse_formulas_apply_only_to_cac_payback_and_burn_multiple() {
    let descending: Vec<Metric> = catalog()
        .iter()
        .filter(|definition| {
            matches!(
                definition.kind,
                MetricKind::Numeric(rule) if rule.normalization == Normalization::Descending
            )
        })
        .map(|definition| definition.metric)
        .collect();
    assert_eq!(descending, vec![Metric::CacPayback, Metric::BurnMultiple]);
}

#[test]
fn normalization_is_monotonic_in_its_direction() {
    for definition in catalog() {
        let MetricKind::Numeric(rule) = &definition.kind else {
            continue;
        };
        let low = rule.min + (rule.max - rule.min) * 0.25;
        let high = rule.min + (rule.max - rule.min) * 0.75;
        let low_score = normalize(definition, &number(low)).expect("low score");
        let high_score = normalize(definition, &number(high)).expect("high score");
        match rule.normalization {
            Normalization::Ascending => assert!(high_score > low_score, "{}", definition.name),
            Normalization::Descending => assert!(high_score < low_score, "{}", definition.name),
        }
    }
}

#[test]
fn quota_carriers_scores_high_values_higher_even_though_low_values_qualify() {
    let definition = Metric::FullyRampedQuotaCarriers.definition();

    assert_close(normalize(definition, &number(0.5)).expect("score"), 5.0 / 3.0);
    assert_close(normalize(definition, &number(2.5)).expect("score"), 25.0 / 3.0);
    assert!(qualifies(definition, &number(0.5)));
    assert!(qualifies(definition, &number(1.0)));
    assert!(!qualifies(definition, &number(2.5)));
}

#[test]
fn thresholds_are_inclusive() {
    let cases = [
        (Metric::Arr, 2.25, 2.24),
        (Metric::ArrGrowth, 375.0, 370.0),
        (Metric::LateStagePipelineGrowth, 225.0, 220.0),
        (Metric::NetRevenueRetention, 250.0, 240.0),
        (Metric::AcvExpansion, 35.0, 34.0),
        (Metric::FullyRampedQuotaCarriers, 1.0, 1.1),
        (Metric::CacPayback, 9.0, 9.1),
        (Metric::BurnMultiple, 1.7, 1.71),
    ];
    for (metric, passing, failing) in cases {
        let definition = metric.definition();
        assert!(qualifies(definition, &number(passing)), "{metric} at {passing}");
        assert!(!qualifies(definition, &number(failing)), "{metric} at {failing}");
    }
}

#[test]
fn repeatability_scores_and_qualifies_by_label() {
    let definition = Metric::Repeatability.definition();
    let label = |l: &'static str| MetricInput::Provided(MetricValue::Label(l));

    assert_eq!(normalize(definition, &label("Early")), Some(0.0));
    assert_eq!(normalize(definition, &label("Moderate")), Some(5.0));
    assert_eq!(normalize(definition, &label("Strong")), Some(10.0));
    assert!(!qualifies(definition, &label("Moderate")));
    assert!(qualifies(definition, &label("Strong")));
}

#[test]
fn skipped_metrics_have_no_score_and_never_qualify() {
    for definition in catalog() {
        assert_eq!(normalize(definition, &MetricInput::Skipped), None);
        assert!(!qualifies(definition, &MetricInput::Skipped));
    }
}

#[test]
fn out_of_domain_values_pass_through_unclamped() {
    let arr = Metric::Arr.definition();
    assert_close(normalize(arr, &number(4.0)).expect("score"), 15.0);

    let burn = Metric::BurnMultiple.definition();
    assert_close(normalize(burn, &number(2.5)).expect("score"), -10.0);
}

#[test]
fn average_ignores_missing_scores_and_is_zero_when_empty() {
    assert_eq!(average_score(Vec::<Option<f64>>::new()), 0.0);
    assert_eq!(average_score([None, None, None]), 0.0);
    assert_close(average_score([Some(4.0), None, Some(8.0)]), 6.0);
}

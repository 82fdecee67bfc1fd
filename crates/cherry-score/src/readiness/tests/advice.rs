use super::common::*;
use crate::readiness::catalog::Metric;
use crate::readiness::domain::MetricInputs;
use crate::readiness::engine::{evaluate, generate_advice, RECOMMENDATIONS};

#[test]
fn advice_partitions_metrics_by_qualification() {
    let result = evaluate(&scenario_inputs());
    let advice = &result.advice;

    assert_eq!(
        advice.weaknesses,
        vec![Metric::LateStagePipelineGrowth, Metric::NetRevenueRetention]
    );
    assert_eq!(advice.strengths.len() + advice.weaknesses.len(), Metric::COUNT);
    assert_eq!(
        advice.strength_text,
        "The metrics ARR, ARR Growth, Fully Ramped Quota Carriers, ACV Expansion, \
         Repeatability, CAC Payback, Burn Multiple are performing strongly, showcasing \
         your readiness in these areas."
    );
    assert_eq!(
        advice.weakness_text,
        vec![
            "The metric Late Stage Pipeline Growth needs improvement to better align with investor expectations.",
            "The metric Net Revenue Retention needs improvement to better align with investor expectations.",
        ]
    );
}

#[test]
fn skipped_metrics_are_reported_as_weaknesses() {
    let result = evaluate(&MetricInputs::new());
    assert!(result.advice.strengths.is_empty());
    assert_eq!(result.advice.weaknesses, Metric::ordered().to_vec());
    assert_eq!(result.advice.weakness_text.len(), Metric::COUNT);
}

#[test]
fn recommendations_do_not_depend_on_inputs() {
    let strong = generate_advice(&evaluate(&scenario_inputs()).outcomes);
    let empty = generate_advice(&evaluate(&MetricInputs::new()).outcomes);
    assert_eq!(strong.recommendations, empty.recommendations);
    assert_eq!(strong.recommendations, RECOMMENDATIONS);
    assert_eq!(RECOMMENDATIONS.split("\n\n").count(), 2);
}

#[test]
fn markdown_has_three_labelled_sections() {
    let markdown = evaluate(&scenario_inputs()).advice.to_markdown();
    let strengths = markdown.find("### Strengths:").expect("strengths section");
    let weaknesses = markdown.find("### Weaknesses:").expect("weaknesses section");
    let recommendations = markdown
        .find("### Recommendations:")
        .expect("recommendations section");
    assert!(strengths < weaknesses && weaknesses < recommendations);
    assert!(markdown.ends_with(RECOMMENDATIONS));
}

#[test]
fn strength_template_is_kept_when_nothing_qualifies() {
    let advice = evaluate(&MetricInputs::new()).advice;
    assert_eq!(
        advice.strength_text,
        "The metrics  are performing strongly, showcasing your readiness in these areas."
    );
}

#[test]
fn weakness_section_is_blank_when_every_metric_qualifies() {
    let mut inputs = MetricInputs::new();
    inputs
        .provide(Metric::Arr, 3.0)
        .and_then(|i| i.provide(Metric::ArrGrowth, 500.0))
        .and_then(|i| i.provide(Metric::LateStagePipelineGrowth, 300.0))
        .and_then(|i| i.provide(Metric::FullyRampedQuotaCarriers, 0.0))
        .and_then(|i| i.provide(Metric::NetRevenueRetention, 300.0))
        .and_then(|i| i.provide(Metric::AcvExpansion, 50.0))
        .and_then(|i| i.provide(Metric::Repeatability, "Strong"))
        .and_then(|i| i.provide(Metric::CacPayback, 6.0))
        .and_then(|i| i.provide(Metric::BurnMultiple, 1.5))
        .expect("values are inside their domains");

    let advice = evaluate(&inputs).advice;
    assert!(advice.weaknesses.is_empty());
    assert!(advice
        .to_markdown()
        .contains("### Weaknesses:\n\n\n### Recommendations:"));
}

use cherry_score::readiness::{catalog_view, CatalogRuleView, Direction, ScoreResult};
use std::fmt::Write;

pub(crate) fn render_score_report(result: &ScoreResult) -> String {
    let report = result.report();
    let mut out = String::new();

    let _ = writeln!(out, "Cherry Score readiness assessment");
    let _ = writeln!(out, "{}", report.score_line);
    let _ = writeln!(out, "{}", report.headline);

    let _ = writeln!(out, "\nMetrics");
    for row in &report.metrics {
        let value = row.value.as_deref().unwrap_or("skipped");
        let score = row
            .score
            .map(|score| format!("{score:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let marker = if row.qualifies { "meets" } else { "below" };
        let _ = writeln!(
            out,
            "  {}. {:<34} {:>12}  score {:>5}  {}",
            row.position, row.name, value, score, marker
        );
    }

    let _ = writeln!(out, "\n{}", report.advice.markdown);
    out
}

pub(crate) fn render_catalog() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Metric catalog");

    for entry in catalog_view() {
        let _ = writeln!(out, "  {}. {} ({})", entry.position, entry.name, entry.title);
        match entry.rule {
            CatalogRuleView::Numeric {
                min,
                max,
                direction,
                threshold,
                default,
                step,
                ..
            } => {
                let comparison = match direction {
                    Direction::HigherIsBetter => ">=",
                    Direction::LowerIsBetter => "<=",
                };
                let _ = writeln!(
                    out,
                    "     range {min}-{max}, step {step}, default {default}, qualifies {comparison} {threshold}"
                );
            }
            CatalogRuleView::Categorical {
                options,
                qualifying_option,
                default,
            } => {
                let labels = options
                    .iter()
                    .map(|option| format!("{} ({})", option.label, option.score))
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = writeln!(
                    out,
                    "     options {labels}, default {default}, qualifies when {qualifying_option}"
                );
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cherry_score::readiness::{evaluate, FormState, Metric};

    #[test]
    fn score_report_lists_every_metric_and_the_advice() {
        let mut form = FormState::default();
        form.skips.toggle(Metric::BurnMultiple);
        let text = render_score_report(&evaluate(&form.inputs()));

        assert!(text.contains("Your overall Cherry Score: "));
        assert!(text.contains("9. Burn Multiple"));
        assert!(text.contains("skipped"));
        assert!(text.contains("### Recommendations:"));
        assert_eq!(text.matches(" score ").count(), Metric::COUNT);
    }

    #[test]
    fn catalog_mentions_thresholds_and_options() {
        let text = render_catalog();
        assert!(text.contains("1. ARR"));
        assert!(text.contains("qualifies >= 2.25"));
        assert!(text.contains("qualifies <= 1.7"));
        assert!(text.contains("Strong (10)"));
    }
}

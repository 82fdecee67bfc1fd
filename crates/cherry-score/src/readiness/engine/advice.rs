use serde::Serialize;

use super::super::catalog::Metric;
use super::MetricOutcome;

pub const RECOMMENDATIONS: &str = "Focus on leveraging your strong metrics to highlight growth and \
profitability potential. Engage with investors by presenting clear data and a compelling narrative \
around your success metrics.\n\n\
For weaker metrics, consider targeted strategies such as enhancing customer retention, streamlining \
CAC, and expanding your pipeline through strategic partnerships or market expansion. Addressing these \
areas will make your pitch more robust.";

/// Templated feedback; the recommendation block is the same for every input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub strengths: Vec<Metric>,
    pub weaknesses: Vec<Metric>,
    pub strength_text: String,
    pub weakness_text: Vec<String>,
    pub recommendations: &'static str,
}

impl Advice {
    /// An empty weakness list leaves its section blank.
    pub fn to_markdown(&self) -> String {
        format!(
            "### Strengths:\n{}\n\n### Weaknesses:\n{}\n\n### Recommendations:\n{}",
            self.strength_text,
            self.weakness_text.join(" "),
            self.recommendations
        )
    }
}

/// Split metrics by qualification, keeping catalog order. Skipped metrics do
/// not qualify and therefore land in weaknesses.
pub fn generate_advice(outcomes: &[MetricOutcome]) -> Advice {
    let (strong, weak): (Vec<&MetricOutcome>, Vec<&MetricOutcome>) =
        outcomes.iter().partition(|outcome| outcome.qualifies);

    let strengths: Vec<Metric> = strong.iter().map(|outcome| outcome.metric).collect();
    let weaknesses: Vec<Metric> = weak.iter().map(|outcome| outcome.metric).collect();

    // The template is kept even with no strengths.
    let names = strengths
        .iter()
        .map(|metric| metric.name())
        .collect::<Vec<_>>()
        .join(", ");
    let strength_text = format!(
        "The metrics {names} are performing strongly, showcasing your readiness in these areas."
    );

    let weakness_text = weaknesses
        .iter()
        .map(|metric| {
            format!(
                "The metric {} needs improvement to better align with investor expectations.",
                metric.name()
            )
        })
        .collect();

    Advice {
        strengths,
        weaknesses,
        strength_text,
        weakness_text,
        recommendations: RECOMMENDATIONS,
    }
}

use crate::infra::parse_metric;
use crate::render::{render_catalog, render_score_report};
use cherry_score::config::AppConfig;
use cherry_score::error::AppError;
use cherry_score::readiness::{
    catalog_view, evaluate, FormState, Metric, RawMetricValue, ScoreRequest,
};
use cherry_score::telemetry;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Slider values for one assessment. Unset metrics keep their slider default.
#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Annual Recurring Revenue in millions (1.0-3.0)
    #[arg(long)]
    pub(crate) arr: Option<f64>,
    /// ARR growth in percent (150-500)
    #[arg(long)]
    pub(crate) arr_growth: Option<f64>,
    /// Late stage pipeline growth in percent (100-300)
    #[arg(long)]
    pub(crate) late_stage_pipeline_growth: Option<f64>,
    /// Months until quota carriers are fully ramped (0.0-3.0)
    #[arg(long)]
    pub(crate) fully_ramped_quota_carriers: Option<f64>,
    /// Net revenue retention in percent (100-300)
    #[arg(long)]
    pub(crate) net_revenue_retention: Option<f64>,
    /// ACV expansion in percent (15-50)
    #[arg(long)]
    pub(crate) acv_expansion: Option<f64>,
    /// Repeatability of the sales motion (Early, Moderate, Strong)
    #[arg(long)]
    pub(crate) repeatability: Option<String>,
    /// CAC payback in months (6.0-15.0)
    #[arg(long)]
    pub(crate) cac_payback: Option<f64>,
    /// Burn multiple (1.5-2.0)
    #[arg(long)]
    pub(crate) burn_multiple: Option<f64>,
    /// Skip a metric; may be repeated
    #[arg(long, value_name = "METRIC", value_parser = parse_metric)]
    pub(crate) skip: Vec<Metric>,
    /// JSON file shaped like the HTTP request body; flags override it
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

impl ScoreArgs {
    fn flag_values(&self) -> Vec<(Metric, RawMetricValue)> {
        let numeric = [
            (Metric::Arr, self.arr),
            (Metric::ArrGrowth, self.arr_growth),
            (Metric::LateStagePipelineGrowth, self.late_stage_pipeline_growth),
            (
                Metric::FullyRampedQuotaCarriers,
                self.fully_ramped_quota_carriers,
            ),
            (Metric::NetRevenueRetention, self.net_revenue_retention),
            (Metric::AcvExpansion, self.acv_expansion),
            (Metric::CacPayback, self.cac_payback),
            (Metric::BurnMultiple, self.burn_multiple),
        ];

        let mut values: Vec<(Metric, RawMetricValue)> = numeric
            .into_iter()
            .filter_map(|(metric, value)| value.map(|v| (metric, RawMetricValue::Number(v))))
            .collect();
        if let Some(label) = &self.repeatability {
            values.push((Metric::Repeatability, RawMetricValue::Label(label.clone())));
        }
        values
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

/// Apply the optional JSON file, then flags, then skips, on top of slider defaults.
pub(crate) fn build_form(args: &ScoreArgs) -> Result<FormState, AppError> {
    let mut form = FormState::default();

    if let Some(path) = &args.input {
        let payload = std::fs::read_to_string(path)?;
        let request: ScoreRequest = serde_json::from_str(&payload)?;
        debug!(path = %path.display(), entries = request.metrics.len(), "loaded metrics file");
        form.apply(&request.metrics)?;
    }

    for (metric, value) in args.flag_values() {
        form.set(metric, value)?;
        form.skips.set(metric, false);
    }

    for metric in &args.skip {
        form.skips.set(*metric, true);
    }

    Ok(form)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let form = build_form(&args)?;
    let result = evaluate(&form.inputs());

    match args.format {
        OutputFormat::Text => print!("{}", render_score_report(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.report())?),
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    match args.format {
        OutputFormat::Text => print!("{}", render_catalog()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog_view())?),
    }
    Ok(())
}

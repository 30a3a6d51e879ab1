use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use pstq::config::AppConfig;
use pstq::error::AppError;
use pstq::telemetry;
use pstq::workflows::selection::{AxisKind, TestKind};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load configuration and install tracing for one-shot CLI commands.
pub(crate) fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_axis_kind(raw: &str) -> Result<AxisKind, String> {
    AxisKind::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = AxisKind::ordered().iter().map(|kind| kind.key()).collect();
        format!("unknown axis '{raw}' (expected one of {})", known.join(", "))
    })
}

pub(crate) fn parse_test_kind(raw: &str) -> Result<TestKind, String> {
    TestKind::parse(raw)
        .ok_or_else(|| format!("unknown test '{raw}' (expected tef-canada, tefaq or tcf-canada)"))
}

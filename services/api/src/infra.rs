use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use vistoflow::i18n::EnglishCatalog;
use vistoflow::tools::ToolService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Tool facade wired with the bundled English catalog. Site locales render
/// on the front end; this process only ever speaks English.
pub(crate) fn tool_service() -> ToolService<EnglishCatalog> {
    ToolService::new(EnglishCatalog)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

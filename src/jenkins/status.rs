use crate::error::*;
use crate::jenkins::models::build_report::BuildReport;
use reqwest::StatusCode;
use snafu::{ResultExt, ensure};
use tracing::debug;

/// Fetches and decodes `<build_url>/api/json`.
pub async fn fetch_build_report(
    https: &reqwest::Client,
    build_url: &str,
) -> Result<BuildReport, Error> {
    let url = format!("{build_url}/api/json");
    debug!("Fetching build status from {url}");

    let response = https
        .get(&url)
        .send()
        .await
        .context(ReqwestSnafu { endpoint: &url })?;

    let status = response.status();
    ensure!(
        status == StatusCode::OK,
        UnexpectedStatusSnafu { url: &url, status }
    );

    let body = response
        .bytes()
        .await
        .context(ReqwestSnafu { endpoint: &url })?;
    let report = serde_json::from_slice::<BuildReport>(&body)
        .context(DeserializationErrorJsonSnafu)?;

    debug!(
        "Build at {} building={} with {} artifact(s)",
        report.url,
        report.building,
        report.artifacts.len()
    );

    Ok(report)
}

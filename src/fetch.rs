use crate::app::App;
use crate::artifact::download::download_artifact;
use crate::artifact::filter::ArtifactFilter;
use crate::error::Error;
use crate::jenkins::models::build_report::Artifact;
use crate::jenkins::status::fetch_build_report;
use crate::util::path::base_name;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

pub const BUILD_NOT_SUCCESSFUL_EXIT_STATUS: u8 = 1;
pub const FATAL_EXIT_STATUS: u8 = 2;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub downloaded: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    BuildNotSuccessful { result: String },
    Completed(Summary),
}

impl Outcome {
    /// Only the build result decides the exit status; failed downloads are just logged.
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::BuildNotSuccessful { .. } => BUILD_NOT_SUCCESSFUL_EXIT_STATUS,
            Outcome::Completed(_) => 0,
        }
    }
}

/// Looks up the build at `build_url` and, if it succeeded, downloads every artifact the
/// filter accepts. Each download runs in its own task and fails on its own.
///
/// Errors only when the build status cannot be fetched or decoded.
pub async fn fetch_artifacts(
    app: &App,
    build_url: &str,
    filter: &ArtifactFilter,
) -> Result<Outcome, Error> {
    let report = fetch_build_report(&app.https, build_url).await?;

    info!("Build result is {}", report.result_str());
    if !report.is_success() {
        return Ok(Outcome::BuildNotSuccessful {
            result: report.result_str().to_string(),
        });
    }

    let selected: Vec<&Artifact> = report
        .artifacts
        .iter()
        .filter(|a| filter.should_download(a))
        .collect();
    for name in shared_base_names(&selected) {
        warn!("Several artifacts are saved as {name}, only one of them is kept");
    }

    let permits = app.jobs.map(|n| Arc::new(Semaphore::new(n.get())));
    let mut downloads = JoinSet::new();

    for artifact in selected {
        let https = app.https.clone();
        let url = report.url.clone();
        let dir = app.output_dir.clone();
        let artifact = artifact.clone();
        let permits = permits.clone();

        downloads.spawn(async move {
            // Never closed, so acquiring cannot fail
            let _permit = match permits {
                Some(permits) => permits.acquire_owned().await.ok(),
                None => None,
            };

            let path = artifact.fetch_path();
            match download_artifact(&https, &url, path, &dir).await {
                Ok(_) => true,
                Err(e) => {
                    error!("Download of {} failed: {e}", artifact.file_name);
                    false
                }
            }
        });
    }

    let mut summary = Summary::default();
    while let Some(joined) = downloads.join_next().await {
        match joined {
            Ok(true) => summary.downloaded += 1,
            Ok(false) => summary.failed += 1,
            Err(e) => {
                error!("Download task did not finish: {e}");
                summary.failed += 1;
            }
        }
    }

    let Summary { downloaded, failed } = summary;
    info!("{downloaded} downloaded, {failed} failed");

    Ok(Outcome::Completed(summary))
}

/// Base names that more than one artifact would be saved under.
fn shared_base_names<'a>(artifacts: &[&'a Artifact]) -> Vec<&'a str> {
    let mut counts = BTreeMap::new();
    for &artifact in artifacts {
        if let Some(name) = base_name(artifact.fetch_path()) {
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(name, _)| name)
        .collect()
}

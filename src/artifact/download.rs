use crate::error::*;
use crate::util::path::base_name;
use futures::StreamExt;
use reqwest::{StatusCode, Url};
use snafu::{OptionExt, ResultExt, ensure};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Downloads `<build_url>/artifact/<path>` into `output_dir`, named after the last
/// segment of `path`. Returns the path of the written file.
///
/// Anything but `200 OK` is an error and no file is created. If the transfer breaks
/// off after the file was created, the file is removed again.
pub async fn download_artifact(
    https: &reqwest::Client,
    build_url: &str,
    path: &str,
    output_dir: &Path,
) -> Result<PathBuf, Error> {
    let Some(short) = base_name(path) else {
        return InvalidArtifactNameSnafu { path }.fail();
    };
    info!("Downloading {short}");

    let url = artifact_url(build_url, path)?;
    let response = https
        .get(&url)
        .send()
        .await
        .context(ReqwestSnafu { endpoint: &url })?;

    let status = response.status();
    ensure!(status == StatusCode::OK, ArtifactStatusSnafu { status });

    let target = output_dir.join(short);
    let mut file = File::create(&target)
        .await
        .context(IoSnafu { path: &target })?;

    let copied = copy_body(response, &mut file, &target).await;
    drop(file);

    match copied {
        Ok(bytes) => {
            debug!("Wrote {bytes} bytes to {}", target.display());
            Ok(target)
        }
        Err(e) => {
            if let Err(remove_err) = tokio::fs::remove_file(&target).await {
                warn!(
                    "Failed to remove partial file {}: {remove_err}",
                    target.display()
                );
            }
            Err(e)
        }
    }
}

/// `<build_url>/artifact/<path>` with every segment of `path` percent-encoded.
fn artifact_url(build_url: &str, path: &str) -> Result<String, Error> {
    let mut url = Url::parse(build_url)
        .ok()
        .filter(|url| !url.cannot_be_a_base())
        .context(InvalidBuildUrlSnafu { url: build_url })?;

    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .push("artifact")
            .extend(path.split('/'));
    }

    Ok(url.into())
}

async fn copy_body(
    response: reqwest::Response,
    file: &mut File,
    target: &Path,
) -> Result<u64, Error> {
    let mut stream = response.bytes_stream();
    let mut written = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context(StreamInterruptedSnafu { path: target })?;
        file.write_all(&chunk)
            .await
            .context(IoSnafu { path: target })?;
        written += chunk.len() as u64;
    }

    // tokio::fs::File hands writes to a blocking thread; flush before reporting success
    file.flush().await.context(IoSnafu { path: target })?;

    Ok(written)
}

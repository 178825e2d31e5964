use reqwest::StatusCode;
use snafu::Snafu;
use std::path::PathBuf;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum Error {
    // Configuration
    #[snafu(display("Invalid --match pattern: {}", source))]
    InvalidRegex { source: regex::Error },
    #[snafu(display("Failed to build http client: {}", source))]
    ClientBuild { source: reqwest::Error },

    // Build metadata
    #[snafu(display("Failed to send http request to {}: {}", endpoint, source))]
    Reqwest {
        endpoint: String,
        source: reqwest::Error,
    },
    #[snafu(display("{} returned {}", url, status))]
    UnexpectedStatus { url: String, status: StatusCode },
    #[snafu(display("Encountered error during json deserialization: {}", source))]
    DeserializationErrorJson { source: serde_json::Error },

    // Artifacts
    #[snafu(display("{:?} is not a valid build url", url))]
    InvalidBuildUrl { url: String },
    #[snafu(display("{}", status))]
    ArtifactStatus { status: StatusCode },
    #[snafu(display("Artifact path {:?} has no usable file name", path))]
    InvalidArtifactName { path: String },
    #[snafu(display("Failed to write {}: {}", path.display(), source))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Transfer of {} interrupted: {}", path.display(), source))]
    StreamInterrupted {
        path: PathBuf,
        source: reqwest::Error,
    },
}

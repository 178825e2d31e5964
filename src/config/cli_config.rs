use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "artifact-fetch", version)]
#[command(about = "Downloads all the artifacts from a given Jenkins build")]
pub struct Args {
    /// Regexp to match file names against
    #[arg(long = "match", value_name = "REGEXP")]
    pub pattern: Option<String>,

    /// Directory the artifacts are saved into
    #[arg(long, value_name = "DIR", default_value = ".")]
    #[arg(env = "ARTIFACT_FETCH_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Maximum number of simultaneous downloads (unlimited when unset)
    #[arg(long, value_name = "N", env = "ARTIFACT_FETCH_JOBS")]
    pub jobs: Option<NonZeroUsize>,

    /// Base URL of the build, e.g. https://ci.example.com/job/foo/42
    pub url: String,
}

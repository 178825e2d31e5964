use crate::error::*;
use snafu::ResultExt;
use std::num::NonZeroUsize;
use std::path::PathBuf;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct App {
    pub https: reqwest::Client,
    pub output_dir: PathBuf,
    pub jobs: Option<NonZeroUsize>,
}

impl App {
    pub fn new(output_dir: PathBuf, jobs: Option<NonZeroUsize>) -> Result<Self, Error> {
        let https = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            https,
            output_dir,
            jobs,
        })
    }
}

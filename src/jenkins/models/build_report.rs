use serde::Deserialize;

const SUCCESS: &str = "SUCCESS";

/// Build metadata as served by `<build>/api/json`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildReport {
    pub building: bool,
    // Jenkins reports `null` until the build finishes
    pub result: Option<String>,
    pub artifacts: Vec<Artifact>,
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub file_name: String,
    #[serde(default)]
    pub relative_path: Option<String>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.result.as_deref() == Some(SUCCESS)
    }

    pub fn result_str(&self) -> &str {
        self.result.as_deref().unwrap_or_default()
    }
}

impl Artifact {
    /// Path below `<build>/artifact/`. Older servers only send the file name.
    pub fn fetch_path(&self) -> &str {
        self.relative_path.as_deref().unwrap_or(&self.file_name)
    }
}

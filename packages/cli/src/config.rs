use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "synctypes.config.json";

/// Synctypes configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory searched recursively for `*.models.json` manifests
    #[serde(default = "default_models_dir")]
    pub models_dir: String,

    /// Directory the TypeScript files are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Only sync these models (all models when empty)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Never sync these models
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Banner comment for generated files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

fn default_models_dir() -> String {
    "models".to_string()
}

fn default_out_dir() -> String {
    "frontend/src/types/generated".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Invalid {}: {}", config_path.display(), e))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn get_models_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.models_dir)
    }

    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    /// Whether a model passes the include/exclude filters
    pub fn is_selected(&self, model_name: &str) -> bool {
        let included = self.include.is_empty() || self.include.iter().any(|n| n == model_name);
        included && !self.exclude.iter().any(|n| n == model_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            out_dir: default_out_dir(),
            include: vec![],
            exclude: vec![],
            header: None,
        }
    }
}

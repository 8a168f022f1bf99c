use crate::config::Config;
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use synctypes_model::{load_manifest, ModelDefinition};
use walkdir::WalkDir;

pub const MANIFEST_SUFFIX: &str = ".models.json";

pub fn is_manifest(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(MANIFEST_SUFFIX))
        .unwrap_or(false)
}

/// Manifest files under `dir`, sorted so output order is stable across runs
pub fn find_manifests(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_manifest(e.path()))
        .map(|e| e.into_path())
        .collect()
}

/// Load every selected model from the manifests under `models_dir`
pub fn discover_models(models_dir: &Path, config: &Config) -> Result<Vec<ModelDefinition>> {
    if !models_dir.exists() {
        return Err(anyhow!(
            "Models directory does not exist: {}",
            models_dir.display()
        ));
    }

    let mut models = Vec::new();
    for manifest in find_manifests(models_dir) {
        let loaded = load_manifest(&manifest)?;
        tracing::debug!("Loaded {} models from {}", loaded.len(), manifest.display());
        models.extend(loaded.into_iter().filter(|m| config.is_selected(&m.object_name)));
    }

    Ok(models)
}

use crate::config::Config;
use crate::discovery::discover_models;
use anyhow::{anyhow, Result};
use clap::Args;
use std::path::Path;
use synctypes_extractor::extract_all;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Project directory containing the config file (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Only show this model
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Print what would be extracted from each model, as JSON
pub fn inspect(args: InspectArgs, cwd: &Path) -> Result<()> {
    let project = cwd.join(&args.path);
    let config = Config::load(&project)?;
    let models = discover_models(&config.get_models_dir(&project), &config)?;

    let mut types = extract_all(&models);
    if let Some(name) = &args.model {
        types.retain(|t| &t.model_name == name);
        if types.is_empty() {
            return Err(anyhow!("Model not found: {}", name));
        }
    }

    println!("{}", serde_json::to_string_pretty(&types)?);
    Ok(())
}

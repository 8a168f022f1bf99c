use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

const EXAMPLE_MANIFEST_NAME: &str = "example.models.json";

const EXAMPLE_MANIFEST: &str = r#"[
  {
    "objectName": "Ticket",
    "attributes": {
      "STATUS_OPEN": "open",
      "STATUS_CLOSED": "closed",
      "STATUS_CHOICES": [["open", "Open"], ["closed", "Closed"]],
      "PRIORITY_HIGH": 1,
      "PRIORITY_LOW": 2,
      "PRIORITY_CHOICES": [[1, "High"], [2, "Low"]]
    }
  }
]
"#;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory holding the model manifests
    #[arg(short, long, default_value = "models")]
    pub models_dir: String,

    /// Directory the TypeScript files are written to
    #[arg(short, long, default_value = "frontend/src/types/generated")]
    pub out_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing synctypes...".bright_blue().bold());

    let models_dir = cwd.join(&args.models_dir);
    if !models_dir.exists() {
        fs::create_dir_all(&models_dir)?;
        println!("  {} Created {}/", "✓".green(), args.models_dir);
    }

    let example_file = models_dir.join(EXAMPLE_MANIFEST_NAME);
    if !example_file.exists() {
        fs::write(&example_file, EXAMPLE_MANIFEST)?;
        println!("  {} Created {}", "✓".green(), EXAMPLE_MANIFEST_NAME);
    }

    let config = Config {
        models_dir: args.models_dir.clone(),
        out_dir: args.out_dir.clone(),
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Export your models to {}/*.models.json", args.models_dir);
    println!("  2. Run: synctypes sync");
    println!("  3. Check output in {}/", args.out_dir);

    Ok(())
}

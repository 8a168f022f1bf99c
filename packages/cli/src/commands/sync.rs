use crate::config::{Config, DEFAULT_CONFIG_NAME};
use crate::discovery::{discover_models, is_manifest};
use crate::watcher::FileWatcher;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use synctypes_extractor::extract_all;
use synctypes_writer::{TypeScriptWriter, WriterOptions};

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Project directory containing the config file (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Report changes without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error if any generated file is out of date (implies --dry-run)
    #[arg(long)]
    pub check: bool,

    /// Print a JSON report instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Re-sync whenever a model manifest or the config file changes
    #[arg(short, long, conflicts_with = "check")]
    pub watch: bool,
}

/// Outcome of one sync run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub models: usize,
    pub changed: Vec<PathBuf>,
    pub dry_run: bool,
}

pub fn sync(args: SyncArgs, cwd: &Path) -> Result<()> {
    let report = sync_project(&args, cwd)?;
    print_report(&report, &args)?;

    if args.check && !report.changed.is_empty() {
        return Err(anyhow!(
            "{} generated file(s) out of date, run `synctypes sync`",
            report.changed.len()
        ));
    }

    if args.watch {
        watch(&args, cwd)?;
    }

    Ok(())
}

/// Config and directories for one run, resolved from the config on disk
struct SyncPlan {
    config: Config,
    project: PathBuf,
    models_dir: PathBuf,
    out_dir: PathBuf,
}

impl SyncPlan {
    fn load(args: &SyncArgs, cwd: &Path) -> Result<Self> {
        let project = cwd.join(&args.path);
        let config = Config::load(&project)?;
        let models_dir = config.get_models_dir(&project);
        let out_dir = match &args.out_dir {
            Some(out) => cwd.join(out),
            None => config.get_out_dir(&project),
        };

        Ok(Self {
            config,
            project,
            models_dir,
            out_dir,
        })
    }
}

/// Reload the config, then discover, extract and write once
pub fn sync_project(args: &SyncArgs, cwd: &Path) -> Result<SyncReport> {
    let plan = SyncPlan::load(args, cwd)?;
    run_once(
        &plan.config,
        &plan.models_dir,
        &plan.out_dir,
        args.dry_run || args.check,
    )
}

/// Discover, extract and write once
pub fn run_once(config: &Config, models_dir: &Path, out_dir: &Path, dry_run: bool) -> Result<SyncReport> {
    let models = discover_models(models_dir, config)?;
    let types = extract_all(&models);

    let mut options = WriterOptions::new(out_dir).dry_run(dry_run);
    if let Some(header) = &config.header {
        options = options.header(header.clone());
    }

    let changed = TypeScriptWriter::with_options(options).write_all(&types)?;

    Ok(SyncReport {
        models: types.len(),
        changed,
        dry_run,
    })
}

fn print_report(report: &SyncReport, args: &SyncArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!(
        "{} Scanned {} models",
        "🔍".bright_blue(),
        report.models.to_string().bright_white()
    );

    if report.changed.is_empty() {
        println!("{} Generated types are up to date", "✅".green());
        return Ok(());
    }

    let verb = if report.dry_run { "Would update" } else { "Updated" };
    for path in &report.changed {
        println!("  {} {} {}", "✓".green(), verb, path.display());
    }

    Ok(())
}

fn is_watched(path: &Path) -> bool {
    is_manifest(path) || path.file_name().and_then(|n| n.to_str()) == Some(DEFAULT_CONFIG_NAME)
}

fn start_watcher(plan: &SyncPlan) -> Result<FileWatcher> {
    let mut watcher = FileWatcher::new(&plan.models_dir)?;
    // Editors often save by rename, so watch the config's directory rather than the file
    if plan.models_dir != plan.project {
        watcher.watch_shallow(&plan.project)?;
    }
    Ok(watcher)
}

fn watch(args: &SyncArgs, cwd: &Path) -> Result<()> {
    let mut plan = SyncPlan::load(args, cwd)?;
    let mut watcher = start_watcher(&plan)?;
    println!("\n{}", "👀 Watching for changes...".bright_blue());

    loop {
        let paths = watcher.wait_for_changes(is_watched, Duration::from_millis(200))?;
        for path in &paths {
            tracing::debug!("Changed: {}", path.display());
        }

        // Keep watching through bad manifests or config; the next save may fix them
        let result = SyncPlan::load(args, cwd).and_then(|next| {
            if next.models_dir != plan.models_dir {
                watcher = start_watcher(&next)?;
            }
            plan = next;
            run_once(&plan.config, &plan.models_dir, &plan.out_dir, args.dry_run)
        });

        match result {
            Ok(report) => print_report(&report, args)?,
            Err(e) => eprintln!("  {} {}", "✗".red(), e.to_string().red()),
        }
    }
}

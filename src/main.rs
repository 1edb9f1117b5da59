use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use version_stamp::cli::orchestration::{run_stamp_workflow, StampWorkflowArgs};
use version_stamp::config::{self, ConfigOverrides};
use version_stamp::source::ProcessEnv;
use version_stamp::ui::Reporter;

#[derive(clap::Parser)]
#[command(
    name = "version-stamp",
    about = "Replace the placeholder version in a package manifest with the release version"
)]
struct Args {
    #[arg(short, long, help = "Manifest file to stamp [default: Cargo.toml]")]
    manifest: Option<PathBuf>,

    #[arg(short, long, help = "Environment variable holding the version [default: VERSION]")]
    env_var: Option<String>,

    #[arg(short, long, help = "Placeholder to replace [default: 0.0.1-dirty]")]
    placeholder: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Show what would be stamped without writing the manifest")]
    dry_run: bool,

    #[arg(short, long, help = "Only print warnings and errors")]
    quiet: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("version-stamp {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let reporter = Reporter::new(args.quiet);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg.with_overrides(ConfigOverrides {
            manifest: args.manifest,
            env_var: args.env_var,
            placeholder: args.placeholder,
        }),
        Err(e) => {
            reporter.error(&e.to_string());
            std::process::exit(1);
        }
    };

    reporter.status(&format!(
        "Stamping {} from ${}",
        config.manifest.display(),
        config.env_var
    ));

    let workflow_args = StampWorkflowArgs {
        dry_run: args.dry_run,
    };
    let result = match run_stamp_workflow(&ProcessEnv, &config, &workflow_args) {
        Ok(result) => result,
        Err(e) => {
            reporter.error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        reporter.warning(warning);
    }
    reporter.summary(&result, &config.placeholder);

    Ok(())
}

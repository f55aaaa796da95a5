//! `rocks-install install`

use super::TargetArgs;
use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use rocks_install::installer::{ArtifactSources, install};
use rocks_install::layout::expand_path;
use rocks_install::report::{InstallReport, print_install_report};
use std::path::Path;

#[derive(Debug, Args, Clone)]
pub struct InstallArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Compiled rocks binary
    #[arg(long, default_value = "target/release/rocks")]
    pub binary: String,

    /// Directory holding the data files
    #[arg(long, default_value = "filtered_data")]
    pub data_dir: String,

    /// Run `<launcher> --version` after installing
    #[arg(long)]
    pub smoke_test: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle_install(args: &InstallArgs) -> Result<()> {
    let config = args.target.resolve_config()?;
    let root = args.target.open_root()?;
    let sources = ArtifactSources {
        binary: expand_path(&args.binary),
        data_dir: expand_path(&args.data_dir),
    };

    if !args.json {
        println!(
            "🔧 Installing {} into {} (region: {})",
            config.tool,
            root.path().display(),
            config.region
        );
    }

    let outcome = install(&root, &config, &sources).context("Installation aborted")?;

    if args.smoke_test {
        smoke_test(&outcome.launcher)?;
    }

    let report = InstallReport::new(Utc::now().to_rfc3339(), &outcome);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!();
        print_install_report(&report);
        println!();
        println!("✅ Install complete!");
    }

    Ok(())
}

/// Run the freshly written launcher with `--version`
fn smoke_test(launcher: &Path) -> Result<()> {
    tracing::info!("smoke testing {}", launcher.display());
    let output = duct::cmd(launcher, ["--version"])
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .run()
        .with_context(|| format!("Failed to execute: {} --version", launcher.display()))?;

    if !output.status.success() {
        anyhow::bail!(
            "Smoke test failed: {} --version exited with {}\n{}",
            launcher.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    tracing::debug!(
        "smoke test output: {}",
        String::from_utf8_lossy(&output.stdout).trim()
    );
    Ok(())
}

//! Install and verification reports
//!
//! Printed human-readable to stdout, or as JSON for package-manager hooks.

use crate::config::Region;
use crate::installer::InstallOutcome;
use crate::verify::VerifyResult;
use serde::Serialize;
use std::path::PathBuf;

/// Summary of a finished install
#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    pub timestamp: String,
    pub version: String,
    pub tool: String,
    pub root: PathBuf,
    pub region: Region,
    pub launcher: PathBuf,
    pub binary: PathBuf,
    pub env_var: String,
    pub data_dir: PathBuf,
    pub data_files: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_stale: Option<PathBuf>,
}

impl InstallReport {
    pub fn new(timestamp: String, outcome: &InstallOutcome) -> Self {
        Self {
            timestamp,
            version: crate::VERSION.to_string(),
            tool: outcome.plan.tool.clone(),
            root: outcome.plan.root.clone(),
            region: outcome.plan.region,
            launcher: outcome.launcher.clone(),
            binary: outcome.binary.clone(),
            env_var: outcome.plan.env_var.clone(),
            data_dir: outcome.plan.data_dir.clone(),
            data_files: outcome.data_files.clone(),
            removed_stale: outcome.removed_stale.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn print_install_report(report: &InstallReport) {
    println!("🪨 rocks install report");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Generated: {}", report.timestamp);
    println!("Root:      {}", report.root.display());
    println!("Region:    {}", report.region);
    println!();
    println!("🚀 Launcher: {}", report.launcher.display());
    println!("📦 Binary:   {}", report.binary.display());
    println!(
        "🌱 Env:      {}={}",
        report.env_var,
        report.data_dir.display()
    );
    println!();
    println!("📁 Data files:");
    for file in &report.data_files {
        println!("  ✅ {}", file.display());
    }
    if let Some(ref stale) = report.removed_stale {
        println!();
        println!("🧹 Removed stale binary: {}", stale.display());
    }
}

pub fn print_verify_report(result: &VerifyResult) {
    println!("🪨 rocks layout check ({})", result.plan.root.display());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for check in &result.checks {
        let status = if check.ok { "✅" } else { "❌" };
        print!("  {} {:<14} {}", status, check.name, check.path.display());
        match check.detail {
            Some(ref detail) => println!(" ({detail})"),
            None => println!(),
        }
    }

    println!();
    if result.is_success() {
        println!("✅ Install layout is complete");
    } else {
        println!(
            "⚠️  {} check(s) failed - re-run rocks-install install",
            result.failures().len()
        );
    }
}

//! Installer for the rocks binary and its reference data
//!
//! Steps run strictly in order and stop at the first failure:
//! - place the CSV data under `share/<package>`
//! - place the binary under `bin` or `libexec`
//! - generate the `bin/<tool>` launcher
//! - mark launcher and binary executable

pub mod launcher;
pub mod permissions;
pub mod place;
pub mod plan;

pub use launcher::{generate_launcher, render_launcher, sh_quote};
pub use permissions::finalize_permissions;
pub use place::{place_binary, place_data};
pub use plan::InstallPlan;

use crate::config::InstallConfig;
use crate::error::Result;
use crate::layout::InstallRoot;
use std::path::PathBuf;

/// Source-side artifacts produced by the build step
#[derive(Debug, Clone)]
pub struct ArtifactSources {
    /// Compiled binary (e.g. `target/release/rocks`)
    pub binary: PathBuf,
    /// Directory holding the data files (e.g. `filtered_data`)
    pub data_dir: PathBuf,
}

/// Everything a finished install placed on disk
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub plan: InstallPlan,
    pub data_files: Vec<PathBuf>,
    pub binary: PathBuf,
    pub launcher: PathBuf,
    pub removed_stale: Option<PathBuf>,
}

/// Install `sources` under `root` according to `config`
pub fn install(
    root: &InstallRoot,
    config: &InstallConfig,
    sources: &ArtifactSources,
) -> Result<InstallOutcome> {
    let plan = InstallPlan::resolve(root, config)?;
    tracing::info!(
        "installing {} into {} (region: {})",
        plan.tool,
        plan.root.display(),
        plan.region
    );

    let data_files = place_data(&sources.data_dir, &plan)?;
    let removed_stale = place_binary(&sources.binary, &plan)?;
    let launcher = generate_launcher(&plan)?;
    finalize_permissions(&plan)?;

    Ok(InstallOutcome {
        binary: plan.binary_target.clone(),
        plan,
        data_files,
        launcher,
        removed_stale,
    })
}

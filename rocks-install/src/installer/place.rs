//! Artifact placement: reference data into `share/<package>`, the binary into its region

use crate::error::{CopySnafu, MissingSourceSnafu, RemoveSnafu, Result};
use crate::installer::InstallPlan;
use crate::layout::ensure_dir;
use snafu::{ResultExt, ensure};
use std::fs;
use std::path::{Path, PathBuf};

/// Copy every configured data file from `source_dir` into the data directory
pub fn place_data(source_dir: &Path, plan: &InstallPlan) -> Result<Vec<PathBuf>> {
    ensure_dir(&plan.data_dir)?;

    let mut placed = Vec::with_capacity(plan.data_files.len());
    for name in &plan.data_files {
        let to = plan.data_dir.join(name);
        copy_artifact(&source_dir.join(name), &to)?;
        placed.push(to);
    }

    Ok(placed)
}

/// Copy the binary artifact into its region.
///
/// A copy left under the other region by an earlier install is removed so
/// only one binary remains. Returns the removed path, if any.
pub fn place_binary(binary: &Path, plan: &InstallPlan) -> Result<Option<PathBuf>> {
    if let Some(parent) = plan.binary_target.parent() {
        ensure_dir(parent)?;
    }
    copy_artifact(binary, &plan.binary_target)?;

    let Some(stale) = &plan.stale_binary else {
        return Ok(None);
    };
    if fs::symlink_metadata(stale).is_err() {
        return Ok(None);
    }
    fs::remove_file(stale).context(RemoveSnafu { path: stale })?;
    tracing::info!("removed stale binary {}", stale.display());
    Ok(Some(stale.clone()))
}

/// Replace `to` with a fresh copy of `from`
fn copy_artifact(from: &Path, to: &Path) -> Result<()> {
    ensure!(from.is_file(), MissingSourceSnafu { path: from });

    // Unlink first: the old copy may be read-only or currently executing.
    if fs::symlink_metadata(to).is_ok() {
        fs::remove_file(to).context(RemoveSnafu { path: to })?;
    }
    fs::copy(from, to).context(CopySnafu { from, to })?;

    tracing::info!("installed {} -> {}", from.display(), to.display());
    Ok(())
}

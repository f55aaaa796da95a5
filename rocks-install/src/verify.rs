//! Post-install verification
//!
//! Re-checks an existing install root against the layout a fresh install
//! would produce: launcher present and current, exactly one binary, every
//! data file in place.

use crate::config::InstallConfig;
use crate::error::Result;
use crate::installer::{InstallPlan, render_launcher};
use crate::layout::InstallRoot;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a single layout check
#[derive(Debug, Clone, Serialize)]
pub struct LayoutCheck {
    pub name: String,
    pub path: PathBuf,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Overall verification result
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResult {
    pub plan: InstallPlan,
    pub checks: Vec<LayoutCheck>,
}

impl VerifyResult {
    pub fn is_success(&self) -> bool {
        self.checks.iter().all(|check| check.ok)
    }

    pub fn failures(&self) -> Vec<&LayoutCheck> {
        self.checks.iter().filter(|check| !check.ok).collect()
    }
}

fn check(name: &str, path: &Path, failure: Option<String>) -> LayoutCheck {
    LayoutCheck {
        name: name.to_string(),
        path: path.to_path_buf(),
        ok: failure.is_none(),
        detail: failure,
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

fn check_launcher(plan: &InstallPlan, expected: &str) -> LayoutCheck {
    let failure = match fs::read_to_string(&plan.launcher) {
        Err(e) => Some(format!("launcher unreadable: {e}")),
        Ok(actual) if actual != expected => {
            Some("launcher differs from the one this config generates".to_string())
        }
        Ok(_) if !is_executable(&plan.launcher) => Some("launcher is not executable".to_string()),
        Ok(_) => None,
    };
    check("launcher", &plan.launcher, failure)
}

/// Verify the installed layout under `root` for `config`
pub fn verify_install(root: &InstallRoot, config: &InstallConfig) -> Result<VerifyResult> {
    let plan = InstallPlan::resolve(root, config)?;
    let expected = render_launcher(&plan)?;

    let mut checks = vec![check_launcher(&plan, &expected)];

    checks.push(check(
        "binary",
        &plan.binary_target,
        (!is_executable(&plan.binary_target))
            .then(|| format!("no executable binary in {}", plan.region)),
    ));

    if let Some(stale) = &plan.stale_binary {
        checks.push(check(
            "single-binary",
            stale,
            fs::symlink_metadata(stale)
                .is_ok()
                .then(|| format!("stale binary left in {}", plan.region.other())),
        ));
    }

    for target in plan.data_file_targets() {
        checks.push(check(
            "data-file",
            &target,
            (!target.is_file()).then(|| "data file missing".to_string()),
        ));
    }

    for failure in checks.iter().filter(|c| !c.ok) {
        tracing::warn!(
            "{} check failed for {}: {}",
            failure.name,
            failure.path.display(),
            failure.detail.as_deref().unwrap_or("")
        );
    }

    Ok(VerifyResult { plan, checks })
}

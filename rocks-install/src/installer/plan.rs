//! Install plan: every absolute path an install touches, resolved up front

use crate::config::{InstallConfig, Region};
use crate::error::{Result, SelfReferenceSnafu};
use crate::layout::InstallRoot;
use serde::Serialize;
use snafu::ensure;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallPlan {
    pub tool: String,
    pub root: PathBuf,
    pub region: Region,
    /// `bin/<tool>`
    pub launcher: PathBuf,
    /// Where the binary artifact lives for this install
    pub binary_target: PathBuf,
    /// The binary's location under the other region, removed if present
    pub stale_binary: Option<PathBuf>,
    /// `share/<package>`
    pub data_dir: PathBuf,
    pub env_var: String,
    pub data_files: Vec<String>,
}

impl InstallPlan {
    /// Resolve the layout for `config` under `root`.
    ///
    /// Fails with a self-reference error when the launcher and the binary
    /// would share a path, before anything is written.
    pub fn resolve(root: &InstallRoot, config: &InstallConfig) -> Result<Self> {
        config.validate()?;

        let launcher = root.bin_dir().join(&config.tool);
        let binary_target = root
            .region_dir(config.region)
            .join(config.binary_file_name(config.region));
        ensure_distinct(&launcher, &binary_target)?;

        let other = config.region.other();
        let other_binary = root
            .region_dir(other)
            .join(config.binary_file_name(other));
        let stale_binary = (other_binary != launcher).then_some(other_binary);

        Ok(Self {
            tool: config.tool.clone(),
            root: root.path().to_path_buf(),
            region: config.region,
            launcher,
            binary_target,
            stale_binary,
            data_dir: root.data_dir(&config.package),
            env_var: config.env_var.clone(),
            data_files: config.data_files.clone(),
        })
    }

    pub fn data_file_targets(&self) -> Vec<PathBuf> {
        self.data_files
            .iter()
            .map(|name| self.data_dir.join(name))
            .collect()
    }
}

/// A launcher must never resolve to itself
pub(crate) fn ensure_distinct(launcher: &Path, target: &Path) -> Result<()> {
    ensure!(launcher != target, SelfReferenceSnafu { path: launcher });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstallError;

    fn root() -> (tempfile::TempDir, InstallRoot) {
        let tmp = tempfile::tempdir().unwrap();
        let root = InstallRoot::open(tmp.path()).unwrap();
        (tmp, root)
    }

    #[test]
    fn test_libexec_plan() {
        let (_tmp, root) = root();
        let plan = InstallPlan::resolve(&root, &InstallConfig::default()).unwrap();

        assert_eq!(plan.launcher, root.path().join("bin/rocks"));
        assert_eq!(plan.binary_target, root.path().join("libexec/rocks"));
        assert_eq!(plan.stale_binary, Some(root.path().join("bin/rocks-bin")));
        assert_eq!(plan.data_dir, root.path().join("share/rocks"));
        assert_eq!(
            plan.data_file_targets(),
            vec![
                root.path().join("share/rocks/equities.csv"),
                root.path().join("share/rocks/etfs.csv"),
            ]
        );
    }

    #[test]
    fn test_bin_plan_uses_distinct_name() {
        let (_tmp, root) = root();
        let config = InstallConfig {
            region: Region::Bin,
            ..InstallConfig::default()
        };
        let plan = InstallPlan::resolve(&root, &config).unwrap();

        assert_eq!(plan.binary_target, root.path().join("bin/rocks-bin"));
        assert_ne!(plan.binary_target, plan.launcher);
        assert_eq!(plan.stale_binary, Some(root.path().join("libexec/rocks")));
    }

    #[test]
    fn test_bin_plan_rejects_self_reference() {
        let (_tmp, root) = root();
        let config = InstallConfig {
            region: Region::Bin,
            binary_name: Some("rocks".to_string()),
            ..InstallConfig::default()
        };
        let err = InstallPlan::resolve(&root, &config).unwrap_err();
        assert!(matches!(err, InstallError::SelfReference { .. }));
    }

    #[test]
    fn test_stale_binary_never_points_at_launcher() {
        let (_tmp, root) = root();
        let config = InstallConfig {
            binary_name: Some("rocks".to_string()),
            ..InstallConfig::default()
        };
        let plan = InstallPlan::resolve(&root, &config).unwrap();
        assert_eq!(plan.stale_binary, None);
    }
}

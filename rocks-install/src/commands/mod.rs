//! CLI command handlers

pub mod install;
pub mod launcher;
pub mod verify;

use anyhow::{Context, Result};
use clap::Args;
use rocks_install::config::{InstallConfig, Region, load_config};
use rocks_install::layout::{InstallRoot, expand_path};
use std::path::PathBuf;

/// Install root and layout options shared by every command
#[derive(Debug, Args, Clone)]
pub struct TargetArgs {
    /// Install root holding bin/, libexec/ and share/ (must already exist)
    #[arg(long, env = "ROCKS_INSTALL_ROOT")]
    pub root: String,

    /// Install config (TOML); flags below override its values
    #[arg(short, long, env = "ROCKS_INSTALL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Region hosting the binary
    #[arg(long, value_enum)]
    pub region: Option<Region>,

    /// Launcher name
    #[arg(long)]
    pub tool: Option<String>,

    /// Package name used for share/<package>
    #[arg(long)]
    pub package: Option<String>,

    /// Binary file name when the region is bin
    #[arg(long)]
    pub binary_name: Option<String>,

    /// Variable the launcher sets to the data directory
    #[arg(long)]
    pub env_var: Option<String>,
}

impl TargetArgs {
    /// Config file values, then flag overrides
    pub fn resolve_config(&self) -> Result<InstallConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => InstallConfig::default(),
        };

        if let Some(region) = self.region {
            config.region = region;
        }
        if let Some(ref tool) = self.tool {
            config.tool.clone_from(tool);
        }
        if let Some(ref package) = self.package {
            config.package.clone_from(package);
        }
        if let Some(ref binary_name) = self.binary_name {
            config.binary_name = Some(binary_name.clone());
        }
        if let Some(ref env_var) = self.env_var {
            config.env_var.clone_from(env_var);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn open_root(&self) -> Result<InstallRoot> {
        let path = expand_path(&self.root);
        InstallRoot::open(&path)
            .with_context(|| format!("Install root must exist: {}", path.display()))
    }
}

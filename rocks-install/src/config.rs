//! Install configuration
//!
//! Reads the optional `rocks-install.toml`:
//!
//! ```toml
//! [install]
//! tool = "rocks"
//! package = "rocks"
//! region = "libexec"
//! env_var = "ROCKS_DATA_DIR"
//! data_files = ["equities.csv", "etfs.csv"]
//! ```
//!
//! Every key is optional and falls back to the defaults above.

use crate::error::{InvalidConfigSnafu, ParseConfigSnafu, ReadConfigSnafu, Result};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, ensure};
use std::fmt;
use std::path::Path;

pub const DEFAULT_TOOL: &str = "rocks";
pub const DEFAULT_ENV_VAR: &str = "ROCKS_DATA_DIR";
pub const DEFAULT_DATA_FILES: [&str; 2] = ["equities.csv", "etfs.csv"];

/// Install root subdirectory that hosts the binary artifact
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// User-facing executables; the binary is installed under a distinct name
    Bin,
    /// Private executables not meant for direct invocation
    #[default]
    Libexec,
}

impl Region {
    pub fn dir_name(self) -> &'static str {
        match self {
            Region::Bin => "bin",
            Region::Libexec => "libexec",
        }
    }

    pub fn other(self) -> Region {
        match self {
            Region::Bin => Region::Libexec,
            Region::Libexec => Region::Bin,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Launcher name, also the binary name under `libexec`
    pub tool: String,
    /// Names the data directory `share/<package>`
    pub package: String,
    pub region: Region,
    /// Binary file name when `region = "bin"` (defaults to `<tool>-bin`)
    pub binary_name: Option<String>,
    /// Variable the launcher exports with the data directory path
    pub env_var: String,
    pub data_files: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            package: DEFAULT_TOOL.to_string(),
            region: Region::default(),
            binary_name: None,
            env_var: DEFAULT_ENV_VAR.to_string(),
            data_files: DEFAULT_DATA_FILES.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    install: InstallConfig,
}

impl InstallConfig {
    /// File name of the installed binary inside its region
    pub fn binary_file_name(&self, region: Region) -> String {
        match region {
            Region::Libexec => self.tool.clone(),
            Region::Bin => self
                .binary_name
                .clone()
                .unwrap_or_else(|| format!("{}-bin", self.tool)),
        }
    }

    /// Reject names that would escape their region or produce a broken launcher
    pub fn validate(&self) -> Result<()> {
        check_file_name("tool", &self.tool)?;
        check_file_name("package", &self.package)?;
        if let Some(name) = &self.binary_name {
            check_file_name("binary_name", name)?;
        }
        ensure!(
            is_env_var_name(&self.env_var),
            InvalidConfigSnafu {
                reason: format!("env_var {:?} is not a valid variable name", self.env_var),
            }
        );
        ensure!(
            !self.data_files.is_empty(),
            InvalidConfigSnafu {
                reason: "data_files must name at least one file",
            }
        );
        for file in &self.data_files {
            check_file_name("data_files", file)?;
        }
        Ok(())
    }
}

fn check_file_name(field: &str, value: &str) -> Result<()> {
    let plain = !value.is_empty()
        && value != "."
        && value != ".."
        && !value.contains('/')
        && !value.contains('\\')
        && !value.contains('\0');
    ensure!(
        plain,
        InvalidConfigSnafu {
            reason: format!("{field} {value:?} must be a plain file name"),
        }
    );
    Ok(())
}

fn is_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Load install config from a TOML file
pub fn load_config(config_path: &Path) -> Result<InstallConfig> {
    let content = std::fs::read_to_string(config_path).context(ReadConfigSnafu {
        path: config_path,
    })?;

    let file: ConfigFile = toml::from_str(&content).context(ParseConfigSnafu {
        path: config_path,
    })?;

    tracing::debug!("loaded install config from {}", config_path.display());
    Ok(file.install)
}

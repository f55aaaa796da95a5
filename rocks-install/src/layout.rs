//! Install root layout
//!
//! The root itself belongs to the package manager; only the `bin`, `libexec`
//! and `share/<package>` regions beneath it are created here.

use crate::config::Region;
use crate::error::{
    CreateDirSnafu, NotADirectorySnafu, ResolveRootSnafu, Result, RootNotDirectorySnafu,
};
use snafu::{ResultExt, ensure};
use std::fs;
use std::path::{Path, PathBuf};

/// Absolute, existing install root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRoot {
    root: PathBuf,
}

impl InstallRoot {
    /// Resolve an existing install root to its absolute path
    pub fn open(path: &Path) -> Result<Self> {
        let root = fs::canonicalize(path).context(ResolveRootSnafu { path })?;
        ensure!(root.is_dir(), RootNotDirectorySnafu { path: &root });
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn region_dir(&self, region: Region) -> PathBuf {
        self.root.join(region.dir_name())
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.region_dir(Region::Bin)
    }

    pub fn share_dir(&self) -> PathBuf {
        self.root.join("share")
    }

    /// `share/<package>`, home of the reference CSV files
    pub fn data_dir(&self, package: &str) -> PathBuf {
        self.share_dir().join(package)
    }
}

/// Expand path with tilde (~) to home directory
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Create a directory (and parents) unless it already exists.
/// Returns true when the directory was newly created.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.exists() {
        ensure!(path.is_dir(), NotADirectorySnafu { path });
        Ok(false)
    } else {
        fs::create_dir_all(path).context(CreateDirSnafu { path })?;
        tracing::debug!("created directory {}", path.display());
        Ok(true)
    }
}

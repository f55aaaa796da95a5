//! Error types for installation
//!
//! Every failure is fatal to the install: nothing is retried and nothing
//! already written is rolled back. Re-running the install is the recovery path.

use snafu::Snafu;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum InstallError {
    #[snafu(display("Failed to resolve install root {}: {source}", path.display()))]
    ResolveRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Install root is not a directory: {}", path.display()))]
    RootNotDirectory { path: PathBuf },

    #[snafu(display("Path exists but is not a directory: {}", path.display()))]
    NotADirectory { path: PathBuf },

    #[snafu(display("Failed to create directory {}: {source}", path.display()))]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Source artifact missing: {}", path.display()))]
    MissingSource { path: PathBuf },

    #[snafu(display("Failed to copy {} to {}: {source}", from.display(), to.display()))]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to remove {}: {source}", path.display()))]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display(
        "Launcher would exec itself: {} is both the launcher and its target",
        path.display()
    ))]
    SelfReference { path: PathBuf },

    #[snafu(display("Path is not valid UTF-8: {}", path.display()))]
    NonUtf8Path { path: PathBuf },

    #[snafu(display("Failed to render launcher: {source}"))]
    RenderLauncher { source: tera::Error },

    #[snafu(display("Failed to write launcher {}: {source}", path.display()))]
    WriteLauncher {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to set permissions on {}: {source}", path.display()))]
    Permissions {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to read {}: {source}", path.display()))]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to parse {}: {source}", path.display()))]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[snafu(display("Invalid install config: {reason}"))]
    InvalidConfig { reason: String },
}

pub type Result<T, E = InstallError> = std::result::Result<T, E>;

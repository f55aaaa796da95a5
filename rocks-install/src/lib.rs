//! # rocks-install
//!
//! Installer and launcher generator for the `rocks` ticker CLI.
//!
//! Places the compiled binary and its reference CSV data into an install
//! root (`bin`, `libexec`, `share`) and writes a `bin/<tool>` launcher that
//! exports the data directory and `exec`s the real binary.

pub mod config;
pub mod error;
pub mod installer;
pub mod layout;
pub mod report;
pub mod verify;

pub use config::{InstallConfig, Region, load_config};
pub use error::{InstallError, Result};
pub use installer::{ArtifactSources, InstallOutcome, InstallPlan, install};
pub use layout::InstallRoot;
pub use verify::{VerifyResult, verify_install};

/// Installer version, stamped into every generated launcher
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

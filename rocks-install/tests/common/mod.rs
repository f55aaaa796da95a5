#![allow(dead_code)]

use assert_cmd::Command;
use rocks_install::{ArtifactSources, InstallRoot};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

pub const EQUITIES: &str = "Ticker,Name\nAAPL,Apple Inc.\nMSFT,Microsoft Corporation\n";
pub const ETFS: &str = "Ticker,Name\nSPY,SPDR S&P 500 ETF Trust\n";

/// Stand-in for the compiled rocks binary: reports its environment and
/// arguments, and exits with `$2` when called as `--exit <code>`.
pub const FAKE_BINARY: &str = r#"#!/bin/sh
printf 'data=%s\n' "$ROCKS_DATA_DIR"
for arg in "$@"; do
    printf 'arg=%s\n' "$arg"
done
if [ "$1" = "--exit" ]; then
    exit "$2"
fi
"#;

static EXEC_LOCK: Mutex<()> = Mutex::new(());

/// Serialises write-then-exec so a concurrent fork cannot hold a freshly
/// written script open (ETXTBSY).
pub fn exec_lock() -> MutexGuard<'static, ()> {
    EXEC_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

pub struct Fixture {
    _tmp: TempDir,
    pub root: PathBuf,
    pub sources: ArtifactSources,
}

impl Fixture {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let base = fs::canonicalize(tmp.path()).expect("canonical temp dir");

        let root = base.join("prefix");
        fs::create_dir_all(&root).expect("create install root");

        let build = base.join("build");
        let data_dir = build.join("filtered_data");
        fs::create_dir_all(&data_dir).expect("create data dir");
        fs::write(data_dir.join("equities.csv"), EQUITIES).expect("write equities");
        fs::write(data_dir.join("etfs.csv"), ETFS).expect("write etfs");

        let binary = build.join("rocks");
        write_executable(&binary, FAKE_BINARY);

        Self {
            _tmp: tmp,
            root,
            sources: ArtifactSources { binary, data_dir },
        }
    }

    pub fn install_root(&self) -> InstallRoot {
        InstallRoot::open(&self.root).expect("open install root")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("rocks-install").expect("rocks-install binary");
        cmd.env_remove("ROCKS_INSTALL_ROOT")
            .env_remove("ROCKS_INSTALL_CONFIG");
        cmd
    }

    pub fn install_cmd(&self, extra: &[&str]) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("install")
            .arg("--root")
            .arg(&self.root)
            .arg("--binary")
            .arg(&self.sources.binary)
            .arg("--data-dir")
            .arg(&self.sources.data_dir)
            .args(extra);
        cmd
    }
}

pub fn write_executable(path: &Path, content: &str) {
    fs::write(path, content).expect("write executable");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path).expect("stat").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).expect("chmod");
    }
}

/// Every file under `dir` keyed by relative path, with its bytes
pub fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    collect(dir, dir, &mut files);
    files
}

fn collect(base: &Path, dir: &Path, files: &mut BTreeMap<PathBuf, Vec<u8>>) {
    for entry in fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();
        if path.is_dir() {
            collect(base, &path, files);
        } else {
            let rel = path.strip_prefix(base).expect("relative path").to_path_buf();
            files.insert(rel, fs::read(&path).expect("read file"));
        }
    }
}

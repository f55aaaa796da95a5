//! Launcher generation
//!
//! The launcher is a POSIX `sh` stub at `bin/<tool>`. It exports the data
//! directory, refuses to run when the binary is missing, then `exec`s the
//! binary so exit codes, signals and standard streams pass straight through.

use crate::error::{
    NonUtf8PathSnafu, RemoveSnafu, RenderLauncherSnafu, Result, WriteLauncherSnafu,
};
use crate::installer::InstallPlan;
use crate::installer::plan::ensure_distinct;
use crate::layout::ensure_dir;
use snafu::{OptionExt, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

const LAUNCHER_TEMPLATE: &str = r#"#!/bin/sh
# Generated by rocks-install {{ version }}; rewritten on every install.
{{ env_var }}={{ data_dir }}
export {{ env_var }}
if [ ! -x {{ target }} ]; then
    printf '%s\n' {{ missing }} >&2
    exit 1
fi
exec {{ target }} "$@"
"#;

/// Quote a string for a POSIX shell (single quotes, `'` escaped)
pub fn sh_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

fn utf8(path: &Path) -> Result<&str> {
    path.to_str().context(NonUtf8PathSnafu { path })
}

/// Render the launcher text for `plan` without touching the disk
pub fn render_launcher(plan: &InstallPlan) -> Result<String> {
    ensure_distinct(&plan.launcher, &plan.binary_target)?;

    let target = utf8(&plan.binary_target)?;
    let data_dir = utf8(&plan.data_dir)?;

    let mut context = Context::new();
    context.insert("version", crate::VERSION);
    context.insert("env_var", &plan.env_var);
    context.insert("data_dir", &sh_quote(data_dir));
    context.insert("target", &sh_quote(target));
    context.insert(
        "missing",
        &sh_quote(&format!(
            "{}: binary not found at {target}; reinstall {}",
            plan.tool, plan.tool
        )),
    );

    Tera::one_off(LAUNCHER_TEMPLATE, &context, false).context(RenderLauncherSnafu)
}

/// Write the launcher to `bin/<tool>`, replacing whatever was there
pub fn generate_launcher(plan: &InstallPlan) -> Result<PathBuf> {
    let script = render_launcher(plan)?;

    if let Some(parent) = plan.launcher.parent() {
        ensure_dir(parent)?;
    }
    // An older layout may have left a symlink here; never write through it.
    if fs::symlink_metadata(&plan.launcher).is_ok() {
        fs::remove_file(&plan.launcher).context(RemoveSnafu {
            path: &plan.launcher,
        })?;
    }
    fs::write(&plan.launcher, script).context(WriteLauncherSnafu {
        path: &plan.launcher,
    })?;

    tracing::info!(
        "wrote launcher {} -> {}",
        plan.launcher.display(),
        plan.binary_target.display()
    );
    Ok(plan.launcher.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Region;
    use crate::error::InstallError;

    fn plan(root: &str, region: Region, binary: &str) -> InstallPlan {
        let root = PathBuf::from(root);
        InstallPlan {
            tool: "rocks".to_string(),
            launcher: root.join("bin/rocks"),
            binary_target: root.join(region.dir_name()).join(binary),
            stale_binary: None,
            data_dir: root.join("share/rocks"),
            root,
            region,
            env_var: "ROCKS_DATA_DIR".to_string(),
            data_files: vec!["equities.csv".to_string(), "etfs.csv".to_string()],
        }
    }

    #[test]
    fn test_sh_quote() {
        assert_eq!(sh_quote("/opt/pkg"), "'/opt/pkg'");
        assert_eq!(sh_quote("/opt/it's"), r"'/opt/it'\''s'");
    }

    #[test]
    fn test_render_libexec_launcher() {
        let script = render_launcher(&plan("/opt/pkg", Region::Libexec, "rocks")).unwrap();

        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains("ROCKS_DATA_DIR='/opt/pkg/share/rocks'\nexport ROCKS_DATA_DIR\n"));
        assert!(script.contains("if [ ! -x '/opt/pkg/libexec/rocks' ]; then"));
        assert!(script.contains("binary not found at /opt/pkg/libexec/rocks"));
        assert!(script.contains("exit 1"));
        assert!(script.ends_with("exec '/opt/pkg/libexec/rocks' \"$@\"\n"));
    }

    #[test]
    fn test_render_bin_launcher_targets_renamed_binary() {
        let script = render_launcher(&plan("/opt/pkg", Region::Bin, "rocks-bin")).unwrap();
        assert!(script.contains("exec '/opt/pkg/bin/rocks-bin' \"$@\""));
        assert!(!script.contains("exec '/opt/pkg/bin/rocks' "));
    }

    #[test]
    fn test_render_refuses_self_exec() {
        let err = render_launcher(&plan("/opt/pkg", Region::Bin, "rocks")).unwrap_err();
        assert!(matches!(err, InstallError::SelfReference { .. }));
    }

    #[test]
    fn test_render_is_deterministic() {
        let p = plan("/opt/pkg", Region::Libexec, "rocks");
        assert_eq!(render_launcher(&p).unwrap(), render_launcher(&p).unwrap());
    }
}

//! Executable bits for the launcher and the installed binary

use crate::error::Result;
use crate::installer::InstallPlan;

/// Mark launcher and binary `rwxr-xr-x`
pub fn finalize_permissions(plan: &InstallPlan) -> Result<()> {
    #[cfg(unix)]
    {
        use crate::error::PermissionsSnafu;
        use snafu::ResultExt;
        use std::os::unix::fs::PermissionsExt;

        for path in [&plan.launcher, &plan.binary_target] {
            let mut perms = std::fs::metadata(path)
                .context(PermissionsSnafu { path })?
                .permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(path, perms).context(PermissionsSnafu { path })?;
            tracing::debug!("chmod 755 {}", path.display());
        }
    }
    #[cfg(not(unix))]
    tracing::debug!("skipping chmod for {}", plan.launcher.display());

    Ok(())
}

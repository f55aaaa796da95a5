//! `rocks-install launcher`: preview the generated launcher

use super::TargetArgs;
use anyhow::Result;
use rocks_install::installer::{InstallPlan, render_launcher};

pub fn handle_launcher(target: &TargetArgs) -> Result<()> {
    let config = target.resolve_config()?;
    let root = target.open_root()?;

    let plan = InstallPlan::resolve(&root, &config)?;
    print!("{}", render_launcher(&plan)?);

    Ok(())
}

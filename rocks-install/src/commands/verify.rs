//! `rocks-install verify`

use super::TargetArgs;
use anyhow::Result;
use rocks_install::report::print_verify_report;
use rocks_install::verify::verify_install;

pub fn handle_verify(target: &TargetArgs, json: bool) -> Result<()> {
    let config = target.resolve_config()?;
    let root = target.open_root()?;

    let result = verify_install(&root, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_verify_report(&result);
    }

    if !result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

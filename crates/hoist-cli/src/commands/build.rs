//! Build command implementation.

use miette::Result;

pub fn exec(verbose: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(hoist_util::errors::HoistError::Io)?;
    let project_dir = hoist_core::manifest::find_project_dir(&cwd)?;

    let result = hoist_ops::ops_build::build(&project_dir, verbose)?;

    hoist_util::progress::status_info("Output", &result.output.jar.display().to_string());
    hoist_util::progress::status_info("Sources", &result.output.sources_jar.display().to_string());

    Ok(())
}

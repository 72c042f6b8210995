//! Publish command implementation.

use hoist_ops::ops_publish::{self, PublishOptions};
use miette::Result;

pub async fn exec(dry_run: bool, verbose: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(hoist_util::errors::HoistError::Io)?;
    let project_dir = hoist_core::manifest::find_project_dir(&cwd)?;

    let opts = PublishOptions { dry_run, verbose };
    ops_publish::publish(&project_dir, &opts).await
}

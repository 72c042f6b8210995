//! Operation: publish the built artifacts to the configured Maven repository.
//!
//! Pipeline: build -> assemble the artifact set -> resolve credentials and
//! target -> upload (or print the resolved plan for `--dry-run`).

use std::path::Path;

use hoist_core::manifest::Manifest;
use hoist_core::properties::{self, load_key_values};
use hoist_maven::artifact::assemble;
use hoist_maven::publish::{self, PublicationRequest};
use hoist_util::progress::{status, status_warn};

use crate::ops_build;

/// Options for a publish invocation.
#[derive(Default)]
pub struct PublishOptions {
    /// Print the resolved publication instead of uploading.
    pub dry_run: bool,
    pub verbose: bool,
}

/// Run the full publish pipeline.
pub async fn publish(project_dir: &Path, opts: &PublishOptions) -> miette::Result<()> {
    // Fail fast on a missing [publish] section before spending a build.
    let manifest = Manifest::load(project_dir)?;
    let repository_url = manifest.repository()?.to_string();

    let build = ops_build::build(project_dir, opts.verbose)?;
    let identity = build.manifest.identity();
    let artifacts = assemble(&build.output);

    let env_overrides = load_key_values(&project_dir.join(properties::ENV_FILE))?;
    let props = load_key_values(&project_dir.join(properties::PROPERTIES_FILE))?;

    let request = publish::resolve(
        &identity,
        artifacts,
        &repository_url,
        &env_overrides,
        &props,
    );

    if request.target.credential.is_anonymous() {
        status_warn(
            "Warning",
            "no credentials resolved; publishing anonymously",
        );
    }

    if opts.dry_run {
        print_plan(&request);
        return Ok(());
    }

    status(
        "Publishing",
        &format!("{identity} to {}", request.target.repository.url),
    );

    let client = publish::build_client()?;
    for artifact in &request.artifacts {
        status(
            "Uploading",
            &format!("{} ({})", request.file_name(artifact), artifact.classifier),
        );
    }
    publish::upload(&client, &request).await?;

    status("Published", &identity.to_string());
    Ok(())
}

/// Print the fully resolved publication without touching the network.
fn print_plan(request: &PublicationRequest) {
    println!("Would publish {}", request.identity);
    println!("  repository: {}", request.target.repository.url);
    for artifact in &request.artifacts {
        println!(
            "  {}: {} -> {}",
            artifact.classifier,
            artifact.path.display(),
            request.artifact_url(artifact)
        );
    }
    match &request.target.credential.username {
        Some(user) => println!("  username: {user}"),
        None => println!("  username: (unset)"),
    }
    match &request.target.credential.password {
        Some(_) => println!("  password: ********"),
        None => println!("  password: (unset)"),
    }
}

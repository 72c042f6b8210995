//! Publication requests and the artifact upload transport.
//!
//! The upload path is single-shot: one `PUT` per file, no retries and no
//! reconciliation of partially uploaded sets. Retry policy, if wanted,
//! belongs to the CI layer driving the tool.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;

use hoist_core::identity::ProjectIdentity;
use hoist_util::errors::HoistError;

use crate::artifact::Artifact;
use crate::auth;
use crate::checksum;
use crate::credentials::{self, ResolvedCredential};
use crate::repository::MavenRepository;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Where a publication goes and how it authenticates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationTarget {
    pub repository: MavenRepository,
    pub credential: ResolvedCredential,
}

/// A fully resolved publication: what to upload, where, and as whom.
/// Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationRequest {
    pub identity: ProjectIdentity,
    pub artifacts: Vec<Artifact>,
    pub target: PublicationTarget,
}

/// Resolve a publication request from assembled artifacts.
///
/// Credentials are re-resolved on every call; nothing is cached between
/// publish attempts. This never fails: an unset credential produces an
/// anonymous request that the repository may still reject at upload time.
pub fn resolve(
    identity: &ProjectIdentity,
    artifacts: Vec<Artifact>,
    repository_url: &str,
    env_overrides: &BTreeMap<String, String>,
    props: &BTreeMap<String, String>,
) -> PublicationRequest {
    let credential = credentials::resolve_credentials(env_overrides, props);
    PublicationRequest {
        identity: identity.clone(),
        artifacts,
        target: PublicationTarget {
            repository: MavenRepository::new(repository_url),
            credential,
        },
    }
}

impl PublicationRequest {
    /// Remote file name for one of the request's artifacts.
    pub fn file_name(&self, artifact: &Artifact) -> String {
        match artifact.classifier.suffix() {
            Some(classifier) => self.identity.classified_jar_name(classifier),
            None => self.identity.jar_name(),
        }
    }

    /// Remote URL one of the request's artifacts is deployed at.
    pub fn artifact_url(&self, artifact: &Artifact) -> String {
        self.target.repository.file_url(
            &self.identity.group,
            &self.identity.name,
            &self.identity.version,
            &self.file_name(artifact),
        )
    }
}

/// Build the shared HTTP client for uploads.
pub fn build_client() -> miette::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("hoist/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            HoistError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// Upload every artifact in the request, each followed by its checksum
/// sidecars. Aborts on the first failure.
pub async fn upload(client: &Client, request: &PublicationRequest) -> miette::Result<()> {
    for artifact in &request.artifacts {
        let data = std::fs::read(&artifact.path).map_err(HoistError::Io)?;
        let url = request.artifact_url(artifact);

        tracing::debug!("Uploading {url} ({} bytes)", data.len());
        put_file(client, &request.target.credential, &url, data.clone()).await?;

        for (ext, digest) in checksum::sidecars(&data) {
            let sidecar_url = format!("{url}.{ext}");
            put_file(
                client,
                &request.target.credential,
                &sidecar_url,
                digest.into_bytes(),
            )
            .await?;
        }
    }
    Ok(())
}

/// `PUT` a single file to the repository.
async fn put_file(
    client: &Client,
    credential: &ResolvedCredential,
    url: &str,
    body: Vec<u8>,
) -> miette::Result<()> {
    let mut req = client.put(url).body(body);
    req = auth::apply_auth(req, credential);

    let resp = req.send().await.map_err(|e| HoistError::Network {
        message: format!("Request to {url} failed: {e}"),
    })?;

    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(HoistError::Authentication {
            message: format!("HTTP {status} from {url}"),
        }
        .into());
    }
    if !status.is_success() {
        return Err(HoistError::Network {
            message: format!("HTTP {status} uploading {url}"),
        }
        .into());
    }

    tracing::debug!("Uploaded {url}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{assemble, ArtifactClassifier, BuildOutput};
    use std::path::PathBuf;

    fn identity() -> ProjectIdentity {
        ProjectIdentity::new("me.owdding", "cats", "1.0.0-beta.1")
    }

    fn artifacts() -> Vec<Artifact> {
        assemble(&BuildOutput {
            jar: PathBuf::from("build/output/cats-1.0.0-beta.1.jar"),
            sources_jar: PathBuf::from("build/output/cats-1.0.0-beta.1-sources.jar"),
            jars: vec![PathBuf::from("build/output/cats-1.0.0-beta.1.jar")],
        })
    }

    const REPO: &str = "https://maven.example.com/repository/releases/";

    #[test]
    fn resolve_is_idempotent_for_fixed_inputs() {
        let id = identity();
        let env = BTreeMap::from([("MAVEN_USER".to_string(), "alice".to_string())]);
        let props = BTreeMap::new();

        let first = resolve(&id, artifacts(), REPO, &env, &props);
        let second = resolve(&id, artifacts(), REPO, &env, &props);
        assert_eq!(first, second);
    }

    #[test]
    fn anonymous_request_is_still_complete() {
        // Neither source set: the request keeps both artifacts and the
        // endpoint, and the publish proceeds anonymously.
        let request = PublicationRequest {
            identity: identity(),
            artifacts: artifacts(),
            target: PublicationTarget {
                repository: MavenRepository::new(REPO),
                credential: ResolvedCredential::default(),
            },
        };

        assert!(request.target.credential.is_anonymous());
        assert_eq!(request.artifacts.len(), 2);
        assert_eq!(
            request.target.repository.url,
            "https://maven.example.com/repository/releases"
        );
    }

    #[test]
    fn environment_value_lands_in_the_request() {
        let env = BTreeMap::from([("MAVEN_USER".to_string(), "alice".to_string())]);
        let props = BTreeMap::from([("maven_username".to_string(), "bob".to_string())]);

        let request = resolve(&identity(), artifacts(), REPO, &env, &props);
        assert_eq!(request.target.credential.username.as_deref(), Some("alice"));
    }

    #[test]
    fn artifact_urls_follow_maven_layout() {
        let request = resolve(
            &identity(),
            artifacts(),
            REPO,
            &BTreeMap::new(),
            &BTreeMap::new(),
        );

        let primary = &request.artifacts[0];
        let sources = &request.artifacts[1];
        assert_eq!(primary.classifier, ArtifactClassifier::Primary);

        assert_eq!(
            request.artifact_url(primary),
            "https://maven.example.com/repository/releases/me/owdding/cats/1.0.0-beta.1/cats-1.0.0-beta.1.jar"
        );
        assert_eq!(
            request.artifact_url(sources),
            "https://maven.example.com/repository/releases/me/owdding/cats/1.0.0-beta.1/cats-1.0.0-beta.1-sources.jar"
        );
    }
}

//! Maven repository abstraction: URL layout for published artifacts.

/// A Maven repository addressed by its base URL.
///
/// Credentials are deliberately not part of this type: they are resolved
/// fresh for every publish attempt (see [`crate::credentials`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenRepository {
    pub url: String,
}

impl MavenRepository {
    /// Build a repository from a base URL, normalizing the trailing slash.
    pub fn new(url: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Standard Maven layout path for a given coordinate.
    ///
    /// `me.owdding:cats:1.0.0` becomes `me/owdding/cats/1.0.0`
    pub fn coordinate_path(group: &str, name: &str, version: &str) -> String {
        format!("{}/{}/{}", group.replace('.', "/"), name, version)
    }

    /// Full URL to a specific file within the Maven repository.
    pub fn file_url(&self, group: &str, name: &str, version: &str, filename: &str) -> String {
        format!(
            "{}/{}/{}",
            self.url,
            Self::coordinate_path(group, name, version),
            filename
        )
    }

    /// URL to the JAR file for a given coordinate, with an optional classifier.
    pub fn jar_url(
        &self,
        group: &str,
        name: &str,
        version: &str,
        classifier: Option<&str>,
    ) -> String {
        let filename = match classifier {
            Some(c) => format!("{name}-{version}-{c}.jar"),
            None => format!("{name}-{version}.jar"),
        };
        self.file_url(group, name, version, &filename)
    }
}

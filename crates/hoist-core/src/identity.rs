use std::fmt;

use serde::{Deserialize, Serialize};

/// The (group, name, version) triple a publication is identified by.
///
/// Constructed once from the manifest at process start and passed by
/// reference into the build and publish paths; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIdentity {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ProjectIdentity {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// File name of the primary JAR: `name-version.jar`.
    pub fn jar_name(&self) -> String {
        format!("{}-{}.jar", self.name, self.version)
    }

    /// File name of a classified JAR, e.g. `name-version-sources.jar`.
    pub fn classified_jar_name(&self, classifier: &str) -> String {
        format!("{}-{}-{}.jar", self.name, self.version, classifier)
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_colon_separated() {
        let id = ProjectIdentity::new("me.owdding", "cats", "1.0.0-beta.1");
        assert_eq!(id.to_string(), "me.owdding:cats:1.0.0-beta.1");
    }

    #[test]
    fn jar_names() {
        let id = ProjectIdentity::new("com.example", "my-lib", "1.0");
        assert_eq!(id.jar_name(), "my-lib-1.0.jar");
        assert_eq!(id.classified_jar_name("sources"), "my-lib-1.0-sources.jar");
    }
}

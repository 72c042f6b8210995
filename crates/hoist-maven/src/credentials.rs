//! Layered credential resolution for repository publishing.
//!
//! Each credential field is resolved by walking an ordered list of lookups:
//! the environment first (with `.hoist.env` overrides applied), then the
//! build properties file. The first source holding a value wins; when none
//! does the field stays unset, which is legal. An anonymous publish is only
//! rejected (or not) by the repository itself at upload time.
//!
//! Resolution is memo-free: every publish attempt re-resolves, so rotated
//! CI secrets take effect without a restart.

use std::collections::BTreeMap;

use hoist_core::properties;

/// Environment variable holding the repository username.
pub const USERNAME_ENV: &str = "MAVEN_USER";
/// Environment variable holding the repository password.
pub const PASSWORD_ENV: &str = "MAVEN_PASS";
/// Build property holding the repository username.
pub const USERNAME_PROPERTY: &str = "maven_username";
/// Build property holding the repository password.
pub const PASSWORD_PROPERTY: &str = "maven_password";

/// A single place to look for a credential value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// A process environment variable, shadowed by `.hoist.env` entries.
    Environment { var: String },
    /// A key in `hoist.properties`.
    Property { key: String },
}

impl Lookup {
    pub fn environment(var: impl Into<String>) -> Self {
        Self::Environment { var: var.into() }
    }

    pub fn property(key: impl Into<String>) -> Self {
        Self::Property { key: key.into() }
    }
}

/// An ordered fallback chain of lookups for one credential field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSource {
    lookups: Vec<Lookup>,
}

impl CredentialSource {
    /// A chain of arbitrary lookups, tried in order.
    pub fn new(lookups: Vec<Lookup>) -> Self {
        Self { lookups }
    }

    /// Default username chain: `MAVEN_USER`, then `maven_username`.
    pub fn username() -> Self {
        Self::new(vec![
            Lookup::environment(USERNAME_ENV),
            Lookup::property(USERNAME_PROPERTY),
        ])
    }

    /// Default password chain: `MAVEN_PASS`, then `maven_password`.
    pub fn password() -> Self {
        Self::new(vec![
            Lookup::environment(PASSWORD_ENV),
            Lookup::property(PASSWORD_PROPERTY),
        ])
    }

    /// Walk the chain and return the first value present.
    pub fn resolve(
        &self,
        env_overrides: &BTreeMap<String, String>,
        props: &BTreeMap<String, String>,
    ) -> Option<String> {
        self.lookups.iter().find_map(|lookup| match lookup {
            Lookup::Environment { var } => properties::env_lookup(var, env_overrides),
            Lookup::Property { key } => props.get(key).cloned(),
        })
    }
}

/// Username and password for one publish attempt.
///
/// Either field may be unset. Absence is represented as `None`, never as an
/// empty string, so an anonymous request carries no Authorization header at
/// all instead of empty credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCredential {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ResolvedCredential {
    /// Whether no credential material was found in any source.
    pub fn is_anonymous(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Resolve username and password independently through the default chains.
pub fn resolve_credentials(
    env_overrides: &BTreeMap<String, String>,
    props: &BTreeMap<String, String>,
) -> ResolvedCredential {
    ResolvedCredential {
        username: CredentialSource::username().resolve(env_overrides, props),
        password: CredentialSource::password().resolve(env_overrides, props),
    }
}

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all hoist operations.
#[derive(Debug, Error, Diagnostic)]
pub enum HoistError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. Hoist.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Hoist.toml for syntax errors"))]
    Manifest { message: String },

    /// Compilation of Java sources failed.
    #[error("Compilation failed: {message}")]
    Compilation { message: String },

    /// JDK discovery or configuration failed.
    #[error("Toolchain error: {message}")]
    Toolchain { message: String },

    /// Network request or upload failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The repository rejected the credentials the publish was made with.
    #[error("Authentication failed: {message}")]
    #[diagnostic(help(
        "Set MAVEN_USER / MAVEN_PASS in the environment, or maven_username / maven_password in hoist.properties"
    ))]
    Authentication { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type HoistResult<T> = miette::Result<T>;

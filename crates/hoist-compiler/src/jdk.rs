//! JDK discovery.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Information about a discovered JDK.
#[derive(Debug, Clone)]
pub struct JdkInfo {
    pub home: PathBuf,
    pub version: String,
}

impl JdkInfo {
    /// Path to a tool in the JDK's `bin` directory (`javac`, `jar`).
    pub fn tool(&self, name: &str) -> PathBuf {
        tool_path(&self.home, name)
    }
}

/// Discover an installed JDK by checking common locations.
///
/// Search order: `JAVA_HOME` env -> common OS install paths.
pub fn discover_jdk() -> Option<JdkInfo> {
    if let Ok(home) = std::env::var("JAVA_HOME") {
        if let Some(info) = validate_jdk(&PathBuf::from(&home)) {
            return Some(info);
        }
    }

    for candidate in common_jdk_paths() {
        if let Some(info) = validate_jdk(&candidate) {
            return Some(info);
        }
    }

    None
}

/// Validate a JDK home directory by running `java -version`.
///
/// A JDK (not just a JRE) is required: `bin/javac` must exist too.
pub fn validate_jdk(home: &Path) -> Option<JdkInfo> {
    let java = tool_path(home, "java");
    let javac = tool_path(home, "javac");
    if !java.exists() || !javac.exists() {
        return None;
    }

    let output = Command::new(&java).arg("-version").output().ok()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let version = parse_java_version(&stderr)?;

    Some(JdkInfo {
        home: home.to_path_buf(),
        version,
    })
}

fn tool_path(home: &Path, name: &str) -> PathBuf {
    if cfg!(windows) {
        home.join("bin").join(format!("{name}.exe"))
    } else {
        home.join("bin").join(name)
    }
}

/// Parse a major version from `java -version` stderr output.
/// Example: `openjdk version "21.0.2" 2024-01-16` -> "21"
fn parse_java_version(output: &str) -> Option<String> {
    for line in output.lines() {
        if let Some(start) = line.find('"') {
            if let Some(end) = line[start + 1..].find('"') {
                let full = &line[start + 1..start + 1 + end];
                let major = if full.starts_with("1.") {
                    full.split('.').nth(1).unwrap_or(full)
                } else {
                    full.split('.').next().unwrap_or(full)
                };
                return Some(major.to_string());
            }
        }
    }
    None
}

fn common_jdk_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    #[cfg(target_os = "macos")]
    {
        let lib_jvm = PathBuf::from("/Library/Java/JavaVirtualMachines");
        if let Ok(entries) = fs::read_dir(&lib_jvm) {
            for entry in entries.filter_map(|e| e.ok()) {
                let contents = entry.path().join("Contents/Home");
                if contents.is_dir() {
                    paths.push(contents);
                }
            }
        }
        paths.push(PathBuf::from(
            "/opt/homebrew/opt/openjdk/libexec/openjdk.jdk/Contents/Home",
        ));
        paths.push(PathBuf::from(
            "/usr/local/opt/openjdk/libexec/openjdk.jdk/Contents/Home",
        ));
    }

    #[cfg(target_os = "linux")]
    {
        let jvm_dir = PathBuf::from("/usr/lib/jvm");
        if let Ok(entries) = fs::read_dir(&jvm_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                paths.push(entry.path());
            }
        }
        paths.push(PathBuf::from("/usr/local/java"));
    }

    #[cfg(target_os = "windows")]
    {
        for base in &[
            "C:\\Program Files\\Java",
            "C:\\Program Files\\Eclipse Adoptium",
        ] {
            let dir = PathBuf::from(base);
            if let Ok(entries) = fs::read_dir(&dir) {
                for entry in entries.filter_map(|e| e.ok()) {
                    paths.push(entry.path());
                }
            }
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_modern_version() {
        let out = "openjdk version \"21.0.2\" 2024-01-16\nOpenJDK Runtime Environment";
        assert_eq!(parse_java_version(out), Some("21".to_string()));
    }

    #[test]
    fn parse_legacy_version() {
        let out = "java version \"1.8.0_392\"";
        assert_eq!(parse_java_version(out), Some("8".to_string()));
    }

    #[test]
    fn parse_garbage_is_none() {
        assert_eq!(parse_java_version("no version here"), None);
    }

    #[test]
    fn validate_rejects_non_jdk_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(validate_jdk(tmp.path()).is_none());
    }
}

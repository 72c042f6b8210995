//! JAR packaging via the JDK's `jar` tool.

use std::path::{Path, PathBuf};

use hoist_util::errors::HoistError;
use hoist_util::process::CommandBuilder;

use crate::jdk::JdkInfo;

/// Package a directory tree into a JAR: `jar cf <out> -C <dir> .`
///
/// Used for both the primary JAR (over the classes directory) and the
/// sources JAR (over the source root).
pub fn package_jar(jdk: &JdkInfo, content_dir: &Path, jar_path: &Path) -> miette::Result<PathBuf> {
    let jar_bin = jdk.tool("jar");
    if !jar_bin.is_file() {
        return Err(HoistError::Toolchain {
            message: format!("jar tool not found at {}", jar_bin.display()),
        }
        .into());
    }

    let has_content = content_dir.is_dir()
        && std::fs::read_dir(content_dir)
            .map(|rd| rd.flatten().next().is_some())
            .unwrap_or(false);
    if !has_content {
        return Err(HoistError::Generic {
            message: format!("Nothing to package: {} is empty", content_dir.display()),
        }
        .into());
    }

    if let Some(parent) = jar_path.parent() {
        std::fs::create_dir_all(parent).map_err(HoistError::Io)?;
    }

    let args = vec![
        "cf".to_string(),
        jar_path.to_string_lossy().to_string(),
        "-C".to_string(),
        content_dir.to_string_lossy().to_string(),
        ".".to_string(),
    ];

    let cmd = CommandBuilder::new(jar_bin)
        .args(args)
        .env("JAVA_HOME", jdk.home.to_string_lossy().to_string());

    let output = cmd.exec().map_err(|e| HoistError::Toolchain {
        message: format!("Failed to execute jar: {e}"),
    })?;

    if output.status.success() {
        Ok(jar_path.to_path_buf())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(HoistError::Generic {
            message: format!("JAR packaging failed: {}", stderr.trim()),
        }
        .into())
    }
}

/// List every JAR sitting in an output directory.
///
/// The directory may hold stale JARs from earlier builds; the caller decides
/// which one is the designated output.
pub fn list_jars(output_dir: &Path) -> Vec<PathBuf> {
    let mut jars: Vec<PathBuf> = std::fs::read_dir(output_dir)
        .into_iter()
        .flatten()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "jar"))
        .collect();
    jars.sort();
    jars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_jars_filters_by_extension() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.jar"), b"x").unwrap();
        std::fs::write(tmp.path().join("b.txt"), b"x").unwrap();
        std::fs::write(tmp.path().join("c.jar"), b"x").unwrap();

        let jars = list_jars(tmp.path());
        assert_eq!(jars.len(), 2);
        assert!(jars.iter().all(|p| p.extension().unwrap() == "jar"));
    }

    #[test]
    fn list_jars_missing_dir_is_empty() {
        let jars = list_jars(Path::new("/nonexistent/output"));
        assert!(jars.is_empty());
    }
}

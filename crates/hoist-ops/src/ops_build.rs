//! Operation: build the project (compile, package the primary and sources JARs).
//!
//! Pipeline: manifest -> JDK discovery -> source discovery -> javac ->
//! `jar` packaging of the main JAR and the sources JAR.

use std::path::{Path, PathBuf};
use std::time::Instant;

use hoist_compiler::jar;
use hoist_compiler::javac;
use hoist_compiler::jdk::{self, JdkInfo};
use hoist_core::manifest::Manifest;
use hoist_maven::artifact::BuildOutput;
use hoist_util::errors::HoistError;
use hoist_util::progress::status;

/// Root of the Java source tree, relative to the project directory.
pub const SOURCE_ROOT: &str = "src/main/java";

/// Result of a build, carrying enough context for the publish operation.
pub struct BuildResult {
    pub manifest: Manifest,
    pub jdk: JdkInfo,
    pub output: BuildOutput,
}

/// Run the full build pipeline.
pub fn build(project_dir: &Path, verbose: bool) -> miette::Result<BuildResult> {
    let start = Instant::now();

    let manifest = Manifest::load(project_dir)?;
    let identity = manifest.identity();

    let jdk = jdk::discover_jdk().ok_or_else(|| HoistError::Toolchain {
        message: "No JDK found. Set JAVA_HOME or install a JDK.".to_string(),
    })?;
    if verbose {
        tracing::debug!("Using JDK {} at {}", jdk.version, jdk.home.display());
    }

    let source_root = project_dir.join(SOURCE_ROOT);
    let sources = collect_java_files(&source_root);
    if sources.is_empty() {
        return Err(HoistError::Generic {
            message: format!("No Java sources found under {}", source_root.display()),
        }
        .into());
    }

    status("Compiling", &format!("{identity} ({} files)", sources.len()));

    let build_dir = project_dir.join("build");
    let classes_dir = build_dir.join("classes");
    let compilation = javac::compile(
        &jdk,
        &sources,
        &classes_dir,
        manifest.package.java_target.as_deref(),
    )?;

    for diag in &compilation.diagnostics {
        match diag.severity {
            javac::DiagnosticSeverity::Error => tracing::error!("{}", render_diagnostic(diag)),
            javac::DiagnosticSeverity::Warning => tracing::warn!("{}", render_diagnostic(diag)),
        }
    }

    if !compilation.success {
        let first_error = compilation
            .diagnostics
            .iter()
            .find(|d| d.severity == javac::DiagnosticSeverity::Error)
            .map(render_diagnostic)
            .unwrap_or_else(|| "javac exited with an error".to_string());
        return Err(HoistError::Compilation {
            message: first_error,
        }
        .into());
    }

    let output_dir = build_dir.join("output");
    let jar_path = output_dir.join(identity.jar_name());
    let sources_jar_path = output_dir.join(identity.classified_jar_name("sources"));

    let primary_jar = jar::package_jar(&jdk, &compilation.classes_dir, &jar_path)?;
    let sources_jar = jar::package_jar(&jdk, &source_root, &sources_jar_path)?;

    status(
        "Finished",
        &format!("{identity} in {:.1}s", start.elapsed().as_secs_f32()),
    );

    Ok(BuildResult {
        manifest,
        jdk,
        output: BuildOutput {
            jar: primary_jar,
            sources_jar,
            jars: jar::list_jars(&output_dir),
        },
    })
}

fn render_diagnostic(diag: &javac::Diagnostic) -> String {
    match (&diag.file, diag.line) {
        (Some(file), Some(line)) => format!("{file}:{line}: {}", diag.message),
        (Some(file), None) => format!("{file}: {}", diag.message),
        _ => diag.message.clone(),
    }
}

/// Recursively collect `.java` files under a source root.
pub fn collect_java_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_into(root, &mut files);
    files.sort();
    files
}

fn collect_into(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_dir() {
            collect_into(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "java") {
            files.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_java_files_recurses_and_filters() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("me/owdding/cats");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("CatsFile.java"), "class CatsFile {}").unwrap();
        std::fs::write(nested.join("notes.txt"), "not a source").unwrap();
        std::fs::write(tmp.path().join("Top.java"), "class Top {}").unwrap();

        let files = collect_java_files(tmp.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "java"));
    }

    #[test]
    fn collect_java_files_missing_root_is_empty() {
        assert!(collect_java_files(Path::new("/nonexistent/src")).is_empty());
    }
}

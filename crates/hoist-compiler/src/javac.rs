//! `javac` invocation and diagnostic parsing.

use std::path::{Path, PathBuf};

use hoist_util::errors::HoistError;
use hoist_util::process::CommandBuilder;

use crate::jdk::JdkInfo;

/// Severity of a compiler diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A single diagnostic parsed from javac output.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

/// Result of one javac invocation.
#[derive(Debug)]
pub struct CompilationOutput {
    pub classes_dir: PathBuf,
    pub success: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile Java sources into `classes_dir`.
///
/// The compiler's own failure output is carried in the diagnostics,
/// unmodified; callers turn an unsuccessful output into a fatal error.
pub fn compile(
    jdk: &JdkInfo,
    sources: &[PathBuf],
    classes_dir: &Path,
    java_target: Option<&str>,
) -> miette::Result<CompilationOutput> {
    if sources.is_empty() {
        return Ok(CompilationOutput {
            classes_dir: classes_dir.to_path_buf(),
            success: true,
            diagnostics: vec![],
        });
    }

    std::fs::create_dir_all(classes_dir).map_err(HoistError::Io)?;

    let mut args: Vec<String> = vec![
        "-encoding".into(),
        "UTF-8".into(),
        "-d".into(),
        classes_dir.to_string_lossy().into(),
    ];

    if let Some(release) = java_target {
        args.push("--release".into());
        args.push(release.to_string());
    }

    for src in sources {
        args.push(src.to_string_lossy().into());
    }

    let cmd = CommandBuilder::new(jdk.tool("javac"))
        .args(args)
        .env("JAVA_HOME", jdk.home.to_string_lossy().to_string());

    let output = cmd.exec().map_err(|e| HoistError::Toolchain {
        message: format!("Failed to execute javac: {e}"),
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut diagnostics = parse_diagnostics(&stderr);

    if !output.status.success() && diagnostics.is_empty() {
        let raw = stderr.trim().to_string();
        if !raw.is_empty() {
            diagnostics.push(Diagnostic {
                severity: DiagnosticSeverity::Error,
                message: raw,
                file: None,
                line: None,
            });
        }
    }

    Ok(CompilationOutput {
        classes_dir: classes_dir.to_path_buf(),
        success: output.status.success(),
        diagnostics,
    })
}

/// Parse javac diagnostics from its stderr stream.
///
/// javac format: `src/Foo.java:14: error: ';' expected`
fn parse_diagnostics(stderr: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for line in stderr.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.contains(": error:") {
            diagnostics.push(parse_diagnostic_line(trimmed, DiagnosticSeverity::Error));
        } else if trimmed.contains(": warning:") {
            diagnostics.push(parse_diagnostic_line(trimmed, DiagnosticSeverity::Warning));
        }
    }

    diagnostics
}

fn parse_diagnostic_line(line: &str, severity: DiagnosticSeverity) -> Diagnostic {
    let marker = match severity {
        DiagnosticSeverity::Error => ": error:",
        DiagnosticSeverity::Warning => ": warning:",
    };
    let parts: Vec<&str> = line.splitn(2, marker).collect();

    let (file, line_num) = match parts.first() {
        Some(location) => {
            // `path:line`, where the path may contain colons on Windows.
            let loc_parts: Vec<&str> = location.rsplitn(2, ':').collect();
            if loc_parts.len() == 2 {
                let line_num = loc_parts[0].parse::<u32>().ok();
                (Some(loc_parts[1].to_string()), line_num)
            } else {
                (Some(location.to_string()), None)
            }
        }
        None => (None, None),
    };

    let message = parts.get(1).unwrap_or(&line).trim().to_string();

    Diagnostic {
        severity,
        message,
        file,
        line: line_num,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_line() {
        let diags = parse_diagnostics("src/main/java/Foo.java:14: error: ';' expected\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, DiagnosticSeverity::Error);
        assert_eq!(diags[0].file.as_deref(), Some("src/main/java/Foo.java"));
        assert_eq!(diags[0].line, Some(14));
        assert_eq!(diags[0].message, "';' expected");
    }

    #[test]
    fn parse_warning_line() {
        let diags =
            parse_diagnostics("Bar.java:3: warning: [deprecation] Foo has been deprecated\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, DiagnosticSeverity::Warning);
        assert_eq!(diags[0].line, Some(3));
    }

    #[test]
    fn non_diagnostic_lines_are_skipped() {
        let diags = parse_diagnostics("Note: some files use unchecked operations\n2 errors\n");
        assert!(diags.is_empty());
    }
}

//! Build artifacts and assembly of the published set.

use std::fmt;
use std::path::PathBuf;

/// Distinguishes artifacts sharing the same coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactClassifier {
    /// The main library JAR.
    Primary,
    /// The bundled sources JAR.
    Sources,
}

impl ArtifactClassifier {
    /// The classifier suffix used in Maven file names, if any.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Self::Primary => None,
            Self::Sources => Some("sources"),
        }
    }
}

impl fmt::Display for ArtifactClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Sources => write!(f, "sources"),
        }
    }
}

/// A single publishable file. Created by [`assemble`], read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub classifier: ArtifactClassifier,
    pub path: PathBuf,
}

/// Everything the toolchain produced for one completed build.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    /// The designated main output JAR.
    pub jar: PathBuf,
    /// The sources bundle packaged alongside it.
    pub sources_jar: PathBuf,
    /// Every JAR present in the output directory, including leftovers from
    /// earlier builds. Only the designated outputs above are published.
    pub jars: Vec<PathBuf>,
}

/// Assemble the published artifact set from a completed build.
///
/// Always exactly two artifacts: the primary JAR and the sources JAR, in
/// that order. Other JARs in the output directory are never picked up.
/// This performs no I/O; toolchain failures surface before it runs.
pub fn assemble(output: &BuildOutput) -> Vec<Artifact> {
    vec![
        Artifact {
            classifier: ArtifactClassifier::Primary,
            path: output.jar.clone(),
        },
        Artifact {
            classifier: ArtifactClassifier::Sources,
            path: output.sources_jar.clone(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn output_with_extra_jars() -> BuildOutput {
        BuildOutput {
            jar: PathBuf::from("build/output/my-lib-1.0.jar"),
            sources_jar: PathBuf::from("build/output/my-lib-1.0-sources.jar"),
            jars: vec![
                PathBuf::from("build/output/my-lib-1.0.jar"),
                PathBuf::from("build/output/my-lib-0.9.jar"),
                PathBuf::from("build/output/my-lib-1.0-sources.jar"),
            ],
        }
    }

    #[test]
    fn assemble_returns_exactly_primary_and_sources() {
        let artifacts = assemble(&output_with_extra_jars());
        assert_eq!(artifacts.len(), 2);

        let classifiers: HashSet<_> = artifacts.iter().map(|a| a.classifier).collect();
        assert!(classifiers.contains(&ArtifactClassifier::Primary));
        assert!(classifiers.contains(&ArtifactClassifier::Sources));
    }

    #[test]
    fn assemble_never_duplicates_a_classifier() {
        let artifacts = assemble(&output_with_extra_jars());
        let classifiers: HashSet<_> = artifacts.iter().map(|a| a.classifier).collect();
        assert_eq!(classifiers.len(), artifacts.len());
    }

    #[test]
    fn extra_jars_in_output_dir_yield_a_single_primary() {
        // The output dir holds a stale JAR from a previous version; only the
        // designated main output is published.
        let artifacts = assemble(&output_with_extra_jars());
        let primaries: Vec<_> = artifacts
            .iter()
            .filter(|a| a.classifier == ArtifactClassifier::Primary)
            .collect();
        assert_eq!(primaries.len(), 1);
        assert_eq!(
            primaries[0].path,
            PathBuf::from("build/output/my-lib-1.0.jar")
        );
    }

    #[test]
    fn classifier_suffixes() {
        assert_eq!(ArtifactClassifier::Primary.suffix(), None);
        assert_eq!(ArtifactClassifier::Sources.suffix(), Some("sources"));
    }
}

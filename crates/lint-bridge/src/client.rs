//! The lint engine's client surface, reduced to the hooks this bridge serves.

use lint_bridge_core::{BridgeError, Finding, Issue, LintSeverity, Project};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Per-project lint configuration as the engine queries it.
///
/// Only the enablement query exists. Severity overrides and ignore
/// patterns are owned by the host platform's rule profile and exclusions.
pub trait Configuration {
    /// Returns true if the engine should run checks for `issue`.
    fn is_enabled(&self, issue: &Issue) -> bool;
}

/// Hooks the lint engine calls back into during analysis.
pub trait LintClient {
    /// Returns the configuration for `project`.
    fn configuration(&self, project: &Project) -> &dyn Configuration;

    /// Reports one finding.
    ///
    /// # Errors
    ///
    /// Returns an error if the finding cannot be attributed to a rule.
    fn report(&mut self, finding: &Finding) -> Result<(), BridgeError>;

    /// Forwards an engine log message.
    fn log(
        &self,
        severity: LintSeverity,
        error: Option<&dyn std::error::Error>,
        message: Option<&str>,
    );

    /// Returns the source, class and library paths for `project`.
    ///
    /// # Errors
    ///
    /// Returns an error if the classpath cannot be resolved.
    fn class_path(&self, project: &Project) -> Result<ClassPathInfo, BridgeError>;

    /// Reads a file's full text. Returns an empty string if it cannot be read.
    fn read_file(&self, path: &Path) -> String;

    /// Returns the engine's XML parser.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Unsupported`] unless overridden.
    fn xml_parser(&self) -> Result<XmlParser, BridgeError> {
        Err(BridgeError::Unsupported {
            capability: "XML parser",
        })
    }

    /// Returns the engine's Java parser for `project`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Unsupported`] unless overridden.
    fn java_parser(&self, _project: &Project) -> Result<JavaParser, BridgeError> {
        Err(BridgeError::Unsupported {
            capability: "Java parser",
        })
    }
}

/// Handle to an engine-provided XML parser.
#[derive(Debug)]
pub struct XmlParser {
    _private: (),
}

/// Handle to an engine-provided Java parser.
#[derive(Debug)]
pub struct JavaParser {
    _private: (),
}

/// Source, compiled output and library paths handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassPathInfo {
    /// Source files.
    pub sources: Vec<PathBuf>,
    /// Compiled output locations.
    pub classes: Vec<PathBuf>,
    /// Library jars and directories.
    pub libraries: Vec<PathBuf>,
}

/// What the driver should analyse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintRequest {
    /// Root directories to scan.
    pub roots: Vec<PathBuf>,
}

impl LintRequest {
    /// Creates a request for the given roots.
    #[must_use]
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }
}

/// The lint engine's analysis driver.
pub trait LintDriver {
    /// Version of the lint engine, if it reports one.
    fn version(&self) -> Option<&str> {
        None
    }

    /// Runs one synchronous analysis pass, calling back into `client`.
    ///
    /// # Errors
    ///
    /// Returns the first error a client hook raised, or a driver failure.
    fn analyze(
        &mut self,
        request: &LintRequest,
        registry: &dyn IssueRegistry,
        client: &mut dyn LintClient,
    ) -> Result<(), BridgeError>;
}

/// The set of check definitions the engine knows about.
pub trait IssueRegistry {
    /// All registered issues.
    fn issues(&self) -> &[Issue];

    /// Looks up an issue by id.
    fn issue(&self, id: &str) -> Option<&Issue> {
        self.issues().iter().find(|i| i.id == id)
    }
}

/// An issue registry backed by a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticIssueRegistry {
    issues: Vec<Issue>,
}

impl StaticIssueRegistry {
    /// Creates a registry from a list of issues.
    #[must_use]
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }
}

impl IssueRegistry for StaticIssueRegistry {
    fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_registry_lookup() {
        let registry = StaticIssueRegistry::new(vec![
            Issue::new("UnusedResources", LintSeverity::Warning),
            Issue::new("NewApi", LintSeverity::Error),
        ]);
        assert_eq!(registry.issues().len(), 2);
        assert_eq!(
            registry.issue("NewApi").map(|i| i.default_severity),
            Some(LintSeverity::Error)
        );
        assert!(registry.issue("Missing").is_none());
    }
}

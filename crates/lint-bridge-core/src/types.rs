//! Lint engine types: check definitions, severities, locations and findings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Severity level reported by the lint engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    /// Fatal problem, the engine treats it as a build breaker.
    Fatal,
    /// Error that must be fixed.
    Error,
    /// Warning that should be addressed.
    Warning,
    /// Informational message.
    Informational,
    /// Ignored by the engine's own configuration.
    Ignore,
}

impl std::fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fatal => write!(f, "fatal"),
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Informational => write!(f, "informational"),
            Self::Ignore => write!(f, "ignore"),
        }
    }
}

/// A position inside a file, as reported by the lint engine.
///
/// Both fields are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-indexed).
    pub line: usize,
    /// Column number (0-indexed).
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Where a finding was reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File or directory the finding refers to.
    pub file: PathBuf,
    /// Start of the reported range, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Position>,
    /// End of the reported range, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
}

impl Location {
    /// Creates a location covering a whole file or directory.
    #[must_use]
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            start: None,
            end: None,
        }
    }

    /// Sets the start position.
    #[must_use]
    pub fn with_start(mut self, start: Position) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the end position.
    #[must_use]
    pub fn with_end(mut self, end: Position) -> Self {
        self.end = Some(end);
        self
    }

    /// Returns the reported path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file
    }
}

/// A check definition known to the lint engine's registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Stable identifier (e.g., "UnusedResources"). Doubles as the rule key.
    pub id: String,
    /// One-line summary.
    #[serde(default)]
    pub brief: String,
    /// Category name (e.g., "Performance").
    #[serde(default)]
    pub category: String,
    /// Priority from 1 (low) to 10 (high).
    #[serde(default)]
    pub priority: u8,
    /// Severity the engine uses when nothing overrides it.
    pub default_severity: LintSeverity,
}

impl Issue {
    /// Creates a new issue definition.
    #[must_use]
    pub fn new(id: impl Into<String>, default_severity: LintSeverity) -> Self {
        Self {
            id: id.into(),
            brief: String::new(),
            category: String::new(),
            priority: 5,
            default_severity,
        }
    }

    /// Sets the one-line summary.
    #[must_use]
    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = brief.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }
}

/// One issue instance reported by the lint engine during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the issue that fired.
    pub issue_id: String,
    /// Severity the engine assigned.
    pub severity: LintSeverity,
    /// Where it was found.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Engine-specific payload. Carried, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(
        issue_id: impl Into<String>,
        severity: LintSeverity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            issue_id: issue_id.into(),
            severity,
            location,
            message: message.into(),
            data: None,
        }
    }

    /// Attaches auxiliary engine data.
    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.location.file.display())?;
        if let Some(start) = self.location.start {
            write!(f, ":{}:{}", start.line + 1, start.column + 1)?;
        }
        write!(f, ": {} [{}] {}", self.severity, self.issue_id, self.message)
    }
}

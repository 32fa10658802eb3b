//! Quality platform model and the collaborator traits the bridge consumes.
//!
//! Everything behind these traits is owned by the host platform. The bridge
//! only queries rules and resources and hands over violations.

use crate::charset::Charset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The project currently being analysed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    /// Platform key (e.g., "org.example:app").
    pub key: String,
    /// Display name.
    pub name: String,
    /// Base directory of the project sources.
    pub base_dir: PathBuf,
}

impl Project {
    /// Creates a new project.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            base_dir: base_dir.into(),
        }
    }
}

/// The platform's addressable unit of attribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Resource {
    /// The project as a whole.
    Project {
        /// Project key.
        key: String,
    },
    /// A directory inside the project.
    Directory {
        /// Path relative to the project base directory.
        path: PathBuf,
        /// Declared language, set once the platform has indexed it.
        language: Option<String>,
    },
    /// A file inside the project.
    File {
        /// Path relative to the project base directory.
        path: PathBuf,
        /// Declared language, set once the platform has indexed it.
        language: Option<String>,
    },
}

impl Resource {
    /// Creates the project-level resource.
    #[must_use]
    pub fn project(project: &Project) -> Self {
        Self::Project {
            key: project.key.clone(),
        }
    }

    /// Creates an unresolved directory resource for a filesystem path.
    #[must_use]
    pub fn directory_from_path(path: &Path, project: &Project) -> Self {
        Self::Directory {
            path: relative_to(path, &project.base_dir),
            language: None,
        }
    }

    /// Creates an unresolved file resource for a filesystem path.
    #[must_use]
    pub fn file_from_path(path: &Path, project: &Project) -> Self {
        Self::File {
            path: relative_to(path, &project.base_dir),
            language: None,
        }
    }

    /// Returns the declared language key, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Project { .. } => None,
            Self::Directory { language, .. } | Self::File { language, .. } => language.as_deref(),
        }
    }

    /// Returns the project-relative path, or `None` for the project resource.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Project { .. } => None,
            Self::Directory { path, .. } | Self::File { path, .. } => Some(path),
        }
    }

    /// Returns the resource with its declared language set.
    #[must_use]
    pub fn with_language(self, lang: impl Into<String>) -> Self {
        match self {
            Self::Project { key } => Self::Project { key },
            Self::Directory { path, .. } => Self::Directory {
                path,
                language: Some(lang.into()),
            },
            Self::File { path, .. } => Self::File {
                path,
                language: Some(lang.into()),
            },
        }
    }

    /// Returns true for the project-level resource.
    #[must_use]
    pub fn is_project(&self) -> bool {
        matches!(self, Self::Project { .. })
    }
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}

/// Identifies a rule inside a named rule repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleKey {
    /// Repository namespace (e.g., "android-lint").
    pub repository: String,
    /// Rule key inside the repository.
    pub rule: String,
}

impl RuleKey {
    /// Creates a new rule key.
    #[must_use]
    pub fn new(repository: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            rule: rule.into(),
        }
    }
}

impl std::fmt::Display for RuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.repository, self.rule)
    }
}

/// A rule definition held by the platform's rule repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Repository and key.
    pub key: RuleKey,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// False when the rule has been administratively disabled.
    pub enabled: bool,
}

impl Rule {
    /// Creates an enabled rule.
    #[must_use]
    pub fn new(key: RuleKey) -> Self {
        Self {
            name: key.rule.clone(),
            key,
            enabled: true,
        }
    }

    /// Marks the rule as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Platform severity attached to an active rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulePriority {
    /// Informational.
    Info,
    /// Minor.
    Minor,
    /// Major.
    Major,
    /// Critical.
    Critical,
    /// Blocker.
    Blocker,
}

/// A rule activated in the current rule profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRule {
    /// Which rule is active.
    pub rule_key: RuleKey,
    /// Severity the profile assigns.
    pub priority: RulePriority,
}

impl ActiveRule {
    /// Creates a new active rule.
    #[must_use]
    pub fn new(rule_key: RuleKey, priority: RulePriority) -> Self {
        Self { rule_key, priority }
    }
}

/// The platform's record of one finding, tied to a rule and a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule that was violated.
    pub rule: RuleKey,
    /// Where the violation is attributed.
    pub resource: Resource,
    /// Line number (1-indexed). `None` for file or project level violations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Violation {
    /// Creates a violation of `rule` on `resource`.
    #[must_use]
    pub fn create(rule: &Rule, resource: Resource) -> Self {
        Self {
            rule: rule.key.clone(),
            resource,
            line: None,
            message: None,
        }
    }

    /// Sets the line number (1-indexed).
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.resource {
            Resource::Project { key } => write!(f, "{key}")?,
            Resource::Directory { path, .. } | Resource::File { path, .. } => {
                write!(f, "{}", path.display())?;
            }
        }
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        write!(f, ": [{}]", self.rule)?;
        if let Some(message) = &self.message {
            write!(f, " {message}")?;
        }
        Ok(())
    }
}

/// How the platform classifies an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Production sources.
    Main,
    /// Test sources.
    Test,
}

/// A file indexed by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFile {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Main or test classification.
    pub file_type: FileType,
    /// Declared language key, if detected.
    pub language: Option<String>,
}

impl InputFile {
    /// Creates a new input file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, file_type: FileType) -> Self {
        Self {
            path: path.into(),
            file_type,
            language: None,
        }
    }

    /// Sets the declared language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Selects input files.
pub trait FilePredicate {
    /// Returns true if `file` should be selected.
    fn apply(&self, file: &InputFile) -> bool;
}

/// Matches input files of one [`FileType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypePredicate(pub FileType);

impl FilePredicate for TypePredicate {
    fn apply(&self, file: &InputFile) -> bool {
        self.0 == file.file_type
    }
}

/// Looks up rule definitions by repository and key.
pub trait RuleFinder {
    /// Returns the rule, or `None` if the repository has no such key.
    fn find_by_key(&self, repository: &str, key: &str) -> Option<Rule>;
}

/// The active set of enabled rules for this run.
pub trait RulesProfile {
    /// Returns the active rule, or `None` if the rule is not in the profile.
    fn active_rule(&self, repository: &str, key: &str) -> Option<ActiveRule>;
}

/// The platform's sensor API for the current analysis.
pub trait SensorContext {
    /// Resolves an unresolved resource against the platform's index.
    ///
    /// Returns `None` if the platform has not indexed it.
    fn resource(&self, resource: &Resource) -> Option<Resource>;

    /// Persists a violation. Ownership transfers to the platform.
    fn save_violation(&mut self, violation: Violation);
}

/// The project's file system as the platform sees it.
pub trait FileSystem {
    /// Base directory of the project.
    fn base_dir(&self) -> &Path;

    /// Declared source encoding, or `None` if the platform declares none.
    fn encoding(&self) -> Option<Charset>;

    /// Returns the indexed input files matching `predicate`.
    fn input_files(&self, predicate: &dyn FilePredicate) -> Vec<InputFile>;

    /// Returns the paths of the input files matching `predicate`.
    fn files(&self, predicate: &dyn FilePredicate) -> Vec<PathBuf> {
        self.input_files(predicate)
            .into_iter()
            .map(|f| f.path)
            .collect()
    }
}

/// The classpath the build tool resolved for the project.
pub trait ProjectClasspath {
    /// Returns the classpath elements, in order.
    fn elements(&self) -> Vec<PathBuf>;
}

//! In-memory platform collaborators and a scripted lint driver.

#![allow(dead_code)]

use lint_bridge::{
    ActiveRule, BridgeError, Charset, FilePredicate, FileSystem, Finding, InputFile,
    IssueRegistry, LintClient, LintDriver, LintRequest, LintSeverity, Project, ProjectClasspath,
    Resource, Rule, RuleFinder, RuleKey, RulePriority, RulesProfile, SensorContext, Violation,
};
use std::path::{Path, PathBuf};

pub const REPOSITORY: &str = "android-lint";

pub struct MemoryRules(pub Vec<Rule>);

impl RuleFinder for MemoryRules {
    fn find_by_key(&self, repository: &str, key: &str) -> Option<Rule> {
        self.0
            .iter()
            .find(|r| r.key.repository == repository && r.key.rule == key)
            .cloned()
    }
}

pub struct MemoryProfile(pub Vec<ActiveRule>);

impl RulesProfile for MemoryProfile {
    fn active_rule(&self, repository: &str, key: &str) -> Option<ActiveRule> {
        self.0
            .iter()
            .find(|a| a.rule_key.repository == repository && a.rule_key.rule == key)
            .cloned()
    }
}

pub struct MemoryFs {
    pub base: PathBuf,
    pub encoding: Option<Charset>,
    pub files: Vec<InputFile>,
}

impl MemoryFs {
    pub fn empty(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            encoding: None,
            files: Vec::new(),
        }
    }
}

impl FileSystem for MemoryFs {
    fn base_dir(&self) -> &Path {
        &self.base
    }

    fn encoding(&self) -> Option<Charset> {
        self.encoding
    }

    fn input_files(&self, predicate: &dyn FilePredicate) -> Vec<InputFile> {
        self.files
            .iter()
            .filter(|f| predicate.apply(f))
            .cloned()
            .collect()
    }
}

pub struct MemoryClasspath(pub Vec<PathBuf>);

impl ProjectClasspath for MemoryClasspath {
    fn elements(&self) -> Vec<PathBuf> {
        self.0.clone()
    }
}

/// Indexes resources by kind and project-relative path.
#[derive(Default)]
pub struct MemorySensor {
    pub indexed: Vec<Resource>,
    pub saved: Vec<Violation>,
}

impl MemorySensor {
    pub fn with_java_file(mut self, path: &str) -> Self {
        let project = project();
        let absolute = project.base_dir.join(path);
        self.indexed
            .push(Resource::file_from_path(&absolute, &project).with_language("java"));
        self
    }
}

impl SensorContext for MemorySensor {
    fn resource(&self, resource: &Resource) -> Option<Resource> {
        self.indexed
            .iter()
            .find(|r| {
                std::mem::discriminant(*r) == std::mem::discriminant(resource)
                    && r.path() == resource.path()
            })
            .cloned()
    }

    fn save_violation(&mut self, violation: Violation) {
        self.saved.push(violation);
    }
}

/// What the scripted driver observed while running.
#[derive(Debug, Default)]
pub struct DriverLog {
    pub roots: Vec<PathBuf>,
    pub skipped: Vec<String>,
    pub reported: usize,
}

/// Replays a fixed list of findings, honouring the client's `is_enabled` gate
/// the way the real engine does.
pub struct ScriptedDriver {
    pub project: Project,
    pub findings: Vec<Finding>,
    pub log: DriverLog,
}

impl ScriptedDriver {
    pub fn new(project: Project, findings: Vec<Finding>) -> Self {
        Self {
            project,
            findings,
            log: DriverLog::default(),
        }
    }
}

impl LintDriver for ScriptedDriver {
    fn version(&self) -> Option<&str> {
        Some("31.1.0")
    }

    fn analyze(
        &mut self,
        request: &LintRequest,
        registry: &dyn IssueRegistry,
        client: &mut dyn LintClient,
    ) -> Result<(), BridgeError> {
        self.log.roots.clone_from(&request.roots);
        client.log(LintSeverity::Informational, None, Some("scanning"));

        for finding in &self.findings {
            let enabled = registry
                .issue(&finding.issue_id)
                .map_or(true, |issue| client.configuration(&self.project).is_enabled(issue));
            if !enabled {
                self.log.skipped.push(finding.issue_id.clone());
                continue;
            }
            client.report(finding)?;
            self.log.reported += 1;
        }
        Ok(())
    }
}

pub fn rule(key: &str) -> Rule {
    Rule::new(RuleKey::new(REPOSITORY, key))
}

pub fn active(key: &str) -> ActiveRule {
    ActiveRule::new(RuleKey::new(REPOSITORY, key), RulePriority::Major)
}

pub fn project() -> Project {
    Project::new("org.example:app", "app", "/proj")
}

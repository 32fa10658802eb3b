//! Translates lint findings into platform violations.

use std::path::Path;
use std::time::Instant;

use lint_bridge_core::{
    BridgeConfig, BridgeError, FileSystem, Finding, Issue, LintSeverity, Project,
    ProjectClasspath, Resource, Rule, RuleFinder, RulesProfile, SensorContext, Violation,
};
use tracing::{debug, info};

use crate::classpath;
use crate::client::{
    ClassPathInfo, Configuration, IssueRegistry, LintClient, LintDriver, LintRequest,
    StaticIssueRegistry,
};
use crate::logging;
use crate::reader;

/// Runs the lint engine over a project and records its findings as
/// violations.
///
/// The rule finder, file system view, rule profile and classpath are fixed
/// at construction. The sensor context and project are bound per run by
/// [`LintExecutor::execute`].
pub struct LintExecutor {
    rule_finder: Box<dyn RuleFinder>,
    fs: Box<dyn FileSystem>,
    profile: Box<dyn RulesProfile>,
    classpath: Box<dyn ProjectClasspath>,
    registry: Box<dyn IssueRegistry>,
    config: BridgeConfig,
}

impl LintExecutor {
    /// Creates an executor with an empty issue registry and default config.
    #[must_use]
    pub fn new(
        rule_finder: Box<dyn RuleFinder>,
        fs: Box<dyn FileSystem>,
        profile: Box<dyn RulesProfile>,
        classpath: Box<dyn ProjectClasspath>,
    ) -> Self {
        Self {
            rule_finder,
            fs,
            profile,
            classpath,
            registry: Box::new(StaticIssueRegistry::default()),
            config: BridgeConfig::default(),
        }
    }

    /// Sets the issue registry handed to the driver.
    #[must_use]
    pub fn with_registry(mut self, registry: Box<dyn IssueRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Sets the bridge configuration.
    #[must_use]
    pub fn with_config(mut self, config: BridgeConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the bridge configuration.
    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Runs one analysis pass over the project's base directory.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while reporting, typically an unknown
    /// or disabled rule, or a failure from the driver itself.
    pub fn execute(
        &self,
        sensor: &mut dyn SensorContext,
        project: &Project,
        driver: &mut dyn LintDriver,
    ) -> Result<(), BridgeError> {
        let version = driver.version().unwrap_or("unknown").to_string();
        info!("Execute Android Lint {version}...");
        let started = Instant::now();

        let request = LintRequest::new(vec![self.fs.base_dir().to_path_buf()]);
        let mut client = RunClient {
            executor: self,
            configuration: self.configuration(),
            sensor,
            project,
            saved: 0,
        };
        let outcome = driver.analyze(&request, self.registry.as_ref(), &mut client);
        let saved = client.saved;

        info!(
            "Execute Android Lint {version} done: {} ms, {saved} violation(s) saved",
            started.elapsed().as_millis()
        );
        outcome
    }

    /// Returns the lint configuration backed by the active rule profile.
    #[must_use]
    pub fn configuration(&self) -> ProfileConfiguration<'_> {
        ProfileConfiguration {
            profile: self.profile.as_ref(),
            repository: &self.config.repository,
        }
    }

    /// Converts one finding into a violation and saves it on `sensor`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::UnknownRule`] or [`BridgeError::DisabledRule`]
    /// if the finding's issue id has no usable rule. Nothing is saved then.
    pub fn translate(
        &self,
        finding: &Finding,
        sensor: &mut dyn SensorContext,
        project: &Project,
    ) -> Result<(), BridgeError> {
        let rule = self.find_rule(&finding.issue_id)?;
        let resource = self.resolve_resource(&finding.location.file, sensor, project);

        let mut violation = Violation::create(&rule, resource).with_message(&finding.message);
        if let Some(start) = finding.location.start {
            violation = violation.with_line(start.line.saturating_add(1));
        }

        debug!("Saving violation {violation}");
        sensor.save_violation(violation);
        Ok(())
    }

    /// Resolves the class path for the lint engine.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Classpath`] if a path cannot be canonicalized.
    pub fn class_path(&self) -> Result<ClassPathInfo, BridgeError> {
        classpath::resolve(self.fs.as_ref(), self.classpath.as_ref())
    }

    /// Reads a file with the platform's declared encoding, falling back to
    /// the configured one.
    #[must_use]
    pub fn read_file(&self, path: &Path) -> String {
        let charset = self.fs.encoding().unwrap_or(self.config.encoding);
        reader::read_file(path, charset)
    }

    fn find_rule(&self, issue_id: &str) -> Result<Rule, BridgeError> {
        let rule = self
            .rule_finder
            .find_by_key(&self.config.repository, issue_id)
            .ok_or_else(|| BridgeError::UnknownRule {
                key: issue_id.to_string(),
            })?;
        if !rule.enabled {
            return Err(BridgeError::DisabledRule {
                key: issue_id.to_string(),
            });
        }
        Ok(rule)
    }

    /// Falls back to the project when the path is not indexed or is not in
    /// the supported language.
    fn resolve_resource(
        &self,
        path: &Path,
        sensor: &dyn SensorContext,
        project: &Project,
    ) -> Resource {
        let unresolved = if path.is_dir() {
            Resource::directory_from_path(path, project)
        } else {
            Resource::file_from_path(path, project)
        };

        match sensor.resource(&unresolved) {
            Some(resource) if resource.language() == Some(self.config.language.as_str()) => {
                resource
            }
            _ => {
                debug!(
                    "No {} resource indexed for {}, attributing to project",
                    self.config.language,
                    path.display()
                );
                Resource::project(project)
            }
        }
    }
}

/// Answers the engine's enablement queries from the active rule profile.
#[derive(Clone, Copy)]
pub struct ProfileConfiguration<'a> {
    profile: &'a dyn RulesProfile,
    repository: &'a str,
}

impl Configuration for ProfileConfiguration<'_> {
    fn is_enabled(&self, issue: &Issue) -> bool {
        self.profile.active_rule(self.repository, &issue.id).is_some()
    }
}

/// The client the driver talks to during one run.
struct RunClient<'a> {
    executor: &'a LintExecutor,
    configuration: ProfileConfiguration<'a>,
    sensor: &'a mut dyn SensorContext,
    project: &'a Project,
    saved: usize,
}

impl LintClient for RunClient<'_> {
    fn configuration(&self, _project: &Project) -> &dyn Configuration {
        &self.configuration
    }

    fn report(&mut self, finding: &Finding) -> Result<(), BridgeError> {
        self.executor.translate(finding, &mut *self.sensor, self.project)?;
        self.saved += 1;
        Ok(())
    }

    fn log(
        &self,
        severity: LintSeverity,
        error: Option<&dyn std::error::Error>,
        message: Option<&str>,
    ) {
        logging::forward(severity, error, message);
    }

    fn class_path(&self, _project: &Project) -> Result<ClassPathInfo, BridgeError> {
        self.executor.class_path()
    }

    fn read_file(&self, path: &Path) -> String {
        self.executor.read_file(path)
    }
}

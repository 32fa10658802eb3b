//! # lint-bridge-core
//!
//! Data model and collaborator traits for bridging lint engine results into
//! a quality platform.
//!
//! This crate describes both sides of the bridge. It includes:
//!
//! - [`Finding`], [`Issue`] and [`LintSeverity`] from the lint engine
//! - [`Violation`], [`Resource`] and [`Rule`] from the quality platform
//! - [`RuleFinder`], [`RulesProfile`], [`SensorContext`], [`FileSystem`] and
//!   [`ProjectClasspath`], the platform services the bridge consumes
//! - [`BridgeError`] and [`BridgeConfig`]
//!
//! The translation itself lives in the `lint-bridge` crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod charset;
mod config;
mod error;
mod platform;
mod types;

pub use charset::{Charset, CharsetError};
pub use config::{BridgeConfig, ConfigError, DEFAULT_LANGUAGE, DEFAULT_REPOSITORY};
pub use error::BridgeError;
pub use platform::{
    ActiveRule, FilePredicate, FileSystem, FileType, InputFile, Project, ProjectClasspath,
    Resource, Rule, RuleFinder, RuleKey, RulePriority, RulesProfile, SensorContext,
    TypePredicate, Violation,
};
pub use types::{Finding, Issue, LintSeverity, Location, Position};

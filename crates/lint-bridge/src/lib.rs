//! # lint-bridge
//!
//! Bridges a lint engine's findings into a quality platform's
//! rule/violation model.
//!
//! The engine calls back into a [`LintClient`] for every finding. The bridge
//! resolves the finding's rule, attributes it to a file, directory or the
//! whole project, and hands the resulting [`Violation`] to the platform.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lint_bridge::{LintExecutor, LocalFileSystem, Charset};
//!
//! let fs = LocalFileSystem::scan("./app").with_encoding(Charset::Utf8);
//! let executor = LintExecutor::new(rule_finder, Box::new(fs), profile, classpath)
//!     .with_registry(registry);
//!
//! executor.execute(&mut sensor, &project, &mut driver)?;
//! ```
//!
//! Unknown or disabled rules abort the run with a [`BridgeError`]. Files the
//! platform has not indexed are attributed to the project instead.

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use lint_bridge_core::*;

pub mod classpath;
mod client;
mod executor;
mod fs;
pub mod logging;
mod reader;

pub use client::{
    ClassPathInfo, Configuration, IssueRegistry, JavaParser, LintClient, LintDriver, LintRequest,
    StaticIssueRegistry, XmlParser,
};
pub use executor::{LintExecutor, ProfileConfiguration};
pub use fs::LocalFileSystem;
pub use reader::read_file;

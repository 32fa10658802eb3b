//! Errors raised while bridging lint results into the platform.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while translating lint results.
#[derive(Debug, Error, Diagnostic)]
pub enum BridgeError {
    /// The rule repository has no rule for the finding's issue id.
    #[error("No Android Lint rule for key {key}")]
    #[diagnostic(
        code(lint_bridge::unknown_rule),
        help("the rule repository is out of sync with the lint engine's issue registry")
    )]
    UnknownRule {
        /// Issue id that could not be mapped.
        key: String,
    },

    /// The rule exists but has been administratively disabled.
    #[error("Android Lint rule with key {key} disabled")]
    #[diagnostic(code(lint_bridge::disabled_rule))]
    DisabledRule {
        /// Issue id of the disabled rule.
        key: String,
    },

    /// A classpath element could not be canonicalized.
    #[error("Unable to configure project classpath: {path}")]
    #[diagnostic(code(lint_bridge::classpath))]
    Classpath {
        /// Element that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A lint client hook this bridge does not provide.
    #[error("{capability} is not supported by this integration")]
    #[diagnostic(code(lint_bridge::unsupported))]
    Unsupported {
        /// Name of the hook.
        capability: &'static str,
    },

    /// The lint driver failed.
    #[error("Lint driver error: {0}")]
    #[diagnostic(code(lint_bridge::driver))]
    Driver(String),
}

impl BridgeError {
    /// Returns true for errors that indicate a broken rule or classpath setup.
    ///
    /// These recur for every finding of the same kind, so callers should
    /// abort the run instead of continuing.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownRule { .. } | Self::DisabledRule { .. } | Self::Classpath { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_rule_message() {
        let err = BridgeError::UnknownRule {
            key: "NewApi".to_string(),
        };
        insta::assert_snapshot!(err.to_string(), @"No Android Lint rule for key NewApi");
    }

    #[test]
    fn disabled_rule_message() {
        let err = BridgeError::DisabledRule {
            key: "NewApi".to_string(),
        };
        insta::assert_snapshot!(err.to_string(), @"Android Lint rule with key NewApi disabled");
    }

    #[test]
    fn configuration_error_kinds() {
        let unknown = BridgeError::UnknownRule { key: "A".into() };
        let disabled = BridgeError::DisabledRule { key: "A".into() };
        let classpath = BridgeError::Classpath {
            path: PathBuf::from("/missing"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let unsupported = BridgeError::Unsupported {
            capability: "XML parser",
        };

        assert!(unknown.is_configuration_error());
        assert!(disabled.is_configuration_error());
        assert!(classpath.is_configuration_error());
        assert!(!unsupported.is_configuration_error());
        assert!(!BridgeError::Driver("boom".into()).is_configuration_error());
    }

    #[test]
    fn diagnostic_code_is_set() {
        let err = BridgeError::UnknownRule { key: "A".into() };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("lint_bridge::unknown_rule"));
    }
}

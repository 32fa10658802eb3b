//! Forwards lint engine log messages to `tracing`.

use lint_bridge_core::LintSeverity;
use tracing::Level;

/// Maps an engine severity onto the host log level.
#[must_use]
pub fn log_level(severity: LintSeverity) -> Level {
    match severity {
        LintSeverity::Fatal | LintSeverity::Error => Level::ERROR,
        LintSeverity::Warning => Level::WARN,
        LintSeverity::Informational => Level::INFO,
        LintSeverity::Ignore => Level::DEBUG,
    }
}

/// Emits one `tracing` event for an engine log call.
pub fn forward(
    severity: LintSeverity,
    error: Option<&dyn std::error::Error>,
    message: Option<&str>,
) {
    let message = message.unwrap_or_default();

    // tracing macros need the level at compile time
    match (severity, error) {
        (LintSeverity::Fatal | LintSeverity::Error, Some(e)) => {
            tracing::error!(error = %e, "{message}");
        }
        (LintSeverity::Fatal | LintSeverity::Error, None) => tracing::error!("{message}"),
        (LintSeverity::Warning, Some(e)) => tracing::warn!(error = %e, "{message}"),
        (LintSeverity::Warning, None) => tracing::warn!("{message}"),
        (LintSeverity::Informational, Some(e)) => tracing::info!(error = %e, "{message}"),
        (LintSeverity::Informational, None) => tracing::info!("{message}"),
        (LintSeverity::Ignore, Some(e)) => tracing::debug!(error = %e, "{message}"),
        (LintSeverity::Ignore, None) => tracing::debug!("{message}"),
    }
}

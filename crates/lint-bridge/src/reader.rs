//! File reading for the lint engine.

use std::path::Path;

use lint_bridge_core::Charset;
use tracing::debug;

/// Reads `path` and decodes it with `charset`.
///
/// Unreadable files yield an empty string so the engine can carry on with
/// the rest of the project. Malformed bytes are replaced, not rejected.
#[must_use]
pub fn read_file(path: &Path, charset: Charset) -> String {
    match std::fs::read(path) {
        Ok(bytes) => charset.decode(&bytes),
        Err(e) => {
            debug!("Cannot read {}: {}", path.display(), e);
            String::new()
        }
    }
}

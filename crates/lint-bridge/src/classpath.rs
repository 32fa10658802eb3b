//! Classpath resolution for the lint engine.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use lint_bridge_core::{BridgeError, FileSystem, FileType, ProjectClasspath, TypePredicate};
use tracing::debug;

use crate::client::ClassPathInfo;

/// Splits the project inputs into sources and compiled outputs, and filters
/// the library classpath.
///
/// Main-classified inputs stand in for sources and test-classified inputs
/// for compiled outputs. A library element is dropped only when it is an
/// existing directory whose canonical path is one of those outputs. Files
/// and elements that do not exist on disk are kept as they are.
///
/// # Errors
///
/// Returns [`BridgeError::Classpath`] if an existing path cannot be
/// canonicalized or its existence cannot be checked.
pub fn resolve(
    fs: &dyn FileSystem,
    classpath: &dyn ProjectClasspath,
) -> Result<ClassPathInfo, BridgeError> {
    let sources = fs.files(&TypePredicate(FileType::Main));
    // FIXME: test-classified inputs are not compiled output; needs a binary-dir query on FileSystem
    let classes = fs.files(&TypePredicate(FileType::Test));

    let mut binary_dirs = HashSet::new();
    for dir in &classes {
        if exists(dir)? {
            binary_dirs.insert(canonical(dir)?);
        }
    }

    let mut libraries = Vec::new();
    for element in classpath.elements() {
        let keep = element.is_file()
            || !exists(&element)?
            || !binary_dirs.contains(&canonical(&element)?);
        if keep {
            libraries.push(element);
        } else {
            debug!("Skipping classpath entry already in outputs: {}", element.display());
        }
    }

    Ok(ClassPathInfo {
        sources,
        classes,
        libraries,
    })
}

fn exists(path: &Path) -> Result<bool, BridgeError> {
    path.try_exists().map_err(|e| BridgeError::Classpath {
        path: path.to_path_buf(),
        source: e,
    })
}

fn canonical(path: &Path) -> Result<PathBuf, BridgeError> {
    path.canonicalize().map_err(|e| BridgeError::Classpath {
        path: path.to_path_buf(),
        source: e,
    })
}

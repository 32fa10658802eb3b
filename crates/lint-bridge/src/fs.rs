//! A [`FileSystem`] view over a project directory on local disk.

use std::path::{Component, Path, PathBuf};

use lint_bridge_core::{Charset, FilePredicate, FileSystem, FileType, InputFile};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Directory names whose contents are classified as test sources.
const TEST_DIRS: &[&str] = &["test", "tests", "androidTest", "testDebug"];

/// Directory names never indexed.
const SKIPPED_DIRS: &[&str] = &["build", "target"];

/// Input files found under a base directory.
///
/// The directory is walked once, when the view is created.
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    base_dir: PathBuf,
    encoding: Option<Charset>,
    files: Vec<InputFile>,
}

impl LocalFileSystem {
    /// Walks `base_dir` and indexes every regular file below it.
    ///
    /// No encoding is declared until [`LocalFileSystem::with_encoding`] sets one.
    #[must_use]
    pub fn scan(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let mut files = Vec::new();

        for entry in WalkDir::new(&base_dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped(e))
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let relative = path.strip_prefix(&base_dir).unwrap_or(path);
            let mut input = InputFile::new(path, classify(relative));
            if let Some(language) = language_of(path) {
                input = input.with_language(language);
            }
            files.push(input);
        }

        debug!("Indexed {} files under {}", files.len(), base_dir.display());

        Self {
            base_dir,
            encoding: None,
            files,
        }
    }

    /// Declares the source encoding of the indexed files.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Charset) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Returns every indexed file.
    #[must_use]
    pub fn all(&self) -> &[InputFile] {
        &self.files
    }
}

impl FileSystem for LocalFileSystem {
    fn base_dir(&self) -> &Path {
        &self.base_dir
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

fn is_skipped(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.iter().any(|d| *d == name)
}

/// Classifies a path relative to the base directory.
fn classify(relative: &Path) -> FileType {
    let in_test_dir = relative.components().any(|c| match c {
        Component::Normal(s) => {
            let name = s.to_string_lossy();
            TEST_DIRS.iter().any(|d| *d == name)
        }
        _ => false,
    });
    if in_test_dir {
        FileType::Test
    } else {
        FileType::Main
    }
}

fn language_of(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "java" => Some("java"),
        "kt" | "kts" => Some("kotlin"),
        "xml" => Some("xml"),
        _ => None,
    }
}

//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to rules about the file being analyzed.
///
/// Rules can use this to make context-aware decisions (e.g., skip checks
/// in test sources) and to attach relative paths to diagnostics.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Whether this file is detected as a test source.
    pub is_test: bool,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let is_test = Self::detect_test_file(path);
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            is_test,
            relative_path,
        }
    }

    /// Detects if a file is a test source based on Kotlin path conventions.
    fn detect_test_file(path: &Path) -> bool {
        for component in path.components() {
            if let std::path::Component::Normal(s) = component {
                let s = s.to_string_lossy();
                if s == "test" || s == "androidTest" || s == "commonTest" {
                    return true;
                }
            }
        }

        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if file_name.ends_with("Test.kt") || file_name.ends_with("Tests.kt") {
                return true;
            }
        }

        false
    }
}

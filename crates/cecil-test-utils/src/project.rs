//! [`TestProject`] fixture for settings test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Canonical settings file, relative to the project root.
pub const CANONICAL_SETTINGS: &str =
    "ProjectSettings/Packages/se.hertzole.cecilattributes/CecilAttributesSettings.toml";

/// Legacy settings file, relative to the project root.
pub const LEGACY_SETTINGS: &str = "ProjectSettings/CecilAttributesSettings.toml";

/// A temporary project directory with helpers for planting files and
/// asserting on them.
///
/// # Example
///
/// ```rust,no_run
/// use cecil_test_utils::project::{LEGACY_SETTINGS, TestProject};
///
/// let project = TestProject::new();
/// project.write(LEGACY_SETTINGS, "include_logs_in_build = false\n");
/// project.assert_file_exists(LEGACY_SETTINGS);
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `path` (relative to the project root).
    pub fn path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }

    /// Write `content` to `path`, creating parent directories.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    /// Read the file at `path` as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.path(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Mark the file at `path` read-only.
    pub fn set_readonly(&self, path: &str) {
        let full_path = self.path(path);
        let mut perms = fs::metadata(&full_path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&full_path, perms).unwrap();
    }

    /// Whether `path` (relative to the project root) carries the read-only
    /// attribute.
    pub fn is_readonly(&self, path: &str) -> bool {
        fs::metadata(self.path(path)).unwrap().permissions().readonly()
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}

//! Where the settings file lives inside a project.
//!
//! ```text
//! <project>/
//!   ProjectSettings/
//!     CecilAttributesSettings.toml                  (legacy, migrated once)
//!     Packages/
//!       se.hertzole.cecilattributes/
//!         CecilAttributesSettings.toml              (canonical)
//! ```

use std::path::Path;

use cecil_fs::NormalizedPath;

/// Project-relative directory holding all project settings.
pub const SETTINGS_ROOT: &str = "ProjectSettings";

/// Namespace directory under [`SETTINGS_ROOT`] owned by this package.
pub const PACKAGE_NAMESPACE: &str = "Packages/se.hertzole.cecilattributes";

/// File name of the settings record.
pub const SETTINGS_FILE_NAME: &str = "CecilAttributesSettings.toml";

/// Environment variable naming the project root for [`SettingsLayout::from_env`].
pub const PROJECT_ROOT_ENV: &str = "CECIL_PROJECT_ROOT";

/// Resolves the canonical and legacy settings paths for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLayout {
    project_root: NormalizedPath,
    namespace: String,
    file_name: String,
}

impl SettingsLayout {
    /// Layout rooted at `project_root` with the package's default names.
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            project_root: NormalizedPath::new(project_root),
            namespace: PACKAGE_NAMESPACE.to_string(),
            file_name: SETTINGS_FILE_NAME.to_string(),
        }
    }

    /// Layout rooted at `$CECIL_PROJECT_ROOT`, or the current directory.
    pub fn from_env() -> Self {
        match std::env::var_os(PROJECT_ROOT_ENV) {
            Some(root) if !root.is_empty() => Self::new(root),
            _ => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
                Self::new(cwd)
            }
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Override the file name. The extension picks the on-disk format.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn project_root(&self) -> &NormalizedPath {
        &self.project_root
    }

    pub fn settings_root(&self) -> NormalizedPath {
        self.project_root.join(SETTINGS_ROOT)
    }

    /// Directory holding the canonical file.
    pub fn directory(&self) -> NormalizedPath {
        self.settings_root().join(&self.namespace)
    }

    /// The supported location of the settings file.
    pub fn canonical_path(&self) -> NormalizedPath {
        self.directory().join(&self.file_name)
    }

    /// The deprecated location, directly under the settings root.
    pub fn legacy_path(&self) -> NormalizedPath {
        self.settings_root().join(&self.file_name)
    }
}

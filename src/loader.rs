//! Template body loading for droidstamp.
//! Bodies come from the built-in catalog, optionally overridden per file by
//! `.j2` files found in a local template directory.
use crate::catalog::{find_template, TemplateFile};
use crate::constants::TEMPLATE_EXTENSION;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Represents the source location of template bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Bodies embedded in the binary
    Builtin,
    /// Local directory of override files
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Builtin => write!(f, "built-in templates"),
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

impl TemplateSource {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::FileSystem(path),
            None => Self::Builtin,
        }
    }
}

/// Resolved template bodies: built-ins plus any overrides, keyed by id.
#[derive(Debug, Default)]
pub struct Templates {
    overrides: IndexMap<String, String>,
}

impl Templates {
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Returns the body to render for `file`.
    pub fn body<'a>(&'a self, file: &'static TemplateFile) -> &'a str {
        self.overrides.get(file.id).map(String::as_str).unwrap_or(file.body)
    }

    pub fn is_overridden(&self, id: &str) -> bool {
        self.overrides.contains_key(id)
    }
}

/// Returns true when `filename` looks like `<name>.<ext>.j2`.
pub fn is_template_path(filename: &str) -> bool {
    let parts: Vec<&str> = filename.split('.').collect();
    parts.len() > 2 && parts.last() == Some(&TEMPLATE_EXTENSION)
}

/// Trait for loading template bodies from different sources.
pub trait TemplateLoader {
    fn load(&self) -> Result<Templates>;
}

/// Loader for override templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// Collects every `<id>.j2` file under the directory.
    ///
    /// # Errors
    /// * `Error::TemplateDoesNotExistsError` if the directory doesn't exist
    fn load(&self) -> Result<Templates> {
        let root = self.path.as_ref();
        if !root.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: root.display().to_string(),
            });
        }

        let mut overrides = IndexMap::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(filename) = entry.file_name().to_str() else {
                continue;
            };
            if !is_template_path(filename) {
                continue;
            }

            let Some(id) = filename.strip_suffix(".j2") else {
                continue;
            };
            if find_template(id).is_none() {
                warn!("Ignoring unknown template '{}'", entry.path().display());
                continue;
            }
            if overrides.contains_key(id) {
                warn!("Duplicate override for '{}', using '{}'", id, entry.path().display());
            }

            debug!("Loading override '{}' from '{}'", id, entry.path().display());
            let body = fs::read_to_string(entry.path())?;
            overrides.insert(id.to_string(), body);
        }

        Ok(Templates { overrides })
    }
}

/// Loader for the embedded bodies.
pub struct BuiltinLoader;

impl TemplateLoader for BuiltinLoader {
    fn load(&self) -> Result<Templates> {
        Ok(Templates::builtin())
    }
}

/// Returns the template bodies for the provided source
pub fn load_templates(source: TemplateSource) -> Result<Templates> {
    debug!("Using {}", source);

    let loader: Box<dyn TemplateLoader> = match source {
        TemplateSource::Builtin => Box::new(BuiltinLoader),
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path)),
    };

    loader.load()
}

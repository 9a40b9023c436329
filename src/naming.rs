//! Validated names that flow into the templates.
//!
//! Every placeholder value is parsed into one of these types before a
//! context is built, so templates only ever see well-formed identifiers.

use std::fmt;
use std::sync::LazyLock;

use cruet::Inflector;
use log::debug;
use regex::Regex;

use crate::constants::{COMPONENT_SUFFIXES, KOTLIN_HARD_KEYWORDS};
use crate::error::{Error, Result};

static RAW_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_\-]*$").expect("valid name pattern"));

static PASCAL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("valid name pattern"));

static SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid segment pattern"));

/// Feature name in PascalCase, e.g. `UserProfile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureName(String);

impl FeatureName {
    /// Parses a feature name given in PascalCase, camelCase, snake_case or
    /// kebab-case, and strips a redundant component suffix.
    ///
    /// # Examples
    /// ```
    /// use droidstamp::naming::FeatureName;
    ///
    /// let name = FeatureName::parse("user_profile_activity").unwrap();
    /// assert_eq!(name.as_str(), "UserProfile");
    /// assert_eq!(name.lower_name(), "user_profile");
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::ValidationError("feature name must not be empty".to_string()));
        }
        if !RAW_NAME.is_match(raw) {
            return Err(Error::ValidationError(format!(
                "feature name '{raw}' must start with a letter and contain only letters, digits, '_' or '-'"
            )));
        }

        let pascal = to_pascal(raw);
        if !PASCAL_NAME.is_match(&pascal) {
            return Err(Error::ValidationError(format!(
                "feature name '{raw}' does not normalize to a valid class name (got '{pascal}')"
            )));
        }

        let name = strip_component_suffix(&pascal);
        if name != raw {
            debug!("Normalized feature name '{}' to '{}'", raw, name);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// snake_case form used in layout resource names, e.g. `user_profile`.
    pub fn lower_name(&self) -> String {
        self.0.to_snake_case()
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Re-cases only separated input; PascalCase and camelCase keep their
/// inner capitals so acronyms such as `HTTPClient` survive.
fn to_pascal(raw: &str) -> String {
    if raw.contains(['_', '-']) {
        return raw.to_pascal_case();
    }

    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn strip_component_suffix(name: &str) -> &str {
    if COMPONENT_SUFFIXES.contains(&name) {
        return name;
    }
    for suffix in COMPONENT_SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            if !stripped.is_empty() {
                return stripped;
            }
        }
    }
    name
}

/// Validates dotted segments shared by package names and application ids.
fn validate_dotted(kind: &str, raw: &str) -> Result<Vec<String>> {
    if raw.is_empty() {
        return Err(Error::ValidationError(format!("{kind} must not be empty")));
    }

    raw.split('.')
        .map(|segment| {
            if segment.is_empty() {
                Err(Error::ValidationError(format!("{kind} '{raw}' contains an empty segment")))
            } else if !SEGMENT.is_match(segment) {
                Err(Error::ValidationError(format!(
                    "{kind} '{raw}' has an invalid segment '{segment}'"
                )))
            } else if KOTLIN_HARD_KEYWORDS.contains(&segment) {
                Err(Error::ValidationError(format!(
                    "{kind} '{raw}' uses the Kotlin keyword '{segment}' as a segment"
                )))
            } else {
                Ok(segment.to_string())
            }
        })
        .collect()
}

/// Kotlin package the generated classes are declared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName(String);

impl PackageName {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        validate_dotted("package name", raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory form of the package, e.g. `com/example/app`.
    pub fn to_path(&self) -> String {
        self.0.replace('.', "/")
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Android application id owning the generated `R`, `BR` and binding classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let segments = validate_dotted("application id", raw)?;
        if segments.len() < 2 {
            return Err(Error::ValidationError(format!(
                "application id '{raw}' needs at least two segments"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

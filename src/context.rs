//! Placeholder context handed to the template renderer.

use serde::Serialize;

use crate::error::Result;
use crate::naming::{ApplicationId, FeatureName, PackageName};

/// Values substituted into templates and target paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Context {
    pub name: String,
    pub lower_name: String,
    pub package_name: String,
    pub package_path: String,
    pub application_id: String,
}

impl Context {
    pub fn new(name: &FeatureName, package: &PackageName, application_id: &ApplicationId) -> Self {
        Self {
            name: name.as_str().to_string(),
            lower_name: name.lower_name(),
            package_name: package.as_str().to_string(),
            package_path: package.to_path(),
            application_id: application_id.as_str().to_string(),
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

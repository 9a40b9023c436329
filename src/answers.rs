//! Resolution of the generation parameters.
//!
//! Each value is taken from the command line first, then the project
//! configuration, and is only asked for interactively when both are silent.

use log::debug;

use crate::error::Result;
use crate::naming::{ApplicationId, FeatureName, PackageName};
use crate::prompt::Prompter;

/// Validated parameters for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub name: FeatureName,
    pub package: PackageName,
    pub application_id: ApplicationId,
}

/// Suggested package for a feature: `<application id>.ui.<feature>`.
pub fn default_package(application_id: &ApplicationId, name: &FeatureName) -> String {
    format!("{}.ui.{}", application_id, name.lower_name().replace('_', ""))
}

/// Resolves all parameters, prompting for the missing ones.
///
/// # Arguments
/// * `prompt` - Prompter used for values that are still missing
/// * `name` - Raw feature name from the command line
/// * `package` - Package name from the command line or configuration
/// * `application_id` - Application id from the command line or configuration
pub fn get_answers(
    prompt: &dyn Prompter,
    name: &str,
    package: Option<String>,
    application_id: Option<String>,
) -> Result<Answers> {
    let name = FeatureName::parse(name)?;

    let application_id = match application_id {
        Some(value) => value,
        None => prompt.input("Application id".to_string(), None)?,
    };
    let application_id = ApplicationId::parse(&application_id)?;

    let package = match package {
        Some(value) => value,
        None => prompt.input(
            "Package name".to_string(),
            Some(default_package(&application_id, &name)),
        )?,
    };
    let package = PackageName::parse(&package)?;

    debug!("Resolved name '{}', package '{}', application id '{}'", name, package, application_id);
    Ok(Answers { name, package, application_id })
}

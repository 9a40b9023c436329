//! Merging of command-line arguments with the project configuration.
//! Command-line values always win; configuration fills the gaps.

use std::path::PathBuf;

use crate::catalog::SetOptions;
use crate::cli::Args;
use crate::config::Config;
use crate::loader::TemplateSource;

/// Generation inputs after precedence has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Package name, still `None` when it has to be prompted for
    pub package: Option<String>,
    /// Application id, still `None` when it has to be prompted for
    pub application_id: Option<String>,
    pub templates: TemplateSource,
    /// `<project dir>/<source set>`
    pub output_root: PathBuf,
    pub set: SetOptions,
}

impl Options {
    /// Resolves every option from `args` first and `config` second.
    ///
    /// A template directory given on the command line is used as is; one
    /// from the configuration is relative to the project directory.
    pub fn resolve(args: &Args, config: &Config) -> Self {
        let templates = args
            .templates
            .clone()
            .or_else(|| config.templates.as_ref().map(|dir| args.project_dir.join(dir)));
        let source_set = args.source_set.as_deref().unwrap_or(config.source_set());

        Self {
            package: args.package.clone().or_else(|| config.package_name.clone()),
            application_id: args.application_id.clone().or_else(|| config.application_id.clone()),
            templates: TemplateSource::from_option(templates),
            output_root: args.project_dir.join(source_set),
            set: SetOptions { view_model: !args.no_view_model, layout: !args.no_layout },
        }
    }
}

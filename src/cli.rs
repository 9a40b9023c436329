//! Command-line interface implementation for droidstamp.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::catalog::TemplateKind;

/// Command-line arguments structure for droidstamp.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "droidstamp: scaffold MVVM Android activities, fragments, dialogs and view-models",
    long_about = None
)]
pub struct Args {
    /// What to generate
    #[arg(value_name = "KIND", value_enum)]
    pub kind: TemplateKind,

    /// Feature name, e.g. UserProfile or user_profile
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Kotlin package of the generated classes
    #[arg(short, long = "package", value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Application id owning the generated R, BR and binding classes
    #[arg(short, long, value_name = "APPLICATION_ID")]
    pub application_id: Option<String>,

    /// Root of the Android project
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Module source set relative to the project root (default: app/src/main)
    #[arg(long, value_name = "PATH")]
    pub source_set: Option<String>,

    /// Directory with template overrides (<id>.j2 files)
    #[arg(short, long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Do not generate the view-model alongside the view class
    #[arg(long)]
    pub no_view_model: bool,

    /// Do not generate the data-binding layout
    #[arg(long)]
    pub no_layout: bool,

    /// Overwrite existing files without asking
    #[arg(short, long)]
    pub force: bool,

    /// Skip confirmation prompts when overwriting existing files.
    #[arg(long)]
    pub skip_overwrite_check: bool,

    /// Print what would be generated without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

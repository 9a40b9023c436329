//! Generation planning and writing.
//!
//! A template set is first rendered into a plan. Conflicts with files that
//! already exist are settled for the whole set before anything is written,
//! so a declined overwrite never leaves a half-generated feature behind.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::catalog::TemplateFile;
use crate::error::{Error, Result};
use crate::loader::Templates;
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;

/// Outcome decided for a single generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Created,
    Overwritten,
    Unchanged,
    Skipped,
    /// Differs from what is on disk; reported by dry runs instead of asking
    Conflict,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Action::Created => "Created",
            Action::Overwritten => "Overwritten",
            Action::Unchanged => "Unchanged",
            Action::Skipped => "Skipped",
            Action::Conflict => "Conflict",
        };
        f.write_str(action)
    }
}

/// A rendered file and what will happen to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// Template id the file was rendered from
    pub template: &'static str,
    pub target: PathBuf,
    pub content: String,
    pub action: Action,
}

impl ProcessResult {
    pub fn needs_write(&self) -> bool {
        matches!(self.action, Action::Created | Action::Overwritten)
    }
}

/// Validates a rendered target path: relative, no empty, `.` or `..` components.
pub fn is_rendered_path_valid(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && path.split('/').all(|part| !part.is_empty() && part != "." && part != "..")
}

pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    prompt: &'a dyn Prompter,
    templates: &'a Templates,
    output_root: &'a Path,
    context: &'a serde_json::Value,
    force: bool,
    skip_overwrite_check: bool,
    dry_run: bool,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        prompt: &'a dyn Prompter,
        templates: &'a Templates,
        output_root: &'a Path,
        context: &'a serde_json::Value,
        force: bool,
        skip_overwrite_check: bool,
    ) -> Self {
        Self {
            renderer,
            prompt,
            templates,
            output_root,
            context,
            force,
            skip_overwrite_check,
            dry_run: false,
        }
    }

    /// Plans without interaction: conflicts are reported, never asked about.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Renders the target path of `file` relative to the output root.
    pub fn resolve_target_path(&self, file: &TemplateFile) -> Result<PathBuf> {
        let rendered = self.renderer.render(file.target, self.context)?;
        if !is_rendered_path_valid(&rendered) {
            return Err(Error::InvalidTargetPathError {
                template: file.id.to_string(),
                path: rendered,
            });
        }
        Ok(self.output_root.join(rendered))
    }

    /// Renders one file and decides its action against what is on disk.
    pub fn process(&self, file: &'static TemplateFile) -> Result<ProcessResult> {
        let target = self.resolve_target_path(file)?;
        debug!("Rendering '{}' into '{}'", file.id, target.display());

        let content = self.renderer.render(self.templates.body(file), self.context)?;
        let action = self.decide_action(&target, &content)?;

        Ok(ProcessResult { template: file.id, target, content, action })
    }

    fn decide_action(&self, target: &Path, content: &str) -> Result<Action> {
        if !target.exists() {
            return Ok(Action::Created);
        }
        if !target.is_file() {
            return Err(Error::TemplateError(format!(
                "'{}' exists and is not a file",
                target.display()
            )));
        }

        if fs::read(target)? == content.as_bytes() {
            debug!("'{}' is already up to date", target.display());
            return Ok(Action::Unchanged);
        }
        if self.force {
            return Ok(Action::Overwritten);
        }
        if self.dry_run && !self.skip_overwrite_check {
            return Ok(Action::Conflict);
        }

        let overwrite = self.prompt.confirm(
            self.skip_overwrite_check,
            format!("File '{}' already exists. Overwrite?", target.display()),
        )?;
        Ok(if overwrite { Action::Overwritten } else { Action::Skipped })
    }

    /// Renders every file of a set. Nothing is written yet.
    pub fn plan(&self, files: &[&'static TemplateFile]) -> Result<Vec<ProcessResult>> {
        files.iter().copied().map(|file| self.process(file)).collect()
    }

    /// Plans a set and, unless this is a dry run, writes it.
    pub fn generate(&self, files: &[&'static TemplateFile]) -> Result<Vec<ProcessResult>> {
        let plan = self.plan(files)?;
        if self.dry_run {
            debug!("Dry run, nothing written");
        } else {
            execute(&plan)?;
        }
        Ok(plan)
    }
}

/// Writes `content` to `dest_path`, creating parent directories.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest_path, content)?;
    Ok(())
}

/// Applies a plan, writing only the files that need it.
pub fn execute(plan: &[ProcessResult]) -> Result<()> {
    for result in plan.iter().filter(|result| result.needs_write()) {
        debug!("Writing '{}'", result.target.display());
        write_file(&result.content, &result.target)?;
    }
    Ok(())
}

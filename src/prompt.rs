//! User interaction for droidstamp.
//! Confirmation of overwrites and entry of parameters missing from both the
//! command line and the project configuration.

use crate::error::Result;
use dialoguer::{Confirm, Input};

/// Trait for interactive prompts, so callers can be driven without a tty.
pub trait Prompter {
    /// Asks a yes/no question. Returns `true` straight away when `skip_prompt` is set.
    fn confirm(&self, skip_prompt: bool, prompt: String) -> Result<bool>;

    /// Asks for a line of text, pre-filled with `default` when given.
    fn input(&self, prompt: String, default: Option<String>) -> Result<String>;
}

/// Prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip_prompt: bool, prompt: String) -> Result<bool> {
        if skip_prompt {
            return Ok(true);
        }

        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }

    fn input(&self, prompt: String, default: Option<String>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default);
        }

        Ok(input.interact_text()?)
    }
}

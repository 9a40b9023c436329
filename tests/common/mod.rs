use std::cell::RefCell;
use std::collections::VecDeque;

use droidstamp::error::Result;
use droidstamp::prompt::Prompter;

/// Scripted prompter that records every question it was asked.
pub struct MockPrompter {
    inputs: RefCell<VecDeque<String>>,
    confirm_answer: bool,
    pub asked: RefCell<Vec<String>>,
}

impl MockPrompter {
    pub fn new(inputs: &[&str], confirm_answer: bool) -> Self {
        Self {
            inputs: RefCell::new(inputs.iter().map(|s| s.to_string()).collect()),
            confirm_answer,
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn silent() -> Self {
        Self::new(&[], false)
    }
}

impl Prompter for MockPrompter {
    fn confirm(&self, skip_prompt: bool, prompt: String) -> Result<bool> {
        if skip_prompt {
            return Ok(true);
        }
        self.asked.borrow_mut().push(prompt);
        Ok(self.confirm_answer)
    }

    fn input(&self, prompt: String, default: Option<String>) -> Result<String> {
        self.asked.borrow_mut().push(prompt);
        Ok(self
            .inputs
            .borrow_mut()
            .pop_front()
            .filter(|answer| !answer.is_empty())
            .or(default)
            .unwrap_or_default())
    }
}

//! Scripted user input for testing

use super::input::{Result, UserInput};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Mock input that replays predetermined lines
///
/// Returns `None` from `prompt_text` once the script is exhausted, which
/// ends an interactive session.
#[derive(Debug, Default)]
pub struct MockInput {
    lines: RefCell<VecDeque<String>>,
    confirm: bool,
}

impl MockInput {
    /// Create a mock that answers prompts with `lines`, in order
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: RefCell::new(lines.into_iter().map(Into::into).collect()),
            confirm: true,
        }
    }

    /// Set the answer given to every confirmation prompt
    #[must_use]
    pub const fn confirming(mut self, answer: bool) -> Self {
        self.confirm = answer;
        self
    }

    /// Number of scripted lines not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.borrow().len()
    }
}

impl UserInput for MockInput {
    fn prompt_text(&self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.borrow_mut().pop_front())
    }

    fn prompt_confirm(&self, _prompt: &str, _default: bool) -> Result<bool> {
        Ok(self.confirm)
    }
}

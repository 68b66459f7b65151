//! User input abstraction
//!
//! Backend-agnostic prompts: the CLI uses `dialoguer` on a terminal and
//! [`LineInput`] when stdin is piped, tests use [`MockInput`](super::MockInput).

use std::cell::RefCell;
use std::io::{self, BufRead, IsTerminal};

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use planfind::ui::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
/// if let Some(line) = input.prompt_text("search").unwrap() {
///     println!("you typed {line}");
/// }
/// ```
pub trait UserInput {
    /// Prompt for a line of text (empty input allowed)
    ///
    /// * `Ok(Some(String))` - User entered text
    /// * `Ok(None)` - Input exhausted, the session should end
    /// * `Err(_)` - Input operation failed
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>>;

    /// Prompt user for confirmation (yes/no)
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented input read from any buffered reader
///
/// Prompts are not echoed. A read of zero bytes ends the input.
pub struct LineInput<R> {
    reader: RefCell<R>,
}

impl<R: BufRead> LineInput<R> {
    /// Create a line reader over `reader`
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader: RefCell::new(reader),
        }
    }
}

impl<R: BufRead> UserInput for LineInput<R> {
    fn prompt_text(&self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(self
            .prompt_text(prompt)?
            .map_or(default, |answer| parse_confirm(&answer, default)))
    }
}

/// Interpret a yes/no answer, falling back to `default` for anything else
#[must_use]
pub fn parse_confirm(answer: &str, default: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

/// Whether an I/O error means the input side has gone away
fn is_end_of_input(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::UnexpectedEof | io::ErrorKind::NotConnected
    )
}

/// CLI-based user input using dialoguer
///
/// Falls back to plain line reading when stdin is not a terminal.
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
    piped: Option<LineInput<io::StdinLock<'static>>>,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        let stdin = io::stdin();
        let piped = (!stdin.is_terminal()).then(|| LineInput::new(stdin.lock()));
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
            piped,
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>> {
        if let Some(lines) = &self.piped {
            return lines.prompt_text(prompt);
        }

        match dialoguer::Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e)) if is_end_of_input(&e) => Ok(None),
            Err(e) => Err(InputError::Io(io::Error::other(e))),
        }
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if let Some(lines) = &self.piped {
            return lines.prompt_confirm(prompt, default);
        }

        match dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
        {
            Ok(answer) => Ok(answer),
            Err(dialoguer::Error::IO(e)) if is_end_of_input(&e) => Ok(default),
            Err(e) => Err(InputError::Io(io::Error::other(e))),
        }
    }
}

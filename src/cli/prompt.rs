use std::{collections::HashMap, io};

use dialoguer::{Input, theme::ColorfulTheme};

use crate::error::{DatifyError, Result};

/// The three questions a session asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Mode,
    Query,
    View,
}

/// Source of answers for the session driver.
pub trait Prompt {
    /// Returns the answer to `question`, without the trailing line break.
    fn ask(&mut self, field: Field, question: &str) -> Result<String>;
}

/// Asks in the terminal unless an answer was given up front (e.g. as a
/// command line flag).
///
/// Answers are read as free text, so an unknown mode letter or result type
/// reaches the session driver and is reported there.
#[derive(Debug, Default)]
pub struct ConsolePrompt {
    presets: HashMap<Field, String>,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preset(mut self, field: Field, answer: Option<String>) -> Self {
        if let Some(answer) = answer {
            self.presets.insert(field, answer);
        }
        self
    }
}

impl Prompt for ConsolePrompt {
    fn ask(&mut self, field: Field, question: &str) -> Result<String> {
        if let Some(answer) = self.presets.remove(&field) {
            return Ok(answer);
        }

        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt_text(question))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| DatifyError::Io(io::Error::other(e)))
    }
}

/// Drops the trailing `": "` of a question; the theme draws its own separator.
fn prompt_text(question: &str) -> &str {
    question.trim_end().trim_end_matches(':')
}

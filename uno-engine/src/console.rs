use std::collections::VecDeque;

use crate::error::{Result, UnoError};
use crate::message::Message;

/// Where the game sends its messages and reads a human's answers from.
pub trait Console {
    fn clear_screen(&mut self);

    fn display(&mut self, message: Message);

    /// Shows the prompt and reads one line of input, without the trailing newline.
    ///
    /// Returns [`UnoError::InputClosed`] once no more input can arrive.
    fn prompt(&mut self, message: Message) -> Result<String>;
}

/// A console that answers prompts from a fixed script and records everything it is shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub shown: Vec<Message>,
    pub prompts: Vec<Message>,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn push_input(&mut self, input: impl Into<String>) {
        self.inputs.push_back(input.into());
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn has_shown(&self, message: &Message) -> bool {
        self.shown.contains(message)
    }
}

impl Console for ScriptedConsole {
    fn clear_screen(&mut self) {
        self.clears += 1;
    }

    fn display(&mut self, message: Message) {
        self.shown.push(message);
    }

    fn prompt(&mut self, message: Message) -> Result<String> {
        self.prompts.push(message);
        self.inputs.pop_front().ok_or(UnoError::InputClosed)
    }
}

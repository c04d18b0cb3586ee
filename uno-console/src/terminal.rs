use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use tracing::warn;
use uno_engine::{
    console::Console,
    error::{Result, UnoError},
    message::Message,
};

use crate::catalog::Catalog;

/// A [`Console`] over line-based text streams: messages go to `output`, error messages to
/// `errors`, and answers are read from `input`.
pub struct Terminal<R, W, E> {
    input: R,
    output: W,
    errors: E,
    catalog: Catalog,
}

impl Terminal<StdinLock<'static>, Stdout, Stderr> {
    pub fn stdio(catalog: Catalog) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr(), catalog)
    }
}

impl<R: BufRead, W: Write, E: Write> Terminal<R, W, E> {
    pub fn new(input: R, output: W, errors: E, catalog: Catalog) -> Self {
        Self {
            input,
            output,
            errors,
            catalog,
        }
    }

    fn write_line(&mut self, message: &Message) -> io::Result<()> {
        let text = self.catalog.render(message);
        if message.is_error() {
            writeln!(self.errors, "{text}")?;
            self.errors.flush()
        } else {
            writeln!(self.output, "{text}")?;
            self.output.flush()
        }
    }
}

impl<R: BufRead, W: Write, E: Write> Console for Terminal<R, W, E> {
    fn clear_screen(&mut self) {
        if let Err(error) = execute!(self.output, Clear(ClearType::All), MoveTo(0, 0)) {
            warn!(%error, "could not clear the screen");
        }
    }

    fn display(&mut self, message: Message) {
        if let Err(error) = self.write_line(&message) {
            warn!(%error, key = %message.key(), "could not display message");
        }
    }

    fn prompt(&mut self, message: Message) -> Result<String> {
        write!(self.output, "{}", self.catalog.render(&message))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(UnoError::InputClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("The player name must not be empty or only white space")]
    BlankPlayerId,
    #[error("The deck has {available} cards but the deal needs at least {needed}")]
    NotEnoughCards { needed: usize, available: usize },
    #[error("The console input was closed")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;

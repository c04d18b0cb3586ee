//! Turn engine for a console game of UNO: one human against computer players.

pub mod card;
mod computer;
pub mod config;
pub mod console;
pub mod constants;
pub mod deck;
pub mod error;
mod human;
pub mod message;
pub mod player;
pub mod room;
pub mod turn;
pub mod uno;

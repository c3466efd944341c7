//! Game-state engines for a small text-driven arcade: Mastermind, Minesweeper,
//! Crazy Eights and Blackjack.
//!
//! Every engine consumes one decoded [`Command`] at a time and answers with a
//! [`Reply`]. Engines and the [`Arcade`] session serialize with serde so callers
//! can store them between requests.

pub use blackjack::*;
pub use card::*;
pub use command::*;
pub use config::*;
pub use crazy_eights::*;
pub use deck::*;
pub use error::*;
pub use mastermind::*;
pub use minesweeper::*;
pub use persist::*;
pub use player::*;
pub use rng::*;
pub use session::*;
pub use types::*;

mod blackjack;
mod card;
mod command;
mod config;
mod crazy_eights;
mod deck;
mod error;
mod mastermind;
mod minesweeper;
mod persist;
mod player;
mod rng;
mod session;
mod types;

//! A high-card battle game engine with optional `no_std` support.
//!
//! The player picks a card from a shuffled 52-card deck and the computer
//! draws one at random. The higher rank wins, and equal ranks are decided by
//! suit (Spades > Hearts > Diamonds > Clubs). The crate provides a [`Game`]
//! type that owns the deck, the round in progress and the round history.
//!
//! # Example
//!
//! ```
//! use cardbattle::{Game, GameOptions, Immediate};
//!
//! let game = Game::new(GameOptions::instant(), 42);
//! let resolution = game.play(13, &Immediate).unwrap();
//! assert_eq!(game.history().len(), 1);
//! game.next_round().unwrap();
//! let _ = resolution;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod compare;
pub mod error;
pub mod game;
pub mod options;
pub mod pacing;
pub mod result;
pub mod shuffle;
mod sync;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, Rank, Suit, build_deck};
pub use compare::{compare, is_identity_tie};
pub use error::{ParseCardError, PlayError, RoundError, SelectError, StepError};
pub use game::{Game, RoundPhase, RoundState, RoundTicket};
pub use options::GameOptions;
#[cfg(feature = "std")]
pub use pacing::ThreadSleep;
pub use pacing::{Immediate, Pacer};
pub use result::{HistoryEntry, Outcome, RoundResolution};
pub use shuffle::{shuffle, shuffle_in_place};

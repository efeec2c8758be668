//! Single-player Boggle: a 4x4 board of lettered dice on which the player
//! traces paths of neighboring dice to spell words.
//!
//! The [`game::BoggleGame`] state machine turns input events into
//! [`game::ClickOutcome`]s plus display instructions for whatever surface
//! is drawing the board. The [`surface::terminal`] module provides a
//! line-oriented surface for stdin/stdout.

pub mod config;
pub mod dictionary;
pub mod game;
pub mod models;
pub mod surface;
pub mod utils;

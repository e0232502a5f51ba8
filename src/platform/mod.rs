//! Terminal presentation and input
//!
//! Owns the raw-mode terminal session: a background thread feeds key events
//! through a channel, and the presenter draws the framebuffer as half-block
//! cells.

mod term;

pub use term::{TermSignal, Terminal};

//! Digital input sampling.
//!
//! The game reads four logical buttons by level, once per tick: no debouncing,
//! no edge detection, no queue. A press shorter than one tick can be missed.
//! This module maps `crossterm` key events onto those buttons and offers a
//! programmatic latch for tests and scripted play.

pub mod keyboard;
pub mod map;
pub mod sampler;

pub use serial_pong_types as types;

pub use keyboard::{KeyOutcome, KeyboardSampler, DEFAULT_KEY_HOLD_MS};
pub use map::{logical_input, should_quit};
pub use sampler::{InputLatch, InputSampler};

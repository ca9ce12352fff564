//! Serial Pong (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof:
//! `serial_pong::{core, engine, input, term, types}`.

pub use serial_pong_core as core;
pub use serial_pong_engine as engine;
pub use serial_pong_input as input;
pub use serial_pong_term as term;
pub use serial_pong_types as types;

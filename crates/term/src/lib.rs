//! Terminal output for a remote VT100 character terminal.
//!
//! This crate is write-only: it keeps no copy of what is on screen. Every
//! logical screen operation is encoded into a short byte sequence and pushed
//! through a [`Transport`] one byte at a time.
//!
//! - [`protocol`]: the handful of VT100 control sequences the game needs
//! - [`renderer`]: bounds-checked glyph/number/text writes on top of the protocol
//! - [`lock`]: the mutual exclusion that keeps "move cursor, emit content" atomic
//! - [`transport`]: byte sinks (any `io::Write`, or an in-memory capture)

pub mod error;
pub mod lock;
pub mod protocol;
pub mod renderer;
pub mod transport;

pub use serial_pong_types as types;

pub use error::RenderError;
pub use lock::{RenderGuard, RenderLock, DEFAULT_HOLD_BUDGET};
pub use renderer::TerminalRenderer;
pub use transport::{CaptureTransport, Transport, WriterTransport};

//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the per-tick movement rules for the ball and the
//! paddles. It has **zero dependencies** on the terminal, the scheduler, or the
//! input hardware: every step takes the sampled [`InputState`](types::InputState)
//! and returns what moved, and the caller decides how to draw it.
//!
//! # Module Structure
//!
//! - [`ball`]: four-state direction machine steered by the buttons
//! - [`paddle`]: vertical paddles clamped to the printable rows
//! - [`court`]: walls, wall policy, and the paddle positions the ball can see
//! - [`score`]: left/right counters
//!
//! # Example
//!
//! ```
//! use serial_pong_core::{Ball, Court, WallPolicy};
//! use serial_pong_types::{InputState, LogicalInput, Position};
//!
//! let court = Court::new(WallPolicy::Open);
//! let mut ball = Ball::new(Position::new(40, 12));
//!
//! // Coasts right until steered.
//! let mv = ball.step(InputState::empty(), &court);
//! assert_eq!(mv.to, Position::new(41, 12));
//!
//! // Default wiring: right-up steers the ball up (rows grow downward).
//! let mv = ball.step(InputState::empty().with(LogicalInput::RightUp), &court);
//! assert_eq!(mv.to, Position::new(41, 11));
//! ```

pub mod ball;
pub mod court;
pub mod paddle;
pub mod score;

pub use serial_pong_types as types;

pub use ball::{Ball, BallMove, BallWiring, Direction};
pub use court::{Court, PaddleTrack, WallPolicy};
pub use paddle::{Paddle, PaddleControls, PaddleMove};
pub use score::Score;

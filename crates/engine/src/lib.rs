//! Game engine: periodic tasks, scheduling, and bootstrap.
//!
//! Ties the pure entity logic in `serial-pong-core` to the shared terminal in
//! `serial-pong-term`. Each moving entity is driven by its own periodic unit;
//! the units only ever touch the screen through the render lock.

pub mod config;
pub mod game;
pub mod scheduler;
pub mod score;
pub mod tasks;

pub use serial_pong_types as types;

pub use config::PongConfig;
pub use game::{launch, show_splash, Launched, TITLE};
pub use scheduler::{
    run_forever, PeriodicTask, Scheduler, SchedulerError, TaskHandle, TaskSpec, ThreadScheduler,
};
pub use score::ScoreTracker;
pub use tasks::{BallTask, PaddleTask};

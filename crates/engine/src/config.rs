//! Runtime configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PONG_TTY` | unset (stdout) |
//! | `PONG_BALL_TICK_MS` | 75 |
//! | `PONG_PADDLE_TICK_MS` | 50 |
//! | `PONG_WALLS` | `bounce` (`open`, `bounce`, `serve`) |
//! | `PONG_PADDLES` | `false` |
//! | `PONG_SPLASH_MS` | 2000 |
//! | `PONG_KEY_HOLD_MS` | 150 |
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;
use std::time::Duration;

use serial_pong_core::WallPolicy;
use serial_pong_input::DEFAULT_KEY_HOLD_MS;

use crate::types::{BALL_TICK_MS, PADDLE_TICK_MS, SPLASH_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PongConfig {
    /// Serial device or tty receiving the VT100 stream; stdout when `None`.
    pub tty: Option<PathBuf>,
    pub ball_tick: Duration,
    pub paddle_tick: Duration,
    pub walls: WallPolicy,
    /// Register the paddle tasks.
    pub paddles: bool,
    pub splash: Duration,
    pub key_hold: Duration,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            tty: None,
            ball_tick: Duration::from_millis(BALL_TICK_MS),
            paddle_tick: Duration::from_millis(PADDLE_TICK_MS),
            walls: WallPolicy::default(),
            paddles: false,
            splash: Duration::from_millis(SPLASH_MS),
            key_hold: Duration::from_millis(DEFAULT_KEY_HOLD_MS),
        }
    }
}

impl PongConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by `from_env`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str, default: Duration| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(default)
        };

        let tty = lookup("PONG_TTY")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let walls = lookup("PONG_WALLS")
            .and_then(|s| WallPolicy::from_str(&s))
            .unwrap_or(defaults.walls);

        let paddles = lookup("PONG_PADDLES")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.paddles);

        Self {
            tty,
            ball_tick: millis("PONG_BALL_TICK_MS", defaults.ball_tick),
            paddle_tick: millis("PONG_PADDLE_TICK_MS", defaults.paddle_tick),
            walls,
            paddles,
            splash: millis("PONG_SPLASH_MS", defaults.splash),
            key_hold: millis("PONG_KEY_HOLD_MS", defaults.key_hold),
        }
    }
}

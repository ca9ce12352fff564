//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation logic, terminal encoding, input sampling).
//!
//! # Screen Geometry
//!
//! The remote terminal is addressed with 1-based VT100 coordinates:
//!
//! - **Columns**: 1-80 (`SCREEN_X_START..=SCREEN_X_END`)
//! - **Rows**: 1-25 (`SCREEN_Y_START..=SCREEN_Y_END`), growing downward
//!
//! # Layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PADDLE_LEFT_X` | 2 | Left paddle column |
//! | `PADDLE_RIGHT_X` | 78 | Right paddle column |
//! | `PADDLE_Y_START` | 10 | Top row of both paddles at start |
//! | `PADDLE_LENGTH` | 6 | Rows covered by a paddle |
//! | `BALL_X_START`, `BALL_Y_START` | 39, 12 | Ball serve position |
//! | `SCORE_LEFT_X`, `SCORE_RIGHT_X`, `SCORE_Y` | 3, 75, 3 | Score fields |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BALL_TICK_MS` | 75 | Ball task period |
//! | `PADDLE_TICK_MS` | 50 | Paddle task period |
//! | `SPLASH_MS` | 2000 | Title banner duration |
//!
//! # Examples
//!
//! ```
//! use serial_pong_types::{InputState, LogicalInput, Position, Region, Velocity};
//!
//! let pos = Position::new(40, 12).offset(Velocity::new(0, -1));
//! assert_eq!(pos, Position::new(40, 11));
//! assert!(Region::SCREEN.contains(pos.col, pos.row));
//!
//! let inputs = InputState::empty().with(LogicalInput::RightUp);
//! assert!(inputs.is_pressed(LogicalInput::RightUp));
//! assert!(!inputs.is_pressed(LogicalInput::LeftDown));
//! ```

/// First printable column.
pub const SCREEN_X_START: i32 = 1;

/// Last printable column.
pub const SCREEN_X_END: i32 = 80;

/// First printable row.
pub const SCREEN_Y_START: i32 = 1;

/// Last printable row.
pub const SCREEN_Y_END: i32 = 25;

pub const PADDLE_LEFT_X: i32 = 2;
pub const PADDLE_RIGHT_X: i32 = SCREEN_X_END - 2;
pub const PADDLE_Y_START: i32 = 10;
pub const PADDLE_LENGTH: i32 = 6;

pub const BALL_X_START: i32 = (SCREEN_X_END - SCREEN_X_START) / 2;
pub const BALL_Y_START: i32 = (SCREEN_Y_END - SCREEN_Y_START) / 2;

pub const SCORE_LEFT_X: i32 = 3;
pub const SCORE_RIGHT_X: i32 = SCREEN_X_END - 5;
pub const SCORE_Y: i32 = 3;

/// Where the splash banner is drawn.
pub const TITLE_X: i32 = 8;
pub const TITLE_Y: i32 = 8;

pub const BALL_GLYPH: u8 = b'*';
pub const PADDLE_GLYPH: u8 = b'#';
pub const BLANK_GLYPH: u8 = b' ';

/// Ball task period in milliseconds.
pub const BALL_TICK_MS: u64 = 75;

/// Paddle task period in milliseconds.
pub const PADDLE_TICK_MS: u64 = 50;

/// Splash banner duration in milliseconds.
pub const SPLASH_MS: u64 = 2000;

/// Task priorities. Lower numbers are more urgent.
pub const BALL_PRIO: u8 = 4;
pub const PADDLE_LEFT_PRIO: u8 = 5;
pub const PADDLE_RIGHT_PRIO: u8 = 6;

/// Stack budget for each simulation task, in bytes.
pub const TASK_STACK_SIZE: usize = 64 * 1024;

/// Rectangular, inclusive region of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Region {
    /// The printable area of the remote terminal.
    pub const SCREEN: Region = Region {
        x_min: SCREEN_X_START,
        x_max: SCREEN_X_END,
        y_min: SCREEN_Y_START,
        y_max: SCREEN_Y_END,
    };

    pub const fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        (self.x_min..=self.x_max).contains(&col) && (self.y_min..=self.y_max).contains(&row)
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::SCREEN
    }
}

/// A cell address (column, row).
///
/// Positions are not clamped: an entity may be placed outside the printable
/// area, in which case drawing it is rejected by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: i32,
    pub row: i32,
}

impl Position {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Position after one step at `velocity`.
    pub fn offset(self, velocity: Velocity) -> Self {
        Self {
            col: self.col + i32::from(velocity.dx),
            row: self.row + i32::from(velocity.dy),
        }
    }
}

/// One-tick displacement. Rows grow downward, so `dy = -1` moves up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Velocity {
    pub dx: i8,
    pub dy: i8,
}

impl Velocity {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    /// True when motion is along at most one axis.
    pub fn is_axis_aligned(&self) -> bool {
        self.dx == 0 || self.dy == 0
    }
}

/// Player side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// The four digital inputs (two buttons per player).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalInput {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl LogicalInput {
    pub const ALL: [LogicalInput; 4] = [
        LogicalInput::LeftUp,
        LogicalInput::LeftDown,
        LogicalInput::RightUp,
        LogicalInput::RightDown,
    ];

    /// Index into per-input tables (0..4).
    pub fn index(self) -> usize {
        match self {
            LogicalInput::LeftUp => 0,
            LogicalInput::LeftDown => 1,
            LogicalInput::RightUp => 2,
            LogicalInput::RightDown => 3,
        }
    }

    fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// Instantaneous level of all four inputs, sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputState(u8);

impl InputState {
    pub const fn empty() -> Self {
        InputState(0)
    }

    pub fn from_bits(bits: u8) -> Self {
        InputState(bits & 0b1111)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn with(self, input: LogicalInput) -> Self {
        InputState(self.0 | input.bit())
    }

    pub fn is_pressed(self, input: LogicalInput) -> bool {
        self.0 & input.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<LogicalInput> for InputState {
    fn from_iter<I: IntoIterator<Item = LogicalInput>>(iter: I) -> Self {
        iter.into_iter().fold(InputState::empty(), InputState::with)
    }
}

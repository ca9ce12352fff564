//! Paddle movement.
//!
//! A paddle is a vertical run of cells at a fixed column. It moves one row per
//! tick while exactly one of its buttons is held, and never leaves the
//! printable rows. Each move vacates one cell and covers one new cell, so a
//! redraw is a single erase plus a single draw.

use crate::court::PaddleTrack;
use crate::types::{
    InputState, LogicalInput, Position, Region, Side, PADDLE_GLYPH, PADDLE_LEFT_X, PADDLE_LENGTH,
    PADDLE_RIGHT_X, PADDLE_Y_START,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleControls {
    pub up: LogicalInput,
    pub down: LogicalInput,
}

impl PaddleControls {
    /// Each player's own two buttons.
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Self {
                up: LogicalInput::LeftUp,
                down: LogicalInput::LeftDown,
            },
            Side::Right => Self {
                up: LogicalInput::RightUp,
                down: LogicalInput::RightDown,
            },
        }
    }
}

/// Cells to redraw after one paddle tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaddleMove {
    pub erase: Option<Position>,
    pub draw: Option<Position>,
}

impl PaddleMove {
    pub fn is_idle(&self) -> bool {
        self.erase.is_none() && self.draw.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct Paddle {
    side: Side,
    track: PaddleTrack,
    controls: PaddleControls,
    rows: (i32, i32),
    glyph: u8,
}

impl Paddle {
    /// The standard paddle for `side`, at its column and start row.
    pub fn for_side(side: Side) -> Self {
        let col = match side {
            Side::Left => PADDLE_LEFT_X,
            Side::Right => PADDLE_RIGHT_X,
        };
        Self::new(
            side,
            PaddleTrack::new(col, PADDLE_Y_START, PADDLE_LENGTH),
            Region::SCREEN,
        )
    }

    pub fn new(side: Side, track: PaddleTrack, region: Region) -> Self {
        Self {
            side,
            track,
            controls: PaddleControls::for_side(side),
            rows: (region.y_min, region.y_max),
            glyph: PADDLE_GLYPH,
        }
    }

    pub fn with_controls(mut self, controls: PaddleControls) -> Self {
        self.controls = controls;
        self
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn glyph(&self) -> u8 {
        self.glyph
    }

    /// Handle the ball reads to see this paddle.
    pub fn track(&self) -> &PaddleTrack {
        &self.track
    }

    /// Every cell currently covered, top to bottom.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let col = self.track.col();
        let top = self.track.top();
        (top..top + self.track.len()).map(move |row| Position::new(col, row))
    }

    pub fn step(&mut self, inputs: InputState) -> PaddleMove {
        let up = inputs.is_pressed(self.controls.up);
        let down = inputs.is_pressed(self.controls.down);
        let col = self.track.col();
        let top = self.track.top();
        let bottom = self.track.bottom();
        let (row_min, row_max) = self.rows;

        match (up, down) {
            (true, false) if top > row_min => {
                self.track.set_top(top - 1);
                PaddleMove {
                    erase: Some(Position::new(col, bottom)),
                    draw: Some(Position::new(col, top - 1)),
                }
            }
            (false, true) if bottom < row_max => {
                self.track.set_top(top + 1);
                PaddleMove {
                    erase: Some(Position::new(col, top)),
                    draw: Some(Position::new(col, bottom + 1)),
                }
            }
            _ => PaddleMove::default(),
        }
    }
}

//! Ball movement.
//!
//! The ball is always in one of four directional states and moves exactly one
//! cell per tick along a single axis. Buttons switch the state; with no button
//! asserted the ball coasts.
//!
//! Buttons are evaluated in a fixed priority order: up, down, left, right. The
//! first asserted one wins.

use crate::court::{Court, WallPolicy};
use crate::types::{InputState, LogicalInput, Position, Side, Velocity, BALL_GLYPH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Rows grow downward, so `Up` is (0, -1).
    pub fn velocity(self) -> Velocity {
        match self {
            Direction::Up => Velocity::new(0, -1),
            Direction::Down => Velocity::new(0, 1),
            Direction::Left => Velocity::new(-1, 0),
            Direction::Right => Velocity::new(1, 0),
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Heading towards `side`'s wall.
    pub fn towards(side: Side) -> Self {
        match side {
            Side::Left => Direction::Left,
            Side::Right => Direction::Right,
        }
    }
}

/// Which button steers the ball in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallWiring {
    pub up: LogicalInput,
    pub down: LogicalInput,
    pub left: LogicalInput,
    pub right: LogicalInput,
}

impl Default for BallWiring {
    /// Right player's buttons steer vertically; left player's up/down steer
    /// left/right.
    fn default() -> Self {
        Self {
            up: LogicalInput::RightUp,
            down: LogicalInput::RightDown,
            left: LogicalInput::LeftUp,
            right: LogicalInput::LeftDown,
        }
    }
}

impl BallWiring {
    /// Resolve the next direction from the sampled buttons.
    pub fn steer(&self, inputs: InputState, current: Direction) -> Direction {
        if inputs.is_pressed(self.up) {
            Direction::Up
        } else if inputs.is_pressed(self.down) {
            Direction::Down
        } else if inputs.is_pressed(self.left) {
            Direction::Left
        } else if inputs.is_pressed(self.right) {
            Direction::Right
        } else {
            current
        }
    }
}

/// Outcome of one ball tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallMove {
    pub from: Position,
    pub to: Position,
    /// Side credited with a point by this move, if any.
    pub scored: Option<Side>,
}

#[derive(Debug, Clone)]
pub struct Ball {
    pos: Position,
    direction: Direction,
    wiring: BallWiring,
    glyph: u8,
    serve_from: Position,
}

impl Ball {
    /// A ball at `start`, heading right.
    pub fn new(start: Position) -> Self {
        Self {
            pos: start,
            direction: Direction::Right,
            wiring: BallWiring::default(),
            glyph: BALL_GLYPH,
            serve_from: start,
        }
    }

    pub fn with_wiring(mut self, wiring: BallWiring) -> Self {
        self.wiring = wiring;
        self
    }

    pub fn with_glyph(mut self, glyph: u8) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn velocity(&self) -> Velocity {
        self.direction.velocity()
    }

    pub fn glyph(&self) -> u8 {
        self.glyph
    }

    pub fn wiring(&self) -> BallWiring {
        self.wiring
    }

    /// Update the direction from the sampled buttons.
    pub fn steer(&mut self, inputs: InputState) {
        self.direction = self.wiring.steer(inputs, self.direction);
    }

    /// Move one cell, resolving walls and paddles.
    pub fn advance(&mut self, court: &Court) -> BallMove {
        let from = self.pos;
        let mut next = from.offset(self.velocity());
        let mut scored = None;
        let region = court.region();

        if court.walls() != WallPolicy::Open {
            if next.row < region.y_min || next.row > region.y_max {
                self.direction = self.direction.reversed();
                next = from.offset(self.velocity());
            }

            let conceded = if next.col < region.x_min {
                Some(Side::Left)
            } else if next.col > region.x_max {
                Some(Side::Right)
            } else {
                None
            };

            if let Some(side) = conceded {
                scored = Some(side.opposite());
                match court.walls() {
                    WallPolicy::Serve => {
                        self.direction = Direction::towards(side);
                        next = self.serve_from;
                    }
                    _ => {
                        self.direction = self.direction.reversed();
                        next = from.offset(self.velocity());
                    }
                }
            }
        }

        if scored.is_none() && self.direction.is_horizontal() && court.paddle_at(next) {
            self.direction = self.direction.reversed();
            next = from.offset(self.velocity());
        }

        self.pos = next;
        BallMove {
            from,
            to: next,
            scored,
        }
    }

    /// One full tick: steer, then advance.
    pub fn step(&mut self, inputs: InputState, court: &Court) -> BallMove {
        self.steer(inputs);
        self.advance(court)
    }
}

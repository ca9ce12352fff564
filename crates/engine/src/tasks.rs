//! Simulation tasks: one per moving entity.
//!
//! Each tick samples the buttons, computes the entity's move without holding
//! anything, then takes the render lock once for the whole erase/draw (and
//! score) sequence so no other task's write can land in between.

use std::sync::Arc;

use serial_pong_core::{Ball, Court, Paddle};
use serial_pong_input::InputSampler;
use serial_pong_term::{RenderGuard, RenderLock, Transport};

use crate::scheduler::PeriodicTask;
use crate::score::ScoreTracker;
use crate::types::{Position, BLANK_GLYPH, PADDLE_GLYPH};

/// Draw one cell; an off-screen cell is a no-op.
fn draw_cell<T: Transport>(screen: &mut RenderGuard<'_, T>, pos: Position, glyph: u8) {
    if let Err(e) = screen.write_glyph(pos.col, pos.row, glyph) {
        log::debug!("skipped draw: {}", e);
    }
}

pub struct BallTask<T, S> {
    ball: Ball,
    court: Court,
    scores: ScoreTracker,
    screen: Arc<RenderLock<T>>,
    inputs: S,
}

impl<T: Transport, S: InputSampler> BallTask<T, S> {
    pub fn new(ball: Ball, court: Court, scores: ScoreTracker, screen: Arc<RenderLock<T>>, inputs: S) -> Self {
        Self {
            ball,
            court,
            scores,
            screen,
            inputs,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    /// Draw the ball at its start position.
    pub fn draw_initial(&self, screen: &mut RenderGuard<'_, T>) {
        draw_cell(screen, self.ball.position(), self.ball.glyph());
    }

    /// One tick of ball simulation and rendering.
    pub fn step(&mut self) {
        let inputs = self.inputs.sample();
        let mv = self.ball.step(inputs, &self.court);

        let mut screen = self.screen.acquire();
        // The ball may have been sitting in a paddle's column when the paddle
        // slid over it.
        let under = if self.court.paddle_at(mv.from) {
            PADDLE_GLYPH
        } else {
            BLANK_GLYPH
        };
        draw_cell(&mut screen, mv.from, under);
        draw_cell(&mut screen, mv.to, self.ball.glyph());

        if let Some(side) = mv.scored {
            if let Err(e) = self.scores.on_wall_hit(side, &mut screen) {
                log::debug!("score not drawn: {}", e);
            }
        }
        screen.release();
    }
}

impl<T, S> PeriodicTask for BallTask<T, S>
where
    T: Transport + 'static,
    S: InputSampler + 'static,
{
    fn tick(&mut self) {
        self.step();
    }
}

pub struct PaddleTask<T, S> {
    paddle: Paddle,
    screen: Arc<RenderLock<T>>,
    inputs: S,
}

impl<T: Transport, S: InputSampler> PaddleTask<T, S> {
    pub fn new(paddle: Paddle, screen: Arc<RenderLock<T>>, inputs: S) -> Self {
        Self {
            paddle,
            screen,
            inputs,
        }
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    /// Draw every cell of the paddle.
    pub fn draw_initial(&self, screen: &mut RenderGuard<'_, T>) {
        for cell in self.paddle.cells() {
            draw_cell(screen, cell, self.paddle.glyph());
        }
    }

    pub fn step(&mut self) {
        let mv = self.paddle.step(self.inputs.sample());
        if mv.is_idle() {
            return;
        }

        let mut screen = self.screen.acquire();
        if let Some(pos) = mv.erase {
            draw_cell(&mut screen, pos, BLANK_GLYPH);
        }
        if let Some(pos) = mv.draw {
            draw_cell(&mut screen, pos, self.paddle.glyph());
        }
        screen.release();
    }
}

impl<T, S> PeriodicTask for PaddleTask<T, S>
where
    T: Transport + 'static,
    S: InputSampler + 'static,
{
    fn tick(&mut self) {
        self.step();
    }
}

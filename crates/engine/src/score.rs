//! ScoreTracker: the score counters and where they are drawn.

use serial_pong_core::Score;
use serial_pong_term::{RenderError, RenderGuard, Transport};

use crate::types::{Position, Side, SCORE_LEFT_X, SCORE_RIGHT_X, SCORE_Y};

#[derive(Debug, Clone)]
pub struct ScoreTracker {
    score: Score,
    left_at: Position,
    right_at: Position,
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::with_positions(
            Position::new(SCORE_LEFT_X, SCORE_Y),
            Position::new(SCORE_RIGHT_X, SCORE_Y),
        )
    }
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_positions(left_at: Position, right_at: Position) -> Self {
        Self {
            score: Score::new(),
            left_at,
            right_at,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Credit `side` with a point and redraw its field.
    ///
    /// Requires the render lock; the field shows the total modulo 100.
    pub fn on_wall_hit<T: Transport>(
        &mut self,
        side: Side,
        screen: &mut RenderGuard<'_, T>,
    ) -> Result<u32, RenderError> {
        let total = self.score.credit(side);
        log::debug!("{} side scores, now {}", side.as_str(), total);
        self.render(side, screen)?;
        Ok(total)
    }

    /// Draw both fields.
    pub fn render_all<T: Transport>(&self, screen: &mut RenderGuard<'_, T>) -> Result<(), RenderError> {
        self.render(Side::Left, screen)?;
        self.render(Side::Right, screen)
    }

    fn render<T: Transport>(&self, side: Side, screen: &mut RenderGuard<'_, T>) -> Result<(), RenderError> {
        let at = match side {
            Side::Left => self.left_at,
            Side::Right => self.right_at,
        };
        screen.write_number(at.col, at.row, self.score.get(side))
    }
}

//! The playing field: walls and whatever the ball can collide with.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use crate::types::{Position, Region};

/// What happens when the ball reaches the edge of the printable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallPolicy {
    /// No collision at all: the ball may leave the screen.
    Open,
    /// Reflect at every wall; a left/right wall hit scores for the other side.
    #[default]
    Bounce,
    /// Reflect at top/bottom; a left/right wall hit scores and re-serves.
    Serve,
}

impl WallPolicy {
    /// Parse a policy name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "open" => Some(WallPolicy::Open),
            "bounce" => Some(WallPolicy::Bounce),
            "serve" => Some(WallPolicy::Serve),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WallPolicy::Open => "open",
            WallPolicy::Bounce => "bounce",
            WallPolicy::Serve => "serve",
        }
    }
}

/// A paddle's published vertical span.
///
/// The paddle task is the only writer; the ball task reads it when checking
/// for a collision. Clones share the same top row.
#[derive(Debug, Clone)]
pub struct PaddleTrack {
    col: i32,
    len: i32,
    top: Arc<AtomicI32>,
}

impl PaddleTrack {
    pub fn new(col: i32, top: i32, len: i32) -> Self {
        Self {
            col,
            len,
            top: Arc::new(AtomicI32::new(top)),
        }
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn len(&self) -> i32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len <= 0
    }

    pub fn top(&self) -> i32 {
        self.top.load(Ordering::Acquire)
    }

    pub fn bottom(&self) -> i32 {
        self.top() + self.len - 1
    }

    pub fn set_top(&self, top: i32) {
        self.top.store(top, Ordering::Release);
    }

    pub fn covers(&self, pos: Position) -> bool {
        let top = self.top();
        pos.col == self.col && (top..top + self.len).contains(&pos.row)
    }
}

#[derive(Debug, Clone)]
pub struct Court {
    region: Region,
    walls: WallPolicy,
    paddles: Vec<PaddleTrack>,
}

impl Court {
    pub fn new(walls: WallPolicy) -> Self {
        Self::with_region(Region::SCREEN, walls)
    }

    pub fn with_region(region: Region, walls: WallPolicy) -> Self {
        Self {
            region,
            walls,
            paddles: Vec::new(),
        }
    }

    pub fn with_paddle(mut self, track: PaddleTrack) -> Self {
        self.paddles.push(track);
        self
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn walls(&self) -> WallPolicy {
        self.walls
    }

    pub fn paddle_at(&self, pos: Position) -> bool {
        self.paddles.iter().any(|p| p.covers(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_names_round_trip() {
        for p in [WallPolicy::Open, WallPolicy::Bounce, WallPolicy::Serve] {
            assert_eq!(WallPolicy::from_str(p.as_str()), Some(p));
        }
        assert_eq!(WallPolicy::from_str(" BOUNCE "), Some(WallPolicy::Bounce));
        assert_eq!(WallPolicy::from_str("wrap"), None);
    }

    #[test]
    fn track_clones_share_top() {
        let track = PaddleTrack::new(2, 10, 6);
        let seen_by_ball = track.clone();
        track.set_top(4);
        assert_eq!(seen_by_ball.top(), 4);
        assert_eq!(seen_by_ball.bottom(), 9);
        assert!(seen_by_ball.covers(Position::new(2, 9)));
        assert!(!seen_by_ball.covers(Position::new(2, 10)));
        assert!(!seen_by_ball.covers(Position::new(3, 5)));
    }

    #[test]
    fn court_sees_every_paddle() {
        let court = Court::new(WallPolicy::Open)
            .with_paddle(PaddleTrack::new(2, 10, 6))
            .with_paddle(PaddleTrack::new(78, 1, 6));
        assert!(court.paddle_at(Position::new(2, 15)));
        assert!(court.paddle_at(Position::new(78, 1)));
        assert!(!court.paddle_at(Position::new(78, 7)));
    }
}

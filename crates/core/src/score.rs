use crate::types::Side;

/// Left and right counters. Never decremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    left: u32,
    right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point for `side` and return its new total.
    pub fn credit(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot = slot.saturating_add(1);
        *slot
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

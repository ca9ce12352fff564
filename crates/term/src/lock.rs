//! RenderLock: exclusive access to the one shared output device.
//!
//! A logical screen operation ("move cursor, emit content") is only atomic if
//! no other task writes between the cursor move and the content. The lock owns
//! the renderer, so the only way to draw is through a held [`RenderGuard`].
//!
//! Hold the guard for one erase/draw sequence per tick, never across a delay.
//! Holds longer than the budget are reported at `warn`.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::renderer::TerminalRenderer;
use crate::transport::Transport;

/// Default maximum expected hold time.
pub const DEFAULT_HOLD_BUDGET: Duration = Duration::from_millis(20);

pub struct RenderLock<T> {
    renderer: Mutex<TerminalRenderer<T>>,
    hold_budget: Duration,
}

impl<T: Transport> RenderLock<T> {
    pub fn new(renderer: TerminalRenderer<T>) -> Self {
        Self {
            renderer: Mutex::new(renderer),
            hold_budget: DEFAULT_HOLD_BUDGET,
        }
    }

    pub fn with_hold_budget(mut self, budget: Duration) -> Self {
        self.hold_budget = budget;
        self
    }

    pub fn hold_budget(&self) -> Duration {
        self.hold_budget
    }

    /// Block until exclusive ownership of the renderer is obtained.
    ///
    /// Not re-entrant: acquiring twice from the same thread deadlocks.
    pub fn acquire(&self) -> RenderGuard<'_, T> {
        // A holder that panicked cannot have left the renderer inconsistent;
        // it keeps no screen state.
        let inner = self
            .renderer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        RenderGuard {
            inner,
            acquired_at: Instant::now(),
            budget: self.hold_budget,
        }
    }

    pub fn into_inner(self) -> TerminalRenderer<T> {
        self.renderer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Proof of ownership of the renderer. Released on drop.
pub struct RenderGuard<'a, T> {
    inner: MutexGuard<'a, TerminalRenderer<T>>,
    acquired_at: Instant,
    budget: Duration,
}

impl<T> RenderGuard<'_, T> {
    /// Give the renderer back to waiting tasks.
    pub fn release(self) {}

    pub fn held_for(&self) -> Duration {
        self.acquired_at.elapsed()
    }
}

impl<T> Deref for RenderGuard<'_, T> {
    type Target = TerminalRenderer<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for RenderGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> Drop for RenderGuard<'_, T> {
    fn drop(&mut self) {
        let held = self.acquired_at.elapsed();
        if held > self.budget {
            log::warn!(
                "render lock held for {:?} (budget {:?})",
                held,
                self.budget
            );
        }
    }
}

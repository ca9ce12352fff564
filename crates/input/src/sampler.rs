use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::types::{InputState, LogicalInput};

/// Instantaneous read of the four buttons.
pub trait InputSampler: Send + Sync {
    fn is_pressed(&self, input: LogicalInput) -> bool;

    /// Read all four buttons.
    fn sample(&self) -> InputState {
        LogicalInput::ALL
            .into_iter()
            .filter(|&input| self.is_pressed(input))
            .collect()
    }
}

impl<S: InputSampler + ?Sized> InputSampler for Arc<S> {
    fn is_pressed(&self, input: LogicalInput) -> bool {
        (**self).is_pressed(input)
    }

    fn sample(&self) -> InputState {
        (**self).sample()
    }
}

/// Buttons held at whatever level was last set.
#[derive(Debug, Default)]
pub struct InputLatch {
    bits: AtomicU8,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, input: LogicalInput, pressed: bool) {
        let bit = InputState::empty().with(input).bits();
        if pressed {
            self.bits.fetch_or(bit, Ordering::Relaxed);
        } else {
            self.bits.fetch_and(!bit, Ordering::Relaxed);
        }
    }

    pub fn set_state(&self, state: InputState) {
        self.bits.store(state.bits(), Ordering::Relaxed);
    }

    pub fn clear(&self) {
        self.bits.store(0, Ordering::Relaxed);
    }
}

impl InputSampler for InputLatch {
    fn is_pressed(&self, input: LogicalInput) -> bool {
        self.sample().is_pressed(input)
    }

    fn sample(&self) -> InputState {
        InputState::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

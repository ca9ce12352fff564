//! Periodic units of work and the scheduler that runs them.
//!
//! A unit is registered once with a name, priority, stack budget and period,
//! then runs forever: sleep for one period, run one tick, repeat. The sleep is
//! the unit's only suspension point apart from waiting on the render lock.

use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use thiserror::Error;

use crate::types::TASK_STACK_SIZE;

/// Body of a periodic unit.
pub trait PeriodicTask: Send + 'static {
    fn tick(&mut self);
}

/// Registration parameters for one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub name: String,
    /// Lower is more urgent.
    pub priority: u8,
    /// Stack budget in bytes.
    pub stack_size: usize,
    pub period: Duration,
}

impl TaskSpec {
    pub fn new(name: impl Into<String>, priority: u8, period: Duration) -> Self {
        Self {
            name: name.into(),
            priority,
            stack_size: TASK_STACK_SIZE,
            period,
        }
    }

    pub fn with_stack_size(mut self, stack_size: usize) -> Self {
        self.stack_size = stack_size;
        self
    }
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("failed to start task `{name}`: {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// A registered unit. Dropping the handle does not stop the unit.
#[derive(Debug)]
pub struct TaskHandle {
    name: String,
    priority: u8,
    thread: Option<JoinHandle<()>>,
}

impl TaskHandle {
    pub fn new(name: impl Into<String>, priority: u8, thread: Option<JoinHandle<()>>) -> Self {
        Self {
            name: name.into(),
            priority,
            thread,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// True once the unit's body has stopped (only possible if it panicked).
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map(|t| t.is_finished()).unwrap_or(false)
    }
}

pub trait Scheduler {
    fn spawn(&self, spec: TaskSpec, task: Box<dyn PeriodicTask>) -> Result<TaskHandle, SchedulerError>;
}

/// Runs each unit on its own named OS thread.
///
/// OS threads give no portable priority control, so the priority is recorded
/// and logged only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl ThreadScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for ThreadScheduler {
    fn spawn(&self, spec: TaskSpec, task: Box<dyn PeriodicTask>) -> Result<TaskHandle, SchedulerError> {
        let period = spec.period;
        let thread = thread::Builder::new()
            .name(spec.name.clone())
            .stack_size(spec.stack_size)
            .spawn(move || {
                run_forever(period, task);
            })
            .map_err(|source| SchedulerError::Spawn {
                name: spec.name.clone(),
                source,
            })?;

        log::info!(
            "task `{}` started (priority {}, stack {} bytes, period {:?})",
            spec.name,
            spec.priority,
            spec.stack_size,
            period
        );
        Ok(TaskHandle::new(spec.name, spec.priority, Some(thread)))
    }
}

/// Delay, tick, repeat. Never returns.
pub fn run_forever(period: Duration, mut task: Box<dyn PeriodicTask>) -> ! {
    loop {
        thread::sleep(period);
        task.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    struct Counter(Arc<AtomicUsize>);

    impl PeriodicTask for Counter {
        fn tick(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn spec_defaults_to_task_stack_size() {
        let spec = TaskSpec::new("Ball", 4, Duration::from_millis(75));
        assert_eq!(spec.stack_size, TASK_STACK_SIZE);
        assert_eq!(spec.with_stack_size(4096).stack_size, 4096);
    }

    #[test]
    fn thread_scheduler_ticks_periodically() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let handle = ThreadScheduler::new()
            .spawn(
                TaskSpec::new("counter", 1, Duration::from_millis(1)),
                Box::new(Counter(Arc::clone(&ticks))),
            )
            .unwrap();
        assert_eq!(handle.name(), "counter");
        assert_eq!(handle.priority(), 1);

        let deadline = Instant::now() + Duration::from_secs(5);
        while ticks.load(Ordering::SeqCst) < 3 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(ticks.load(Ordering::SeqCst) >= 3);
        assert!(!handle.is_finished());
    }
}

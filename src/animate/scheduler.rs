//! Periodic-callback seam
//!
//! Layouts never own timers. A caller injects a [`Scheduler`] and registers
//! repeating tasks on it; cancelling a task is the scheduler's job. Natively
//! the [`ManualScheduler`] is advanced by the caller's own clock, which keeps
//! it deterministic. On the web, `platform::IntervalScheduler` wraps
//! `setInterval`.

use std::time::Duration;

use crate::error::{LayoutError, Result};

/// A repeating callback
pub type Task = Box<dyn FnMut()>;

/// Identifies a scheduled task for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(pub u32);

pub trait Scheduler {
    /// Run `task` every `interval` until cancelled
    fn every(&mut self, interval: Duration, task: Task) -> Result<TaskHandle>;

    /// Stop a task; false if it was not scheduled
    fn cancel(&mut self, handle: TaskHandle) -> bool;

    /// Whether `handle` is still scheduled
    fn is_active(&self, handle: TaskHandle) -> bool;
}

struct Entry {
    handle: TaskHandle,
    interval: Duration,
    elapsed: Duration,
    task: Task,
}

/// Scheduler driven by explicit [`ManualScheduler::advance`] calls
#[derive(Default)]
pub struct ManualScheduler {
    entries: Vec<Entry>,
    next_id: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `dt`, firing every task whose interval elapsed.
    ///
    /// Tasks fire in registration order; a task due several times fires that
    /// many times. Returns the number of callbacks run.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let mut fired = 0;
        for entry in &mut self.entries {
            entry.elapsed += dt;
            while entry.elapsed >= entry.interval {
                entry.elapsed -= entry.interval;
                (entry.task)();
                fired += 1;
            }
        }
        fired
    }

    /// Number of active tasks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Scheduler for ManualScheduler {
    fn every(&mut self, interval: Duration, task: Task) -> Result<TaskHandle> {
        if interval.is_zero() {
            return Err(LayoutError::InvalidAnimation("task interval must be non-zero"));
        }
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            interval,
            elapsed: Duration::ZERO,
            task,
        });
        log::debug!("Scheduled task {} every {:?}", handle.0, interval);
        Ok(handle)
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        let removed = self.entries.len() != before;
        if removed {
            log::debug!("Cancelled task {}", handle.0);
        }
        removed
    }

    fn is_active(&self, handle: TaskHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }
}

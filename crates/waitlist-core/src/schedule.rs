//! Deferred Tasks
//!
//! Feedback messages remove themselves after a delay. The browser front-end
//! backs this with JS timers; tests drive `ManualScheduler` by hand.

use std::cell::{Cell, RefCell};
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after `delay` on the UI thread
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

/// Virtual-clock scheduler. Nothing runs until `advance` is called.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    seq: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of tasks not yet run
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward, running due tasks in deadline order.
    ///
    /// Tasks scheduled by a running task are picked up if they fall inside
    /// the window. Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now.get() + by;
        let mut ran = 0;

        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let idx = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                idx.map(|i| pending.swap_remove(i))
            };

            let Some(Pending { due, task, .. }) = next else {
                break;
            };
            self.now.set(due);
            task();
            ran += 1;
        }

        self.now.set(target);
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.pending.borrow_mut().push(Pending {
            due: self.now.get() + delay,
            seq,
            task,
        });
    }
}

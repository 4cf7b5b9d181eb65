//! # Deferred callbacks
//!
//! Everything "asynchronous" in the demo is a callback fired after a fixed
//! delay: the fake network round-trip, the fake scan, redirects, notice
//! dismissal. [`Scheduler`] abstracts the timer so tests run instantly.
//!
//! Contract shared by every implementation:
//!
//! - a task never runs before its delay has elapsed;
//! - tasks due at the same instant run in the order they were scheduled;
//! - a scheduled task cannot be cancelled. Tasks whose target is gone must
//!   check for it themselves and do nothing.
//!
//! [`ManualScheduler`] is the virtual-time implementation used in tests. The
//! UI crate provides the real timer-backed one.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub trait Scheduler {
    fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: FnOnce() + 'static;
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl Queue {
    /// Remove and return the earliest task due at or before `limit`.
    fn pop_due(&mut self, limit: Duration) -> Option<Pending> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= limit)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(index))
    }
}

/// Virtual-time scheduler. Time only moves when [`advance`](Self::advance)
/// or [`run_until_idle`](Self::run_until_idle) is called.
///
/// Clones share the same queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of tasks waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Move time forward by `by`, firing every task that comes due on the way,
    /// including tasks scheduled by those tasks. Returns how many fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;
        loop {
            // The borrow ends before the task runs, so tasks may schedule more.
            let next = {
                let mut queue = self.queue.borrow_mut();
                let next = queue.pop_due(target);
                if let Some(ref p) = next {
                    queue.now = p.due;
                }
                next
            };
            let Some(pending) = next else { break };
            (pending.task)();
            fired += 1;
        }
        self.queue.borrow_mut().now = target;
        fired
    }

    /// Fire tasks until none are left, jumping time to each due instant.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        loop {
            let next_due = {
                let queue = self.queue.borrow();
                queue.pending.iter().map(|p| p.due).min()
            };
            let Some(due) = next_due else { break };
            fired += self.advance(due.saturating_sub(self.now()));
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: FnOnce() + 'static,
    {
        let mut queue = self.queue.borrow_mut();
        let pending = Pending {
            due: queue.now + delay,
            seq: queue.next_seq,
            task: Box::new(task),
        };
        queue.next_seq += 1;
        queue.pending.push(pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, ManualScheduler) {
        (Rc::new(RefCell::new(Vec::new())), ManualScheduler::new())
    }

    #[test]
    fn test_task_never_fires_early() {
        let (log, sched) = recorder();
        let l = log.clone();
        sched.schedule(Duration::from_millis(1000), move || l.borrow_mut().push("done"));

        assert_eq!(sched.advance(Duration::from_millis(999)), 0);
        assert!(log.borrow().is_empty());

        assert_eq!(sched.advance(Duration::from_millis(1)), 1);
        assert_eq!(*log.borrow(), vec!["done"]);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_fires_in_due_order_then_schedule_order() {
        let (log, sched) = recorder();
        for (delay, name) in [(300, "c"), (100, "a"), (300, "d"), (100, "b")] {
            let l = log.clone();
            sched.schedule(Duration::from_millis(delay), move || l.borrow_mut().push(name));
        }

        assert_eq!(sched.advance(Duration::from_secs(1)), 4);
        assert_eq!(*log.borrow(), vec!["a", "b", "c", "d"]);
        assert_eq!(sched.now(), Duration::from_secs(1));
    }

    #[test]
    fn test_nested_schedule_is_relative_to_firing_time() {
        let (log, sched) = recorder();
        let (l, s) = (log.clone(), sched.clone());
        sched.schedule(Duration::from_millis(1000), move || {
            l.borrow_mut().push("outer");
            let l = l.clone();
            s.schedule(Duration::from_millis(1500), move || l.borrow_mut().push("inner"));
        });

        // Outer fires at 1000ms; inner is due at 2500ms, not 1500ms
        sched.advance(Duration::from_millis(2000));
        assert_eq!(*log.borrow(), vec!["outer"]);

        sched.advance(Duration::from_millis(500));
        assert_eq!(*log.borrow(), vec!["outer", "inner"]);
    }

    #[test]
    fn test_run_until_idle() {
        let (log, sched) = recorder();
        let (l, s) = (log.clone(), sched.clone());
        sched.schedule(Duration::from_millis(10), move || {
            l.borrow_mut().push("first");
            let l = l.clone();
            s.schedule(Duration::from_millis(10), move || l.borrow_mut().push("second"));
        });

        assert_eq!(sched.run_until_idle(), 2);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
        assert_eq!(sched.now(), Duration::from_millis(20));
    }

    #[test]
    fn test_zero_delay_still_waits_for_advance() {
        let (log, sched) = recorder();
        let l = log.clone();
        sched.schedule(Duration::ZERO, move || l.borrow_mut().push("now"));
        assert!(log.borrow().is_empty());

        sched.advance(Duration::ZERO);
        assert_eq!(*log.borrow(), vec!["now"]);
    }
}

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::trace;

pub type TimerId = u64;

/// All pacing delays in one place so tests can run with zero delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause between guess submission and evaluation.
    pub verification_delay: Duration,
    /// How long a fetch-error message stays up before auto-clearing.
    pub error_clear_delay: Duration,
    /// How long an achievement toast stays fully visible.
    pub toast_visible: Duration,
    /// Exit transition before the next toast may start.
    pub toast_exit: Duration,
    /// Small lead-in before playing an audio cue.
    pub audio_priming: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            verification_delay: Duration::from_millis(500),
            error_clear_delay: Duration::from_millis(3000),
            toast_visible: Duration::from_millis(4000),
            toast_exit: Duration::from_millis(500),
            audio_priming: Duration::from_millis(50),
        }
    }
}

impl Timing {
    pub fn immediate() -> Self {
        Self {
            verification_delay: Duration::ZERO,
            error_clear_delay: Duration::ZERO,
            toast_visible: Duration::ZERO,
            toast_exit: Duration::ZERO,
            audio_priming: Duration::ZERO,
        }
    }
}

struct Entry {
    due: Instant,
    id: TimerId,
    callback: Box<dyn FnOnce()>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse so the earliest entry pops first,
        // breaking ties in schedule order.
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Single-threaded timer queue. Nothing fires on its own; the driving event
/// loop calls `fire_due` with the current instant.
pub struct Scheduler {
    queue: RefCell<BinaryHeap<Entry>>,
    next_id: Cell<TimerId>,
}

impl Scheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            queue: RefCell::new(BinaryHeap::new()),
            next_id: Cell::new(0),
        })
    }

    pub fn schedule_in<F>(&self, delay: Duration, callback: F) -> TimerId
    where
        F: FnOnce() + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        trace!(target: "scheduler", "Scheduling timer {} in {:?}", id, delay);
        self.queue.borrow_mut().push(Entry {
            due: Instant::now() + delay,
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Runs every callback due at or before `now`, including callbacks that
    /// become due because an earlier one scheduled them. Returns the number
    /// of callbacks fired.
    pub fn fire_due(&self, now: Instant) -> usize {
        let mut fired = 0;
        loop {
            let entry = {
                let mut queue = self.queue.borrow_mut();
                match queue.peek() {
                    Some(head) if head.due <= now => queue.pop(),
                    _ => None,
                }
            };
            // queue borrow is released; the callback may schedule more timers
            match entry {
                Some(entry) => {
                    trace!(target: "scheduler", "Firing timer {}", entry.id);
                    (entry.callback)();
                    fired += 1;
                }
                None => break,
            }
        }
        fired
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.queue.borrow().peek().map(|entry| entry.due)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_fires_in_due_order() {
        let scheduler = Scheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let o = order.clone();
        scheduler.schedule_in(Duration::from_millis(20), move || o.borrow_mut().push("late"));
        let o = order.clone();
        scheduler.schedule_in(Duration::ZERO, move || o.borrow_mut().push("early"));

        scheduler.fire_due(Instant::now() + Duration::from_secs(1));
        assert_eq!(*order.borrow(), vec!["early", "late"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_future_entries_do_not_fire() {
        let scheduler = Scheduler::new();
        let fired = Rc::new(std::cell::Cell::new(false));
        let f = fired.clone();
        scheduler.schedule_in(Duration::from_secs(60), move || f.set(true));

        assert_eq!(scheduler.fire_due(Instant::now()), 0);
        assert!(!fired.get());
        assert!(!scheduler.is_empty());
    }

    #[test]
    fn test_callback_may_schedule_followup() {
        let scheduler = Scheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let o = order.clone();
        let inner_scheduler = scheduler.clone();
        scheduler.schedule_in(Duration::ZERO, move || {
            o.borrow_mut().push("first");
            let o2 = o.clone();
            inner_scheduler.schedule_in(Duration::ZERO, move || o2.borrow_mut().push("second"));
        });

        // followups due immediately run within the same drain
        scheduler.fire_due(Instant::now() + Duration::from_millis(1));
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_equal_due_fires_in_schedule_order() {
        let scheduler = Scheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for n in 0..4 {
            let o = order.clone();
            scheduler.schedule_in(Duration::ZERO, move || o.borrow_mut().push(n));
        }
        scheduler.fire_due(Instant::now() + Duration::from_millis(1));
        assert_eq!(*order.borrow(), vec![0, 1, 2, 3]);
    }
}

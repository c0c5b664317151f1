#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::num::NonZeroUsize;
use std::rc::Rc;

use chfi_frontend::carousel::Scheduler;

struct Slot {
    tick: Rc<dyn Fn()>,
    armed: Rc<Cell<bool>>,
}

/// Scheduler driven by the test: nothing fires until `elapse` is called.
/// Cloning shares the same queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    slots: Rc<RefCell<Vec<Slot>>>,
}

pub struct ManualHandle {
    armed: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.armed.set(false);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, tick: Rc<dyn Fn()>) -> ManualHandle {
        let armed = Rc::new(Cell::new(true));
        self.slots.borrow_mut().push(Slot {
            tick,
            armed: armed.clone(),
        });
        ManualHandle { armed }
    }
}

impl ManualScheduler {
    /// Fires every armed callback `ticks` times.
    pub fn elapse(&self, ticks: usize) {
        for _ in 0..ticks {
            for tick in self.collect(true) {
                tick();
            }
        }
    }

    /// Fires every callback ever scheduled, cancelled or not, as if the host
    /// had queued them before cancellation.
    pub fn fire_queued(&self) {
        for tick in self.collect(false) {
            tick();
        }
    }

    pub fn armed(&self) -> usize {
        self.slots.borrow().iter().filter(|slot| slot.armed.get()).count()
    }

    pub fn scheduled(&self) -> usize {
        self.slots.borrow().len()
    }

    fn collect(&self, armed_only: bool) -> Vec<Rc<dyn Fn()>> {
        self.slots
            .borrow()
            .iter()
            .filter(|slot| !armed_only || slot.armed.get())
            .map(|slot| slot.tick.clone())
            .collect()
    }
}

pub fn count(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("item count must be non-zero")
}

//! Running/Stopped lifecycle around a [`Scheduler`].
//!
//! Every `start` creates a fresh schedule plus a liveness token. `stop`
//! clears the token before releasing the handle, so a tick the host had
//! already queued is swallowed instead of advancing a torn-down view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;

use super::error::CarouselError;
use super::schedule::Scheduler;
use super::state::CarouselState;

struct ActiveSchedule<H> {
    live: Rc<Cell<bool>>,
    _handle: H,
}

pub struct CarouselEngine<S: Scheduler> {
    scheduler: S,
    active: Option<ActiveSchedule<S::Handle>>,
}

impl<S: Scheduler> CarouselEngine<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            active: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Arms `on_tick` on the scheduler. Returns `false` without touching the
    /// existing schedule if the engine is already running.
    pub fn start<F>(&mut self, on_tick: F) -> bool
    where
        F: Fn() + 'static,
    {
        if self.active.is_some() {
            return false;
        }

        let live = Rc::new(Cell::new(true));
        let tick: Rc<dyn Fn()> = {
            let live = live.clone();
            Rc::new(move || {
                if live.get() {
                    on_tick();
                }
            })
        };

        debug!("Carousel schedule armed");
        self.active = Some(ActiveSchedule {
            _handle: self.scheduler.schedule(tick),
            live,
        });
        true
    }

    /// Cancels the schedule. Returns `false` if the engine was not running.
    pub fn stop(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                active.live.set(false);
                drop(active);
                debug!("Carousel schedule cancelled");
                true
            }
            None => false,
        }
    }
}

impl<S: Scheduler> Drop for CarouselEngine<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One owned [`CarouselState`] driven by one [`CarouselEngine`].
pub struct Carousel<S: Scheduler> {
    state: Rc<RefCell<CarouselState>>,
    engine: CarouselEngine<S>,
}

impl<S: Scheduler> Carousel<S> {
    pub fn new(state: CarouselState, scheduler: S) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            engine: CarouselEngine::new(scheduler),
        }
    }

    pub fn start(&mut self) -> bool {
        let state = self.state.clone();
        self.engine.start(move || {
            state.borrow_mut().scheduled_tick();
        })
    }

    pub fn stop(&mut self) -> bool {
        self.engine.stop()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn pause(&self) {
        self.state.borrow_mut().pause();
    }

    pub fn resume(&self) {
        self.state.borrow_mut().resume();
    }

    pub fn advance(&self) {
        self.state.borrow_mut().advance();
    }

    pub fn retreat(&self) {
        self.state.borrow_mut().retreat();
    }

    pub fn jump_to(&self, index: usize) -> Result<(), CarouselError> {
        self.state.borrow_mut().jump_to(index)
    }

    pub fn tick(&self) {
        self.state.borrow_mut().tick();
    }

    pub fn position(&self) -> f64 {
        self.state.borrow().position()
    }

    pub fn index(&self) -> usize {
        self.state.borrow().index()
    }

    pub fn is_paused(&self) -> bool {
        self.state.borrow().is_paused()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CarouselState {
        *self.state.borrow()
    }
}

//! Host scheduling primitives.
//!
//! A [`Scheduler`] arms one recurring callback and hands back a handle;
//! dropping the handle cancels whatever is still pending.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::state::Mode;

pub trait Scheduler {
    type Handle;

    fn schedule(&self, tick: Rc<dyn Fn()>) -> Self::Handle;
}

/// Fixed-delay repeating timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalScheduler {
    pub period_ms: u32,
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn schedule(&self, tick: Rc<dyn Fn()>) -> Interval {
        Interval::new(self.period_ms, move || tick())
    }
}

/// Runs the tick once per rendering frame, re-arming after every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameScheduler;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameLoop {
    window: Option<Window>,
    request_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Option<i32> {
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(err) => {
            warn!("requestAnimationFrame failed: {:?}", err);
            None
        }
    }
}

impl Scheduler for FrameScheduler {
    type Handle = FrameLoop;

    fn schedule(&self, tick: Rc<dyn Fn()>) -> FrameLoop {
        let request_id = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let Some(window) = web_sys::window() else {
            warn!("No window available, frame loop not started");
            return FrameLoop {
                window: None,
                request_id,
                callback,
            };
        };

        let slot: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&callback);
        let frame = {
            let window = window.clone();
            let request_id = request_id.clone();
            Closure::wrap(Box::new(move || {
                request_id.set(None);
                tick();
                // The loop may have been dropped while ticking.
                if let Some(slot) = slot.upgrade() {
                    if let Some(callback) = slot.borrow().as_ref() {
                        request_id.set(request_frame(&window, callback));
                    }
                }
            }) as Box<dyn FnMut()>)
        };

        request_id.set(request_frame(&window, &frame));
        *callback.borrow_mut() = Some(frame);

        FrameLoop {
            window: Some(window),
            request_id,
            callback,
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(window), Some(id)) = (&self.window, self.request_id.take()) {
            if let Err(err) = window.cancel_animation_frame(id) {
                warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
        self.callback.borrow_mut().take();
    }
}

/// Picks the browser primitive that matches a carousel mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserScheduler {
    Interval(IntervalScheduler),
    Frame(FrameScheduler),
}

pub enum BrowserHandle {
    Interval(Interval),
    Frame(FrameLoop),
}

impl BrowserScheduler {
    pub fn for_mode(mode: Mode, period_ms: u32) -> Self {
        match mode {
            Mode::Discrete => BrowserScheduler::Interval(IntervalScheduler { period_ms }),
            Mode::Continuous => BrowserScheduler::Frame(FrameScheduler),
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserHandle;

    fn schedule(&self, tick: Rc<dyn Fn()>) -> BrowserHandle {
        match self {
            BrowserScheduler::Interval(interval) => BrowserHandle::Interval(interval.schedule(tick)),
            BrowserScheduler::Frame(frame) => BrowserHandle::Frame(frame.schedule(tick)),
        }
    }
}

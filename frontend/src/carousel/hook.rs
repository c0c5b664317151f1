use std::num::NonZeroUsize;
use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use super::engine::CarouselEngine;
use super::schedule::{BrowserScheduler, Scheduler};
use super::state::{CarouselState, Mode};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselAction {
    Tick,
    Advance,
    Retreat,
    JumpTo(usize),
    Pause,
    Resume,
    Measure(f64),
    /// Rebuilds the state for new options, keeping only the pause flag.
    Reset(CarouselOptions),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Tick => {
                next.scheduled_tick();
            }
            CarouselAction::Advance => next.advance(),
            CarouselAction::Retreat => next.retreat(),
            CarouselAction::JumpTo(index) => {
                if let Err(err) = next.jump_to(index) {
                    warn!("Ignoring carousel jump: {}", err);
                }
            }
            CarouselAction::Pause => next.pause(),
            CarouselAction::Resume => next.resume(),
            CarouselAction::Measure(half_width) => match next.set_half_width(half_width) {
                Ok(()) => debug!("Carousel loop point measured at {}px", half_width),
                Err(err) => warn!("Ignoring carousel measurement: {}", err),
            },
            CarouselAction::Reset(options) => {
                next = options.initial_state();
                if self.is_paused() {
                    next.pause();
                }
            }
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselOptions {
    /// `autoplay_ms: None` gives a manually paged carousel.
    Discrete {
        item_count: NonZeroUsize,
        autoplay_ms: Option<u32>,
    },
    /// Always runs on animation frames, starting from a provisional loop
    /// point until the host dispatches [`CarouselAction::Measure`].
    Continuous { half_width: f64 },
}

impl CarouselOptions {
    pub fn initial_state(&self) -> CarouselState {
        match *self {
            CarouselOptions::Discrete { item_count, .. } => CarouselState::discrete(item_count),
            CarouselOptions::Continuous { half_width } => CarouselState::continuous(half_width)
                .unwrap_or_else(|err| {
                    warn!("{}, using fallback loop width", err);
                    CarouselState::continuous_unchecked(
                        config::REVIEW_CARD_WIDTH_PX,
                        config::REVIEW_STRIP_STEP_PX,
                    )
                }),
        }
    }

    pub fn scheduler(&self) -> Option<BrowserScheduler> {
        match *self {
            CarouselOptions::Discrete {
                autoplay_ms: Some(period_ms),
                ..
            } => Some(BrowserScheduler::for_mode(Mode::Discrete, period_ms)),
            CarouselOptions::Discrete {
                autoplay_ms: None, ..
            } => None,
            CarouselOptions::Continuous { .. } => {
                Some(BrowserScheduler::for_mode(Mode::Continuous, 0))
            }
        }
    }
}

/// Owns a carousel for the lifetime of the calling component. The schedule
/// is armed on mount and cancelled on unmount. When `options` change, the
/// schedule is re-armed and the state rebuilt so the position always lies
/// within the new item range.
#[hook]
pub fn use_carousel(options: CarouselOptions) -> UseReducerHandle<CarouselState> {
    use_carousel_on(options, options.scheduler())
}

/// [`use_carousel`] driven by a caller-chosen scheduler. `None` gives a
/// carousel that only moves on manual navigation.
#[hook]
pub fn use_carousel_on<S>(
    options: CarouselOptions,
    scheduler: Option<S>,
) -> UseReducerHandle<CarouselState>
where
    S: Scheduler + Clone + PartialEq + 'static,
    S::Handle: 'static,
{
    let state = use_reducer(move || options.initial_state());
    let applied = use_mut_ref(move || options);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(options, scheduler)| {
                let options = *options;
                if *applied.borrow() != options {
                    debug!("Carousel options changed, resetting state");
                    *applied.borrow_mut() = options;
                    dispatcher.dispatch(CarouselAction::Reset(options));
                }

                let mut engine = scheduler.clone().map(CarouselEngine::new);
                if let Some(engine) = engine.as_mut() {
                    engine.start(move || dispatcher.dispatch(CarouselAction::Tick));
                }

                move || {
                    if let Some(mut engine) = engine {
                        engine.stop();
                    }
                }
            },
            (options, scheduler),
        );
    }

    state
}

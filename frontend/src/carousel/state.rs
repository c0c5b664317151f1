//! Owned carousel state.
//!
//! A [`CarouselState`] is a plain value: it knows how to move its position
//! but nothing about timers or rendering. Scheduling lives in
//! [`super::engine`], yew integration in [`super::hook`].

use std::num::NonZeroUsize;

use super::error::CarouselError;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Whole-item steps on a fixed wall-clock timer.
    Discrete,
    /// Fractional offset increments on every rendering frame.
    Continuous,
}

/// Direction of the most recent manual navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Track {
    Discrete {
        item_count: NonZeroUsize,
        index: usize,
    },
    Continuous {
        half_width: f64,
        step: f64,
        offset: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselState {
    track: Track,
    paused: bool,
    direction: Direction,
}

fn check_width(half_width: f64) -> Result<f64, CarouselError> {
    if half_width.is_finite() && half_width > 0.0 {
        Ok(half_width)
    } else {
        Err(CarouselError::InvalidWidth { half_width })
    }
}

fn check_step(step: f64) -> Result<f64, CarouselError> {
    if step.is_finite() && step > 0.0 {
        Ok(step)
    } else {
        Err(CarouselError::InvalidStep { step })
    }
}

impl CarouselState {
    pub fn discrete(item_count: NonZeroUsize) -> Self {
        Self {
            track: Track::Discrete {
                item_count,
                index: 0,
            },
            paused: false,
            direction: Direction::Forward,
        }
    }

    /// Continuous carousel looping at `half_width`, moving
    /// [`config::REVIEW_STRIP_STEP_PX`] per tick.
    pub fn continuous(half_width: f64) -> Result<Self, CarouselError> {
        Self::continuous_with_step(half_width, config::REVIEW_STRIP_STEP_PX)
    }

    pub fn continuous_with_step(half_width: f64, step: f64) -> Result<Self, CarouselError> {
        Ok(Self::continuous_unchecked(
            check_width(half_width)?,
            check_step(step)?,
        ))
    }

    // Callers pass compile-time constants.
    pub(crate) fn continuous_unchecked(half_width: f64, step: f64) -> Self {
        Self {
            track: Track::Continuous {
                half_width,
                step,
                offset: 0.0,
            },
            paused: false,
            direction: Direction::Forward,
        }
    }

    pub fn mode(&self) -> Mode {
        match self.track {
            Track::Discrete { .. } => Mode::Discrete,
            Track::Continuous { .. } => Mode::Continuous,
        }
    }

    /// Current index (discrete) or scroll offset (continuous).
    pub fn position(&self) -> f64 {
        match self.track {
            Track::Discrete { index, .. } => index as f64,
            Track::Continuous { offset, .. } => offset,
        }
    }

    /// Index of the emphasised item. Always `0` for continuous carousels.
    pub fn index(&self) -> usize {
        match self.track {
            Track::Discrete { index, .. } => index,
            Track::Continuous { .. } => 0,
        }
    }

    pub fn item_count(&self) -> Option<NonZeroUsize> {
        match self.track {
            Track::Discrete { item_count, .. } => Some(item_count),
            Track::Continuous { .. } => None,
        }
    }

    pub fn half_width(&self) -> Option<f64> {
        match self.track {
            Track::Continuous { half_width, .. } => Some(half_width),
            Track::Discrete { .. } => None,
        }
    }

    pub fn step(&self) -> Option<f64> {
        match self.track {
            Track::Continuous { step, .. } => Some(step),
            Track::Discrete { .. } => None,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Steps to the next item, wrapping to the first. No-op when continuous.
    pub fn advance(&mut self) {
        if let Track::Discrete { item_count, index } = &mut self.track {
            *index = (*index + 1) % item_count.get();
            self.direction = Direction::Forward;
        }
    }

    /// Steps to the previous item, wrapping to the last. No-op when continuous.
    pub fn retreat(&mut self) {
        if let Track::Discrete { item_count, index } = &mut self.track {
            let count = item_count.get();
            *index = (*index + count - 1) % count;
            self.direction = Direction::Backward;
        }
    }

    /// Shows `target` directly. Continuous carousels have no addressable
    /// items and reject every index.
    pub fn jump_to(&mut self, target: usize) -> Result<(), CarouselError> {
        match &mut self.track {
            Track::Discrete { item_count, index } if target < item_count.get() => {
                self.direction = if target < *index {
                    Direction::Backward
                } else {
                    Direction::Forward
                };
                *index = target;
                Ok(())
            }
            Track::Discrete { item_count, .. } => Err(CarouselError::OutOfRange {
                index: target,
                item_count: item_count.get(),
            }),
            Track::Continuous { .. } => Err(CarouselError::OutOfRange {
                index: target,
                item_count: 0,
            }),
        }
    }

    /// Moves the offset by one step, resetting to `0` on reaching the loop
    /// point. No-op when discrete.
    pub fn tick(&mut self) {
        if let Track::Continuous {
            half_width,
            step,
            offset,
        } = &mut self.track
        {
            *offset += *step;
            if *offset >= *half_width {
                *offset = 0.0;
            }
        }
    }

    /// One scheduled unit of automatic advancement. Returns whether the
    /// position moved; a paused carousel never moves here.
    pub fn scheduled_tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        let before = self.position();
        match self.mode() {
            Mode::Discrete => self.advance(),
            Mode::Continuous => self.tick(),
        }
        self.position() != before
    }

    /// Moves the loop point after the duplicated content was re-measured.
    /// Discrete carousels ignore this.
    pub fn set_half_width(&mut self, new_width: f64) -> Result<(), CarouselError> {
        if let Track::Continuous {
            half_width, offset, ..
        } = &mut self.track
        {
            *half_width = check_width(new_width)?;
            if *offset >= *half_width {
                *offset = 0.0;
            }
        }
        Ok(())
    }
}

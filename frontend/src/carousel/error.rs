/// Errors raised by carousel navigation and loop-width measurement.
///
/// None of these are fatal: callers log them and keep the previous state.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum CarouselError {
    /// `jump_to` was given an index outside `0..item_count`.
    #[error("index {index} is out of range for {item_count} items")]
    OutOfRange { index: usize, item_count: usize },

    /// The loop point of a continuous carousel must be finite and positive.
    #[error("loop width must be finite and positive, got {half_width}")]
    InvalidWidth { half_width: f64 },

    /// The per-frame step of a continuous carousel must be finite and positive.
    #[error("scroll step must be finite and positive, got {step}")]
    InvalidStep { step: f64 },
}

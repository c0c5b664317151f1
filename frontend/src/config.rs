use log::Level;

use crate::content::Variant;

// Hero slider advances one slide per period.
pub const HERO_INTERVAL_MS: u32 = 5_000;

// Pixels the review strip moves per animation frame.
pub const REVIEW_STRIP_STEP_PX: f64 = 0.5;

// Used as the review strip loop point until the real track has been measured.
pub const REVIEW_CARD_WIDTH_PX: f64 = 384.0;

pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 80.0;

// Build-time switch between the review grid and the scrolling review strip.
pub const DEFAULT_VARIANT: Variant = Variant::Stories;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose carousel lifecycle logs while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

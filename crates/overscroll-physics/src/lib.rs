//! Scroll physics for momentum flings and rubber-band over-scroll.
//!
//! This crate provides the pure math a scroll container needs at the two
//! interesting moments of a drag: where a fling released at some velocity
//! will settle ([`momentum_end_value`], [`ExponentialDecay`]), and what
//! offset to display while the finger drags past the content bounds
//! ([`rubber_band`], [`RubberBand`]). Touch tracking, the frame clock, and
//! applying offsets to anything visible belong to the caller.

pub mod constants;
pub mod decay;
pub mod rubber_band;

pub use constants::{
    DECELERATION_RATE_FAST, DECELERATION_RATE_NORMAL, DEFAULT_RESISTANCE,
};
pub use decay::{momentum_end_value, ExponentialDecay, MomentumFling};
pub use rubber_band::{rubber_band, RubberBand};

pub mod prelude {
    pub use crate::constants::{
        DECELERATION_RATE_FAST, DECELERATION_RATE_NORMAL, DEFAULT_RESISTANCE,
    };
    pub use crate::decay::{momentum_end_value, ExponentialDecay, MomentumFling};
    pub use crate::rubber_band::{rubber_band, RubberBand};
}

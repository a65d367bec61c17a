//! Shared physics constants for scroll deceleration and over-scroll damping.
//!
//! All values are in logical units. Velocities are in units per second,
//! deceleration rates are the per-millisecond decay base of the momentum
//! model (see [`crate::decay`]).

/// "Normal" deceleration rate, the platform default for full-screen scrolling.
///
/// Velocity is multiplied by this value once per millisecond, so rates
/// closer to 1.0 decay slower and travel further.
pub const DECELERATION_RATE_NORMAL: f32 = 0.998;

/// "Fast" deceleration rate, used for short pannable surfaces that should
/// come to rest quickly (pickers, pull-down menus).
pub const DECELERATION_RATE_FAST: f32 = 0.99;

/// Default rubber-band resistance.
///
/// Matches the feel of native scroll views: dragging one dimension past the
/// edge moves the content about a third of a dimension. Larger values let
/// the content stretch further before the damping curve flattens out.
pub const DEFAULT_RESISTANCE: f32 = 0.55;

/// Distance component of the momentum stop threshold, in units.
pub const STOP_THRESHOLD_POINT: f32 = 1.0;

/// Speed component of the momentum stop threshold, in units per second.
///
/// A fling is considered finished once its instantaneous speed drops below
/// `STOP_THRESHOLD_POINT * STOP_THRESHOLD_SPEED`; below that the remaining
/// motion is under a pixel per frame and not worth animating.
pub const STOP_THRESHOLD_SPEED: f32 = 5.0;

//! Rubber-band damping for over-scrolled offsets.
//!
//! When a drag pulls the offset past its bounds, the displayed offset should
//! trail the finger with increasing resistance instead of following it
//! linearly. The curve used here maps an over-scroll of `x` to
//! `(1 - 1/((x * resistance / d) + 1)) * d`, where `d` is the effective
//! content dimension: it starts with slope close to 1 at the bound and
//! asymptotically approaches `d`, so the content can never be dragged more
//! than one dimension past the edge.

use crate::constants::DEFAULT_RESISTANCE;

/// Over-scroll bounds plus resistance, applied per drag sample.
///
/// `minimum` must not exceed `maximum`; an inverted range is a caller error
/// and the output is unspecified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RubberBand {
    pub minimum: f32,
    pub maximum: f32,
    pub resistance: f32,
}

impl RubberBand {
    /// Bounds with the default resistance.
    pub fn new(minimum: f32, maximum: f32) -> Self {
        Self {
            minimum,
            maximum,
            resistance: DEFAULT_RESISTANCE,
        }
    }

    /// Bounds with a custom resistance. Larger values let the content
    /// stretch further past the bound before flattening out.
    pub fn with_resistance(minimum: f32, maximum: f32, resistance: f32) -> Self {
        Self {
            minimum,
            maximum,
            resistance,
        }
    }

    /// The damped offset to display for a raw drag offset.
    pub fn apply(&self, value: f32) -> f32 {
        rubber_band(value, self.minimum, self.maximum, self.resistance)
    }

    /// Signed distance past the nearest bound, 0 inside the bounds.
    pub fn overshoot(&self, value: f32) -> f32 {
        if value < self.minimum {
            value - self.minimum
        } else if value > self.maximum {
            value - self.maximum
        } else {
            0.0
        }
    }

    /// Hard clamp to the bounds, for settling once the drag ends.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.minimum, self.maximum)
    }
}

/// Applies the rubber-band effect to a raw scroll offset.
///
/// Values inside `[minimum, maximum]` pass through unchanged; values outside
/// are pulled back toward the exceeded bound along the damping curve, never
/// further than one effective dimension (`max(1, maximum)`) past it.
pub fn rubber_band(value: f32, minimum: f32, maximum: f32, resistance: f32) -> f32 {
    if value < minimum {
        minimum - damped_overshoot(minimum - value, resistance, maximum)
    } else if value > maximum {
        maximum + damped_overshoot(value - maximum, resistance, maximum)
    } else {
        value
    }
}

fn damped_overshoot(offset: f32, resistance: f32, maximum: f32) -> f32 {
    let dimension = maximum.max(1.0);
    (1.0 - 1.0 / (offset * resistance / dimension + 1.0)) * dimension
}

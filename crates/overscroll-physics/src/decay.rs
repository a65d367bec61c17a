//! Exponential-decay momentum model for fling scrolling.
//!
//! Velocity decays geometrically with time, `v(t) = v0 * rate^t` with `t` in
//! milliseconds, which gives closed forms for both the fling duration and the
//! distance travelled. No simulation stepping is involved: a scroll
//! controller asks once for the end value (to pick a settle target) or
//! samples [`MomentumFling`] per frame while driving the animation itself.

use crate::constants::{
    DECELERATION_RATE_FAST, DECELERATION_RATE_NORMAL, STOP_THRESHOLD_POINT, STOP_THRESHOLD_SPEED,
};

/// Exponential decay specification for momentum scrolling.
///
/// `deceleration` is the per-millisecond decay base and must lie strictly
/// between 0 and 1; the log-domain math is undefined at exactly 0 or 1, and
/// callers are responsible for never passing those values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    deceleration: f32,
}

impl ExponentialDecay {
    /// Decay with the platform-default "normal" rate.
    pub fn normal() -> Self {
        Self::new(DECELERATION_RATE_NORMAL)
    }

    /// Decay with the "fast" rate, stopping noticeably sooner.
    pub fn fast() -> Self {
        Self::new(DECELERATION_RATE_FAST)
    }

    /// Decay with a custom rate in (0, 1), exclusive on both ends.
    pub fn new(deceleration: f32) -> Self {
        Self { deceleration }
    }

    /// The per-millisecond decay base this spec was built with.
    pub fn deceleration(&self) -> f32 {
        self.deceleration
    }

    /// How long a fling at `velocity` (units/sec) keeps moving, in seconds.
    ///
    /// Solves `velocity * deceleration^t = threshold` for `t`. Velocities
    /// already below the stop threshold (including zero) yield 0.
    pub fn duration(&self, velocity: f32) -> f32 {
        let velocity_ms = velocity as f64 / 1000.0;
        let threshold = (STOP_THRESHOLD_POINT * STOP_THRESHOLD_SPEED) as f64 / 1000.0;
        let duration_ms = (threshold / velocity_ms).abs().ln() / (self.deceleration as f64).ln();
        if duration_ms.is_nan() || duration_ms < 0.0 {
            0.0
        } else {
            (duration_ms / 1000.0) as f32
        }
    }

    /// Signed distance travelled after `time` seconds of a fling at
    /// `velocity` (units/sec).
    ///
    /// Analytic integral of the decay curve over `[0, time]`:
    /// `(rate^t_ms - 1) * velocity_ms / ln(rate)`.
    pub fn distance(&self, time: f32, velocity: f32) -> f32 {
        let time_ms = time as f64 * 1000.0;
        let velocity_ms = velocity as f64 / 1000.0;
        let rate = self.deceleration as f64;
        ((rate.powf(time_ms) - 1.0) * velocity_ms / rate.ln()) as f32
    }

    /// Instantaneous velocity after `time` seconds, in units/sec.
    pub fn velocity_at(&self, time: f32, velocity: f32) -> f32 {
        let time_ms = time as f64 * 1000.0;
        (velocity as f64 * (self.deceleration as f64).powf(time_ms)) as f32
    }

    /// Where a fling starting at `start_value` with `velocity` settles.
    pub fn target_value(&self, start_value: f32, velocity: f32) -> f32 {
        start_value + self.distance(self.duration(velocity), velocity)
    }

    /// Precompute a full fling for per-frame sampling.
    pub fn fling(&self, start_value: f32, velocity: f32) -> MomentumFling {
        let duration = self.duration(velocity);
        let distance = self.distance(duration, velocity);
        log::trace!(
            "fling: velocity={velocity} duration={duration}s distance={distance}"
        );
        MomentumFling {
            decay: *self,
            start_value,
            initial_velocity: velocity,
            distance,
            duration,
        }
    }
}

/// A single fling, precomputed from a release velocity.
///
/// Holds the settle distance and duration so per-frame sampling only
/// evaluates the position curve. The frame clock itself belongs to the
/// owning scroll controller.
#[derive(Debug, Clone, Copy)]
pub struct MomentumFling {
    decay: ExponentialDecay,
    start_value: f32,
    initial_velocity: f32,
    distance: f32,
    duration: f32,
}

impl MomentumFling {
    /// Total fling duration in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Signed distance the fling covers in total.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Offset at `time` seconds into the fling.
    ///
    /// Times past the duration return the resting position.
    pub fn position(&self, time: f32) -> f32 {
        let time = time.clamp(0.0, self.duration);
        self.start_value + self.decay.distance(time, self.initial_velocity)
    }

    /// Velocity at `time` seconds into the fling, in units/sec.
    ///
    /// Zero once the fling has finished.
    pub fn velocity(&self, time: f32) -> f32 {
        if time >= self.duration {
            return 0.0;
        }
        self.decay.velocity_at(time.max(0.0), self.initial_velocity)
    }

    /// Whether the fling has come to rest at `time` seconds.
    pub fn is_finished(&self, time: f32) -> bool {
        time >= self.duration
    }

    /// The offset the fling settles at.
    pub fn end_value(&self) -> f32 {
        self.start_value + self.distance
    }
}

/// Computes the end value of a momentum scroll released at `velocity`
/// (units/sec) from `start_value`, decaying at `deceleration` per
/// millisecond.
///
/// `deceleration` must lie strictly between 0 and 1. Velocities at or below
/// the stop threshold return `start_value` unchanged.
pub fn momentum_end_value(velocity: f32, deceleration: f32, start_value: f32) -> f32 {
    ExponentialDecay::new(deceleration).target_value(start_value, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_velocity_goes_nowhere() {
        assert_eq!(momentum_end_value(0.0, 0.998, 100.0), 100.0);
    }

    #[test]
    fn sub_threshold_velocity_goes_nowhere() {
        // 4 units/sec is already below the 5 units/sec stop threshold.
        assert_eq!(momentum_end_value(4.0, 0.998, 100.0), 100.0);
    }

    #[test]
    fn concrete_case_matches_closed_form() {
        // velocity_ms = 1.0, threshold = 0.005, so the decay factor at the
        // stop time is exactly 0.005 and the analytic distance is
        // (0.005 - 1) / ln(0.998) = 497.0023...
        let end = momentum_end_value(1000.0, 0.998, 0.0);
        assert!(
            (end - 497.0023).abs() < 0.05,
            "expected ~497.0023, got {end}"
        );

        let duration = ExponentialDecay::normal().duration(1000.0);
        assert!(
            (duration - 2.6465).abs() < 0.005,
            "expected ~2.6465s, got {duration}"
        );
    }

    #[test]
    fn faster_flings_travel_further() {
        let slow = momentum_end_value(500.0, 0.998, 0.0);
        let fast = momentum_end_value(2000.0, 0.998, 0.0);
        assert!(fast > slow, "expected {fast} > {slow}");

        let slow = momentum_end_value(-500.0, 0.998, 0.0);
        let fast = momentum_end_value(-2000.0, 0.998, 0.0);
        assert!(fast < slow, "expected {fast} < {slow}");
    }

    #[test]
    fn slower_decay_travels_further() {
        let normal = momentum_end_value(1000.0, 0.998, 0.0);
        let fast = momentum_end_value(1000.0, 0.99, 0.0);
        assert!(normal > fast, "expected {normal} > {fast}");
    }

    #[test]
    fn negative_velocity_is_symmetric() {
        let forward = momentum_end_value(1000.0, 0.998, 0.0);
        let backward = momentum_end_value(-1000.0, 0.998, 0.0);
        assert!(
            (forward + backward).abs() < 1e-3,
            "expected symmetric travel, got {forward} and {backward}"
        );
    }

    #[test]
    fn velocity_decays_to_stop_threshold() {
        let decay = ExponentialDecay::normal();
        let duration = decay.duration(1000.0);
        let final_speed = decay.velocity_at(duration, 1000.0);
        assert!(
            (final_speed - 5.0).abs() < 1e-3,
            "expected stop threshold speed, got {final_speed}"
        );
    }

    #[test]
    fn fling_samples_the_same_curve() {
        let decay = ExponentialDecay::normal();
        let fling = decay.fling(50.0, 1000.0);

        assert_eq!(fling.position(0.0), 50.0);
        assert!(
            (fling.end_value() - decay.target_value(50.0, 1000.0)).abs() < 1e-3
        );

        // Position at the duration is the resting position, and sampling
        // past the end stays there.
        let at_end = fling.position(fling.duration());
        assert!((at_end - fling.end_value()).abs() < 1e-3);
        assert_eq!(fling.position(fling.duration() + 10.0), at_end);

        assert!(!fling.is_finished(fling.duration() * 0.5));
        assert!(fling.is_finished(fling.duration()));
        assert_eq!(fling.velocity(fling.duration() + 1.0), 0.0);
    }

    #[test]
    fn fling_position_is_monotonic() {
        let fling = ExponentialDecay::normal().fling(0.0, 1000.0);
        let mut prev = fling.position(0.0);
        for i in 1..=50 {
            let t = fling.duration() * i as f32 / 50.0;
            let pos = fling.position(t);
            assert!(pos >= prev, "position went backwards at t={t}");
            prev = pos;
        }
    }
}

//! Scroll position state machine: drag, momentum, elastic bounce and eased paging.
//!
//! [`Motion`] owns the scroll position and velocity of one carousel. Exactly one
//! driver moves it at a time, named by [`Phase`]:
//!
//! - `Dragging`: the gesture adapter applies pointer deltas directly.
//! - `Settling`: once per frame, `pos += v` and `v *= friction`; past an edge the
//!   overshoot shrinks by `rebound` and velocity by `bounce_damping` until it snaps.
//! - `Paging`: a cubic ease-out from the position at request time to a clamped target.
//!
//! Nothing here schedules frames; the model turns "still animating" into a tick command.

use super::config::Physics;
use std::time::{Duration, Instant};

/// Who is currently driving the scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// At rest.
    #[default]
    Idle,
    /// Following a pointer or touch gesture.
    Dragging,
    /// Coasting on residual velocity, bouncing back from edges.
    Settling,
    /// Running an eased transition toward a paging target.
    Paging,
}

/// An eased transition between two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Ease {
    from: f64,
    to: f64,
    start: Instant,
    duration: Duration,
}

impl Ease {
    fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn sample(&self, now: Instant) -> f64 {
        self.from + (self.to - self.from) * ease_out_cubic(self.progress(now))
    }
}

/// `1 - (1 - t)^3`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Moves `pos` by `delta`, applying the part of the movement that lies outside
/// `[0, max]` at `resistance` strength.
pub fn rubber_band(pos: f64, delta: f64, max: f64, resistance: f64) -> f64 {
    let target = pos + delta;
    let lo = pos.min(target);
    let hi = pos.max(target);
    let inside = (hi.min(max) - lo.max(0.0)).max(0.0);
    let outside = (hi - lo) - inside;
    pos + delta.signum() * (inside + outside * resistance)
}

/// Scroll position and velocity of one carousel.
#[derive(Debug, Clone)]
pub struct Motion {
    pos: f64,
    velocity: f64,
    phase: Phase,
    ease: Option<Ease>,
    physics: Physics,
}

impl Motion {
    /// A motion at rest at position 0.
    pub fn new(physics: Physics) -> Self {
        Self {
            pos: 0.0,
            velocity: 0.0,
            phase: Phase::Idle,
            ease: None,
            physics,
        }
    }

    /// Current scroll position in pixels.
    pub fn position(&self) -> f64 {
        self.pos
    }

    /// Current velocity in pixels per nominal frame.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current driver.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether frame ticks are needed.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Settling | Phase::Paging)
    }

    /// The constants in use.
    pub fn physics(&self) -> &Physics {
        &self.physics
    }

    /// Stops any momentum or eased transition where it currently is.
    pub fn halt(&mut self, now: Instant) {
        if let Some(ease) = self.ease.take() {
            self.pos = ease.sample(now);
        }
        self.velocity = 0.0;
        if self.phase != Phase::Dragging {
            self.phase = Phase::Idle;
        }
    }

    /// Clamps the position into `[0, max]` if at rest. Used after the extent shrinks.
    pub fn clamp_at_rest(&mut self, max: f64) {
        if self.phase == Phase::Idle {
            self.pos = self.pos.clamp(0.0, max);
        }
    }

    /// Enters `Dragging`, discarding velocity and any running animation.
    pub fn begin_drag(&mut self, now: Instant) {
        self.halt(now);
        self.phase = Phase::Dragging;
    }

    /// Applies a drag delta (scroll space) with rubber banding, and records the sampled velocity.
    pub fn drag_by(&mut self, delta: f64, velocity: f64, max: f64) {
        if self.phase != Phase::Dragging {
            return;
        }
        self.pos = rubber_band(
            self.pos,
            delta,
            max,
            self.physics.overscroll_resistance,
        );
        self.velocity = velocity;
    }

    /// Leaves `Dragging` without momentum, e.g. when a page request takes over.
    pub fn abandon_drag(&mut self) {
        if self.phase == Phase::Dragging {
            self.velocity = 0.0;
            self.phase = Phase::Idle;
        }
    }

    /// Leaves `Dragging`. Returns `true` if momentum or a bounce-back must now run.
    pub fn release(&mut self, max: f64) -> bool {
        if self.phase != Phase::Dragging {
            return false;
        }
        if self.pos < 0.0 {
            self.velocity = self.velocity.abs();
        } else if self.pos > max {
            self.velocity = -self.velocity.abs();
        }

        let out_of_range = self.pos < 0.0 || self.pos > max;
        if out_of_range || self.velocity.abs() > self.physics.min_velocity {
            self.phase = Phase::Settling;
            true
        } else {
            self.velocity = 0.0;
            self.phase = Phase::Idle;
            false
        }
    }

    /// Starts an eased transition to `target`, clamped to `[0, max]`.
    ///
    /// Returns `false` (and stays idle) when the target equals the current position.
    pub fn page_to(&mut self, target: f64, max: f64, duration: Duration, now: Instant) -> bool {
        self.halt(now);
        let to = target.clamp(0.0, max);
        if (to - self.pos).abs() < f64::EPSILON {
            self.pos = to;
            return false;
        }
        self.ease = Some(Ease {
            from: self.pos,
            to,
            start: now,
            duration,
        });
        self.phase = Phase::Paging;
        true
    }

    /// The position a running paging transition will end at.
    pub fn paging_target(&self) -> Option<f64> {
        self.ease.map(|e| e.to)
    }

    /// Advances one frame. Returns `true` while another frame is needed.
    pub fn step(&mut self, max: f64, now: Instant) -> bool {
        match self.phase {
            Phase::Settling => self.settle_step(max),
            Phase::Paging => self.ease_step(now),
            Phase::Idle | Phase::Dragging => false,
        }
    }

    fn ease_step(&mut self, now: Instant) -> bool {
        let Some(ease) = self.ease else {
            self.phase = Phase::Idle;
            return false;
        };
        if ease.progress(now) >= 1.0 {
            self.pos = ease.to;
            self.ease = None;
            self.phase = Phase::Idle;
            return false;
        }
        self.pos = ease.sample(now);
        true
    }

    fn settle_step(&mut self, max: f64) -> bool {
        let p = &self.physics;
        self.pos += self.velocity;
        self.velocity *= p.friction;

        if self.pos < 0.0 {
            self.pos *= p.rebound;
            self.velocity *= p.bounce_damping;
            if self.pos.abs() < p.snap_distance {
                self.pos = 0.0;
                self.velocity = 0.0;
            }
        } else if self.pos > max {
            let overshoot = (self.pos - max) * p.rebound;
            self.velocity *= p.bounce_damping;
            if overshoot < p.snap_distance {
                self.pos = max;
                self.velocity = 0.0;
            } else {
                self.pos = max + overshoot;
            }
        }

        let in_range = (0.0..=max).contains(&self.pos);
        if in_range && self.velocity.abs() <= p.min_velocity {
            self.velocity = 0.0;
            self.phase = Phase::Idle;
            return false;
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, pos: f64, velocity: f64, phase: Phase) {
        self.pos = pos;
        self.velocity = velocity;
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(m: &mut Motion, max: f64) -> usize {
        let now = Instant::now();
        let mut frames = 0;
        while m.step(max, now) {
            frames += 1;
            assert!(frames < 10_000, "settling never converged");
        }
        frames
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert_eq!(ease_out_cubic(3.0), 1.0);
    }

    #[test]
    fn test_rubber_band_in_range_is_one_to_one() {
        assert_eq!(rubber_band(100.0, 50.0, 1000.0, 0.3), 150.0);
        assert_eq!(rubber_band(100.0, -50.0, 1000.0, 0.3), 50.0);
    }

    #[test]
    fn test_rubber_band_damps_only_the_excess() {
        // 20 px inside, 80 px past zero
        let p = rubber_band(20.0, -100.0, 1000.0, 0.3);
        assert!((p - (-24.0)).abs() < 1e-9);

        let p = rubber_band(990.0, 110.0, 1000.0, 0.3);
        assert!((p - 1030.0).abs() < 1e-9);

        // zero-width track: everything is excess
        let p = rubber_band(0.0, 100.0, 0.0, 0.3);
        assert!((p - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_momentum_decays_and_stops_in_range() {
        let mut m = Motion::new(Physics::default());
        m.set_state(500.0, 16.0, Phase::Settling);
        settle(&mut m, 1000.0);
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.velocity(), 0.0);
        assert!(m.position() > 500.0 && m.position() <= 1000.0);
    }

    #[test]
    fn test_leftward_throw_coasts_back_toward_start() {
        let mut m = Motion::new(Physics::default());
        m.set_state(500.0, -16.0, Phase::Settling);
        settle(&mut m, 1000.0);
        assert!(m.position() >= 0.0 && m.position() < 500.0);
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn test_abandoned_drag_is_idle_without_velocity() {
        let mut m = Motion::new(Physics::default());
        m.begin_drag(Instant::now());
        m.drag_by(120.0, 9.0, 1000.0);
        m.abandon_drag();
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.velocity(), 0.0);
        assert_eq!(m.position(), 120.0);
        assert!(!m.release(1000.0));
    }

    #[test]
    fn test_bounce_snaps_exactly_to_zero() {
        let mut m = Motion::new(Physics::default());
        m.set_state(-80.0, 0.0, Phase::Settling);
        settle(&mut m, 1000.0);
        assert_eq!(m.position(), 0.0);
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn test_bounce_snaps_exactly_to_max() {
        let mut m = Motion::new(Physics::default());
        m.set_state(950.0, 40.0, Phase::Settling);
        settle(&mut m, 1000.0);
        assert_eq!(m.position(), 1000.0);
    }

    #[test]
    fn test_release_out_of_range_points_velocity_home() {
        let mut m = Motion::new(Physics::default());
        m.begin_drag(Instant::now());
        m.drag_by(-100.0, -6.0, 1000.0);
        assert!(m.position() < 0.0);
        assert!(m.release(1000.0));
        assert!(m.velocity() > 0.0);

        let mut m = Motion::new(Physics::default());
        m.begin_drag(Instant::now());
        m.drag_by(1100.0, 9.0, 1000.0);
        assert!(m.release(1000.0));
        assert!(m.velocity() < 0.0);
    }

    #[test]
    fn test_release_slow_in_range_goes_idle() {
        let mut m = Motion::new(Physics::default());
        m.begin_drag(Instant::now());
        m.drag_by(40.0, 0.05, 1000.0);
        assert!(!m.release(1000.0));
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.position(), 40.0);
    }

    #[test]
    fn test_drag_ignored_unless_dragging() {
        let mut m = Motion::new(Physics::default());
        m.drag_by(40.0, 3.0, 1000.0);
        assert_eq!(m.position(), 0.0);
        assert!(!m.release(1000.0));
    }

    #[test]
    fn test_paging_eases_to_clamped_target() {
        let mut m = Motion::new(Physics::default());
        let t0 = Instant::now();
        let d = Duration::from_millis(800);
        assert!(m.page_to(350.0, 200.0, d, t0));
        assert_eq!(m.paging_target(), Some(200.0));

        assert!(m.step(200.0, t0 + Duration::from_millis(400)));
        let mid = m.position();
        assert!(mid > 100.0 && mid < 200.0, "ease-out is past halfway at t=0.5");

        assert!(!m.step(200.0, t0 + d));
        assert_eq!(m.position(), 200.0);
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn test_paging_to_current_position_is_noop() {
        let mut m = Motion::new(Physics::default());
        assert!(!m.page_to(-350.0, 1000.0, Duration::from_millis(800), Instant::now()));
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn test_retarget_starts_from_eased_position() {
        let mut m = Motion::new(Physics::default());
        let t0 = Instant::now();
        let d = Duration::from_millis(800);
        m.page_to(350.0, 2000.0, d, t0);
        let t1 = t0 + Duration::from_millis(200);
        m.page_to(m.paging_target().unwrap_or(0.0) + 350.0, 2000.0, d, t1);
        assert_eq!(m.paging_target(), Some(700.0));
        // restarted from the sampled position, not from 0 or 350
        assert!(m.position() > 0.0 && m.position() < 350.0);
    }

    #[test]
    fn test_halt_freezes_eased_position() {
        let mut m = Motion::new(Physics::default());
        let t0 = Instant::now();
        m.page_to(350.0, 1000.0, Duration::from_millis(800), t0);
        m.begin_drag(t0 + Duration::from_millis(800));
        assert_eq!(m.phase(), Phase::Dragging);
        assert_eq!(m.position(), 350.0);
        assert_eq!(m.paging_target(), None);
    }
}

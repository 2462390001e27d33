//! Pointer and touch gestures normalised into one drag protocol.
//!
//! A gesture starts on press (or touch start), follows moves, and ends on release,
//! leave or cancel. Only one gesture exists at a time; a new start replaces it.
//! After the gesture ends its total displacement is kept so the click that follows
//! the release can be checked against the click slop.

use std::time::Instant;

/// Where a gesture came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Mouse or other pointer.
    Pointer,
    /// Touch screen.
    Touch,
}

/// One active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Session {
    source: Source,
    origin_x: f64,
    start_x: f64,
    last_x: f64,
    last_time: Instant,
}

/// Result of feeding one move sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Scroll-space movement since the previous sample.
    pub delta: f64,
    /// Pointer velocity in pixels per nominal frame. Negative while moving left.
    pub velocity: f64,
}

/// Tracks the active gesture and the displacement of the last one.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    session: Option<Session>,
    displacement: f64,
    velocity: f64,
}

impl GestureTracker {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Source of the active gesture.
    pub fn source(&self) -> Option<Source> {
        self.session.map(|s| s.source)
    }

    /// Absolute pointer travel between the start of the latest gesture and its latest sample.
    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    /// Begins a gesture at `x` (pixels), replacing any active one.
    pub fn start(&mut self, source: Source, x: f64, now: Instant) {
        self.session = Some(Session {
            source,
            origin_x: x,
            start_x: x,
            last_x: x,
            last_time: now,
        });
        self.displacement = 0.0;
        self.velocity = 0.0;
    }

    /// Feeds a move sample. Returns `None` when no gesture is active.
    ///
    /// Velocity follows the pointer (`x - last_x`) and comes from this sample and the
    /// previous one only, scaled to `frame_ms`. Samples with no elapsed time keep the
    /// previous velocity.
    pub fn sample(&mut self, x: f64, now: Instant, frame_ms: f64) -> Option<DragSample> {
        let s = self.session.as_mut()?;

        let dt_ms = now.saturating_duration_since(s.last_time).as_secs_f64() * 1000.0;
        if dt_ms > 0.0 {
            self.velocity = (x - s.last_x) / dt_ms * frame_ms;
        }
        let delta = s.start_x - x;

        s.start_x = x;
        s.last_x = x;
        s.last_time = now;
        self.displacement = (x - s.origin_x).abs();

        Some(DragSample {
            delta,
            velocity: self.velocity,
        })
    }

    /// Ends the active gesture. Returns `false` if none was active.
    pub fn end(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Whether a click arriving now should be honoured.
    pub fn allows_click(&self, slop: f64) -> bool {
        self.displacement <= slop
    }
}

//! Tunable carousel parameters and the options used to build them.
//!
//! Both marketplace carousels share one engine; they differ only in how far a
//! button or key press pages. [`PRIMARY`] and [`COMPACT`] are the two presets.

use crate::error::{CarouselError, Result};
use once_cell::sync::Lazy;
use std::time::Duration;

/// Which of the two paging presets a carousel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Wide cards, 350 px per page. Used for courses.
    #[default]
    Primary,
    /// Narrow cards, 200 px per page. Used for instructors.
    Compact,
}

impl Variant {
    /// Default paging distance for the variant, in pixels.
    pub fn page_step(self) -> f64 {
        match self {
            Variant::Primary => 350.0,
            Variant::Compact => 200.0,
        }
    }
}

/// Constants driving drag, momentum and bounce.
///
/// Velocities are measured in pixels per `frame_ms` so the per-step factors below behave
/// the same whatever the actual input sampling rate is.
#[derive(Debug, Clone, PartialEq)]
pub struct Physics {
    /// Velocity multiplier applied on every settling step.
    pub friction: f64,
    /// Speed at or below which momentum stops.
    pub min_velocity: f64,
    /// Fraction of the overshoot kept on each bounce step.
    pub rebound: f64,
    /// Velocity multiplier applied while out of bounds.
    pub bounce_damping: f64,
    /// Overshoot below which the position snaps onto the edge.
    pub snap_distance: f64,
    /// Share of out-of-bounds drag movement that is applied.
    pub overscroll_resistance: f64,
    /// Nominal frame interval, in milliseconds, velocity samples are scaled to.
    pub frame_ms: f64,
    /// Distance from an edge within which that paging direction is disabled.
    pub edge_epsilon: f64,
    /// Largest pointer travel, in pixels, that still counts as a click.
    pub click_slop: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            friction: 0.94,
            min_velocity: 0.1,
            rebound: 0.7,
            bounce_damping: 0.5,
            snap_distance: 1.0,
            overscroll_resistance: 0.3,
            frame_ms: 16.0,
            edge_epsilon: 10.0,
            click_slop: 5.0,
        }
    }
}

impl Physics {
    fn validate(&self) -> Result<()> {
        unit_interval("friction", self.friction, false)?;
        unit_interval("rebound", self.rebound, false)?;
        unit_interval("bounce_damping", self.bounce_damping, true)?;
        unit_interval("overscroll_resistance", self.overscroll_resistance, true)?;
        positive("min_velocity", self.min_velocity)?;
        positive("snap_distance", self.snap_distance)?;
        positive("frame_ms", self.frame_ms)?;
        non_negative("edge_epsilon", self.edge_epsilon)?;
        non_negative("click_slop", self.click_slop)
    }
}

fn unit_interval(name: &'static str, value: f64, inclusive: bool) -> Result<()> {
    let ok = value > 0.0 && if inclusive { value <= 1.0 } else { value < 1.0 };
    if ok {
        Ok(())
    } else {
        Err(CarouselError::InvalidPhysics {
            name,
            range: if inclusive { "(0, 1]" } else { "(0, 1)" },
            value,
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CarouselError::InvalidPhysics {
            name,
            range: "(0, inf)",
            value,
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CarouselError::InvalidPhysics {
            name,
            range: "[0, inf)",
            value,
        })
    }
}

/// Full carousel configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Paging preset this configuration was derived from.
    pub variant: Variant,
    /// Distance moved by one button or key page, in pixels.
    pub page_step: f64,
    /// Pixel width of one terminal column.
    pub cell_px: f64,
    /// Blank columns between cards.
    pub gap: usize,
    /// Duration of the eased paging transition.
    pub ease_duration: Duration,
    /// Drag and momentum constants.
    pub physics: Physics,
}

impl Config {
    /// Configuration for the given preset.
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            page_step: variant.page_step(),
            cell_px: 8.0,
            gap: 2,
            ease_duration: Duration::from_millis(800),
            physics: Physics::default(),
        }
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !(self.page_step.is_finite() && self.page_step > 0.0) {
            return Err(CarouselError::InvalidPageStep(self.page_step));
        }
        if !(self.cell_px.is_finite() && self.cell_px > 0.0) {
            return Err(CarouselError::InvalidCellWidth(self.cell_px));
        }
        if self.ease_duration.is_zero() {
            return Err(CarouselError::ZeroEaseDuration);
        }
        self.physics.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        PRIMARY.clone()
    }
}

/// Course carousel preset.
pub static PRIMARY: Lazy<Config> = Lazy::new(|| Config::for_variant(Variant::Primary));

/// Instructor carousel preset.
pub static COMPACT: Lazy<Config> = Lazy::new(|| Config::for_variant(Variant::Compact));

/// Option applied on top of a preset by [`new_with_options`](super::new_with_options).
#[derive(Debug, Clone)]
pub enum CarouselOption {
    /// Switch preset; resets the page step to the preset's value.
    WithVariant(Variant),
    /// Override the page step.
    WithPageStep(f64),
    /// Override the pixel width of a terminal column.
    WithCellPx(f64),
    /// Override the gap between cards.
    WithGap(usize),
    /// Override the paging transition duration.
    WithEaseDuration(Duration),
    /// Replace the physics constants.
    WithPhysics(Physics),
}

impl CarouselOption {
    pub(crate) fn apply(&self, c: &mut Config) {
        match self {
            CarouselOption::WithVariant(v) => {
                c.variant = *v;
                c.page_step = v.page_step();
            }
            CarouselOption::WithPageStep(step) => c.page_step = *step,
            CarouselOption::WithCellPx(px) => c.cell_px = *px,
            CarouselOption::WithGap(gap) => c.gap = *gap,
            CarouselOption::WithEaseDuration(d) => c.ease_duration = *d,
            CarouselOption::WithPhysics(p) => c.physics = p.clone(),
        }
    }
}

/// Selects a paging preset.
pub fn with_variant(variant: Variant) -> CarouselOption {
    CarouselOption::WithVariant(variant)
}

/// Sets the paging distance in pixels.
pub fn with_page_step(step: f64) -> CarouselOption {
    CarouselOption::WithPageStep(step)
}

/// Sets how many pixels one terminal column represents.
pub fn with_cell_px(px: f64) -> CarouselOption {
    CarouselOption::WithCellPx(px)
}

/// Sets the number of blank columns between cards.
pub fn with_gap(gap: usize) -> CarouselOption {
    CarouselOption::WithGap(gap)
}

/// Sets the paging transition duration.
pub fn with_ease_duration(duration: Duration) -> CarouselOption {
    CarouselOption::WithEaseDuration(duration)
}

/// Replaces the drag and momentum constants.
pub fn with_physics(physics: Physics) -> CarouselOption {
    CarouselOption::WithPhysics(physics)
}

/// Builds a configuration from a preset plus options and validates it.
pub fn build(opts: &[CarouselOption]) -> Result<Config> {
    let mut config = Config::default();
    for opt in opts {
        opt.apply(&mut config);
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(PRIMARY.page_step, 350.0);
        assert_eq!(COMPACT.page_step, 200.0);
        assert_eq!(COMPACT.variant, Variant::Compact);
        assert_eq!(PRIMARY.ease_duration, Duration::from_millis(800));
        assert!(PRIMARY.validate().is_ok());
        assert!(COMPACT.validate().is_ok());
    }

    #[test]
    fn test_options_apply_in_order() {
        let c = build(&[with_page_step(120.0), with_variant(Variant::Compact)]).unwrap();
        assert_eq!(c.page_step, 200.0);

        let c = build(&[with_variant(Variant::Compact), with_page_step(120.0)]).unwrap();
        assert_eq!(c.page_step, 120.0);
        assert_eq!(c.variant, Variant::Compact);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            build(&[with_page_step(0.0)]),
            Err(CarouselError::InvalidPageStep(0.0))
        );
        assert!(matches!(
            build(&[with_cell_px(f64::NAN)]),
            Err(CarouselError::InvalidCellWidth(_))
        ));
        assert_eq!(
            build(&[with_ease_duration(Duration::ZERO)]),
            Err(CarouselError::ZeroEaseDuration)
        );

        let physics = Physics {
            friction: 1.0,
            ..Physics::default()
        };
        let err = build(&[with_physics(physics)]).unwrap_err();
        assert!(err.to_string().contains("friction"));
    }
}

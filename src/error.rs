//! Errors reported when assembling a carousel configuration.

use thiserror::Error;

/// Result alias for fallible carousel construction.
pub type Result<T> = std::result::Result<T, CarouselError>;

/// Configuration rejected by [`Config::validate`](crate::carousel::Config::validate).
///
/// The carousel has no runtime failure modes: out-of-range positions are corrected by the
/// physics, not reported. Only a nonsensical configuration is an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    /// The paging step was zero, negative, or not finite.
    #[error("page step must be a positive, finite distance in pixels (got {0})")]
    InvalidPageStep(f64),

    /// The pixel width of a terminal cell was zero, negative, or not finite.
    #[error("cell width must be a positive, finite number of pixels (got {0})")]
    InvalidCellWidth(f64),

    /// The eased paging transition had a zero duration.
    #[error("paging transition duration must be non-zero")]
    ZeroEaseDuration,

    /// A physics factor fell outside its allowed range.
    #[error("physics parameter `{name}` must be in {range} (got {value})")]
    InvalidPhysics {
        /// Parameter name.
        name: &'static str,
        /// Human-readable allowed range.
        range: &'static str,
        /// Offending value.
        value: f64,
    },
}

#![warn(missing_docs)]

//! # bubbletea-carousel
//!
//! A drag-and-momentum card carousel for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, with ready-made course and instructor cards for storefront screens.
//!
//! ## Overview
//!
//! The carousel follows the Elm Architecture used by bubbletea-rs: construct a
//! [`carousel::Model`], forward messages to its `update()` and print its `view()`.
//! It handles
//!
//! - mouse and touch dragging with rubber-band overscroll,
//! - momentum after release, with elastic bounce at both ends,
//! - eased paging from the header buttons or the arrow keys,
//! - telling a click on a card apart from a drag.
//!
//! ```rust
//! use bubbletea_carousel::prelude::*;
//!
//! let mut faculty = instructors(
//!     "Meet the instructors",
//!     vec![
//!         Instructor::new("i1", "Ada", "Systems programming", 4),
//!         Instructor::new("i2", "Grace", "Compilers", 7),
//!     ],
//! );
//! faculty.set_width(40);
//! assert_eq!(faculty.config().page_step, 200.0);
//! ```
//!
//! ## Focus
//!
//! Keyboard paging only reacts while the carousel is focused, through the
//! [`Component`] trait:
//!
//! ```rust
//! use bubbletea_carousel::prelude::*;
//!
//! let mut row = courses("Trending", Vec::new());
//! row.focus();
//! assert!(row.focused());
//! row.blur();
//! assert!(!row.focused());
//! ```
//!
//! ## Logging
//!
//! Measurement, paging and release decisions are logged at `debug` level and every
//! animation frame at `trace` level through the [`log`](https://docs.rs/log) facade.
//! Install any logger in the host application to see them.

pub mod carousel;
pub mod error;
pub mod key;

use bubbletea_rs::Cmd;

pub use error::{CarouselError, Result};

/// Keyboard focus management shared by interactive components.
///
/// A focused component receives key input and may render an active state;
/// a blurred one ignores keys.
pub trait Component {
    /// Gives the component focus. May return a command to run on focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes focus away from the component.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

/// Common imports.
///
/// ```rust
/// use bubbletea_carousel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::carousel::{
        courses, instructors, CardDelegate, CarouselKeyMap, Config, Course, CourseDelegate,
        Instructor, InstructorDelegate, Item, ItemClickMsg, Model as Carousel, Phase, Styles,
        TouchMsg, TouchPhase, Variant,
    };
    pub use crate::error::CarouselError;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::Component;
}

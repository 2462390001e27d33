//! Horizontally scrolling card carousel with drag, momentum and paging.
//!
//! The carousel shows a title, two paging buttons and a strip of cards wider than the
//! screen. Users move it by:
//!
//! - **dragging** with the mouse (or a finger, via [`TouchMsg`]). Past either end the
//!   strip stretches at 30% and springs back on release.
//! - **throwing**: releasing mid-drag keeps the strip coasting with friction, bouncing
//!   off the edges until it comes to rest inside the valid range.
//! - **paging** with the `‹`/`›` buttons or the arrow keys, which ease to a target
//!   one page step away (350 px for courses, 200 px for instructors).
//!
//! Clicking a card without dragging sends an [`ItemClickMsg`]. A press that moved more
//! than 5 px is a drag, and the click is swallowed.
//!
//! Only one thing drives the strip at a time and the newest input wins: a drag stops
//! momentum and paging, and a page request ends a drag in progress. A mouse drag that
//! leaves the carousel ends as if released.
//!
//! # Quick start
//!
//! ```rust
//! use bubbletea_carousel::carousel::{self, Course};
//!
//! let mut row = carousel::courses(
//!     "Popular courses",
//!     vec![
//!         Course::new("c1", "Rust for Beginners", "Ferris", 1999),
//!         Course::new("c2", "Async in Depth", "Tokio Team", 4999).with_discount(20),
//!     ],
//! );
//! row.set_width(60);
//! assert!(row.view().contains("Popular courses"));
//! assert!(!row.can_scroll_left());
//! ```
//!
//! # bubbletea-rs integration
//!
//! ```rust
//! use bubbletea_carousel::carousel::{self, Course, ItemClickMsg};
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct Storefront {
//!     courses: carousel::Model<Course>,
//!     opened: Option<String>,
//! }
//!
//! impl BubbleTeaModel for Storefront {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let courses = carousel::courses("New this week", Vec::new()).with_origin(0, 2);
//!         (Self { courses, opened: None }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(click) = msg.downcast_ref::<ItemClickMsg>() {
//!             self.opened = Some(click.item_id.clone());
//!             return None;
//!         }
//!         self.courses.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.courses.view()
//!     }
//! }
//! ```
//!
//! # Animation ticks
//!
//! Momentum and paging run on [`FrameMsg`] ticks at 60 fps. Every new drag, page or
//! [`Model::unmount`] invalidates the ticks already scheduled, so only one animation
//! ever drives a carousel.

pub mod cards;
pub mod config;
pub mod extent;
pub mod gesture;
pub mod keys;
mod model;
pub mod physics;
mod rendering;
pub mod style;
pub mod types;


pub use cards::{format_price, Course, CourseDelegate, Instructor, InstructorDelegate};
pub use config::{
    with_cell_px, with_ease_duration, with_gap, with_page_step, with_physics, with_variant,
    CarouselOption, Config, Physics, Variant, COMPACT, PRIMARY,
};
pub use extent::{Affordance, Extent};
pub use gesture::Source;
pub use keys::CarouselKeyMap;
pub use model::Model;
pub use physics::Phase;
pub use style::Styles;
pub use types::{CardDelegate, FrameMsg, Item, ItemClickMsg, TouchMsg, TouchPhase};

/// Creates a primary (350 px paging) carousel with the given delegate.
pub fn new<I: Item>(
    title: impl Into<String>,
    items: Vec<I>,
    delegate: impl CardDelegate<I> + Send + Sync + 'static,
) -> Model<I> {
    Model::new(title, items, delegate)
}

/// Creates a carousel from the primary preset with `opts` applied.
pub fn new_with_options<I: Item>(
    title: impl Into<String>,
    items: Vec<I>,
    delegate: impl CardDelegate<I> + Send + Sync + 'static,
    opts: &[CarouselOption],
) -> crate::Result<Model<I>> {
    Model::new_with_options(title, items, delegate, opts)
}

/// The course carousel: primary preset, [`CourseDelegate`] cards.
pub fn courses(title: impl Into<String>, items: Vec<Course>) -> Model<Course> {
    Model::new(title, items, CourseDelegate::default())
}

/// The instructor carousel: compact preset, [`InstructorDelegate`] cards.
pub fn instructors(title: impl Into<String>, items: Vec<Instructor>) -> Model<Instructor> {
    Model::new_compact(title, items, InstructorDelegate::default())
}

//! The carousel component: state, input handling and the frame loop.

use super::config::{self, CarouselOption, Config, COMPACT, PRIMARY};
use super::extent::{Affordance, Extent};
use super::gesture::{GestureTracker, Source};
use super::keys::CarouselKeyMap;
use super::physics::{Motion, Phase};
use super::style::Styles;
use super::types::{CardDelegate, FrameMsg, Item, ItemClickMsg, TouchMsg, TouchPhase};
use crate::error::Result;
use crate::Component;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, MouseMsg, Msg, WindowSizeMsg};
use crossterm::event::{MouseButton, MouseEventKind};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};

const FPS: u64 = 60;

/// Columns taken by the paging buttons at the right of the header: `[‹] [›]`.
pub(crate) const BUTTONS_WIDTH: usize = 7;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Header button under a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Button {
    Left,
    Right,
}

/// A horizontally scrolling strip of cards with drag, momentum and paging.
pub struct Model<I: Item> {
    id: i64,
    tag: i64,

    /// Header text.
    pub title: String,
    /// Styles for header, track and default cards.
    pub styles: Styles,
    /// Paging keys.
    pub keymap: CarouselKeyMap,
    /// Follow the terminal width from `WindowSizeMsg`.
    pub auto_width: bool,

    items: Vec<I>,
    pub(crate) cards: Vec<String>,
    delegate: Box<dyn CardDelegate<I> + Send + Sync>,
    pub(crate) config: Config,

    pub(crate) extent: Extent,
    pub(crate) motion: Motion,
    gestures: GestureTracker,
    affordance: Affordance,

    pub(crate) width: usize,
    origin: (u16, u16),
    focused: bool,
    mounted: bool,
}

impl<I: Item> Model<I> {
    /// Creates a course-style carousel (350 px paging).
    ///
    /// The carousel measures itself once it knows its width, either from
    /// [`set_width`](Self::set_width) or the first `WindowSizeMsg`.
    pub fn new(
        title: impl Into<String>,
        items: Vec<I>,
        delegate: impl CardDelegate<I> + Send + Sync + 'static,
    ) -> Self {
        Self::from_config(title, items, delegate, PRIMARY.clone())
    }

    /// Creates a carousel from the primary preset with `opts` applied.
    pub fn new_with_options(
        title: impl Into<String>,
        items: Vec<I>,
        delegate: impl CardDelegate<I> + Send + Sync + 'static,
        opts: &[CarouselOption],
    ) -> Result<Self> {
        let config = config::build(opts)?;
        Ok(Self::from_config(title, items, delegate, config))
    }

    /// Creates an instructor-style carousel (200 px paging).
    pub fn new_compact(
        title: impl Into<String>,
        items: Vec<I>,
        delegate: impl CardDelegate<I> + Send + Sync + 'static,
    ) -> Self {
        Self::from_config(title, items, delegate, COMPACT.clone())
    }

    fn from_config(
        title: impl Into<String>,
        items: Vec<I>,
        delegate: impl CardDelegate<I> + Send + Sync + 'static,
        config: Config,
    ) -> Self {
        let mut m = Self {
            id: next_id(),
            tag: 0,
            title: title.into(),
            styles: Styles::default(),
            keymap: CarouselKeyMap::default(),
            auto_width: true,
            items,
            cards: Vec::new(),
            delegate: Box::new(delegate),
            motion: Motion::new(config.physics.clone()),
            config,
            extent: Extent::default(),
            gestures: GestureTracker::new(),
            affordance: Affordance::default(),
            width: 0,
            origin: (0, 0),
            focused: false,
            mounted: true,
        };
        m.render_cards();
        m
    }

    /// Replaces the configuration after validating it.
    pub fn with_config(mut self, config: Config) -> Result<Self> {
        config.validate()?;
        self.motion = Motion::new(config.physics.clone());
        self.config = config;
        self.remeasure();
        Ok(self)
    }

    /// Sets the viewport width in columns (builder form).
    pub fn with_width(mut self, width: usize) -> Self {
        self.auto_width = false;
        self.set_width(width);
        self
    }

    /// Sets the screen position of the top-left corner (builder form).
    pub fn with_origin(mut self, x: u16, y: u16) -> Self {
        self.origin = (x, y);
        self
    }

    /// Replaces the styles (builder form).
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.set_styles(styles);
        self
    }

    /// Unique id, carried in frame ticks and click messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Items in display order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Replaces the items and re-measures the strip.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
        self.render_cards();
    }

    /// Replaces the styles. Cards are re-rendered since their size may change.
    pub fn set_styles(&mut self, styles: Styles) {
        self.styles = styles;
        self.render_cards();
    }

    /// Viewport width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sets the viewport width in columns and re-measures.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.remeasure();
    }

    /// Sets the screen position of the top-left corner, used to map mouse coordinates.
    pub fn set_origin(&mut self, x: u16, y: u16) {
        self.origin = (x, y);
    }

    /// Current scroll position in pixels.
    pub fn scroll_pos(&self) -> f64 {
        self.motion.position()
    }

    /// Current velocity in pixels per nominal frame.
    pub fn velocity(&self) -> f64 {
        self.motion.velocity()
    }

    /// Largest valid scroll position.
    pub fn max_scroll(&self) -> f64 {
        self.extent.max_scroll()
    }

    /// Current driver of the scroll position.
    pub fn phase(&self) -> Phase {
        self.motion.phase()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    /// Whether frame ticks are running.
    pub fn is_animating(&self) -> bool {
        self.motion.is_animating()
    }

    /// Whether the view is still live. See [`unmount`](Self::unmount).
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Left paging is possible.
    pub fn can_scroll_left(&self) -> bool {
        self.affordance.can_scroll_left
    }

    /// Right paging is possible.
    pub fn can_scroll_right(&self) -> bool {
        self.affordance.can_scroll_right
    }

    /// Both paging affordances.
    pub fn affordance(&self) -> Affordance {
        self.affordance
    }

    /// A frame tick for the current animation, as the scheduled ones carry.
    pub fn frame_msg(&self) -> FrameMsg {
        FrameMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    fn render_cards(&mut self) {
        self.cards = self
            .items
            .iter()
            .map(|item| self.delegate.render(item, &self.styles))
            .collect();
        self.remeasure();
    }

    fn remeasure(&mut self) {
        match Extent::measure(&self.cards, self.config.gap, self.width, self.config.cell_px) {
            Some(extent) => {
                log::debug!(
                    "carousel {} measured: content={} viewport={} max_scroll={}",
                    self.id,
                    extent.content_width(),
                    extent.viewport_width(),
                    extent.max_scroll()
                );
                self.extent = extent;
                self.motion.clamp_at_rest(self.extent.max_scroll());
            }
            None => log::debug!("carousel {} not laid out yet, measurement skipped", self.id),
        }
        self.sync_affordance();
    }

    fn sync_affordance(&mut self) {
        self.affordance = Affordance::compute(
            self.motion.position(),
            self.extent.max_scroll(),
            self.config.physics.edge_epsilon,
        );
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let duration = Duration::from_nanos(1_000_000_000 / FPS);

        bubbletea_tick(duration, move |_| Box::new(FrameMsg { id, tag }) as Msg)
    }

    /// Invalidates every outstanding frame tick.
    fn cancel_animation(&mut self) {
        self.tag += 1;
    }

    fn start_animation(&mut self) -> Cmd {
        self.tag += 1;
        self.next_frame()
    }

    /// Pages one step toward the start.
    pub fn page_left(&mut self) -> Option<Cmd> {
        self.page_left_at(Instant::now())
    }

    /// Pages one step toward the end.
    pub fn page_right(&mut self) -> Option<Cmd> {
        self.page_right_at(Instant::now())
    }

    pub(crate) fn page_left_at(&mut self, now: Instant) -> Option<Cmd> {
        self.page_by(-self.config.page_step, now)
    }

    pub(crate) fn page_right_at(&mut self, now: Instant) -> Option<Cmd> {
        self.page_by(self.config.page_step, now)
    }

    fn page_by(&mut self, step: f64, now: Instant) -> Option<Cmd> {
        if self.items.is_empty() {
            return None;
        }
        // The newest request wins: paging ends an active drag without momentum.
        if self.gestures.end() {
            self.motion.abandon_drag();
            log::debug!("carousel {} drag ended by page request", self.id);
        }
        // A page request made during a page transition continues from its target.
        let base = self
            .motion
            .paging_target()
            .unwrap_or_else(|| self.motion.position());
        let target = base + step;

        self.cancel_animation();
        let max = self.extent.max_scroll();
        let moving = self
            .motion
            .page_to(target, max, self.config.ease_duration, now);
        self.sync_affordance();
        log::debug!(
            "carousel {} paging to {:.1} (max {:.1})",
            self.id,
            target.clamp(0.0, max),
            max
        );
        moving.then(|| self.start_animation())
    }

    /// Starts a pointer drag at `x` pixels from the left edge of the carousel.
    pub fn drag_start(&mut self, x: f64) {
        self.gesture_start(Source::Pointer, x, Instant::now());
    }

    /// Feeds a drag sample. Ignored when no drag is in progress.
    pub fn drag_move(&mut self, x: f64) {
        self.gesture_move(x, Instant::now());
    }

    /// Ends the drag, returning the momentum command if the strip keeps moving.
    pub fn drag_end(&mut self) -> Option<Cmd> {
        self.gesture_end()
    }

    /// Ends the drag because the pointer left the carousel.
    ///
    /// Mouse drags that wander off the header and track end this way on their own.
    pub fn pointer_leave(&mut self) -> Option<Cmd> {
        self.gesture_end()
    }

    pub(crate) fn gesture_start(&mut self, source: Source, x: f64, now: Instant) {
        if self.items.is_empty() {
            return;
        }
        self.cancel_animation();
        self.motion.begin_drag(now);
        self.gestures.start(source, x, now);
        self.sync_affordance();
    }

    pub(crate) fn gesture_move(&mut self, x: f64, now: Instant) {
        let frame_ms = self.config.physics.frame_ms;
        if let Some(sample) = self.gestures.sample(x, now, frame_ms) {
            self.motion
                .drag_by(sample.delta, sample.velocity, self.extent.max_scroll());
            self.sync_affordance();
        }
    }

    pub(crate) fn gesture_end(&mut self) -> Option<Cmd> {
        if !self.gestures.end() {
            return None;
        }
        let settling = self.motion.release(self.extent.max_scroll());
        self.sync_affordance();
        log::debug!(
            "carousel {} released at {:.1} with velocity {:.2}, settling={}",
            self.id,
            self.motion.position(),
            self.motion.velocity(),
            settling
        );
        settling.then(|| self.start_animation())
    }

    /// Id of the item at `index` if a click on it should go through.
    ///
    /// Clicks that end a gesture which travelled further than the click slop are
    /// swallowed so a drag never opens a card.
    pub fn resolve_click(&self, index: usize) -> Option<String> {
        if !self.gestures.allows_click(self.config.physics.click_slop) {
            log::debug!(
                "carousel {} click suppressed after {:.1}px drag",
                self.id,
                self.gestures.displacement()
            );
            return None;
        }
        self.items.get(index).map(Item::id)
    }

    /// Clicks the item at `index`, producing an [`ItemClickMsg`] unless suppressed.
    pub fn click_item(&mut self, index: usize) -> Option<Cmd> {
        let item_id = self.resolve_click(index)?;
        let msg = ItemClickMsg {
            carousel_id: self.id,
            item_id,
        };
        let cmd: Cmd = Box::pin(async move { Some(Box::new(msg) as Msg) });
        Some(cmd)
    }

    /// Cancels any running animation and stops reacting to input and ticks.
    pub fn unmount(&mut self) {
        self.cancel_animation();
        self.gestures.end();
        self.motion.halt(Instant::now());
        self.mounted = false;
        log::debug!("carousel {} unmounted", self.id);
    }

    /// Advances the current animation by one frame.
    pub(crate) fn frame_at(&mut self, msg: &FrameMsg, now: Instant) -> Option<Cmd> {
        if msg.id != self.id || msg.tag != self.tag || !self.mounted {
            log::trace!(
                "carousel {} dropped stale frame (id {}, tag {} vs {})",
                self.id,
                msg.id,
                msg.tag,
                self.tag
            );
            return None;
        }

        let more = self.motion.step(self.extent.max_scroll(), now);
        self.sync_affordance();
        log::trace!(
            "carousel {} frame: pos={:.2} v={:.3} phase={:?}",
            self.id,
            self.motion.position(),
            self.motion.velocity(),
            self.motion.phase()
        );
        more.then(|| self.next_frame())
    }

    /// Column offset of a screen column within the carousel, if inside it.
    fn local_col(&self, x: u16) -> Option<usize> {
        let col = x.checked_sub(self.origin.0)? as usize;
        (col < self.width).then_some(col)
    }

    fn local_row(&self, y: u16) -> Option<usize> {
        y.checked_sub(self.origin.1).map(usize::from)
    }

    fn col_to_px(&self, col: u16) -> f64 {
        (f64::from(col) - f64::from(self.origin.0)) * self.config.cell_px
    }

    /// Whether a screen cell lies on the header or the track.
    fn contains(&self, x: u16, y: u16) -> bool {
        self.local_col(x).is_some()
            && self
                .local_row(y)
                .is_some_and(|row| row <= self.track_height())
    }

    fn track_height(&self) -> usize {
        self.cards
            .iter()
            .map(|c| c.lines().count())
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn button_at(&self, col: usize) -> Option<Button> {
        let w = self.width;
        if w < BUTTONS_WIDTH {
            return None;
        }
        let start = w - BUTTONS_WIDTH;
        match col.checked_sub(start)? {
            0..=2 => Some(Button::Left),
            4..=6 => Some(Button::Right),
            _ => None,
        }
    }

    /// Index of the card under local column `col`, given the current scroll position.
    pub(crate) fn card_at(&self, col: usize) -> Option<usize> {
        let content_px = self.motion.position() + col as f64 * self.config.cell_px;
        if content_px < 0.0 {
            return None;
        }
        self.extent
            .card_at((content_px / self.config.cell_px).floor() as usize)
    }

    fn press(&mut self, source: Source, x: u16, y: u16, now: Instant) -> Option<Cmd> {
        let col = self.local_col(x)?;
        let row = self.local_row(y)?;
        if row == 0 {
            return match self.button_at(col)? {
                Button::Left if self.affordance.can_scroll_left => self.page_left_at(now),
                Button::Right if self.affordance.can_scroll_right => self.page_right_at(now),
                _ => None,
            };
        }
        if row <= self.track_height() {
            self.gesture_start(source, self.col_to_px(x), now);
        }
        None
    }

    fn release(&mut self, x: u16, y: u16, now: Instant) -> Option<Cmd> {
        if !self.gestures.is_dragging() {
            return None;
        }
        // The release point counts toward the gesture's travel.
        self.gesture_move(self.col_to_px(x), now);

        let on_card = match (self.local_col(x), self.local_row(y)) {
            (Some(col), Some(row)) if row >= 1 && row <= self.track_height() => self.card_at(col),
            _ => None,
        };

        match on_card {
            Some(index) if self.gestures.allows_click(self.config.physics.click_slop) => {
                // A click settles the strip where it is instead of coasting.
                self.gestures.end();
                self.motion.release(self.extent.max_scroll());
                self.motion.halt(now);
                self.motion.clamp_at_rest(self.extent.max_scroll());
                self.cancel_animation();
                self.sync_affordance();
                self.click_item(index)
            }
            _ => self.gesture_end(),
        }
    }

    fn handle_mouse(&mut self, msg: &MouseMsg, now: Instant) -> Option<Cmd> {
        match msg.button {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press(Source::Pointer, msg.x, msg.y, now)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.gestures.source() != Some(Source::Pointer) {
                    return None;
                }
                if !self.contains(msg.x, msg.y) {
                    return self.pointer_leave();
                }
                self.gesture_move(self.col_to_px(msg.x), now);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.gestures.source() == Some(Source::Pointer) {
                    self.release(msg.x, msg.y, now)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn handle_touch(&mut self, msg: &TouchMsg, now: Instant) -> Option<Cmd> {
        match msg.phase {
            TouchPhase::Start => self.press(Source::Touch, msg.x, msg.y, now),
            TouchPhase::Move => {
                if self.gestures.source() == Some(Source::Touch) {
                    self.gesture_move(self.col_to_px(msg.x), now);
                }
                None
            }
            TouchPhase::End => {
                if self.gestures.source() == Some(Source::Touch) {
                    self.release(msg.x, msg.y, now)
                } else {
                    None
                }
            }
            TouchPhase::Cancel => {
                if self.gestures.source() == Some(Source::Touch) {
                    self.gesture_end()
                } else {
                    None
                }
            }
        }
    }

    /// Processes frame ticks, size changes, keys, mouse and touch input.
    ///
    /// Forward every message; the carousel ignores what is not addressed to it.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let now = Instant::now();

        if let Some(frame) = msg.downcast_ref::<FrameMsg>() {
            return self.frame_at(frame, now);
        }
        if !self.mounted {
            return None;
        }

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            if self.auto_width {
                self.set_width((size.width as usize).saturating_sub(self.origin.0 as usize));
            }
            return None;
        }

        if self.items.is_empty() {
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if !self.focused {
                return None;
            }
            if self.keymap.page_left.matches(key) {
                return self.page_left_at(now);
            }
            if self.keymap.page_right.matches(key) {
                return self.page_right_at(now);
            }
            return None;
        }

        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            return self.handle_mouse(mouse, now);
        }

        if let Some(touch) = msg.downcast_ref::<TouchMsg>() {
            return self.handle_touch(touch, now);
        }

        None
    }
}

impl<I: Item> Component for Model<I> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        None
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

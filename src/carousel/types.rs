//! Item and delegate traits plus the messages a carousel sends and receives.

use super::style::Styles;

/// Something a carousel can show as a card.
pub trait Item: Clone {
    /// Stable identifier reported back in [`ItemClickMsg`].
    fn id(&self) -> String;
}

/// Renders one card. Card size is measured from the output.
///
/// Cards may contain styling; the carousel lays them out on their plain text and
/// applies its own track style to the visible window.
pub trait CardDelegate<I: Item> {
    /// Renders `item` as a (usually multi-line) block.
    fn render(&self, item: &I, styles: &Styles) -> String;
}

/// Frame tick driving momentum and eased paging.
///
/// Carries the id of the carousel it belongs to and the animation tag it was
/// scheduled under. A tick whose tag is stale belongs to a cancelled animation
/// and is dropped.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    pub(crate) id: i64,
    pub(crate) tag: i64,
}

/// Sent when a card is clicked or tapped without dragging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemClickMsg {
    /// Id of the carousel the card belongs to.
    pub carousel_id: i64,
    /// Id of the clicked item.
    pub item_id: String,
}

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger down.
    Start,
    /// Finger moved.
    Move,
    /// Finger lifted.
    End,
    /// The system took the touch away.
    Cancel,
}

/// Touch input, delivered by hosts whose terminal or front end reports touches.
///
/// Coordinates are screen columns and rows, like mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchMsg {
    /// What happened.
    pub phase: TouchPhase,
    /// Screen column.
    pub x: u16,
    /// Screen row.
    pub y: u16,
}

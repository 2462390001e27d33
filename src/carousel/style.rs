//! Lipgloss styles for the carousel header, track and the default cards.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles used when rendering a carousel.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Header title.
    pub title: Style,
    /// A paging button that can be used.
    pub button: Style,
    /// A paging button with nothing left to page to.
    pub button_disabled: Style,
    /// The visible part of the strip at rest.
    pub track: Style,
    /// The visible part of the strip while a drag is in progress.
    pub track_grabbing: Style,
    /// Frame drawn around default cards.
    pub card: Style,
    /// Card headline (course title, instructor name).
    pub card_title: Style,
    /// Secondary card text.
    pub card_detail: Style,
    /// Prices and ratings.
    pub card_accent: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            title: Style::new().bold(true).foreground(Color::from("#EE6FF8")),
            button: Style::new().foreground(Color::from("#dddddd")),
            button_disabled: Style::new().foreground(Color::from("#4D4D4D")),
            track: Style::new(),
            track_grabbing: Style::new().faint(true),
            card: Style::new()
                .border_style(lipgloss::normal_border())
                .border_top(true)
                .border_right(true)
                .border_bottom(true)
                .border_left(true)
                .border_foreground(Color::from("#874BFD"))
                .padding(0, 1, 0, 1),
            card_title: Style::new().bold(true),
            card_detail: Style::new().foreground(Color::from("#777777")),
            card_accent: Style::new().foreground(Color::from("#04B575")),
        }
    }
}

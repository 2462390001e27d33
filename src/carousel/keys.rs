//! Keyboard paging bindings.

use crate::key::{self, KeyMap};
use crossterm::event::KeyCode;

/// Keys that page the carousel while it is focused.
#[derive(Debug, Clone)]
pub struct CarouselKeyMap {
    /// Page toward the start.
    pub page_left: key::Binding,
    /// Page toward the end.
    pub page_right: key::Binding,
}

impl Default for CarouselKeyMap {
    fn default() -> Self {
        Self {
            page_left: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "previous"),
            page_right: key::Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "next"),
        }
    }
}

impl KeyMap for CarouselKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.page_left, &self.page_right]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.page_left, &self.page_right]]
    }
}

//! Measures how far the card strip can scroll.
//!
//! Card widths are taken from the rendered cards themselves (display width of the
//! widest line, escape sequences stripped), so callers never pass sizes in.

use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Strips ANSI escapes from rendered output.
pub(crate) fn plain(s: &str) -> String {
    strip_ansi_escapes::strip_str(s)
}

/// Display width of the widest line of `s`.
pub(crate) fn block_width(s: &str) -> usize {
    s.lines().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Layout of the strip and the scroll range it allows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extent {
    content_width: f64,
    viewport_width: f64,
    max_scroll: f64,
    spans: Vec<Range<usize>>,
}

impl Extent {
    /// Measures `cards` laid out left to right with `gap` columns between them,
    /// shown through a viewport `viewport_cells` columns wide.
    ///
    /// Returns `None` when the viewport has no width yet; the caller keeps its previous
    /// extent and measures again on the next item or size change.
    pub fn measure<S: AsRef<str>>(
        cards: &[S],
        gap: usize,
        viewport_cells: usize,
        cell_px: f64,
    ) -> Option<Self> {
        if viewport_cells == 0 {
            return None;
        }

        let mut spans = Vec::with_capacity(cards.len());
        let mut col = 0;
        for (i, card) in cards.iter().enumerate() {
            if i > 0 {
                col += gap;
            }
            let w = block_width(&plain(card.as_ref()));
            spans.push(col..col + w);
            col += w;
        }

        let content_width = col as f64 * cell_px;
        let viewport_width = viewport_cells as f64 * cell_px;
        Some(Self {
            content_width,
            viewport_width,
            max_scroll: (content_width - viewport_width).max(0.0),
            spans,
        })
    }

    /// Total strip width in pixels.
    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Visible width in pixels.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Largest valid scroll position. Never negative.
    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }

    /// Column span of each card within the strip.
    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    /// Index of the card covering strip column `col`, if any (gaps hit nothing).
    pub fn card_at(&self, col: usize) -> Option<usize> {
        self.spans.iter().position(|s| s.contains(&col))
    }
}

/// Which paging directions are currently available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Affordance {
    /// Content exists to the left.
    pub can_scroll_left: bool,
    /// Content exists to the right.
    pub can_scroll_right: bool,
}

impl Affordance {
    /// `left = pos > eps`, `right = pos < max - eps`.
    pub fn compute(pos: f64, max: f64, epsilon: f64) -> Self {
        Self {
            can_scroll_left: pos > epsilon,
            can_scroll_right: pos < max - epsilon,
        }
    }
}

//! View rendering: header with paging buttons and the visible window of the strip.

use super::cards::truncate;
use super::extent::plain;
use super::model::{Model, BUTTONS_WIDTH};
use super::types::Item;
use unicode_width::UnicodeWidthChar;

/// Cuts `line` to the columns `[offset, offset + width)`, padding with spaces.
///
/// A negative offset shifts the content right. Wide characters straddling
/// either edge are replaced by spaces so the result is exactly `width` columns.
pub(crate) fn window(line: &str, offset: i64, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0usize;

    if offset < 0 {
        let lead = (offset.unsigned_abs() as usize).min(width);
        out.push_str(&" ".repeat(lead));
        used = lead;
    }
    let start = offset.max(0) as usize;

    let mut col = 0usize;
    for ch in line.chars() {
        if used >= width {
            break;
        }
        let w = ch.width().unwrap_or(0);
        let end = col + w;
        if end <= start {
            col = end;
            continue;
        }
        if col < start || used + w > width {
            // straddles an edge
            let visible = (end.min(start + width) - col.max(start)).min(width - used);
            out.push_str(&" ".repeat(visible));
            used += visible;
        } else {
            out.push(ch);
            used += w;
        }
        col = end;
    }

    out.push_str(&" ".repeat(width - used));
    out
}

impl<I: Item> Model<I> {
    fn header_view(&self) -> String {
        let w = self.width;
        if w < BUTTONS_WIDTH {
            return self.styles.title.render(&truncate(&self.title, w));
        }

        let title_width = w - BUTTONS_WIDTH;
        let title = truncate(&self.title, title_width.saturating_sub(1));
        let title_cols: usize = title.chars().map(|c| c.width().unwrap_or(0)).sum();
        let spacer = " ".repeat(title_width - title_cols);

        let button = |label: &str, enabled: bool| {
            if enabled {
                self.styles.button.render(label)
            } else {
                self.styles.button_disabled.render(label)
            }
        };

        format!(
            "{}{}{} {}",
            self.styles.title.render(&title),
            spacer,
            button("[‹]", self.can_scroll_left()),
            button("[›]", self.can_scroll_right()),
        )
    }

    /// The full strip, one string per row, without styling.
    fn strip_rows(&self) -> Vec<String> {
        let cards: Vec<Vec<String>> = self
            .cards
            .iter()
            .map(|c| plain(c).lines().map(str::to_string).collect())
            .collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);
        let spans = self.extent.spans();
        let gap = " ".repeat(self.config.gap);

        (0..height)
            .map(|row| {
                let mut line = String::new();
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        line.push_str(&gap);
                    }
                    let text = card.get(row).map(String::as_str).unwrap_or("");
                    let span = spans.get(i).map(|s| s.len()).unwrap_or(0);
                    line.push_str(&window(text, 0, span));
                }
                line
            })
            .collect()
    }

    fn track_view(&self) -> String {
        let offset = (self.scroll_pos() / self.config.cell_px).round() as i64;
        let rows: Vec<String> = self
            .strip_rows()
            .iter()
            .map(|row| window(row, offset, self.width))
            .collect();

        let style = if self.is_dragging() {
            &self.styles.track_grabbing
        } else {
            &self.styles.track
        };
        style.render(&rows.join("\n"))
    }

    /// Renders the header and the visible part of the strip.
    ///
    /// An empty carousel, or one that has not been given a width yet, renders nothing.
    pub fn view(&self) -> String {
        if self.items().is_empty() || self.width == 0 {
            return String::new();
        }
        format!("{}\n{}", self.header_view(), self.track_view())
    }
}

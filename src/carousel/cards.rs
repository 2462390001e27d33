//! Marketplace cards: courses and instructors.
//!
//! These are the two item types the storefront shows in carousels, along with a
//! delegate for each. [`courses`](super::courses) and
//! [`instructors`](super::instructors) wire them to the right paging preset.

use super::style::Styles;
use super::types::{CardDelegate, Item};
use unicode_width::UnicodeWidthChar;

const ELLIPSIS: char = '…';

/// A course listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Catalog id.
    pub id: String,
    /// Course title.
    pub title: String,
    /// Instructor display name.
    pub instructor: String,
    /// List price in cents.
    pub price_cents: u32,
    /// Active discount, in percent.
    pub discount_percent: Option<u8>,
    /// Average rating out of 5.
    pub rating: f32,
}

impl Course {
    /// Creates a full-price course with no rating.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        instructor: impl Into<String>,
        price_cents: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            instructor: instructor.into(),
            price_cents,
            discount_percent: None,
            rating: 0.0,
        }
    }

    /// Sets a discount percentage.
    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount_percent = Some(percent);
        self
    }

    /// Sets the rating, clamped to 0..=5.
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self
    }

    /// Whether a discount actually lowers the price.
    pub fn is_discounted(&self) -> bool {
        matches!(self.discount_percent, Some(p) if p > 0) && self.price_cents > 0
    }

    /// Price after discount, rounded half-up to the cent. 100% or more is free.
    pub fn final_price_cents(&self) -> u32 {
        match self.discount_percent {
            Some(p) if p >= 100 => 0,
            Some(p) if p > 0 => {
                let keep = u64::from(100 - p);
                ((u64::from(self.price_cents) * keep + 50) / 100) as u32
            }
            _ => self.price_cents,
        }
    }
}

impl Item for Course {
    fn id(&self) -> String {
        self.id.clone()
    }
}

/// An instructor profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Instructor {
    /// Profile id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Area of expertise.
    pub expertise: String,
    /// Number of published courses.
    pub course_count: u32,
}

impl Instructor {
    /// Creates an instructor profile.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        expertise: impl Into<String>,
        course_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            expertise: expertise.into(),
            course_count,
        }
    }
}

impl Item for Instructor {
    fn id(&self) -> String {
        self.id.clone()
    }
}

/// Formats cents as dollars; zero is "Free".
pub fn format_price(cents: u32) -> String {
    if cents == 0 {
        return "Free".to_string();
    }
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn stars(rating: f32) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), rating)
}

/// Cuts `s` to at most `width` display columns, ending in an ellipsis when cut.
pub(crate) fn truncate(s: &str, width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

fn pad(s: &str, width: usize) -> String {
    let w: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Renders [`Course`] cards.
#[derive(Debug, Clone)]
pub struct CourseDelegate {
    /// Inner text width in columns.
    pub width: usize,
}

impl Default for CourseDelegate {
    fn default() -> Self {
        Self { width: 32 }
    }
}

impl CardDelegate<Course> for CourseDelegate {
    fn render(&self, c: &Course, styles: &Styles) -> String {
        let w = self.width;
        let price = if c.is_discounted() {
            format!(
                "{} (was {}, -{}%)",
                format_price(c.final_price_cents()),
                format_price(c.price_cents),
                c.discount_percent.unwrap_or(0).min(100)
            )
        } else {
            format_price(c.price_cents)
        };

        let lines = [
            styles.card_title.render(&pad(&truncate(&c.title, w), w)),
            styles.card_detail.render(&pad(&truncate(&c.instructor, w), w)),
            styles.card_accent.render(&pad(&truncate(&price, w), w)),
            styles.card_detail.render(&pad(&truncate(&stars(c.rating), w), w)),
        ];
        styles.card.render(&lines.join("\n"))
    }
}

/// Renders [`Instructor`] cards.
#[derive(Debug, Clone)]
pub struct InstructorDelegate {
    /// Inner text width in columns.
    pub width: usize,
}

impl Default for InstructorDelegate {
    fn default() -> Self {
        Self { width: 20 }
    }
}

impl CardDelegate<Instructor> for InstructorDelegate {
    fn render(&self, i: &Instructor, styles: &Styles) -> String {
        let w = self.width;
        let courses = match i.course_count {
            1 => "1 course".to_string(),
            n => format!("{n} courses"),
        };
        let lines = [
            styles.card_title.render(&pad(&truncate(&i.name, w), w)),
            styles.card_detail.render(&pad(&truncate(&i.expertise, w), w)),
            styles.card_accent.render(&pad(&truncate(&courses, w), w)),
        ];
        styles.card.render(&lines.join("\n"))
    }
}

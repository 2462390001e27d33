//! A storefront screen with a course row and an instructor row.
//!
//! Drag either row with the mouse, throw it, or page with the `‹`/`›` buttons.
//! Tab moves keyboard focus between rows, ←/→ page the focused row, q quits.

use bubbletea_carousel::carousel::FrameMsg;
use bubbletea_carousel::prelude::*;
use bubbletea_rs::{
    quit, Cmd, KeyMsg, Model as BubbleTeaModel, MouseMotion, MouseMsg, Msg, Program, WindowSizeMsg,
};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Rows taken by the course row: header plus a six-line card.
const COURSE_ROWS: u16 = 7;

struct Storefront {
    courses: Carousel<Course>,
    instructors: Carousel<Instructor>,
    status: String,
}

fn sample_courses() -> Vec<Course> {
    vec![
        Course::new("rust-101", "Rust for Beginners", "Ferris Crab", 1999).with_rating(4.7),
        Course::new("async-deep", "Async in Depth", "Tokio Team", 4999)
            .with_discount(20)
            .with_rating(4.5),
        Course::new("tui-craft", "Terminal UIs That Feel Native", "Ada Lane", 2999)
            .with_rating(4.8),
        Course::new("wasm-intro", "WebAssembly from Scratch", "Grace Byte", 3499)
            .with_discount(100),
        Course::new("embedded", "Embedded Rust on a Budget", "Linus Pin", 5999)
            .with_discount(35)
            .with_rating(4.2),
        Course::new("macros", "Macros Without Fear", "Ada Lane", 2499).with_rating(4.6),
    ]
}

fn sample_instructors() -> Vec<Instructor> {
    vec![
        Instructor::new("ferris", "Ferris Crab", "Ownership and borrowing", 3),
        Instructor::new("tokio", "Tokio Team", "Async runtimes", 5),
        Instructor::new("ada", "Ada Lane", "Terminal interfaces", 2),
        Instructor::new("grace", "Grace Byte", "Compilers and Wasm", 1),
        Instructor::new("linus", "Linus Pin", "Embedded systems", 4),
        Instructor::new("margo", "Margo Heap", "Allocators", 2),
    ]
}

impl Storefront {
    /// Hands one event to both rows. Rows hit-test by their own origin, so at most one
    /// reacts and returns a command.
    fn forward(&mut self, a: Msg, b: Msg) -> Option<Cmd> {
        let first = self.courses.update(a);
        let second = self.instructors.update(b);
        first.or(second)
    }

    fn toggle_focus(&mut self) {
        if self.courses.focused() {
            self.courses.blur();
            self.instructors.focus();
        } else {
            self.instructors.blur();
            self.courses.focus();
        }
    }
}

impl BubbleTeaModel for Storefront {
    fn init() -> (Self, Option<Cmd>) {
        let mut courses = courses("Popular courses", sample_courses()).with_origin(0, 0);
        courses.focus();
        let instructors = instructors("Meet the instructors", sample_instructors())
            .with_origin(0, COURSE_ROWS + 1);
        (
            Self {
                courses,
                instructors,
                status: "Click a card to open it.".to_string(),
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(click) = msg.downcast_ref::<ItemClickMsg>() {
            self.status = format!("Opened {}", click.item_id);
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key {
                KeyCode::Char('q') => return Some(quit()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Some(quit())
                }
                KeyCode::Tab => {
                    self.toggle_focus();
                    return None;
                }
                _ => {}
            }
            if self.courses.focused() {
                return self.courses.update(msg);
            }
            return self.instructors.update(msg);
        }

        if let Some(frame) = msg.downcast_ref::<FrameMsg>() {
            let copy = frame.clone();
            return self.forward(msg, Box::new(copy));
        }
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            let copy = WindowSizeMsg {
                width: size.width,
                height: size.height,
            };
            return self.forward(msg, Box::new(copy));
        }
        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            let copy = MouseMsg {
                x: mouse.x,
                y: mouse.y,
                button: mouse.button,
                modifiers: mouse.modifiers,
            };
            return self.forward(msg, Box::new(copy));
        }
        None
    }

    fn view(&self) -> String {
        let hint = Style::new()
            .foreground(Color::from("#626262"))
            .render("drag or throw a row • ‹ › page • tab switch row • q quit");
        format!(
            "{}\n\n{}\n\n{}\n{}",
            self.courses.view(),
            self.instructors.view(),
            self.status,
            hint
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<Storefront>::builder()
        .alt_screen(true)
        .mouse_motion(MouseMotion::Cell)
        .build()?;
    program.run().await?;
    Ok(())
}

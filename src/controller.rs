// Turns input events into circle moves and owns the loop flags.

use crate::circle::{Circle, Viewport};
use crate::types::Point;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,    // w
    Down,  // s
    Left,  // a
    Right, // d
}

impl Direction {
    /// Unit delta in window coordinates (y grows downwards).
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved while a mouse button is held: absolute target.
    Drag(Point),
    Key(Direction),
    /// `q` or the window was closed.
    Quit,
}

pub struct Controller {
    step: i32,
    running: bool,
    redraw: bool,
}

impl Controller {
    /// Starts running with a pending redraw so the first frame shows up.
    pub fn new(step: i32) -> Self {
        Self { step, running: true, redraw: true }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Returns the redraw flag and resets it.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    pub fn handle(&mut self, event: InputEvent, circle: &mut Circle, viewport: &impl Viewport) {
        match event {
            InputEvent::Drag(p) => {
                circle.move_to(p, viewport);
                self.redraw = true;
            }
            InputEvent::Key(dir) => {
                let (ux, uy) = dir.delta();
                circle.move_by(ux * self.step, uy * self.step, viewport);
                self.redraw = true;
            }
            InputEvent::Quit => {
                info!("quit requested");
                self.running = false;
            }
        }
    }
}

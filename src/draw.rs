// Window plumbing: turns minifb's polled state into input events, reports the
// current window size and shows the software framebuffer.

use crate::circle::Viewport;
use crate::controller::{Direction, InputEvent};
use crate::error::Error;
use crate::types::{Extent, FrameBuffer, Point};
use log::trace;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, ScaleMode, Window, WindowOptions};
use std::collections::VecDeque;

pub struct Drawer {
    window: Window,           // the on-screen window you see
    last_mouse: Option<Point>, // cursor position at the previous poll
}

impl Drawer {
    /// Create a resizable window. The framebuffer is drawn 1:1 from the
    /// top-left corner so window pixels and buffer pixels always line up.
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> Result<Self, Error> {
        let options = WindowOptions {
            resize: true,
            scale_mode: ScaleMode::UpperLeft,
            ..WindowOptions::default()
        };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        Ok(Self { window, last_mouse: None })
    }

    /// Push the pixels for this frame to the screen (also pumps window events).
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        trace!("present {}x{}", framebuffer.width, framebuffer.height);
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Pump window events on frames where nothing is redrawn.
    pub fn pump(&mut self) {
        self.window.update();
    }

    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Merge whatever happened since the last pump into `queue`
    /// (see `enqueue_events`).
    pub fn collect_events(&mut self, queue: &mut VecDeque<InputEvent>) {
        if !self.window.is_open() {
            enqueue_events(queue, [InputEvent::Quit]);
            return;
        }

        let mut fresh: Vec<InputEvent> = self
            .window
            .get_keys_pressed(KeyRepeat::Yes)
            .into_iter()
            .filter_map(key_event)
            .collect();

        let now = self
            .window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| Point::new(x as i32, y as i32));
        let held = [MouseButton::Left, MouseButton::Middle, MouseButton::Right]
            .into_iter()
            .any(|b| self.window.get_mouse_down(b));
        fresh.extend(drag_event(self.last_mouse, now, held));
        if now.is_some() {
            self.last_mouse = now;
        }

        enqueue_events(queue, fresh);
    }
}

/// Most key presses kept waiting; older ones are dropped first.
const MAX_QUEUED_KEYS: usize = 8;

/// Add freshly polled events to the pending queue without letting it grow
/// while the loop applies one event per frame:
/// - `Quit` jumps to the front (once),
/// - a new `Drag` replaces any drag still waiting, since only the latest
///   cursor position matters,
/// - key presses are appended, keeping at most `MAX_QUEUED_KEYS`.
pub fn enqueue_events(
    queue: &mut VecDeque<InputEvent>,
    fresh: impl IntoIterator<Item = InputEvent>,
) {
    for event in fresh {
        match event {
            InputEvent::Quit => {
                if queue.front() != Some(&InputEvent::Quit) {
                    queue.push_front(InputEvent::Quit);
                }
            }
            InputEvent::Drag(_) => {
                queue.retain(|e| !matches!(e, InputEvent::Drag(_)));
                queue.push_back(event);
            }
            InputEvent::Key(_) => {
                let keys = queue.iter().filter(|e| matches!(e, InputEvent::Key(_))).count();
                if keys >= MAX_QUEUED_KEYS {
                    if let Some(oldest) = queue.iter().position(|e| matches!(e, InputEvent::Key(_))) {
                        queue.remove(oldest);
                    }
                }
                queue.push_back(event);
            }
        }
    }
}

impl Viewport for Drawer {
    fn extent(&self) -> Extent {
        let (w, h) = self.size();
        Extent::from_usize(w, h)
    }
}

/// w/s/a/d move, q quits, everything else is ignored.
fn key_event(key: Key) -> Option<InputEvent> {
    match key {
        Key::W => Some(InputEvent::Key(Direction::Up)),
        Key::S => Some(InputEvent::Key(Direction::Down)),
        Key::A => Some(InputEvent::Key(Direction::Left)),
        Key::D => Some(InputEvent::Key(Direction::Right)),
        Key::Q => Some(InputEvent::Quit),
        _ => None,
    }
}

/// A drag is pointer *motion* with a button held; holding still is not one.
fn drag_event(prev: Option<Point>, now: Option<Point>, held: bool) -> Option<InputEvent> {
    let now = now?;
    (held && prev != Some(now)).then_some(InputEvent::Drag(now))
}

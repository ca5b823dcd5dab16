//! Compile-time defaults for the demo.
//!
//! There is no config file and no CLI; the only runtime knob is `RUST_LOG`.

use crate::types::{Extent, Point};

#[derive(Debug, Clone)]
pub struct Config {
    /// Window title. Kept as-is from the original demo even though nothing here traces rays.
    pub title: &'static str,
    /// Initial window size; the window is resizable afterwards.
    pub window: Extent,
    pub start: Point,
    pub radius: i32,
    /// Pixels moved per w/a/s/d press.
    pub step: i32,
    pub background: u32, // 0x00RRGGBB
    pub fill: u32,       // 0x00RRGGBB
    pub target_fps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Ray Tracing",
            window: Extent::new(800, 600),
            start: Point::new(40, 60),
            radius: 30,
            step: 5,
            background: 0x00_11_11_11,
            fill: 0x00_FF_FF_11,
            target_fps: 60,
        }
    }
}

// The one on-screen entity: a filled circle that can be moved around but
// never leaves the window.

use crate::error::Error;
use crate::raster::{blit_rgba, circle_sprite};
use crate::types::{Extent, FrameBuffer, Point};
use image::RgbaImage;
use log::debug;

/// Anything that can report the current drawable size.
/// The window implements this; tests use a fixed or mutable fake.
pub trait Viewport {
    fn extent(&self) -> Extent;
}

impl Viewport for Extent {
    fn extent(&self) -> Extent {
        *self
    }
}

/// Clamp one coordinate so `[p - r, p + r]` lies in `[0, extent]`.
///
/// The low edge is checked first. In a viewport narrower than `2r` the low
/// edge wins only when `proposed - r < 0`; otherwise the high edge applies
/// even if that pushes the circle past 0.
#[inline]
pub fn clamp_axis(proposed: i32, r: i32, extent: i32) -> i32 {
    if proposed - r < 0 {
        r
    } else if proposed + r > extent {
        extent - r
    } else {
        proposed
    }
}

/// Per-axis `clamp_axis` on both coordinates.
pub fn clamp_center(proposed: Point, r: i32, extent: Extent) -> Point {
    Point {
        x: clamp_axis(proposed.x, r, extent.width),
        y: clamp_axis(proposed.y, r, extent.height),
    }
}

pub struct Circle {
    center: Point,
    radius: i32,
    sprite: RgbaImage, // 2r x 2r, painted once in `new`
}

impl Circle {
    /// Build the circle and paint its sprite. The start position is taken
    /// as-is; the first `move_to` brings it into bounds if needed.
    pub fn new(center: Point, radius: i32, color: u32) -> Result<Self, Error> {
        let sprite = circle_sprite(radius, color)?;
        Ok(Self { center, radius, sprite })
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn position(&self) -> Point {
        self.center
    }

    pub fn sprite(&self) -> &RgbaImage {
        &self.sprite
    }

    /// Move towards `proposed`, clamped against the viewport's size *right now*.
    pub fn move_to(&mut self, proposed: Point, viewport: &impl Viewport) {
        let extent = viewport.extent();
        let clamped = clamp_center(proposed, self.radius, extent);
        debug!(
            "move {:?} -> {:?} (viewport {}x{})",
            proposed, clamped, extent.width, extent.height
        );
        self.center = clamped;
    }

    /// Move by a delta from the current position (keyboard steps).
    pub fn move_by(&mut self, dx: i32, dy: i32, viewport: &impl Viewport) {
        self.move_to(self.center.offset(dx, dy), viewport);
    }

    /// Blit the cached sprite centred on the current position.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        let origin = self.center.offset(-self.radius, -self.radius);
        blit_rgba(fb, &self.sprite, origin);
    }
}

// Core value types shared by the rasterizer, the clamper and the window.

/// Integer pixel position (circle centre, cursor, blit origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Same point shifted by (dx, dy).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Size of the drawable area of the window, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Convert a window size reported in `usize` (minifb) without wrapping.
    pub fn from_usize(width: usize, height: usize) -> Self {
        Self {
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }
}

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Match the window size; contents are undefined until the next `clear`.
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels.resize(width * height, 0);
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_from_oversized_usize_saturates() {
        let e = Extent::from_usize(usize::MAX, 600);
        assert_eq!(e, Extent::new(i32::MAX, 600));
    }

    #[test]
    fn resize_keeps_pixel_count_in_sync() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.resize(10, 3);
        assert_eq!(fb.pixels.len(), 30);
        fb.clear(0x00_11_11_11);
        assert_eq!(fb.get(9, 2), Some(0x00_11_11_11));
        assert_eq!(fb.get(10, 0), None);
    }
}

// Circle rasterization and sprite blitting, fully in software.
// The circle is painted once into an RGBA sprite; each redraw only copies it.

use crate::error::Error;
use crate::types::{FrameBuffer, Point};
use image::{Rgba, RgbaImage};

/// Inclusive horizontal pixel range covered on one scanline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub x1: i32,
    pub x2: i32,
}

/// Where scanline `y` cuts the disk of radius `r` centred at `center`.
///
/// Returns `None` when the line misses the disk. The half-width is
/// `floor(sqrt(r² - dy²))`, so edge pixels are only included when fully
/// inside; the result is pixel-identical to the classic integer formula.
pub fn scanline_span(center: Point, r: i32, y: i32) -> Option<Span> {
    let dy = i64::from(y) - i64::from(center.y);
    let r = i64::from(r);
    let d = r * r - dy * dy;
    if d < 0 {
        return None;
    }
    let dx = d.isqrt();
    let cx = i64::from(center.x);
    Some(Span {
        x1: saturate(cx - dx),
        x2: saturate(cx + dx),
    })
}

/// Narrow to `i32`, pinning out-of-range values to the nearest bound.
#[inline]
fn saturate(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

/// Pack 0x00RRGGBB into an opaque RGBA pixel.
#[inline]
fn rgba_from_packed(color: u32) -> Rgba<u8> {
    Rgba([(color >> 16) as u8, (color >> 8) as u8, color as u8, 0xFF])
}

/// Paint a filled circle into a transparent `2r × 2r` sprite.
///
/// Fails with `InvalidRadius` when `r <= 0` or when the diameter or the
/// RGBA buffer size does not fit the integer types.
pub fn circle_sprite(radius: i32, color: u32) -> Result<RgbaImage, Error> {
    let diameter = radius
        .checked_mul(2)
        .filter(|_| radius > 0)
        .ok_or(Error::InvalidRadius(radius))?;
    let side = diameter as u32;
    (side as usize)
        .checked_mul(side as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(Error::InvalidRadius(radius))?;
    let mut img = RgbaImage::new(side, side); // all zero = fully transparent
    let px = rgba_from_packed(color);
    let center = Point::new(radius, radius);

    for y in 0..diameter {
        let Some(span) = scanline_span(center, radius, y) else { continue };
        // The equator row reaches x = 2r, one past the last column.
        let x1 = span.x1.max(0);
        let x2 = span.x2.min(diameter - 1);
        for x in x1..=x2 {
            img.put_pixel(x as u32, y as u32, px);
        }
    }
    Ok(img)
}

/// Copy `sprite` onto `fb` with its top-left corner at `origin`.
/// Sprites are either fully transparent or opaque: alpha 0 is skipped, any
/// other alpha overwrites. Pixels falling outside the framebuffer are skipped.
pub fn blit_rgba(fb: &mut FrameBuffer, sprite: &RgbaImage, origin: Point) {
    for (sx, sy, px) in sprite.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        if a == 0 {
            continue;
        }
        let x = origin.x.saturating_add(sx as i32);
        let y = origin.y.saturating_add(sy as i32);
        if x < 0 || y < 0 {
            continue;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= fb.width || y >= fb.height {
            continue;
        }
        fb.pixels[y * fb.width + x] = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn span_exists_only_within_radius() {
        let c = Point::new(30, 30);
        for y in 0..=60 {
            let span = scanline_span(c, 30, y).expect("row inside the disk");
            assert!(span.x1 <= span.x2, "row {y}: {span:?}");
        }
        assert_eq!(scanline_span(c, 30, -1), None);
        assert_eq!(scanline_span(c, 30, 61), None);
    }

    #[test]
    fn span_is_symmetric_around_center_row() {
        let c = Point::new(100, 50);
        for k in 0..=20 {
            assert_eq!(scanline_span(c, 20, 50 + k), scanline_span(c, 20, 50 - k));
        }
    }

    #[test]
    fn span_uses_floor_of_square_root() {
        // r=5, dy=1: sqrt(24) = 4.89.. -> 4
        assert_eq!(scanline_span(Point::new(0, 0), 5, 1), Some(Span { x1: -4, x2: 4 }));
        // Tangent rows collapse to a single pixel.
        assert_eq!(scanline_span(Point::new(7, 0), 5, 5), Some(Span { x1: 7, x2: 7 }));
        // Equator spans the full diameter.
        assert_eq!(scanline_span(Point::new(0, 0), 5, 0), Some(Span { x1: -5, x2: 5 }));
    }

    #[test]
    fn span_does_not_overflow_for_large_radius() {
        let span = scanline_span(Point::new(0, 0), 100_000, 0).unwrap();
        assert_eq!(span, Span { x1: -100_000, x2: 100_000 });
    }

    #[test]
    fn sprite_is_diameter_square_with_transparent_corners() {
        let img = circle_sprite(30, 0x00_FF_FF_11).unwrap();
        assert_eq!(img.dimensions(), (60, 60));
        assert_eq!(img.get_pixel(30, 30).0, [0xFF, 0xFF, 0x11, 0xFF]);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(59, 59).0[3], 0);
        // Equator row is filled up to the last column after clipping.
        assert_eq!(img.get_pixel(0, 30).0[3], 0xFF);
        assert_eq!(img.get_pixel(59, 30).0[3], 0xFF);
    }

    #[test]
    fn blit_clips_at_framebuffer_edges() {
        let sprite = circle_sprite(4, 0x00_FF_00_00).unwrap();
        let mut fb = FrameBuffer::new(10, 10);
        fb.clear(0x00_11_11_11);
        blit_rgba(&mut fb, &sprite, Point::new(-4, -4));
        // Sprite centre lands on (0,0).
        assert_eq!(fb.get(0, 0), Some(0x00_FF_00_00));
        // Outside the disk stays background.
        assert_eq!(fb.get(9, 9), Some(0x00_11_11_11));
    }

    #[test]
    fn blit_treats_any_alpha_as_opaque() {
        let mut sprite = RgbaImage::new(2, 1);
        sprite.put_pixel(0, 0, Rgba([0xFF, 0xFF, 0xFF, 0x80]));
        let mut fb = FrameBuffer::new(2, 1);
        fb.clear(0x00_11_11_11);
        blit_rgba(&mut fb, &sprite, Point::new(0, 0));
        assert_eq!(fb.get(0, 0), Some(0x00_FF_FF_FF));
        assert_eq!(fb.get(1, 0), Some(0x00_11_11_11));
    }

    #[test]
    fn span_saturates_instead_of_wrapping() {
        let span = scanline_span(Point::new(i32::MAX, 0), 10, 0).unwrap();
        assert_eq!(span, Span { x1: i32::MAX - 10, x2: i32::MAX });
        let span = scanline_span(Point::new(i32::MIN, 0), 10, 0).unwrap();
        assert_eq!(span, Span { x1: i32::MIN, x2: i32::MIN + 10 });
    }

    #[test]
    fn sprite_rejects_unrepresentable_radius() {
        assert!(matches!(circle_sprite(0, 0), Err(Error::InvalidRadius(0))));
        assert!(matches!(circle_sprite(-1, 0), Err(Error::InvalidRadius(-1))));
        let huge = i32::MAX / 2 + 1;
        assert!(matches!(circle_sprite(huge, 0), Err(Error::InvalidRadius(r)) if r == huge));
    }
}

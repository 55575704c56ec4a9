//! Synthetic binary drawings for raster-based unit tests.
//!
//! Drawn material is 255 on a 0 background, matching an inverted-threshold
//! scan of a black-on-white drawing.

use image::{GrayImage, Luma};

/// Pixel angle around `center` in degrees, in `[0, 360)`.
fn pixel_angle(dx: f64, dy: f64) -> f64 {
    dy.atan2(dx).to_degrees().rem_euclid(360.0)
}

/// Draws a ring of the given radius, keeping only pixels whose angle
/// satisfies `drawn`.
pub(crate) fn draw_ring<F>(
    img: &mut GrayImage,
    center: [f64; 2],
    radius: f64,
    half_thickness: f64,
    drawn: F,
) where
    F: Fn(f64) -> bool,
{
    let (w, h) = img.dimensions();
    for y in 0..h {
        for x in 0..w {
            let dx = f64::from(x) - center[0];
            let dy = f64::from(y) - center[1];
            let d = (dx * dx + dy * dy).sqrt();
            if (d - radius).abs() <= half_thickness && drawn(pixel_angle(dx, dy)) {
                img.put_pixel(x, y, Luma([255]));
            }
        }
    }
}

/// A blank canvas with one complete ring.
pub(crate) fn ring_image(w: u32, h: u32, center: [f64; 2], radius: f64) -> GrayImage {
    let mut img = GrayImage::new(w, h);
    draw_ring(&mut img, center, radius, 1.5, |_| true);
    img
}

/// Draws a filled disc.
pub(crate) fn fill_disc(img: &mut GrayImage, center: [f64; 2], radius: f64) {
    let (w, h) = img.dimensions();
    for y in 0..h {
        for x in 0..w {
            let dx = f64::from(x) - center[0];
            let dy = f64::from(y) - center[1];
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, Luma([255]));
            }
        }
    }
}

/// Draws a filled axis-aligned rectangle `[x0, x1) x [y0, y1)`.
pub(crate) fn fill_rect(img: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32) {
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, Luma([255]));
        }
    }
}

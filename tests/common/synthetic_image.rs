#![allow(dead_code)]

use saliency_map::{GrayImageU8, RgbImageU8};

/// Frame filled with a single color.
pub fn uniform_rgb(width: usize, height: usize, color: [u8; 3]) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    RgbImageU8::from_fn(width, height, |_, _| color)
}

/// Axis-aligned square of `fg` with its top-left corner at `(x0, y0)` on a
/// `bg` background.
pub fn square_rgb(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    side: usize,
    fg: [u8; 3],
    bg: [u8; 3],
) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(x0 + side <= width && y0 + side <= height, "square must fit the frame");
    RgbImageU8::from_fn(width, height, |x, y| {
        if (x0..x0 + side).contains(&x) && (y0..y0 + side).contains(&y) {
            fg
        } else {
            bg
        }
    })
}

/// Position of the first maximum in row-major order.
pub fn argmax(img: &GrayImageU8) -> (usize, usize) {
    let mut best = (0, 0);
    let mut best_v = 0u8;
    for y in 0..img.height() {
        for x in 0..img.width() {
            let v = img.get(x, y);
            if v > best_v {
                best_v = v;
                best = (x, y);
            }
        }
    }
    best
}

/// Mean value over `[x0, x1) × [y0, y1)`.
pub fn region_mean(img: &GrayImageU8, x0: usize, y0: usize, x1: usize, y1: usize) -> f32 {
    let mut sum = 0u64;
    for y in y0..y1 {
        for x in x0..x1 {
            sum += img.get(x, y) as u64;
        }
    }
    sum as f32 / ((x1 - x0) * (y1 - y0)).max(1) as f32
}

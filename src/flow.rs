//! Dense Lucas-Kanade optical flow.
//!
//! For every pixel the brightness-constancy equations of a square window are
//! solved in the least-squares sense:
//!
//! ```text
//! | Σ Ix²   Σ IxIy | |u|     | Σ IxIt |
//! | Σ IxIy  Σ Iy²  | |v| = - | Σ IyIt |
//! ```
//!
//! Spatial derivatives come from the Sobel filter of the current frame and
//! the temporal derivative is `curr - prev`. Windows whose structure tensor is
//! (near) singular, e.g. flat regions or pure edges, report zero flow.
use crate::edges::sobel_gradients;
use crate::image::{ImageF32, ImageView, ImageViewMut};
use crate::pyramid::clamp_index;
use nalgebra::{Matrix2, Vector2};

/// Default side length of the Lucas-Kanade window.
pub const DEFAULT_FLOW_WINDOW: usize = 7;

/// Determinant below which the structure tensor is treated as singular.
const MIN_DETERMINANT: f32 = 1e-6;

/// Horizontal and vertical flow components, in pixels per frame.
#[derive(Clone, Debug)]
pub struct FlowField {
    pub x: ImageF32,
    pub y: ImageF32,
}

impl FlowField {
    /// All-zero flow of the given size.
    pub fn zeros(w: usize, h: usize) -> Self {
        Self {
            x: ImageF32::new(w, h),
            y: ImageF32::new(w, h),
        }
    }
}

/// Estimate dense flow from `prev` to `curr` with a `window × window`
/// neighbourhood. Frames must share a size.
pub fn lucas_kanade(prev: &ImageF32, curr: &ImageF32, window: usize) -> FlowField {
    assert_eq!(
        (prev.w, prev.h),
        (curr.w, curr.h),
        "optical flow requires equally sized frames"
    );
    let (w, h) = (curr.w, curr.h);
    let mut flow = FlowField::zeros(w, h);
    if curr.is_empty() {
        return flow;
    }

    let grad = sobel_gradients(curr);
    let mut ixx = ImageF32::new(w, h);
    let mut ixy = ImageF32::new(w, h);
    let mut iyy = ImageF32::new(w, h);
    let mut ixt = ImageF32::new(w, h);
    let mut iyt = ImageF32::new(w, h);
    for i in 0..w * h {
        let gx = grad.gx.data[i];
        let gy = grad.gy.data[i];
        let gt = curr.data[i] - prev.data[i];
        ixx.data[i] = gx * gx;
        ixy.data[i] = gx * gy;
        iyy.data[i] = gy * gy;
        ixt.data[i] = gx * gt;
        iyt.data[i] = gy * gt;
    }

    let radius = window.max(1) / 2;
    let [sxx, sxy, syy, sxt, syt] = [ixx, ixy, iyy, ixt, iyt].map(|p| box_sum(&p, radius));

    for i in 0..w * h {
        let tensor = Matrix2::new(sxx.data[i], sxy.data[i], sxy.data[i], syy.data[i]);
        if tensor.determinant().abs() < MIN_DETERMINANT {
            continue;
        }
        let Some(inv) = tensor.try_inverse() else {
            continue;
        };
        let uv = -(inv * Vector2::new(sxt.data[i], syt.data[i]));
        flow.x.data[i] = uv[0];
        flow.y.data[i] = uv[1];
    }
    flow
}

/// Separable `(2r+1) × (2r+1)` box sum with replicate borders.
fn box_sum(src: &ImageF32, radius: usize) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let r = radius as isize;
    let mut tmp = ImageF32::new(w, h);
    for y in 0..h {
        let row = src.row(y);
        let dst = tmp.row_mut(y);
        for (x, d) in dst.iter_mut().enumerate() {
            *d = (-r..=r)
                .map(|k| row[clamp_index(x as isize + k, w)])
                .sum();
        }
    }
    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let dst = out.row_mut(y);
        for k in -r..=r {
            let src_row = tmp.row(clamp_index(y as isize + k, h));
            for (d, &s) in dst.iter_mut().zip(src_row) {
                *d += s;
            }
        }
    }
    out
}

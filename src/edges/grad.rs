//! Sobel image derivatives with replicate borders.
//!
//! - Convolves the 3×3 Sobel pair with border clamping.
//! - Derivatives are scaled by 1/8 so that a unit ramp `I(x) = x` has
//!   `gx = 1`, which keeps optical-flow vectors in pixel units.
//!
//! Complexity: O(W·H); memory: two float buffers.
use crate::image::{ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const SOBEL_NORM: f32 = 1.0 / 8.0;

/// Per-pixel spatial derivatives.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
}

/// Compute normalized Sobel derivatives of a single-channel plane.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);

    if l.is_empty() {
        return Grad { gx, gy };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                for k in 0..3 {
                    let sample = yy_row[x_idx[k]];
                    sum_x += sample * kx_row[k];
                    sum_y += sample * ky_row[k];
                }
            }
            out_gx[x] = sum_x * SOBEL_NORM;
            out_gy[x] = sum_y * SOBEL_NORM;
        }
    }

    Grad { gx, gy }
}

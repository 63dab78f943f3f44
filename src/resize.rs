//! Bilinear resampling between arbitrary plane sizes.
//!
//! Pixel centres are aligned (`src = (dst + 0.5) * scale - 0.5`) and samples
//! outside the source clamp to the border, so upsampling a 1×1 plane yields a
//! constant plane and downsampling averages neighbouring samples.
use crate::image::{ImageF32, ImageView, ImageViewMut};
use crate::pyramid::clamp_index;

/// Resample `src` to `w × h` with bilinear interpolation.
///
/// An empty source yields an all-zero image of the requested size.
pub fn resize_linear(src: &ImageF32, w: usize, h: usize) -> ImageF32 {
    let mut out = ImageF32::new(w, h);
    if src.is_empty() || out.is_empty() {
        return out;
    }
    if src.w == w && src.h == h {
        return src.clone();
    }

    let scale_x = src.w as f32 / w as f32;
    let scale_y = src.h as f32 / h as f32;
    let columns: Vec<(usize, usize, f32)> = (0..w)
        .map(|x| axis_taps(x, scale_x, src.w))
        .collect();

    for y in 0..h {
        let (y0, y1, dy) = axis_taps(y, scale_y, src.h);
        let top = src.row(y0);
        let bottom = src.row(y1);
        let dst_row = out.row_mut(y);
        for (dst_px, &(x0, x1, dx)) in dst_row.iter_mut().zip(&columns) {
            let t = lerp(top[x0], top[x1], dx);
            let b = lerp(bottom[x0], bottom[x1], dx);
            *dst_px = lerp(t, b, dy);
        }
    }
    out
}

/// Exact on constant spans, unlike `a * (1 - t) + b * t`.
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Source indices and interpolation weight for destination coordinate `d`.
#[inline]
fn axis_taps(d: usize, scale: f32, len: usize) -> (usize, usize, f32) {
    let s = ((d as f32 + 0.5) * scale - 0.5).max(0.0);
    let i0 = s.floor() as isize;
    let frac = s - i0 as f32;
    (clamp_index(i0, len), clamp_index(i0 + 1, len), frac)
}

#[cfg(test)]
mod tests {
    use super::resize_linear;
    use crate::image::ImageF32;

    #[test]
    fn upsampling_single_pixel_is_constant() {
        let src = ImageF32::filled(1, 1, 0.7);
        let out = resize_linear(&src, 5, 3);
        assert_eq!((out.w, out.h), (5, 3));
        assert!(out.data.iter().all(|&v| (v - 0.7).abs() < 1e-6));
    }

    #[test]
    fn empty_source_gives_zero_plane() {
        let out = resize_linear(&ImageF32::new(0, 0), 4, 4);
        assert_eq!(out.data, vec![0.0; 16]);
    }

    #[test]
    fn upsampling_interpolates_between_samples() {
        let src = ImageF32::from_fn(2, 1, |x, _| x as f32);
        let out = resize_linear(&src, 4, 1);
        // centres map to -0.25, 0.25, 0.75, 1.25 in source space
        let expected = [0.0, 0.25, 0.75, 1.0];
        for (got, want) in out.data.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
        }
    }

    #[test]
    fn downsampling_by_two_averages_pairs() {
        let src = ImageF32::from_fn(4, 1, |x, _| x as f32);
        let out = resize_linear(&src, 2, 1);
        assert!((out.data[0] - 0.5).abs() < 1e-6);
        assert!((out.data[1] - 2.5).abs() < 1e-6);
    }
}

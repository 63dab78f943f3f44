//! Map normalization operators.
//!
//! - [`range_normalize`] rescales a map to `[0, 1]`.
//! - [`itti_normalize`] additionally weights the map by `(1 - L)^2`, where
//!   `L` is the mean of the block-wise local maxima. Maps with a single
//!   dominant peak keep their energy; maps with many comparable peaks are
//!   suppressed.
use crate::image::{ImageF32, ImageView};

/// Side length of the blocks used to sample local maxima.
pub const DEFAULT_LOCAL_MAX_STEP: usize = 8;

/// Affinely rescale `src` to `[0, 1]`.
///
/// A flat map (`max == min`) is shifted by `-min` instead, so a uniform map
/// becomes all-zero. Empty maps are returned unchanged.
pub fn range_normalize(src: &ImageF32) -> ImageF32 {
    let Some((lo, hi)) = src.min_max() else {
        return src.clone();
    };
    if hi != lo {
        let inv = 1.0 / (hi - lo);
        src.map(|v| (v - lo) * inv)
    } else {
        src.map(|v| v - lo)
    }
}

/// Mean of the maxima of non-overlapping `step × step` blocks.
///
/// Blocks are anchored at the origin and a block starting at `(x, y)` is
/// sampled only when `x + step < w` and `y + step < h`, so the last block
/// row and column are skipped even when they are complete. Returns 0 when
/// no block qualifies.
pub fn avg_local_max(src: &ImageF32, step: usize) -> f32 {
    if step == 0 || src.is_empty() {
        return 0.0;
    }
    let blocks_x = (src.w - 1) / step;
    let blocks_y = (src.h - 1) / step;
    if blocks_x == 0 || blocks_y == 0 {
        return 0.0;
    }
    let mut block_max = vec![f32::NEG_INFINITY; blocks_x];
    let mut total = 0.0f64;
    for by in 0..blocks_y {
        block_max.fill(f32::NEG_INFINITY);
        for y in by * step..(by + 1) * step {
            let row = src.row(y);
            for (bx, chunk) in row[..blocks_x * step].chunks_exact(step).enumerate() {
                let m = chunk.iter().copied().fold(f32::NEG_INFINITY, f32::max);
                block_max[bx] = block_max[bx].max(m);
            }
        }
        total += block_max.iter().map(|&m| m as f64).sum::<f64>();
    }
    (total / (blocks_x * blocks_y) as f64) as f32
}

/// Itti normalization with the default 8-pixel block size.
pub fn itti_normalize(src: &ImageF32) -> ImageF32 {
    itti_normalize_with_step(src, DEFAULT_LOCAL_MAX_STEP)
}

/// Range-normalize, then scale by `(1 - L)^2` with `L = avg_local_max`.
pub fn itti_normalize_with_step(src: &ImageF32, step: usize) -> ImageF32 {
    let mut out = range_normalize(src);
    let lmax_mean = avg_local_max(&out, step);
    let coeff = (1.0 - lmax_mean) * (1.0 - lmax_mean);
    out.scale_in_place(coeff);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_normalize_maps_to_unit_interval() {
        let src = ImageF32::from_fn(10, 7, |x, y| (x as f32 - 3.0) * 2.5 + y as f32);
        let out = range_normalize(&src);
        let (lo, hi) = out.min_max().unwrap();
        assert!(lo.abs() < 1e-6);
        assert!((hi - 1.0).abs() < 1e-6);
        assert!(out.data.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn range_normalize_of_constant_is_zero() {
        let out = range_normalize(&ImageF32::filled(5, 5, 3.5));
        assert!(out.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn range_normalize_passes_empty_maps_through() {
        let out = range_normalize(&ImageF32::new(0, 3));
        assert!(out.is_empty());
    }

    #[test]
    fn avg_local_max_drops_partial_blocks() {
        // 20×10 → blocks at x ∈ {0, 8}, y = 0; the bright column at x=18 is ignored.
        let mut src = ImageF32::new(20, 10);
        src.set(3, 3, 0.5);
        src.set(12, 1, 1.0);
        src.set(18, 2, 9.0);
        src.set(4, 9, 9.0);
        assert!((avg_local_max(&src, 8) - 0.75).abs() < 1e-6);
        assert_eq!(avg_local_max(&ImageF32::filled(7, 40, 1.0), 8), 0.0);
        assert_eq!(avg_local_max(&ImageF32::filled(8, 8, 1.0), 8), 0.0);
    }

    #[test]
    fn avg_local_max_skips_last_block_of_exact_multiples() {
        // 16×16 samples only the top-left block.
        let quadrant = ImageF32::from_fn(16, 16, |x, y| if x < 8 && y < 8 { 1.0 } else { 0.0 });
        assert_eq!(avg_local_max(&quadrant, 8), 1.0);
        let elsewhere = ImageF32::from_fn(16, 16, |x, y| if x >= 8 || y >= 8 { 1.0 } else { 0.0 });
        assert_eq!(avg_local_max(&elsewhere, 8), 0.0);
        // 17×17 reaches the second block row and column.
        let wider = ImageF32::from_fn(17, 17, |x, y| if x < 8 && y < 8 { 1.0 } else { 0.0 });
        assert!((avg_local_max(&wider, 8) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn single_peak_is_suppressed_less_than_many_peaks() {
        let (w, h) = (64, 64);
        let mut single = ImageF32::new(w, h);
        single.set(20, 20, 1.0);
        let multi = ImageF32::from_fn(w, h, |x, y| if x % 8 == 4 && y % 8 == 4 { 1.0 } else { 0.0 });

        let l_single = avg_local_max(&range_normalize(&single), 8);
        let l_multi = avg_local_max(&range_normalize(&multi), 8);
        // 64×64 samples a 7×7 grid of blocks.
        assert!((l_single - 1.0 / 49.0).abs() < 1e-6);
        assert!((l_multi - 1.0).abs() < 1e-6);

        let n_single = itti_normalize(&single);
        let n_multi = itti_normalize(&multi);
        let expected = (1.0 - 1.0 / 49.0f32).powi(2);
        assert!((n_single.get(20, 20) - expected).abs() < 1e-5);
        assert!(n_multi.data.iter().all(|&v| v.abs() < 1e-6));
    }

    #[test]
    fn itti_scale_matches_formula() {
        let src = ImageF32::from_fn(17, 17, |x, y| if x < 8 && y < 8 { 2.0 } else { 1.0 });
        // Range normalized: one block at 1, three at 0 → L = 0.25.
        let out = itti_normalize(&src);
        assert!((out.get(0, 0) - 0.5625).abs() < 1e-6);
        assert_eq!(out.get(16, 16), 0.0);
    }

    #[test]
    fn peak_inside_the_only_block_is_fully_suppressed() {
        let src = ImageF32::from_fn(16, 16, |x, y| if x < 8 && y < 8 { 2.0 } else { 1.0 });
        let out = itti_normalize(&src);
        assert!(out.data.iter().all(|&v| v == 0.0));
    }
}

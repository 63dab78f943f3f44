//! Nine-level Gaussian pyramid with separable blur and 2× decimation.
//!
//! Design
//! - Level 0 is a copy of the input plane; the caller keeps its buffer.
//! - Each subsequent level applies the separable 5-tap Gaussian
//!   (`[1,4,6,4,1]/16`) and keeps every other sample, so that
//!   `w(k) = floor(w(k-1) / 2)` and `h(k) = floor(h(k-1) / 2)`.
//! - Boundary handling clamps indices (replicate border).
//!
//! Notes
//! - Small inputs run out of pixels before level 8; such levels are empty
//!   (0×N or N×0) images. Consumers treat empty levels as "no information".
//! - The blur is fused with decimation: only the retained columns are
//!   filtered horizontally and a ring of filtered rows is cached.

pub mod filters;

use crate::image::{ImageF32, ImageView, ImageViewMut};
use filters::GAUSSIAN_5TAP;

/// Number of levels in every saliency pyramid.
pub const PYRAMID_LEVELS: usize = 9;

#[derive(Clone, Debug, Default)]
pub struct Pyramid {
    pub levels: Vec<ImageF32>,
}

impl Pyramid {
    /// Build a 9-level pyramid from a single-channel plane.
    pub fn build(image: &ImageF32) -> Self {
        let mut levels = Vec::with_capacity(PYRAMID_LEVELS);
        levels.push(image.clone());

        let mut horiz_cache = Vec::new();
        let mut cached_rows = Vec::new();
        for _ in 1..PYRAMID_LEVELS {
            let prev = &levels[levels.len() - 1];
            let mut down = ImageF32::new(prev.w / 2, prev.h / 2);
            downsample(prev, &mut down, &GAUSSIAN_5TAP, &mut horiz_cache, &mut cached_rows);
            levels.push(down);
        }

        Self { levels }
    }

    /// Derive a pyramid by applying `f` to the levels `first..` of `self`.
    ///
    /// Levels below `first` are left empty; center-surround differencing
    /// never reads them as long as `first <= 2`.
    pub fn map_levels_from(&self, first: usize, f: impl Fn(&ImageF32) -> ImageF32) -> Self {
        let levels = self
            .levels
            .iter()
            .enumerate()
            .map(|(idx, level)| {
                if idx < first {
                    ImageF32::default()
                } else {
                    f(level)
                }
            })
            .collect();
        Self { levels }
    }

    #[inline]
    pub fn level(&self, idx: usize) -> &ImageF32 {
        &self.levels[idx]
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

fn downsample(
    src: &ImageF32,
    dst: &mut ImageF32,
    taps: &[f32],
    horiz_cache: &mut Vec<f32>,
    cached_rows: &mut Vec<isize>,
) {
    if src.is_empty() || dst.is_empty() {
        return;
    }
    let radius = taps.len() / 2;
    let taps_len = taps.len();
    let cache_width = dst.w;

    horiz_cache.clear();
    horiz_cache.resize(cache_width * taps_len, 0.0);
    cached_rows.clear();
    cached_rows.resize(taps_len, -1);

    for y in 0..dst.h {
        let center_sy = (y * 2) as isize;
        for ky in 0..taps_len {
            let offset = ky as isize - radius as isize;
            let sy = clamp_index(center_sy + offset, src.h) as isize;
            if cached_rows[ky] != sy {
                let src_row = src.row(sy as usize);
                let cache_row = &mut horiz_cache[ky * cache_width..(ky + 1) * cache_width];
                filter_row_downsample(src_row, cache_row, taps, radius);
                cached_rows[ky] = sy;
            }
        }
        let dst_row = dst.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (ky, &tap) in taps.iter().enumerate() {
                acc += tap * horiz_cache[ky * cache_width + x];
            }
            *dst_px = acc;
        }
    }
}

fn filter_row_downsample(row: &[f32], out: &mut [f32], taps: &[f32], radius: usize) {
    if row.is_empty() || out.is_empty() {
        return;
    }
    let max_x = row.len();
    let mut sx = 0isize;
    for dst_px in out {
        let mut acc = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            let offset = k as isize - radius as isize;
            let idx = clamp_index(sx + offset, max_x);
            acc += tap * row[idx];
        }
        *dst_px = acc;
        sx = sx.saturating_add(2);
    }
}

pub(crate) fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}

//! Center-surround differences across pyramid scales.
//!
//! For every center level `c ∈ {2, 3, 4}` and offset `δ ∈ {3, 4}` the
//! surround level `c + δ` is resampled to the center's size and the absolute
//! difference is taken. Maps are emitted in the order of
//! [`CENTER_SURROUND_PAIRS`]; consumers index into the result by position.
use crate::image::ImageF32;
use crate::pyramid::Pyramid;
use crate::resize::resize_linear;

/// Number of feature maps produced from one pyramid.
pub const FEATURE_MAPS_PER_PYRAMID: usize = 6;

/// `(center, surround)` level pairs in emission order.
pub const CENTER_SURROUND_PAIRS: [(usize, usize); FEATURE_MAPS_PER_PYRAMID] =
    [(2, 5), (2, 6), (3, 6), (3, 7), (4, 7), (4, 8)];

/// Six center-surround maps of one channel.
pub type FeatureMaps = [ImageF32; FEATURE_MAPS_PER_PYRAMID];

/// Compute the six center-surround maps of a 9-level pyramid.
///
/// When either level of a pair is empty the corresponding map is all-zero at
/// the center level's size.
pub fn center_surround_diff(pyramid: &Pyramid) -> FeatureMaps {
    CENTER_SURROUND_PAIRS.map(|(c, s)| abs_diff_upsampled(pyramid.level(c), pyramid.level(s)))
}

/// Build the Gaussian pyramid of `src` and return its center-surround maps.
pub fn gaussian_pyramid_csd(src: &ImageF32) -> FeatureMaps {
    center_surround_diff(&Pyramid::build(src))
}

fn abs_diff_upsampled(center: &ImageF32, surround: &ImageF32) -> ImageF32 {
    if center.is_empty() || surround.is_empty() {
        return ImageF32::new(center.w, center.h);
    }
    let mut out = resize_linear(surround, center.w, center.h);
    for (o, &c) in out.data.iter_mut().zip(&center.data) {
        *o = (c - *o).abs();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_six_maps_at_center_resolutions() {
        let img = ImageF32::from_fn(512, 256, |x, y| ((x * 3 + y) % 11) as f32 / 11.0);
        let pyr = Pyramid::build(&img);
        let maps = center_surround_diff(&pyr);
        assert_eq!(maps.len(), 6);
        for (map, &(c, _)) in maps.iter().zip(&CENTER_SURROUND_PAIRS) {
            assert_eq!((map.w, map.h), (pyr.level(c).w, pyr.level(c).h));
        }
        assert_eq!((maps[0].w, maps[0].h), (128, 64));
        assert_eq!((maps[2].w, maps[2].h), (64, 32));
        assert_eq!((maps[4].w, maps[4].h), (32, 16));
    }

    #[test]
    fn order_matches_center_surround_pairs() {
        // Put distinct constants in each level so every map is |c - s|.
        let levels = (0..9)
            .map(|k| ImageF32::filled(256 >> k, 256 >> k, k as f32 * k as f32))
            .collect();
        let pyr = Pyramid { levels };
        let maps = center_surround_diff(&pyr);
        for (map, &(c, s)) in maps.iter().zip(&CENTER_SURROUND_PAIRS) {
            let expected = ((c * c) as f32 - (s * s) as f32).abs();
            assert!((map.get(0, 0) - expected).abs() < 1e-4, "pair ({c},{s})");
        }
    }

    #[test]
    fn empty_surround_levels_give_zero_maps() {
        let img = ImageF32::from_fn(64, 64, |x, _| x as f32 / 64.0);
        let maps = gaussian_pyramid_csd(&img);
        // 64 px: level 7 and 8 are empty, so (3,7), (4,7), (4,8) are zero.
        for idx in [3, 4, 5] {
            assert!(maps[idx].data.iter().all(|&v| v == 0.0), "map {idx}");
        }
        assert_eq!((maps[3].w, maps[3].h), (8, 8));
    }

    #[test]
    fn flat_input_has_no_contrast() {
        let maps = gaussian_pyramid_csd(&ImageF32::filled(128, 128, 0.4));
        for map in &maps {
            assert!(map.data.iter().all(|&v| v.abs() < 1e-5));
        }
    }
}

//! Conspicuity maps: per-modality fusion of normalized feature maps at full
//! resolution.
use crate::center_surround::FeatureMaps;
use crate::features::{ColorMaps, MotionMaps, OrientationMaps};
use crate::image::ImageF32;
use crate::normalize::itti_normalize_with_step;
use crate::resize::resize_linear;

/// Itti-normalize each map and resample it to `w × h`.
pub fn normalize_feature_maps(maps: &[ImageF32], w: usize, h: usize, step: usize) -> Vec<ImageF32> {
    maps.iter()
        .map(|m| resize_linear(&itti_normalize_with_step(m, step), w, h))
        .collect()
}

/// Sum of the normalized, full-resolution feature maps.
pub fn conspicuity_from_features(maps: &FeatureMaps, w: usize, h: usize, step: usize) -> ImageF32 {
    let mut acc = ImageF32::new(w, h);
    for map in normalize_feature_maps(maps, w, h, step) {
        acc.add_weighted(&map, 1.0);
    }
    acc
}

/// Sum of the conspicuity maps of two feature-map sets (color opponents,
/// flow components).
pub fn paired_conspicuity(
    first: &FeatureMaps,
    second: &FeatureMaps,
    w: usize,
    h: usize,
    step: usize,
) -> ImageF32 {
    let mut acc = conspicuity_from_features(first, w, h, step);
    acc.add_weighted(&conspicuity_from_features(second, w, h, step), 1.0);
    acc
}

pub fn intensity_conspicuity(maps: &FeatureMaps, w: usize, h: usize, step: usize) -> ImageF32 {
    conspicuity_from_features(maps, w, h, step)
}

pub fn color_conspicuity(maps: &ColorMaps, w: usize, h: usize, step: usize) -> ImageF32 {
    paired_conspicuity(&maps.rg, &maps.by, w, h, step)
}

/// Per-angle conspicuity, itti-normalized again, summed over the 4 angles.
pub fn orientation_conspicuity(maps: &OrientationMaps, w: usize, h: usize, step: usize) -> ImageF32 {
    let mut acc = ImageF32::new(w, h);
    for angle_maps in maps {
        let per_angle = conspicuity_from_features(angle_maps, w, h, step);
        acc.add_weighted(&itti_normalize_with_step(&per_angle, step), 1.0);
    }
    acc
}

pub fn motion_conspicuity(maps: &MotionMaps, w: usize, h: usize, step: usize) -> ImageF32 {
    paired_conspicuity(&maps.x, &maps.y, w, h, step)
}

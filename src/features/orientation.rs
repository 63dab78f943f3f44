//! Orientation feature maps from Gabor responses across pyramid levels.
use super::gabor::{filter2d, GABOR_BANK};
use crate::center_surround::{center_surround_diff, FeatureMaps};
use crate::image::ImageF32;
use crate::pyramid::Pyramid;

/// First pyramid level that is Gabor-filtered; lower levels are never
/// referenced by the center-surround pairs.
pub const FIRST_FILTERED_LEVEL: usize = 2;

/// Center-surround maps of the Gabor responses, one set per bank angle
/// (0°, 45°, 90°, 135°), 24 maps in total.
pub type OrientationMaps = [FeatureMaps; 4];

/// Compute the 24 orientation feature maps of a luma plane.
pub fn orientation_feature_maps(intensity: &ImageF32) -> OrientationMaps {
    let pyramid = Pyramid::build(intensity);
    GABOR_BANK.each_ref().map(|kernel| {
        let responses = pyramid.map_levels_from(FIRST_FILTERED_LEVEL, |level| filter2d(level, kernel));
        center_surround_diff(&responses)
    })
}

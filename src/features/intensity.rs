use crate::center_surround::{gaussian_pyramid_csd, FeatureMaps};
use crate::image::ImageF32;

/// Intensity feature maps: center-surround contrast of the luma plane.
pub fn intensity_feature_maps(intensity: &ImageF32) -> FeatureMaps {
    gaussian_pyramid_csd(intensity)
}

#[cfg(test)]
mod tests {
    use super::intensity_feature_maps;
    use crate::image::ImageF32;

    #[test]
    fn bright_blob_shows_up_in_finest_map() {
        let img = ImageF32::from_fn(128, 128, |x, y| {
            if (40..56).contains(&x) && (40..56).contains(&y) {
                1.0
            } else {
                0.0
            }
        });
        let maps = intensity_feature_maps(&img);
        let finest = &maps[0];
        // level 2 coordinates of the blob centre
        let inside = finest.get(12, 12);
        let outside = finest.get(28, 28);
        assert!(inside > outside, "inside={inside} outside={outside}");
    }
}

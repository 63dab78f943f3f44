//! Weighted fusion of the conspicuity maps into the saliency map.
use crate::image::ImageF32;
use crate::normalize::{itti_normalize_with_step, range_normalize};
use crate::params::SaliencyWeights;

/// Full-resolution conspicuity maps of the four modalities.
#[derive(Clone, Debug)]
pub struct ConspicuityMaps {
    pub intensity: ImageF32,
    pub color: ImageF32,
    pub orientation: ImageF32,
    pub motion: ImageF32,
}

impl ConspicuityMaps {
    /// `(label, map)` pairs in a fixed order.
    pub fn labeled(&self) -> [(&'static str, &ImageF32); 4] {
        [
            ("intensity", &self.intensity),
            ("color", &self.color),
            ("orientation", &self.orientation),
            ("motion", &self.motion),
        ]
    }
}

/// Itti-normalize each conspicuity map, blend with `weights`, and rescale
/// the sum to [0,1].
pub fn combine_conspicuity(maps: &ConspicuityMaps, weights: SaliencyWeights, step: usize) -> ImageF32 {
    let (w, h) = (maps.intensity.w, maps.intensity.h);
    let mut sum = ImageF32::new(w, h);
    sum.add_weighted(&itti_normalize_with_step(&maps.intensity, step), weights.intensity);
    sum.add_weighted(&itti_normalize_with_step(&maps.orientation, step), weights.orientation);
    sum.add_weighted(&itti_normalize_with_step(&maps.color, step), weights.color);
    sum.add_weighted(&itti_normalize_with_step(&maps.motion, step), weights.motion);
    range_normalize(&sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::DEFAULT_LOCAL_MAX_STEP;

    fn peak_at(x: usize, y: usize) -> ImageF32 {
        let mut m = ImageF32::new(32, 32);
        m.set(x, y, 1.0);
        m
    }

    #[test]
    fn zero_weight_removes_a_modality() {
        let maps = ConspicuityMaps {
            intensity: peak_at(4, 4),
            color: peak_at(28, 28),
            orientation: ImageF32::new(32, 32),
            motion: ImageF32::new(32, 32),
        };
        let s = combine_conspicuity(&maps, SaliencyWeights::only_intensity(), DEFAULT_LOCAL_MAX_STEP);
        assert!((s.get(4, 4) - 1.0).abs() < 1e-6);
        assert_eq!(s.get(28, 28), 0.0);
    }

    #[test]
    fn all_zero_maps_stay_zero() {
        let z = ImageF32::new(16, 16);
        let maps = ConspicuityMaps {
            intensity: z.clone(),
            color: z.clone(),
            orientation: z.clone(),
            motion: z,
        };
        let s = combine_conspicuity(&maps, SaliencyWeights::default(), DEFAULT_LOCAL_MAX_STEP);
        assert!(s.data.iter().all(|&v| v == 0.0));
    }
}

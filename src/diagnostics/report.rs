use super::timing::TimingBreakdown;
use crate::image::ImageF32;
use crate::params::SaliencyWeights;
use serde::{Deserialize, Serialize};

/// Summary statistics of one intermediate map.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStats {
    pub label: String,
    pub width: usize,
    pub height: usize,
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

impl MapStats {
    pub fn from_map(label: impl Into<String>, map: &ImageF32) -> Self {
        let (min, max) = map.min_max().unwrap_or((0.0, 0.0));
        Self {
            label: label.into(),
            width: map.w,
            height: map.h,
            min,
            max,
            mean: map.mean(),
        }
    }
}

/// Size of the frame a run was computed on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Diagnostics captured by one successful `create_saliency_map` call.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaliencyReport {
    pub input: InputDescriptor,
    pub weights: SaliencyWeights,
    /// Whether a previous frame was available for optical flow.
    pub motion_reference: bool,
    /// Full-resolution conspicuity maps before the final fusion.
    pub conspicuity: Vec<MapStats>,
    pub timings: TimingBreakdown,
}

#[cfg(test)]
mod tests {
    use super::MapStats;
    use crate::image::ImageF32;

    #[test]
    fn stats_of_ramp() {
        let map = ImageF32::from_fn(4, 1, |x, _| x as f32);
        let stats = MapStats::from_map("ramp", &map);
        assert_eq!((stats.min, stats.max), (0.0, 3.0));
        assert!((stats.mean - 1.5).abs() < 1e-6);
    }

    #[test]
    fn stats_of_empty_map_are_zero() {
        let stats = MapStats::from_map("empty", &ImageF32::default());
        assert_eq!((stats.min, stats.max, stats.mean), (0.0, 0.0, 0.0));
    }
}

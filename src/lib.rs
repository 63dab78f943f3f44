#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod image;
pub mod params;

// Pipeline stages – public for tooling and tests, considered internals.
pub mod center_surround;
pub mod combine;
pub mod conspicuity;
pub mod edges;
pub mod features;
pub mod flow;
pub mod normalize;
pub mod pyramid;
pub mod resize;

// --- High-level re-exports -------------------------------------------------

pub use crate::combine::ConspicuityMaps;
pub use crate::diagnostics::SaliencyReport;
pub use crate::engine::SaliencyEngine;
pub use crate::error::SaliencyError;
pub use crate::image::{GrayImageU8, ImageF32, RgbImageU8};
pub use crate::params::{SaliencyParams, SaliencyWeights};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use saliency_map::prelude::*;
///
/// # fn main() {
/// let frame = RgbImageU8::from_fn(64, 64, |x, y| {
///     let v = if (24..40).contains(&x) && (24..40).contains(&y) { 255 } else { 20 };
///     [v, v, v]
/// });
///
/// let mut engine = SaliencyEngine::new();
/// engine.set_source_image(frame);
/// engine.create_saliency_map().expect("source image is set");
/// println!("saliency {}x{}", engine.saliency_map().width(), engine.saliency_map().height());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, RgbImageU8};
    pub use crate::{SaliencyEngine, SaliencyParams, SaliencyWeights};
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    pub use crate::center_surround::{center_surround_diff, gaussian_pyramid_csd, FeatureMaps};
    pub use crate::combine::combine_conspicuity;
    pub use crate::conspicuity::{
        color_conspicuity, conspicuity_from_features, intensity_conspicuity, motion_conspicuity,
        normalize_feature_maps, orientation_conspicuity, paired_conspicuity,
    };
    pub use crate::features::{
        color_feature_maps, intensity_feature_maps, motion_feature_maps, orientation_feature_maps,
    };
    pub use crate::normalize::{avg_local_max, itti_normalize, range_normalize};
    pub use crate::pyramid::Pyramid;
}

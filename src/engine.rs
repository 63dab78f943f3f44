//! Saliency engine orchestrating the full bottom-up pipeline.
//!
//! Stages
//! - Split: source RGB frame → R, G, B, and luma planes in [0,1].
//! - Features: intensity (6), color (6 + 6), orientation (24) and motion
//!   (6 + 6) center-surround maps.
//! - Conspicuity: per-modality fusion at full resolution.
//! - Combine: Itti-normalized, weighted sum, rescaled to the 8-bit domain.
//!
//! The only state carried between runs is the quantized luma frame of the
//! previous run, which feeds the optical flow of the next one.
//!
//! ```no_run
//! use saliency_map::{RgbImageU8, SaliencyEngine};
//!
//! # fn example(frame: RgbImageU8) {
//! let mut engine = SaliencyEngine::new();
//! engine.set_source_image(frame);
//! if engine.create_saliency_map().is_ok() {
//!     let map = engine.saliency_map();
//!     println!("{}x{}", map.width(), map.height());
//! }
//! # }
//! ```
use crate::combine::{combine_conspicuity, ConspicuityMaps};
use crate::conspicuity::{
    color_conspicuity, intensity_conspicuity, motion_conspicuity, orientation_conspicuity,
};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{InputDescriptor, MapStats, SaliencyReport, TimingBreakdown};
use crate::error::SaliencyError;
use crate::features::{
    color_feature_maps, intensity_feature_maps, motion_feature_maps, orientation_feature_maps,
    MotionStep,
};
use crate::image::{GrayImageU8, RgbImageU8};
use crate::params::{SaliencyParams, SaliencyWeights};
use log::{debug, warn};
use std::time::Instant;

/// Display-facing results of the most recent run.
#[derive(Clone, Debug, Default)]
struct Outputs {
    saliency: GrayImageU8,
    r: GrayImageU8,
    g: GrayImageU8,
    b: GrayImageU8,
    i: GrayImageU8,
}

/// Bottom-up saliency estimator with four weighted modalities.
///
/// Not internally synchronized: all mutation goes through `&mut self`.
#[derive(Clone, Debug, Default)]
pub struct SaliencyEngine {
    params: SaliencyParams,
    source: Option<RgbImageU8>,
    previous_frame: Option<GrayImageU8>,
    outputs: Outputs,
    conspicuity: Option<ConspicuityMaps>,
    report: Option<SaliencyReport>,
}

impl SaliencyEngine {
    /// Create an engine with default weights (0.3 / 0.3 / 0.2 / 0.2).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the supplied parameters.
    pub fn with_params(mut params: SaliencyParams) -> Self {
        params.weights = SaliencyWeights {
            intensity: sanitize_weight("intensity", params.weights.intensity),
            color: sanitize_weight("color", params.weights.color),
            orientation: sanitize_weight("orientation", params.weights.orientation),
            motion: sanitize_weight("motion", params.weights.motion),
        };
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn params(&self) -> &SaliencyParams {
        &self.params
    }

    /// Replace the source frame. Empty frames are ignored.
    pub fn set_source_image(&mut self, image: RgbImageU8) {
        if image.is_empty() {
            debug!(
                "SaliencyEngine: ignoring empty source image {}x{}",
                image.width(),
                image.height()
            );
            return;
        }
        self.source = Some(image);
    }

    pub fn set_weight_intensity(&mut self, w: f32) {
        self.params.weights.intensity = sanitize_weight("intensity", w);
    }

    pub fn set_weight_color(&mut self, w: f32) {
        self.params.weights.color = sanitize_weight("color", w);
    }

    pub fn set_weight_orientation(&mut self, w: f32) {
        self.params.weights.orientation = sanitize_weight("orientation", w);
    }

    pub fn set_weight_motion(&mut self, w: f32) {
        self.params.weights.motion = sanitize_weight("motion", w);
    }

    pub fn weights(&self) -> SaliencyWeights {
        self.params.weights
    }

    /// Forget the previous frame; the next run reports zero motion.
    pub fn reset_motion(&mut self) {
        self.previous_frame = None;
    }

    /// Run the full pipeline on the current source image and weights.
    ///
    /// Without a source image nothing is computed and every output keeps
    /// its previous value.
    pub fn create_saliency_map(&mut self) -> Result<(), SaliencyError> {
        let Some(source) = self.source.as_ref() else {
            warn!("SaliencyEngine: create_saliency_map called without a source image");
            return Err(SaliencyError::NoSourceImage);
        };
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let params = self.params.clone();
        let (w, h) = (source.width(), source.height());
        let step = params.local_max_step;

        let t = Instant::now();
        let planes = source.planes();
        timings.push_since("split", t);

        let t = Instant::now();
        let intensity_maps = intensity_feature_maps(&planes.i);
        timings.push_since("intensity_features", t);

        let t = Instant::now();
        let color_maps = color_feature_maps(&planes.r, &planes.g, &planes.b, params.color_epsilon);
        timings.push_since("color_features", t);

        let t = Instant::now();
        let orientation_maps = orientation_feature_maps(&planes.i);
        timings.push_since("orientation_features", t);

        // Motion: read the previous frame, then replace it with this one.
        let t = Instant::now();
        let previous = self.previous_frame.take();
        let motion_reference = previous.is_some();
        let MotionStep {
            maps: motion_maps,
            frame,
        } = motion_feature_maps(&planes.i, previous.as_ref(), params.flow_window);
        self.previous_frame = Some(frame);
        timings.push_since("motion_features", t);

        let t = Instant::now();
        let conspicuity = ConspicuityMaps {
            intensity: intensity_conspicuity(&intensity_maps, w, h, step),
            color: color_conspicuity(&color_maps, w, h, step),
            orientation: orientation_conspicuity(&orientation_maps, w, h, step),
            motion: motion_conspicuity(&motion_maps, w, h, step),
        };
        timings.push_since("conspicuity", t);

        let t = Instant::now();
        let saliency = combine_conspicuity(&conspicuity, params.weights, step);
        timings.push_since("combine", t);

        self.outputs = Outputs {
            saliency: GrayImageU8::from_unit_f32(&saliency),
            r: GrayImageU8::from_unit_f32(&planes.r),
            g: GrayImageU8::from_unit_f32(&planes.g),
            b: GrayImageU8::from_unit_f32(&planes.b),
            i: GrayImageU8::from_unit_f32(&planes.i),
        };

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "SaliencyEngine: {}x{} frame in {:.3} ms (motion reference: {})",
            w, h, timings.total_ms, motion_reference
        );
        self.report = Some(SaliencyReport {
            input: InputDescriptor {
                width: w,
                height: h,
            },
            weights: params.weights,
            motion_reference,
            conspicuity: conspicuity
                .labeled()
                .iter()
                .map(|(label, map)| MapStats::from_map(*label, map))
                .collect(),
            timings,
        });
        self.conspicuity = Some(conspicuity);
        Ok(())
    }

    /// Final saliency map; empty before the first successful run.
    pub fn saliency_map(&self) -> &GrayImageU8 {
        &self.outputs.saliency
    }

    /// Red channel of the last processed frame.
    pub fn r(&self) -> &GrayImageU8 {
        &self.outputs.r
    }

    /// Green channel of the last processed frame.
    pub fn g(&self) -> &GrayImageU8 {
        &self.outputs.g
    }

    /// Blue channel of the last processed frame.
    pub fn b(&self) -> &GrayImageU8 {
        &self.outputs.b
    }

    /// Intensity (luma) of the last processed frame.
    pub fn i(&self) -> &GrayImageU8 {
        &self.outputs.i
    }

    /// Conspicuity maps of the last successful run.
    pub fn conspicuity_maps(&self) -> Option<&ConspicuityMaps> {
        self.conspicuity.as_ref()
    }

    /// Diagnostics of the last successful run.
    pub fn report(&self) -> Option<&SaliencyReport> {
        self.report.as_ref()
    }
}

fn sanitize_weight(name: &str, w: f32) -> f32 {
    if w.is_finite() && w >= 0.0 {
        w
    } else {
        debug!("SaliencyEngine: clamping invalid {name} weight {w} to 0");
        0.0
    }
}

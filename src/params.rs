//! Parameter types configuring the saliency engine.
//!
//! The modality weights are the knobs a caller normally touches; the
//! remaining fields fix the block size of the Itti normalization, the color
//! divisor floor, and the optical-flow window. Every field has a default so
//! partial JSON configs deserialize.

use crate::features::color::DEFAULT_COLOR_EPSILON;
use crate::flow::DEFAULT_FLOW_WINDOW;
use crate::normalize::DEFAULT_LOCAL_MAX_STEP;
use serde::{Deserialize, Serialize};

/// Linear weights of the four conspicuity maps in the final saliency map.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaliencyWeights {
    pub intensity: f32,
    pub color: f32,
    pub orientation: f32,
    pub motion: f32,
}

impl Default for SaliencyWeights {
    fn default() -> Self {
        Self {
            intensity: 0.30,
            color: 0.30,
            orientation: 0.20,
            motion: 0.20,
        }
    }
}

impl SaliencyWeights {
    /// Weights that select a single modality, e.g. for debugging.
    pub fn only_intensity() -> Self {
        Self {
            intensity: 1.0,
            color: 0.0,
            orientation: 0.0,
            motion: 0.0,
        }
    }
}

/// Engine-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaliencyParams {
    pub weights: SaliencyWeights,
    /// Block size used to sample local maxima in the Itti normalization.
    pub local_max_step: usize,
    /// Floor of `max(R, G, B)` in the opponency division.
    pub color_epsilon: f32,
    /// Side length of the Lucas-Kanade window.
    pub flow_window: usize,
}

impl Default for SaliencyParams {
    fn default() -> Self {
        Self {
            weights: SaliencyWeights::default(),
            local_max_step: DEFAULT_LOCAL_MAX_STEP,
            color_epsilon: DEFAULT_COLOR_EPSILON,
            flow_window: DEFAULT_FLOW_WINDOW,
        }
    }
}

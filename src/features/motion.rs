//! Motion feature maps from dense optical flow against the previous frame.
//!
//! The extractor is stateless: the caller passes the previous quantized
//! frame in and receives the current one back, and decides where to keep it.
use crate::center_surround::{gaussian_pyramid_csd, FeatureMaps};
use crate::flow::{lucas_kanade, FlowField};
use crate::image::{GrayImageU8, ImageF32};
use log::debug;

/// Scale used to quantize the [0,1] luma plane into the 8-bit motion frame.
pub const MOTION_QUANT_SCALE: f32 = 256.0;

/// Feature maps of both flow components.
#[derive(Clone, Debug)]
pub struct MotionMaps {
    pub x: FeatureMaps,
    pub y: FeatureMaps,
}

/// Result of one motion extraction step.
#[derive(Clone, Debug)]
pub struct MotionStep {
    pub maps: MotionMaps,
    /// Quantized current frame, to be retained as the next "previous" frame.
    pub frame: GrayImageU8,
}

/// Quantize a [0,1] luma plane to the 8-bit frame used for flow estimation.
pub fn quantize_frame(intensity: &ImageF32) -> GrayImageU8 {
    GrayImageU8::from_f32_scaled(intensity, MOTION_QUANT_SCALE)
}

/// Compute the 6 + 6 motion feature maps.
///
/// Without a previous frame, or when its size differs from the current
/// frame, both flow components are zero.
pub fn motion_feature_maps(
    intensity: &ImageF32,
    previous: Option<&GrayImageU8>,
    window: usize,
) -> MotionStep {
    let frame = quantize_frame(intensity);
    let flow = match previous {
        Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
            lucas_kanade(&prev.to_f32(), &frame.to_f32(), window)
        }
        Some(prev) => {
            debug!(
                "motion: previous frame {}x{} does not match {}x{}, using zero flow",
                prev.width(),
                prev.height(),
                frame.width(),
                frame.height()
            );
            FlowField::zeros(frame.width(), frame.height())
        }
        None => FlowField::zeros(frame.width(), frame.height()),
    };
    MotionStep {
        maps: MotionMaps {
            x: gaussian_pyramid_csd(&flow.x),
            y: gaussian_pyramid_csd(&flow.y),
        },
        frame,
    }
}

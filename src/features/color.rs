//! Red-green and blue-yellow opponency feature maps.
use crate::center_surround::{gaussian_pyramid_csd, FeatureMaps};
use crate::image::ImageF32;

/// Floor applied to `max(R, G, B)` before dividing.
pub const DEFAULT_COLOR_EPSILON: f32 = 1e-4;

/// Opponency planes derived from the [0,1] RGB channels.
#[derive(Clone, Debug)]
pub struct OpponencyPlanes {
    /// `max((R - G) / max(R, G, B), 0)`
    pub rg: ImageF32,
    /// `max((B - min(R, G)) / max(R, G, B), 0)`
    pub by: ImageF32,
}

/// Feature maps of both opponency channels.
#[derive(Clone, Debug)]
pub struct ColorMaps {
    pub rg: FeatureMaps,
    pub by: FeatureMaps,
}

/// Compute the RG and BY planes. The divisor is floored at `epsilon` so
/// black pixels produce zero opponency instead of a division blow-up.
pub fn opponency_planes(r: &ImageF32, g: &ImageF32, b: &ImageF32, epsilon: f32) -> OpponencyPlanes {
    assert!(
        (r.w, r.h) == (g.w, g.h) && (r.w, r.h) == (b.w, b.h),
        "color planes must share a size"
    );
    let mut rg = ImageF32::new(r.w, r.h);
    let mut by = ImageF32::new(r.w, r.h);
    for i in 0..r.data.len() {
        let (rv, gv, bv) = (r.data[i], g.data[i], b.data[i]);
        let max_rgb = rv.max(gv).max(bv).max(epsilon);
        rg.data[i] = ((rv - gv) / max_rgb).max(0.0);
        by.data[i] = ((bv - rv.min(gv)) / max_rgb).max(0.0);
    }
    OpponencyPlanes { rg, by }
}

/// Compute the 6 + 6 color feature maps.
pub fn color_feature_maps(r: &ImageF32, g: &ImageF32, b: &ImageF32, epsilon: f32) -> ColorMaps {
    let planes = opponency_planes(r, g, b, epsilon);
    ColorMaps {
        rg: gaussian_pyramid_csd(&planes.rg),
        by: gaussian_pyramid_csd(&planes.by),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(v: f32) -> ImageF32 {
        ImageF32::filled(1, 1, v)
    }

    #[test]
    fn pure_red_is_red_green_opponent() {
        let p = opponency_planes(&single(1.0), &single(0.0), &single(0.0), DEFAULT_COLOR_EPSILON);
        assert_eq!(p.rg.data[0], 1.0);
        assert_eq!(p.by.data[0], 0.0);
    }

    #[test]
    fn pure_blue_is_blue_yellow_opponent() {
        let p = opponency_planes(&single(0.0), &single(0.0), &single(0.8), DEFAULT_COLOR_EPSILON);
        assert_eq!(p.rg.data[0], 0.0);
        assert!((p.by.data[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn black_pixels_do_not_blow_up() {
        let p = opponency_planes(&single(0.0), &single(0.0), &single(0.0), DEFAULT_COLOR_EPSILON);
        assert_eq!(p.rg.data[0], 0.0);
        assert_eq!(p.by.data[0], 0.0);
        let dark = opponency_planes(&single(2e-5), &single(0.0), &single(0.0), DEFAULT_COLOR_EPSILON);
        assert!((dark.rg.data[0] - 0.2).abs() < 1e-5);
    }

    #[test]
    fn green_clamps_negative_opponency_to_zero() {
        let p = opponency_planes(&single(0.2), &single(0.9), &single(0.1), DEFAULT_COLOR_EPSILON);
        assert_eq!(p.rg.data[0], 0.0);
        assert_eq!(p.by.data[0], 0.0);
    }

    #[test]
    fn yields_six_maps_per_channel() {
        let r = ImageF32::from_fn(64, 64, |x, _| if x < 32 { 1.0 } else { 0.0 });
        let g = ImageF32::new(64, 64);
        let b = ImageF32::from_fn(64, 64, |x, _| if x < 32 { 0.0 } else { 1.0 });
        let maps = color_feature_maps(&r, &g, &b, DEFAULT_COLOR_EPSILON);
        assert_eq!(maps.rg.len(), 6);
        assert_eq!(maps.by.len(), 6);
        assert!(maps.rg[0].data.iter().any(|&v| v > 0.0));
    }
}

//! Per-modality feature extractors.
//!
//! Every extractor turns one or more [0,1] planes into center-surround
//! feature maps (see [`crate::center_surround`]):
//!
//! - [`intensity`]: 6 maps of the luma plane.
//! - [`color`]: 6 red-green + 6 blue-yellow opponency maps.
//! - [`orientation`]: 6 maps per Gabor angle, 24 in total.
//! - [`motion`]: 6 maps per optical-flow component, 12 in total.

pub mod color;
pub mod gabor;
pub mod intensity;
pub mod motion;
pub mod orientation;

pub use color::{color_feature_maps, ColorMaps};
pub use intensity::intensity_feature_maps;
pub use motion::{motion_feature_maps, MotionMaps, MotionStep};
pub use orientation::{orientation_feature_maps, OrientationMaps};

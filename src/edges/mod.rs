//! Spatial derivative filters used by the motion channel.

pub mod grad;

/// Per-pixel Sobel derivatives.
pub use grad::{sobel_gradients, Grad};

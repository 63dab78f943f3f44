use core::fmt;

/// Errors reported by the saliency engine and its input conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaliencyError {
    /// `create_saliency_map` was called before any source image was set.
    NoSourceImage,
    /// A raw buffer did not match the declared image dimensions.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for SaliencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSourceImage => write!(f, "no source image set"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for SaliencyError {}

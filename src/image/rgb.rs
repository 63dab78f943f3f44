//! Owned interleaved 8-bit RGB frame and its split into float planes.
use super::ImageF32;
use crate::error::SaliencyError;

/// Rec.601 luma weights (R, G, B).
const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Owned interleaved RGB buffer, 3 bytes per pixel, rows tightly packed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

/// Channels of a source frame rescaled to [0,1].
#[derive(Clone, Debug)]
pub struct RgbPlanes {
    pub r: ImageF32,
    pub g: ImageF32,
    pub b: ImageF32,
    /// Luma (intensity) plane.
    pub i: ImageF32,
}

impl RgbImageU8 {
    /// Wrap raw interleaved RGB bytes, checking the length against the size.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, SaliencyError> {
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(SaliencyError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a frame by evaluating `f(x, y) -> [r, g, b]` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the frame holds no pixels ("unallocated").
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Split into R, G, B planes in [0,1] plus the luma plane.
    pub fn planes(&self) -> RgbPlanes {
        let (w, h) = (self.width, self.height);
        let mut r = ImageF32::new(w, h);
        let mut g = ImageF32::new(w, h);
        let mut b = ImageF32::new(w, h);
        let mut i = ImageF32::new(w, h);
        for (idx, px) in self.data.chunks_exact(3).enumerate() {
            let rv = px[0] as f32 / 255.0;
            let gv = px[1] as f32 / 255.0;
            let bv = px[2] as f32 / 255.0;
            r.data[idx] = rv;
            g.data[idx] = gv;
            b.data[idx] = bv;
            i.data[idx] = LUMA_WEIGHTS[0] * rv + LUMA_WEIGHTS[1] * gv + LUMA_WEIGHTS[2] * bv;
        }
        RgbPlanes { r, g, b, i }
    }
}

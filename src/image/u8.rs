use super::ImageF32;

/// Owned 8-bit grayscale buffer, tightly packed.
///
/// Used for the display-facing outputs of the engine and for the retained
/// previous frame of the motion channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    ///
    /// Panics when `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "gray buffer length must equal width * height"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Convert a float plane by `saturate(round(|v| * scale))`.
    ///
    /// Unit-range planes use `scale = 255`; the motion channel quantizes its
    /// luma with `scale = 256` so that bright pixels saturate.
    pub fn from_f32_scaled(image: &ImageF32, scale: f32) -> Self {
        let data = image
            .data
            .iter()
            .map(|&v| {
                let s = (v * scale).abs().round();
                if s.is_nan() {
                    0
                } else {
                    s.min(255.0) as u8
                }
            })
            .collect();
        Self::new(image.w, image.h, data)
    }

    /// Convert a [0,1] plane to the 8-bit output domain.
    pub fn from_unit_f32(image: &ImageF32) -> Self {
        Self::from_f32_scaled(image, 255.0)
    }

    /// Widen to f32 without rescaling (values stay in [0,255]).
    pub fn to_f32(&self) -> ImageF32 {
        ImageF32 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: self.data.iter().map(|&v| v as f32).collect(),
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Raw row-major bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

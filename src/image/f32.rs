//! Owned single-channel f32 plane in row-major layout (stride == width).
//!
//! Every intermediate of the saliency pipeline (pyramid levels, feature maps,
//! conspicuity maps) is an `ImageF32`. Buffers are value-owned; a 0×0 image
//! is a valid value and stands for a degenerate pyramid level.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Construct a buffer where every pixel is `value`.
    pub fn filled(w: usize, h: usize, value: f32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Construct a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// True when the image has no pixels (either dimension is zero).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// `(min, max)` over all pixels, `None` for an empty image.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        if self.is_empty() {
            return None;
        }
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for &v in &self.data {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        Some((lo, hi))
    }

    /// Apply `f` to every pixel, producing a new image of the same size.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Multiply every pixel by `factor` in place.
    pub fn scale_in_place(&mut self, factor: f32) {
        for v in &mut self.data {
            *v *= factor;
        }
    }

    /// Accumulate `weight * other` into `self`. Both images must share a size.
    pub fn add_weighted(&mut self, other: &ImageF32, weight: f32) {
        assert_eq!(
            (self.w, self.h),
            (other.w, other.h),
            "add_weighted requires equal image sizes"
        );
        for (dst, &src) in self.data.iter_mut().zip(&other.data) {
            *dst += weight * src;
        }
    }

    /// Mean pixel value, 0 for an empty image.
    pub fn mean(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f32>() / self.data.len() as f32
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::ImageF32;

    #[test]
    fn min_max_of_empty_image_is_none() {
        assert_eq!(ImageF32::new(0, 4).min_max(), None);
        assert!(ImageF32::new(3, 0).is_empty());
    }

    #[test]
    fn add_weighted_accumulates() {
        let mut acc = ImageF32::filled(2, 2, 1.0);
        let other = ImageF32::from_fn(2, 2, |x, y| (x + 2 * y) as f32);
        acc.add_weighted(&other, 0.5);
        assert_eq!(acc.data, vec![1.0, 1.5, 2.0, 2.5]);
    }
}

//! Fixed 9×9 Gabor bank (0°, 45°, 90°, 135°) and same-size 2D filtering.
//!
//! The 0° and 45° kernels are tabulated; 90° is the transpose of 0° and 135°
//! the horizontal mirror of 45°. All four are evaluated at compile time.
use crate::image::{ImageF32, ImageView, ImageViewMut};
use crate::pyramid::clamp_index;

pub const GABOR_SIZE: usize = 9;

pub type Kernel9 = [[f32; GABOR_SIZE]; GABOR_SIZE];

/// Orientation angles of the bank, in degrees, in bank order.
pub const GABOR_ANGLES_DEG: [u32; 4] = [0, 45, 90, 135];

#[rustfmt::skip]
const GABOR_0: Kernel9 = [
    [1.85212e-6, 1.28181e-5, -0.000350433, -0.000136537, 0.002010422, -0.000136537, -0.000350433, 1.28181e-5, 1.85212e-6],
    [2.80209e-5, 0.000193926, -0.005301717, -0.002065674, 0.030415784, -0.002065674, -0.005301717, 0.000193926, 2.80209e-5],
    [0.000195076, 0.001350077, -0.036909595, -0.014380852, 0.211749204, -0.014380852, -0.036909595, 0.001350077, 0.000195076],
    [0.00062494, 0.004325061, -0.118242318, -0.046070008, 0.678352526, -0.046070008, -0.118242318, 0.004325061, 0.00062494],
    [0.000921261, 0.006375831, -0.174308068, -0.067914552, 1.0, -0.067914552, -0.174308068, 0.006375831, 0.000921261],
    [0.00062494, 0.004325061, -0.118242318, -0.046070008, 0.678352526, -0.046070008, -0.118242318, 0.004325061, 0.00062494],
    [0.000195076, 0.001350077, -0.036909595, -0.014380852, 0.211749204, -0.014380852, -0.036909595, 0.001350077, 0.000195076],
    [2.80209e-5, 0.000193926, -0.005301717, -0.002065674, 0.030415784, -0.002065674, -0.005301717, 0.000193926, 2.80209e-5],
    [1.85212e-6, 1.28181e-5, -0.000350433, -0.000136537, 0.002010422, -0.000136537, -0.000350433, 1.28181e-5, 1.85212e-6],
];

#[rustfmt::skip]
const GABOR_45: Kernel9 = [
    [4.0418e-6, 2.2532e-5, -0.000279806, -0.001028923, 3.79931e-5, 0.000744712, 0.000132863, -9.04408e-6, -1.01551e-6],
    [2.2532e-5, 0.00092512, 0.002373205, -0.013561362, -0.0229477, 0.000389916, 0.003516954, 0.000288732, -9.04408e-6],
    [-0.000279806, 0.002373205, 0.044837725, 0.052928748, -0.139178011, -0.108372072, 0.000847346, 0.003516954, 0.000132863],
    [-0.001028923, -0.013561362, 0.052928748, 0.46016215, 0.249959607, -0.302454279, -0.108372072, 0.000389916, 0.000744712],
    [3.79931e-5, -0.0229477, -0.139178011, 0.249959607, 1.0, 0.249959607, -0.139178011, -0.0229477, 3.79931e-5],
    [0.000744712, 0.000389916, -0.108372072, -0.302454279, 0.249959607, 0.46016215, 0.052928748, -0.013561362, -0.001028923],
    [0.000132863, 0.003516954, 0.000847346, -0.108372072, -0.139178011, 0.052928748, 0.044837725, 0.002373205, -0.000279806],
    [-9.04408e-6, 0.000288732, 0.003516954, 0.000389916, -0.0229477, -0.013561362, 0.002373205, 0.00092512, 2.2532e-5],
    [-1.01551e-6, -9.04408e-6, 0.000132863, 0.000744712, 3.79931e-5, -0.001028923, -0.000279806, 2.2532e-5, 4.0418e-6],
];

const fn transpose(k: &Kernel9) -> Kernel9 {
    let mut out = [[0.0; GABOR_SIZE]; GABOR_SIZE];
    let mut i = 0;
    while i < GABOR_SIZE {
        let mut j = 0;
        while j < GABOR_SIZE {
            out[i][j] = k[j][i];
            j += 1;
        }
        i += 1;
    }
    out
}

const fn mirror_x(k: &Kernel9) -> Kernel9 {
    let mut out = [[0.0; GABOR_SIZE]; GABOR_SIZE];
    let mut i = 0;
    while i < GABOR_SIZE {
        let mut j = 0;
        while j < GABOR_SIZE {
            out[i][j] = k[i][GABOR_SIZE - 1 - j];
            j += 1;
        }
        i += 1;
    }
    out
}

/// The Gabor bank in [`GABOR_ANGLES_DEG`] order.
pub const GABOR_BANK: [Kernel9; 4] = [GABOR_0, GABOR_45, transpose(&GABOR_0), mirror_x(&GABOR_45)];

/// Same-size correlation of `img` with a centred 9×9 kernel.
///
/// Samples outside the image replicate the nearest border pixel. Empty
/// images are returned as empty images.
pub fn filter2d(img: &ImageF32, kernel: &Kernel9) -> ImageF32 {
    let (w, h) = (img.w, img.h);
    let mut out = ImageF32::new(w, h);
    if img.is_empty() {
        return out;
    }
    let radius = (GABOR_SIZE / 2) as isize;
    let x_idx: Vec<[usize; GABOR_SIZE]> = (0..w)
        .map(|x| std::array::from_fn(|k| clamp_index(x as isize + k as isize - radius, w)))
        .collect();

    for y in 0..h {
        let rows: [&[f32]; GABOR_SIZE] =
            std::array::from_fn(|k| img.row(clamp_index(y as isize + k as isize - radius, h)));
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let cols = &x_idx[x];
            let mut acc = 0.0f32;
            for (row, taps) in rows.iter().zip(kernel) {
                for (&xx, &tap) in cols.iter().zip(taps) {
                    acc += row[xx] * tap;
                }
            }
            *dst_px = acc;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_kernels_match_their_symmetries() {
        let [k0, k45, k90, k135] = &GABOR_BANK;
        assert_eq!(k90[0][4], k0[4][0]);
        assert_eq!(k90[4][1], k0[1][4]);
        assert_eq!(k135[0][0], k45[0][8]);
        assert_eq!(k135[3][2], k45[3][6]);
        assert_eq!(k0[4][4], 1.0);
        assert_eq!(k135[4][4], 1.0);
    }

    #[test]
    fn constant_plane_scales_by_kernel_sum() {
        let img = ImageF32::filled(12, 10, 0.5);
        for kernel in &GABOR_BANK {
            let sum: f32 = kernel.iter().flatten().sum();
            let out = filter2d(&img, kernel);
            assert!(out.data.iter().all(|&v| (v - 0.5 * sum).abs() < 1e-5));
        }
    }

    #[test]
    fn impulse_response_reproduces_kernel() {
        let mut img = ImageF32::new(15, 15);
        img.set(7, 7, 1.0);
        let out = filter2d(&img, &GABOR_BANK[1]);
        // Correlation of an impulse yields the kernel rotated by 180°.
        for ky in 0..GABOR_SIZE {
            for kx in 0..GABOR_SIZE {
                let got = out.get(3 + kx, 3 + ky);
                let want = GABOR_BANK[1][GABOR_SIZE - 1 - ky][GABOR_SIZE - 1 - kx];
                assert!((got - want).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn vertical_stripes_excite_zero_degree_kernel_most() {
        let img = ImageF32::from_fn(32, 32, |x, _| if (x / 2) % 2 == 0 { 1.0 } else { 0.0 });
        let energy: Vec<f32> = GABOR_BANK
            .iter()
            .map(|k| filter2d(&img, k).data.iter().map(|v| v.abs()).sum())
            .collect();
        assert!(energy[0] > energy[2], "energies: {energy:?}");
    }
}

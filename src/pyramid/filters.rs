/// Normalised 5-tap Gaussian `[1, 4, 6, 4, 1] / 16`, applied separably.
pub const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

#[cfg(test)]
mod tests {
    use super::GAUSSIAN_5TAP;

    #[test]
    fn gaussian_taps_sum_to_one() {
        let sum: f32 = GAUSSIAN_5TAP.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }
}

//! Savitzky-Golay smoothing.
//!
//! Each output sample is the value of a least-squares cubic fitted over a
//! 9-sample window. Away from the ends the window is centered on the
//! sample; near the ends the first (or last) full window's polynomial is
//! evaluated at the off-center positions, so edge samples are smoothed by
//! the same fit rather than padded data.
//!
//! The per-position weights come from the projection matrix
//! `A * (At * A)^-1 * At` of the window's Vandermonde design matrix `A`.
//! Row 4 holds the familiar centered coefficients
//! `(-21, 14, 39, 54, 59, 54, 39, 14, -21) / 231`.

use glam::{Mat4, Vec4};

/// Samples per fit window.
pub const WINDOW: usize = 9;

/// Degree of the fitted polynomial.
pub const POLY_ORDER: usize = 3;

const HALF: usize = WINDOW / 2;

/// Precomputed smoothing weights for a 9-sample cubic fit.
#[derive(Debug, Clone)]
pub struct SavitzkyGolay {
    /// `taps[r][c]` weights window sample `c` in the fitted value at
    /// window position `r`.
    taps: [[f32; WINDOW]; WINDOW],
}

impl SavitzkyGolay {
    /// Solves the least-squares design once; the weights are reused for
    /// every channel.
    #[must_use]
    pub fn design() -> Self {
        // Powers of the window offsets -4..=4, one Vandermonde row each.
        let basis = |p: f32| Vec4::new(1.0, p, p * p, p * p * p);
        let offsets: [f32; WINDOW] = core::array::from_fn(|r| r as f32 - HALF as f32);

        // Normal matrix (At * A); entry (j, k) is the power sum of j + k.
        let mut power_sums = [0.0_f32; 2 * POLY_ORDER + 1];
        for p in offsets {
            let mut term = 1.0;
            for sum in &mut power_sums {
                *sum += term;
                term *= p;
            }
        }
        let normal = Mat4::from_cols_array_2d(&core::array::from_fn(|j| {
            core::array::from_fn(|k| power_sums[j + k])
        }));
        let inverse = normal.inverse();

        let mut taps = [[0.0_f32; WINDOW]; WINDOW];
        for (r, row) in taps.iter_mut().enumerate() {
            let fitted_at = basis(offsets[r]);
            for (c, tap) in row.iter_mut().enumerate() {
                *tap = fitted_at.dot(inverse * basis(offsets[c]));
            }
        }
        Self { taps }
    }

    /// Weights applied when the window is centered on the output sample.
    #[inline]
    #[must_use]
    pub fn central_taps(&self) -> &[f32; WINDOW] {
        &self.taps[HALF]
    }

    /// Smooths `samples` in one pass.
    ///
    /// The input must hold at least one full window.
    #[must_use]
    pub fn smooth(&self, samples: &[f32]) -> Vec<f32> {
        let n = samples.len();
        assert!(n >= WINDOW, "smoothing needs at least {WINDOW} samples, got {n}");

        let mut out = vec![0.0_f32; n];
        let head = &samples[..WINDOW];
        let tail = &samples[n - WINDOW..];

        for r in 0..HALF {
            out[r] = weigh(&self.taps[r], head);
            out[n - HALF + r] = weigh(&self.taps[HALF + 1 + r], tail);
        }
        for i in HALF..n - HALF {
            out[i] = weigh(&self.taps[HALF], &samples[i - HALF..=i + HALF]);
        }
        out
    }
}

#[inline]
fn weigh(taps: &[f32; WINDOW], window: &[f32]) -> f32 {
    taps.iter().zip(window).map(|(t, s)| t * s).sum()
}

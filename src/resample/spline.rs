//! Cubic spline interpolation over unit-spaced knots.
//!
//! The resampler fits one spline per scalar channel, with knots at the
//! original frame indices `0..T-1`. Boundary behavior is "not-a-knot": the
//! third derivative is continuous across the second and second-to-last
//! knots, so the spline reproduces sampled cubic polynomials exactly. With
//! unit knot spacing those end conditions collapse to
//! `M0 = 2*M1 - M2` (mirrored at the tail), which pins the first and last
//! interior curvatures directly and leaves a plain tridiagonal system for
//! the rest.

/// Knots required for a cubic fit.
pub const MIN_KNOTS: usize = 4;

/// A fitted cubic interpolant over knots `0..n-1`.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    /// Sample values at the knots.
    values: Vec<f32>,
    /// Second derivative of the spline at each knot.
    curvature: Vec<f32>,
}

impl CubicSpline {
    /// Fits the not-a-knot cubic spline through `values[i]` at `x = i`.
    #[must_use]
    pub fn fit(values: &[f32]) -> Self {
        let n = values.len();
        assert!(n >= MIN_KNOTS, "cubic fit needs at least {MIN_KNOTS} knots");

        // Second differences, the right-hand side of the curvature system:
        // M[i-1] + 4*M[i] + M[i+1] = d[i] for interior knots.
        let second_diff =
            |i: usize| 6.0 * (values[i + 1] - 2.0 * values[i] + values[i - 1]);

        let mut curvature = vec![0.0_f32; n];
        curvature[1] = second_diff(1) / 6.0;
        curvature[n - 2] = second_diff(n - 2) / 6.0;

        // Interior block M[2..n-2], tridiagonal (1, 4, 1) with the known
        // boundary curvatures folded into the right-hand side.
        let unknowns = n.saturating_sub(4);
        if unknowns > 0 {
            let mut rhs: Vec<f32> = (2..n - 2).map(second_diff).collect();
            rhs[0] -= curvature[1];
            rhs[unknowns - 1] -= curvature[n - 2];

            let mut diag = vec![4.0_f32; unknowns];
            for i in 1..unknowns {
                let w = 1.0 / diag[i - 1];
                diag[i] -= w;
                rhs[i] -= w * rhs[i - 1];
            }
            rhs[unknowns - 1] /= diag[unknowns - 1];
            for i in (0..unknowns - 1).rev() {
                rhs[i] = (rhs[i] - rhs[i + 1]) / diag[i];
            }

            curvature[2..n - 2].copy_from_slice(&rhs);
        }

        curvature[0] = 2.0 * curvature[1] - curvature[2];
        curvature[n - 1] = 2.0 * curvature[n - 2] - curvature[n - 3];

        Self {
            values: values.to_vec(),
            curvature,
        }
    }

    /// Number of knots.
    #[inline]
    #[must_use]
    pub fn knots(&self) -> usize {
        self.values.len()
    }

    /// Evaluates the spline at `x`, clamped to the knot range.
    #[must_use]
    pub fn evaluate(&self, x: f32) -> f32 {
        let n = self.values.len();
        let x = x.clamp(0.0, (n - 1) as f32);

        let i = (x as usize).min(n - 2);
        let t = x - i as f32;
        let u = 1.0 - t;

        let (y0, y1) = (self.values[i], self.values[i + 1]);
        let (m0, m1) = (self.curvature[i], self.curvature[i + 1]);

        y0 * u + y1 * t + m0 * (u * u * u - u) / 6.0 + m1 * (t * t * t - t) / 6.0
    }
}

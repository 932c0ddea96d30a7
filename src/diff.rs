//! Numerical differentiation by finite differences.
//!
//! Useful when no analytic derivative is at hand.  [`FiniteDiff`] adapts a
//! value-only function so derivative based solvers can use it.

use crate::wrap::{RealDfEval, RealFnEval};

/// Finite difference formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    /// (f(x+h) - f(x)) / h, error O(h).
    Forward,
    /// (f(x+h) - f(x-h)) / 2h, error O(h^2).
    Centered,
}

/// Forward difference approximation of f'(x).
pub fn forward_difference<F>(f: &F, x: f64, h: f64) -> f64
where
    F: RealFnEval,
{
    (f.eval_f(x + h) - f.eval_f(x)) / h
}

/// Centered difference approximation of f'(x).
pub fn centered_difference<F>(f: &F, x: f64, h: f64) -> f64
where
    F: RealFnEval,
{
    (f.eval_f(x + h) - f.eval_f(x - h)) / (2.0 * h)
}

/// Step size balancing truncation against rounding error.
///
/// sqrt(eps) for forward and cbrt(eps) for centered differences, scaled by
/// the magnitude of `x` once it exceeds one.
pub fn default_step(scheme: Scheme, x: f64) -> f64 {
    let scale = x.abs().max(1.0);
    match scheme {
        Scheme::Forward => f64::EPSILON.sqrt() * scale,
        Scheme::Centered => f64::EPSILON.cbrt() * scale,
    }
}

/// Wraps a function to implement RealDfEval through finite differences.
pub struct FiniteDiff<'a, F>
where
    F: 'a + RealFnEval,
{
    f: &'a F,
    scheme: Scheme,
    step: Option<f64>,
}

impl<'a, F> FiniteDiff<'a, F>
where
    F: 'a + RealFnEval,
{
    /// Uses [`default_step`] at every point.
    pub fn new(f: &'a F, scheme: Scheme) -> FiniteDiff<'a, F> {
        FiniteDiff {
            f,
            scheme,
            step: None,
        }
    }

    /// Uses the fixed step `h` at every point.
    pub fn with_step(f: &'a F, scheme: Scheme, h: f64) -> FiniteDiff<'a, F> {
        assert!(h > 0.0);
        assert!(h.is_finite());
        FiniteDiff {
            f,
            scheme,
            step: Some(h),
        }
    }
}

impl<'a, F> RealFnEval for FiniteDiff<'a, F>
where
    F: 'a + RealFnEval,
{
    fn eval_f(&self, x: f64) -> f64 {
        self.f.eval_f(x)
    }
}

impl<'a, F> RealDfEval for FiniteDiff<'a, F>
where
    F: 'a + RealFnEval,
{
    fn eval_df(&self, x: f64) -> f64 {
        let h = self.step.unwrap_or_else(|| default_step(self.scheme, x));
        match self.scheme {
            Scheme::Forward => forward_difference(self.f, x, h),
            Scheme::Centered => centered_difference(self.f, x, h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::RealFn;

    use approx::assert_abs_diff_eq;

    #[test]
    fn test_exact_on_lines() {
        let in_f = |x: f64| 3.0 * x - 1.0;
        let f = RealFn::new(&in_f);
        assert_abs_diff_eq!(forward_difference(&f, 2.0, 0.5), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(centered_difference(&f, 2.0, 0.5), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centered_beats_forward() {
        let in_f = |x: f64| x.sin();
        let f = RealFn::new(&in_f);
        let x: f64 = 1.0;
        let exact = x.cos();

        for &h in &[1e-1, 1e-2, 1e-3] {
            let e_fwd = (forward_difference(&f, x, h) - exact).abs();
            let e_ctr = (centered_difference(&f, x, h) - exact).abs();
            assert!(e_ctr < e_fwd, "h={h}: centered {e_ctr} vs forward {e_fwd}");
        }
    }

    #[test]
    fn test_forward_error_first_order() {
        // shrinking h tenfold shrinks error roughly tenfold
        let in_f = |x: f64| x.exp();
        let f = RealFn::new(&in_f);
        let e1 = (forward_difference(&f, 0.0, 1e-2) - 1.0).abs();
        let e2 = (forward_difference(&f, 0.0, 1e-3) - 1.0).abs();
        let ratio = e1 / e2;
        assert!(ratio > 8.0 && ratio < 12.0, "ratio={}", ratio);
    }

    #[test]
    fn test_centered_error_second_order() {
        let in_f = |x: f64| x.exp();
        let f = RealFn::new(&in_f);
        let e1 = (centered_difference(&f, 0.0, 1e-2) - 1.0).abs();
        let e2 = (centered_difference(&f, 0.0, 1e-3) - 1.0).abs();
        let ratio = e1 / e2;
        assert!(ratio > 80.0 && ratio < 120.0, "ratio={}", ratio);
    }

    #[test]
    fn test_default_step_scales() {
        assert_eq!(default_step(Scheme::Forward, 0.5), f64::EPSILON.sqrt());
        assert_eq!(
            default_step(Scheme::Centered, -100.0),
            100.0 * f64::EPSILON.cbrt()
        );
    }

    #[test]
    fn test_finite_diff_wrapper() {
        let in_f = |x: f64| x * x * x;
        let f = RealFn::new(&in_f);

        let fd = FiniteDiff::new(&f, Scheme::Centered);
        assert_eq!(fd.eval_f(2.0), 8.0);
        assert_abs_diff_eq!(fd.eval_df(2.0), 12.0, epsilon = 1e-8);

        let fd = FiniteDiff::with_step(&f, Scheme::Forward, 1e-3);
        assert_abs_diff_eq!(fd.eval_df(2.0), 12.0, epsilon = 1e-2);
    }

    #[test]
    #[should_panic]
    fn test_finite_diff_zero_step() {
        let in_f = |x: f64| x;
        let f = RealFn::new(&in_f);
        let _ = FiniteDiff::with_step(&f, Scheme::Forward, 0.0);
    }
}

//! Brackets: intervals expected to hold a sign change.

use thiserror::Error;

use crate::wrap::RealFnEval;

/// Errors from constructing [`Bounds`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are NaN or infinite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal.
    #[error("zero width")]
    ZeroWidth,
}

/// Bounds represents the closed interval [a,b] with a < b.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub(crate) a: f64,
    pub(crate) b: f64,
}

impl Bounds {
    /// Validates the endpoints, swapping them if given in reverse order.
    pub fn new(a: f64, b: f64) -> Result<Bounds, BracketError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth);
        }

        if a < b {
            Ok(Bounds { a, b })
        } else {
            Ok(Bounds { a: b, b: a })
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Midpoint, finite for any finite bounds.
    pub fn middle(&self) -> f64 {
        0.5 * self.a + 0.5 * self.b
    }

    /// Width `b - a`.  Overflows to infinity for bounds wider than `f64::MAX`.
    pub fn size(&self) -> f64 {
        self.b - self.a
    }

    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }
}

/// Whether signs of values differ, properly handling floating point underflow.
///
/// Zero counts as positive, negative zero as negative.
pub fn is_sign_change(lhs: f64, rhs: f64) -> bool {
    lhs.signum() != rhs.signum()
}

/// Scans interval [a,b] and emits the first bracket containing a sign change.
/// For a continuous function the Intermediate Value Theorem guarantees that the
/// bracket contains at least one root.  Without a continuity guarantee, it
/// might be a singularity instead.
///
/// # Panics
///
/// If `window_size` is not strictly positive.
pub fn first_bracket<F>(f: &F, bounds: &Bounds, window_size: f64) -> Option<Bounds>
where
    F: RealFnEval,
{
    BracketGenerator::new(f, *bounds, window_size).next()
}

/// Iterator over every window of `window_size` inside `bounds` that holds a
/// sign change, left to right.  The final window may be narrower.
pub struct BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    f: &'a F,
    bounds: Bounds,
    window_size: f64,
    win: Bounds,
    f_a: f64,
}

impl<'a, F> BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    /// # Panics
    ///
    /// If `window_size` is not strictly positive.
    pub fn new(f: &'a F, bounds: Bounds, window_size: f64) -> BracketGenerator<'a, F> {
        assert!(window_size > 0.0);

        let win = Bounds {
            a: bounds.a,
            b: (bounds.a + window_size).min(bounds.b),
        };
        let f_a = f.eval_f(win.a);
        BracketGenerator {
            f,
            bounds,
            window_size,
            win,
            f_a,
        }
    }
}

impl<'a, F> Iterator for BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    type Item = Bounds;

    fn next(&mut self) -> Option<Bounds> {
        // second test stops windows too small to advance at this magnitude
        while self.win.a < self.bounds.b && self.win.a < self.win.b {
            let found = self.win;
            let f_b = self.f.eval_f(found.b);
            let sign_change = is_sign_change(self.f_a, f_b);

            self.f_a = f_b;
            self.win.a = self.win.b;
            self.win.b = (self.win.b + self.window_size).min(self.bounds.b);

            // found root or singularity
            if sign_change {
                log::trace!("sign change in [{}, {}]", found.a, found.b);
                return Some(found);
            }
        }
        None
    }
}

//! Root finding algorithms.
//!
//! Functions typically have to be wrapped before use.  See the `wrap` module
//! for how to do this.
//!
//! Custom convergence criteria can be supplied to Newton-Raphson.  Canned ones
//! exist in the `convergence` module.

mod config;
mod driver;
mod solution;

pub use self::config::{BisectionConfig, NewtonConfig};
pub use self::solution::{Solution, Status};

use thiserror::Error;

use self::driver::iterative_root_find;
use crate::bracket::{is_sign_change, Bounds};
use crate::convergence::{IsConverged, Residual};
use crate::history::{History, Iterate};
use crate::wrap::{RealDfEval, RealFnEval};

/// Root finding error conditions.
///
/// To help with diagnostics, these errors carry the last relevant `x`
/// position.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootError {
    /// Function has the same sign at both ends of the bracket.
    #[error("no sign change in bracket: f({a})={f_a}, f({b})={f_b}")]
    InvalidBracket { a: f64, b: f64, f_a: f64, f_b: f64 },

    /// Derivative went to zero, or so close to zero that the step dwarfs the
    /// iterate, for a method that depends on it to determine the next step.
    #[error("stationary derivative at x = {x} on iteration {iteration}")]
    StationaryDerivative { x: f64, iteration: usize },

    /// The derivative evaluated to NaN or infinity.
    #[error("non-finite derivative {derivative} at x = {x}")]
    NonFiniteDerivative { x: f64, derivative: f64 },

    /// The function evaluated to NaN or infinity.
    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    /// The initial guess is NaN or infinite.
    #[error("non-finite starting point {x}")]
    NonFiniteStart { x: f64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}

/// Newton steps longer than this many times max(|x|, 1) are taken to come
/// from a derivative that is zero for all practical purposes.
const MAX_STEP_SCALE: f64 = 1.0 / f64::EPSILON;

/// Root finding using Newton-Raphson.
///
/// The `start` indicates the initial guess.  For guesses sufficiently close to
/// a simple root this algorithm has quadratic convergence.  Near a root of
/// multiplicity m it slows to linear with ratio (m-1)/m, and far from a root
/// it may not converge at all; the iteration cap is always honored.
///
/// This algorithm requires the first derivative of f(x).  If an analytic
/// derivative is not available, wrap the function in `diff::FiniteDiff`.
///
/// Stops once |f(x)| < `config.residual_tol`.
pub fn newton_raphson<F>(f: &F, start: f64, config: &NewtonConfig) -> Result<Solution, RootError>
where
    F: RealDfEval,
{
    let finish = residual_criterion(config)?;
    newton_raphson_until(f, start, &finish, config, None)
}

/// Same as [`newton_raphson`], appending every iterate to `history`.
pub fn newton_raphson_traced<F>(
    f: &F,
    start: f64,
    config: &NewtonConfig,
    history: &mut History,
) -> Result<Solution, RootError>
where
    F: RealDfEval,
{
    let finish = residual_criterion(config)?;
    newton_raphson_until(f, start, &finish, config, Some(history))
}

/// Newton-Raphson with a caller supplied convergence criterion.
///
/// `config.residual_tol` is ignored in favor of `finish`.
pub fn newton_raphson_until<F, C>(
    f: &F,
    start: f64,
    finish: &C,
    config: &NewtonConfig,
    history: Option<&mut History>,
) -> Result<Solution, RootError>
where
    F: RealDfEval,
    C: IsConverged,
{
    config
        .validate_derivative_tol()
        .map_err(|reason| RootError::InvalidConfig { reason })?;

    log::debug!("newton-raphson from x={}", start);
    let derivative_tol = config.derivative_tol;
    let iterate = |x: f64, f_x: f64, df_x: f64, it: usize| {
        nr_iteration(x, f_x, df_x, it, derivative_tol)
    };
    iterative_root_find(f, &iterate, start, finish, config.max_iters, history)
}

fn residual_criterion(config: &NewtonConfig) -> Result<Residual, RootError> {
    config
        .validate_residual_tol()
        .map_err(|reason| RootError::InvalidConfig { reason })?;
    Ok(Residual::new(config.residual_tol))
}

/// Evaluate a single iteration for Newton's method given f(x) and df(x).
/// Returns an error if the derivative is non-finite or vanishes.  Returns
/// x_new otherwise.
fn nr_iteration(
    x: f64,
    f_x: f64,
    denom: f64,
    iteration: usize,
    derivative_tol: f64,
) -> Result<f64, RootError> {
    if !denom.is_finite() {
        return Err(RootError::NonFiniteDerivative {
            x,
            derivative: denom,
        });
    }
    if denom.abs() <= derivative_tol {
        return Err(RootError::StationaryDerivative { x, iteration });
    }

    // tiny derivative flings the iterate far beyond its own scale
    let step = f_x / denom;
    let x_new = x - step;
    if !x_new.is_finite() || step.abs() > MAX_STEP_SCALE * x.abs().max(1.0) {
        return Err(RootError::StationaryDerivative { x, iteration });
    }
    Ok(x_new)
}

/// Root finding via Bisection Method.
///
/// It always converges given a valid starting bracket, but the speed of
/// convergence is linear: the bracket halves every step.  Returns the midpoint
/// of the first bracket narrower than `config.tol`.
///
/// The bracket must hold a sign change.  Roots of even multiplicity, such as
/// x=1 for (x-1)^2, do not produce one and are rejected as
/// `RootError::InvalidBracket` rather than bisected toward a non-root.  An
/// endpoint that is an exact root is returned as is.
pub fn bisection<F>(f: &F, bounds: &Bounds, config: &BisectionConfig) -> Result<Solution, RootError>
where
    F: RealFnEval,
{
    bisect(f, bounds, config, None)
}

/// Same as [`bisection`], appending every midpoint and the bracket it split to
/// `history`.  The final midpoint is included.
pub fn bisection_traced<F>(
    f: &F,
    bounds: &Bounds,
    config: &BisectionConfig,
    history: &mut History,
) -> Result<Solution, RootError>
where
    F: RealFnEval,
{
    bisect(f, bounds, config, Some(history))
}

fn bisect<F>(
    f: &F,
    bounds: &Bounds,
    config: &BisectionConfig,
    mut history: Option<&mut History>,
) -> Result<Solution, RootError>
where
    F: RealFnEval,
{
    config
        .validate()
        .map_err(|reason| RootError::InvalidConfig { reason })?;

    let mut window: Bounds = *bounds;
    let mut f_a = finite_residual(window.a, f.eval_f(window.a))?;
    let f_b = finite_residual(window.b, f.eval_f(window.b))?;

    // root sits on an endpoint
    if f_a == 0.0 {
        return Ok(Solution::new(Status::Converged, window.a, f_a, 0));
    }
    if f_b == 0.0 {
        return Ok(Solution::new(Status::Converged, window.b, f_b, 0));
    }

    // ensure we started with valid bracket
    if !is_sign_change(f_a, f_b) {
        return Err(RootError::InvalidBracket {
            a: window.a,
            b: window.b,
            f_a,
            f_b,
        });
    }

    log::debug!("bisection on [{}, {}]", window.a, window.b);
    let mut it = 0;
    loop {
        let mid = window.middle();
        let f_mid = finite_residual(mid, f.eval_f(mid))?;

        if let Some(h) = history.as_deref_mut() {
            h.push(Iterate {
                x: mid,
                residual: f_mid,
                bracket: Some(window),
            });
        }
        log::trace!("[{}, {}] mid={} f(mid)={}", window.a, window.b, mid, f_mid);

        // convergence criteria
        if window.size() < config.tol || f_mid == 0.0 {
            log::debug!("bisection converged to x={} after {} halvings", mid, it);
            return Ok(Solution::new(Status::Converged, mid, f_mid, it));
        }

        // no representable point strictly inside the bracket
        if mid <= window.a || mid >= window.b {
            log::warn!(
                "bisection stalled at width {} above tol {}",
                window.size(),
                config.tol
            );
            return Ok(Solution::new(Status::Stalled, mid, f_mid, it));
        }

        if it == config.max_iters {
            log::warn!("bisection hit {} halvings", config.max_iters);
            return Ok(Solution::new(Status::MaxIters, mid, f_mid, it));
        }

        if is_sign_change(f_a, f_mid) {
            window.b = mid;
        } else {
            window.a = mid;
            f_a = f_mid;
        }
        it += 1;
    }
}

fn finite_residual(x: f64, residual: f64) -> Result<f64, RootError> {
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(RootError::NonFiniteResidual { x, residual })
    }
}

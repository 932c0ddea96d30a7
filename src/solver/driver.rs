use super::{RootError, Solution, Status};
use crate::convergence::IsConverged;
use crate::history::{History, Iterate};
use crate::wrap::RealDfEval;

/// Driver for iterative root finders.
///
/// Allows for arbitrary iteration functions and converge criteria.  The user
/// function 'f' is kept compatible with the iteration routine using trait
/// bounds defined in 'wrap' module.
///
/// Value and derivative come from a single `eval_f_df` call per point.  The
/// iteration function receives `(x, f(x), df(x), iteration)` and returns the
/// next x.  Convergence is checked at every point before stepping, so a start
/// that already satisfies `finish` costs no steps.  After `max_iter` steps the
/// last point is returned with `Status::MaxIters`.
pub fn iterative_root_find<F, I, C>(
    f: &F,
    iterate: &I,
    start: f64,
    finish: &C,
    max_iter: usize,
    mut history: Option<&mut History>,
) -> Result<Solution, RootError>
where
    F: RealDfEval,
    I: Fn(f64, f64, f64, usize) -> Result<f64, RootError>,
    C: IsConverged,
{
    if !start.is_finite() {
        return Err(RootError::NonFiniteStart { x: start });
    }

    let mut x_pre = None;
    let mut x_cur = start;
    let mut it = 0;

    loop {
        let (f_cur, df_cur) = f.eval_f_df(x_cur);
        if !f_cur.is_finite() {
            return Err(RootError::NonFiniteResidual {
                x: x_cur,
                residual: f_cur,
            });
        }

        if let Some(h) = history.as_deref_mut() {
            h.push(Iterate {
                x: x_cur,
                residual: f_cur,
                bracket: None,
            });
        }
        log::trace!("iteration {}: x={} f(x)={}", it, x_cur, f_cur);

        // check convergence
        if finish.is_converged(x_pre, x_cur, f_cur) {
            log::debug!("converged to x={} after {} iterations", x_cur, it);
            return Ok(Solution::new(Status::Converged, x_cur, f_cur, it));
        }

        // stay inside maximum iteration count
        if it == max_iter {
            log::warn!(
                "no convergence within {} iterations, last x={} f(x)={}",
                max_iter,
                x_cur,
                f_cur
            );
            return Ok(Solution::new(Status::MaxIters, x_cur, f_cur, it));
        }

        // invoke iteration method
        x_pre = Some(x_cur);
        x_cur = iterate(x_cur, f_cur, df_cur, it)?;
        it += 1;
    }
}

/// How a solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Met its convergence criterion.
    Converged,
    /// Used up the iteration cap without converging.
    MaxIters,
    /// Bracket can no longer be halved in f64 before reaching tolerance.
    Stalled,
}

/// Result of a root solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub status: Status,
    /// Root estimate.
    pub x: f64,
    /// f(x) at the root estimate.
    pub residual: f64,
    /// Number of halvings or Newton updates performed.
    pub iters: usize,
}

impl Solution {
    pub(crate) fn new(status: Status, x: f64, residual: f64, iters: usize) -> Solution {
        Solution {
            status,
            x,
            residual,
            iters,
        }
    }

    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

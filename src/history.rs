//! Iterate history for post-hoc error analysis.
//!
//! Solvers append to a caller-owned `History` when given one.  Nothing here
//! affects the solve itself.

use std::slice;

use crate::bracket::Bounds;

/// One solver step.
#[derive(Clone, Debug, PartialEq)]
pub struct Iterate {
    /// Point evaluated at this step (the midpoint, for bisection).
    pub x: f64,
    /// f(x).
    pub residual: f64,
    /// Bracket the point was taken from.  Bisection only.
    pub bracket: Option<Bounds>,
}

/// Append-only record of iterates in the order a solver produced them.
#[derive(Clone, Debug, Default)]
pub struct History {
    iterates: Vec<Iterate>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub(crate) fn push(&mut self, iterate: Iterate) {
        self.iterates.push(iterate);
    }

    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Iterate> {
        self.iterates.iter()
    }

    pub fn last(&self) -> Option<&Iterate> {
        self.iterates.last()
    }

    pub fn clear(&mut self) {
        self.iterates.clear();
    }

    /// The evaluated points, in order.
    pub fn xs(&self) -> Vec<f64> {
        self.iterates.iter().map(|it| it.x).collect()
    }

    /// Absolute error `|x_k - root|` of every iterate.
    pub fn errors(&self, root: f64) -> Vec<f64> {
        self.iterates.iter().map(|it| (it.x - root).abs()).collect()
    }

    /// Successive error ratios `e_{k+1} / e_k`.
    ///
    /// A q-linear method settles on a constant below one (0.5 for bisection).
    /// Pairs whose earlier error is exactly zero are skipped.
    pub fn ratios(&self, root: f64) -> Vec<f64> {
        self.errors(root)
            .windows(2)
            .filter(|e| e[0] > 0.0)
            .map(|e| e[1] / e[0])
            .collect()
    }

    /// Estimated order of convergence from three consecutive errors:
    ///
    /// `q ≈ ln(e_{k+1} / e_k) / ln(e_k / e_{k-1})`
    ///
    /// Near a simple root Newton-Raphson gives values near 2.  Triples with a
    /// zero error or no change are skipped.
    pub fn orders(&self, root: f64) -> Vec<f64> {
        self.errors(root)
            .windows(3)
            .filter(|e| e.iter().all(|&v| v > 0.0) && e[1] != e[0])
            .map(|e| (e[2] / e[1]).ln() / (e[1] / e[0]).ln())
            .collect()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Iterate;
    type IntoIter = slice::Iter<'a, Iterate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn history_of(xs: &[f64]) -> History {
        let mut h = History::new();
        for &x in xs {
            h.push(Iterate {
                x,
                residual: 0.0,
                bracket: None,
            });
        }
        h
    }

    #[test]
    fn test_empty_history() {
        let h = History::new();
        assert!(h.is_empty());
        assert!(h.last().is_none());
        assert!(h.ratios(0.0).is_empty());
        assert!(h.orders(0.0).is_empty());
    }

    #[test]
    fn test_errors_and_xs() {
        let h = history_of(&[3.0, 2.5, 1.75]);
        assert_eq!(h.len(), 3);
        assert_eq!(h.xs(), vec![3.0, 2.5, 1.75]);
        assert_eq!(h.errors(2.0), vec![1.0, 0.5, 0.25]);
        assert_eq!(h.last().map(|it| it.x), Some(1.75));
    }

    #[test]
    fn test_linear_ratios() {
        let h = history_of(&[1.0, 0.5, 0.25, 0.125]);
        for r in h.ratios(0.0) {
            assert_relative_eq!(r, 0.5);
        }
    }

    #[test]
    fn test_ratios_skip_exact_hit() {
        let h = history_of(&[1.0, 0.0, 0.0]);
        assert_eq!(h.ratios(0.0), vec![0.0]);
    }

    #[test]
    fn test_quadratic_orders() {
        let h = history_of(&[1e-1, 1e-2, 1e-4, 1e-8]);
        let orders = h.orders(0.0);
        assert_eq!(orders.len(), 2);
        for q in orders {
            assert_relative_eq!(q, 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_clear_and_iterate() {
        let mut h = history_of(&[1.0, 2.0]);
        let total: f64 = (&h).into_iter().map(|it| it.x).sum();
        assert_eq!(total, 3.0);

        h.clear();
        assert!(h.is_empty());
    }
}

//! Root finding for real scalar functions.
//!
//! Two solvers are provided: the bisection method, which needs only function
//! values and a bracket with a sign change, and Newton-Raphson, which needs a
//! starting guess and the first derivative.
//!
//! Functions typically have to be wrapped before use.  See the `wrap` module
//! for how to do this, and the `diff` module for running Newton-Raphson
//! without an analytic derivative.
//!
//! Failures such as an invalid bracket or a vanishing derivative come back as
//! `RootError` values; nothing panics on bad numerics.
//!
//! # Examples
//! Using Newton-Raphson:
//!
//! ```
//! use rootsolve::solver::{newton_raphson, NewtonConfig, Status};
//! use rootsolve::wrap::RealFnPair;
//!
//! // function and its derivative in one go
//! let in_f = |x: f64| (-x*x + 2.0*x + 1.0, -2.0*x + 2.0);
//! let f = RealFnPair::new(&in_f);
//!
//! // stop once |f(x)| < 1e-12, at most 100 iterations
//! let config = NewtonConfig::default();
//!
//! let sol = newton_raphson(&f, 3.0, &config).expect("root");
//! assert_eq!(sol.status, Status::Converged);
//!
//! // root at x=1+sqrt(2)
//! assert!((sol.x-2.41421356237).abs() < 1e-9);
//! ```
//!
//! Using Bisection Method:
//!
//! ```
//! use rootsolve::bracket::Bounds;
//! use rootsolve::solver::{bisection, BisectionConfig};
//! use rootsolve::wrap::RealFn;
//!
//! // function... no derivatives needed!
//! let in_f = |x: f64| -x*x + 2.0*x + 1.0;
//! let f = RealFn::new(&in_f);
//!
//! let bounds = Bounds::new(2.0, 3.0).expect("bounds");
//! let config = BisectionConfig { tol: 1e-10, ..BisectionConfig::default() };
//! let sol = bisection(&f, &bounds, &config).expect("root");
//!
//! // root at x=1+sqrt(2)
//! assert!((sol.x-2.41421356237).abs() < 1e-9);
//! ```
//!
//! Rejecting a bracket without a sign change:
//!
//! ```
//! use rootsolve::bracket::Bounds;
//! use rootsolve::solver::{bisection, BisectionConfig, RootError};
//! use rootsolve::wrap::RealFn;
//!
//! // double root at x=1 never crosses zero
//! let in_f = |x: f64| (x - 1.0) * (x - 1.0);
//! let f = RealFn::new(&in_f);
//!
//! let bounds = Bounds::new(0.0, 2.0).expect("bounds");
//! let res = bisection(&f, &bounds, &BisectionConfig::default());
//! assert!(matches!(res, Err(RootError::InvalidBracket { .. })));
//! ```

pub mod bracket;
pub mod convergence;
pub mod diff;
pub mod history;
pub mod solver;
pub mod wrap;

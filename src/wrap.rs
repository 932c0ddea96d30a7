/// Trait evaluating: f(x) with x in R^1.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Trait evaluating the derivative: df(x) with x in R^1.
pub trait RealDfEval: RealFnEval {
    fn eval_df(&self, x: f64) -> f64;

    /// Evaluate value and derivative together.  Wrappers backed by a single
    /// callable override this to avoid calling it twice.
    fn eval_f_df(&self, x: f64) -> (f64, f64) {
        (self.eval_f(x), self.eval_df(x))
    }
}

/// Wraps function to implement RealFnEval.
pub struct RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub f: &'a F,
}

impl<'a, F> RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub fn new(f: &'a F) -> RealFn<'a, F> {
        RealFn { f }
    }
}

impl<'a, F> RealFnEval for RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// Wraps functions to implement RealFnEval and RealDfEval.
pub struct RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    pub f: &'a F1,
    pub df: &'a F2,
}

impl<'a, F1, F2> RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    pub fn new(f: &'a F1, df: &'a F2) -> RealFnAndFirst<'a, F1, F2> {
        RealFnAndFirst { f, df }
    }
}

impl<'a, F1, F2> RealFnEval for RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<'a, F1, F2> RealDfEval for RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    fn eval_df(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

/// Wraps a single function returning `(f(x), df(x))`.
///
/// This is the natural shape when value and derivative share work, e.g.
/// `|x| (x * x - 2.0, 2.0 * x)`.  The bisection method only looks at the
/// value half.
pub struct RealFnPair<'a, F>
where
    F: 'a + Fn(f64) -> (f64, f64),
{
    pub f: &'a F,
}

impl<'a, F> RealFnPair<'a, F>
where
    F: 'a + Fn(f64) -> (f64, f64),
{
    pub fn new(f: &'a F) -> RealFnPair<'a, F> {
        RealFnPair { f }
    }
}

impl<'a, F> RealFnEval for RealFnPair<'a, F>
where
    F: 'a + Fn(f64) -> (f64, f64),
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x).0
    }
}

impl<'a, F> RealDfEval for RealFnPair<'a, F>
where
    F: 'a + Fn(f64) -> (f64, f64),
{
    fn eval_df(&self, x: f64) -> f64 {
        (self.f)(x).1
    }

    fn eval_f_df(&self, x: f64) -> (f64, f64) {
        (self.f)(x)
    }
}

/// Configuration for the bisection method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionConfig {
    /// Stop once the bracket is narrower than this.
    pub tol: f64,
    /// Hard cap on halvings.  The default is enough to collapse any finite
    /// f64 interval, so it only matters when lowered.
    pub max_iters: usize,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            tol: 1e-5,
            max_iters: 2100,
        }
    }
}

impl BisectionConfig {
    /// Validates that the tolerance is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns the reason the config is unusable.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err("tol must be finite and positive");
        }
        Ok(())
    }
}

/// Configuration for Newton-Raphson.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonConfig {
    /// Stop once |f(x)| is below this.
    pub residual_tol: f64,
    /// Derivatives with magnitude at or below this are treated as zero.  A
    /// derivative small enough to step more than 1/eps times the iterate's
    /// scale is treated as zero regardless.
    pub derivative_tol: f64,
    /// Maximum number of Newton updates.
    pub max_iters: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            residual_tol: 1e-12,
            derivative_tol: 0.0,
            max_iters: 100,
        }
    }
}

impl NewtonConfig {
    /// Validates that all tolerances are finite and in range.
    ///
    /// # Errors
    ///
    /// Returns the reason the config is unusable.
    pub fn validate(&self) -> Result<(), &'static str> {
        self.validate_residual_tol()?;
        self.validate_derivative_tol()
    }

    pub(crate) fn validate_residual_tol(&self) -> Result<(), &'static str> {
        if !self.residual_tol.is_finite() || self.residual_tol <= 0.0 {
            return Err("residual_tol must be finite and positive");
        }
        Ok(())
    }

    pub(crate) fn validate_derivative_tol(&self) -> Result<(), &'static str> {
        if !self.derivative_tol.is_finite() || self.derivative_tol < 0.0 {
            return Err("derivative_tol must be finite and non-negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(BisectionConfig::default().validate().is_ok());
        assert!(NewtonConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_bisection_tol() {
        for tol in [0.0, -1e-5, f64::NAN, f64::INFINITY] {
            let config = BisectionConfig {
                tol,
                ..BisectionConfig::default()
            };
            assert!(config.validate().is_err(), "tol={tol} accepted");
        }
    }

    #[test]
    fn rejects_bad_newton_tols() {
        let config = NewtonConfig {
            residual_tol: 0.0,
            ..NewtonConfig::default()
        };
        assert!(config.validate().is_err());

        let config = NewtonConfig {
            derivative_tol: -1.0,
            ..NewtonConfig::default()
        };
        assert!(config.validate().is_err());

        let config = NewtonConfig {
            derivative_tol: 1e-10,
            ..NewtonConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}

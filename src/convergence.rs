/// Decides when an iterative solver may stop.
///
/// `x_pre` is `None` on the first check, before any step has been taken.
pub trait IsConverged {
    fn is_converged(&self, x_pre: Option<f64>, x_cur: f64, f_cur: f64) -> bool;
}

/// Converged once successive iterates are closer than `epsilon_abs`.
pub struct SequenceDelta {
    epsilon_abs: f64,
}

impl SequenceDelta {
    pub fn new(epsilon_abs: f64) -> SequenceDelta {
        assert!(epsilon_abs > 0.0);
        assert!(epsilon_abs.is_finite());
        SequenceDelta { epsilon_abs }
    }
}

impl IsConverged for SequenceDelta {
    fn is_converged(&self, x_pre: Option<f64>, x_cur: f64, _f_cur: f64) -> bool {
        match x_pre {
            Some(x_pre) => (x_pre - x_cur).abs() < self.epsilon_abs,
            None => false,
        }
    }
}

/// Converged once the residual |f(x)| drops below `epsilon_abs`.
pub struct Residual {
    epsilon_abs: f64,
}

impl Residual {
    pub fn new(epsilon_abs: f64) -> Residual {
        assert!(epsilon_abs > 0.0);
        assert!(epsilon_abs.is_finite());
        Residual { epsilon_abs }
    }
}

impl IsConverged for Residual {
    fn is_converged(&self, _x_pre: Option<f64>, _x_cur: f64, f_cur: f64) -> bool {
        f_cur.abs() < self.epsilon_abs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64;

    #[test]
    fn test_sequence_delta_convergence() {
        // too far apart
        let c = SequenceDelta::new(1e-9);
        let x_0 = 10.2;
        assert_eq!(false, c.is_converged(Some(x_0), x_0 + 1e-8, 10.0));

        // just right
        assert_eq!(true, c.is_converged(Some(x_0), x_0 + 5e-10, 10.0));
    }

    #[test]
    fn test_sequence_delta_first_check() {
        let c = SequenceDelta::new(1e-9);
        assert_eq!(false, c.is_converged(None, 1.0, 0.0));
    }

    #[test]
    #[should_panic]
    fn test_sequence_delta_accuracy_zero() {
        let _ = SequenceDelta::new(0.0);
    }

    #[test]
    #[should_panic]
    fn test_sequence_delta_accuracy_negative() {
        let _ = SequenceDelta::new(-1.0);
    }

    #[test]
    #[should_panic]
    fn test_sequence_delta_accuracy_nan() {
        let _ = SequenceDelta::new(f64::NAN);
    }

    #[test]
    fn test_residual_convergence() {
        let c = Residual::new(1e-12);
        assert_eq!(false, c.is_converged(None, 1.0, 1e-11));
        assert_eq!(true, c.is_converged(None, 1.0, -1e-13));
        assert_eq!(true, c.is_converged(Some(0.0), 1.0, 0.0));
    }

    #[test]
    #[should_panic]
    fn test_residual_accuracy_infinite() {
        let _ = Residual::new(f64::INFINITY);
    }
}

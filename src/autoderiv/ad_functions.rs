//! # Elementary and auxiliary functions
//!
//! `exp`, `log`, `sin`, `cos`, `aux1`, `aux2` accept either a plain `f64` or a
//! differentiable quantity (owned or borrowed) through the `ADFunctions` trait.
//! For a plain number the result is a plain number; for a quantity the value is
//! computed by the scalar function and every partial is multiplied by the
//! derivative of the function at that value (chain rule):
//!
//! | f      | f'                |
//! |--------|-------------------|
//! | exp    | exp(x)            |
//! | log    | 1/x               |
//! | sin    | cos(x)            |
//! | cos    | -sin(x)           |
//! | aux1   | see aux_functions |
//! | aux2   | see aux_functions |
//!
//! # Example
//! ```
//! use RustedAutoDeriv::autoderiv::ad_var::ADVar;
//! use RustedAutoDeriv::autoderiv::ad_functions::{exp, sin};
//! let x = ADVar::var(0.0, 0);
//! let y = sin(&x) + exp(&x);
//! assert_eq!(y.get_val(), 1.0);
//! assert_eq!(y.get_deriv(0), 2.0);
//! assert_eq!(sin(0.0), 0.0);
//! ```

use crate::autoderiv::ad_errors::ADError;
use crate::autoderiv::ad_var::ADVar;
use crate::autoderiv::aux_functions::{aux1_deriv, aux1_value, aux2_deriv, aux2_value};
use log::warn;

pub trait ADFunctions {
    type Output;
    fn exp(self) -> Self::Output;
    /// natural logarithm, fails with `ADError::DomainError` outside its domain
    fn ln(self) -> Result<Self::Output, ADError>;
    fn sin(self) -> Self::Output;
    fn cos(self) -> Self::Output;
    /// x/sinh(x)
    fn aux1(self) -> Self::Output;
    /// 1/(1 + e^x)
    fn aux2(self) -> Self::Output;
}

impl ADFunctions for f64 {
    type Output = f64;

    fn exp(self) -> f64 {
        f64::exp(self)
    }
    /// log(0) is -inf (limit from the right), negative arguments are rejected
    fn ln(self) -> Result<f64, ADError> {
        if self < 0.0 {
            warn!("log of a negative number {}", self);
            return Err(ADError::DomainError(format!("log({})", self)));
        }
        Ok(f64::ln(self))
    }
    fn sin(self) -> f64 {
        f64::sin(self)
    }
    fn cos(self) -> f64 {
        f64::cos(self)
    }
    fn aux1(self) -> f64 {
        aux1_value(self)
    }
    fn aux2(self) -> f64 {
        aux2_value(self)
    }
}

impl<'a> ADFunctions for &'a ADVar {
    type Output = ADVar;

    fn exp(self) -> ADVar {
        let v = self.val.exp();
        ADVar::from_parts(v, self.deriv.scaled(v))
    }

    /// The domain is checked once on the value before the partials are touched:
    /// x < 0 is rejected; at x == 0 the logarithm is only defined as a limit from the
    /// right, so a negative partial (moving towards x < 0) is rejected as well.
    fn ln(self) -> Result<ADVar, ADError> {
        let x = self.val;
        if x < 0.0 {
            warn!("log of a negative quantity {}", self);
            return Err(ADError::DomainError(format!("log of negative value {}", x)));
        }
        if x == 0.0 {
            if let Some(&(i, d)) = self.deriv.iter().find(|&&(_, d)| d < 0.0) {
                warn!("log at zero with negative partial d/dx{} = {}", i, d);
                return Err(ADError::DomainError(format!(
                    "log at 0 with negative partial {} for variable {}",
                    d, i
                )));
            }
        }
        Ok(ADVar::from_parts(x.ln(), self.deriv.map_values(|d| d / x)))
    }

    fn sin(self) -> ADVar {
        ADVar::from_parts(self.val.sin(), self.deriv.scaled(self.val.cos()))
    }

    fn cos(self) -> ADVar {
        ADVar::from_parts(self.val.cos(), self.deriv.scaled(-self.val.sin()))
    }

    fn aux1(self) -> ADVar {
        ADVar::from_parts(aux1_value(self.val), self.deriv.scaled(aux1_deriv(self.val)))
    }

    fn aux2(self) -> ADVar {
        ADVar::from_parts(aux2_value(self.val), self.deriv.scaled(aux2_deriv(self.val)))
    }
}

impl ADFunctions for ADVar {
    type Output = ADVar;

    fn exp(self) -> ADVar {
        (&self).exp()
    }
    fn ln(self) -> Result<ADVar, ADError> {
        (&self).ln()
    }
    fn sin(self) -> ADVar {
        (&self).sin()
    }
    fn cos(self) -> ADVar {
        (&self).cos()
    }
    fn aux1(self) -> ADVar {
        (&self).aux1()
    }
    fn aux2(self) -> ADVar {
        (&self).aux2()
    }
}

pub fn exp<T: ADFunctions>(x: T) -> T::Output {
    ADFunctions::exp(x)
}

pub fn log<T: ADFunctions>(x: T) -> Result<T::Output, ADError> {
    ADFunctions::ln(x)
}

pub fn sin<T: ADFunctions>(x: T) -> T::Output {
    ADFunctions::sin(x)
}

pub fn cos<T: ADFunctions>(x: T) -> T::Output {
    ADFunctions::cos(x)
}

pub fn aux1<T: ADFunctions>(x: T) -> T::Output {
    ADFunctions::aux1(x)
}

pub fn aux2<T: ADFunctions>(x: T) -> T::Output {
    ADFunctions::aux2(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_forms() {
        assert_eq!(exp(0.0), 1.0);
        assert_eq!(sin(0.0), 0.0);
        assert_eq!(cos(0.0), 1.0);
        assert_eq!(log(1.0).unwrap(), 0.0);
        assert_eq!(log(0.0).unwrap(), f64::NEG_INFINITY);
        assert!(matches!(log(-1.0), Err(ADError::DomainError(_))));
        assert_eq!(aux1(0.0), 1.0);
        assert_relative_eq!(aux2(0.0), 0.5);
    }

    #[test]
    fn test_exp() {
        let x = ADVar::var(1.0, 0) * 2.0;
        let y = exp(&x);
        assert_relative_eq!(y.get_val(), 2.0_f64.exp());
        assert_relative_eq!(y.get_deriv(0), 2.0 * 2.0_f64.exp());
    }

    #[test]
    fn test_log() {
        let x = ADVar::var(2.0, 0);
        let y = log(&x).unwrap();
        assert_relative_eq!(y.get_val(), 2.0_f64.ln());
        assert_relative_eq!(y.get_deriv(0), 0.5);
    }

    #[test]
    fn test_log_domain() {
        assert!(matches!(
            log(ADVar::var(-1.0, 0)),
            Err(ADError::DomainError(_))
        ));
        // negative value is rejected even for a constant
        assert!(matches!(
            log(ADVar::constant(-1.0)),
            Err(ADError::DomainError(_))
        ));
        // zero approached from the left
        let x = -ADVar::var(0.0, 0);
        assert!(matches!(log(&x), Err(ADError::DomainError(_))));
        // zero approached from the right is the limit value
        let x = ADVar::var(0.0, 0);
        let y = log(&x).unwrap();
        assert_eq!(y.get_val(), f64::NEG_INFINITY);
        assert_eq!(y.get_deriv(0), f64::INFINITY);
    }

    #[test]
    fn test_sin_cos() {
        let x = ADVar::var(0.3, 0);
        let s = sin(&x);
        let c = cos(&x);
        assert_relative_eq!(s.get_val(), 0.3_f64.sin());
        assert_relative_eq!(s.get_deriv(0), 0.3_f64.cos());
        assert_relative_eq!(c.get_val(), 0.3_f64.cos());
        assert_relative_eq!(c.get_deriv(0), -(0.3_f64.sin()));
        // sin^2 + cos^2 = 1, derivative 0
        let one = &s * &s + &c * &c;
        assert_relative_eq!(one.get_val(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(one.get_deriv(0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_aux_on_quantities_scale_partials() {
        let x = ADVar::var(0.5, 0) + ADVar::var(0.0, 1) * 3.0;
        let y = aux1(&x);
        assert_relative_eq!(y.get_val(), aux1_value(0.5));
        assert_relative_eq!(y.get_deriv(0), aux1_deriv(0.5));
        assert_relative_eq!(y.get_deriv(1), 3.0 * aux1_deriv(0.5));
        let z = aux2(x);
        assert_relative_eq!(z.get_val(), aux2_value(0.5));
        assert_relative_eq!(z.get_deriv(1), 3.0 * aux2_deriv(0.5));
    }

    #[test]
    fn test_aux1_of_zero_quantity() {
        let y = aux1(ADVar::var(0.0, 2));
        assert_eq!(y.get_val(), 1.0);
        assert_eq!(y.get_deriv(2), 0.0);
    }
}

//! # Operator rules
//!
//! `+ - * /` and unary `-` for differentiable quantities, with the matching
//! differentiation rule:
//! - sum/difference rule: d(a ± b) = da ± db
//! - product rule: d(a*b) = b*da + a*db
//! - quotient rule: d(a/b) = (b*da - a*db)/b^2
//! - power of a constant exponent: d(a^c) = c*a^(c-1)*da
//!
//! Every operator is defined for two quantities and for a quantity mixed with a
//! plain `f64` on either side, by value or by reference. Two quantities go through
//! the merge-join of `SparseDeriv`; with a plain number the single derivative
//! vector is copied or scaled in one pass, since a number has no partials.

use crate::autoderiv::ad_errors::ADError;
use crate::autoderiv::ad_var::{ADVar, Operand};
use crate::autoderiv::sparse_deriv::SparseDeriv;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

////////////////////////////// QUANTITY (op) QUANTITY //////////////////////////////

impl<'a, 'b> Add<&'b ADVar> for &'a ADVar {
    type Output = ADVar;

    fn add(self, rhs: &'b ADVar) -> ADVar {
        let deriv = SparseDeriv::merge(&self.deriv, &rhs.deriv, self.val, rhs.val, |_, _, dx, dy| {
            dx + dy
        });
        ADVar::from_parts(self.val + rhs.val, deriv)
    }
}

impl<'a, 'b> Sub<&'b ADVar> for &'a ADVar {
    type Output = ADVar;

    fn sub(self, rhs: &'b ADVar) -> ADVar {
        let deriv = SparseDeriv::merge(&self.deriv, &rhs.deriv, self.val, rhs.val, |_, _, dx, dy| {
            dx - dy
        });
        ADVar::from_parts(self.val - rhs.val, deriv)
    }
}

impl<'a, 'b> Mul<&'b ADVar> for &'a ADVar {
    type Output = ADVar;

    fn mul(self, rhs: &'b ADVar) -> ADVar {
        let deriv = SparseDeriv::merge(&self.deriv, &rhs.deriv, self.val, rhs.val, |x, y, dx, dy| {
            y * dx + x * dy
        });
        ADVar::from_parts(self.val * rhs.val, deriv)
    }
}

impl<'a, 'b> Div<&'b ADVar> for &'a ADVar {
    type Output = ADVar;

    fn div(self, rhs: &'b ADVar) -> ADVar {
        let deriv = SparseDeriv::merge(&self.deriv, &rhs.deriv, self.val, rhs.val, |x, y, dx, dy| {
            (y * dx - x * dy) / (y * y)
        });
        ADVar::from_parts(self.val / rhs.val, deriv)
    }
}

////////////////////////////// QUANTITY (op) SCALAR ///////////////////////////////

impl<'a> Add<f64> for &'a ADVar {
    type Output = ADVar;

    fn add(self, rhs: f64) -> ADVar {
        ADVar::from_parts(self.val + rhs, self.deriv.clone())
    }
}

impl<'a> Sub<f64> for &'a ADVar {
    type Output = ADVar;

    fn sub(self, rhs: f64) -> ADVar {
        ADVar::from_parts(self.val - rhs, self.deriv.clone())
    }
}

impl<'a> Mul<f64> for &'a ADVar {
    type Output = ADVar;

    fn mul(self, rhs: f64) -> ADVar {
        ADVar::from_parts(self.val * rhs, self.deriv.scaled(rhs))
    }
}

impl<'a> Div<f64> for &'a ADVar {
    type Output = ADVar;

    fn div(self, rhs: f64) -> ADVar {
        ADVar::from_parts(self.val / rhs, self.deriv.map_values(|d| d / rhs))
    }
}

////////////////////////////// SCALAR (op) QUANTITY ///////////////////////////////

impl<'b> Add<&'b ADVar> for f64 {
    type Output = ADVar;

    fn add(self, rhs: &'b ADVar) -> ADVar {
        ADVar::from_parts(self + rhs.val, rhs.deriv.clone())
    }
}

impl<'b> Sub<&'b ADVar> for f64 {
    type Output = ADVar;

    fn sub(self, rhs: &'b ADVar) -> ADVar {
        ADVar::from_parts(self - rhs.val, rhs.deriv.neg())
    }
}

impl<'b> Mul<&'b ADVar> for f64 {
    type Output = ADVar;

    fn mul(self, rhs: &'b ADVar) -> ADVar {
        ADVar::from_parts(self * rhs.val, rhs.deriv.scaled(self))
    }
}

impl<'b> Div<&'b ADVar> for f64 {
    type Output = ADVar;

    // d(c/b) = -c*db/b^2
    fn div(self, rhs: &'b ADVar) -> ADVar {
        let b2 = rhs.val * rhs.val;
        ADVar::from_parts(self / rhs.val, rhs.deriv.map_values(|d| -self * d / b2))
    }
}

// owned operands reuse the borrowed rules
macro_rules! forward_owned_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<ADVar> for ADVar {
            type Output = ADVar;
            fn $method(self, rhs: ADVar) -> ADVar {
                $imp::$method(&self, &rhs)
            }
        }
        impl<'b> $imp<&'b ADVar> for ADVar {
            type Output = ADVar;
            fn $method(self, rhs: &'b ADVar) -> ADVar {
                $imp::$method(&self, rhs)
            }
        }
        impl<'a> $imp<ADVar> for &'a ADVar {
            type Output = ADVar;
            fn $method(self, rhs: ADVar) -> ADVar {
                $imp::$method(self, &rhs)
            }
        }
        impl $imp<f64> for ADVar {
            type Output = ADVar;
            fn $method(self, rhs: f64) -> ADVar {
                $imp::$method(&self, rhs)
            }
        }
        impl $imp<ADVar> for f64 {
            type Output = ADVar;
            fn $method(self, rhs: ADVar) -> ADVar {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);
forward_owned_binop!(Div, div);

impl<'a> Neg for &'a ADVar {
    type Output = ADVar;

    fn neg(self) -> ADVar {
        ADVar::from_parts(-self.val, self.deriv.neg())
    }
}

impl Neg for ADVar {
    type Output = ADVar;

    fn neg(self) -> ADVar {
        -&self
    }
}

impl Sum for ADVar {
    fn sum<I: Iterator<Item = ADVar>>(iter: I) -> ADVar {
        iter.fold(ADVar::constant(0.0), |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a ADVar> for ADVar {
    fn sum<I: Iterator<Item = &'a ADVar>>(iter: I) -> ADVar {
        iter.fold(ADVar::constant(0.0), |acc, x| &acc + x)
    }
}

////////////////////////////// UNARY RULES ////////////////////////////////////////

impl ADVar {
    /// a^c for a constant exponent c
    pub fn powf(&self, c: f64) -> ADVar {
        let coeff = c * self.val.powf(c - 1.0);
        ADVar::from_parts(self.val.powf(c), self.deriv.scaled(coeff))
    }

    /// a^e where e may be a plain number or a quantity. Only a plain number is supported,
    /// a quantity-valued exponent gives `ADError::UnsupportedOperation`.
    pub fn pow<E: Into<Operand>>(&self, exponent: E) -> Result<ADVar, ADError> {
        match exponent.into() {
            Operand::Scalar(c) => Ok(self.powf(c)),
            Operand::Quantity(e) => Err(ADError::UnsupportedOperation(format!(
                "power with a differentiable exponent ({})",
                e
            ))),
        }
    }

    /// |a|. Away from zero every partial is multiplied by sign(a).
    /// At a == 0 each partial d is replaced by sign(d)*d, i.e. by |d|.
    pub fn abs(&self) -> ADVar {
        let sign = signum(self.val);
        let deriv = if sign != 0.0 {
            self.deriv.scaled(sign)
        } else {
            self.deriv.map_values(|d| signum(d) * d)
        };
        ADVar::from_parts(self.val.abs(), deriv)
    }

    /// unary plus, an independent copy
    pub fn pos(&self) -> ADVar {
        self.clone()
    }
}

// sign with sign(0) = 0, unlike f64::signum
fn signum(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

//! # Differentiable quantity
//!
//! `ADVar` is a value together with its partial derivatives with respect to
//! every independent variable it depends on.
//!
//! ## Main Structures and Methods
//! - `ADVar::var(value, idx)` seeds an independent variable: its only partial is
//!   1.0 with respect to itself;
//! - `ADVar::constant(value)` has no partials at all;
//! - `get_val()`, `get_deriv(idx)`, `get_derivs()` read the quantity back;
//! - `deriv_eq()` and `deriv_approx_eq()` compare value and derivatives;
//! - `Operand` is the "plain number or quantity" sum type used where one
//!   entry point must accept both (see `ADVar::pow`).
//!
//! Quantities are value objects: operators (see `ad_ops`) borrow their
//! operands and build a new `ADVar`, operands are never modified.

use crate::autoderiv::ad_errors::ADError;
use crate::autoderiv::ad_settings::ADSettings;
use crate::autoderiv::sparse_deriv::SparseDeriv;
use approx::{AbsDiffEq, RelativeEq};
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Debug, Default)]
pub struct ADVar {
    pub(crate) val: f64,
    pub(crate) deriv: SparseDeriv,
}

impl ADVar {
    /// quantity with value `val`; `Some(idx)` makes it the independent variable number idx,
    /// `None` makes it a constant
    pub fn new(val: f64, idx: Option<usize>) -> ADVar {
        let deriv = match idx {
            Some(i) => SparseDeriv::seed(i),
            None => SparseDeriv::new(),
        };
        ADVar { val, deriv }
    }

    pub fn var(val: f64, idx: usize) -> ADVar {
        ADVar::new(val, Some(idx))
    }

    pub fn constant(val: f64) -> ADVar {
        ADVar::new(val, None)
    }

    /// same as `new` for any numeric type that converts to f64
    pub fn from_scalar<T: ToPrimitive + fmt::Debug>(
        val: T,
        idx: Option<usize>,
    ) -> Result<ADVar, ADError> {
        match val.to_f64() {
            Some(v) => Ok(ADVar::new(v, idx)),
            None => Err(ADError::ConversionFailure(format!(
                "{:?} cannot be converted to f64",
                val
            ))),
        }
    }

    pub(crate) fn from_parts(val: f64, deriv: SparseDeriv) -> ADVar {
        ADVar { val, deriv }
    }

    pub fn get_val(&self) -> f64 {
        self.val
    }

    pub fn set_val(&mut self, v: f64) {
        self.val = v;
    }

    /// partial derivative with respect to variable `idx` (0.0 if the quantity does not depend on it)
    pub fn get_deriv(&self, idx: usize) -> f64 {
        self.deriv.get(idx)
    }

    /// all tracked partials as (index, partial) pairs, ascending by index
    pub fn get_derivs(&self) -> &[(usize, f64)] {
        self.deriv.entries()
    }

    pub fn deriv(&self) -> &SparseDeriv {
        &self.deriv
    }

    pub fn deriv_vec(&self) -> Vec<(usize, f64)> {
        self.deriv.entries().to_vec()
    }

    pub fn is_constant(&self) -> bool {
        self.deriv.is_empty()
    }

    /// Exact equality: same value and every partial of `self - other` equal to zero.
    /// A partial that is absent on one side and an explicit 0.0 on the other compare equal.
    pub fn deriv_eq(&self, other: &ADVar) -> bool {
        if self.val != other.val {
            return false;
        }
        let diff = self - other;
        diff.deriv.iter().all(|&(_, d)| d == 0.0)
    }

    /// Approximate equality. The tolerance scale is the larger magnitude of the two values,
    /// multiplied by `tol` (1.0 if not given): the value difference and every partial of
    /// `self - other` must be strictly below it. Two zero-valued quantities never compare
    /// approximately equal because the scale collapses to zero.
    pub fn deriv_approx_eq(&self, other: &ADVar, tol: Option<f64>) -> bool {
        let scale = self.val.abs().max(other.val.abs()) * tol.unwrap_or(1.0);
        if !((self.val - other.val).abs() < scale) {
            return false;
        }
        let diff = self - other;
        diff.deriv.iter().all(|&(_, d)| d.abs() < scale)
    }

    /// `deriv_approx_eq` with the tolerance multiplier taken from settings
    pub fn approx_eq_with(&self, other: &ADVar, settings: &ADSettings) -> bool {
        self.deriv_approx_eq(other, Some(settings.approx_tol))
    }
}

impl fmt::Display for ADVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "value: {} deriv: {}", self.val, self.deriv)
    }
}

impl PartialEq for ADVar {
    fn eq(&self, other: &ADVar) -> bool {
        self.deriv_eq(other)
    }
}

/// comparison with a plain number looks at the value only
impl PartialEq<f64> for ADVar {
    fn eq(&self, other: &f64) -> bool {
        self.val == *other
    }
}

impl PartialOrd<f64> for ADVar {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.val.partial_cmp(other)
    }
}

impl ToPrimitive for ADVar {
    fn to_i64(&self) -> Option<i64> {
        self.val.to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.val.to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.val)
    }
}

impl From<&ADVar> for f64 {
    fn from(x: &ADVar) -> f64 {
        x.val
    }
}

impl From<f64> for ADVar {
    fn from(val: f64) -> ADVar {
        ADVar::constant(val)
    }
}

impl AbsDiffEq for ADVar {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &ADVar, epsilon: f64) -> bool {
        self.val.abs_diff_eq(&other.val, epsilon)
            && SparseDeriv::zip_union(&self.deriv, &other.deriv)
                .all(|(_, da, db)| da.abs_diff_eq(&db, epsilon))
    }
}

impl RelativeEq for ADVar {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &ADVar, epsilon: f64, max_relative: f64) -> bool {
        self.val.relative_eq(&other.val, epsilon, max_relative)
            && SparseDeriv::zip_union(&self.deriv, &other.deriv)
                .all(|(_, da, db)| da.relative_eq(&db, epsilon, max_relative))
    }
}

/// Either a plain number or a differentiable quantity
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Quantity(ADVar),
}

impl Operand {
    pub fn from_scalar<T: ToPrimitive + fmt::Debug>(x: T) -> Result<Operand, ADError> {
        x.to_f64().map(Operand::Scalar).ok_or_else(|| {
            ADError::ConversionFailure(format!("{:?} cannot be converted to f64", x))
        })
    }

    /// parse a number written as text, e.g. "2.5" or "-1e-3"
    pub fn parse(s: &str) -> Result<Operand, ADError> {
        s.trim()
            .parse::<f64>()
            .map(Operand::Scalar)
            .map_err(|e| ADError::ConversionFailure(format!("'{}': {}", s, e)))
    }

    pub fn value(&self) -> f64 {
        match self {
            Operand::Scalar(v) => *v,
            Operand::Quantity(x) => x.val,
        }
    }

    /// the operand as a quantity, a scalar becomes a constant
    pub fn into_advar(self) -> ADVar {
        match self {
            Operand::Scalar(v) => ADVar::constant(v),
            Operand::Quantity(x) => x,
        }
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Operand {
        Operand::Scalar(v)
    }
}

impl From<ADVar> for Operand {
    fn from(x: ADVar) -> Operand {
        Operand::Quantity(x)
    }
}

impl From<&ADVar> for Operand {
    fn from(x: &ADVar) -> Operand {
        Operand::Quantity(x.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_seeding() {
        let a = ADVar::var(2.0, 3);
        assert_eq!(a.get_val(), 2.0);
        assert_eq!(a.get_deriv(3), 1.0);
        assert_eq!(a.get_deriv(0), 0.0);
        assert_eq!(a.get_deriv(4), 0.0);
        assert_eq!(a.get_derivs(), &[(3, 1.0)]);
        assert!(!a.is_constant());
    }

    #[test]
    fn test_constant() {
        let c = ADVar::constant(5.0);
        assert!(c.get_derivs().is_empty());
        assert!(c.is_constant());
        assert_eq!(ADVar::default().get_val(), 0.0);
        assert!(ADVar::default().is_constant());
    }

    #[test]
    fn test_from_scalar() {
        let a = ADVar::from_scalar(3_i32, Some(1)).unwrap();
        assert_eq!(a.get_val(), 3.0);
        assert_eq!(a.get_deriv(1), 1.0);
        let b = ADVar::from_scalar(7_u64, None).unwrap();
        assert!(b.is_constant());
    }

    #[test]
    fn test_set_val() {
        let mut a = ADVar::var(1.0, 0);
        a.set_val(4.0);
        assert_eq!(a.get_val(), 4.0);
        assert_eq!(a.get_deriv(0), 1.0);
    }

    #[test]
    fn test_deriv_eq() {
        let a = ADVar::var(1.0, 0);
        assert!(a.deriv_eq(&ADVar::var(1.0, 0)));
        assert!(!a.deriv_eq(&ADVar::var(1.0, 1)));
        assert!(!a.deriv_eq(&ADVar::var(2.0, 0)));
        assert_eq!(a, ADVar::var(1.0, 0));
        assert_ne!(a, ADVar::constant(1.0));
    }

    #[test]
    fn test_explicit_zero_equals_absent_partial() {
        // (x - x) keeps an explicit 0.0 entry for index 0
        let x = ADVar::var(1.0, 0);
        let zero = &x - &x;
        assert_eq!(zero.get_derivs(), &[(0, 0.0)]);
        assert!(zero.deriv_eq(&ADVar::constant(0.0)));
        assert!(ADVar::constant(0.0).deriv_eq(&zero));
    }

    #[test]
    fn test_deriv_approx_eq() {
        let a = ADVar::var(1.0, 0);
        let b = &a + 1e-9;
        assert!(a.deriv_approx_eq(&b, Some(1e-6)));
        assert!(!a.deriv_approx_eq(&(&a + 1e-3), Some(1e-6)));
        // bare magnitude rule: differences below max(|a|, |b|)
        assert!(a.deriv_approx_eq(&(&a * 1.5), None));
        assert!(!a.deriv_approx_eq(&ADVar::var(-1.0, 0), None));
        // partials are compared too
        assert!(!a.deriv_approx_eq(&ADVar::var(1.0, 1), Some(1e-6)));
    }

    #[test]
    fn test_approx_eq_collapses_at_zero_value() {
        let a = ADVar::constant(0.0);
        assert!(!a.deriv_approx_eq(&ADVar::constant(0.0), None));
    }

    #[test]
    fn test_display() {
        let a = ADVar::var(2.5, 1);
        assert_eq!(a.to_string(), "value: 2.5 deriv: [(1, 1)]");
    }

    #[test]
    fn test_compare_with_scalar_and_conversions() {
        let a = ADVar::var(2.7, 0);
        assert!(a > 0.0);
        assert!(a < 3.0);
        assert!(a == 2.7);
        assert_eq!(a.to_i64(), Some(2));
        assert_eq!(a.to_f64(), Some(2.7));
        assert_eq!(f64::from(&a), 2.7);
    }

    #[test]
    fn test_relative_eq_whole_quantity() {
        let a = ADVar::var(1.0, 0);
        let b = &(&a * 3.0) / 3.0;
        assert_relative_eq!(a, b, epsilon = 1e-14);
    }

    #[test]
    fn test_operand() {
        assert_eq!(Operand::parse(" 2.5 ").unwrap(), Operand::Scalar(2.5));
        assert!(matches!(
            Operand::parse("two"),
            Err(ADError::ConversionFailure(_))
        ));
        assert_eq!(Operand::from_scalar(4_i64).unwrap().value(), 4.0);
        let q: Operand = ADVar::var(1.0, 0).into();
        assert_eq!(q.value(), 1.0);
        assert!(Operand::Scalar(3.0).into_advar().is_constant());
    }
}

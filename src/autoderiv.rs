#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
//! # Automatic differentiation (forward mode)
//!
//! Every quantity carries its numerical value together with a sparse list of
//! its non-zero partial derivatives with respect to independent variables,
//! each of them identified by an integer index. Arithmetic and elementary
//! functions applied to such quantities apply the chain rule on the fly, no
//! symbolic step is involved.
//!
//! # Example
//! ```
//! use RustedAutoDeriv::autoderiv::ad_var::ADVar;
//! let a = ADVar::var(2.0, 0);
//! let b = ADVar::var(3.0, 1);
//! let c = &a * &b;
//! assert_eq!(c.get_val(), 6.0);
//! assert_eq!(c.get_deriv(0), 3.0);
//! assert_eq!(c.get_deriv(1), 2.0);
//! ```
//! Example 2 # elementary and auxiliary functions
//! ```
//! use RustedAutoDeriv::autoderiv::ad_var::ADVar;
//! use RustedAutoDeriv::autoderiv::ad_functions::{aux1, aux2, exp, log};
//! let x = ADVar::var(1.5, 0);
//! let y = exp(log(&x).unwrap());
//! assert!(y.deriv_approx_eq(&x, Some(1e-12)));
//! // plain numbers go through the same functions
//! assert_eq!(aux1(0.0), 1.0);
//! assert_eq!(aux2(-100.0), 1.0);
//! let z = aux2(&x);
//! println!("{}", z);
//! ```
/// ________________________________________________________________________________________________________________________________
/// ordered sparse vector of partial derivatives and the merge-join used by binary operators
pub mod sparse_deriv;
/// error kinds of the automatic differentiation module
pub mod ad_errors;
/// the differentiable quantity itself: value + sparse derivative vector
pub mod ad_var;
/// arithmetic operators (+ - * / neg abs pow) for quantities and plain numbers
pub mod ad_ops;
/// exp, log, sin, cos and the entry points of aux1/aux2 for scalars and quantities
pub mod ad_functions;
/// numerically stabilized auxiliary functions x/sinh(x) and 1/(1+e^x)
pub mod aux_functions;
/// settings (tolerance, logging) parsed from a toml document
pub mod ad_settings;

pub use ad_errors::ADError;
pub use ad_functions::{ADFunctions, aux1, aux2, cos, exp, log, sin};
pub use ad_var::{ADVar, Operand};
pub use sparse_deriv::SparseDeriv;

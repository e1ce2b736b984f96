//! # Auxiliary functions with calibrated break points
//!
//! ```text
//!                      x                   d          sinh(x) - x*cosh(x)
//!         Aux1(x) = -------               --Aux1(x) = -------------------
//!                   sinh(x)               dx              (sinh(x))^2
//!
//!                      1                   d              - e^x
//!         Aux2(x) = -------               --Aux2(x) = -----------
//!                   1 + e^x               dx          (1 + e^x)^2
//! ```
//! Evaluated literally these formulas overflow for large |x| (sinh and exp blow
//! up) and lose all significant digits near the origin (ratio of two vanishing
//! quantities). Each function is therefore split into bands along the real line,
//! and a different closed form is used in every band. The derivative has its own
//! band table since its unstable regions differ from those of the value.
//!
//! The break points are fixed calibration constants and must not be recomputed.
//! Every band is closed on its upper edge (`y <= BP`).

use log::debug;

pub const BP0_AUX1: f64 = -8.121635672643270e-03;
pub const BP1_AUX1: f64 = 8.121635672643270e-03;
pub const BP0_DAUX1: f64 = -2.710594333272793e-03;
pub const BP1_DAUX1: f64 = 2.710594333272793e-03;
pub const BP2_DAUX1: f64 = -2.918080926071920e+02;
pub const BP3_DAUX1: f64 = 2.918080926071920e+02;
pub const BP4_DAUX1: f64 = -7.451332191019419e+02;
pub const BP5_DAUX1: f64 = 7.451332191019419e+02;
pub const BP0_AUX2: f64 = -3.673680056967704e+01;
pub const BP1_AUX2: f64 = 3.680808162809191e+01;
pub const BP2_AUX2: f64 = 7.451332191019419e+02;
pub const BP0_DAUX2: f64 = -7.451332191019419e+02;
pub const BP1_DAUX2: f64 = -3.673680056967704e+01;
pub const BP2_DAUX2: f64 = 3.680808162809191e+01;
pub const BP3_DAUX2: f64 = 7.451332191019419e+02;
/// largest |x| for which sinh(x) is finite
pub const BP0_MISC: f64 = 7.097827128183643e+02;

/// argument of aux1 limited to [-BP0_MISC, BP0_MISC]
pub fn aux1_clamp(x: f64) -> f64 {
    if x < -BP0_MISC {
        debug!("aux1: argument {} clamped to {}", x, -BP0_MISC);
        -BP0_MISC
    } else if x > BP0_MISC {
        debug!("aux1: argument {} clamped to {}", x, BP0_MISC);
        BP0_MISC
    } else {
        x
    }
}

/// x/sinh(x)
pub fn aux1_value(x: f64) -> f64 {
    let y = aux1_clamp(x);
    if y <= BP0_AUX1 {
        y / y.sinh()
    } else if y <= BP1_AUX1 {
        // 1 - y^2/6 + 7y^4/360
        1.0 - y * y / 6.0 * (1.0 - 7.0 * y * y / 60.0)
    } else {
        y / y.sinh()
    }
}

/// d/dx (x/sinh(x))
pub fn aux1_deriv(x: f64) -> f64 {
    let y = aux1_clamp(x);
    if y <= BP4_DAUX1 {
        0.0
    } else if y <= BP2_DAUX1 {
        // sinh(y) ~ -e^(-y)/2
        -2.0 * (1.0 + y) * y.exp()
    } else if y <= BP0_DAUX1 {
        let s = y.sinh();
        (s - y * y.cosh()) / (s * s)
    } else if y <= BP1_DAUX1 {
        -y / 3.0 * (1.0 - 7.0 * y * y / 30.0)
    } else if y <= BP3_DAUX1 {
        let s = y.sinh();
        (s - y * y.cosh()) / (s * s)
    } else if y <= BP5_DAUX1 {
        // sinh(y) ~ e^y/2
        2.0 * (1.0 - y) * (-y).exp()
    } else {
        0.0
    }
}

/// 1/(1 + e^x)
pub fn aux2_value(x: f64) -> f64 {
    if x <= BP0_AUX2 {
        1.0
    } else if x <= BP1_AUX2 {
        1.0 / (1.0 + x.exp())
    } else if x <= BP2_AUX2 {
        (-x).exp()
    } else {
        0.0
    }
}

/// d/dx 1/(1 + e^x)
pub fn aux2_deriv(x: f64) -> f64 {
    if x <= BP0_DAUX2 {
        0.0
    } else if x <= BP1_DAUX2 {
        -x.exp()
    } else if x <= BP2_DAUX2 {
        let e = x.exp();
        let d = e + 1.0;
        -e / (d * d)
    } else if x <= BP3_DAUX2 {
        -(-x).exp()
    } else {
        0.0
    }
}

//! Bessel functions of integer order for real arguments
//!
//! [`jn`] and [`yn`] extend the order zero and one Bessel functions to any
//! `i32` order. Each call picks one evaluation path from the order and the
//! magnitude of the argument (see [`Regime`]): an upward recurrence where
//! it is stable, a continued fraction plus downward recurrence where it is
//! not, and closed forms for tiny and huge arguments.
//!
//! Special values are the only error channel of [`jn`] and [`yn`]: NaN in
//! gives NaN out, Y_n has a pole (-∞) at zero and is NaN for negative
//! arguments. [`Bessel::try_jn`] and [`Bessel::try_yn`] report the same
//! conditions as [`BesselError`].
//!
//! # Example
//!
//! ```
//! use intbessel::{jn, yn};
//!
//! assert!((jn(2, 1.0) - 0.114_903_484_931_900_48).abs() < 1e-15);
//! assert!((yn(2, 1.0) + 1.650_682_606_816_254_4).abs() < 1e-14);
//!
//! assert_eq!(jn(3, 0.0), 0.0);
//! assert_eq!(yn(3, 0.0), f64::NEG_INFINITY);
//! assert!(yn(3, -1.0).is_nan());
//! ```
//!
//! Other order zero and one kernels can be injected through [`Bessel`]:
//!
//! ```
//! use intbessel::{Bessel, FnKernels};
//!
//! let bessel = Bessel::new(FnKernels::default());
//! assert_eq!(bessel.jn(4, 3.0), intbessel::jn(4, 3.0));
//! ```
#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub mod bessel;
pub mod consts;
pub mod first_kind;
pub mod kernels;
pub mod regime;
pub mod result;
pub mod second_kind;
pub mod words;

pub use bessel::{Bessel, LIBM};
pub use kernels::{FnKernels, Kernels, Libm};
pub use regime::Regime;
pub use result::BesselError;

/// Bessel function of the first kind of integer order, J_n(x), using the
/// `libm` order zero and one kernels
///
/// # Example
///
/// ```
/// use intbessel::jn;
///
/// // J_n(-x) = (-1)^n J_n(x)
/// assert_eq!(jn(3, -2.5), -jn(3, 2.5));
/// assert!(jn(3, f64::NAN).is_nan());
/// ```
pub fn jn(n: i32, x: f64) -> f64 {
    LIBM.jn(n, x)
}

/// Bessel function of the second kind of integer order, Y_n(x), using the
/// `libm` order zero and one kernels
///
/// # Example
///
/// ```
/// use intbessel::yn;
///
/// assert_eq!(yn(2, f64::INFINITY), 0.0);
/// assert_eq!(yn(300, 1.0), f64::NEG_INFINITY);
/// ```
pub fn yn(n: i32, x: f64) -> f64 {
    LIBM.yn(n, x)
}

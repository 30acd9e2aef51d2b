//! Integer-order evaluator bound to a set of order zero and one kernels
use crate::consts::EXPONENT_ALL_ONES;
use crate::kernels::{Kernels, Libm};
use crate::regime::{jn_regime, yn_regime, Regime};
use crate::result::{BesselError, Result};
use crate::words::Words;
use crate::{first_kind, second_kind};

/// Evaluator for J_n and Y_n built on injected order zero and one kernels
///
/// The evaluator holds no state besides the kernels, so a single value can
/// be shared freely between threads when the kernels can.
///
/// # Example
///
/// ```
/// use intbessel::{Bessel, Libm};
///
/// let bessel = Bessel::new(Libm);
///
/// let j = bessel.jn(5, 50.0);
/// assert!((j + 0.081_400_247_696_569_64).abs() < 1e-14);
///
/// // J_{-n}(x) = (-1)^n J_n(x)
/// assert_eq!(bessel.jn(-5, 50.0), -j);
///
/// assert_eq!(bessel.yn(2, 0.0), f64::NEG_INFINITY);
/// assert!(bessel.yn(2, -1.0).is_nan());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bessel<K> {
    kernels: K,
}

/// [`Bessel`] backed by the `libm` kernels
pub const LIBM: Bessel<Libm> = Bessel::new(Libm);

impl<K> Bessel<K> {
    /// Create an evaluator that uses `kernels` for orders zero and one
    pub const fn new(kernels: K) -> Self {
        Bessel { kernels }
    }

    /// The order zero and one kernels
    pub fn kernels(&self) -> &K {
        &self.kernels
    }

    /// Which path [`Bessel::jn`] takes for (n, x)
    pub fn regime_jn(&self, n: i32, x: f64) -> Regime {
        jn_regime(n, x)
    }

    /// Which path [`Bessel::yn`] takes for (n, x)
    pub fn regime_yn(&self, n: i32, x: f64) -> Regime {
        yn_regime(n, x)
    }
}

impl<K: Kernels> Bessel<K> {
    /// Bessel function of the first kind of integer order, J_n(x)
    ///
    /// NaN arguments are returned unchanged (as `x + x`). J_n(0) and
    /// J_n(±∞) are zero for |n| ≥ 2.
    pub fn jn(&self, n: i32, x: f64) -> f64 {
        first_kind::evaluate(&self.kernels, n, x)
    }

    /// Bessel function of the second kind of integer order, Y_n(x)
    ///
    /// Y_n(±0) is -∞, Y_n(x) is NaN for x < 0 and Y_n(+∞) is zero. Orders
    /// whose value overflows return -∞ (or +∞ for negative odd orders).
    pub fn yn(&self, n: i32, x: f64) -> f64 {
        second_kind::evaluate(&self.kernels, n, x)
    }

    /// J_n(x), or an error if `x` is NaN
    ///
    /// # Example
    ///
    /// ```
    /// use intbessel::{BesselError, LIBM};
    ///
    /// assert!(LIBM.try_jn(3, 2.0).is_ok());
    /// assert_eq!(
    ///     LIBM.try_jn(3, f64::NAN).unwrap_err().to_string(),
    ///     "argument is NaN: NaN",
    /// );
    /// ```
    pub fn try_jn(&self, n: i32, x: f64) -> Result<f64> {
        match self.regime_jn(n, x) {
            Regime::NotANumber => Err(BesselError::NanArgument { x }),
            _ => check_finite(n, x, self.jn(n, x)),
        }
    }

    /// Y_n(x), or an error at the pole, for negative or NaN arguments,
    /// and when the value overflows
    ///
    /// # Example
    ///
    /// ```
    /// use intbessel::{BesselError, LIBM};
    ///
    /// assert_eq!(LIBM.try_yn(2, 0.0), Err(BesselError::Pole { n: 2 }));
    /// assert_eq!(
    ///     LIBM.try_yn(300, 1.0),
    ///     Err(BesselError::Overflow { n: 300, x: 1.0 }),
    /// );
    /// ```
    pub fn try_yn(&self, n: i32, x: f64) -> Result<f64> {
        match self.regime_yn(n, x) {
            Regime::NotANumber => Err(BesselError::NanArgument { x }),
            Regime::Pole => Err(BesselError::Pole { n }),
            Regime::OutOfDomain => Err(BesselError::NegativeArgument { n, x }),
            _ => check_finite(n, x, self.yn(n, x)),
        }
    }
}

fn check_finite(n: i32, x: f64, value: f64) -> Result<f64> {
    if Words::decode(value).exponent_at_least(EXPONENT_ALL_ONES) {
        Err(BesselError::Overflow { n, x })
    } else {
        Ok(value)
    }
}

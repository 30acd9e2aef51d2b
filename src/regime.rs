//! Selection of the evaluation path for J_n(x) and Y_n(x)
//!
//! Selection works on the words of the argument so that the magnitude
//! thresholds are exact exponent comparisons and the special values never
//! pass through a floating-point comparison.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::{EXPONENT_ALL_ONES, HUGE_ARGUMENT_HIGH, TINY_ARGUMENT_HIGH};
use crate::words::Words;
use std::fmt;

/// The path taken to evaluate a Bessel function of integer order
///
/// # Example
///
/// ```
/// use intbessel::regime::{jn_regime, yn_regime, Regime};
///
/// assert_eq!(jn_regime(5, 50.0), Regime::ForwardRecurrence);
/// assert_eq!(jn_regime(50, 5.0), Regime::BackwardRecurrence);
/// assert_eq!(jn_regime(3, 1e95), Regime::Asymptotic);
/// assert_eq!(yn_regime(2, 0.0), Regime::Pole);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum Regime {
    /// The argument is NaN and is propagated
    NotANumber,
    /// The reduced order is 0 or 1 and an order-zero/one kernel is used
    Kernel,
    /// The result is zero: J at 0 or ±∞, Y at +∞
    Vanishing,
    /// Y at ±0, the result is -∞
    Pole,
    /// Y at a negative argument, the result is NaN
    OutOfDomain,
    /// Leading term of the Hankel expansion for x ≥ 2^302
    Asymptotic,
    /// Upward three-term recurrence from the order zero and one kernels
    ForwardRecurrence,
    /// Leading Taylor term (x/2)^n / n! for x < 2^-30
    TaylorSeries,
    /// Continued fraction followed by a downward recurrence, normalized by
    /// J_0 or J_1
    BackwardRecurrence,
}

impl Regime {
    /// Lowercase name of the path, as used by `Display` and in trace events
    pub fn as_str(&self) -> &str {
        match self {
            Regime::NotANumber => "not a number",
            Regime::Kernel => "kernel",
            Regime::Vanishing => "vanishing",
            Regime::Pole => "pole",
            Regime::OutOfDomain => "out of domain",
            Regime::Asymptotic => "asymptotic",
            Regime::ForwardRecurrence => "forward recurrence",
            Regime::TaylorSeries => "taylor series",
            Regime::BackwardRecurrence => "backward recurrence",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An (order, argument) pair reduced to a non-negative order
#[derive(Debug, Clone, Copy)]
pub(crate) struct Reduced {
    pub regime: Regime,
    /// |n|
    pub order: u32,
    /// Argument to evaluate at. Signed for [`Regime::Kernel`], otherwise
    /// non-negative.
    pub x: f64,
    /// Whether the value at (order, x) must be negated
    pub negate: bool,
}

/// Reduce (n, x) for J_n(x) using J_{-n}(x) = J_n(-x) and
/// J_n(-x) = (-1)^n J_n(x)
pub(crate) fn reduce_j(n: i32, x: f64) -> Reduced {
    let words = Words::decode(x);
    if words.is_nan() {
        return Reduced {
            regime: Regime::NotANumber,
            order: n.unsigned_abs(),
            x,
            negate: false,
        };
    }

    let (order, x, words) = if n < 0 {
        (n.unsigned_abs(), -x, words.negate())
    } else {
        (n.unsigned_abs(), x, words)
    };

    if order <= 1 {
        return Reduced {
            regime: Regime::Kernel,
            order,
            x,
            negate: false,
        };
    }

    let negate = order & 1 == 1 && words.is_sign_negative();
    let x = x.abs();

    let regime = if words.is_zero() || words.exponent_at_least(EXPONENT_ALL_ONES)
    {
        Regime::Vanishing
    } else if f64::from(order) <= x {
        if words.exponent_at_least(HUGE_ARGUMENT_HIGH) {
            Regime::Asymptotic
        } else {
            Regime::ForwardRecurrence
        }
    } else if words.exponent_below(TINY_ARGUMENT_HIGH) {
        Regime::TaylorSeries
    } else {
        Regime::BackwardRecurrence
    };

    Reduced {
        regime,
        order,
        x,
        negate,
    }
}

/// Reduce (n, x) for Y_n(x) using Y_{-n}(x) = (-1)^n Y_n(x)
pub(crate) fn reduce_y(n: i32, x: f64) -> Reduced {
    let words = Words::decode(x);
    let order = n.unsigned_abs();
    let negate = n < 0 && order & 1 == 1;

    let regime = if words.is_nan() {
        Regime::NotANumber
    } else if words.is_zero() {
        Regime::Pole
    } else if words.is_sign_negative() {
        Regime::OutOfDomain
    } else if order <= 1 {
        Regime::Kernel
    } else if words.is_infinite() {
        Regime::Vanishing
    } else if words.exponent_at_least(HUGE_ARGUMENT_HIGH) {
        Regime::Asymptotic
    } else {
        Regime::ForwardRecurrence
    };

    Reduced {
        regime,
        order,
        x,
        negate,
    }
}

/// The path [`crate::jn`] takes for (n, x)
pub fn jn_regime(n: i32, x: f64) -> Regime {
    reduce_j(n, x).regime
}

/// The path [`crate::yn`] takes for (n, x)
pub fn yn_regime(n: i32, x: f64) -> Regime {
    reduce_y(n, x).regime
}

//! Bessel functions of the second kind, Y_n(x)
//!
//! Y_n grows without bound as n increases for fixed x, so the upward
//! recurrence from Y_0 and Y_1 is stable for every order. It runs until the
//! requested order or until the value overflows to -∞.
use crate::consts::FRAC_1_SQRT_PI;
use crate::kernels::Kernels;
use crate::regime::{reduce_y, Reduced, Regime};
use crate::words::Words;
use tracing::{debug, trace};

/// Y_n(x) with the given order zero and one kernels
pub(crate) fn evaluate<K: Kernels>(kernels: &K, n: i32, x: f64) -> f64 {
    let reduced = reduce_y(n, x);
    trace!(n, x, regime = %reduced.regime, "yn");

    let Reduced {
        regime,
        order,
        x,
        negate,
    } = reduced;

    let value = match regime {
        Regime::NotANumber => return x + x,
        Regime::Pole => return f64::NEG_INFINITY,
        Regime::OutOfDomain => return f64::NAN,
        Regime::Vanishing => return 0.0,
        Regime::Kernel if order == 0 => kernels.y0(x),
        Regime::Kernel => kernels.y1(x),
        Regime::Asymptotic => asymptotic(order, x),
        // the upward recurrence is the only stable one for Y_n, and the
        // other two are never selected for it
        Regime::ForwardRecurrence
        | Regime::TaylorSeries
        | Regime::BackwardRecurrence => forward(kernels, order, x),
    };

    if negate {
        -value
    } else {
        value
    }
}

/// Leading Hankel term. √2 sin(x - (2n+1)π/4) is s-c, -s-c, -s+c, s+c for
/// n mod 4 = 0..3.
fn asymptotic(order: u32, x: f64) -> f64 {
    let (s, c) = x.sin_cos();
    let t = match order & 3 {
        0 => s - c,
        1 => -s - c,
        2 => -s + c,
        _ => s + c,
    };
    FRAC_1_SQRT_PI * t / x.sqrt()
}

fn forward<K: Kernels>(kernels: &K, order: u32, x: f64) -> f64 {
    let mut prev = kernels.y0(x);
    let mut curr = kernels.y1(x);
    for i in 1..order {
        // -∞ - (-∞) would turn into NaN on the next step
        if Words::decode(curr) == Words::NEG_INFINITY {
            debug!(order, x, reached = i, "yn recurrence overflowed to -inf");
            break;
        }
        let next = (f64::from(i) * 2.0 / x) * curr - prev;
        prev = curr;
        curr = next;
    }
    curr
}

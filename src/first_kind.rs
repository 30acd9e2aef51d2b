//! Bessel functions of the first kind, J_n(x)
//!
//! For n ≤ x the upward recurrence
//!
//! ```text
//! J_{n+1}(x) = (2n/x) J_n(x) - J_{n-1}(x)
//! ```
//!
//! is stable and is seeded with J_0 and J_1. For n > x it is not: the
//! ratio J_n/J_{n-1} is instead estimated with a continued fraction, the
//! recurrence is run downward from a supposed J_n, and the result is scaled
//! so the computed J_0 (or J_1) matches the kernel.
use crate::consts::{
    CONTINUED_FRACTION_LIMIT, FRAC_1_SQRT_PI, LN_F64_MAX, RESCALE_LIMIT,
    TAYLOR_MAX_ORDER,
};
use crate::kernels::Kernels;
use crate::regime::{reduce_j, Reduced, Regime};
use tracing::{debug, trace};

/// J_n(x) with the given order zero and one kernels
pub(crate) fn evaluate<K: Kernels>(kernels: &K, n: i32, x: f64) -> f64 {
    let reduced = reduce_j(n, x);
    trace!(n, x, regime = %reduced.regime, "jn");

    let Reduced {
        regime,
        order,
        x,
        negate,
    } = reduced;

    let value = match regime {
        Regime::NotANumber => return x + x,
        Regime::Kernel if order == 0 => kernels.j0(x),
        Regime::Kernel => kernels.j1(x),
        Regime::Vanishing => 0.0,
        Regime::Asymptotic => asymptotic(order, x),
        Regime::ForwardRecurrence => forward(kernels, order, x),
        Regime::TaylorSeries => taylor(order, x),
        Regime::BackwardRecurrence => backward(kernels, order, x),
        // never selected for J_n
        Regime::Pole => f64::NEG_INFINITY,
        Regime::OutOfDomain => f64::NAN,
    };

    if negate {
        -value
    } else {
        value
    }
}

/// Leading Hankel term. With s = sin x, c = cos x and
/// φ = x - (2n+1)π/4, √2 cos φ is c+s, s-c, -c-s, c-s for n mod 4 = 0..3.
fn asymptotic(order: u32, x: f64) -> f64 {
    let (s, c) = x.sin_cos();
    let t = match order & 3 {
        0 => c + s,
        1 => -c + s,
        2 => -c - s,
        _ => c - s,
    };
    FRAC_1_SQRT_PI * t / x.sqrt()
}

fn forward<K: Kernels>(kernels: &K, order: u32, x: f64) -> f64 {
    let mut prev = kernels.j0(x);
    let mut curr = kernels.j1(x);
    for i in 1..order {
        let next = curr * (f64::from(i) * 2.0 / x) - prev;
        prev = curr;
        curr = next;
    }
    curr
}

/// (x/2)^n / n!, accumulated together so neither part overflows first
fn taylor(order: u32, x: f64) -> f64 {
    if order > TAYLOR_MAX_ORDER {
        return 0.0;
    }
    let half = x * 0.5;
    let mut power = half;
    let mut factorial = 1.0;
    for i in 2..=order {
        factorial *= f64::from(i);
        power *= half;
    }
    power / factorial
}

/// Number of levels k of the continued fraction for J_n(x)/J_{n-1}(x)
/// needed for double precision.
///
/// With w = 2n/x and h = 2/x, k is the first index at which
///
/// ```text
/// Q_0 = w, Q_1 = w(w+h) - 1, Q_k = (w+kh) Q_{k-1} - Q_{k-2}
/// ```
///
/// reaches 1e9. The sign of `x` is ignored.
///
/// The search only converges quickly when n > |x|, the only case where the
/// backward recurrence asks for it. Otherwise, and for NaN, the depth is 1.
///
/// # Example
///
/// ```
/// use intbessel::first_kind::continued_fraction_depth;
///
/// assert_eq!(continued_fraction_depth(50, 5.0), 6);
/// assert_eq!(continued_fraction_depth(11, 10.0), 17);
/// assert_eq!(continued_fraction_depth(2, 1e15), 1);
/// ```
pub fn continued_fraction_depth(n: u32, x: f64) -> u32 {
    let x = x.abs();
    if x.is_nan() || f64::from(n) <= x {
        return 1;
    }
    let w = f64::from(n) * 2.0 / x;
    let h = 2.0 / x;
    let mut q0 = w;
    let mut z = w + h;
    let mut q1 = w * z - 1.0;
    let mut k = 1;
    // w > 2 here, so Q_k grows at least geometrically
    while q1.abs() < CONTINUED_FRACTION_LIMIT {
        k += 1;
        z += h;
        let q2 = z * q1 - q0;
        q0 = q1;
        q1 = q2;
    }
    k
}

/// Evaluate the continued fraction
///
/// ```text
///                        1
/// J_n/J_{n-1} = -------------------
///               2n/x - 1
///                      -----------
///                      2(n+1)/x - ...
/// ```
///
/// truncated after `depth` levels, from the innermost level outward.
fn continued_fraction(order: u32, depth: u32, x: f64) -> f64 {
    let first = u64::from(order);
    let last = first + u64::from(depth);
    (first..=last)
        .rev()
        .fold(0.0, |t, j| 1.0 / (2.0 * j as f64 / x - t))
}

fn backward<K: Kernels>(kernels: &K, order: u32, x: f64) -> f64 {
    let depth = continued_fraction_depth(order, x);
    let mut ratio = continued_fraction(order, depth, x);

    // (upper, lower) track (J_{i+1}, J_i) up to a common factor, starting
    // from J_n = ratio and J_{n-1} = 1.
    let mut upper = ratio;
    let mut lower = 1.0;

    // log((2/x)^n n!) ≈ n ln(2n/x) bounds the growth of the recurrence
    let nf = f64::from(order);
    let growth = nf * (2.0 / x * nf).abs().ln();
    let rescale = growth >= LN_F64_MAX;
    if rescale {
        debug!(order, x, growth, "jn backward recurrence rescaling");
    }

    for i in (1..order).rev() {
        let di = f64::from(i) * 2.0;
        let next = lower * di / x - upper;
        upper = lower;
        lower = next;
        if rescale && lower > RESCALE_LIMIT {
            upper /= lower;
            ratio /= lower;
            lower = 1.0;
        }
    }

    // normalize against whichever of J_0, J_1 is further from a zero
    let j0 = kernels.j0(x);
    let j1 = kernels.j1(x);
    if j0.abs() >= j1.abs() {
        ratio * j0 / lower
    } else {
        ratio * j1 / upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::Libm;

    const TOL: f64 = 1E-12;

    fn jn(n: i32, x: f64) -> f64 {
        evaluate(&Libm, n, x)
    }

    fn rel_close(x: f64, y: f64, tol: f64) {
        let err = ((x - y) / y).abs();
        assert!(err < tol, "{x} vs {y}: relative error {err} > {tol}");
    }

    #[test]
    fn nan_argument_is_propagated() {
        for n in [-3, -1, 0, 1, 2, 100] {
            assert!(jn(n, f64::NAN).is_nan());
        }
    }

    #[test]
    fn kernel_orders() {
        assert_eq!(jn(0, 2.5), libm::j0(2.5));
        assert_eq!(jn(1, 2.5), libm::j1(2.5));
        assert_eq!(jn(-1, 2.5), -libm::j1(2.5));
        assert_eq!(jn(0, -2.5), libm::j0(2.5));
    }

    #[test]
    fn vanishing_limits() {
        assert_eq!(jn(2, 0.0), 0.0);
        assert_eq!(jn(9, f64::INFINITY), 0.0);
        assert_eq!(jn(9, f64::NEG_INFINITY), 0.0);
        assert!(jn(3, -0.0).is_sign_negative());
    }

    #[test]
    fn forward_recurrence_values() {
        rel_close(jn(5, 50.0), -0.081_400_247_696_569_64, TOL);
        rel_close(jn(2, 30.0), 0.078_451_246_073_265_35, TOL);
        rel_close(jn(7, 100.0), 0.070_172_690_987_212_72, TOL);
        assert::close(jn(2, 1.0), 0.114_903_484_931_900_48, TOL);
    }

    #[test]
    fn backward_recurrence_values() {
        rel_close(jn(50, 5.0), 2.294_247_615_952_540_1e-45, 1e-9);
        rel_close(jn(20, 10.0), 1.151_336_924_781_339_8e-5, 1e-9);
        rel_close(jn(100, 1.0), 8.431_828_789_626_708_5e-189, 1e-9);
        rel_close(jn(30, 0.5), 3.263_356_828_913_978_5e-51, 1e-9);
        rel_close(jn(200, 150.0), 8.057_702_198_396_854e-14, 1e-9);
    }

    #[test]
    fn backward_recurrence_with_rescaling_underflows_quietly() {
        // n ln(2n/x) = 1000 ln(100) is past the overflow bound
        let j = jn(1000, 20.0);
        assert!(j.is_finite());
        assert!(j.abs() < 1e-300);
    }

    #[test]
    fn taylor_values() {
        rel_close(jn(2, 1e-10), 1.25e-21, 1e-14);
        rel_close(jn(5, 1e-10), 2.604_166_666_666_667e-54, 1e-14);
        assert_eq!(jn(34, 1e-10), 0.0);
        assert_eq!(taylor(40, 1e-10), 0.0);
    }

    #[test]
    fn asymptotic_matches_closed_form() {
        let x: f64 = 1e95;
        let (s, c) = (x.sin(), x.cos());
        let expected = FRAC_1_SQRT_PI * (c - s) / x.sqrt();
        assert_eq!(jn(3, x), expected);
        assert_eq!(jn(3, -x), -expected);
    }

    #[test]
    fn asymptotic_cycles_through_four_combinations() {
        let x: f64 = 2.0_f64.powi(400);
        let (s, c) = (x.sin(), x.cos());
        let scale = FRAC_1_SQRT_PI / x.sqrt();
        assert_eq!(asymptotic(4, x), FRAC_1_SQRT_PI * (c + s) / x.sqrt());
        assert::close(asymptotic(5, x) / scale, -c + s, 1e-12);
        assert::close(asymptotic(6, x) / scale, -c - s, 1e-12);
        assert::close(asymptotic(7, x) / scale, c - s, 1e-12);
    }

    #[test]
    fn continued_fraction_estimates_ratio() {
        // J_50(5) / J_49(5)
        let depth = continued_fraction_depth(50, 5.0);
        let ratio = continued_fraction(50, depth, 5.0);
        assert::close(ratio, 0.050_123_141_708_127_84, 1e-12);
    }

    #[test]
    fn continued_fraction_depth_is_bounded() {
        for &x in &[2.0_f64.powi(-29), 1e-3, 0.5, 3.0, 10.0, 100.0, 1e4, 1e6] {
            for n in [x as u32 + 1, x as u32 + 2, 2 * x as u32 + 1, 50] {
                if f64::from(n) <= x {
                    continue;
                }
                let k = continued_fraction_depth(n, x);
                assert!(k >= 1);
                assert!(
                    f64::from(k) <= 10.0 * (x.cbrt() + 1.0),
                    "depth {k} for n = {n}, x = {x}"
                );
            }
        }
    }

    #[test]
    fn continued_fraction_depth_degenerate_inputs_terminate() {
        assert_eq!(continued_fraction_depth(5, 0.0), 1);
        assert_eq!(continued_fraction_depth(5, f64::NAN), 1);
        assert_eq!(continued_fraction_depth(0, 1.0), 1);
        assert_eq!(
            continued_fraction_depth(5, -2.0),
            continued_fraction_depth(5, 2.0)
        );
    }

    #[test]
    fn continued_fraction_depth_ignores_arguments_above_the_order() {
        assert_eq!(continued_fraction_depth(2, 1e15), 1);
        assert_eq!(continued_fraction_depth(7, 7.0), 1);
        assert_eq!(continued_fraction_depth(1000, -5e9), 1);
        assert_eq!(continued_fraction_depth(u32::MAX, 1e300), 1);
        assert_eq!(continued_fraction_depth(3, f64::INFINITY), 1);
        assert!(continued_fraction_depth(u32::MAX, 1e9) > 1);
    }
}

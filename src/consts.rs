//! Mathematical constants and evaluation thresholds
//!
//! Thresholds on the argument are expressed as the high 32-bit word of an
//! IEEE-754 binary64 value with the sign bit cleared. Comparing the masked
//! high word against one of these is an exact test on the exponent field.

/// 1/√π. Multiplied by (sin x ± cos x) it gives √(2/π) · cos(x - φ)
pub const FRAC_1_SQRT_PI: f64 = 0.564_189_583_547_756_3;

/// Mask that clears the sign bit of a high word
pub const MAGNITUDE_MASK: u32 = 0x7fff_ffff;

/// Sign bit of a high word
pub const SIGN_BIT: u32 = 0x8000_0000;

/// High word of +∞: all exponent bits set, mantissa clear
pub const EXPONENT_ALL_ONES: u32 = 0x7ff0_0000;

/// High word of -∞
pub const NEG_INFINITY_HIGH: u32 = 0xfff0_0000;

/// High word of 2^302. Beyond this, (2n+1)π/4 is negligible next to x for
/// every representable order and the leading asymptotic term is exact to
/// working precision.
pub const HUGE_ARGUMENT_HIGH: u32 = 0x52d0_0000;

/// High word of 2^-30. Below this, J_n(x) equals its leading Taylor term
/// (x/2)^n / n! to working precision.
pub const TINY_ARGUMENT_HIGH: u32 = 0x3e10_0000;

/// Q_k at which the continued fraction for J_n/J_{n-1} has enough terms for
/// double precision (1e4 suffices for single, 1e17 for quadruple).
pub const CONTINUED_FRACTION_LIMIT: f64 = 1.0e9;

/// Magnitude at which the backward recurrence is rescaled to one
pub const RESCALE_LIMIT: f64 = 1.0e100;

/// ln(f64::MAX). If n ln(2n/x) exceeds this the unscaled backward
/// recurrence may overflow.
pub const LN_F64_MAX: f64 = 709.782_712_893_384;

/// Largest order whose Taylor term (x/2)^n / n! is evaluated for
/// x < 2^-30. Higher orders underflow to zero.
pub const TAYLOR_MAX_ORDER: u32 = 33;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_powers_of_two() {
        let huge = f64::from_bits(u64::from(HUGE_ARGUMENT_HIGH) << 32);
        assert_eq!(huge, 2.0_f64.powi(302));

        let tiny = f64::from_bits(u64::from(TINY_ARGUMENT_HIGH) << 32);
        assert_eq!(tiny, 2.0_f64.powi(-30));
        assert_eq!(f64::from_bits(0x3e20_0000 << 32), 2.0_f64.powi(-29));
    }

    #[test]
    fn infinity_words() {
        assert_eq!(f64::INFINITY.to_bits() >> 32, u64::from(EXPONENT_ALL_ONES));
        assert_eq!(
            f64::NEG_INFINITY.to_bits() >> 32,
            u64::from(NEG_INFINITY_HIGH)
        );
    }

    #[test]
    fn frac_1_sqrt_pi_value() {
        let expected = 1.0 / std::f64::consts::PI.sqrt();
        assert::close(FRAC_1_SQRT_PI, expected, 1e-15);
    }

    #[test]
    fn ln_f64_max_value() {
        assert::close(LN_F64_MAX, f64::MAX.ln(), 1e-12);
    }
}

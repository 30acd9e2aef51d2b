//! Word-level view of an IEEE-754 binary64 value
//!
//! A double is split into its high word (sign, 11-bit exponent, top 20 bits
//! of the mantissa) and its low word (remaining 32 mantissa bits). The words
//! are only ever compared against fixed bit patterns; they are never used as
//! numbers.
use crate::consts::{
    EXPONENT_ALL_ONES, MAGNITUDE_MASK, NEG_INFINITY_HIGH, SIGN_BIT,
};

/// The two 32-bit words of a double
///
/// # Example
///
/// ```
/// use intbessel::words::Words;
///
/// let w = Words::decode(-2.0);
/// assert_eq!(w.high, 0xc000_0000);
/// assert_eq!(w.low, 0);
/// assert!(w.is_sign_negative());
/// assert_eq!(w.encode(), -2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Words {
    /// Sign, exponent, and the top 20 mantissa bits
    pub high: u32,
    /// The low 32 mantissa bits
    pub low: u32,
}

impl Words {
    /// Words of -∞
    pub const NEG_INFINITY: Words = Words {
        high: NEG_INFINITY_HIGH,
        low: 0,
    };

    /// Split `x` into its high and low words
    #[inline]
    pub fn decode(x: f64) -> Self {
        let bits = x.to_bits();
        Words {
            high: (bits >> 32) as u32,
            low: bits as u32,
        }
    }

    /// Reassemble the double these words describe
    #[inline]
    pub fn encode(self) -> f64 {
        f64::from_bits((u64::from(self.high) << 32) | u64::from(self.low))
    }

    /// The high word with the sign bit cleared
    #[inline]
    pub fn magnitude_high(self) -> u32 {
        self.high & MAGNITUDE_MASK
    }

    /// True if the sign bit is set, including for -0 and negative NaNs
    #[inline]
    pub fn is_sign_negative(self) -> bool {
        self.high & SIGN_BIT != 0
    }

    /// Exponent all ones and a nonzero mantissa
    ///
    /// The low word only contributes whether it is nonzero, which is folded
    /// into the lowest bit before the comparison with the +∞ pattern.
    #[inline]
    pub fn is_nan(self) -> bool {
        (self.magnitude_high() | u32::from(self.low != 0)) > EXPONENT_ALL_ONES
    }

    /// ±∞
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.magnitude_high() == EXPONENT_ALL_ONES && self.low == 0
    }

    /// ±0
    #[inline]
    pub fn is_zero(self) -> bool {
        self.magnitude_high() | self.low == 0
    }

    /// |x| ≥ the value whose high word is `threshold` (low word zero).
    ///
    /// True for every infinity and NaN when `threshold` is a finite pattern.
    #[inline]
    pub fn exponent_at_least(self, threshold: u32) -> bool {
        self.magnitude_high() >= threshold
    }

    /// |x| < the value whose high word is `threshold` (low word zero)
    #[inline]
    pub fn exponent_below(self, threshold: u32) -> bool {
        self.magnitude_high() < threshold
    }

    /// Words of -x
    #[inline]
    pub fn negate(self) -> Self {
        Words {
            high: self.high ^ SIGN_BIT,
            low: self.low,
        }
    }
}

impl From<f64> for Words {
    fn from(x: f64) -> Self {
        Words::decode(x)
    }
}

/// High 32 bits of `x`
#[inline]
pub fn high_word(x: f64) -> u32 {
    Words::decode(x).high
}

/// Low 32 bits of `x`
#[inline]
pub fn low_word(x: f64) -> u32 {
    Words::decode(x).low
}

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, BesselError>;

/// Why a checked evaluation did not produce a finite value
///
/// Only returned by [`crate::Bessel::try_jn`] and
/// [`crate::Bessel::try_yn`]. The unchecked functions encode the same
/// conditions as NaN and infinities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum BesselError {
    /// The argument is NaN
    NanArgument { x: f64 },
    /// Y_n has a pole at zero
    Pole { n: i32 },
    /// Y_n is undefined for negative arguments
    NegativeArgument { n: i32, x: f64 },
    /// The value is too large in magnitude for a double
    Overflow { n: i32, x: f64 },
}

impl std::error::Error for BesselError {}

impl fmt::Display for BesselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NanArgument { x } => write!(f, "argument is NaN: {}", x),
            Self::Pole { n } => write!(f, "Y_{} has a pole at zero", n),
            Self::NegativeArgument { n, x } => {
                write!(f, "Y_{} is undefined for negative argument {}", n, x)
            }
            Self::Overflow { n, x } => {
                write!(f, "order {} at {} overflows a double", n, x)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            BesselError::Pole { n: 3 }.to_string(),
            "Y_3 has a pole at zero"
        );
        assert_eq!(
            BesselError::NegativeArgument { n: 2, x: -1.5 }.to_string(),
            "Y_2 is undefined for negative argument -1.5"
        );
        assert_eq!(
            BesselError::Overflow { n: 300, x: 1.0 }.to_string(),
            "order 300 at 1 overflows a double"
        );
        assert_eq!(
            BesselError::NanArgument { x: f64::NAN }.to_string(),
            "argument is NaN: NaN"
        );
    }

    #[test]
    fn is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&BesselError::Pole { n: 0 });
    }

    #[cfg(feature = "serde1")]
    #[test]
    fn serde_snake_case() {
        let json = serde_json::to_string(&BesselError::Pole { n: 2 }).unwrap();
        assert_eq!(json, r#"{"pole":{"n":2}}"#);
    }
}

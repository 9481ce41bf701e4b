//! Roman numeral encoding for continuation part labels.
//!
//! # Examples
//!
//! ```
//! use lps_core::roman::to_roman;
//!
//! assert_eq!(to_roman(2).unwrap(), "II");
//! assert_eq!(to_roman(1994).unwrap(), "MCMXCIV");
//! assert!(to_roman(0).is_err());
//! ```

use crate::{Error, Result};

/// Smallest value representable in standard notation.
pub const MIN_ROMAN: i64 = 1;

/// Largest value representable in standard notation.
pub const MAX_ROMAN: i64 = 3999;

const NUMERALS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Converts `value` to a Roman numeral using subtractive notation.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is outside `1..=3999`.
///
/// # Examples
///
/// ```
/// use lps_core::roman::to_roman;
///
/// assert_eq!(to_roman(4).unwrap(), "IV");
/// assert_eq!(to_roman(3999).unwrap(), "MMMCMXCIX");
/// assert!(to_roman(4000).unwrap_err().is_invalid_argument());
/// ```
pub fn to_roman(value: i64) -> Result<String> {
    if !(MIN_ROMAN..=MAX_ROMAN).contains(&value) {
        return Err(Error::InvalidArgument(format!(
            "Roman numerals are defined for {MIN_ROMAN}..={MAX_ROMAN}, got {value}"
        )));
    }

    let mut remaining = value;
    let mut numeral = String::new();
    for &(weight, symbol) in &NUMERALS {
        while remaining >= weight {
            numeral.push_str(symbol);
            remaining -= weight;
        }
    }

    Ok(numeral)
}

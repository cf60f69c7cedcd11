//! Numeric operands
//!
//! Attribute text is coerced into one of two domains: an exact integer when
//! the text has no `.`, or an exact decimal otherwise. Only plain literals
//! are accepted: an optional `-`, ASCII digits and at most one `.`. Signs
//! like `+`, digit separators and exponents are rejected. Arithmetic stays in
//! the integer domain while both sides are integers and promotes to decimal
//! as soon as one side is not.
//!
//! Formatting is plain notation only. Integral values print without a
//! decimal point and decimal values drop trailing zeros:
//!
//! ```
//! use propex_engine::numeric::Number;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let a: Number = "30".parse()?;
//! let b: Number = "1.23".parse()?;
//! assert_eq!((&a + &b).to_string(), "31.23");
//!
//! let c: Number = "-90.6".parse()?;
//! let d: Number = "-3".parse()?;
//! assert_eq!(c.checked_div(&d).map(|n| n.to_string()), Some("30.2".to_string()));
//! # Ok(())
//! # }
//! ```

use bigdecimal::{BigDecimal, Zero};
use num_bigint::{BigInt, BigUint, Sign};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fractional digits kept when a decimal division does not terminate
pub const DIVISION_SCALE: i64 = 32;

/// Text that is neither an integer nor a decimal literal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a number: '{0}'")]
pub struct ParseNumberError(String);

/// An exact numeric operand
#[derive(Debug, Clone)]
pub enum Number {
    /// Arbitrary-precision integer
    Integer(BigInt),
    /// Arbitrary-precision decimal
    Decimal(BigDecimal),
}

impl Number {
    /// Widen to the decimal domain
    pub fn to_decimal(&self) -> BigDecimal {
        match self {
            Self::Integer(value) => BigDecimal::from(value.clone()),
            Self::Decimal(value) => value.clone(),
        }
    }

    /// Check for zero in either domain
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(value) => value.is_zero(),
            Self::Decimal(value) => value.is_zero(),
        }
    }

    /// Quotient of two operands, `None` when `rhs` is zero
    ///
    /// Two integers divide in the integer domain only when the division is
    /// exact. Everything else is decimal division, rounded to
    /// [`DIVISION_SCALE`] fractional digits.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }

        if let (Self::Integer(a), Self::Integer(b)) = (self, rhs)
            && (a % b).is_zero()
        {
            return Some(Self::Integer(a / b));
        }

        Some(Self::Decimal(divide_rounded(
            &self.to_decimal(),
            &rhs.to_decimal(),
        )))
    }
}

/// `lhs / rhs` rounded half away from zero to [`DIVISION_SCALE`] digits
///
/// Works on the unscaled integers so the integer part of the quotient is
/// never cut by a significant-digit limit.
fn divide_rounded(lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
    let (lhs_digits, lhs_scale) = lhs.as_bigint_and_exponent();
    let (rhs_digits, rhs_scale) = rhs.as_bigint_and_exponent();

    // lhs / rhs * 10^DIVISION_SCALE == lhs_digits * 10^shift / rhs_digits
    let shift = rhs_scale - lhs_scale + DIVISION_SCALE;
    let mut numerator = lhs_digits.magnitude().clone();
    let mut denominator = rhs_digits.magnitude().clone();
    if shift >= 0 {
        numerator *= pow10(shift.unsigned_abs());
    } else {
        denominator *= pow10(shift.unsigned_abs());
    }

    let mut magnitude = &numerator / &denominator;
    let remainder = &numerator % &denominator;
    if remainder * 2u32 >= denominator {
        magnitude += 1u32;
    }

    let sign = lhs_digits.sign() * rhs_digits.sign();
    BigDecimal::new(BigInt::from_biguint(sign, magnitude), DIVISION_SCALE)
}

fn pow10(exponent: u64) -> BigUint {
    BigUint::from(10u32).pow(u32::try_from(exponent).unwrap_or(u32::MAX))
}

macro_rules! promoting_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl std::ops::$trait for &Number {
            type Output = Number;

            fn $method(self, rhs: Self) -> Number {
                match (self, rhs) {
                    (Number::Integer(a), Number::Integer(b)) => Number::Integer(a $op b),
                    _ => Number::Decimal(self.to_decimal() $op rhs.to_decimal()),
                }
            }
        }
    };
}

promoting_op!(Add, add, +);
promoting_op!(Sub, sub, -);
promoting_op!(Mul, mul, *);

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseNumberError(s.to_string());

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };
        let fraction = frac_part.unwrap_or("");

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && fraction.is_empty())
            || !is_digits(int_part)
            || !is_digits(fraction)
        {
            return Err(err());
        }

        let magnitude = BigInt::from_str(&format!("{int_part}{fraction}")).map_err(|_| err())?;
        let value = if negative { -magnitude } else { magnitude };

        match frac_part {
            None => Ok(Self::Integer(value)),
            Some(_) => {
                let scale = i64::try_from(fraction.len()).map_err(|_| err())?;
                Ok(Self::Decimal(BigDecimal::new(value, scale)))
            }
        }
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            _ => self.to_decimal().cmp(&other.to_decimal()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality is by value: `2` and `2.0` are the same number.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Number {}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => f.write_str(&format_decimal(value)),
        }
    }
}

/// Format a decimal in plain notation without trailing zeros
///
/// ```
/// use bigdecimal::BigDecimal;
/// use propex_engine::numeric::format_decimal;
/// use std::str::FromStr;
///
/// let value = BigDecimal::from_str("28.0230").unwrap();
/// assert_eq!(format_decimal(&value), "28.023");
/// let value = BigDecimal::from_str("1.5e3").unwrap();
/// assert_eq!(format_decimal(&value), "1500");
/// ```
pub fn format_decimal(value: &BigDecimal) -> String {
    let (digits, scale) = value.normalized().as_bigint_and_exponent();
    if digits.is_zero() {
        return "0".to_string();
    }

    let sign = if digits.sign() == Sign::Minus { "-" } else { "" };
    let magnitude = digits.magnitude().to_string();

    if scale <= 0 {
        let zeros = usize::try_from(-scale).unwrap_or(0);
        return format!("{sign}{magnitude}{}", "0".repeat(zeros));
    }

    let scale = usize::try_from(scale).unwrap_or(0);
    let padded = if magnitude.len() <= scale {
        format!("{}{magnitude}", "0".repeat(scale + 1 - magnitude.len()))
    } else {
        magnitude
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    format!("{sign}{int_part}.{frac_part}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    fn num(s: &str) -> Number {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_domains() {
        assert!(matches!(num("42"), Number::Integer(_)));
        assert!(matches!(num("-7"), Number::Integer(_)));
        assert!(matches!(num("1.23"), Number::Decimal(_)));
        assert!(matches!(num("-1.123"), Number::Decimal(_)));
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!("x".parse::<Number>().is_err());
        assert!("".parse::<Number>().is_err());
        assert!("1.2.3".parse::<Number>().is_err());
        assert!("true".parse::<Number>().is_err());
        assert!("-".parse::<Number>().is_err());
        assert!(".".parse::<Number>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_plain_literals() {
        for text in ["1.0e20000000", "1e3", "2.5E-4", "+5", "1_000", "1_000.5", " 2", "0x10"] {
            assert!(text.parse::<Number>().is_err(), "{text}");
        }
    }

    #[test]
    fn test_parse_plain_decimal_forms() {
        assert_eq!(num(".5").to_string(), "0.5");
        assert_eq!(num("-.5").to_string(), "-0.5");
        assert_eq!(num("5.").to_string(), "5");
        assert_eq!(num("-0.0").to_string(), "0");
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!((&num("1") + &num("2")).to_string(), "3");
        assert_eq!((&num("1") - &num("2")).to_string(), "-1");
        assert_eq!((&num("30") * &num("-2")).to_string(), "-60");
        assert_eq!(
            num("12").checked_div(&num("6")).unwrap().to_string(),
            "2"
        );
    }

    #[test]
    fn test_mixed_arithmetic_promotes() {
        assert_eq!((&num("30") + &num("1.23")).to_string(), "31.23");
        assert_eq!((&num("30.123") - &num("2.1")).to_string(), "28.023");
        assert_eq!((&num("30.2") * &num("3")).to_string(), "90.6");
    }

    #[test]
    fn test_integral_decimal_result_has_no_point() {
        assert_eq!((&num("1.5") + &num("1.5")).to_string(), "3");
        assert_eq!((&num("0.5") * &num("4")).to_string(), "2");
    }

    #[test]
    fn test_inexact_integer_division_goes_decimal() {
        assert_eq!(num("7").checked_div(&num("2")).unwrap().to_string(), "3.5");
        let third = num("1").checked_div(&num("3")).unwrap().to_string();
        assert!(third.starts_with("0.3333"));
        assert_eq!(third.len(), 2 + 32);
    }

    #[test]
    fn test_division_keeps_fraction_of_wide_quotient() {
        let dividend = format!("1{}1", "0".repeat(120));
        let quotient = num(&dividend).checked_div(&num("3")).unwrap().to_string();

        let (int_part, frac_part) = quotient.split_once('.').unwrap();
        assert_eq!(int_part, "3".repeat(121));
        assert_eq!(frac_part, format!("{}7", "6".repeat(31)));
    }

    #[test]
    fn test_division_rounds_half_away_from_zero() {
        let two_thirds = format!("0.{}7", "6".repeat(31));
        assert_eq!(num("2").checked_div(&num("3")).unwrap().to_string(), two_thirds);
        assert_eq!(
            num("-2").checked_div(&num("3")).unwrap().to_string(),
            format!("-{two_thirds}")
        );
        assert_eq!(num("-90.6").checked_div(&num("-3")).unwrap().to_string(), "30.2");
        assert_eq!(num("1").checked_div(&num("0.008")).unwrap().to_string(), "125");
    }

    #[test]
    fn test_division_by_zero() {
        assert!(num("1").checked_div(&num("0")).is_none());
        assert!(num("1.5").checked_div(&num("0.0")).is_none());
    }

    #[test]
    fn test_value_equality_across_domains() {
        assert_eq!(num("2"), num("2.0"));
        assert!(num("-1.123") < num("2"));
        assert!(num("30") >= num("30.00"));
    }

    #[test]
    fn test_format_decimal_small_and_negative() {
        let value = BigDecimal::from_str("-0.0050").unwrap();
        assert_eq!(format_decimal(&value), "-0.005");
        let value = BigDecimal::from_str("0.000").unwrap();
        assert_eq!(format_decimal(&value), "0");
    }

    #[test]
    fn test_add_then_sub_recovers_operand() {
        for (a, b) in [("5", "7"), ("-40", "12"), ("123456789012345678901234567890", "9")] {
            let sum = &num(a) + &num(b);
            assert_eq!((&sum - &num(b)).to_string(), a);
        }
    }
}

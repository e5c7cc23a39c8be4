//! Exact rational helpers.
//!
//! All arithmetic in the crate is done on [`Rational`] (an arbitrary
//! precision `num_rational::BigRational`). Floating point only appears when
//! a value is rendered for humans.

use crate::error::{HarmonicError, Result};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

/// Exact rational number used for accumulators, query values, and scores.
pub type Rational = BigRational;

/// Builds `numer / denom` from machine integers.
///
/// # Panics
///
/// Panics if `denom == 0`.
pub fn ratio(numer: i64, denom: i64) -> Rational {
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Builds an integral rational.
pub fn integer(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

/// Exact ceiling of `r` as a `usize`.
///
/// Returns `None` if the ceiling is negative or does not fit.
pub fn ceil_to_usize(r: &Rational) -> Option<usize> {
    r.ceil().to_integer().to_usize()
}

/// Nearest `f64` to `r`, for display only.
pub fn to_f64(r: &Rational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

/// Renders `r` with eight decimal places.
pub fn float_str(r: &Rational) -> String {
    format!("{:.8}", to_f64(r))
}

/// Renders an optional rational, exactly (`p/q`, or `p` when integral) or
/// as an 8-decimal float. Undefined values render as `null`.
pub fn frac_str(x: Option<&Rational>, use_float: bool) -> String {
    match x {
        None => "null".to_string(),
        Some(r) if use_float => float_str(r),
        Some(r) => r.to_string(),
    }
}

/// Parses an integer (`"2"`), fraction (`"3/2"`), or decimal (`"1.25"`)
/// literal into an exact rational.
///
/// # Errors
///
/// Returns [`HarmonicError::ParseRational`] for anything else, including a
/// zero denominator.
pub fn parse_rational(input: &str) -> Result<Rational> {
    let err = || HarmonicError::ParseRational {
        input: input.to_string(),
    };
    let text = input.trim();
    if text.is_empty() {
        return Err(err());
    }

    if let Some((num, den)) = text.split_once('/') {
        let num: BigInt = num.trim().parse().map_err(|_| err())?;
        let den: BigInt = den.trim().parse().map_err(|_| err())?;
        if den.is_zero() {
            return Err(err());
        }
        return Ok(Rational::new(num, den));
    }

    if let Some((int_part, frac_part)) = text.split_once('.') {
        let (negative, int_digits) = match int_part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, int_part.strip_prefix('+').unwrap_or(int_part)),
        };
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_digits)
            || !all_digits(frac_part)
            || (int_digits.is_empty() && frac_part.is_empty())
        {
            return Err(err());
        }
        let digits = format!("{int_digits}{frac_part}");
        let numer: BigInt = if digits.is_empty() {
            BigInt::zero()
        } else {
            digits.parse().map_err(|_| err())?
        };
        let denom = num_traits::pow(BigInt::from(10), frac_part.len());
        let value = Rational::new(numer, denom);
        return Ok(if negative { -value } else { value });
    }

    let n: BigInt = text.parse().map_err(|_| err())?;
    Ok(Rational::from_integer(n))
}

/// Returns `true` if `r` is strictly negative.
pub fn is_negative(r: &Rational) -> bool {
    r.is_negative()
}

// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decimal implementation.

use crate::error::{ArithmeticError, DecimalDecodeError};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::TryInto;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;

/// Count of fractional digits kept by `/` when the quotient is inexact.
pub const DIVISION_PRECISION: i32 = 16;

/// Size of the big-endian exponent leading the binary form.
pub const EXPONENT_SIZE: usize = 4;

const BINARY_VERSION: u8 = 1;
const SIGN_MASK: u8 = 0x01;
const VERSION_SHIFT: u8 = 1;

/// Returns `10^n`.
#[inline]
pub(crate) fn pow10(n: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), n as usize)
}

/// An upper bound of the count of decimal digits in `|v|`.
#[inline]
fn max_digits(v: &BigInt) -> u64 {
    v.bits() * 30103 / 100_000 + 1
}

/// Unwraps the result of a fatal-on-error operation.
#[inline]
pub(crate) fn fatal<T>(result: Result<T, ArithmeticError>) -> T {
    match result {
        Ok(val) => val,
        Err(e) => panic!("{}", e),
    }
}

/// Maps a count of fractional digits to the exponent of the last kept digit.
#[inline]
pub(crate) fn precision_exponent(precision: i32) -> Result<i32, ArithmeticError> {
    precision.checked_neg().ok_or(ArithmeticError::ExponentOverflow)
}

/// Arbitrary precision fixed-point decimal, i.e. `coeff * 10^exp`.
///
/// The exponent of a parsed value is the negated count of its fractional digits,
/// and it is kept through arithmetic, so `120.00` and `120.0000` render differently
/// while comparing equal.
#[derive(Clone, Debug, Default)]
pub struct Decimal {
    pub(crate) coeff: BigInt,
    pub(crate) exp: i32,
}

impl Decimal {
    /// Zero value, i.e. `0`.
    pub const ZERO: Decimal = Decimal {
        coeff: BigInt::ZERO,
        exp: 0,
    };

    /// Creates a `Decimal` equal to `coeff * 10^exp`.
    #[inline]
    pub fn new<T: Into<BigInt>>(coeff: T, exp: i32) -> Decimal {
        Decimal {
            coeff: coeff.into(),
            exp,
        }
    }

    /// Creates a `Decimal` from its coefficient and exponent.
    #[inline]
    pub fn from_parts(coeff: BigInt, exp: i32) -> Decimal {
        Decimal { coeff, exp }
    }

    /// i.e. `1`.
    #[inline]
    pub fn one() -> Decimal {
        Decimal::new(1, 0)
    }

    /// Consumes the `Decimal`, returning `(coefficient, exponent)`.
    #[inline]
    pub fn into_parts(self) -> (BigInt, i32) {
        (self.coeff, self.exp)
    }

    /// Returns the coefficient, which is scaled by `10^exponent`.
    #[inline]
    pub const fn coefficient(&self) -> &BigInt {
        &self.coeff
    }

    /// Returns the exponent.
    #[inline]
    pub const fn exponent(&self) -> i32 {
        self.exp
    }

    /// Returns the scale, i.e. the count of decimal digits in the fractional part.
    /// A positive scale means a negative power of 10.
    #[inline]
    pub fn scale(&self) -> i64 {
        -(self.exp as i64)
    }

    /// Returns the precision, i.e. the count of digits in the coefficient.
    #[inline]
    pub fn precision(&self) -> usize {
        if self.coeff.is_zero() {
            1
        } else {
            self.coeff.magnitude().to_str_radix(10).len()
        }
    }

    /// Returns `true` if the decimal is strictly negative.
    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        self.coeff.is_negative()
    }

    /// Returns `true` if the decimal is zero or positive.
    #[inline]
    pub fn is_sign_positive(&self) -> bool {
        !self.coeff.is_negative()
    }

    /// Checks if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Returns `-1`, `0` or `1` by the sign of `self`.
    #[inline]
    pub fn signum(&self) -> i32 {
        match self.coeff.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Computes the absolute value of `self`.
    #[inline]
    pub fn abs(&self) -> Decimal {
        Decimal {
            coeff: self.coeff.abs(),
            exp: self.exp,
        }
    }

    /// Returns `self` with exponent `exp`.
    ///
    /// Digits below `10^exp` are truncated toward zero when `exp` is coarser than the
    /// current exponent; the coefficient is multiplied up when it is finer.
    pub fn rescale(&self, exp: i32) -> Decimal {
        let coeff = match exp.cmp(&self.exp) {
            Ordering::Equal => self.coeff.clone(),
            Ordering::Greater => {
                let diff = (exp as i64 - self.exp as i64) as u64;
                if diff > max_digits(&self.coeff) {
                    BigInt::zero()
                } else {
                    &self.coeff / pow10(diff)
                }
            }
            Ordering::Less => &self.coeff * pow10((self.exp as i64 - exp as i64) as u64),
        };

        Decimal { coeff, exp }
    }

    /// Aligns both coefficients to the smaller exponent.
    #[inline]
    fn align<'a>(&'a self, other: &'a Decimal) -> (Cow<'a, BigInt>, Cow<'a, BigInt>, i32) {
        match self.exp.cmp(&other.exp) {
            Ordering::Equal => (Cow::Borrowed(&self.coeff), Cow::Borrowed(&other.coeff), self.exp),
            Ordering::Less => (
                Cow::Borrowed(&self.coeff),
                Cow::Owned(other.rescale(self.exp).coeff),
                self.exp,
            ),
            Ordering::Greater => (
                Cow::Owned(self.rescale(other.exp).coeff),
                Cow::Borrowed(&other.coeff),
                other.exp,
            ),
        }
    }

    /// Normalize a `Decimal` by stripping the trailing zeros of its coefficient.
    pub fn normalize(&self) -> Decimal {
        if self.is_zero() {
            return Decimal::ZERO;
        }

        let ten = BigInt::from(10u8);
        let mut coeff = self.coeff.clone();
        let mut exp = self.exp;
        while exp < i32::MAX {
            let (quo, rem) = coeff.div_rem(&ten);
            if !rem.is_zero() {
                break;
            }
            coeff = quo;
            exp += 1;
        }

        Decimal { coeff, exp }
    }

    #[inline]
    pub(crate) fn add_internal(&self, other: &Decimal) -> Decimal {
        let (left, right, exp) = self.align(other);
        Decimal {
            coeff: left.as_ref() + right.as_ref(),
            exp,
        }
    }

    #[inline]
    pub(crate) fn sub_internal(&self, other: &Decimal) -> Decimal {
        let (left, right, exp) = self.align(other);
        Decimal {
            coeff: left.as_ref() - right.as_ref(),
            exp,
        }
    }

    /// Calculate the product of two decimals,
    /// returning an error if the exponent overflowed.
    #[inline]
    pub fn checked_mul(&self, other: &Decimal) -> Result<Decimal, ArithmeticError> {
        let exp = self
            .exp
            .checked_add(other.exp)
            .ok_or(ArithmeticError::ExponentOverflow)?;

        Ok(Decimal {
            coeff: &self.coeff * &other.coeff,
            exp,
        })
    }

    /// Divides `self` by `other` into an integer multiple of `10^(-precision)`,
    /// returning `(quotient, remainder, scaled divisor)`.
    ///
    /// `self = other * quotient * 10^(-precision) + remainder`, the quotient is
    /// truncated and the remainder shares the sign of `self`.
    fn quo_rem(&self, other: &Decimal, precision: i32) -> Result<(BigInt, BigInt, BigInt), ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        // self / other = (a / b) * 10^(ea - eb), so q = a * 10^(ea - eb + precision) / b
        let e = self.exp as i64 - other.exp as i64 + precision as i64;
        if e > i32::MAX as i64 || e < i32::MIN as i64 {
            return Err(ArithmeticError::ExponentOverflow);
        }

        let (dividend, divisor) = if e < 0 {
            (self.coeff.clone(), &other.coeff * pow10(e.unsigned_abs()))
        } else {
            (&self.coeff * pow10(e as u64), other.coeff.clone())
        };

        let (quo, rem) = dividend.div_rem(&divisor);
        Ok((quo, rem, divisor))
    }

    /// Divides `self` by `other`, rounding half away from zero to
    /// `precision` fractional digits. A negative `precision` rounds the integer part.
    pub fn checked_div_round(&self, other: &Decimal, precision: i32) -> Result<Decimal, ArithmeticError> {
        let exp = precision_exponent(precision)?;
        let (mut quo, rem, divisor) = self.quo_rem(other, precision)?;

        // rem / divisor >= 1/2 <=> 2 * |rem| >= |divisor|
        let twice_rem: BigInt = rem.abs() << 1usize;
        if twice_rem >= divisor.abs() {
            if self.is_sign_negative() != other.is_sign_negative() {
                quo -= 1;
            } else {
                quo += 1;
            }
        }

        Ok(Decimal { coeff: quo, exp })
    }

    /// Divides `self` by `other` with [`DIVISION_PRECISION`] fractional digits,
    /// returning an error on division by zero.
    #[inline]
    pub fn checked_div(&self, other: &Decimal) -> Result<Decimal, ArithmeticError> {
        self.checked_div_round(other, DIVISION_PRECISION)
    }

    /// Divides and rounds, panicking on division by zero.
    #[inline]
    pub fn div_round(&self, other: &Decimal, precision: i32) -> Decimal {
        fatal(self.checked_div_round(other, precision))
    }

    /// Checked decimal remainder, truncated so that the result has the sign of `self`.
    #[inline]
    pub fn checked_rem(&self, other: &Decimal) -> Result<Decimal, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let (left, right, exp) = self.align(other);
        Ok(Decimal {
            coeff: left.as_ref() % right.as_ref(),
            exp,
        })
    }

    /// Truncate a value to have `precision` digits after the decimal point.
    /// A negative `precision` truncates before the decimal point.
    #[inline]
    pub fn trunc(&self, precision: i32) -> Decimal {
        let exp = fatal(precision_exponent(precision));
        if self.exp < exp {
            self.rescale(exp)
        } else {
            self.clone()
        }
    }

    /// Computes the largest integer that is equal to or less than `self`.
    pub fn floor(&self) -> Decimal {
        if self.exp >= 0 {
            return self.rescale(0);
        }

        let digits = self.exp.unsigned_abs() as u64;
        let coeff = if digits > max_digits(&self.coeff) {
            if self.is_sign_negative() {
                BigInt::from(-1)
            } else {
                BigInt::zero()
            }
        } else {
            self.coeff.div_floor(&pow10(digits))
        };

        Decimal { coeff, exp: 0 }
    }

    /// Computes the smallest integer that is greater than or equal to `self`.
    pub fn ceil(&self) -> Decimal {
        if self.exp >= 0 {
            return self.rescale(0);
        }

        let digits = self.exp.unsigned_abs() as u64;
        let coeff = if digits > max_digits(&self.coeff) {
            if self.coeff.is_positive() {
                BigInt::from(1)
            } else {
                BigInt::zero()
            }
        } else {
            // The floor quotient plus one for any nonzero remainder, whatever the sign.
            let (quo, rem) = self.coeff.div_mod_floor(&pow10(digits));
            if rem.is_zero() {
                quo
            } else {
                quo + 1
            }
        };

        Decimal { coeff, exp: 0 }
    }

    /// Raise `self` to the power of `exponent`, returning an error if
    /// `self` is zero while `exponent` is negative or the exponent overflowed.
    ///
    /// Negative powers divide with [`DIVISION_PRECISION`] fractional digits.
    pub fn checked_pow(&self, exponent: i32) -> Result<Decimal, ArithmeticError> {
        if exponent == 0 {
            return Ok(Decimal::one());
        }

        // x^n = x^(n/2) * x^(n/2) * x^(n%2), where n/2 truncates toward zero
        let half = self.checked_pow(exponent / 2)?;
        let square = half.checked_mul(&half)?;
        if exponent % 2 == 0 {
            Ok(square)
        } else if exponent > 0 {
            square.checked_mul(self)
        } else {
            square.checked_div(self)
        }
    }

    /// Raise `self` to the power of `exponent`, panicking on a fatal condition.
    #[inline]
    pub fn pow(&self, exponent: i32) -> Decimal {
        fatal(self.checked_pow(exponent))
    }

    /// Encodes `self` to `writer` as binary bytes: the big-endian exponent, a header
    /// byte holding the encoding version and the sign, then the big-endian magnitude.
    /// Returns total size on success.
    pub fn encode<W: io::Write>(&self, mut writer: W) -> io::Result<usize> {
        writer.write_all(&self.exp.to_be_bytes())?;

        let (sign, magnitude) = self.coeff.to_bytes_be();
        let sign_bit = if sign == Sign::Minus { SIGN_MASK } else { 0 };
        writer.write_all(&[(BINARY_VERSION << VERSION_SHIFT) | sign_bit])?;

        let magnitude: &[u8] = if sign == Sign::NoSign { &[] } else { &magnitude };
        writer.write_all(magnitude)?;

        Ok(EXPONENT_SIZE + 1 + magnitude.len())
    }

    /// Encodes `self` into a new byte vector.
    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(EXPONENT_SIZE + 1 + self.coeff.bits() as usize / 8 + 1);
        match self.encode(&mut buf) {
            Ok(_) => buf,
            Err(e) => unreachable!("writing to a vector never fails: {}", e),
        }
    }

    /// Decodes a `Decimal` from binary bytes.
    ///
    /// A bare exponent without coefficient bytes decodes as zero.
    pub fn decode(bytes: &[u8]) -> Result<Decimal, DecimalDecodeError> {
        if bytes.len() < EXPONENT_SIZE {
            return Err(DecimalDecodeError::Truncated);
        }

        let (exp_bytes, rest) = bytes.split_at(EXPONENT_SIZE);
        let exp = i32::from_be_bytes(exp_bytes.try_into().map_err(|_| DecimalDecodeError::Truncated)?);

        let coeff = match rest.split_first() {
            None => BigInt::zero(),
            Some((&header, magnitude)) => {
                let version = header >> VERSION_SHIFT;
                if version != BINARY_VERSION {
                    return Err(DecimalDecodeError::UnsupportedVersion(version));
                }
                let sign = if header & SIGN_MASK != 0 { Sign::Minus } else { Sign::Plus };
                BigInt::from_bytes_be(sign, magnitude)
            }
        };

        Ok(Decimal { coeff, exp })
    }

    /// Writes the canonical text of `|self|`, keeping every stored fractional digit.
    pub(crate) fn fmt_magnitude<W: fmt::Write>(&self, mut w: W) -> fmt::Result {
        if self.exp >= 0 {
            let int_val = self.rescale(0).coeff;
            return write!(w, "{}.0", int_val.magnitude());
        }

        let digits = self.coeff.magnitude().to_str_radix(10);
        let scale = self.exp.unsigned_abs() as usize;
        if digits.len() > scale {
            let (int_digits, frac_digits) = digits.split_at(digits.len() - scale);
            w.write_str(int_digits)?;
            w.write_char('.')?;
            w.write_str(frac_digits)
        } else {
            w.write_str("0.")?;
            for _ in 0..scale - digits.len() {
                w.write_char('0')?;
            }
            w.write_str(&digits)
        }
    }
}

impl fmt::Display for Decimal {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rounded;
        let dec = match f.precision() {
            Some(prec) => {
                let prec = prec.try_into().map_err(|_| fmt::Error)?;
                rounded = self.checked_round(prec).map_err(|_| fmt::Error)?;
                &rounded
            }
            None => self,
        };

        let mut buf = String::new();
        dec.fmt_magnitude(&mut buf)?;
        f.pad_integral(dec.is_sign_positive(), "", &buf)
    }
}

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialEq<&Decimal> for Decimal {
    #[inline]
    fn eq(&self, other: &&Decimal) -> bool {
        self.eq(*other)
    }
}

impl PartialEq<Decimal> for &Decimal {
    #[inline]
    fn eq(&self, other: &Decimal) -> bool {
        (*self).eq(other)
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialOrd<&Decimal> for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &&Decimal) -> Option<Ordering> {
        self.partial_cmp(*other)
    }
}

impl PartialOrd<Decimal> for &Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        (*self).partial_cmp(other)
    }
}

impl Ord for Decimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // sign is different
        let sign_order = self.signum().cmp(&other.signum());
        if sign_order != Ordering::Equal || self.is_zero() {
            return sign_order;
        }

        if self.exp == other.exp {
            // fast path for same exponent
            return self.coeff.cmp(&other.coeff);
        }

        let (left, right, _) = self.align(other);
        left.as_ref().cmp(right.as_ref())
    }
}

impl Hash for Decimal {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.normalize();
        n.coeff.hash(state);
        n.exp.hash(state);
    }
}

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

//! Decimal parsing utilities.

use crate::error::DecimalParseError;
use crate::Decimal;
use num_bigint::{BigInt, BigUint, Sign as BigSign};
use std::convert::TryFrom;
use std::str::FromStr;

#[derive(Debug, PartialEq)]
enum Sign {
    Positive,
    Negative,
}

/// The interesting parts of a decimal string.
#[derive(Debug)]
struct Parts<'a> {
    pub sign: Sign,
    pub integral: &'a [u8],
    pub fractional: &'a [u8],
}

/// Splits a decimal string bytes into sign and the rest, without inspecting or validating the rest.
#[inline]
fn extract_sign(s: &[u8]) -> (Sign, &[u8]) {
    match s.first() {
        Some(b'+') => (Sign::Positive, &s[1..]),
        Some(b'-') => (Sign::Negative, &s[1..]),
        _ => (Sign::Positive, s),
    }
}

/// Carves off decimal digits up to the first non-digit character.
#[inline]
fn eat_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let i = s.iter().take_while(|&i| i.is_ascii_digit()).count();
    (&s[..i], &s[i..])
}

/// Checks if the input string is a valid decimal and if so, locate the integral
/// part and the fractional part in it.
///
/// The whole input must be consumed: no whitespace, no exponent and no second point.
fn parse_decimal(s: &[u8]) -> Result<Parts, DecimalParseError> {
    let (sign, s) = extract_sign(s);
    let (integral, s) = eat_digits(s);

    let (fractional, s) = match s.first() {
        Some(&b'.') => eat_digits(&s[1..]),
        _ => (&b""[..], s),
    };

    if !s.is_empty() || (integral.is_empty() && fractional.is_empty()) {
        return Err(DecimalParseError::InvalidFormat);
    }

    Ok(Parts {
        sign,
        integral,
        fractional,
    })
}

/// Parses a string slice and creates a decimal.
///
/// The exponent is the negated count of fractional digits, so trailing zeros
/// survive into the result.
#[inline]
fn from_str(s: &str) -> Result<Decimal, DecimalParseError> {
    let s = s.as_bytes();
    if s.is_empty() {
        return Err(DecimalParseError::Empty);
    }

    let Parts {
        sign,
        integral,
        fractional,
    } = parse_decimal(s)?;

    let scale = i32::try_from(fractional.len()).map_err(|_| DecimalParseError::Overflow)?;

    let mut digits = Vec::with_capacity(integral.len() + fractional.len());
    digits.extend_from_slice(integral);
    digits.extend_from_slice(fractional);

    let magnitude = BigUint::parse_bytes(&digits, 10).ok_or(DecimalParseError::InvalidFormat)?;
    let big_sign = match sign {
        Sign::Negative => BigSign::Minus,
        Sign::Positive => BigSign::Plus,
    };

    Ok(Decimal::new(BigInt::from_biguint(big_sign, magnitude), -scale))
}

impl FromStr for Decimal {
    type Err = DecimalParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s)
    }
}

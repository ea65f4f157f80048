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

//! Decimal, currency and money error definitions.

use thiserror::Error;

/// An error which can be returned when parsing a decimal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalParseError {
    /// Empty string.
    #[error("cannot parse number from empty string")]
    Empty,
    /// Characters other than a leading sign, digits and a single decimal point.
    #[error("invalid decimal format")]
    InvalidFormat,
    /// The fractional part does not fit the exponent range.
    #[error("value overflows number format")]
    Overflow,
}

/// A fatal arithmetic condition.
///
/// The operators and the non-`checked_` methods panic with this error's message;
/// the `checked_` methods return it. Either way it signals a programming error,
/// not a condition to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor is zero.
    #[error("decimal division by zero")]
    DivisionByZero,
    /// The resulting exponent leaves the `i32` range.
    #[error("decimal exponent overflows an i32")]
    ExponentOverflow,
}

/// An error which can be returned when a conversion between other type and decimal fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DecimalConvertError {
    /// Invalid decimal.
    #[error("invalid number")]
    Invalid,
    /// Decimal is overflowed.
    #[error("numeric overflow")]
    Overflow,
}

impl From<DecimalParseError> for DecimalConvertError {
    #[inline]
    fn from(e: DecimalParseError) -> Self {
        match e {
            DecimalParseError::Empty | DecimalParseError::InvalidFormat => DecimalConvertError::Invalid,
            DecimalParseError::Overflow => DecimalConvertError::Overflow,
        }
    }
}

/// An error which can be returned when decoding a decimal from its binary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecimalDecodeError {
    /// Fewer bytes than the exponent header.
    #[error("binary decimal is truncated")]
    Truncated,
    /// The coefficient header carries an unknown encoding version.
    #[error("unsupported binary decimal version {0}")]
    UnsupportedVersion(u8),
}

/// An error which can be returned when parsing or resolving a currency.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Malformed or unrecognised currency code.
    #[error("invalid currency `{0}`")]
    Invalid(String),
    /// The currency properties provider has no rounding data for the currency.
    #[error("unsupported currency `{0}`")]
    Unsupported(String),
}

/// An error which can be returned when parsing money.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The amount is not a valid decimal.
    #[error("invalid money amount: {0}")]
    Amount(#[from] DecimalParseError),
    /// The currency is not valid.
    #[error(transparent)]
    Currency(#[from] CurrencyError),
}

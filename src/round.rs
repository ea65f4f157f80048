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

//! Rounding to a count of fractional digits or to a multiple of a unit.

use crate::decimal::{fatal, precision_exponent, Decimal};
use crate::error::ArithmeticError;

/// Direction used when snapping a value to a multiple of a rounding unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Toward negative infinity.
    Down,
    /// Toward positive infinity.
    Up,
    /// To the nearest multiple, ties away from zero.
    ToNearest,
}

impl Decimal {
    /// Rounds half away from zero to `precision` fractional digits, returning
    /// an error if the exponent overflowed.
    ///
    /// The result exponent is always `-precision`; a negative `precision` rounds
    /// the integer part to the nearest `10^(-precision)`.
    pub fn checked_round(&self, precision: i32) -> Result<Decimal, ArithmeticError> {
        let exp = precision_exponent(precision)?;
        let guard_exp = exp.checked_sub(1).ok_or(ArithmeticError::ExponentOverflow)?;

        // keep one guard digit, push it by half a unit, then drop it toward zero
        let guarded = self.rescale(guard_exp);
        let half = if guarded.is_sign_negative() { -5 } else { 5 };
        let coeff = (guarded.coeff + half) / 10;

        Ok(Decimal { coeff, exp })
    }

    /// Rounds half away from zero to `precision` fractional digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_money::Decimal;
    ///
    /// let n: Decimal = "0.105".parse().unwrap();
    /// assert_eq!(n.round(2).to_string(), "0.11");
    /// let n: Decimal = "-0.105".parse().unwrap();
    /// assert_eq!(n.round(2).to_string(), "-0.11");
    /// ```
    #[inline]
    pub fn round(&self, precision: i32) -> Decimal {
        fatal(self.checked_round(precision))
    }

    /// Shifts `self` by half a unit at `precision` and rounds, unless `self`
    /// is already exact there.
    fn round_directed(&self, precision: i32, up: bool) -> Result<Decimal, ArithmeticError> {
        let rounded = self.checked_round(precision)?;
        if rounded == *self {
            return Ok(self.clone());
        }

        let exp = precision_exponent(precision)?;
        let half_exp = exp.checked_sub(1).ok_or(ArithmeticError::ExponentOverflow)?;
        let half = Decimal::new(5, half_exp);
        let shifted = if up { self + &half } else { self - &half };
        shifted.checked_round(precision)
    }

    /// Rounds toward positive infinity at `precision`, returning an error if the
    /// exponent overflowed. A value already exact at `precision` comes back unchanged.
    #[inline]
    pub fn checked_round_up(&self, precision: i32) -> Result<Decimal, ArithmeticError> {
        self.round_directed(precision, true)
    }

    /// Rounds toward positive infinity at `precision`.
    #[inline]
    pub fn round_up(&self, precision: i32) -> Decimal {
        fatal(self.checked_round_up(precision))
    }

    /// Rounds toward negative infinity at `precision`, returning an error if the
    /// exponent overflowed. A value already exact at `precision` comes back unchanged.
    #[inline]
    pub fn checked_round_down(&self, precision: i32) -> Result<Decimal, ArithmeticError> {
        self.round_directed(precision, false)
    }

    /// Rounds toward negative infinity at `precision`.
    #[inline]
    pub fn round_down(&self, precision: i32) -> Decimal {
        fatal(self.checked_round_down(precision))
    }

    /// Snaps `self` to the nearest multiple of `unit`, ties away from zero.
    ///
    /// The value is first rounded to the unit's own precision, so the result
    /// has the unit's exponent. A zero unit is a division by zero.
    pub fn checked_round_to_unit(&self, unit: &Decimal) -> Result<Decimal, ArithmeticError> {
        if unit.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let precision = precision_exponent(unit.exp)?;
        let rounded = self.checked_round(precision)?;
        let rem = rounded.checked_rem(unit)?;

        // the remainder has the sign of `rounded`, so measure it against a unit of that sign
        let unit = if rounded.is_sign_negative() {
            -unit.abs()
        } else {
            unit.abs()
        };

        let twice_rem = &rem + &rem;
        let away = if unit.is_sign_negative() {
            twice_rem <= unit
        } else {
            twice_rem >= unit
        };

        if away {
            Ok(&rounded + &(&unit - &rem))
        } else {
            Ok(&rounded - &rem)
        }
    }

    /// Snaps `self` to the nearest multiple of `unit`, ties away from zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_money::Decimal;
    ///
    /// let unit: Decimal = "0.05".parse().unwrap();
    /// let n: Decimal = "-0.13".parse().unwrap();
    /// assert_eq!(n.round_to_unit(&unit).to_string(), "-0.15");
    /// ```
    #[inline]
    pub fn round_to_unit(&self, unit: &Decimal) -> Decimal {
        fatal(self.checked_round_to_unit(unit))
    }

    /// Snaps `self` to a multiple of `unit` in the direction of `mode`.
    pub fn checked_round_with_mode(&self, unit: &Decimal, mode: RoundingMode) -> Result<Decimal, ArithmeticError> {
        if mode == RoundingMode::ToNearest {
            return self.checked_round_to_unit(unit);
        }
        if unit.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let precision = precision_exponent(unit.exp)?;
        let unit = unit.abs();

        if mode == RoundingMode::Up {
            let rounded = self.checked_round_up(precision)?.rescale(unit.exp);
            let rem = rounded.checked_rem(&unit)?;
            if rem.is_sign_negative() || rem.is_zero() {
                Ok(&rounded - &rem)
            } else {
                Ok(&rounded + &(&unit - &rem))
            }
        } else {
            let rounded = self.checked_round_down(precision)?.rescale(unit.exp);
            let rem = rounded.checked_rem(&unit)?;
            if rem.is_sign_negative() {
                Ok(&rounded - &(&unit + &rem))
            } else {
                Ok(&rounded - &rem)
            }
        }
    }

    /// Snaps `self` to a multiple of `unit` in the direction of `mode`.
    #[inline]
    pub fn round_with_mode(&self, unit: &Decimal, mode: RoundingMode) -> Decimal {
        fatal(self.checked_round_with_mode(unit, mode))
    }
}

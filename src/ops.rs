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

//! Ops implementation.
//!
//! Division by zero and exponent overflow are programming errors here, so the
//! operators panic; use the `checked_` methods to get them as values.

use crate::decimal::{fatal, Decimal};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        Decimal {
            coeff: -self.coeff,
            exp: self.exp,
        }
    }
}

impl Neg for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        Decimal {
            coeff: -&self.coeff,
            exp: self.exp,
        }
    }
}

impl Add<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline(always)]
    fn add(self, other: &Decimal) -> Self::Output {
        self.add_internal(other)
    }
}

impl Sub<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline(always)]
    fn sub(self, other: &Decimal) -> Self::Output {
        self.sub_internal(other)
    }
}

impl Mul<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline(always)]
    fn mul(self, other: &Decimal) -> Self::Output {
        fatal(self.checked_mul(other))
    }
}

impl Div<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline(always)]
    fn div(self, other: &Decimal) -> Self::Output {
        fatal(self.checked_div(other))
    }
}

impl Rem<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline(always)]
    fn rem(self, other: &Decimal) -> Self::Output {
        fatal(self.checked_rem(other))
    }
}

impl Sum for Decimal {
    #[inline(always)]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    #[inline(always)]
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::ZERO, Add::add)
    }
}

impl Product for Decimal {
    #[inline(always)]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal::one(), Mul::mul)
    }
}

impl<'a> Product<&'a Decimal> for Decimal {
    #[inline(always)]
    fn product<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::one(), Mul::mul)
    }
}

macro_rules! impl_arith_with_num {
    ($op: ident { $method: ident } $int: ty) => {
        impl $op<$int> for Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: $int) -> Self::Output {
                (&self).$method(&Decimal::from(other))
            }
        }

        impl $op<$int> for &'_ Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: $int) -> Self::Output {
                self.$method(&Decimal::from(other))
            }
        }

        impl $op<Decimal> for $int {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: Decimal) -> Self::Output {
                (&Decimal::from(self)).$method(&other)
            }
        }

        impl $op<&'_ Decimal> for $int {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: &'_ Decimal) -> Self::Output {
                (&Decimal::from(self)).$method(other)
            }
        }
    };
    ($op: ident { $method: ident } $($int: ty), * $(,)?) => {
        $(impl_arith_with_num!($op { $method } $int);)*
    };
}

macro_rules! impl_arith {
    ($op: ident { $method: ident }) => {
        impl $op for Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: Self) -> Self::Output {
                (&self).$method(&other)
            }
        }

        impl $op<&'_ Decimal> for Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: &Decimal) -> Self::Output {
                (&self).$method(other)
            }
        }

        impl $op<Decimal> for &'_ Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: Decimal) -> Self::Output {
                self.$method(&other)
            }
        }

        impl_arith_with_num!($op { $method } u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
    };
}

impl_arith!(Add { add });
impl_arith!(Sub { sub });
impl_arith!(Mul { mul });
impl_arith!(Div { div });
impl_arith!(Rem { rem });

macro_rules! impl_arith_assign_with_num {
    ($op: ident { $method: ident } $int: ty) => {
        impl $op<$int> for Decimal {
            #[inline(always)]
            fn $method(&mut self, other: $int) {
                self.$method(&Decimal::from(other))
            }
        }
    };
    ($op: ident { $method: ident } $($int: ty), * $(,)?) => {
        $(impl_arith_assign_with_num!($op { $method } $int);)*
    };
}

macro_rules! impl_arith_assign {
    ($op: ident { $method: ident } $arith: ident { $arith_method: ident }) => {
        impl $op<&Decimal> for Decimal {
            #[inline(always)]
            fn $method(&mut self, other: &Decimal) {
                let result = $arith::$arith_method(&*self, other);
                *self = result;
            }
        }

        impl $op<Decimal> for Decimal {
            #[inline(always)]
            fn $method(&mut self, other: Decimal) {
                self.$method(&other)
            }
        }

        impl_arith_assign_with_num!($op { $method } u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
    };
}

impl_arith_assign!(AddAssign { add_assign } Add { add });
impl_arith_assign!(SubAssign { sub_assign } Sub { sub });
impl_arith_assign!(MulAssign { mul_assign } Mul { mul });
impl_arith_assign!(DivAssign { div_assign } Div { div });
impl_arith_assign!(RemAssign { rem_assign } Rem { rem });

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Decimal {
        s.parse::<Decimal>().unwrap()
    }

    #[test]
    fn test_neg() {
        fn assert_neg(val: &str, expected: &str) {
            let val = parse(val);
            {
                let neg_val = -val.clone();
                assert_eq!(neg_val.to_string(), expected);
            }
            {
                let neg_val = -(&val);
                assert_eq!(neg_val.to_string(), expected);
            }
        }

        assert_neg("0.00", "0.00");
        assert_neg("1.5", "-1.5");
        assert_neg("-1.50", "1.50");
        assert_neg("-120", "120.0");
    }

    // The rendered text also pins the exponent of the result.
    #[test]
    fn test_add() {
        fn assert_add(val1: &str, val2: &str, expected: &str) {
            let var1 = parse(val1);
            let var2 = parse(val2);

            let result = &var1 + &var2;
            assert_eq!(result.to_string(), expected);

            let result = var2 + var1;
            assert_eq!(result.to_string(), expected);
        }

        assert_add("1.1", "2.25", "3.35");
        assert_add("120.00", "1", "121.00");
        assert_add("-0.5", "0.5", "0.0");
        assert_add("0.00", "-0.00", "0.00");
        assert_add("123456789.987654321", "987654321.123456789", "1111111111.111111110");
        assert_add("123456789.987654321", "-987654321.123456789", "-864197531.135802468");
        assert_add("00000.00000", "-987654321.123456789", "-987654321.123456789");
        assert_add("-123456789.987654321", "-987654321.123456789", "-1111111111.111111110");
        assert_add(
            "99999999999999999999999999999999999999.9",
            "0.1",
            "100000000000000000000000000000000000000.0",
        );
    }

    #[test]
    fn test_sub() {
        fn assert_sub(val1: &str, val2: &str, expected1: &str, expected2: &str) {
            let var1 = parse(val1);
            let var2 = parse(val2);

            let result1 = &var1 - &var2;
            assert_eq!(result1.to_string(), expected1);

            let result2 = var2 - var1;
            assert_eq!(result2.to_string(), expected2);
        }

        assert_sub("0.000000001", "100000000", "-99999999.999999999", "99999999.999999999");
        assert_sub("1.5", "1.50", "0.00", "0.00");
        assert_sub(
            "123456789.987654321",
            "987654321.123456789",
            "-864197531.135802468",
            "864197531.135802468",
        );
        assert_sub(
            "123456789.987654321",
            "00000.00000",
            "123456789.987654321",
            "-123456789.987654321",
        );
        assert_sub(
            "-123456789.987654321",
            "987654321.123456789",
            "-1111111111.111111110",
            "1111111111.111111110",
        );
    }

    #[test]
    fn test_mul() {
        fn assert_mul(val1: &str, val2: &str, expected: &str) {
            let var1 = parse(val1);
            let var2 = parse(val2);

            let result = &var1 * &var2;
            assert_eq!(result.to_string(), expected);

            let result = var2 * var1;
            assert_eq!(result.to_string(), expected);
        }

        assert_mul("24544.95034", "0.3451204593", "8470.964534836491162");
        assert_mul("-1.5", "2", "-3.0");
        assert_mul("1.10", "1.10", "1.2100");
        assert_mul("0.00", "-123.4", "0.000");
        assert_mul("-0.5", "-0.5", "0.25");
        assert_mul(
            "12345678901234567890.5",
            "10",
            "123456789012345678905.0",
        );
    }

    #[test]
    fn test_div() {
        fn assert_div(val1: &str, val2: &str, expected: &str) {
            let var1 = parse(val1);
            let var2 = parse(val2);

            let result = &var1 / &var2;
            assert_eq!(result.to_string(), expected);
        }

        assert_div("100.0", "1.08", "92.5925925925925926");
        assert_div("1023427554493.0", "43432632.0", "23563.5628642767953828");
        assert_div("10234274355545544493.0", "-3.0", "-3411424785181848164.3333333333333333");
        assert_div("2", "3", "0.6666666666666667");
        assert_div("-2", "3", "-0.6666666666666667");
        assert_div("2", "-3", "-0.6666666666666667");
        assert_div("-2", "-3", "0.6666666666666667");
        assert_div("1", "8", "0.1250000000000000");
        assert_div("0", "8", "0.0000000000000000");
        assert_div("6", "0.5", "12.0000000000000000");
    }

    #[test]
    fn test_rem() {
        fn assert_rem(val1: &str, val2: &str, expected: &str) {
            let var1 = parse(val1);
            let var2 = parse(val2);

            let result = &var1 % &var2;
            assert_eq!(result.to_string(), expected);
        }

        assert_rem("-10", "3", "-1.0");
        assert_rem("10", "-3", "1.0");
        assert_rem("10", "3", "1.0");
        assert_rem("-10", "-3", "-1.0");
        assert_rem("7.5", "2", "1.5");
        assert_rem("-7.5", "2", "-1.5");
        assert_rem("0.12", "0.05", "0.02");
        assert_rem("0.10", "0.05", "0.00");
    }

    #[test]
    #[should_panic(expected = "decimal division by zero")]
    fn test_div_by_zero() {
        let _ = Decimal::one() / Decimal::ZERO;
    }

    #[test]
    #[should_panic(expected = "decimal division by zero")]
    fn test_rem_by_zero() {
        let _ = parse("1.5") % parse("0.00");
    }

    #[test]
    #[should_panic(expected = "decimal exponent overflows an i32")]
    fn test_mul_exponent_overflow() {
        let _ = Decimal::new(1, i32::MIN) * Decimal::new(1, -1);
    }

    #[test]
    fn test_with_num() {
        assert_eq!((parse("1.5") + 1i32).to_string(), "2.5");
        assert_eq!((2i32 * parse("1.25")).to_string(), "2.50");
        assert_eq!((&parse("1.25") - 1u8).to_string(), "0.25");
        assert_eq!((10u64 / parse("4")).to_string(), "2.5000000000000000");
        assert_eq!((parse("7.5") % 2i128).to_string(), "1.5");
    }

    #[test]
    fn test_assign() {
        let mut val = parse("1.5");
        val += parse("0.25");
        assert_eq!(val.to_string(), "1.75");
        val -= &parse("0.75");
        assert_eq!(val.to_string(), "1.00");
        val *= 3;
        assert_eq!(val.to_string(), "3.00");
        val /= 2;
        assert_eq!(val.to_string(), "1.5000000000000000");
        val %= parse("1");
        assert_eq!(val.to_string(), "0.5000000000000000");
    }

    #[test]
    fn test_sum_product() {
        let values = vec![parse("1.10"), parse("2.2"), parse("-0.3")];
        let sum: Decimal = values.iter().sum();
        assert_eq!(sum.to_string(), "3.00");
        let product: Decimal = values.into_iter().product();
        assert_eq!(product, parse("-0.726"));

        let empty: Vec<Decimal> = vec![];
        assert_eq!(empty.iter().sum::<Decimal>(), Decimal::ZERO);
        assert_eq!(empty.into_iter().product::<Decimal>(), Decimal::one());
    }
}

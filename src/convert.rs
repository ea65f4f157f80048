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

//! Conversion between `Decimal` and primitive number types.

use crate::decimal::Decimal;
use crate::DecimalConvertError;
use num_bigint::BigInt;
use std::convert::TryFrom;

macro_rules! impl_from_int {
    ($ty: ty) => {
        impl From<$ty> for Decimal {
            #[inline]
            fn from(val: $ty) -> Self {
                Decimal::new(val, 0)
            }
        }
    };
    ($($ty: ty), * $(,)?) => {
        $(impl_from_int!($ty);)*
    };
}

impl_from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl From<bool> for Decimal {
    #[inline]
    fn from(b: bool) -> Self {
        if b {
            Decimal::one()
        } else {
            Decimal::ZERO
        }
    }
}

impl From<BigInt> for Decimal {
    #[inline]
    fn from(val: BigInt) -> Self {
        Decimal::new(val, 0)
    }
}

impl From<&BigInt> for Decimal {
    #[inline]
    fn from(val: &BigInt) -> Self {
        Decimal::new(val.clone(), 0)
    }
}

// `Display` for floats prints the shortest text that round-trips, never in exponent notation.
macro_rules! impl_try_from_float {
    ($ty: ty) => {
        impl TryFrom<$ty> for Decimal {
            type Error = DecimalConvertError;

            #[inline]
            fn try_from(value: $ty) -> std::result::Result<Self, Self::Error> {
                if value.is_nan() {
                    return Err(DecimalConvertError::Invalid);
                }
                if value.is_infinite() {
                    return Err(DecimalConvertError::Overflow);
                }

                let text = value.to_string();
                Ok(text.parse::<Decimal>()?)
            }
        }
    };
}

impl_try_from_float!(f32);
impl_try_from_float!(f64);

impl From<&Decimal> for f32 {
    #[inline]
    fn from(val: &Decimal) -> Self {
        fast_float::parse(val.to_string()).unwrap_or(f32::NAN)
    }
}

impl From<Decimal> for f32 {
    #[inline]
    fn from(val: Decimal) -> Self {
        f32::from(&val)
    }
}

impl From<&Decimal> for f64 {
    #[inline]
    fn from(val: &Decimal) -> Self {
        fast_float::parse(val.to_string()).unwrap_or(f64::NAN)
    }
}

impl From<Decimal> for f64 {
    #[inline]
    fn from(val: Decimal) -> Self {
        f64::from(&val)
    }
}

impl From<&Decimal> for BigInt {
    /// Truncates the fractional part.
    #[inline]
    fn from(val: &Decimal) -> Self {
        val.rescale(0).coeff
    }
}

macro_rules! impl_into_int {
    ($ty: ty) => {
        impl TryFrom<&Decimal> for $ty {
            type Error = DecimalConvertError;

            /// Truncates toward zero, failing if the integral part is out of range.
            #[inline]
            fn try_from(value: &Decimal) -> Result<Self, Self::Error> {
                let int_val = BigInt::from(value);
                <$ty>::try_from(&int_val).map_err(|_| DecimalConvertError::Overflow)
            }
        }

        impl TryFrom<Decimal> for $ty {
            type Error = DecimalConvertError;

            #[inline]
            fn try_from(value: Decimal) -> Result<Self, Self::Error> {
                <$ty>::try_from(&value)
            }
        }
    };
    ($($ty: ty), * $(,)?) => {
        $(impl_into_int!($ty);)*
    };
}

impl_into_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

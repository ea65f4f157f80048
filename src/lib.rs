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

//! Arbitrary precision fixed-point decimal with currency-aware rounding.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, `Decimal`, `Currency` and `Money` implement the
//! `serde::Serialize` and `serde::Deserialize` traits. A decimal is written as its canonical
//! string in human-readable formats and as its binary form otherwise.
//!
//! ## Usage
//!
//! To build a decimal, use [`Decimal`]. The count of fractional digits is kept:
//!
//! ```
//! use decimal_money::Decimal;
//!
//! let n1: Decimal = "120.00".parse().unwrap();
//! let n2: Decimal = "0.5".parse().unwrap();
//! let result = n1 + n2;
//! assert_eq!(result.to_string(), "120.50");
//! assert_eq!(result, "120.5".parse::<Decimal>().unwrap());
//! ```
//!
//! Division keeps 16 fractional digits, rounding half away from zero.
//!
//! ```
//! use decimal_money::Decimal;
//!
//! let n1: Decimal = "100.0".parse().unwrap();
//! let n2: Decimal = "1.08".parse().unwrap();
//! assert_eq!((n1 / n2).to_string(), "92.5925925925925926");
//! ```
//!
//! Currency rounding goes through a [`CurrencyRegistry`] built on a [`CurrencyProperties`]
//! provider, such as a [`CurrencyTable`]:
//!
//! ```
//! use decimal_money::{
//!     CurrencyRegistry, CurrencyRounding, CurrencyRoundingSet, CurrencyTable, RoundingMode,
//!     RoundingStandard,
//! };
//!
//! let table = CurrencyTable::new().with_currency(
//!     "CHF",
//!     CurrencyRoundingSet::uniform(2).with_cash(CurrencyRounding::new(2, 5)),
//! );
//! let registry = CurrencyRegistry::new(table);
//!
//! let money = registry.parse_money("120.03", "chf").unwrap();
//! let cash = money
//!     .round(&registry, RoundingStandard::Cash, RoundingMode::ToNearest)
//!     .unwrap();
//! assert_eq!(cash.to_string(), "120.05 CHF");
//! ```
//!
//! Decimal can be encoded to bytes and decoded from bytes.
//!
//! ```
//! use decimal_money::Decimal;
//!
//! let n1 = "123456789.987654321".parse::<Decimal>().unwrap();
//! let mut bytes = Vec::new();
//! n1.encode(&mut bytes).unwrap();
//! let n2 = Decimal::decode(&bytes).unwrap();
//! assert_eq!(n1, n2);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod convert;
mod currency;
mod decimal;
mod error;
mod money;
mod ops;
mod parse;
mod round;

#[cfg(feature = "serde")]
mod serde;

pub use crate::currency::{
    Currency, CurrencyProperties, CurrencyRegistry, CurrencyRounding, CurrencyRoundingSet, CurrencyTable,
    RoundingStandard,
};
pub use crate::decimal::{Decimal, DIVISION_PRECISION, EXPONENT_SIZE};
pub use crate::error::{
    ArithmeticError, CurrencyError, DecimalConvertError, DecimalDecodeError, DecimalParseError, MoneyError,
};
pub use crate::money::Money;
pub use crate::round::RoundingMode;

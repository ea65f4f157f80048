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

//! Amount of money in a currency.

use crate::currency::{Currency, CurrencyProperties, CurrencyRegistry, RoundingStandard};
use crate::decimal::Decimal;
use crate::error::{CurrencyError, MoneyError};
use crate::round::RoundingMode;
use std::fmt;

/// An amount in a currency.
///
/// Two values are equal when the currencies match and the amounts are
/// numerically equal, whatever their stored precision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Money {
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    #[inline]
    pub fn new(amount: Decimal, currency: Currency) -> Money {
        Money { amount, currency }
    }

    /// Rounds the amount with the rounding unit of its currency.
    #[inline]
    pub fn round<P: CurrencyProperties>(
        &self,
        registry: &CurrencyRegistry<P>,
        standard: RoundingStandard,
        mode: RoundingMode,
    ) -> Result<Money, CurrencyError> {
        let amount = registry.round(&self.amount, &self.currency, standard, mode)?;
        Ok(Money::new(amount, self.currency.clone()))
    }
}

impl fmt::Display for Money {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl<P: CurrencyProperties> CurrencyRegistry<P> {
    /// Parses an amount and a currency code into `Money`.
    ///
    /// The amount keeps its fractional digits, e.g. `"120.0"` has one.
    pub fn parse_money(&self, amount: &str, currency: &str) -> Result<Money, MoneyError> {
        let amount = amount.parse::<Decimal>()?;
        let currency = self.parse(currency)?;
        Ok(Money::new(amount, currency))
    }

    /// Checks that the currency of `money` is accepted by this registry.
    #[inline]
    pub fn validate_money(&self, money: &Money) -> Result<(), MoneyError> {
        self.validate(&money.currency)?;
        Ok(())
    }
}

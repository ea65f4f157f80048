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

//! Currency codes and currency-aware rounding.
//!
//! Rounding data comes from a [`CurrencyProperties`] provider. A
//! [`CurrencyRegistry`] wraps a provider together with the set of unofficial
//! codes (e.g. `ETH`, `USDC`) accepted next to ISO 4217 ones.

use crate::decimal::Decimal;
use crate::error::CurrencyError;
use crate::round::RoundingMode;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

#[inline]
fn normalize_code(text: &str) -> String {
    text.trim().to_ascii_uppercase()
}

#[inline]
fn is_well_formed(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[inline]
fn is_iso_shaped(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// A normalized currency code, e.g. `CHF` or `USDC`.
///
/// `FromStr` only normalizes and checks the syntax; use
/// [`CurrencyRegistry::parse`] to also require a known code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(String);

impl Currency {
    /// Returns the code.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks if the code has the shape of an ISO 4217 code, i.e. three ASCII letters.
    #[inline]
    pub fn is_iso_shaped(&self) -> bool {
        is_iso_shaped(&self.0)
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = normalize_code(s);
        if is_well_formed(&code) {
            Ok(Currency(code))
        } else {
            Err(CurrencyError::Invalid(s.to_owned()))
        }
    }
}

impl AsRef<str> for Currency {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named rounding policy of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RoundingStandard {
    /// Rounding for ordinary amounts.
    Standard,
    /// Rounding for cash transactions, e.g. to 0.05 CHF.
    Cash,
    /// Rounding for accounting.
    Accounting,
}

impl Default for RoundingStandard {
    #[inline]
    fn default() -> Self {
        RoundingStandard::Standard
    }
}

/// Rounding data of a currency under one standard: amounts are multiples of
/// `increment * 10^(-scale)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyRounding {
    pub scale: u16,
    pub increment: u32,
}

impl CurrencyRounding {
    #[inline]
    pub const fn new(scale: u16, increment: u32) -> CurrencyRounding {
        CurrencyRounding { scale, increment }
    }

    /// Returns the rounding unit, i.e. `increment * 10^(-scale)`.
    #[inline]
    pub fn unit(&self) -> Decimal {
        Decimal::new(self.increment, -(self.scale as i32))
    }
}

/// Rounding data of a currency under every standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyRoundingSet {
    pub standard: CurrencyRounding,
    pub cash: CurrencyRounding,
    pub accounting: CurrencyRounding,
}

impl CurrencyRoundingSet {
    /// Same rounding to `scale` digits with increment 1 under every standard.
    #[inline]
    pub const fn uniform(scale: u16) -> CurrencyRoundingSet {
        let rounding = CurrencyRounding::new(scale, 1);
        CurrencyRoundingSet {
            standard: rounding,
            cash: rounding,
            accounting: rounding,
        }
    }

    /// Replaces the cash rounding.
    #[inline]
    pub fn with_cash(mut self, cash: CurrencyRounding) -> CurrencyRoundingSet {
        self.cash = cash;
        self
    }

    #[inline]
    pub fn get(&self, standard: RoundingStandard) -> CurrencyRounding {
        match standard {
            RoundingStandard::Standard => self.standard,
            RoundingStandard::Cash => self.cash,
            RoundingStandard::Accounting => self.accounting,
        }
    }
}

/// Source of ISO 4217 knowledge and per-currency rounding data.
pub trait CurrencyProperties: Send + Sync {
    /// Checks if `code` (normalized) is a recognised ISO 4217 code.
    fn is_iso_code(&self, code: &str) -> bool;

    /// Returns the rounding of `currency` under `standard`, or `None` if unknown.
    fn rounding(&self, currency: &Currency, standard: RoundingStandard) -> Option<CurrencyRounding>;
}

/// In-memory [`CurrencyProperties`] filled by the embedder.
#[derive(Debug, Clone, Default)]
pub struct CurrencyTable {
    currencies: HashMap<String, CurrencyRoundingSet>,
}

impl CurrencyTable {
    #[inline]
    pub fn new() -> CurrencyTable {
        CurrencyTable::default()
    }

    /// Adds `code` with its rounding data, builder style.
    #[inline]
    pub fn with_currency(mut self, code: &str, rounding: CurrencyRoundingSet) -> CurrencyTable {
        self.insert(code, rounding);
        self
    }

    /// Adds or replaces `code` with its rounding data.
    #[inline]
    pub fn insert(&mut self, code: &str, rounding: CurrencyRoundingSet) {
        self.currencies.insert(normalize_code(code), rounding);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

impl CurrencyProperties for CurrencyTable {
    #[inline]
    fn is_iso_code(&self, code: &str) -> bool {
        is_iso_shaped(code) && self.currencies.contains_key(code)
    }

    #[inline]
    fn rounding(&self, currency: &Currency, standard: RoundingStandard) -> Option<CurrencyRounding> {
        self.currencies.get(currency.as_str()).map(|set| set.get(standard))
    }
}

/// Currency context: a [`CurrencyProperties`] provider plus the unofficial
/// codes registered at runtime.
///
/// The registry is shared by reference (or `Arc`) between threads; registering
/// takes a write lock while parsing only reads.
pub struct CurrencyRegistry<P> {
    properties: P,
    unofficial: RwLock<HashSet<String>>,
}

impl<P: fmt::Debug> fmt::Debug for CurrencyRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CurrencyRegistry")
            .field("properties", &self.properties)
            .field("unofficial", &*self.unofficial.read())
            .finish()
    }
}

impl<P: CurrencyProperties> CurrencyRegistry<P> {
    #[inline]
    pub fn new(properties: P) -> CurrencyRegistry<P> {
        CurrencyRegistry {
            properties,
            unofficial: RwLock::new(HashSet::new()),
        }
    }

    #[inline]
    pub fn properties(&self) -> &P {
        &self.properties
    }

    /// Parses a currency code.
    ///
    /// The text is trimmed and upper-cased; it must then be a registered
    /// unofficial code or an ISO 4217 code known to the provider.
    pub fn parse(&self, text: &str) -> Result<Currency, CurrencyError> {
        let code = normalize_code(text);

        if self.unofficial.read().contains(&code) {
            return Ok(Currency(code));
        }

        if is_iso_shaped(&code) && self.properties.is_iso_code(&code) {
            return Ok(Currency(code));
        }

        trace!("rejected currency code {:?}", text);
        Err(CurrencyError::Invalid(text.to_owned()))
    }

    /// Checks that `currency` is still accepted by [`CurrencyRegistry::parse`].
    #[inline]
    pub fn validate(&self, currency: &Currency) -> Result<(), CurrencyError> {
        self.parse(currency.as_str()).map(|_| ())
    }

    /// Registers a code that is not an ISO 4217 code, e.g. a crypto currency.
    ///
    /// Returns `Ok(true)` if the code was newly added and `Ok(false)` if it was
    /// already registered or is a known ISO code, which is never stored.
    pub fn register_unofficial(&self, code: &str) -> Result<bool, CurrencyError> {
        let normalized = normalize_code(code);
        if !is_well_formed(&normalized) {
            return Err(CurrencyError::Invalid(code.to_owned()));
        }

        if is_iso_shaped(&normalized) && self.properties.is_iso_code(&normalized) {
            return Ok(false);
        }

        let mut unofficial = self.unofficial.write();
        if unofficial.contains(&normalized) {
            return Ok(false);
        }

        debug!("registered unofficial currency {}", normalized);
        unofficial.insert(normalized);
        Ok(true)
    }

    /// Checks if `currency` was registered as an unofficial code.
    #[inline]
    pub fn is_unofficial(&self, currency: &Currency) -> bool {
        self.unofficial.read().contains(currency.as_str())
    }

    /// Returns the rounding of `currency` under `standard`.
    pub fn rounding(&self, currency: &Currency, standard: RoundingStandard) -> Result<CurrencyRounding, CurrencyError> {
        self.properties
            .rounding(currency, standard)
            .filter(|rounding| rounding.increment != 0)
            .ok_or_else(|| CurrencyError::Unsupported(currency.as_str().to_owned()))
    }

    /// Returns the count of fractional digits under [`RoundingStandard::Standard`].
    #[inline]
    pub fn scale(&self, currency: &Currency) -> Result<u16, CurrencyError> {
        self.rounding(currency, RoundingStandard::Standard)
            .map(|rounding| rounding.scale)
    }

    /// Returns the rounding unit of `currency` under `standard`,
    /// e.g. `0.05` for cash amounts in CHF.
    pub fn round_unit(&self, currency: &Currency, standard: RoundingStandard) -> Result<Decimal, CurrencyError> {
        let unit = self.rounding(currency, standard)?.unit();
        trace!("{:?} rounding unit of {} is {}", standard, currency, unit);
        Ok(unit)
    }

    /// Rounds `amount` to a multiple of the rounding unit of `currency`.
    ///
    /// The result has the unit's exponent, e.g. two fractional digits for CHF.
    #[inline]
    pub fn round(
        &self,
        amount: &Decimal,
        currency: &Currency,
        standard: RoundingStandard,
        mode: RoundingMode,
    ) -> Result<Decimal, CurrencyError> {
        let unit = self.round_unit(currency, standard)?;
        Ok(amount.round_with_mode(&unit, mode))
    }
}

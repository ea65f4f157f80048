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

//! serde implementation.

use crate::currency::Currency;
use crate::Decimal;

impl serde::Serialize for Decimal {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }
}

impl<'de> serde::Deserialize<'de> for Decimal {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct DecimalVisitor;

        impl<'de> serde::de::Visitor<'de> for DecimalVisitor {
            type Value = Decimal;

            #[inline]
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "a decimal")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Decimal, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(serde::de::Error::custom)
            }

            #[inline]
            fn visit_bytes<E>(self, v: &[u8]) -> Result<Decimal, E>
            where
                E: serde::de::Error,
            {
                Decimal::decode(v).map_err(serde::de::Error::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(DecimalVisitor)
        } else {
            deserializer.deserialize_bytes(DecimalVisitor)
        }
    }
}

impl serde::Serialize for Currency {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Currency {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct CurrencyVisitor;

        impl<'de> serde::de::Visitor<'de> for CurrencyVisitor {
            type Value = Currency;

            #[inline]
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "a currency code")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Currency, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(CurrencyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::RoundingStandard;
    use crate::Money;

    #[test]
    fn test_serde() {
        let dec = "123.456".parse::<Decimal>().unwrap();

        let json = serde_json::to_string(&dec).unwrap();
        assert_eq!(json, r#""123.456""#);
        let json_dec: Decimal = serde_json::from_str(&json).unwrap();
        assert_eq!(json_dec, dec);

        let bin = bincode::serialize(&dec).unwrap();
        let bin_dec: Decimal = bincode::deserialize(&bin).unwrap();
        assert_eq!(bin_dec, dec);
    }

    #[test]
    fn test_serde_keeps_precision() {
        fn assert_json(text: &str) {
            let dec = text.parse::<Decimal>().unwrap();
            let json = serde_json::to_string(&dec).unwrap();
            assert_eq!(json, format!("\"{}\"", text));
            let back: Decimal = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), text);

            let bin = bincode::serialize(&dec).unwrap();
            let back: Decimal = bincode::deserialize(&bin).unwrap();
            assert_eq!(back.to_string(), text);
        }

        assert_json("120.00");
        assert_json("0.0");
        assert_json("-0.001");
        assert_json("123456789012345678901234567890.123456789");
    }

    #[test]
    fn test_serde_errors() {
        assert!(serde_json::from_str::<Decimal>("120.5").is_err());
        assert!(serde_json::from_str::<Decimal>(r#""12,5""#).is_err());
        assert!(serde_json::from_str::<Decimal>(r#""1e5""#).is_err());
        assert!(serde_json::from_str::<Currency>(r#""c-h""#).is_err());
    }

    #[test]
    fn test_serde_currency() {
        let currency: Currency = serde_json::from_str(r#"" chf ""#).unwrap();
        assert_eq!(currency.as_str(), "CHF");
        assert_eq!(serde_json::to_string(&currency).unwrap(), r#""CHF""#);

        assert_eq!(serde_json::to_string(&RoundingStandard::Cash).unwrap(), r#""cash""#);
        let standard: RoundingStandard = serde_json::from_str(r#""accounting""#).unwrap();
        assert_eq!(standard, RoundingStandard::Accounting);
    }

    #[test]
    fn test_serde_money() {
        let money = Money::new("120.00".parse().unwrap(), "CHF".parse().unwrap());

        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, r#"{"amount":"120.00","currency":"CHF"}"#);
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
        assert_eq!(back.amount.to_string(), "120.00");

        let bin = bincode::serialize(&money).unwrap();
        let back: Money = bincode::deserialize(&bin).unwrap();
        assert_eq!(back.to_string(), "120.00 CHF");
    }
}

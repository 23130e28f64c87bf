// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::DashError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Smallest rate a user can store (0.0001).
pub const MIN_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// Largest rate a user can store (1,000,000).
pub const MAX_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Rates against a fixed base currency.
///
/// Every entry is "units of that currency per 1 base unit" except `inverse`,
/// which is quoted as "base units per 1 unit of that currency" (EURUSD style).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub base: String,
    pub inverse: String,
    pub rates: BTreeMap<String, Decimal>,
}

impl Default for RateTable {
    fn default() -> Self {
        let mut rates = BTreeMap::new();
        rates.insert("BRL".to_string(), Decimal::new(500, 2));
        rates.insert("EUR".to_string(), Decimal::new(108, 2));
        rates.insert("JPY".to_string(), Decimal::new(15000, 2));
        Self {
            base: "USD".to_string(),
            inverse: "EUR".to_string(),
            rates,
        }
    }
}

impl RateTable {
    /// Base currency first, then the quoted currencies in code order.
    pub fn currencies(&self) -> Vec<String> {
        std::iter::once(self.base.clone())
            .chain(self.rates.keys().cloned())
            .collect()
    }

    pub fn knows(&self, ccy: &str) -> bool {
        ccy == self.base || self.rates.contains_key(ccy)
    }

    pub fn rate(&self, ccy: &str) -> Option<Decimal> {
        self.rates.get(ccy).copied()
    }

    /// Stores the clamped value of a raw user input and returns it.
    pub fn set_rate(&mut self, ccy: &str, raw: &str) -> Result<Decimal, DashError> {
        let ccy = ccy.trim().to_uppercase();
        if ccy == self.base {
            return Err(DashError::BaseCurrencyRate(ccy));
        }
        let rate = clamp_rate(raw);
        self.rates.insert(ccy, rate);
        Ok(rate)
    }
}

/// Non-numeric input counts as zero; the result always lies in
/// `MIN_RATE..=MAX_RATE`. Numbers too large for a `Decimal` cap at `MAX_RATE`.
pub fn clamp_rate(raw: &str) -> Decimal {
    let raw = raw.trim();
    let parsed = match raw.parse::<Decimal>() {
        Ok(d) => d,
        Err(_) => match raw.parse::<f64>() {
            Ok(f) if f >= MAX_RATE.to_f64().unwrap_or(f64::MAX) => MAX_RATE,
            Ok(f) if f.is_finite() => Decimal::try_from(f).unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        },
    };
    parsed.clamp(MIN_RATE, MAX_RATE)
}

/// Multiplier turning a base-currency amount into `display` currency.
pub fn conversion_factor(display: &str, rates: &RateTable) -> Decimal {
    if display == rates.base {
        return Decimal::ONE;
    }
    let Some(rate) = rates.rate(display) else {
        let currency = display;
        warn!(currency, "no rate configured, showing base amounts");
        return Decimal::ONE;
    };
    let rate = rate.clamp(MIN_RATE, MAX_RATE);
    if display == rates.inverse {
        Decimal::ONE / rate
    } else {
        rate
    }
}

/// Saturates at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
pub fn convert(amount: Decimal, factor: Decimal) -> Decimal {
    amount.saturating_mul(factor)
}

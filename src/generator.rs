// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::SaleRecord;
use chrono::{Duration, NaiveDateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use uuid::Uuid;

pub const DEFAULT_COUNT: usize = 500;
pub const DEFAULT_DAYS: u32 = 90;

pub const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

// (category, products, unit price range in cents)
const CATALOG: [(&str, [&str; 3], (i64, i64)); 5] = [
    ("Electronics", ["Laptop", "Headphones", "Monitor"], (5_000, 150_000)),
    ("Clothing", ["Jacket", "Sneakers", "T-Shirt"], (1_500, 20_000)),
    ("Food", ["Coffee Beans", "Olive Oil", "Chocolate"], (300, 4_000)),
    ("Home", ["Lamp", "Cookware Set", "Bedding"], (2_000, 40_000)),
    ("Sports", ["Yoga Mat", "Bicycle", "Tennis Racket"], (1_500, 90_000)),
];

pub fn categories() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(c, _, _)| *c)
}

pub fn generate_default() -> Vec<SaleRecord> {
    generate(
        DEFAULT_COUNT,
        DEFAULT_DAYS,
        Utc::now().naive_utc(),
        &mut rand::thread_rng(),
    )
}

/// `count` records spread over the `days` days before `now`, oldest first.
pub fn generate<R: Rng>(
    count: usize,
    days: u32,
    now: NaiveDateTime,
    rng: &mut R,
) -> Vec<SaleRecord> {
    let span_secs = i64::from(days.max(1)) * 86_400;
    let mut out: Vec<SaleRecord> = (0..count)
        .map(|_| {
            let (category, products, (lo, hi)) = CATALOG[rng.gen_range(0..CATALOG.len())];
            let product = products.choose(rng).copied().unwrap_or("Item");
            let region = REGIONS[rng.gen_range(0..REGIONS.len())];
            let quantity: u32 = rng.gen_range(1..=20);
            let unit_cents = rng.gen_range(lo..=hi);
            let sales = Decimal::new(unit_cents * i64::from(quantity), 2);
            // margin in [-15%, 35%)
            let margin = Decimal::new(rng.gen_range(-15..35), 2);
            let profit = (sales * margin).round_dp(2);
            SaleRecord {
                id: Uuid::new_v4(),
                date: now - Duration::seconds(rng.gen_range(0..span_secs)),
                category: category.to_string(),
                region: region.to_string(),
                product: product.to_string(),
                quantity,
                sales,
                profit,
            }
        })
        .collect();
    out.sort_by_key(|r| r.date);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_records_are_ordered_and_in_vocabulary() {
        let now = chrono::NaiveDate::from_ymd_opt(2025, 6, 30)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let recs = generate(200, 30, now, &mut rng);
        assert_eq!(recs.len(), 200);
        assert!(recs.windows(2).all(|w| w[0].date <= w[1].date));
        for r in &recs {
            assert!(REGIONS.contains(&r.region.as_str()));
            assert!(categories().any(|c| c == r.category));
            assert!(r.quantity >= 1 && r.quantity <= 20);
            assert!(r.sales > Decimal::ZERO);
            assert!(r.date <= now && r.date > now - Duration::days(30));
        }
    }
}

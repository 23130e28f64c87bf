// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{FilterSelection, SaleRecord};
use std::collections::BTreeSet;

/// Records passing the region/category selection, in input order.
pub fn filter_records<'a, I>(records: I, selection: &FilterSelection) -> Vec<&'a SaleRecord>
where
    I: IntoIterator<Item = &'a SaleRecord>,
{
    if selection.is_unrestricted() {
        return records.into_iter().collect();
    }
    records
        .into_iter()
        .filter(|r| selection.matches(r))
        .collect()
}

/// Sorted distinct values of one text attribute, e.g. the selectable regions.
pub fn distinct_values<'a, I, F>(records: I, accessor: F) -> Vec<String>
where
    I: IntoIterator<Item = &'a SaleRecord>,
    F: Fn(&'a SaleRecord) -> &'a str,
{
    records
        .into_iter()
        .map(accessor)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

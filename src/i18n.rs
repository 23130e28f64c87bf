// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! User-facing labels for the generated vocabulary and table columns.
//!
//! Records keep their raw category/region codes; labels are only used for
//! display, export headers and text sorting.

use crate::error::DashError;
use crate::models::SortField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Pt => f.write_str("pt"),
        }
    }
}

impl FromStr for Language {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Language::En),
            "pt" | "pt-br" | "portuguese" => Ok(Language::Pt),
            _ => Err(DashError::UnknownLanguage(s.to_string())),
        }
    }
}

// (code, en, pt)
const VOCABULARY: &[(&str, &str, &str)] = &[
    ("Electronics", "Electronics", "Eletrônicos"),
    ("Clothing", "Clothing", "Vestuário"),
    ("Food", "Food", "Alimentos"),
    ("Home", "Home", "Casa"),
    ("Sports", "Sports", "Esportes"),
    ("Uncategorized", "Uncategorized", "Sem categoria"),
    ("North", "North", "Norte"),
    ("South", "South", "Sul"),
    ("East", "East", "Leste"),
    ("West", "West", "Oeste"),
    ("Central", "Central", "Centro"),
    ("Unknown", "Unknown", "Desconhecido"),
];

/// Label for a category/region code; values outside the vocabulary pass through.
pub fn label(lang: Language, code: &str) -> &str {
    match VOCABULARY.iter().find(|(c, _, _)| *c == code) {
        Some((_, en, pt)) => match lang {
            Language::En => *en,
            Language::Pt => *pt,
        },
        None => code,
    }
}

pub fn column_label(lang: Language, field: SortField) -> &'static str {
    match (lang, field) {
        (Language::En, SortField::Date) => "Date",
        (Language::En, SortField::Category) => "Category",
        (Language::En, SortField::Region) => "Region",
        (Language::En, SortField::Product) => "Product",
        (Language::En, SortField::Sales) => "Sales",
        (Language::En, SortField::Quantity) => "Quantity",
        (Language::En, SortField::Profit) => "Profit",
        (Language::Pt, SortField::Date) => "Data",
        (Language::Pt, SortField::Category) => "Categoria",
        (Language::Pt, SortField::Region) => "Região",
        (Language::Pt, SortField::Product) => "Produto",
        (Language::Pt, SortField::Sales) => "Vendas",
        (Language::Pt, SortField::Quantity) => "Quantidade",
        (Language::Pt, SortField::Profit) => "Lucro",
    }
}

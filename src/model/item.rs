use std::collections::HashSet;

use serde::Serialize;

use crate::error::MaxDiffError;

pub const DEFAULT_WEIGHT: f64 = 1.0;

const RETAIL_FEATURES: [(&str, f64); 6] = [
    ("Free Shipping", 3.0),
    ("Same-Day Delivery", 2.5),
    ("Easy Returns", 2.0),
    ("Extended Warranty", 0.6),
    ("Loyalty Points", 1.0),
    ("Discount Coupons", 1.4),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub label: String,
    pub weight: f64,
}

impl Item {
    pub fn new(label: impl Into<String>) -> Self {
        Self::weighted(label, DEFAULT_WEIGHT)
    }

    pub fn weighted(label: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, MaxDiffError> {
        if items.is_empty() {
            return Err(MaxDiffError::config("catalog must contain at least one item"));
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.label.is_empty() {
                return Err(MaxDiffError::config("item labels must be non-empty"));
            }
            if !seen.insert(item.label.as_str()) {
                return Err(MaxDiffError::config(format!(
                    "duplicate item label in catalog: {}",
                    item.label
                )));
            }
            if !item.weight.is_finite() || item.weight <= 0.0 {
                return Err(MaxDiffError::config(format!(
                    "weight for '{}' must be finite and > 0 (got {})",
                    item.label, item.weight
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self, MaxDiffError> {
        Self::new(labels.iter().map(|l| Item::new(l.as_ref())).collect())
    }

    pub fn retail_v1() -> Self {
        Self {
            items: RETAIL_FEATURES
                .iter()
                .map(|(label, _)| Item::new(*label))
                .collect(),
        }
    }

    pub fn retail_latent_v1() -> Self {
        Self {
            items: RETAIL_FEATURES
                .iter()
                .map(|(label, weight)| Item::weighted(*label, *weight))
                .collect(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.items.iter().position(|item| item.label == label)
    }

    pub fn is_uniform(&self) -> bool {
        match self.items.first() {
            Some(first) => self.items.iter().all(|item| item.weight == first.weight),
            None => true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/item.rs"]
mod tests;

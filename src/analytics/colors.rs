// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Stable category to palette-slot mapping.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::models::Transaction;

const DEFAULT_PALETTE: [&str; 6] = [
    "#4F46E5", "#22C55E", "#EC4899", "#F59E0B", "#6366F1", "#14B8A6",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Palette must contain at least one color")]
    Empty,
}

/// Ordered list of opaque color identifiers. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self(colors))
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryColor {
    pub category: String,
    pub slot: usize,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorAssignment {
    palette: Palette,
    slots: HashMap<String, usize>,
    order: Vec<String>,
}

impl ColorAssignment {
    /// Walks the expenses of the snapshot in their given order; the n-th
    /// distinct expense category gets slot `n % palette size`. Income
    /// categories never take a slot.
    pub fn from_snapshot(snapshot: &[Transaction], palette: &Palette) -> Self {
        let size = palette.colors().len();
        let mut slots = HashMap::new();
        let mut order = Vec::new();
        for t in snapshot.iter().filter(|t| t.is_expense()) {
            if !slots.contains_key(&t.category) {
                slots.insert(t.category.clone(), order.len() % size);
                order.push(t.category.clone());
            }
        }
        Self {
            palette: palette.clone(),
            slots,
            order,
        }
    }

    pub fn slot_for(&self, category: &str) -> Option<usize> {
        self.slots.get(category).copied()
    }

    pub fn color_for(&self, category: &str) -> Option<&str> {
        self.slot_for(category).and_then(|s| self.palette.get(s))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Assignments in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = CategoryColor> + '_ {
        self.order.iter().map(|c| {
            let slot = self.slots[c];
            CategoryColor {
                category: c.clone(),
                slot,
                color: self.palette.get(slot).unwrap_or_default().to_string(),
            }
        })
    }
}

//! Product domain model.
//!
//! # Responsibility
//! - Define the read-side row entity (`Product`) and the write-side
//!   draft (`ProductDraft`).
//!
//! # Invariants
//! - `product_id` is assigned exactly once, by the store, at insert time
//!   and is never reassigned or reused.
//! - Field-range checking belongs to the boundary form, not this model.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the database-side sequence on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProductId = i64;

/// One persisted row of the `product` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Sequence-assigned primary key.
    pub product_id: ProductId,
    /// Product display name.
    pub pname: String,
    /// Stock quantity.
    pub quantity: i64,
    /// Unit price.
    pub price: i64,
}

/// Write-side shape carrying only the mutable fields.
///
/// Used for `save` (no identifier exists yet) and `update` (the target
/// identifier travels separately). The store trusts these values as-is;
/// range rules are enforced upstream by the boundary form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub pname: String,
    pub quantity: i64,
    pub price: i64,
}

impl ProductDraft {
    pub fn new(pname: impl Into<String>, quantity: i64, price: i64) -> Self {
        Self {
            pname: pname.into(),
            quantity,
            price,
        }
    }
}

impl Product {
    /// Returns the draft projection of this row (identifier dropped).
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            pname: self.pname.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }
}

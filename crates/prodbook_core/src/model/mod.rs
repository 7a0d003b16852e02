//! Domain model for the product catalog.
//!
//! # Responsibility
//! - Define the canonical row entity and the write-side draft shape.
//!
//! # Invariants
//! - Every persisted product is identified by a stable `ProductId`.
//! - Identifiers are assigned by the store, never by callers.

pub mod product;

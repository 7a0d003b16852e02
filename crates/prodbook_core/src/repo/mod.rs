//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the product data-access contract.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Zero-row outcomes are values (`None`, affected count 0), never errors.
//! - Engine failures propagate unchanged as `RepoError::Db`.

pub mod product_repo;

//! Boundary validation forms.
//!
//! # Responsibility
//! - Check caller-supplied field values before they reach the store.
//!
//! # Invariants
//! - The store itself never re-checks these rules; write paths that go
//!   through the service layer validate here first.

pub mod save_form;

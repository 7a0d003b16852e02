//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate form validation and repository calls into use-case APIs.
//! - Keep outer layers decoupled from storage details.

pub mod product_service;

//! Save/update input form with field-level validation.
//!
//! # Responsibility
//! - Model raw form input for product writes (`pname`, `quantity`, `price`).
//! - Report every rule violation at once as field-level errors.
//!
//! # Invariants
//! - A successful `validate()` is the only way to obtain a `ProductDraft`
//!   from form input.
//! - Blankness is judged on the trimmed value; length on the raw value.

use crate::model::product::ProductDraft;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const PNAME_MIN_CHARS: usize = 2;
pub const PNAME_MAX_CHARS: usize = 10;
pub const QUANTITY_MAX: i64 = 1000;
pub const PRICE_MIN: i64 = 1000;

/// Raw form input for product create/update.
///
/// `quantity` and `price` are optional because form input may simply be
/// absent; absence is a validation failure, not a panic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveForm {
    pub pname: String,
    pub quantity: Option<i64>,
    pub price: Option<i64>,
}

/// One field-level rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    PnameBlank,
    PnameLength { actual: usize },
    QuantityMissing,
    QuantityNotPositive { actual: i64 },
    QuantityTooLarge { actual: i64 },
    PriceMissing,
    PriceNotPositive { actual: i64 },
    PriceTooSmall { actual: i64 },
}

impl FieldError {
    /// Name of the offending form field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::PnameBlank | Self::PnameLength { .. } => "pname",
            Self::QuantityMissing
            | Self::QuantityNotPositive { .. }
            | Self::QuantityTooLarge { .. } => "quantity",
            Self::PriceMissing | Self::PriceNotPositive { .. } | Self::PriceTooSmall { .. } => {
                "price"
            }
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PnameBlank => write!(f, "pname must not be blank"),
            Self::PnameLength { actual } => write!(
                f,
                "pname must be {PNAME_MIN_CHARS}-{PNAME_MAX_CHARS} characters, got {actual}"
            ),
            Self::QuantityMissing => write!(f, "quantity is required"),
            Self::QuantityNotPositive { actual } => {
                write!(f, "quantity must be positive, got {actual}")
            }
            Self::QuantityTooLarge { actual } => {
                write!(f, "quantity must be at most {QUANTITY_MAX}, got {actual}")
            }
            Self::PriceMissing => write!(f, "price is required"),
            Self::PriceNotPositive { actual } => {
                write!(f, "price must be positive, got {actual}")
            }
            Self::PriceTooSmall { actual } => {
                write!(f, "price must be at least {PRICE_MIN}, got {actual}")
            }
        }
    }
}

/// Aggregate of every violation found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFormErrors(pub Vec<FieldError>);

impl SaveFormErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// True when the given field carries at least one violation.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|err| err.field() == field)
    }
}

impl Display for SaveFormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
            first = false;
        }
        Ok(())
    }
}

impl Error for SaveFormErrors {}

impl SaveForm {
    pub fn new(pname: impl Into<String>, quantity: Option<i64>, price: Option<i64>) -> Self {
        Self {
            pname: pname.into(),
            quantity,
            price,
        }
    }

    /// Checks every field rule and returns the draft on success.
    ///
    /// # Contract
    /// - All violations are collected; the first failure does not stop
    ///   later checks.
    /// - The draft carries the raw `pname` value, not a trimmed copy.
    pub fn validate(&self) -> Result<ProductDraft, SaveFormErrors> {
        let mut errors = Vec::new();

        if self.pname.trim().is_empty() {
            errors.push(FieldError::PnameBlank);
        } else {
            let chars = self.pname.chars().count();
            if !(PNAME_MIN_CHARS..=PNAME_MAX_CHARS).contains(&chars) {
                errors.push(FieldError::PnameLength { actual: chars });
            }
        }

        match self.quantity {
            None => errors.push(FieldError::QuantityMissing),
            Some(value) if value <= 0 => {
                errors.push(FieldError::QuantityNotPositive { actual: value });
            }
            Some(value) if value > QUANTITY_MAX => {
                errors.push(FieldError::QuantityTooLarge { actual: value });
            }
            Some(_) => {}
        }

        match self.price {
            None => errors.push(FieldError::PriceMissing),
            Some(value) if value <= 0 => {
                errors.push(FieldError::PriceNotPositive { actual: value });
            }
            Some(value) if value < PRICE_MIN => {
                errors.push(FieldError::PriceTooSmall { actual: value });
            }
            Some(_) => {}
        }

        if let (true, Some(quantity), Some(price)) =
            (errors.is_empty(), self.quantity, self.price)
        {
            return Ok(ProductDraft {
                pname: self.pname.clone(),
                quantity,
                price,
            });
        }

        Err(SaveFormErrors(errors))
    }
}

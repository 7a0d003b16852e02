//! Product use-case service.
//!
//! # Responsibility
//! - Run boundary validation before any write reaches the repository.
//! - Delegate reads and deletes without reinterpretation.
//!
//! # Invariants
//! - `register_product`/`modify_product` only pass drafts that survived
//!   `SaveForm::validate()`.
//! - Affected-row counts from the repository pass through unchanged; the
//!   caller decides what a count of 0 means.

use crate::form::save_form::{SaveForm, SaveFormErrors};
use crate::model::product::{Product, ProductId};
use crate::repo::product_repo::{ProductRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for product use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Form input violated one or more field rules.
    Validation(SaveFormErrors),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "{errors}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<SaveFormErrors> for ServiceError {
    fn from(value: SaveFormErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper for product CRUD operations.
pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates form input and registers a new product.
    ///
    /// # Contract
    /// - Returns the sequence-assigned identifier on success.
    /// - Nothing is written when validation fails.
    pub fn register_product(&self, form: &SaveForm) -> ServiceResult<ProductId> {
        let draft = form.validate()?;
        let product_id = self.repo.save(&draft)?;
        info!("event=product_register module=service status=ok product_id={product_id}");
        Ok(product_id)
    }

    /// Validates form input and overwrites an existing product's fields.
    ///
    /// Returns the affected-row count; 0 means no such product.
    pub fn modify_product(&self, product_id: ProductId, form: &SaveForm) -> ServiceResult<usize> {
        let draft = form.validate()?;
        let changed = self.repo.update(product_id, &draft)?;
        info!(
            "event=product_modify module=service status=ok product_id={product_id} changed={changed}"
        );
        Ok(changed)
    }

    /// Gets one product by identifier.
    pub fn get_product(&self, product_id: ProductId) -> ServiceResult<Option<Product>> {
        Ok(self.repo.find_by_id(product_id)?)
    }

    /// Lists every product.
    pub fn list_products(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.repo.find_all()?)
    }

    /// Deletes one product by identifier. Returns the affected-row count.
    pub fn delete_product(&self, product_id: ProductId) -> ServiceResult<usize> {
        Ok(self.repo.delete(product_id)?)
    }

    /// Deletes every product. Returns the number of rows removed.
    pub fn delete_all_products(&self) -> ServiceResult<usize> {
        Ok(self.repo.delete_all()?)
    }

    /// True iff a product with the identifier exists.
    pub fn product_exists(&self, product_id: ProductId) -> ServiceResult<bool> {
        Ok(self.repo.is_exist(product_id)?)
    }

    /// Total registered product count.
    pub fn count_products(&self) -> ServiceResult<i64> {
        Ok(self.repo.count_of_record()?)
    }
}

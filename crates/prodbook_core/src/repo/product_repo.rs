//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Translate the product CRUD contract into parameterized SQL against
//!   the `product` table.
//! - Map result rows to the `Product` entity by explicit column name.
//!
//! # Invariants
//! - `save` never accepts a caller-supplied identifier; the id comes from
//!   the database-side sequence.
//! - "No such row" is reported as `None` or an affected count of 0 and is
//!   never conflated with an execution failure.
//! - The repository performs no field-range validation; that belongs to
//!   the boundary form.

use crate::db::DbError;
use crate::model::product::{Product, ProductDraft, ProductId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PRODUCT_SELECT_SQL: &str = "SELECT product_id, pname, quantity, price FROM product";

const REQUIRED_COLUMNS: [&str; 4] = ["product_id", "pname", "quantity", "price"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for product persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{column}` in table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for product CRUD operations.
///
/// Affected-row counts are returned verbatim; interpreting 0 as
/// "not found" is the caller's responsibility.
pub trait ProductRepository {
    /// Inserts a new row and returns the sequence-assigned identifier.
    fn save(&self, draft: &ProductDraft) -> RepoResult<ProductId>;
    /// Looks up one row by exact key match. `None` when no row matches.
    fn find_by_id(&self, product_id: ProductId) -> RepoResult<Option<Product>>;
    /// Overwrites the three mutable fields. Returns the affected count (0 or 1).
    fn update(&self, product_id: ProductId, draft: &ProductDraft) -> RepoResult<usize>;
    /// Deletes one row by identifier. Returns the affected count (0 or 1).
    fn delete(&self, product_id: ProductId) -> RepoResult<usize>;
    /// Deletes every row. Returns the number of rows removed.
    fn delete_all(&self) -> RepoResult<usize>;
    /// Returns every row in the engine's natural scan order; callers must
    /// not rely on any ordering guarantee.
    fn find_all(&self) -> RepoResult<Vec<Product>>;
    /// True iff a row with the identifier exists.
    fn is_exist(&self, product_id: ProductId) -> RepoResult<bool>;
    /// Total row count.
    fn count_of_record(&self) -> RepoResult<i64>;
}

/// SQLite-backed product repository.
pub struct SqliteProductRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version does not match
    ///   this binary.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the `product`
    ///   table shape is not usable.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn save(&self, draft: &ProductDraft) -> RepoResult<ProductId> {
        // product_id is omitted on purpose: the AUTOINCREMENT sequence owns it.
        self.conn.execute(
            "INSERT INTO product (pname, quantity, price) VALUES (?1, ?2, ?3);",
            params![draft.pname.as_str(), draft.quantity, draft.price],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn find_by_id(&self, product_id: ProductId) -> RepoResult<Option<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} WHERE product_id = ?1;"))?;

        let mut rows = stmt.query([product_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_product_row(row)?));
        }

        Ok(None)
    }

    fn update(&self, product_id: ProductId, draft: &ProductDraft) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE product
             SET
                pname = ?1,
                quantity = ?2,
                price = ?3
             WHERE product_id = ?4;",
            params![draft.pname.as_str(), draft.quantity, draft.price, product_id],
        )?;

        Ok(changed)
    }

    fn delete(&self, product_id: ProductId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM product WHERE product_id = ?1;", [product_id])?;

        Ok(changed)
    }

    fn delete_all(&self) -> RepoResult<usize> {
        let changed = self.conn.execute("DELETE FROM product;", [])?;

        Ok(changed)
    }

    fn find_all(&self) -> RepoResult<Vec<Product>> {
        let mut stmt = self.conn.prepare(&format!("{PRODUCT_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut products = Vec::new();

        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        Ok(products)
    }

    fn is_exist(&self, product_id: ProductId) -> RepoResult<bool> {
        // COUNT compared against zero; the table is small enough that an
        // EXISTS-optimized probe buys nothing.
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM product WHERE product_id = ?1;",
            [product_id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    fn count_of_record(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM product;", [], |row| row.get(0))?;

        Ok(count)
    }
}

// Column lookup is by name, never positional, so the mapping survives
// column reordering in the schema.
fn parse_product_row(row: &Row<'_>) -> RepoResult<Product> {
    Ok(Product {
        product_id: row.get("product_id")?,
        pname: row.get("pname")?,
        quantity: row.get("quantity")?,
        price: row.get("price")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = crate::db::migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "product")? {
        return Err(RepoError::MissingRequiredTable("product"));
    }

    for column in REQUIRED_COLUMNS {
        if !table_has_column(conn, "product", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "product",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

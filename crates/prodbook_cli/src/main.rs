//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `prodbook_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use prodbook_core::db::open_db_in_memory;
use prodbook_core::{core_version, ProductDraft, ProductRepository, SqliteProductRepository};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("prodbook_core version={}", core_version());

    // One in-memory write/read cycle proves the store end to end without
    // touching the filesystem.
    let conn = open_db_in_memory()?;
    let repo = SqliteProductRepository::try_new(&conn)?;
    let product_id = repo.save(&ProductDraft::new("Pen", 100, 2000))?;
    let loaded = repo
        .find_by_id(product_id)?
        .ok_or("saved product should be readable")?;

    println!(
        "prodbook_core smoke product_id={} pname={} rows={}",
        loaded.product_id,
        loaded.pname,
        repo.count_of_record()?
    );
    Ok(())
}

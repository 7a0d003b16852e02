use prodbook_core::db::migrations::latest_version;
use prodbook_core::db::open_db_in_memory;
use prodbook_core::{
    Product, ProductDraft, ProductRepository, ProductService, RepoError, SaveForm, ServiceError,
    SqliteProductRepository,
};
use rusqlite::Connection;

#[test]
fn save_then_find_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();

    let draft = ProductDraft::new("Pen", 100, 2000);
    let product_id = repo.save(&draft).unwrap();

    let loaded = repo.find_by_id(product_id).unwrap().unwrap();
    assert_eq!(
        loaded,
        Product {
            product_id,
            pname: "Pen".to_string(),
            quantity: 100,
            price: 2000,
        }
    );
}

#[test]
fn save_assigns_strictly_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();

    let first = repo.save(&ProductDraft::new("Pen", 100, 2000)).unwrap();
    let second = repo.save(&ProductDraft::new("Eraser", 10, 1000)).unwrap();
    let third = repo.save(&ProductDraft::new("Ruler", 5, 1500)).unwrap();

    assert!(second > first);
    assert!(third > second);
}

#[test]
fn deleted_ids_are_never_reassigned() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();

    let first = repo.save(&ProductDraft::new("Pen", 100, 2000)).unwrap();
    assert_eq!(repo.delete(first).unwrap(), 1);

    let second = repo.save(&ProductDraft::new("Eraser", 10, 1000)).unwrap();
    assert!(second > first);
}

#[test]
fn find_by_id_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();

    assert_eq!(repo.find_by_id(42).unwrap(), None);
}

#[test]
fn update_existing_row_returns_one_and_persists_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();

    let product_id = repo.save(&ProductDraft::new("Pen", 100, 2000)).unwrap();

    let changed = repo
        .update(product_id, &ProductDraft::new("Pencil", 50, 1500))
        .unwrap();
    assert_eq!(changed, 1);

    let loaded = repo.find_by_id(product_id).unwrap().unwrap();
    assert_eq!(loaded.pname, "Pencil");
    assert_eq!(loaded.quantity, 50);
    assert_eq!(loaded.price, 1500);
    assert_eq!(loaded.product_id, product_id);
}

#[test]
fn update_unknown_id_returns_zero_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();

    let product_id = repo.save(&ProductDraft::new("Pen", 100, 2000)).unwrap();

    let changed = repo
        .update(product_id + 1, &ProductDraft::new("Pencil", 50, 1500))
        .unwrap();
    assert_eq!(changed, 0);

    let loaded = repo.find_by_id(product_id).unwrap().unwrap();
    assert_eq!(loaded.pname, "Pen");
    assert_eq!(loaded.quantity, 100);
    assert_eq!(loaded.price, 2000);
}

#[test]
fn delete_returns_one_then_zero_for_same_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();

    let product_id = repo.save(&ProductDraft::new("Pen", 100, 2000)).unwrap();

    assert_eq!(repo.delete(product_id).unwrap(), 1);
    assert_eq!(repo.delete(product_id).unwrap(), 0);
    assert_eq!(repo.find_by_id(product_id).unwrap(), None);
}

#[test]
fn delete_all_empties_the_table_and_reports_removed_count() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();

    repo.save(&ProductDraft::new("Pen", 100, 2000)).unwrap();
    repo.save(&ProductDraft::new("Eraser", 10, 1000)).unwrap();
    repo.save(&ProductDraft::new("Ruler", 5, 1500)).unwrap();

    assert_eq!(repo.delete_all().unwrap(), 3);
    assert_eq!(repo.count_of_record().unwrap(), 0);
    assert!(repo.find_all().unwrap().is_empty());
    assert_eq!(repo.delete_all().unwrap(), 0);
}

#[test]
fn find_all_returns_every_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();

    let id_a = repo.save(&ProductDraft::new("Pen", 100, 2000)).unwrap();
    let id_b = repo.save(&ProductDraft::new("Eraser", 10, 1000)).unwrap();

    let all = repo.find_all().unwrap();
    assert_eq!(all.len(), 2);

    let mut ids: Vec<_> = all.iter().map(|product| product.product_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![id_a, id_b]);
}

#[test]
fn is_exist_agrees_with_find_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();

    let product_id = repo.save(&ProductDraft::new("Pen", 100, 2000)).unwrap();

    assert!(repo.is_exist(product_id).unwrap());
    assert!(repo.find_by_id(product_id).unwrap().is_some());

    repo.delete(product_id).unwrap();
    assert!(!repo.is_exist(product_id).unwrap());
    assert!(repo.find_by_id(product_id).unwrap().is_none());
}

#[test]
fn count_of_record_tracks_inserts_and_deletes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();

    assert_eq!(repo.count_of_record().unwrap(), 0);

    let product_id = repo.save(&ProductDraft::new("Pen", 100, 2000)).unwrap();
    repo.save(&ProductDraft::new("Eraser", 10, 1000)).unwrap();
    assert_eq!(repo.count_of_record().unwrap(), 2);

    repo.delete(product_id).unwrap();
    assert_eq!(repo.count_of_record().unwrap(), 1);
}

#[test]
fn full_lifecycle_scenario() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();

    let product_id = repo.save(&ProductDraft::new("Pen", 100, 2000)).unwrap();
    let loaded = repo.find_by_id(product_id).unwrap().unwrap();
    assert_eq!(loaded.to_draft(), ProductDraft::new("Pen", 100, 2000));

    assert_eq!(
        repo.update(product_id, &ProductDraft::new("Pencil", 50, 1500))
            .unwrap(),
        1
    );
    let updated = repo.find_by_id(product_id).unwrap().unwrap();
    assert_eq!(updated.to_draft(), ProductDraft::new("Pencil", 50, 1500));

    assert_eq!(repo.delete(product_id).unwrap(), 1);
    assert_eq!(repo.find_by_id(product_id).unwrap(), None);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteProductRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_product_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteProductRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("product"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE product (
            product_id INTEGER PRIMARY KEY AUTOINCREMENT,
            pname      TEXT NOT NULL,
            quantity   INTEGER NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteProductRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "product",
            column: "price"
        })
    ));
}

#[test]
fn service_validates_before_touching_the_store() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();
    let service = ProductService::new(repo);

    let invalid = SaveForm::new("P", Some(0), None);
    let err = service.register_product(&invalid).unwrap_err();
    match err {
        ServiceError::Validation(errors) => {
            assert!(errors.has_field("pname"));
            assert!(errors.has_field("quantity"));
            assert!(errors.has_field("price"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(service.count_products().unwrap(), 0);

    let valid = SaveForm::new("Pen", Some(100), Some(2000));
    let product_id = service.register_product(&valid).unwrap();
    let loaded = service.get_product(product_id).unwrap().unwrap();
    assert_eq!(loaded.pname, "Pen");
    assert_eq!(service.count_products().unwrap(), 1);
    assert!(service.product_exists(product_id).unwrap());
}

#[test]
fn service_modify_passes_affected_count_through() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(&conn).unwrap();
    let service = ProductService::new(repo);

    let product_id = service
        .register_product(&SaveForm::new("Pen", Some(100), Some(2000)))
        .unwrap();

    let changed = service
        .modify_product(product_id, &SaveForm::new("Pencil", Some(50), Some(1500)))
        .unwrap();
    assert_eq!(changed, 1);

    let missing = service
        .modify_product(product_id + 1, &SaveForm::new("Pencil", Some(50), Some(1500)))
        .unwrap();
    assert_eq!(missing, 0);

    assert_eq!(service.delete_product(product_id).unwrap(), 1);
    assert_eq!(service.delete_all_products().unwrap(), 0);
    assert!(service.list_products().unwrap().is_empty());
}

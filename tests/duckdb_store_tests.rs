use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use inventory_ai::connector::{open_in_memory_database, open_inventory_database};
use inventory_ai::{
    CreateProductUseCase, DomainError, DuckdbProductRepository, DuckdbQueryExecutor,
    DuckdbSupplierRepository, GetProductUseCase, InMemoryProductCache, NewProduct, NewSupplier,
    Product, ProductCache, ProductRepository, QueryExecutor, SupplierRepository,
};
use tempfile::tempdir;

#[tokio::test]
async fn supplier_and_product_roundtrip_through_file_database() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("inventory.duckdb");

    let conn = open_inventory_database(&db_path).expect("duckdb init");
    let suppliers = DuckdbSupplierRepository::with_connection(Arc::clone(&conn));
    let products = DuckdbProductRepository::with_connection(conn);

    let acme = suppliers
        .save(&NewSupplier::new("Acme"))
        .await
        .expect("save supplier");
    let widget = products
        .save(&NewProduct::new("Widget", 12, 2.5, acme.id()))
        .await
        .expect("save product");

    assert_eq!(widget.name(), "Widget");
    assert_eq!(widget.quantity(), 12);
    assert_eq!(widget.price(), 2.5);
    assert_eq!(widget.supplier(), Some(&acme));

    let found = products
        .find_by_id(widget.id())
        .await
        .expect("find_by_id")
        .expect("product exists");
    assert_eq!(found, widget);

    assert!(products.find_by_id(widget.id() + 100).await.expect("query").is_none());
    assert!(suppliers.find_by_id(acme.id() + 100).await.expect("query").is_none());
}

#[tokio::test]
async fn file_database_survives_reopen() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("inventory.duckdb");

    {
        let conn = open_inventory_database(&db_path).expect("duckdb init");
        let suppliers = DuckdbSupplierRepository::with_connection(conn);
        suppliers.save(&NewSupplier::new("Acme")).await.expect("save");
    }

    let conn = open_inventory_database(&db_path).expect("duckdb reopen");
    let suppliers = DuckdbSupplierRepository::with_connection(conn);
    let listed = suppliers.list().await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name(), "Acme");
}

#[tokio::test]
async fn lists_are_ordered_by_id() {
    let conn = open_in_memory_database().expect("duckdb init");
    let suppliers = DuckdbSupplierRepository::with_connection(Arc::clone(&conn));
    let products = DuckdbProductRepository::with_connection(conn);

    let first = suppliers.save(&NewSupplier::new("Zeta")).await.expect("save");
    let second = suppliers.save(&NewSupplier::new("Alpha")).await.expect("save");
    assert!(second.id() > first.id());

    products
        .save(&NewProduct::new("Bolt", 100, 0.1, first.id()))
        .await
        .expect("save");
    products
        .save(&NewProduct::new("Nut", 200, 0.05, second.id()))
        .await
        .expect("save");

    let names: Vec<String> = suppliers
        .list()
        .await
        .expect("list")
        .iter()
        .map(|s| s.name().to_string())
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);

    let listed = products.list().await.expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name(), "Bolt");
    assert_eq!(listed[1].supplier().map(|s| s.name()), Some("Alpha"));
}

#[tokio::test]
async fn executor_returns_rows_keyed_by_column() {
    let conn = open_in_memory_database().expect("duckdb init");
    let suppliers = DuckdbSupplierRepository::with_connection(Arc::clone(&conn));
    let products = DuckdbProductRepository::with_connection(Arc::clone(&conn));
    let executor = DuckdbQueryExecutor::with_connection(conn);

    let acme = suppliers.save(&NewSupplier::new("Acme")).await.expect("save");
    products
        .save(&NewProduct::new("Widget", 3, 4.0, acme.id()))
        .await
        .expect("save");
    products
        .save(&NewProduct::new("Gadget", 0, 9.5, acme.id()))
        .await
        .expect("save");

    let rows = executor
        .execute(
            "SELECT p.name, p.quantity, p.price, s.name AS supplier \
             FROM product p JOIN supplier s ON s.id = p.supplier_id ORDER BY p.id;",
        )
        .await
        .expect("execute");

    assert_eq!(rows.len(), 2);
    let columns: Vec<&String> = rows[0].keys().collect();
    assert_eq!(columns, vec!["name", "quantity", "price", "supplier"]);
    assert_eq!(rows[0]["name"], "Widget");
    assert_eq!(rows[0]["quantity"], 3);
    assert_eq!(rows[1]["price"], 9.5);
    assert_eq!(rows[1]["supplier"], "Acme");
}

#[tokio::test]
async fn executor_reports_invalid_sql_as_storage_error() {
    let executor =
        DuckdbQueryExecutor::with_connection(open_in_memory_database().expect("duckdb init"));
    let result = executor.execute("SELECT * FROM warehouse").await;
    assert!(matches!(result, Err(DomainError::StorageError(_))));
}

#[tokio::test]
async fn executor_refuses_multiple_statements() {
    let executor =
        DuckdbQueryExecutor::with_connection(open_in_memory_database().expect("duckdb init"));

    for sql in [
        "SELECT 1; DROP TABLE product;",
        "SELECT 1 -- it's\n; DROP TABLE product; --'",
        "SELECT 1 /* ' */; DROP TABLE product; /* ' */",
    ] {
        let result = executor.execute(sql).await;
        assert!(
            matches!(result, Err(DomainError::UnsafeStatement(_))),
            "expected refusal for {sql:?}"
        );
    }

    let rows = executor
        .execute("SELECT COUNT(*) AS n FROM product")
        .await
        .expect("product table still exists");
    assert_eq!(rows[0]["n"], 0);
}

#[tokio::test]
async fn create_product_requires_existing_supplier() {
    let conn = open_in_memory_database().expect("duckdb init");
    let use_case = CreateProductUseCase::new(
        Arc::new(DuckdbProductRepository::with_connection(Arc::clone(&conn))),
        Arc::new(DuckdbSupplierRepository::with_connection(conn)),
    );

    let err = use_case
        .execute(NewProduct::new("Widget", 1, 1.0, 42))
        .await
        .expect_err("supplier 42 does not exist");
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Not found: Supplier not found with id: 42");

    let err = use_case
        .execute(NewProduct::new("", 1, 1.0, 42))
        .await
        .expect_err("blank name");
    assert!(err.is_invalid_input());
}

/// Counts lookups so cache hits can be observed.
struct CountingProductRepository {
    inner: DuckdbProductRepository,
    lookups: AtomicUsize,
}

#[async_trait]
impl ProductRepository for CountingProductRepository {
    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError> {
        self.inner.save(product).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.inner.list().await
    }
}

#[tokio::test]
async fn get_product_reads_through_cache() {
    let conn = open_in_memory_database().expect("duckdb init");
    let suppliers = DuckdbSupplierRepository::with_connection(Arc::clone(&conn));
    let repo = Arc::new(CountingProductRepository {
        inner: DuckdbProductRepository::with_connection(conn),
        lookups: AtomicUsize::new(0),
    });
    let cache = Arc::new(InMemoryProductCache::new());
    let use_case = GetProductUseCase::new(repo.clone(), cache.clone());

    let acme = suppliers.save(&NewSupplier::new("Acme")).await.expect("save");
    let widget = repo
        .save(&NewProduct::new("Widget", 5, 1.0, acme.id()))
        .await
        .expect("save");

    let first = use_case.execute(widget.id()).await.expect("first lookup");
    let second = use_case.execute(widget.id()).await.expect("second lookup");
    assert_eq!(first, second);
    assert_eq!(repo.lookups.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len().await, 1);

    let missing = use_case.execute(widget.id() + 1).await;
    assert!(matches!(missing, Err(DomainError::NotFound(_))));
    assert_eq!(cache.len().await, 1, "misses are not cached");
}

//! PostgreSQL-backed tests; run with `cargo test -- --ignored` where Docker is available

use domain_products::{
    CreateProduct, PageQuery, PgProductRepository, ProductError, ProductRepository,
    ProductService, SaveProduct, UpdateProduct,
};
use test_utils::assertions::{assert_some, assert_unique};
use test_utils::{TestDataBuilder, TestDatabase};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_crud_round_trip() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("crud_round_trip");

    let created = service
        .create_product(CreateProduct::new(
            builder.category("electronics"),
            builder.name("phone", "1"),
        ))
        .await
        .unwrap();
    assert!(created.id > 0);

    let updated = service
        .update_product(
            created.id,
            UpdateProduct::new(builder.category("electronics"), "smartphone"),
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(service.get_product(created.id).await.unwrap(), updated);

    service.delete_product(created.id).await.unwrap();
    assert!(matches!(
        service.get_product(created.id).await,
        Err(ProductError::NotFound(id)) if id == created.id
    ));
    assert!(matches!(
        service.delete_product(created.id).await,
        Err(ProductError::NotFound(id)) if id == created.id
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_ids_are_not_reused_after_delete() {
    let db = TestDatabase::new().await;
    let repository = PgProductRepository::new(db.connection());

    let first = repository
        .save(SaveProduct::New(CreateProduct::new("books", "a")))
        .await
        .unwrap();
    repository.delete_by_id(first.id).await.unwrap();
    let second = repository
        .save(SaveProduct::New(CreateProduct::new("books", "b")))
        .await
        .unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_category_pages() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("category_pages");
    let books = builder.category("books");

    for i in 0..5 {
        service
            .create_product(CreateProduct::new(&books, builder.name("book", &i.to_string())))
            .await
            .unwrap();
    }
    service
        .create_product(CreateProduct::new(builder.category("toys"), "kite"))
        .await
        .unwrap();

    let mut ids = Vec::new();
    for page_index in 0..3 {
        let page = service.list_by_category(&books, page_index, 2).await.unwrap();
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
        ids.extend(page.items.iter().map(|p| p.id));
    }
    assert_eq!(ids.len(), 5);
    assert_unique(&ids, "ids across pages");

    let beyond = service.list_by_category(&books, 3, 2).await.unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total_elements, 5);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unfiltered_page_sorted_by_category_then_id() {
    let db = TestDatabase::new().await;
    let repository = PgProductRepository::new(db.connection());

    let mut saved = Vec::new();
    for category in ["b", "a", "c", "a"] {
        let product = repository
            .save(SaveProduct::New(CreateProduct::new(category, "item")))
            .await
            .unwrap();
        saved.push(product);
    }

    let (items, total) = repository
        .find_page_by_category(PageQuery::new(None, 0, 10).unwrap())
        .await
        .unwrap();

    assert_eq!(total, 4);
    let order: Vec<_> = items.iter().map(|p| (p.category.as_str(), p.id)).collect();
    assert_eq!(
        order,
        vec![
            ("a", saved[1].id),
            ("a", saved[3].id),
            ("b", saved[0].id),
            ("c", saved[2].id),
        ]
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_distinct_categories() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    assert!(service.list_categories().await.unwrap().is_empty());

    for (category, name) in [("books", "a"), ("toys", "b"), ("books", "c")] {
        service
            .create_product(CreateProduct::new(category, name))
            .await
            .unwrap();
    }

    let categories = service.list_categories().await.unwrap();
    assert_unique(&categories, "categories");
    assert_eq!(categories.len(), 2);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_existing_overwrites_row() {
    let db = TestDatabase::new().await;
    let repository = PgProductRepository::new(db.connection());

    let created = repository
        .save(SaveProduct::New(CreateProduct::new("books", "draft")))
        .await
        .unwrap();
    let mut revised = created.clone();
    revised.name = "final".to_string();
    repository
        .save(SaveProduct::Existing(revised.clone()))
        .await
        .unwrap();

    let stored = assert_some(
        repository.find_by_id(created.id).await.unwrap(),
        "saved product",
    );
    assert_eq!(stored, revised);
}

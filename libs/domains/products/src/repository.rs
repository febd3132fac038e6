use async_trait::async_trait;
use database::DatabaseResult;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Product, ProductId, SaveProduct};
use crate::pagination::PageQuery;

/// Repository trait for Product persistence
///
/// Stores own no business policy. Absence is an empty result, never an
/// error; every `Err` is a storage fault.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Point lookup
    async fn find_by_id(&self, id: ProductId) -> DatabaseResult<Option<Product>>;

    /// Insert a new product under a fresh id, or overwrite the record at an
    /// existing product's id.
    ///
    /// Saving an existing product is an upsert: if the row was deleted in the
    /// meantime it is written back under the same id. Concurrent writers to
    /// one id are last-writer-wins, including a delete racing an update.
    async fn save(&self, product: SaveProduct) -> DatabaseResult<Product>;

    /// Remove a product; a missing id is a no-op
    async fn delete_by_id(&self, id: ProductId) -> DatabaseResult<()>;

    /// One page of matching products plus the total number of matches.
    ///
    /// Ties on the sort key are broken by ascending id.
    async fn find_page_by_category(&self, query: PageQuery)
    -> DatabaseResult<(Vec<Product>, u64)>;

    /// Every category used by at least one product, without duplicates, in
    /// no particular order
    async fn find_distinct_categories(&self) -> DatabaseResult<Vec<String>>;
}

#[derive(Debug, Default)]
struct Catalog {
    products: BTreeMap<ProductId, Product>,
    last_id: ProductId,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn by_category_then_id(a: &Product, b: &Product) -> Ordering {
    a.category.cmp(&b.category).then(a.id.cmp(&b.id))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: ProductId) -> DatabaseResult<Option<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products.get(&id).cloned())
    }

    async fn save(&self, product: SaveProduct) -> DatabaseResult<Product> {
        let mut catalog = self.catalog.write().await;

        let product = match product {
            SaveProduct::New(input) => {
                catalog.last_id += 1;
                Product {
                    id: catalog.last_id,
                    category: input.category,
                    name: input.name,
                }
            }
            SaveProduct::Existing(product) => {
                // Keep the sequence ahead of any id written directly
                catalog.last_id = catalog.last_id.max(product.id);
                product
            }
        };

        catalog.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Saved product");
        Ok(product)
    }

    async fn delete_by_id(&self, id: ProductId) -> DatabaseResult<()> {
        let mut catalog = self.catalog.write().await;

        if catalog.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(())
    }

    async fn find_page_by_category(
        &self,
        query: PageQuery,
    ) -> DatabaseResult<(Vec<Product>, u64)> {
        let catalog = self.catalog.read().await;

        let mut matching: Vec<&Product> = catalog
            .products
            .values()
            .filter(|p| query.matches(&p.category))
            .collect();
        matching.sort_by(|a, b| by_category_then_id(a, b));

        let total = matching.len() as u64;

        let items = match query.offset() {
            Some(offset) => matching
                .into_iter()
                .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                .take(usize::try_from(query.page_size()).unwrap_or(usize::MAX))
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        Ok((items, total))
    }

    async fn find_distinct_categories(&self) -> DatabaseResult<Vec<String>> {
        let catalog = self.catalog.read().await;

        let categories: BTreeSet<&String> =
            catalog.products.values().map(|p| &p.category).collect();
        Ok(categories.into_iter().cloned().collect())
    }
}

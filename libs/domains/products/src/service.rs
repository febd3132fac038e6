use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductId, UpdateProduct};
use crate::pagination::{PageQuery, PageResult};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
///
/// The only place that decides whether an id exists; stores just report
/// what they hold.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist a new product under a freshly minted id
    #[instrument(skip(self, input), fields(category = %input.category))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        Ok(self.repository.save(input.into()).await?)
    }

    /// Get a product by ID
    #[instrument(skip(self), fields(product_id = id))]
    pub async fn get_product(&self, id: ProductId) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Replace category and name of an existing product, keeping its id
    #[instrument(skip(self, input), fields(product_id = id))]
    pub async fn update_product(&self, id: ProductId, input: UpdateProduct) -> ProductResult<Product> {
        let current = self.get_product(id).await?;
        let revised = current.with_details(input);

        Ok(self.repository.save(revised.into()).await?)
    }

    /// Delete an existing product; deleting an absent id is `NotFound`
    #[instrument(skip(self), fields(product_id = id))]
    pub async fn delete_product(&self, id: ProductId) -> ProductResult<()> {
        self.get_product(id).await?;
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    /// One page of the products in `category`, ordered by category ascending
    #[instrument(skip(self))]
    pub async fn list_by_category(
        &self,
        category: &str,
        page_index: u64,
        page_size: u64,
    ) -> ProductResult<PageResult<Product>> {
        let query = PageQuery::new(Some(category.to_string()), page_index, page_size)
            .map_err(|e| ProductError::InvalidArgument(e.to_string()))?;

        let (items, total_elements) = self
            .repository
            .find_page_by_category(query.clone())
            .await?;

        Ok(PageResult::new(items, total_elements, &query))
    }

    /// Every category in use; empty when the catalog is empty
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ProductResult<Vec<String>> {
        Ok(self.repository.find_distinct_categories().await?)
    }
}

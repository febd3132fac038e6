use async_trait::async_trait;
use database::{BaseRepository, DatabaseResult};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

use crate::{
    entity,
    models::{Product, ProductId, SaveProduct},
    pagination::PageQuery,
    repository::ProductRepository,
};

#[derive(Clone)]
pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

/// Matching rows ordered by category ascending, ties by id
fn page_select(query: &PageQuery) -> Select<entity::Entity> {
    let mut select = entity::Entity::find();

    if let Some(category) = query.category_filter() {
        select = select.filter(entity::Column::Category.eq(category));
    }

    select
        .order_by_asc(entity::Column::Category)
        .order_by_asc(entity::Column::Id)
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: ProductId) -> DatabaseResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn save(&self, product: SaveProduct) -> DatabaseResult<Product> {
        let model = match product {
            SaveProduct::New(input) => {
                let active_model: entity::ActiveModel = input.into();
                self.base.insert(active_model).await?
            }
            SaveProduct::Existing(product) => {
                // Single-statement upsert keyed on id
                let active_model: entity::ActiveModel = product.into();
                entity::Entity::insert(active_model)
                    .on_conflict(
                        OnConflict::column(entity::Column::Id)
                            .update_columns([entity::Column::Category, entity::Column::Name])
                            .to_owned(),
                    )
                    .exec_with_returning(self.base.db())
                    .await?
            }
        };

        tracing::info!(product_id = model.id, "Saved product");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: ProductId) -> DatabaseResult<()> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(())
    }

    async fn find_page_by_category(
        &self,
        query: PageQuery,
    ) -> DatabaseResult<(Vec<Product>, u64)> {
        let paginator = page_select(&query).paginate(self.base.db(), query.page_size());
        let total = paginator.num_items().await?;

        // Pages past the end are empty; skip the round trip
        let models = match query.offset() {
            Some(offset) if offset < total => paginator.fetch_page(query.page_index()).await?,
            _ => Vec::new(),
        };

        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn find_distinct_categories(&self) -> DatabaseResult<Vec<String>> {
        let categories = entity::Entity::find()
            .select_only()
            .column(entity::Column::Category)
            .distinct()
            .into_tuple::<String>()
            .all(self.base.db())
            .await?;

        Ok(categories)
    }
}

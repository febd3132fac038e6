use serde::{Deserialize, Serialize};

/// Store-assigned product identifier. Never reused after deletion.
pub type ProductId = i64;

/// A persisted catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub id: ProductId,
    /// Grouping label; may be empty
    pub category: String,
    /// Display name; may be empty
    pub name: String,
}

/// A product that has not been persisted yet (no id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProduct {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub name: String,
}

/// Replacement values for an existing product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProduct {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub name: String,
}

/// What a store is asked to persist.
///
/// `New` always gets a freshly minted id. `Existing` is written under its own
/// id, replacing whatever is stored there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveProduct {
    New(CreateProduct),
    Existing(Product),
}

impl CreateProduct {
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
        }
    }
}

impl UpdateProduct {
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
        }
    }
}

impl Product {
    /// The same product (same id) carrying the fields of `update`
    pub fn with_details(self, update: UpdateProduct) -> Self {
        Self {
            id: self.id,
            category: update.category,
            name: update.name,
        }
    }
}

impl From<CreateProduct> for SaveProduct {
    fn from(input: CreateProduct) -> Self {
        SaveProduct::New(input)
    }
}

impl From<Product> for SaveProduct {
    fn from(product: Product) -> Self {
        SaveProduct::Existing(product)
    }
}

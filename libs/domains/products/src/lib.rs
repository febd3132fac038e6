//! Products Domain
//!
//! Product catalog: create, read, update and delete products, list them
//! one category at a time in pages, and report the categories in use.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Business logic, existence checks, page validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, DTOs, page primitives
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use domain_products::{CreateProduct, PgProductRepository, ProductService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = postgres::connect_from_config(PostgresConfig::from_env()?).await?;
//!
//! let service = ProductService::new(PgProductRepository::new(db));
//! let phone = service
//!     .create_product(CreateProduct::new("electronics", "phone"))
//!     .await?;
//!
//! let page = service.list_by_category("electronics", 0, 20).await?;
//! assert_eq!(page.items[0].id, phone.id);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod models;
pub mod pagination;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use models::{CreateProduct, Product, ProductId, SaveProduct, UpdateProduct};
pub use pagination::{PageQuery, PageResult};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;

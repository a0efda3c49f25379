//! # category-admin-api
//!
//! Client for a remote category collection API.
//!
//! ## Endpoints
//!
//! | Operation | Method | Path | Body |
//! |-----------|--------|------|------|
//! | List all | `GET` | `/category` | - |
//! | Get one | `GET` | `/category/{id}` | - |
//! | Create | `POST` | `/category` | `{name, order}` |
//! | Update | `PUT` | `/category` | `{id, name, order}` |
//! | Delete | `DELETE` | `/category/{id}` | - |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use category_admin_api::{ApiConfig, CategoryApi, HttpCategoryApi, NewCategory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::new("http://localhost:3000/api")?;
//!     let api = HttpCategoryApi::new(config)?;
//!
//!     for category in api.list_categories().await? {
//!         println!("{} ({})", category.name, category.order);
//!     }
//!
//!     let created = api
//!         .create_category(&NewCategory {
//!             name: "Books".to_string(),
//!             order: 2.into(),
//!         })
//!         .await?;
//!     println!("created {}", created.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Any non-success
//! HTTP status is an error; `GET /category/{id}` maps `404` to
//! [`ApiError::NotFound`]. Nothing is retried.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{ApiConfig, HttpCategoryApi, COLLECTION_SEGMENT};
pub use error::{ApiError, Result};
pub use traits::CategoryApi;
pub use types::{Category, CategoryUpdate, NewCategory};
pub use utils::log_sanitizer;

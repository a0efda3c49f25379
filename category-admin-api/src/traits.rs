use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Category, CategoryUpdate, NewCategory};

/// Category collection API
///
/// Implementations:
/// - [`HttpCategoryApi`](crate::HttpCategoryApi) talks to the remote service.
/// - Tests use an in-memory mock.
#[async_trait]
pub trait CategoryApi: Send + Sync {
    /// `GET /category`
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// `GET /category/{id}`
    ///
    /// Returns [`ApiError::NotFound`](crate::ApiError::NotFound) when the id
    /// no longer resolves.
    async fn get_category(&self, id: &str) -> Result<Category>;

    /// `POST /category`
    async fn create_category(&self, req: &NewCategory) -> Result<Category>;

    /// `PUT /category`
    async fn update_category(&self, req: &CategoryUpdate) -> Result<Category>;

    /// `DELETE /category/{id}`
    async fn delete_category(&self, id: &str) -> Result<()>;
}

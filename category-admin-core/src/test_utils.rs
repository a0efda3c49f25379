//! Test helpers
//!
//! In-memory [`CategoryApi`] with a call journal and injectable failures,
//! plus a couple of fixture records.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use category_admin_api::{ApiError, Category, CategoryApi, CategoryUpdate, NewCategory, Result};
use tokio::sync::RwLock;

/// One request as seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Get(String),
    Create(NewCategory),
    Update(CategoryUpdate),
    Delete(String),
}

/// Operation selector for failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOp {
    List,
    Get,
    Create,
    Update,
    Delete,
}

// ===== MockCategoryApi =====

pub struct MockCategoryApi {
    records: RwLock<Vec<Category>>,
    calls: RwLock<Vec<ApiCall>>,
    /// If set, the matching operation returns this error instead of touching records
    failures: RwLock<HashMap<MockOp, ApiError>>,
    next_id: AtomicU64,
}

impl MockCategoryApi {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<Category>) -> Self {
        Self {
            records: RwLock::new(records),
            calls: RwLock::new(Vec::new()),
            failures: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(100),
        }
    }

    pub async fn set_failure(&self, op: MockOp, error: Option<ApiError>) {
        let mut failures = self.failures.write().await;
        match error {
            Some(e) => failures.insert(op, e),
            None => failures.remove(&op),
        };
    }

    /// Make `op` fail with a 500.
    pub async fn fail(&self, op: MockOp) {
        self.set_failure(
            op,
            Some(ApiError::HttpStatus {
                status: 500,
                raw_message: Some("mock failure".into()),
            }),
        )
        .await;
    }

    /// Every request made so far, in order.
    pub async fn calls(&self) -> Vec<ApiCall> {
        self.calls.read().await.clone()
    }

    pub async fn clear_calls(&self) {
        self.calls.write().await.clear();
    }

    pub async fn records(&self) -> Vec<Category> {
        self.records.read().await.clone()
    }

    async fn record(&self, call: ApiCall, op: MockOp) -> Result<()> {
        self.calls.write().await.push(call);
        match self.failures.read().await.get(&op) {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl Default for MockCategoryApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryApi for MockCategoryApi {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.record(ApiCall::List, MockOp::List).await?;
        Ok(self.records.read().await.clone())
    }

    async fn get_category(&self, id: &str) -> Result<Category> {
        self.record(ApiCall::Get(id.to_string()), MockOp::Get).await?;
        self.records
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound { id: id.to_string() })
    }

    async fn create_category(&self, req: &NewCategory) -> Result<Category> {
        self.record(ApiCall::Create(req.clone()), MockOp::Create)
            .await?;
        let created = Category {
            id: self.next_id.fetch_add(1, Ordering::Relaxed).to_string(),
            name: req.name.clone(),
            order: req.order.clone(),
        };
        self.records.write().await.push(created.clone());
        Ok(created)
    }

    async fn update_category(&self, req: &CategoryUpdate) -> Result<Category> {
        self.record(ApiCall::Update(req.clone()), MockOp::Update)
            .await?;
        let mut records = self.records.write().await;
        let existing = records
            .iter_mut()
            .find(|c| c.id == req.id)
            .ok_or_else(|| ApiError::NotFound { id: req.id.clone() })?;
        existing.name.clone_from(&req.name);
        existing.order = req.order.clone();
        Ok(existing.clone())
    }

    async fn delete_category(&self, id: &str) -> Result<()> {
        self.record(ApiCall::Delete(id.to_string()), MockOp::Delete)
            .await?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|c| c.id != id);
        if records.len() == before {
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        Ok(())
    }
}

// ===== Fixtures =====

pub fn electronics() -> Category {
    Category {
        id: "1".into(),
        name: "Electronics".into(),
        order: 1.into(),
    }
}

pub fn books() -> Category {
    Category {
        id: "2".into(),
        name: "Books".into(),
        order: 2.into(),
    }
}

//! Application bootstrap for Category Admin.
//!
//! Provides `AppConfig` (startup configuration), `init_logging`, `AppState`
//! (shared API handle and controller factory) and `AppStateBuilder`
//! (API injection).

pub mod config;
pub mod logging;

use std::sync::Arc;

use category_admin_api::{CategoryApi, HttpCategoryApi};
use category_admin_core::{
    columns, CoreError, CoreResult, EditPageController, ListState, RecordListController,
};

pub use config::AppConfig;
pub use logging::init_logging;

/// Application state.
///
/// Every frontend constructs this once at startup via `AppStateBuilder` and
/// creates controllers from it.
pub struct AppState {
    api: Arc<dyn CategoryApi>,
}

impl AppState {
    pub fn api(&self) -> &Arc<dyn CategoryApi> {
        &self.api
    }

    /// Controller for the category list page. Call `load()` on it once.
    #[must_use]
    pub fn list_controller(&self) -> RecordListController {
        RecordListController::new(Arc::clone(&self.api))
    }

    /// List controller after its initial load.
    ///
    /// A failed load is already logged by the controller and leaves the list
    /// empty; it never aborts the caller.
    pub async fn load_list(&self) -> RecordListController {
        let mut list = self.list_controller();
        if list.load().await.is_ok() {
            log::info!("Category list loaded ({} rows)", list.rows().len());
        }
        list
    }

    /// Controller for the standalone edit page of `id`.
    #[must_use]
    pub fn edit_page(&self, id: impl Into<String>) -> EditPageController {
        EditPageController::new(Arc::clone(&self.api), id)
    }
}

/// Plain-text table: header line, column labels, then one tab-separated
/// line per row.
pub fn render_table(list: &ListState) -> String {
    let mut out = format!("{}\n", list.header());
    out.push_str(&columns().collect::<Vec<_>>().join("\t"));
    out.push('\n');
    for row in list.rows() {
        out.push_str(&row.cells().join("\t"));
        out.push('\n');
    }
    out
}

/// Builder for `AppState`.
///
/// Either inject an API directly (tests, alternative backends) or supply an
/// `AppConfig` and the HTTP client is built from it. An injected API wins.
pub struct AppStateBuilder {
    api: Option<Arc<dyn CategoryApi>>,
    config: Option<AppConfig>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            api: None,
            config: None,
        }
    }

    #[must_use]
    pub fn api(mut self, api: Arc<dyn CategoryApi>) -> Self {
        self.api = Some(api);
        self
    }

    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::Config` if neither an API nor a config was given,
    /// or the API error if the HTTP client cannot be created.
    pub fn build(self) -> CoreResult<AppState> {
        let api: Arc<dyn CategoryApi> = match (self.api, self.config) {
            (Some(api), _) => api,
            (None, Some(config)) => {
                log::info!("Using category API at {}", config.api.base_url());
                Arc::new(HttpCategoryApi::new(config.api)?)
            }
            (None, None) => {
                return Err(CoreError::Config(
                    "an API client or configuration is required".to_string(),
                ))
            }
        };
        Ok(AppState { api })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Shared helpers for the live-API tests

#![allow(dead_code)]

use std::env;

use category_admin_api::{ApiConfig, HttpCategoryApi};

/// Environment variable naming the API under test.
pub const TEST_URL_VAR: &str = "CATEGORY_API_TEST_URL";

/// Skip the test when the live API is not configured.
#[macro_export]
macro_rules! skip_if_no_api {
    () => {
        if std::env::var("CATEGORY_API_TEST_URL").is_err() {
            eprintln!("skipping: CATEGORY_API_TEST_URL is not set");
            return;
        }
    };
}

/// Assert an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Client for the configured live API, or `None` when not configured.
pub fn live_api() -> Option<HttpCategoryApi> {
    let base = env::var(TEST_URL_VAR).ok()?;
    let config = ApiConfig::new(&base).ok()?;
    HttpCategoryApi::new(config).ok()
}

/// Unique category name so parallel runs do not collide.
pub fn unique_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

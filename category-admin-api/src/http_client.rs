//! Shared HTTP request handling
//!
//! Sends a prepared `RequestBuilder`, logs the exchange and hands back the
//! status code and body. Status interpretation is left to the caller.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP helper functions
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Perform an HTTP request and return `(status_code, response_text)`.
    ///
    /// Transport failures become [`ApiError::Timeout`] or
    /// [`ApiError::NetworkError`]. No retries.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("{method_name} {url} -> {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ApiError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Turn a non-2xx status into [`ApiError::HttpStatus`].
    pub fn ensure_success(status_code: u16, response_text: String) -> Result<String, ApiError> {
        if (200..300).contains(&status_code) {
            Ok(response_text)
        } else {
            Err(ApiError::HttpStatus {
                status: status_code,
                raw_message: (!response_text.is_empty())
                    .then(|| truncate_for_log(&response_text).into_owned()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_passes_body_through() {
        assert_eq!(
            HttpUtils::ensure_success(201, "{}".into()),
            Ok("{}".to_string())
        );
        assert_eq!(HttpUtils::ensure_success(204, String::new()), Ok(String::new()));
    }

    #[test]
    fn non_success_becomes_http_status() {
        assert_eq!(
            HttpUtils::ensure_success(500, "boom".into()),
            Err(ApiError::HttpStatus {
                status: 500,
                raw_message: Some("boom".into()),
            })
        );
    }

    #[test]
    fn empty_error_body_has_no_message() {
        assert_eq!(
            HttpUtils::ensure_success(400, String::new()),
            Err(ApiError::HttpStatus {
                status: 400,
                raw_message: None,
            })
        );
    }

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<Vec<i32>, ApiError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(ApiError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Status mapping and request routing of `HttpCategoryApi`, checked against a
//! local server that answers one request with a canned response.

use category_admin_api::{
    ApiConfig, ApiError, CategoryApi, CategoryUpdate, HttpCategoryApi, NewCategory,
};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Request as seen by the canned server
#[derive(Debug)]
struct Received {
    method: String,
    path: String,
    body: String,
}

impl Received {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

async fn canned(status: u16, body: &'static str) -> (HttpCategoryApi, JoinHandle<Received>) {
    canned_at("", status, body).await
}

/// Answer exactly one request under `base_path` with `status` and `body`.
async fn canned_at(
    base_path: &str,
    status: u16,
    body: &'static str,
) -> (HttpCategoryApi, JoinHandle<Received>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let received = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        let _ = socket.shutdown().await;
        received
    });

    let config = ApiConfig::new(&format!("http://{addr}{base_path}")).expect("config");
    (HttpCategoryApi::new(config).expect("client"), server)
}

async fn read_request(socket: &mut TcpStream) -> Received {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.expect("read");
        assert!(n > 0, "connection closed inside headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let content_length: usize = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.expect("read body");
        assert!(n > 0, "connection closed inside body");
        buf.extend_from_slice(&chunk[..n]);
    }

    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    Received {
        method: request_line.next().unwrap_or_default().to_string(),
        path: request_line.next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&buf[header_end..header_end + content_length]).into_owned(),
    }
}

fn books() -> NewCategory {
    NewCategory {
        name: "Books".into(),
        order: 2.into(),
    }
}

// ===== GET /category =====

#[tokio::test]
async fn list_hits_collection_and_accepts_both_id_keys() {
    let (api, server) = canned(
        200,
        r#"[{"_id":"1","id":"1","name":"Electronics","order":1,"__v":0}]"#,
    )
    .await;

    let categories = api.list_categories().await.expect("list");
    let received = server.await.unwrap();

    assert_eq!((received.method.as_str(), received.path.as_str()), ("GET", "/category"));
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, "1");
}

#[tokio::test]
async fn list_keeps_base_path() {
    let (api, server) = canned_at("/api/", 200, "[]").await;

    assert_eq!(api.list_categories().await, Ok(Vec::new()));
    assert_eq!(server.await.unwrap().path, "/api/category");
}

#[tokio::test]
async fn list_malformed_body_is_parse_error() {
    let (api, server) = canned(200, "<html>").await;

    let result = api.list_categories().await;
    server.await.unwrap();

    assert!(matches!(result, Err(ApiError::ParseError { .. })), "{result:?}");
}

// ===== GET /category/{id} =====

#[tokio::test]
async fn get_404_is_not_found() {
    let (api, server) = canned(404, r#"{"message":"Not found"}"#).await;

    let result = api.get_category("1").await;
    let received = server.await.unwrap();

    assert_eq!(result, Err(ApiError::NotFound { id: "1".into() }));
    assert_eq!((received.method.as_str(), received.path.as_str()), ("GET", "/category/1"));
}

#[tokio::test]
async fn get_null_body_is_not_found() {
    let (api, server) = canned(200, "null").await;

    let result = api.get_category("1").await;
    server.await.unwrap();

    assert_eq!(result, Err(ApiError::NotFound { id: "1".into() }));
}

#[tokio::test]
async fn get_empty_body_is_not_found() {
    let (api, server) = canned(200, "").await;

    let result = api.get_category("1").await;
    server.await.unwrap();

    assert_eq!(result, Err(ApiError::NotFound { id: "1".into() }));
}

#[tokio::test]
async fn get_encodes_id_as_one_segment() {
    let (api, server) = canned(404, "").await;

    let _ = api.get_category("a b/c").await;

    assert_eq!(server.await.unwrap().path, "/category/a%20b%2Fc");
}

#[tokio::test]
async fn get_decodes_record() {
    let (api, server) = canned(200, r#"{"_id":"1","name":"Electronics","order":1}"#).await;

    let record = api.get_category("1").await.expect("get");
    server.await.unwrap();

    assert_eq!(record.name, "Electronics");
    assert_eq!(record.order, serde_json::Number::from(1));
}

// ===== POST /category =====

#[tokio::test]
async fn create_posts_name_and_order() {
    let (api, server) = canned(201, r#"{"_id":"7","name":"Books","order":2}"#).await;

    let created = api.create_category(&books()).await.expect("create");
    let received = server.await.unwrap();

    assert_eq!(created.id, "7");
    assert_eq!((received.method.as_str(), received.path.as_str()), ("POST", "/category"));
    assert_eq!(received.json(), json!({"name": "Books", "order": 2}));
}

#[tokio::test]
async fn create_server_error_is_err() {
    let (api, server) = canned(500, r#"{"message":"boom"}"#).await;

    let result = api.create_category(&books()).await;
    server.await.unwrap();

    assert!(
        matches!(&result, Err(ApiError::HttpStatus { status: 500, raw_message: Some(m) }) if m.contains("boom")),
        "{result:?}"
    );
}

// ===== PUT /category =====

#[tokio::test]
async fn update_puts_to_collection_with_id_in_body() {
    let (api, server) = canned(200, r#"{"_id":"1","name":"Gadgets","order":3}"#).await;
    let update = CategoryUpdate::new(
        "1",
        NewCategory {
            name: "Gadgets".into(),
            order: 3.into(),
        },
    );

    let saved = api.update_category(&update).await.expect("update");
    let received = server.await.unwrap();

    assert_eq!(saved.name, "Gadgets");
    assert_eq!((received.method.as_str(), received.path.as_str()), ("PUT", "/category"));
    assert_eq!(received.json(), json!({"id": "1", "name": "Gadgets", "order": 3}));
}

#[tokio::test]
async fn update_rejected_is_err() {
    let (api, server) = canned(400, "").await;

    let result = api.update_category(&CategoryUpdate::new("1", books())).await;
    server.await.unwrap();

    assert_eq!(
        result,
        Err(ApiError::HttpStatus {
            status: 400,
            raw_message: None,
        })
    );
}

// ===== DELETE /category/{id} =====

#[tokio::test]
async fn delete_no_content_is_ok() {
    let (api, server) = canned(204, "").await;

    let result = api.delete_category("7").await;
    let received = server.await.unwrap();

    assert_eq!(result, Ok(()));
    assert_eq!(
        (received.method.as_str(), received.path.as_str()),
        ("DELETE", "/category/7")
    );
}

#[tokio::test]
async fn delete_404_is_not_found() {
    let (api, server) = canned(404, "").await;

    let result = api.delete_category("7").await;
    server.await.unwrap();

    assert_eq!(result, Err(ApiError::NotFound { id: "7".into() }));
}

#[tokio::test]
async fn delete_server_error_is_err() {
    let (api, server) = canned(503, "").await;

    let result = api.delete_category("7").await;
    server.await.unwrap();

    assert!(matches!(result, Err(ApiError::HttpStatus { status: 503, .. })), "{result:?}");
}

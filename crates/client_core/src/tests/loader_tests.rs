use super::*;
use crate::test_support::{algebra, history, spawn_server};
use axum::{http::StatusCode, routing::get, Json, Router};

#[test]
fn endpoint_is_joined_onto_server_base() {
    assert_eq!(
        endpoint_url("http://localhost:8080", COURSES_PATH)
            .expect("url")
            .as_str(),
        "http://localhost:8080/api/courses"
    );
    assert_eq!(
        endpoint_url("http://host/app/", COURSES_PATH)
            .expect("url")
            .as_str(),
        "http://host/app/api/courses"
    );
}

#[test]
fn rejects_unparseable_server_url() {
    let err = HttpCatalogLoader::new("not a url").err().expect("must fail");
    assert!(matches!(err, FetchError::InvalidBaseUrl { .. }));
}

#[tokio::test]
async fn loads_courses_in_server_order() {
    let app = Router::new().route(
        "/api/courses",
        get(|| async { Json(vec![history(), algebra()]) }),
    );
    let server_url = spawn_server(app).await.expect("spawn server");

    let catalog = HttpCatalogLoader::new(&server_url)
        .expect("loader")
        .load()
        .await
        .expect("load");

    assert_eq!(catalog.courses(), &[history(), algebra()]);
}

#[tokio::test]
async fn server_error_status_is_a_fetch_error() {
    let app = Router::new().route(
        "/api/courses",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let server_url = spawn_server(app).await.expect("spawn server");

    let err = HttpCatalogLoader::new(&server_url)
        .expect("loader")
        .load()
        .await
        .expect_err("must fail");

    assert!(matches!(err, FetchError::Status { status: 500 }), "{err}");
}

#[tokio::test]
async fn non_array_body_is_malformed() {
    let app = Router::new().route(
        "/api/courses",
        get(|| async { Json(serde_json::json!({"courses": []})) }),
    );
    let server_url = spawn_server(app).await.expect("spawn server");

    let err = HttpCatalogLoader::new(&server_url)
        .expect("loader")
        .load()
        .await
        .expect_err("must fail");

    assert!(matches!(err, FetchError::Malformed(_)), "{err}");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = HttpCatalogLoader::with_timeout(&format!("http://{addr}"), Duration::from_secs(2))
        .expect("loader")
        .load()
        .await
        .expect_err("must fail");

    assert!(matches!(err, FetchError::Transport(_)), "{err}");
}

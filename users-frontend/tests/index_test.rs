use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower::ServiceExt;
use users_frontend::{error::SERVER_ERROR_BODY, router, AppState};

/// Serves `backend` on an ephemeral port and returns its list URL.
async fn spawn_backend(backend: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend).await.unwrap();
    });
    format!("http://{}/api/users", addr)
}

async fn get_index(backend_url: String) -> Response {
    let app = router(AppState::new(backend_url).expect("state"));
    let req = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

async fn body_string(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn renders_a_row_per_user() {
    let backend = Router::new().route(
        "/api/users",
        get(|| async {
            Json(json!([
                {"username": "alice", "email": "alice@example.com", "created_at": "2024-01-05T14:03:09Z"},
                {"username": "bob", "email": "bob@example.com", "created_at": "2024-02-10T09:00:00.5Z"}
            ]))
        }),
    );
    let url = spawn_backend(backend).await;

    let resp = get_index(url).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = body_string(resp).await;
    assert!(html.contains("<td>alice</td>"));
    assert!(html.contains("<td>alice@example.com</td>"));
    assert!(html.contains("<td>bob</td>"));
    assert_eq!(html.matches("<tr>").count(), 3);
    assert!(!html.contains("Invalid Date"));
    // Formatted in the local zone, so only the year and the locale layout are stable.
    assert!(html.contains("/2024, "));
}

#[tokio::test]
async fn empty_list_renders_header_only() {
    let backend = Router::new().route("/api/users", get(|| async { Json(json!([])) }));
    let url = spawn_backend(backend).await;

    let resp = get_index(url).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("<th>Username</th>"));
    assert!(!html.contains("<td>"));
}

#[tokio::test]
async fn backend_error_status_is_server_error() {
    let backend = Router::new().route(
        "/api/users",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Server Error").into_response() }),
    );
    let url = spawn_backend(backend).await;

    let resp = get_index(url).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(resp).await, SERVER_ERROR_BODY);
}

#[tokio::test]
async fn backend_success_other_than_200_is_server_error() {
    let backend = Router::new().route(
        "/api/users",
        get(|| async { (StatusCode::CREATED, Json(json!([]))).into_response() }),
    );
    let url = spawn_backend(backend).await;

    let resp = get_index(url).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(resp).await, SERVER_ERROR_BODY);
}

#[tokio::test]
async fn non_json_body_is_server_error() {
    let backend = Router::new().route("/api/users", get(|| async { "<html>maintenance</html>" }));
    let url = spawn_backend(backend).await;

    let resp = get_index(url).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(resp).await, SERVER_ERROR_BODY);
}

#[tokio::test]
async fn json_object_instead_of_array_is_server_error() {
    let backend = Router::new().route(
        "/api/users",
        get(|| async { Json(json!({"error": "nope"})) }),
    );
    let url = spawn_backend(backend).await;

    let resp = get_index(url).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unreachable_backend_is_server_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let resp = get_index(format!("http://{}/api/users", addr)).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(resp).await;
    assert_eq!(body, SERVER_ERROR_BODY);
    assert!(!body.contains(&addr.to_string()));
}

#[tokio::test]
async fn only_the_index_route_exists() {
    let backend = Router::new().route("/api/users", get(|| async { Json(json!([])) }));
    let url = spawn_backend(backend).await;
    let app = router(AppState::new(url).unwrap());

    let req = Request::builder()
        .method("GET")
        .uri("/users")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- echo ---

#[tokio::test]
async fn echo_returns_single_parameter() {
    let resp = app().oneshot(get("/get?para=hello")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.args.len(), 1);
    assert_eq!(echo.args["para"], "hello");
    assert_eq!(echo.url, "/get?para=hello");
}

#[tokio::test]
async fn echo_without_query_has_no_args() {
    let resp = app().oneshot(get("/get")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert!(echo.args.is_empty());
}

#[tokio::test]
async fn echo_decodes_percent_encoded_value() {
    let resp = app().oneshot(get("/get?q=a%20b%26c")).await.unwrap();

    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.args["q"], "a b&c");
}

#[tokio::test]
async fn echo_keeps_empty_value() {
    let resp = app().oneshot(get("/get?q=")).await.unwrap();

    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.args["q"], "");
}

#[tokio::test]
async fn echo_rejects_post() {
    let req = Request::builder()
        .method("POST")
        .uri("/get?q=1")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- status ---

#[tokio::test]
async fn status_returns_requested_code_with_empty_body() {
    for code in [200u16, 204, 404, 418, 503] {
        let resp = app().oneshot(get(&format!("/status/{code}"))).await.unwrap();
        assert_eq!(resp.status().as_u16(), code);
        assert!(body_bytes(resp).await.is_empty(), "{code}: body should be empty");
    }
}

#[tokio::test]
async fn status_out_of_range_returns_400() {
    let resp = app().oneshot(get("/status/999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_informational_returns_400() {
    for code in [100u16, 101, 199] {
        let resp = app().oneshot(get(&format!("/status/{code}"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{code}");
    }
}

#[tokio::test]
async fn status_not_a_number_returns_400() {
    let resp = app().oneshot(get("/status/teapot")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get("/post")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

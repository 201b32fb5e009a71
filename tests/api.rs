use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use csv_analyzer::{config::Config, create_router, AnalysisStore, AppState};

fn app() -> (Router, AppState) {
    let state = AppState::new(AnalysisStore::default(), Config::default());
    (create_router(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_multipart(field: &str, csv: &[u8]) -> Request<Body> {
    let boundary = "XBOUNDARYX";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"posts.csv\"\r\n").as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: text/csv\r\n\r\n");
    body.extend_from_slice(csv);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn health_reports_service_identity() {
    let (app, _) = app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["service"], json!("csv-analyzer"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn analyze_json_rows() {
    let (app, _) = app();
    let payload = json!({
        "rows": [
            { "id": "p1", "text": "Boycott boycott this event now!!" },
            { "text": "Please donate to support the local awareness event" },
            { "id": 3, "text": "just a tweet about lunch" }
        ]
    });
    let (status, body) = send(&app, post_json(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));

    let summary = &body["summary"];
    assert_eq!(summary["total"], json!(3));
    assert_eq!(summary["suspicious"], json!(1));
    assert_eq!(summary["safe"], json!(1));
    assert_eq!(summary["neutral"], json!(1));
    assert_eq!(summary["platforms"]["Twitter"], json!(100));

    let results = summary["results"].as_array().unwrap();
    assert_eq!(results[0]["id"], json!("p1"));
    assert_eq!(results[0]["label"], json!("SUSPICIOUS"));
    assert_eq!(results[0]["risky_hits"], json!(2));
    assert_eq!(results[0]["signals"]["repeat_word"], json!(true));
    assert_eq!(results[1]["id"], json!(2));
    assert_eq!(results[1]["label"], json!("SAFE"));
    assert_eq!(results[2]["id"], json!(3));
}

#[tokio::test]
async fn analyze_multipart_csv() {
    let (app, _) = app();
    let csv = b"id,platform,message\n10,Reddit,Saw this on r/news today\n11,Facebook,fb group update\n";
    let (status, body) = send(&app, post_multipart("file", csv)).await;
    assert_eq!(status, StatusCode::OK);

    let summary = &body["summary"];
    assert_eq!(summary["total"], json!(2));
    assert_eq!(summary["results"][0]["id"], json!("10"));
    assert_eq!(summary["results"][0]["text"], json!("Saw this on r/news today"));
    assert_eq!(summary["platforms"]["Reddit"], json!(50));
    assert_eq!(summary["platforms"]["Facebook"], json!(50));
}

#[tokio::test]
async fn analyze_raw_csv_body() {
    let (app, _) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(CONTENT_TYPE, "text/csv")
        .body(Body::from("text\nhello\nworld\n"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["neutral"], json!(2));
}

#[tokio::test]
async fn empty_csv_is_rejected_and_state_kept() {
    let (app, state) = app();
    let (status, _) = send(&app, post_json(json!({ "rows": [{ "text": "hello" }] }))).await;
    assert_eq!(status, StatusCode::OK);
    let before = state.store.stats();

    let (status, body) = send(&app, post_multipart("file", b"id,text\n")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("No data provided"));

    assert_eq!(state.store.stats(), before);
    assert_eq!(state.store.log_len(), 1);
}

#[tokio::test]
async fn missing_file_part_and_bad_json_are_empty_input() {
    let (app, _) = app();
    let (status, _) = send(&app, post_multipart("upload", b"text\nhello\n")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], json!(400));
}

#[tokio::test]
async fn stats_before_any_batch_is_zeroed() {
    let (app, _) = app();
    let (status, body) = send(&app, get("/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["total"], json!(0));
    assert_eq!(body["safe"], json!(0));
    assert_eq!(body["results"], json!([]));
    for platform in ["Twitter", "Facebook", "Instagram", "Reddit", "LinkedIn", "YouTube"] {
        assert_eq!(body["platforms"][platform], json!(0), "missing {platform}");
    }
}

#[tokio::test]
async fn stats_reflect_only_latest_batch() {
    let (app, _) = app();
    send(&app, post_json(json!({ "rows": [{ "text": "a" }, { "text": "b" }] }))).await;
    send(&app, post_json(json!({ "rows": [{ "text": "scam alert" }] }))).await;

    let (_, body) = send(&app, get("/stats")).await;
    assert_eq!(body["total"], json!(1));
    assert_eq!(body["suspicious"], json!(1));
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn logs_return_latest_page_oldest_first() {
    let (app, _) = app();
    let rows: Vec<Value> = (0..130).map(|i| json!({ "text": format!("entry {i}") })).collect();
    send(&app, post_json(json!({ "rows": rows }))).await;

    let (status, body) = send(&app, get("/logs")).await;
    assert_eq!(status, StatusCode::OK);
    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 100);
    assert_eq!(logs[0]["text"], json!("entry 30"));
    assert_eq!(logs[99]["text"], json!("entry 129"));
    assert_eq!(logs[0]["label"], json!("NEUTRAL"));
    assert!(logs[0]["ts"].is_string());

    let (_, body) = send(&app, get("/logs?limit=5")).await;
    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 5);
    assert_eq!(logs[4]["text"], json!("entry 129"));
}

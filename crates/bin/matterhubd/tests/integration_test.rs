//! End-to-end smoke tests for the full matterhubd stack.
//!
//! Each test wires the real chip-tool runner, the real service and the real
//! axum router, then exercises the HTTP layer via `tower::ServiceExt::oneshot`
//! — no TCP port is bound. Standard Unix programs stand in for `chip-tool`.
#![cfg(unix)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use matterhub_adapter_chip_tool::{ChipToolConfig, ChipToolRunner};
use matterhub_adapter_http_axum::router;
use matterhub_adapter_http_axum::state::AppState;
use matterhub_app::services::controller_service::ControllerService;
use serde_json::Value;
use tower::ServiceExt;

/// Build a fully-wired router whose controller binary is `program`.
fn app(program: &str) -> axum::Router {
    let runner = ChipToolRunner::new(ChipToolConfig {
        program: program.to_string(),
        timeout_secs: None,
    });
    router::build(AppState::new(ControllerService::new(runner)))
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn call(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app("echo")
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Controller endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_controller_stdout_on_toggle() {
    let (status, body) = call(app("echo"), post("/toggle", r#"{"nodeId":"0x05"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["output"], "onoff toggle 0x05 1\n");
}

#[tokio::test]
async fn should_pass_binding_list_as_single_argument() {
    let (status, body) = call(
        app("echo"),
        post("/bind", r#"{"switchNode":"0x01","lightNode":"0x02"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["output"],
        "binding write binding [{\"node\":0x02,\"endpoint\":1,\"cluster\":6}] 0x01 1\n"
    );
}

#[tokio::test]
async fn should_not_interpret_node_id_through_a_shell() {
    let (status, body) = call(
        app("echo"),
        post("/toggle", r#"{"nodeId":"1; echo injected","endpoint":2}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "onoff toggle 1; echo injected 2\n");
}

#[tokio::test]
async fn should_return_controller_stderr_untouched_when_it_exits_non_zero() {
    // `ls` treats the chip-tool arguments as missing paths: it writes to
    // stderr and exits with a non-zero status.
    let expected = std::process::Command::new("ls")
        .args(["onoff", "toggle", "0x05", "1"])
        .output()
        .unwrap();
    assert!(!expected.status.success());
    let expected_stderr = String::from_utf8_lossy(&expected.stderr).into_owned();
    assert!(!expected_stderr.is_empty());

    let (status, body) = call(app("ls"), post("/toggle", r#"{"nodeId":"0x05"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["stderr"], expected_stderr.as_str());
    assert!(body["stderr"].as_str().unwrap().contains("onoff"));
}

#[tokio::test]
async fn should_return_500_when_controller_is_missing() {
    let (status, body) = call(
        app("matterhub-no-such-controller"),
        post("/pair", r#"{"nodeId":1,"code":"34970112332"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert!(
        body["stderr"]
            .as_str()
            .unwrap()
            .starts_with("failed to launch controller")
    );
}

#[tokio::test]
async fn should_return_400_when_node_id_missing() {
    let (status, body) = call(app("echo"), post("/toggle", "{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn should_answer_concurrent_toggles_independently() {
    let router = app("echo");
    let (a, b) = tokio::join!(
        call(router.clone(), post("/toggle", r#"{"nodeId":"0x0A"}"#)),
        call(router, post("/toggle", r#"{"nodeId":"0x0B","endpoint":3}"#)),
    );

    assert_eq!(a.1["output"], "onoff toggle 0x0A 1\n");
    assert_eq!(b.1["output"], "onoff toggle 0x0B 3\n");
}

//! Gateway tests against a one-shot local HTTP responder

use reqwest::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use erp_core::models::TaskMove;
use erp_core::nav::UserRole;
use erp_core::{DomainError, Section};

use super::{extract_detail, ApiGateway, GatewayError};
use crate::config::GatewayConfig;

/// Raw request as seen by the server
struct Captured {
    head: String,
    body: String,
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Accept one connection, answer with `status` and `body`, return the request
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        let captured = loop {
            let n = socket.read(&mut buf).await.expect("read");
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw).to_string();
            if let Some(split) = text.find("\r\n\r\n") {
                let head = text[..split].to_string();
                let request_body = text[split + 4..].to_string();
                if n == 0 || request_body.len() >= content_length(&head) {
                    break Captured { head, body: request_body };
                }
            }
            assert!(n > 0, "connection closed before request completed");
        };
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        captured
    });
    (format!("http://{}", addr), handle)
}

fn gateway(api_url: &str) -> ApiGateway {
    ApiGateway::new(GatewayConfig {
        api_url: api_url.to_string(),
        ..GatewayConfig::default()
    })
}

#[tokio::test]
async fn test_list_columns_decodes() {
    let (url, server) = serve_once(
        "200 OK",
        r##"[{"id":1,"project_id":7,"name":"Todo","color":"#555555","position":0}]"##,
    )
    .await;

    let columns = gateway(&url).list_columns(7).await.expect("columns");
    let request = server.await.unwrap();

    assert!(request.head.starts_with("GET /projects/7/columns HTTP/1.1"));
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].name, "Todo");
}

#[tokio::test]
async fn test_move_task_sends_patch_body() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"id":3,"column_id":2,"project_id":7,"title":"Draft launch plan","description":null,
            "priority":"medium","assignee":null,"tags":null,"position":4,
            "created_at":"2026-01-05T09:30:00"}"#,
    )
    .await;

    let moved = gateway(&url)
        .move_task(3, &TaskMove { column_id: 2, position: 4 })
        .await
        .expect("move");
    let request = server.await.unwrap();

    assert!(request.head.starts_with("PATCH /projects/tasks/3/move HTTP/1.1"));
    let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(sent, serde_json::json!({"column_id": 2, "position": 4}));
    assert_eq!((moved.column_id, moved.position), (2, 4));
}

#[tokio::test]
async fn test_revenue_analytics_decodes() {
    let (url, server) = serve_once(
        "200 OK",
        r#"[{"month":"Feb 2026","revenue":0.0},{"month":"Mar 2026","revenue":1299.5}]"#,
    )
    .await;

    let points = gateway(&url).revenue_analytics().await.expect("revenue");
    let request = server.await.unwrap();

    assert!(request.head.starts_with("GET /admin/analytics/revenue HTTP/1.1"));
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].month, "Mar 2026");
    assert_eq!(points[1].revenue, 1299.5);
}

#[tokio::test]
async fn test_recent_activity_sends_limit() {
    let (url, server) = serve_once(
        "200 OK",
        r#"[{"id":9,"client_id":4,"action":"Client suspended","actor":"ops@example.com",
            "metadata":null,"created_at":"2026-03-02T08:00:00"}]"#,
    )
    .await;

    let items = gateway(&url).recent_activity(15).await.expect("activity");
    let request = server.await.unwrap();

    assert!(request.head.starts_with("GET /admin/activity?limit=15 HTTP/1.1"));
    assert_eq!(items[0].action, "Client suspended");
    assert_eq!(items[0].actor.as_deref(), Some("ops@example.com"));
}

#[tokio::test]
async fn test_error_status_carries_detail() {
    let (url, server) = serve_once("404 Not Found", r#"{"detail":"Task not found"}"#).await;

    let err = gateway(&url).delete_task(99).await.unwrap_err();
    server.await.unwrap();

    assert_eq!(
        err,
        GatewayError::Status { status: 404, detail: "Task not found".to_string() }
    );
    assert_eq!(DomainError::from(err), DomainError::NotFound("Task not found".to_string()));
}

#[tokio::test]
async fn test_agent_detail_reply_is_not_an_error() {
    let (url, server) =
        serve_once("400 Bad Request", r#"{"detail":"Message cannot be empty"}"#).await;

    let reply = gateway(&url).ask_agent(Section::Finance, "").await.expect("reply");
    let request = server.await.unwrap();

    assert!(request.head.starts_with("POST /agents/finance HTTP/1.1"));
    assert_eq!(reply.text(), "Message cannot be empty");
}

#[tokio::test]
async fn test_bearer_token_attached() {
    let (url, server) = serve_once("200 OK", "[]").await;
    let gw = ApiGateway::new(GatewayConfig {
        api_url: url,
        access_token: Some("tok-123".to_string()),
        ..GatewayConfig::default()
    });

    gw.list_projects().await.expect("projects");
    let request = server.await.unwrap();
    assert!(request.head.to_ascii_lowercase().contains("authorization: bearer tok-123"));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = gateway(&url).list_projects().await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)));
    assert!(DomainError::from(err).is_network());
}

#[tokio::test]
async fn test_session_reads_admin_role() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"id":"u1","email":"ops@example.com","user_metadata":{"role":"admin"}}"#,
    )
    .await;
    let gw = ApiGateway::new(GatewayConfig {
        auth_url: Some(url),
        auth_anon_key: Some("anon".to_string()),
        access_token: Some("tok".to_string()),
        ..GatewayConfig::default()
    });

    let session = gw.current_session().await.expect("session");
    let request = server.await.unwrap();

    assert!(request.head.starts_with("GET /auth/v1/user HTTP/1.1"));
    assert!(request.head.to_ascii_lowercase().contains("apikey: anon"));
    assert!(session.signed_in);
    assert_eq!(session.role, UserRole::Admin);
    assert_eq!(session.email.as_deref(), Some("ops@example.com"));
}

#[tokio::test]
async fn test_session_without_credentials_is_anonymous() {
    let session = gateway("http://127.0.0.1:9").current_session().await.unwrap();
    assert!(!session.signed_in);
    assert_eq!(session.role, UserRole::Tenant);
}

#[test]
fn test_extract_detail_variants() {
    assert_eq!(extract_detail(StatusCode::NOT_FOUND, r#"{"detail":"Gone"}"#), "Gone");
    assert_eq!(
        extract_detail(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"msg":"field required"},{"msg":"value is not a valid float"}]}"#
        ),
        "field required; value is not a valid float"
    );
    assert_eq!(extract_detail(StatusCode::BAD_GATEWAY, "upstream down"), "upstream down");
    assert_eq!(extract_detail(StatusCode::BAD_GATEWAY, ""), "Bad Gateway");
}

#[test]
fn test_status_mapping() {
    let status = |status| GatewayError::Status { status, detail: "x".to_string() };
    assert!(matches!(DomainError::from(status(422)), DomainError::InvalidInput(_)));
    assert!(matches!(DomainError::from(status(409)), DomainError::Conflict(_)));
    assert!(matches!(DomainError::from(status(500)), DomainError::Network(_)));
    assert!(matches!(
        DomainError::from(GatewayError::Decode("eof".to_string())),
        DomainError::Internal(_)
    ));
}

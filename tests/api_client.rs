//! HttpApi against a throwaway local HTTP server.
//!
//! Each test binds a listener on an ephemeral port, answers exactly one
//! request with a canned status and body, and hands back the raw request
//! text for assertions.

use loteria_dash::api::{Endpoint, GenerationJobRequest, HttpApi, LotteryApi, RequestError};
use loteria_dash::config::Config;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

async fn read_request(sock: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = sock.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = find_header_end(&buf) {
            let head = String::from_utf8_lossy(&buf[..end]).to_string();
            if buf.len() >= end + 4 + content_length(&head) {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Serve one canned response; the handle resolves to the raw request.
async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let request = read_request(&mut sock).await;
        let response = format!(
            concat!(
                "HTTP/1.1 {} {}\r\n",
                "Content-Type: application/json\r\n",
                "Content-Length: {}\r\n",
                "Connection: close\r\n\r\n{}",
            ),
            status,
            reason(status),
            body.len(),
            body
        );
        sock.write_all(response.as_bytes()).await.unwrap();
        let _ = sock.shutdown().await;
        request
    });
    (format!("http://{}", addr), handle)
}

fn api_for(base: &str) -> HttpApi {
    HttpApi::new(&Config::new(base).unwrap()).unwrap()
}

fn sample_request() -> GenerationJobRequest {
    GenerationJobRequest {
        loteria: "megasena".to_string(),
        orcamento: 23.0,
        run_backtest: true,
        backtest_last_n: None,
    }
}

const JOB_BODY: &str = r#"{
    "job_id": "6f1c",
    "loteria": "megasena",
    "orcamento": 23.0,
    "games": [
        {"numbers": [4, 8, 15, 16, 23, 42], "source": "hybrid", "tag": "v3-core"}
    ],
    "stats": {"total_games": 1, "v3_count": 1, "v5_count": 0},
    "backtest": {"global_avg": 0.7, "global_max": 3, "tested_draws": 2700, "per_game_stats": []},
    "error": null
}"#;

// ---------------------------------------------------------------------------
// Success paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_decodes_body() {
    let (base, server) =
        serve_once(200, r#"{"status":"ok","db_exists":true,"db_tables":["megasena"]}"#).await;
    let health = api_for(&base).fetch_health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert!(health.db_exists);
    assert_eq!(health.db_tables, vec!["megasena"]);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/health "));
}

#[tokio::test]
async fn lotteries_decode_catalog() {
    let (base, server) = serve_once(
        200,
        concat!(
            r#"{"lotteries":[{"name":"lotofacil","preco":3.0,"#,
            r#""total_nums":25,"escolhe":15,"orcamento_alvo":15.0}]}"#,
        ),
    )
    .await;
    let resp = api_for(&base).fetch_lotteries().await.unwrap();
    assert_eq!(resp.lotteries.len(), 1);
    assert_eq!(resp.lotteries[0].escolhe, 15);
    assert!(server.await.unwrap().starts_with("GET /api/lotteries "));
}

#[tokio::test]
async fn generation_posts_json_and_decodes() {
    let (base, server) = serve_once(200, JOB_BODY).await;
    let resp = api_for(&base).create_generation_job(&sample_request()).await.unwrap();
    assert_eq!(resp.job_id, "6f1c");
    assert_eq!(resp.games[0].numbers, vec![4, 8, 15, 16, 23, 42]);
    assert_eq!(resp.backtest.unwrap().tested_draws, 2700);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/generation-jobs "));
    assert!(request.to_lowercase().contains("content-type: application/json"));
    let body = &request[find_header_end(request.as_bytes()).unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["loteria"], "megasena");
    assert_eq!(json["orcamento"], 23.0);
    assert_eq!(json["run_backtest"], true);
    assert!(json.get("backtest_last_n").is_none());
}

#[tokio::test]
async fn base_path_prefix_is_kept() {
    let (base, server) =
        serve_once(200, r#"{"status":"ok","db_exists":false,"db_tables":[]}"#).await;
    api_for(&format!("{}/lottery", base)).fetch_health().await.unwrap();
    assert!(server.await.unwrap().starts_with("GET /lottery/api/health "));
}

// ---------------------------------------------------------------------------
// Failure paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generation_error_carries_status_and_body() {
    let (base, _server) = serve_once(500, "boom").await;
    let err = api_for(&base).create_generation_job(&sample_request()).await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("500"), "{}", msg);
    assert!(msg.contains("boom"), "{}", msg);
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn catalog_error_carries_status() {
    let (base, _server) = serve_once(404, r#"{"detail":"Not Found"}"#).await;
    let err = api_for(&base).fetch_lotteries().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch lotteries: 404");
    assert_eq!(err.endpoint(), Endpoint::Lotteries);
}

#[tokio::test]
async fn health_error_carries_status() {
    let (base, _server) = serve_once(503, "").await;
    let err = api_for(&base).fetch_health().await.unwrap_err();
    assert_eq!(err.to_string(), "Health check failed: 503");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let (base, _server) = serve_once(200, "not json").await;
    let err = api_for(&base).fetch_health().await.unwrap_err();
    assert!(matches!(err, RequestError::Decode { endpoint: Endpoint::Health, .. }));
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let err = api_for(&format!("http://{}", addr)).fetch_lotteries().await.unwrap_err();
    assert!(matches!(err, RequestError::Transport { .. }));
    assert_eq!(err.status(), None);
}

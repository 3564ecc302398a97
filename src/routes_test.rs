use super::*;

fn probe_state(api_base_url: &str) -> ProbeState {
    let config = Config { port: 0, api_base_url: api_base_url.to_owned(), ready_timeout_secs: 1 };
    ProbeState::new(&config).unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn readyz_reports_unreachable_api() {
    // Port 1 is reserved and refuses connections on loopback.
    let (status, Json(body)) = readyz(State(probe_state("http://127.0.0.1:1"))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["ready"], json!(false));
    assert_eq!(body["api"], json!("http://127.0.0.1:1"));
}

#[tokio::test]
async fn readyz_accepts_any_upstream_status() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let upstream = Router::new().fallback(|| async { StatusCode::NOT_FOUND });
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    let (status, Json(body)) = readyz(State(probe_state(&format!("http://{addr}")))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["upstreamStatus"], json!(404));
}

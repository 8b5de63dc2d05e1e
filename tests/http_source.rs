use std::sync::{Arc, Mutex};
use std::time::Duration;

use campaign_rules::{HttpSource, LoadError, RuleProvider, RuleSource, Selection};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const CSV: &str = "Vertical,Funnel Type,Language,Filter 4:,Desktop Rule ID,Desktop Rule Name,Mobile Rule ID,Mobile Rule Name,Decription\n\
                   All,Content,English,\"Google, Bing\",D1,Desk,M1,Mob,Search\n";

#[derive(Clone)]
struct Reply {
    status: &'static str,
    body: &'static str,
    delay: Duration,
}

impl Reply {
    fn ok(body: &'static str) -> Self {
        Self {
            status: "200 OK",
            body,
            delay: Duration::ZERO,
        }
    }

    fn status(status: &'static str) -> Self {
        Self {
            status,
            body: "",
            delay: Duration::ZERO,
        }
    }
}

/// Minimal HTTP/1.1 server on a loopback port. Serves `replies` in order
/// (repeating the last) and records each request head.
async fn serve(replies: Vec<Reply>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/rules.csv", listener.local_addr().unwrap());
    let requests = Arc::new(Mutex::new(Vec::new()));

    let seen = Arc::clone(&requests);
    tokio::spawn(async move {
        let mut served = 0;
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let reply = replies[served.min(replies.len() - 1)].clone();
            served += 1;

            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => head.extend_from_slice(&buf[..n]),
                }
            }
            seen.lock().unwrap().push(String::from_utf8_lossy(&head).into_owned());

            tokio::time::sleep(reply.delay).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                reply.status,
                reply.body.len(),
                reply.body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    (url, requests)
}

fn complete() -> Selection {
    Selection::new()
        .vertical("Auto")
        .funnel_type("Content")
        .language("English")
        .traffic_source("Bing")
}

#[tokio::test]
async fn fetch_returns_body() {
    let (url, _) = serve(vec![Reply::ok(CSV)]).await;
    let body = HttpSource::new(url).fetch().await.unwrap();
    assert_eq!(body, CSV);
}

#[tokio::test]
async fn fetch_disables_caching() {
    let (url, requests) = serve(vec![Reply::ok(CSV)]).await;
    HttpSource::new(url).fetch().await.unwrap();

    let requests = requests.lock().unwrap();
    let head = requests[0].to_ascii_lowercase();
    assert!(head.starts_with("get /rules.csv "));
    assert!(head.contains("cache-control: no-cache"));
    assert!(head.contains("pragma: no-cache"));
}

#[tokio::test]
async fn non_success_status_is_error() {
    let (url, _) = serve(vec![Reply::status("500 Internal Server Error")]).await;
    let err = HttpSource::new(url.clone()).fetch().await.unwrap_err();
    match err {
        LoadError::Status { status, url: failed } => {
            assert_eq!(status, 500);
            assert_eq!(failed, url);
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn not_found_is_error() {
    let (url, _) = serve(vec![Reply::status("404 Not Found")]).await;
    let err = HttpSource::new(url).fetch().await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 404, .. }));
    assert!(err.to_string().starts_with("HTTP 404 for "));
}

#[tokio::test]
async fn slow_server_times_out() {
    let (url, _) = serve(vec![Reply {
        delay: Duration::from_secs(5),
        ..Reply::ok(CSV)
    }])
    .await;
    let source = HttpSource::new(url).with_timeout(Duration::from_millis(100));
    assert!(matches!(source.fetch().await, Err(LoadError::Http(_))));
}

#[tokio::test]
async fn provider_retries_after_server_error() {
    let (url, requests) = serve(vec![
        Reply::status("503 Service Unavailable"),
        Reply::ok(CSV),
    ])
    .await;
    let provider = RuleProvider::new(HttpSource::new(url));

    assert!(provider.find(&complete()).await.is_empty());
    assert!(!provider.is_loaded());

    let groups = provider.find(&complete()).await;
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].description, "Search");

    // Cached from here on.
    provider.find(&complete()).await;
    assert_eq!(requests.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn custom_client_is_used() {
    let (url, requests) = serve(vec![Reply::ok(CSV)]).await;
    let client = reqwest::Client::builder()
        .user_agent("campaign-rules-test")
        .build()
        .unwrap();
    HttpSource::new(url).with_client(client).fetch().await.unwrap();

    let head = requests.lock().unwrap()[0].to_ascii_lowercase();
    assert!(head.contains("user-agent: campaign-rules-test"));
}

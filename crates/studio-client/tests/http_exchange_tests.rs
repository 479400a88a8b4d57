use std::net::SocketAddr;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use document::{ErrorKind, GreypotError, TemplateName};
use serde_json::json;
use studio_client::{StudioClient, StudioClientConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A request as seen by the test server.
#[derive(Debug)]
struct CapturedRequest {
    head: String,
    body: Vec<u8>,
}

/// Reads one HTTP/1.1 request (head plus `Content-Length` body).
async fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let head_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending a full request");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8(buf[..head_end].to_vec()).unwrap();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().unwrap())
        })
        .unwrap_or(0);

    let mut body = buf[head_end..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending the full body");
        body.extend_from_slice(&chunk[..n]);
    }

    CapturedRequest { head, body }
}

/// Serves exactly one request with the given status line and body, then
/// hands the captured request back through the join handle.
async fn serve_once(
    status_line: &'static str,
    body: String,
) -> (SocketAddr, tokio::task::JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
        request
    });

    (addr, handle)
}

fn client_for(addr: SocketAddr) -> StudioClient {
    StudioClient::new(StudioClientConfig::new(format!("http://{addr}"))).unwrap()
}

fn template(name: &str) -> TemplateName {
    TemplateName::new(name).unwrap()
}

#[tokio::test]
async fn posts_json_and_decodes_the_returned_artifact() {
    let pdf = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n".to_vec();
    let reply = json!({"reportId": "R1", "type": "pdf", "data": STANDARD.encode(&pdf)}).to_string();
    let (addr, server) = serve_once("200 OK", reply).await;

    let data = json!({
        "invoiceId": "SH200992",
        "lineItems": [{"name": "Fresh Air", "quantity": 10}]
    });
    let response = client_for(addr)
        .generate_document(&template("invoice.html"), "<html></html>", &data)
        .await
        .unwrap();

    assert_eq!(response.report_id(), "R1");
    assert_eq!(response.artifact_type(), "pdf");
    assert_eq!(response.decode().unwrap().into_bytes(), pdf);

    let request = server.await.unwrap();
    let request_line = request.head.lines().next().unwrap();
    assert_eq!(request_line, "POST /_studio/generate/pdf/invoice.html HTTP/1.1");
    assert!(request
        .head
        .lines()
        .any(|line| line.eq_ignore_ascii_case("content-type: application/json")));

    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(
        body,
        json!({"Name": "invoice.html", "Template": "<html></html>", "Data": data})
    );
}

#[tokio::test]
async fn server_error_status_carries_the_body() {
    let (addr, server) = serve_once("500 Internal Server Error", "render failed".to_owned()).await;

    let err = client_for(addr)
        .generate_document(&template("broken.html"), "", &json!({}))
        .await
        .unwrap_err();
    server.await.unwrap();

    assert_eq!(err.kind(), ErrorKind::Transport);
    match err {
        GreypotError::HttpStatus { status, body, url } => {
            assert_eq!(status, 500);
            assert_eq!(body, "render failed");
            assert!(url.ends_with("/_studio/generate/pdf/broken.html"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_body_is_a_parse_error() {
    let (addr, server) = serve_once("200 OK", "definitely not json".to_owned()).await;

    let err = client_for(addr)
        .generate_document(&template("t.html"), "", &json!({}))
        .await
        .unwrap_err();
    server.await.unwrap();

    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr)
        .generate_document(&template("t.html"), "", &json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(matches!(err, GreypotError::Transport { timed_out: false, .. }));
}

#[tokio::test]
async fn silent_server_hits_the_configured_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Accept and read the request but never answer.
    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let _request = read_request(&mut stream).await;
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let config = StudioClientConfig::new(format!("http://{addr}")).with_timeout(Duration::from_millis(200));
    let err = StudioClient::new(config)
        .unwrap()
        .generate_document(&template("slow.html"), "", &json!({}))
        .await
        .unwrap_err();
    server.abort();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(matches!(err, GreypotError::Transport { timed_out: true, .. }));
}

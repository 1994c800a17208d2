use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use crate::config::Config;

#[derive(Debug)]
pub struct CapturedRequest {
    /// Request line and headers, lowercased.
    pub head: String,
    pub body: String,
}

/// Serve a single canned HTTP response on a random local port and return its URL.
pub async fn serve_once(status: &str, content_type: &str, body: &str) -> String {
    let (url, _request) = serve_capturing(status, content_type, body).await;
    url
}

/// Like `serve_once`, also handing back the request the server received.
pub async fn serve_capturing(
    status: &str,
    content_type: &str,
    body: &str,
) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let request = read_request(&mut socket).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
            let _ = tx.send(request);
        }
    });

    (format!("http://{addr}/"), rx)
}

/// Accept one connection and never answer it.
pub async fn serve_silence() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            read_request(&mut socket).await;
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        }
    });

    format!("http://{addr}")
}

pub fn test_config(openai_api_base: &str) -> Config {
    Config::from_lookup(|name| match name {
        "OPENAI_API_KEY" => Some("sk-test".into()),
        "DISCORD_WEBHOOK" => Some("http://127.0.0.1:9/webhook".into()),
        "OPENAI_API_BASE" => Some(openai_api_base.to_string()),
        _ => None,
    })
    .unwrap()
}

// Consumes the request head and any announced body.
async fn read_request(socket: &mut TcpStream) -> CapturedRequest {
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        request.extend_from_slice(&buf[..n]);

        let Some(header_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&request[..header_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if request.len() >= header_end + 4 + content_length {
            return CapturedRequest {
                head,
                body: String::from_utf8_lossy(&request[header_end + 4..]).into_owned(),
            };
        }
    }

    CapturedRequest {
        head: String::from_utf8_lossy(&request).to_lowercase(),
        body: String::new(),
    }
}

//! Minimal HTTP/1.1 server standing in for the scraping API in integration tests.
//!
//! Answers every GET with one fixed body and records each request line so
//! tests can check the query string that was sent.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StubOptions {
    /// Status line sent with the body.
    pub status: &'static str,
    pub content_type: &'static str,
    /// Wait this long before answering (simulates an unresponsive upstream).
    pub delay: Option<Duration>,
}

impl Default for StubOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_type: "application/pdf",
            delay: None,
        }
    }
}

/// Handle to a running stub: its endpoint URL and the request lines seen so far.
pub struct StubUpstream {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubUpstream {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a stub serving `body` at `http://127.0.0.1:<port>/v1/`. Runs until the process exits.
pub fn start(body: Vec<u8>) -> StubUpstream {
    start_with_options(body, StubOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: StubOptions) -> StubUpstream {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen);
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &body, &opts, &seen));
        }
    });
    StubUpstream {
        endpoint: format!("http://127.0.0.1:{}/v1/", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    opts: &StubOptions,
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let request_line = request.lines().next().unwrap_or("").to_string();
    seen.lock().unwrap().push(request_line);

    if let Some(d) = opts.delay {
        thread::sleep(d);
    }

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        opts.content_type,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}

/// `len` bytes that start like a real PDF.
pub fn pdf_body(len: usize) -> Vec<u8> {
    let mut body = b"%PDF-1.4\n".to_vec();
    body.extend((0u8..=255).cycle().take(len.saturating_sub(body.len())));
    body
}

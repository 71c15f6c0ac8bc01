//! Minimal HTTP/1.1 server for probe integration tests.
//!
//! Routes:
//! - `GET /status/<code>`: responds with that status and body `status <code>`.
//! - `GET /redirect`: 302 to `/status/200`.
//! - `GET /headers`: 200 with the request header lines echoed back.
//! - anything else: 404.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A base URL nothing is listening on.
pub fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };

    let mut lines = request.lines();
    let target = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/");
    let headers: Vec<&str> = lines.take_while(|l| !l.trim().is_empty()).collect();

    let (status, extra, body) = if let Some(code) = target.strip_prefix("/status/") {
        let code: u16 = code.parse().unwrap_or(404);
        (code, String::new(), format!("status {code}"))
    } else if target == "/redirect" {
        (302, "Location: /status/200\r\n".to_string(), String::new())
    } else if target == "/headers" {
        (200, String::new(), headers.join("\n"))
    } else {
        (404, String::new(), "not found".to_string())
    };

    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n{}",
        status,
        body.len(),
        extra,
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

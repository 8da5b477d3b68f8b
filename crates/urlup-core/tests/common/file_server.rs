//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of routes. Each route has a status line, headers and a
//! body; HEAD gets the headers only. Unknown paths answer 404 with a small
//! HTML body.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    /// e.g. "200 OK".
    pub status: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
    /// If false, HEAD returns 405 (simulates servers that block HEAD).
    pub head_allowed: bool,
}

impl Route {
    /// 200 with `Content-Length` matching `body` and an optional `Content-Type`.
    pub fn ok(body: Vec<u8>, content_type: Option<&str>) -> Self {
        let mut headers = vec![("Content-Length", body.len().to_string())];
        if let Some(ct) = content_type {
            headers.push(("Content-Type", ct.to_string()));
        }
        Self {
            status: "200 OK",
            headers,
            body,
            head_allowed: true,
        }
    }

    /// 200 without `Content-Length` or `Content-Type`.
    pub fn bare() -> Self {
        Self {
            status: "200 OK",
            headers: Vec::new(),
            body: Vec::new(),
            head_allowed: true,
        }
    }

    pub fn status(status: &'static str) -> Self {
        Self {
            status,
            headers: vec![("Content-Length", "0".to_string())],
            body: Vec::new(),
            head_allowed: true,
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: "301 Moved Permanently",
            headers: vec![
                ("Location", location.to_string()),
                ("Content-Length", "0".to_string()),
            ],
            body: Vec::new(),
            head_allowed: true,
        }
    }

    pub fn without_head(mut self) -> Self {
        self.head_allowed = false;
        self
    }
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start(routes: Vec<(&'static str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<&'static str, Route>> = Arc::new(routes.into_iter().collect());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A URL on 127.0.0.1 where nothing listens.
pub fn closed_port_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}{}", port, path)
}

fn handle(mut stream: TcpStream, routes: &HashMap<&'static str, Route>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path) = parse_request_line(request);

    let not_found = Route {
        status: "404 Not Found",
        headers: vec![
            ("Content-Length", "9".to_string()),
            ("Content-Type", "text/html".to_string()),
        ],
        body: b"not found".to_vec(),
        head_allowed: true,
    };
    let route = routes.get(path).unwrap_or(&not_found);

    let is_head = method.eq_ignore_ascii_case("HEAD");
    if is_head && !route.head_allowed {
        let _ = stream.write_all(
            b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    let mut response = format!("HTTP/1.1 {}\r\n", route.status);
    for (name, value) in &route.headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("Connection: close\r\n\r\n");
    let _ = stream.write_all(response.as_bytes());
    if !is_head {
        let _ = stream.write_all(&route.body);
    }
}

/// Returns (method, path) from the request line; the query string is dropped.
fn parse_request_line(request: &str) -> (&str, &str) {
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");
    let path = target.split('?').next().unwrap_or("/");
    (method, path)
}

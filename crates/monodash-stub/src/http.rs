// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Minimal HTTP/1.1 framing: read one request, write one response, close.
//
// Only what the dashboard's clients send is understood: a request line,
// headers, and an optional body sized by Content-Length. No chunked
// encoding, no keep-alive.

use std::io;

use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Upper bound on request line + headers.
const MAX_HEAD_BYTES: usize = 16 * 1024;

/// Upper bound on a request body.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// A parsed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    /// Request target with any query string removed.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// JSON response with the given status.
    pub fn json<T: Serialize + ?Sized>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self { status, body },
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response body");
                Self::empty(500)
            }
        }
    }

    /// Response with no body (Spring's `ResponseEntity.build()` shape).
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }
}

/// Head of a request: everything before the blank line.
struct RequestHead {
    method: String,
    path: String,
    headers: Vec<(String, String)>,
    content_length: usize,
}

fn invalid(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

/// Find the first occurrence of `needle` in `haystack`.
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn parse_head(head: &[u8]) -> io::Result<RequestHead> {
    let text = std::str::from_utf8(head).map_err(|_| invalid("request head is not UTF-8"))?;
    let mut lines = text.split("\r\n");

    let request_line = lines.next().ok_or_else(|| invalid("empty request"))?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().ok_or_else(|| invalid("missing method"))?;
    let target = parts.next().ok_or_else(|| invalid("missing request target"))?;
    let version = parts.next().ok_or_else(|| invalid("missing HTTP version"))?;
    if !version.starts_with("HTTP/1.") {
        return Err(invalid(format!("unsupported version {version}")));
    }

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    for line in lines.filter(|l| !l.is_empty()) {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| invalid(format!("malformed header line {line:?}")))?;
        let (name, value) = (name.trim().to_string(), value.trim().to_string());
        if name.eq_ignore_ascii_case("content-length") {
            content_length = value
                .parse()
                .map_err(|_| invalid(format!("bad Content-Length {value:?}")))?;
        }
        headers.push((name, value));
    }

    if content_length > MAX_BODY_BYTES {
        return Err(invalid(format!("body of {content_length} bytes is too large")));
    }

    let path = target.split('?').next().unwrap_or(target).to_string();

    Ok(RequestHead {
        method: method.to_ascii_uppercase(),
        path,
        headers,
        content_length,
    })
}

/// Read one request. Returns `Ok(None)` if the peer closed without sending
/// anything.
pub async fn read_request<R>(stream: &mut R) -> io::Result<Option<HttpRequest>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::with_capacity(4096);
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = find_subsequence(&buf, b"\r\n\r\n") {
            break pos;
        }
        if buf.len() > MAX_HEAD_BYTES {
            return Err(invalid("request head too large"));
        }
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            if buf.is_empty() {
                return Ok(None);
            }
            return Err(invalid("connection closed mid-request"));
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = parse_head(&buf[..header_end])?;
    let body_offset = header_end + 4;
    let wanted = body_offset + head.content_length;

    while buf.len() < wanted {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Err(invalid("connection closed before body was complete"));
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Ok(Some(HttpRequest {
        method: head.method,
        path: head.path,
        headers: head.headers,
        body: buf[body_offset..wanted].to_vec(),
    }))
}

/// Standard reason phrase for the statuses the stub emits.
pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Write `response` with a JSON content type and close semantics.
pub async fn write_response<W>(stream: &mut W, response: &HttpResponse) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let head = format!(
        "HTTP/1.1 {} {}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n",
        response.status,
        reason_phrase(response.status),
        response.body.len()
    );

    stream.write_all(head.as_bytes()).await?;
    stream.write_all(&response.body).await?;
    stream.flush().await
}

//! Minimal HTTP/1.1 front end: `GET /rings?stand=..&exercise=..&move=..`.
//!
//! Each connection carries one request and is closed after the response.
//! Query keys and values are form-decoded (`+` and `%XX`) before lookup.
//! Routing is a pure function of method, target and config; sockets only
//! move bytes in and out.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use rings_engine::paint::Color;
use rings_engine::rings::{render_png, ActivityValues, RingType, RingsConfig, DEFAULT_IMAGE_SIZE};

use crate::progress::{parse_progress, ProgressError};

const READ_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_HEADER_LINES: usize = 100;
const MAX_LINE_BYTES: usize = 8 * 1024;

/// A complete response, ready to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    fn text(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: message.into().into_bytes(),
        }
    }

    fn png(body: Vec<u8>) -> Self {
        Self { status: 200, content_type: "image/png", body }
    }

    fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            _ => "Internal Server Error",
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            self.reason(),
            self.content_type,
            self.body.len(),
        );
        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

/// Splits a query string into decoded key/value pairs. Keys without `=` get an
/// empty value.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .map(|(key, value)| (decode_component(key), decode_component(value)))
        .collect()
}

/// Form decoding: `+` is a space, `%XX` a byte. Malformed escapes stay literal.
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => match bytes.get(i + 1..i + 3).and_then(hex_byte) {
                Some(b) => {
                    out.push(b);
                    i += 2;
                }
                None => out.push(b'%'),
            },
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_byte(pair: &[u8]) -> Option<u8> {
    let hi = (pair[0] as char).to_digit(16)?;
    let lo = (pair[1] as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

/// Answers one request.
pub fn route(method: &str, target: &str, config: &RingsConfig) -> Response {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));

    match (method, path) {
        ("GET", "/rings") => rings(query, config),
        (_, "/rings") => Response::text(405, "Method not allowed"),
        _ => Response::text(404, "Not found"),
    }
}

fn rings(query: &str, config: &RingsConfig) -> Response {
    let params = parse_query(query);
    let mut values = ActivityValues::new();

    for kind in RingType::ALL {
        let raw = params
            .iter()
            .find(|(key, _)| key == kind.name())
            .map_or("", |(_, value)| value.as_str());

        match parse_progress(raw) {
            Ok(value) => {
                values.insert(kind, value);
            }
            Err(ProgressError::NotANumber(_)) => {
                return Response::text(400, format!("Bad request, could not parse {kind} value as a float"));
            }
            Err(e @ ProgressError::OutOfRange(_)) => {
                return Response::text(400, format!("Bad request, {kind} value {e}"));
            }
        }
    }

    match render_png(config, DEFAULT_IMAGE_SIZE, Color::transparent(), &values) {
        Ok(png) => Response::png(png),
        Err(e) => {
            log::warn!("render failed: {e:#}");
            Response::text(500, "Failed to render rings")
        }
    }
}

/// Accepts connections on `addr` until the listener fails.
pub async fn serve(addr: SocketAddr, config: Arc<RingsConfig>) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    log::info!("serving activity rings on http://{addr}/rings");

    loop {
        let (stream, peer) = listener.accept().await.context("accept failed")?;
        let config = Arc::clone(&config);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, config).await {
                log::warn!("{peer}: {e:#}");
            }
        });
    }
}

async fn handle_connection(mut stream: TcpStream, config: Arc<RingsConfig>) -> Result<()> {
    let (reader, mut writer) = stream.split();
    let mut reader = BufReader::new(reader);

    let request_line = tokio::time::timeout(READ_TIMEOUT, read_head(&mut reader))
        .await
        .context("timed out reading request")??;

    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(target)) = (parts.next(), parts.next()) else {
        let response = Response::text(400, "Malformed request line");
        writer.write_all(&response.to_bytes()).await?;
        return Ok(());
    };
    let (method, target) = (method.to_string(), target.to_string());

    let response = tokio::task::spawn_blocking({
        let (method, target) = (method.clone(), target.clone());
        move || route(&method, &target, &config)
    })
    .await
    .context("render task panicked")?;

    log::info!("{method} {target} -> {} ({} bytes)", response.status, response.body.len());
    writer.write_all(&response.to_bytes()).await?;
    writer.shutdown().await?;
    Ok(())
}

/// Reads the request line and discards the headers that follow it.
async fn read_head<R>(reader: &mut R) -> Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut request_line = String::new();
    read_bounded_line(reader, &mut request_line).await?;

    let mut header = String::new();
    for _ in 0..MAX_HEADER_LINES {
        header.clear();
        if read_bounded_line(reader, &mut header).await? == 0 || header.trim_end().is_empty() {
            return Ok(request_line.trim_end().to_string());
        }
    }
    anyhow::bail!("too many header lines")
}

async fn read_bounded_line<R>(reader: &mut R, line: &mut String) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    // One byte past the limit is enough to tell an oversized line apart.
    let n = (&mut *reader)
        .take(MAX_LINE_BYTES as u64 + 1)
        .read_line(line)
        .await
        .context("failed to read request")?;
    anyhow::ensure!(n <= MAX_LINE_BYTES, "request line too long");
    Ok(n)
}

//! One-shot HTTP and HTTPS responders for exercising the client without a live service.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::{ServerConfig, ServerConnection, StreamOwned};

/// A request as received by [`serve_once`] or [`serve_once_tls`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub type Server = JoinHandle<io::Result<CapturedRequest>>;

fn other<E>(e: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::Other, e)
}

/// Read one request from `stream` and answer it with `status` and `body`.
fn respond<S: Read + Write>(stream: S, status: u16, body: &str) -> io::Result<CapturedRequest> {
    let mut reader = BufReader::new(stream);

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        line.clear();
        reader.read_line(&mut line)?;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some((k, v)) = trimmed.split_once(':') {
            headers.push((k.trim().to_string(), v.trim().to_string()));
        }
    }

    let len = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut request_body = vec![0; len];
    reader.read_exact(&mut request_body)?;

    let stream = reader.get_mut();
    write!(
        stream,
        "HTTP/1.1 {} Status\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )?;
    stream.flush()?;

    Ok(CapturedRequest {
        method,
        path,
        headers,
        body: request_body,
    })
}

/// Accept a single plain HTTP connection on an ephemeral port, answer it with
/// `status` and `body`, and hand back the request it received.
pub fn serve_once(status: u16, body: &str) -> io::Result<(SocketAddr, Server)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept()?;
        respond(stream, status, &body)
    });

    Ok((addr, handle))
}

/// Server side TLS settings around a freshly generated self-signed certificate.
fn self_signed_config() -> io::Result<ServerConfig> {
    let certified =
        rcgen::generate_simple_self_signed(vec!["localhost".to_string(), "127.0.0.1".to_string()])
            .map_err(other)?;
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(certified.key_pair.serialize_der()));

    ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .map_err(other)?
        .with_no_client_auth()
        .with_single_cert(vec![certified.cert.der().clone()], key)
        .map_err(other)
}

/// Like [`serve_once`], but over TLS with a self-signed certificate for
/// `localhost` and `127.0.0.1`.
///
/// The server thread ends with an error when the client refuses the certificate.
pub fn serve_once_tls(status: u16, body: &str) -> io::Result<(SocketAddr, Server)> {
    let config = Arc::new(self_signed_config()?);
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept()?;
        let conn = ServerConnection::new(config).map_err(other)?;
        let mut tls = StreamOwned::new(conn, stream);
        let request = respond(&mut tls, status, &body)?;
        tls.conn.send_close_notify();
        tls.flush()?;
        Ok(request)
    });

    Ok((addr, handle))
}

/// An address nothing listens on.
pub fn unreachable_addr() -> io::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    listener.local_addr()
}

// Shared test helpers for mock servers and temporary files.

use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_rustls::rustls::crypto::ring;
use tokio_rustls::rustls::pki_types::pem::PemObject;
use tokio_rustls::rustls::pki_types::{CertificateDer, PrivateKeyDer};
use tokio_rustls::rustls::ServerConfig;
use tokio_rustls::TlsAcceptor;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts a mock server that answers GET, POST and DELETE with a fixed text
/// naming the method.
#[allow(dead_code)] // Used by other test files
pub async fn setup_method_server() -> MockServer {
    let server = MockServer::start().await;
    for (name, text) in [
        ("GET", "GET method received"),
        ("POST", "POST method received"),
        ("DELETE", "DELETE method received"),
    ] {
        Mock::given(method(name))
            .respond_with(ResponseTemplate::new(200).set_body_string(text))
            .mount(&server)
            .await;
    }
    server
}

/// Returns the `host:port` of a mock server, as passed to `-host`.
#[allow(dead_code)] // Used by other test files
pub fn host_of(server: &MockServer) -> String {
    server.address().to_string()
}

/// Number of requests the mock server has seen so far.
#[allow(dead_code)] // Used by other test files
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("request recording is enabled by default")
        .len()
}

/// Writes `contents` to a new temporary file.
#[allow(dead_code)] // Used by other test files
pub fn write_temp_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents).expect("Failed to write temp file");
    file.flush().expect("Failed to flush file");
    file
}

// Self-signed certificate for localhost and 127.0.0.1, no CA will trust it
const SELF_SIGNED_CERT: &[u8] = include_bytes!("fixtures/localhost.crt");
const SELF_SIGNED_KEY: &[u8] = include_bytes!("fixtures/localhost.key");

/// Starts an HTTPS server on 127.0.0.1 presenting a self-signed certificate.
///
/// Every request that completes the handshake gets a 200 response carrying
/// `body`. Returns the `host:port` to pass as the request host.
#[allow(dead_code)] // Used by other test files
pub async fn start_self_signed_tls_server(body: &'static str) -> String {
    let cert =
        CertificateDer::from_pem_slice(SELF_SIGNED_CERT).expect("Failed to parse certificate");
    let key = PrivateKeyDer::from_pem_slice(SELF_SIGNED_KEY).expect("Failed to parse key");
    let config = ServerConfig::builder_with_provider(Arc::new(ring::default_provider()))
        .with_safe_default_protocol_versions()
        .expect("Failed to select TLS versions")
        .with_no_client_auth()
        .with_single_cert(vec![cert], key)
        .expect("Failed to build TLS config");
    let acceptor = TlsAcceptor::from(Arc::new(config));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind TLS listener");
    let addr: SocketAddr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                // Clients that verify the certificate abort the handshake here
                let Ok(mut tls) = acceptor.accept(stream).await else {
                    return;
                };

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match tls.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = tls.write_all(response.as_bytes()).await;
                let _ = tls.shutdown().await;
            });
        }
    });

    addr.to_string()
}

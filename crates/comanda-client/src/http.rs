// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP client for the restaurant API.
//
// Endpoints used:
//   - GET  {base}/products     catalog envelope `{ "data": [...] }`
//   - POST {base}/cart/order   one `CartOrder`, answers with an optional `error`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, error, info, instrument};

use comanda_core::error::{ComandaError, Result};
use comanda_core::types::{CartOrder, CartResponse, CatalogEnvelope, Product};

use crate::traits::{CartService, ProductService};

/// Talks to the product and cart services over HTTP.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// A trailing slash on the base URL is ignored.
    pub fn new(base_url: &str, timeout: Duration, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ComandaError::Network(format!("building HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| ComandaError::Network(format!("{what}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), what, "backend returned an error status");
            return Err(ComandaError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ProductService for HttpBackend {
    #[instrument(skip(self), fields(base = %self.base_url))]
    async fn find_all(&self) -> Result<Vec<Product>> {
        let request = self.client.get(self.endpoint("products"));
        let response = self.send(request, "GET products").await?;
        let envelope: CatalogEnvelope = response
            .json()
            .await
            .map_err(|e| ComandaError::Network(format!("decoding catalog: {e}")))?;
        let products = envelope.into_products();
        debug!(count = products.len(), "catalog received");
        Ok(products)
    }
}

#[async_trait]
impl CartService for HttpBackend {
    #[instrument(skip(self, order), fields(base = %self.base_url, product = %order.product))]
    async fn add_order(&self, order: &CartOrder) -> Result<()> {
        let request = self.client.post(self.endpoint("cart/order")).json(order);
        let response = self.send(request, "POST cart/order").await?;

        // Some deployments answer with an empty body on success.
        let body = response
            .text()
            .await
            .map_err(|e| ComandaError::Network(format!("reading cart response: {e}")))?;
        let parsed: CartResponse = if body.trim().is_empty() {
            CartResponse::default()
        } else {
            serde_json::from_str(&body)?
        };

        match parsed.rejection() {
            Some(message) => Err(ComandaError::CartRejected(message)),
            None => {
                info!(quantity = %order.quantity, "order added to cart");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::oneshot;

    use comanda_core::types::CategoryRef;

    use super::*;

    fn pizza() -> Product {
        Product {
            id: "p1".into(),
            name: "Pizza Margarita".into(),
            image_url: String::new(),
            price: 12.5,
            category: Some(CategoryRef {
                name: "Pizzas".into(),
            }),
            featured: None,
            description: None,
        }
    }

    /// Read one request (headers plus `content-length` body) off the socket.
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.expect("read");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let lower = line.to_ascii_lowercase();
                        lower
                            .strip_prefix("content-length:")
                            .and_then(|v| v.trim().parse::<usize>().ok())
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Answer a single HTTP exchange on loopback with `status` and `body`.
    ///
    /// Returns the API base URL and a receiver for the raw request text.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let base = format!("http://{}/api", listener.local_addr().expect("addr"));
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.expect("write");
            let _ = socket.shutdown().await;
            let _ = tx.send(request);
        });
        (base, rx)
    }

    fn backend(base: &str, token: Option<&str>) -> HttpBackend {
        HttpBackend::new(base, Duration::from_secs(5), token.map(str::to_owned)).expect("client")
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let backend = backend("http://localhost:3000/api/", None);
        assert_eq!(backend.base_url(), "http://localhost:3000/api");
        assert_eq!(backend.endpoint("products"), "http://localhost:3000/api/products");
        assert_eq!(backend.endpoint("/cart/order"), "http://localhost:3000/api/cart/order");
    }

    #[tokio::test]
    async fn catalog_is_read_from_the_data_envelope() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{ "data": [ { "id": "p1", "name": "Pizza Margarita", "price": 12.5 } ] }"#,
        )
        .await;

        let products = backend(&base, None).find_all().await.expect("catalog");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Pizza Margarita");

        let request = request.await.expect("request").to_ascii_lowercase();
        assert!(request.starts_with("get /api/products http/1.1"), "{request}");
        assert!(!request.contains("authorization:"), "{request}");
    }

    #[tokio::test]
    async fn empty_cart_body_is_success_and_carries_the_token() {
        let (base, request) = serve_once("200 OK", "").await;

        backend(&base, Some("tok-1"))
            .add_order(&CartOrder::single(&pizza()))
            .await
            .expect("accepted");

        let request = request.await.expect("request");
        let lower = request.to_ascii_lowercase();
        assert!(lower.starts_with("post /api/cart/order http/1.1"), "{request}");
        assert!(lower.contains("authorization: bearer tok-1"), "{request}");
        assert!(request.contains(r#""productName":"Pizza Margarita""#), "{request}");
        assert!(request.contains(r#""quantity":"1""#), "{request}");
    }

    #[tokio::test]
    async fn cart_error_field_is_a_rejection() {
        let (base, _request) = serve_once("200 OK", r#"{ "error": "Producto agotado" }"#).await;

        let err = backend(&base, None)
            .add_order(&CartOrder::single(&pizza()))
            .await
            .expect_err("rejected");
        assert!(
            matches!(err, ComandaError::CartRejected(ref m) if m == "Producto agotado"),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn empty_string_cart_error_is_accepted() {
        let (base, _request) = serve_once("200 OK", r#"{ "error": "" }"#).await;
        backend(&base, None)
            .add_order(&CartOrder::single(&pizza()))
            .await
            .expect("accepted");
    }

    #[tokio::test]
    async fn false_cart_error_is_accepted() {
        let (base, _request) = serve_once("200 OK", r#"{ "error": false }"#).await;
        backend(&base, None)
            .add_order(&CartOrder::single(&pizza()))
            .await
            .expect("accepted");
    }

    #[tokio::test]
    async fn server_error_status_is_reported() {
        let (base, _request) = serve_once("500 Internal Server Error", "boom").await;

        let err = backend(&base, None)
            .add_order(&CartOrder::single(&pizza()))
            .await
            .expect_err("should fail");
        assert!(
            matches!(err, ComandaError::HttpStatus { status: 500, ref body } if body == "boom"),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn closed_port_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let err = backend(&format!("http://{addr}"), None)
            .find_all()
            .await
            .expect_err("should fail");
        assert!(matches!(err, ComandaError::Network(_)), "got {err:?}");
    }
}

//! Transport abstraction used by the profile [`Client`](crate::client::Client).
//!
//! Anything that can turn an [`http::Request`] into an [`http::Response`] can
//! back a client, which is how tests swap the network for a canned response.
use bytes::Bytes;
pub use http::{
    HeaderMap, HeaderValue, Method, Request, Response, StatusCode, Uri, header, request::Builder,
};
use std::future::Future;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Http error: {0}")]
    Protocol(#[from] http::Error),
    #[error("Http client error: {0}")]
    Instance(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn instance_error<E: std::error::Error + Send + Sync + 'static>(error: E) -> Error {
    Error::Instance(error.into())
}

/// Empty request body.
pub struct NoBody;

impl From<NoBody> for Bytes {
    fn from(_: NoBody) -> Self {
        Bytes::new()
    }
}

/// Lossy UTF-8 view of a buffered response body.
pub fn text(response: &Response<Bytes>) -> String {
    String::from_utf8_lossy(response.body()).into_owned()
}

/// A transport capable of performing a single buffered HTTP exchange.
///
/// Implementations must hand back every response the server produced,
/// including non-success statuses; interpreting the status is up to the caller.
pub trait HttpClientExt: Send + Sync {
    /// Send a HTTP request and get the full response back, body buffered as bytes.
    fn send<T>(&self, req: Request<T>) -> impl Future<Output = Result<Response<Bytes>>> + Send
    where
        T: Into<Bytes>;
}

impl HttpClientExt for reqwest::Client {
    fn send<T>(&self, req: Request<T>) -> impl Future<Output = Result<Response<Bytes>>> + Send
    where
        T: Into<Bytes>,
    {
        let (parts, body) = req.into_parts();
        let body: Bytes = body.into();
        let req = self
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body);

        async move {
            let response = req.send().await.map_err(instance_error)?;

            let mut res = Response::builder()
                .status(response.status())
                .version(response.version());

            if let Some(hs) = res.headers_mut() {
                *hs = response.headers().clone();
            }

            let bytes = response.bytes().await.map_err(instance_error)?;

            res.body(bytes).map_err(Error::Protocol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_body_is_empty() {
        let bytes: Bytes = NoBody.into();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_text_is_lossy() {
        let response = Response::builder()
            .status(StatusCode::OK)
            .body(Bytes::from_static(b"caf\xc3\xa9 \xff"))
            .unwrap();

        assert_eq!(text(&response), "café \u{fffd}");
    }

    #[test]
    fn test_instance_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = instance_error(io);
        assert_eq!(err.to_string(), "Http client error: refused");
    }
}

//! Whole-entity access: headers and body together.

use axum::{
    body::Bytes,
    extract::{FromRef, FromRequest, Request},
    http::{header::HeaderName, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};

use crate::body::error::BodyError;
use crate::body::read::{collect_body, read_utf8};
use crate::body::record::PersonRecord;

/// Maximum body size accepted by the manual readers, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLimit(pub usize);

/// Conversion from a fully collected body into a typed value.
pub trait MessageBody: Sized {
    fn from_bytes(bytes: Bytes) -> Result<Self, BodyError>;
}

impl MessageBody for String {
    fn from_bytes(bytes: Bytes) -> Result<Self, BodyError> {
        read_utf8(bytes)
    }
}

impl MessageBody for PersonRecord {
    fn from_bytes(bytes: Bytes) -> Result<Self, BodyError> {
        PersonRecord::from_json_slice(&bytes)
    }
}

/// An HTTP message body together with its headers.
///
/// As an extractor it exposes the request headers and the decoded body.
/// As a response it writes the headers and then the body.
///
/// Unlike `axum::Json`, extraction never checks `Content-Type`: the body is
/// decoded as whatever `T` expects, so `text/plain` JSON is accepted.
#[derive(Debug, Clone)]
pub struct Entity<T> {
    pub headers: HeaderMap,
    pub body: T,
}

impl<T> Entity<T> {
    /// An entity with no headers.
    pub fn new(body: T) -> Self {
        Self {
            headers: HeaderMap::new(),
            body,
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

impl<S, T> FromRequest<S> for Entity<T>
where
    BodyLimit: FromRef<S>,
    S: Send + Sync,
    T: MessageBody + Send,
{
    type Rejection = BodyError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let BodyLimit(limit) = BodyLimit::from_ref(state);
        let (parts, body) = req.into_parts();
        let bytes = collect_body(body, limit).await?;

        Ok(Self {
            headers: parts.headers,
            body: T::from_bytes(bytes)?,
        })
    }
}

impl<T: IntoResponse> IntoResponse for Entity<T> {
    fn into_response(self) -> Response {
        (self.headers, self.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};

    fn request(body: &'static str) -> Request {
        Request::builder()
            .header("x-trace", "abc")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_headers_and_text() {
        let entity = Entity::<String>::from_request(request("hello"), &BodyLimit(64))
            .await
            .unwrap();

        assert_eq!(entity.headers.get("x-trace").unwrap(), "abc");
        assert_eq!(entity.into_body(), "hello");
    }

    #[tokio::test]
    async fn test_extracts_record() {
        let entity = Entity::<PersonRecord>::from_request(
            request(r#"{"username": "hello", "age": 20}"#),
            &BodyLimit(64),
        )
        .await
        .unwrap();

        assert_eq!(entity.body, PersonRecord::new("hello", 20));
    }

    #[tokio::test]
    async fn test_record_ignores_content_type() {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"username": "hello", "age": 20}"#))
            .unwrap();

        let entity = Entity::<PersonRecord>::from_request(req, &BodyLimit(64))
            .await
            .unwrap();
        assert_eq!(entity.body, PersonRecord::new("hello", 20));
    }

    #[tokio::test]
    async fn test_rejects_malformed_record() {
        let err = Entity::<PersonRecord>::from_request(request("not json"), &BodyLimit(64))
            .await
            .unwrap_err();
        assert!(matches!(err, BodyError::Decode(_)));
    }

    #[tokio::test]
    async fn test_respects_limit() {
        let err = Entity::<String>::from_request(request("0123456789"), &BodyLimit(4))
            .await
            .unwrap_err();
        assert!(matches!(err, BodyError::TooLarge { limit: 4 }));
    }

    #[tokio::test]
    async fn test_response_carries_headers() {
        let response = Entity::new("OK")
            .with_header(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        let body = axum::body::to_bytes(response.into_body(), 64).await.unwrap();
        assert_eq!(&body[..], b"OK");
    }
}

//! Reading a body stream into memory.

use axum::body::{Body, Bytes};
use futures_util::StreamExt;

use crate::body::error::BodyError;

/// Drain `body` into a single buffer.
///
/// Fails with [`BodyError::TooLarge`] as soon as more than `limit` bytes have
/// arrived, without waiting for the rest of the stream.
pub async fn collect_body(body: Body, limit: usize) -> Result<Bytes, BodyError> {
    let mut stream = body.into_data_stream();
    let mut buf = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(BodyError::Read)?;
        if buf.len() + chunk.len() > limit {
            return Err(BodyError::TooLarge { limit });
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(Bytes::from(buf))
}

/// Decode collected bytes as UTF-8 text.
pub fn read_utf8(bytes: Bytes) -> Result<String, BodyError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Drain `body` and decode it as UTF-8 text.
pub async fn read_to_string(body: Body, limit: usize) -> Result<String, BodyError> {
    let bytes = collect_body(body, limit).await?;
    read_utf8(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    #[tokio::test]
    async fn test_collects_chunked_body() {
        let chunks = vec![Ok::<_, std::io::Error>("hel"), Ok("lo "), Ok("world")];
        let body = Body::from_stream(stream::iter(chunks));

        let text = read_to_string(body, 1024).await.unwrap();
        assert_eq!(text, "hello world");
    }

    #[tokio::test]
    async fn test_empty_body() {
        let bytes = collect_body(Body::empty(), 16).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_limit_is_inclusive() {
        let bytes = collect_body(Body::from("12345678"), 8).await.unwrap();
        assert_eq!(bytes.len(), 8);

        let err = collect_body(Body::from("123456789"), 8).await.unwrap_err();
        assert!(matches!(err, BodyError::TooLarge { limit: 8 }));
    }

    #[tokio::test]
    async fn test_stream_error_is_read_error() {
        let chunks = vec![
            Ok::<_, std::io::Error>("partial"),
            Err(std::io::Error::other("connection reset")),
        ];
        let body = Body::from_stream(stream::iter(chunks));

        let err = collect_body(body, 1024).await.unwrap_err();
        assert!(matches!(err, BodyError::Read(_)));
    }

    #[tokio::test]
    async fn test_invalid_utf8() {
        let body = Body::from(vec![b'o', b'k', 0xff]);
        let err = read_to_string(body, 1024).await.unwrap_err();
        assert!(matches!(err, BodyError::InvalidUtf8(_)));
    }
}

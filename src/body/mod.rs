//! Message body handling.
//!
//! # Data Flow
//! ```text
//! Request body stream
//!     → read.rs (bounded collection, UTF-8 decoding)
//!     → record.rs (JSON → PersonRecord)
//!     → entity.rs (headers + typed body, as extractor or response)
//!
//! Any failure → error.rs (BodyError → status code)
//! ```
//!
//! # Design Decisions
//! - Bodies are read completely before any response byte is written
//! - UTF-8 is the only accepted text encoding
//! - Size limit enforced while streaming, not after

pub mod entity;
pub mod error;
pub mod read;
pub mod record;

pub use entity::{BodyLimit, Entity, MessageBody};
pub use error::BodyError;
pub use read::{collect_body, read_to_string, read_utf8};
pub use record::PersonRecord;

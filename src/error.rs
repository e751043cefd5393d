//! # Error Types
//!
//! Error handling for the codec pipeline.
//!
//! This module defines all error variants that can occur during codec
//! operations, from configuration mistakes caught at decoration time to
//! failures raised by registered transformations during dispatch.
//!
//! ## Error Categories
//! - **Configuration Errors**: unresolvable message types, malformed TOML
//! - **Serialization Errors**: typed payload encode/decode failures
//! - **Dispatch Errors**: failures raised inside registered handlers
//!
//! Dispatch errors are never caught by the pipeline itself; they propagate
//! to the host's per-connection error boundary, which decides whether to
//! drop the connection, drop the packet, or log and continue.
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use codec_chain::error::{CodecError, Result};
//!
//! fn lookup(name: &str) -> Result<()> {
//!     Err(CodecError::UnknownMessageType(name.to_string()))
//! }
//!
//! match lookup("GhostMessage") {
//!     Err(CodecError::UnknownMessageType(name)) => assert_eq!(name, "GhostMessage"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::io;
use thiserror::Error;

// CodecError is the primary error type for all pipeline operations
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("unknown message type: {0}")]
    UnknownMessageType(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialize error: {0}")]
    SerializeError(String),

    #[error("deserialize error: {0}")]
    DeserializeError(String),

    #[error("decode failed: {0}")]
    DecodeFailure(String),

    #[error("encode failed: {0}")]
    EncodeFailure(String),

    #[error("custom error: {0}")]
    Custom(String),
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;

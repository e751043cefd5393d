//! # Core Codec Components
//!
//! Data model and capability contracts for the codec pipeline.
//!
//! This module provides the types the pipeline routes: packets as delivered
//! by the host's framing layer, the decoder/encoder capability traits, the
//! message catalog, and the naming convention that ties registration keys to
//! message types.
//!
//! ## Components
//! - **Codec**: `Decoder`/`Encoder` capability traits satisfied by every handler
//! - **Packet**: named, framed unit of wire data plus its connection identity
//! - **Message**: typed application-level unit and the catalog that describes it
//! - **Naming**: deterministic registration-key to message-type resolution
//!
//! Byte layouts are owned by the host's framing layer and message catalog;
//! this core only routes on packet names and carries payloads opaquely.

pub mod codec;
pub mod message;
pub mod naming;
pub mod packet;

// Re-export the capability contracts for handler implementors
pub use codec::{BoxedDecoder, BoxedEncoder, Decoder, Encoder};

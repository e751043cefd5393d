//! # codec-chain
//!
//! Extensible codec chain-of-responsibility core for packet, event, and
//! message dispatch.
//!
//! A server operator declares, by name, an ordered sequence of codec
//! handlers -- packet to event, event to refined event, packet to typed
//! message, message back to packet -- without modifying the host dispatch
//! engine. The host owns socket I/O, session lifecycle, and framing; this
//! crate owns the pipeline in between.
//!
//! ## Components
//! - **Chains**: ordered, append-only handler sequences; first handler to
//!   claim an input wins
//! - **Adapters**: a single closure satisfies the same contract as a
//!   fully-declared handler type
//! - **Contexts**: transient registration facades handed to setup code
//! - **Decorators**: one-shot installers that populate a chain from a batch
//!   of declared registrations at startup
//! - **Catalog**: explicit message-type lookup, so a bad encoder key fails
//!   decoration instead of faulting on first use
//!
//! ## Example
//! ```rust
//! use codec_chain::core::packet::{ConnectionId, Packet, ParsedPacket};
//! use codec_chain::protocol::chain::HandlerChain;
//! use codec_chain::protocol::decorator::{EventChainDecorator, EventDecoderBatch};
//!
//! #[derive(Debug, PartialEq)]
//! enum GameEvent {
//!     Login { conn: ConnectionId },
//! }
//!
//! // Declared before the host has built any chain.
//! let mut batch: EventDecoderBatch<GameEvent> = EventDecoderBatch::new();
//! batch.declare(|ctx| {
//!     ctx.register("login", |packet, conn| {
//!         if packet.name() != "login" {
//!             return Ok(None);
//!         }
//!         Ok(Some(GameEvent::Login { conn }))
//!     });
//! });
//!
//! // The host constructs the chain and triggers the one-time decoration.
//! let mut chain = HandlerChain::new();
//! EventChainDecorator::new(batch).decorate(&mut chain);
//!
//! let input = ParsedPacket::new(ConnectionId(7), Packet::empty("login"));
//! let event = chain.dispatch(&input).unwrap();
//! assert_eq!(event, Some(GameEvent::Login { conn: ConnectionId(7) }));
//! ```
//!
//! ## Concurrency
//! Setup is single-threaded and strictly sequential; decoration runs once
//! per chain. A populated chain is read-only, `Send + Sync`, and dispatches
//! concurrently from any number of connection-handling threads without
//! locks.

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod utils;

// Commonly used types, re-exported at the crate root
pub use crate::config::CodecConfig;
pub use crate::core::codec::{Decoder, Encoder};
pub use crate::core::message::{CatalogRegistry, Message, MessageCatalog, MessageDescriptor};
pub use crate::core::packet::{ConnectionId, Packet, PacketDescriptor, PacketSize, ParsedPacket};
pub use crate::error::{CodecError, Result};
pub use crate::protocol::chain::{HandlerChain, NamedHandler};
pub use crate::protocol::handler::MessageHandler;

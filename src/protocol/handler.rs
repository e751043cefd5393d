//! Keyed decode/encode tables for typed messages.
//!
//! Unlike the chains, message dispatch is a keyed lookup: incoming packets
//! find their decoder by packet name, outgoing messages find their encoder
//! by the catalog name of their type. Registration is plain insertion, so
//! the last handler registered under a key wins its slot.

use crate::core::codec::{Decoder, Encoder};
use crate::core::message::Message;
use crate::core::packet::Packet;
use crate::error::Result;
use crate::protocol::chain::{NamedDecoder, NamedEncoder, NamedHandler};
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Decoder and encoder tables for one message category.
///
/// Created empty by the host and populated by a single decoration pass.
/// Read-only afterward; safe to share across connection-handling threads.
pub struct MessageHandler<M: 'static> {
    decoders: HashMap<String, NamedDecoder<Packet, M>>,
    encoders: HashMap<String, NamedEncoder<M, Packet>>,
}

impl<M: Message> MessageHandler<M> {
    /// Create a handler with empty tables.
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
            encoders: HashMap::new(),
        }
    }

    /// Register a decoder under the handler's name, which must be the name
    /// of the packet type it decodes.
    pub fn register_decoder(&mut self, handler: NamedDecoder<Packet, M>) {
        self.decoders.insert(handler.name().to_string(), handler);
    }

    /// Register an encoder under the handler's name, which must be the
    /// catalog name of the message type it encodes.
    pub fn register_encoder(&mut self, handler: NamedEncoder<M, Packet>) {
        self.encoders.insert(handler.name().to_string(), handler);
    }

    /// Decode a message from a packet.
    ///
    /// `Ok(None)` when no decoder is registered for the packet type, or when
    /// the registered decoder declines the packet.
    pub fn decode(&self, packet: &Packet) -> Result<Option<M>> {
        match self.decoders.get(packet.name()) {
            Some(handler) => handler.transform().decode(packet),
            None => {
                trace!(packet = packet.name(), "no decoder registered");
                Ok(None)
            }
        }
    }

    /// Encode a message into a packet.
    ///
    /// `Ok(None)` when no encoder is registered for the message type. A
    /// registered encoder must produce a packet or error.
    pub fn encode(&self, message: &M) -> Result<Option<Packet>> {
        match self.encoders.get(message.type_name()) {
            Some(handler) => handler.transform().encode(message).map(Some),
            None => {
                trace!(message = message.type_name(), "no encoder registered");
                Ok(None)
            }
        }
    }

    /// Whether a decoder is registered for a packet type.
    pub fn has_decoder(&self, packet_name: &str) -> bool {
        self.decoders.contains_key(packet_name)
    }

    /// Whether an encoder is registered for a message type.
    pub fn has_encoder(&self, type_name: &str) -> bool {
        self.encoders.contains_key(type_name)
    }

    /// Packet names with registered decoders, in no particular order.
    pub fn decoder_names(&self) -> Vec<&str> {
        self.decoders.values().map(NamedHandler::name).collect()
    }

    /// Message type names with registered encoders, in no particular order.
    pub fn encoder_names(&self) -> Vec<&str> {
        self.encoders.values().map(NamedHandler::name).collect()
    }
}

impl<M: Message> Default for MessageHandler<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: 'static> fmt::Debug for MessageHandler<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageHandler")
            .field("decoders", &self.decoders.keys().collect::<Vec<_>>())
            .field("encoders", &self.encoders.keys().collect::<Vec<_>>())
            .finish()
    }
}

//! Registration contexts exposed to setup code during decoration.
//!
//! A context is a transient facade over one chain or handler table,
//! constructed fresh for each decoration call and not retained after the
//! setup closures that used it return. Each exposes a single capability:
//! `register(key, fn)` builds the matching function adapter, wraps it in a
//! named handler, and places it at the tail of the chain or in the keyed
//! table slot.
//!
//! The encoder context is the one fallible variant: its key is transformed
//! through the naming convention and resolved against the message catalog
//! eagerly, so a configuration mistake fails decoration at startup instead
//! of faulting on first use.

use crate::core::codec::{BoxedDecoder, BoxedEncoder};
use crate::core::message::{Message, MessageCatalog};
use crate::core::naming::message_type_name;
use crate::core::packet::{ConnectionId, Packet, ParsedPacket};
use crate::error::Result;
use crate::protocol::adapter::{
    FnEventDecoder, FnMessageDecoder, FnMessageEncoder, FnRedecoder,
};
use crate::protocol::chain::{HandlerChain, NamedHandler};
use crate::protocol::handler::MessageHandler;
use tracing::debug;

/// Registers packet-to-event decoders onto an event decode chain.
pub struct EventDecoderContext<'c, E: 'static> {
    chain: &'c mut HandlerChain<ParsedPacket, E>,
}

impl<'c, E: 'static> EventDecoderContext<'c, E> {
    pub(crate) fn new(chain: &'c mut HandlerChain<ParsedPacket, E>) -> Self {
        Self { chain }
    }

    /// Append a packet-to-event decoder to the tail of the chain.
    ///
    /// The name is a free-form label used for diagnostics; the decoder
    /// itself decides which packets it claims. The closure receives the
    /// originating connection alongside the packet.
    pub fn register<F>(&mut self, name: &str, decode: F)
    where
        F: Fn(&Packet, ConnectionId) -> Result<Option<E>> + Send + Sync + 'static,
    {
        debug!(name, "registering event decoder");
        let adapter: BoxedDecoder<ParsedPacket, E> = Box::new(FnEventDecoder::new(decode));
        self.chain.append(NamedHandler::new(name, adapter));
    }
}

/// Registers event refinement decoders onto a re-decode chain.
pub struct RedecodeContext<'c, E: 'static, R: 'static> {
    chain: &'c mut HandlerChain<E, R>,
}

impl<'c, E: 'static, R: 'static> RedecodeContext<'c, E, R> {
    pub(crate) fn new(chain: &'c mut HandlerChain<E, R>) -> Self {
        Self { chain }
    }

    /// Append an event-to-event decoder to the tail of the chain.
    pub fn register<F>(&mut self, name: &str, decode: F)
    where
        F: Fn(&E) -> Result<Option<R>> + Send + Sync + 'static,
    {
        debug!(name, "registering redecoder");
        let adapter: BoxedDecoder<E, R> = Box::new(FnRedecoder::new(decode));
        self.chain.append(NamedHandler::new(name, adapter));
    }
}

/// Registers packet-to-message decoders into a message handler's table.
pub struct MessageDecoderContext<'c, M: 'static> {
    handler: &'c mut MessageHandler<M>,
}

impl<'c, M: Message> MessageDecoderContext<'c, M> {
    pub(crate) fn new(handler: &'c mut MessageHandler<M>) -> Self {
        Self { handler }
    }

    /// Register a message decoder keyed by the packet name it decodes,
    /// verbatim.
    pub fn register<F>(&mut self, packet_name: &str, decode: F)
    where
        F: Fn(&Packet) -> Result<Option<M>> + Send + Sync + 'static,
    {
        debug!(packet = packet_name, "registering message decoder");
        let adapter: BoxedDecoder<Packet, M> = Box::new(FnMessageDecoder::new(decode));
        self.handler
            .register_decoder(NamedHandler::new(packet_name, adapter));
    }
}

/// Registers message-to-packet encoders into a message handler's table.
pub struct MessageEncoderContext<'c, M: 'static> {
    handler: &'c mut MessageHandler<M>,
    catalog: &'c dyn MessageCatalog,
}

impl<'c, M: Message> MessageEncoderContext<'c, M> {
    pub(crate) fn new(handler: &'c mut MessageHandler<M>, catalog: &'c dyn MessageCatalog) -> Self {
        Self { handler, catalog }
    }

    /// Register a message encoder under the type the key resolves to.
    ///
    /// The key is transformed through the naming convention
    /// (`"new_player"` resolves to `"NewPlayerMessage"`) and looked up in
    /// the catalog before anything is added; an unknown type fails here,
    /// at registration time, and the table is left untouched.
    pub fn register<F>(&mut self, key: &str, encode: F) -> Result<()>
    where
        F: Fn(&M) -> Result<Packet> + Send + Sync + 'static,
    {
        let type_name = message_type_name(key);
        self.catalog.resolve(&type_name)?;

        debug!(key, resolved = type_name.as_str(), "registering message encoder");
        let adapter: BoxedEncoder<M, Packet> = Box::new(FnMessageEncoder::new(encode));
        self.handler
            .register_encoder(NamedHandler::new(type_name, adapter));
        Ok(())
    }
}

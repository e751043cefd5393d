//! Function adapters bridging closures into the capability contracts.
//!
//! Each adapter wraps exactly one transformation closure captured at
//! registration time and forwards its input verbatim, so a short inline
//! closure satisfies the same contract as a fully-declared handler type.
//! The adapters themselves perform no validation, retry, or memoization and
//! hold no state beyond the captured closure.
//!
//! Four flavors, one per pipeline direction:
//! - [`FnEventDecoder`]: packet to event, invoked with the originating
//!   connection alongside the packet
//! - [`FnRedecoder`]: event to event refinement
//! - [`FnMessageDecoder`]: packet to message
//! - [`FnMessageEncoder`]: message to packet

use crate::core::codec::{Decoder, Encoder};
use crate::core::packet::{ConnectionId, Packet, ParsedPacket};
use crate::error::Result;

/// Adapts a `(packet, connection)` closure into a packet-to-event decoder.
pub struct FnEventDecoder<F> {
    decode: F,
}

impl<F> FnEventDecoder<F> {
    /// Wrap a packet-to-event transformation.
    pub fn new(decode: F) -> Self {
        Self { decode }
    }
}

impl<E, F> Decoder<ParsedPacket, E> for FnEventDecoder<F>
where
    F: Fn(&Packet, ConnectionId) -> Result<Option<E>>,
{
    fn decode(&self, input: &ParsedPacket) -> Result<Option<E>> {
        (self.decode)(&input.packet, input.conn)
    }
}

/// Adapts a closure re-decoding an already-parsed event into a refined one.
pub struct FnRedecoder<F> {
    decode: F,
}

impl<F> FnRedecoder<F> {
    /// Wrap an event refinement transformation.
    pub fn new(decode: F) -> Self {
        Self { decode }
    }
}

impl<E, R, F> Decoder<E, R> for FnRedecoder<F>
where
    F: Fn(&E) -> Result<Option<R>>,
{
    fn decode(&self, input: &E) -> Result<Option<R>> {
        (self.decode)(input)
    }
}

/// Adapts a closure into a packet-to-message decoder.
pub struct FnMessageDecoder<F> {
    decode: F,
}

impl<F> FnMessageDecoder<F> {
    /// Wrap a packet-to-message transformation.
    pub fn new(decode: F) -> Self {
        Self { decode }
    }
}

impl<M, F> Decoder<Packet, M> for FnMessageDecoder<F>
where
    F: Fn(&Packet) -> Result<Option<M>>,
{
    fn decode(&self, input: &Packet) -> Result<Option<M>> {
        (self.decode)(input)
    }
}

/// Adapts a closure into a message-to-packet encoder.
pub struct FnMessageEncoder<F> {
    encode: F,
}

impl<F> FnMessageEncoder<F> {
    /// Wrap a message-to-packet transformation.
    pub fn new(encode: F) -> Self {
        Self { encode }
    }
}

impl<M, F> Encoder<M, Packet> for FnMessageEncoder<F>
where
    F: Fn(&M) -> Result<Packet>,
{
    fn encode(&self, input: &M) -> Result<Packet> {
        (self.encode)(input)
    }
}

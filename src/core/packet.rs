//! Packets and their wire metadata.
//!
//! A [`Packet`] is a framed unit of wire data as handed over by the host's
//! framing layer: a name identifying the packet type and an opaque payload.
//! The byte layout of the payload belongs to the host; this core routes on
//! the name and carries the bytes untouched.

use crate::error::{CodecError, Result};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identity of the connection a packet arrived on.
///
/// Handed to packet-to-event decoders alongside the packet, since many
/// decoders need sender context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn/{}", self.0)
    }
}

/// A raw, framed unit of wire data delivered by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    name: String,
    payload: Bytes,
}

impl Packet {
    /// Create a packet from a name and a payload buffer.
    pub fn new(name: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }

    /// Create a packet with an empty payload.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Bytes::new())
    }

    /// Create a packet by serializing a typed value into the payload.
    pub fn from_value<T: Serialize>(name: impl Into<String>, value: &T) -> Result<Self> {
        let payload =
            bincode::serialize(value).map_err(|e| CodecError::SerializeError(e.to_string()))?;
        Ok(Self::new(name, payload))
    }

    /// The name of the packet type, used for routing.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw payload bytes.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Deserialize the payload into a typed value.
    pub fn value<T: DeserializeOwned>(&self) -> Result<T> {
        bincode::deserialize(&self.payload)
            .map_err(|e| CodecError::DeserializeError(e.to_string()))
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// A parsed packet paired with the connection it was parsed for.
///
/// This is the input to the packet-to-event decode chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPacket {
    /// The connection the packet came from.
    pub conn: ConnectionId,
    /// The packet that was parsed.
    pub packet: Packet,
}

impl ParsedPacket {
    /// Pair a parsed packet with its originating connection.
    pub fn new(conn: ConnectionId, packet: Packet) -> Self {
        Self { conn, packet }
    }
}

/// Wire metadata for a known packet type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketDescriptor {
    /// Packet type name, unique within the catalog.
    pub name: String,
    /// Wire opcode identifying the packet type.
    pub opcode: u8,
    /// Declared payload size.
    pub size: PacketSize,
}

/// Declared size of a packet's payload on the wire.
///
/// Variable-size packets carry their length in a one-byte or two-byte prefix
/// written by the framing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketSize {
    /// Payload is always exactly this many bytes.
    Fixed(usize),
    /// Payload length is carried in a single-byte prefix.
    VariableByte,
    /// Payload length is carried in a two-byte prefix.
    VariableShort,
}

// In TOML a size is either a non-negative integer or one of the two
// variable-size sentinels, "var_byte" and "var_short".
impl Serialize for PacketSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PacketSize::Fixed(n) => serializer.serialize_u64(*n as u64),
            PacketSize::VariableByte => serializer.serialize_str("var_byte"),
            PacketSize::VariableShort => serializer.serialize_str("var_short"),
        }
    }
}

impl<'de> Deserialize<'de> for PacketSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Fixed(u64),
            Tag(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Fixed(n) => Ok(PacketSize::Fixed(n as usize)),
            Raw::Tag(tag) => match tag.as_str() {
                "var_byte" => Ok(PacketSize::VariableByte),
                "var_short" => Ok(PacketSize::VariableShort),
                other => Err(serde::de::Error::custom(format!(
                    "unknown packet size `{other}`, expected an integer, \"var_byte\", or \"var_short\""
                ))),
            },
        }
    }
}

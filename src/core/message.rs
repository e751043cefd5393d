//! Messages and the catalog that describes them.
//!
//! A message is the typed, application-level unit higher layers work with.
//! The catalog is the explicit lookup interface encoder registration resolves
//! against: a registration key that names no cataloged type is a typed,
//! catchable error at decoration time rather than a fault on first use.

use crate::core::packet::PacketDescriptor;
use crate::error::{CodecError, Result};
use std::collections::HashMap;

/// An application-level, typed unit produced from a packet or destined to
/// become one.
///
/// Each message value reports the catalog name of its type; encoder lookup
/// routes on it.
pub trait Message: Send + Sync + 'static {
    /// The catalog name of this message's type, e.g. `"LoginMessage"`.
    fn type_name(&self) -> &'static str;
}

/// Catalog entry describing a known message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDescriptor {
    name: String,
}

impl MessageDescriptor {
    /// Describe a message type by its catalog name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The catalog name of the message type.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Lookup interface for resolving a message type name to its descriptor.
pub trait MessageCatalog {
    /// Resolve a type name, failing with
    /// [`CodecError::UnknownMessageType`] if the catalog does not know it.
    fn resolve(&self, name: &str) -> Result<&MessageDescriptor>;
}

/// Registry-backed message catalog.
///
/// Holds the message types the host knows about, plus the wire metadata for
/// its packet types. Populated directly or from configuration before any
/// decoration runs.
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    messages: HashMap<String, MessageDescriptor>,
    packets: HashMap<String, PacketDescriptor>,
}

impl CatalogRegistry {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a message type. Re-registering a name replaces the entry.
    pub fn register(&mut self, descriptor: MessageDescriptor) {
        self.messages.insert(descriptor.name().to_string(), descriptor);
    }

    /// Register a packet descriptor. Duplicate packet names are a
    /// configuration error.
    pub fn register_packet(&mut self, descriptor: PacketDescriptor) -> Result<()> {
        if self.packets.contains_key(&descriptor.name) {
            return Err(CodecError::ConfigError(format!(
                "duplicate packet descriptor: {}",
                descriptor.name
            )));
        }
        self.packets.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    /// Whether a message type is known to the catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.messages.contains_key(name)
    }

    /// Names of all cataloged message types, in no particular order.
    pub fn names(&self) -> Vec<&str> {
        self.messages.keys().map(String::as_str).collect()
    }

    /// Wire metadata for a packet type, if cataloged.
    pub fn packet(&self, name: &str) -> Option<&PacketDescriptor> {
        self.packets.get(name)
    }
}

impl MessageCatalog for CatalogRegistry {
    fn resolve(&self, name: &str) -> Result<&MessageDescriptor> {
        self.messages
            .get(name)
            .ok_or_else(|| CodecError::UnknownMessageType(name.to_string()))
    }
}

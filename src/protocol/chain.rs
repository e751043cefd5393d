//! Named handlers and the chain-of-responsibility they live in.
//!
//! A chain is an ordered, append-only sequence of named handlers. Insertion
//! order is dispatch order; nothing ever removes or reorders an entry.
//! Dispatch walks head-to-tail and stops at the first handler that claims
//! the input. Handler names are unique by convention only, so duplicates
//! coexist in the chain.

use crate::core::codec::{BoxedDecoder, BoxedEncoder, Decoder};
use crate::error::Result;
use std::fmt;
use tracing::trace;

/// A human-readable name paired with a wrapped transformation.
///
/// The unit actually stored in a chain or handler table. Immutable once
/// constructed; owned exclusively by the chain or table it was appended to.
pub struct NamedHandler<T> {
    name: String,
    transform: T,
}

impl<T> NamedHandler<T> {
    /// Pair a transformation with its diagnostic name.
    pub fn new(name: impl Into<String>, transform: T) -> Self {
        Self {
            name: name.into(),
            transform,
        }
    }

    /// The handler's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped transformation.
    pub fn transform(&self) -> &T {
        &self.transform
    }
}

impl<T> fmt::Debug for NamedHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedHandler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A named handler wrapping a boxed decoding transformation.
pub type NamedDecoder<I, O> = NamedHandler<BoxedDecoder<I, O>>;

/// A named handler wrapping a boxed encoding transformation.
pub type NamedEncoder<I, O> = NamedHandler<BoxedEncoder<I, O>>;

/// An ordered, append-only sequence of named decode handlers.
///
/// Created empty by the host, once per decoder category, and populated by a
/// single decoration pass at startup. After that the chain is read-only and
/// may be dispatched concurrently from any number of connection-handling
/// threads.
pub struct HandlerChain<I: 'static, O: 'static> {
    entries: Vec<NamedDecoder<I, O>>,
}

impl<I: 'static, O: 'static> HandlerChain<I, O> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a handler to the tail of the chain.
    ///
    /// Unconditional: no validation, no deduplication, no error path.
    pub fn append(&mut self, handler: NamedDecoder<I, O>) {
        self.entries.push(handler);
    }

    /// Dispatch an input through the chain.
    ///
    /// Handlers run in insertion order; the first to return `Ok(Some(_))`
    /// claims the input and iteration stops. A handler error propagates
    /// immediately, uncaught. If every handler declines, the outcome is
    /// `Ok(None)` -- unhandled input is a defined result, not an error.
    pub fn dispatch(&self, input: &I) -> Result<Option<O>> {
        for entry in &self.entries {
            if let Some(output) = entry.transform().decode(input)? {
                trace!(handler = entry.name(), "input claimed");
                return Ok(Some(output));
            }
        }
        trace!(handlers = self.entries.len(), "input unhandled");
        Ok(None)
    }

    /// Number of handlers in the chain.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the chain holds no handlers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handler names in dispatch order, for diagnostics.
    pub fn handler_names(&self) -> Vec<&str> {
        self.entries.iter().map(NamedHandler::name).collect()
    }
}

impl<I: 'static, O: 'static> Default for HandlerChain<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: 'static, O: 'static> fmt::Debug for HandlerChain<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("handlers", &self.handler_names())
            .finish()
    }
}

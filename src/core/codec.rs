//! Capability contracts satisfied by every registered transformation.
//!
//! A decoder may decline its input (`Ok(None)`), which is what lets a chain
//! try handlers in order until one claims the packet or event. An encoder is
//! total for the type it was registered under; failure to produce a packet is
//! an error, not a decline.

use crate::error::Result;

/// The capability contract for all decoding transformations.
pub trait Decoder<I, O> {
    /// Decode an input into an output.
    ///
    /// `Ok(Some(output))` claims the input and stops chain iteration,
    /// `Ok(None)` declines it, and `Err` aborts the dispatch entirely.
    fn decode(&self, input: &I) -> Result<Option<O>>;
}

/// The capability contract for all encoding transformations.
pub trait Encoder<I, O> {
    /// Encode an input into an output.
    fn encode(&self, input: &I) -> Result<O>;
}

/// A boxed decoder shareable across connection-handling threads.
pub type BoxedDecoder<I, O> = Box<dyn Decoder<I, O> + Send + Sync>;

/// A boxed encoder shareable across connection-handling threads.
pub type BoxedEncoder<I, O> = Box<dyn Encoder<I, O> + Send + Sync>;

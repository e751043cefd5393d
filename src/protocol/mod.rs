//! # Codec Pipeline
//!
//! The chain-of-responsibility core: named handlers, registration contexts,
//! and the decorators that install declared codecs at startup.
//!
//! ## Components
//! - **Chain**: ordered, append-only handler sequences with short-circuit dispatch
//! - **Adapter**: function adapters bridging closures into the codec contracts
//! - **Context**: registration facades exposed to setup code during decoration
//! - **Decorator**: batches of declared registrations and their one-shot installers
//! - **Handler**: keyed decoder/encoder tables for typed messages
//!
//! ## Flow
//! ```text
//! declare batches -> host builds empty chain -> decorator fires once
//!   -> contexts append named handlers -> host dispatches concurrently
//! ```

pub mod adapter;
pub mod chain;
pub mod context;
pub mod decorator;
pub mod handler;

//! # Utility Modules
//!
//! Supporting utilities for the codec pipeline.
//!
//! ## Components
//! - **Logging**: structured logging configuration via `tracing-subscriber`

pub mod logging;

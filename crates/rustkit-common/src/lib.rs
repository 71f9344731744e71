//! # RustKit Common
//!
//! Shared utilities for the RustKit crates. Currently this is the logging
//! setup: every crate emits `tracing` events and binaries or test suites
//! install a subscriber through [`init_logging`] or [`init_test_logging`].

pub mod logging;

pub use logging::{init_logging, init_test_logging, LogFormat, LoggingConfig, LoggingError};

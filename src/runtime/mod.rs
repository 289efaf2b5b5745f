//! Process-level setup: configuration and observability.
//!
//! # Main Components
//!
//! - [`HttpConfig`] - Transport settings, loadable from the environment
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod tracing;

pub use self::config::*;
pub use self::tracing::*;

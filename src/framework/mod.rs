//! Transport-agnostic plumbing shared by resources and collections.
//!
//! # Main Components
//!
//! - [`Transport`] - The HTTP collaborator contract
//! - [`Completion`] - Handle returned by every network operation
//! - [`ResourceError`] / [`TransportError`] - Error taxonomy
//!
//! # Testing
//!
//! See [`mock`] module for a scripted transport that needs no server.

pub mod completion;
pub mod error;
pub mod mock;
pub mod transport;

// Re-export core types for convenience
pub use completion::*;
pub use error::*;
pub use transport::*;

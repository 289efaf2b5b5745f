//! Concrete resource types.

pub mod contact;

pub use contact::*;

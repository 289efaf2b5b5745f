//! Single RESTful entities.
//!
//! - [`Resource`] - Trait carrying identity, URL derivation, (de)serialization and remote CRUD
//! - [`FieldCodecs`] - Per-field encode/decode strategy table
//! - [`ChangeSet`] - Fields written during one batch
//! - [`resource_fields!`](crate::resource_fields) - Generates field access for a struct

pub mod changes;
pub mod codec;
pub mod entity;
mod fields;

pub use changes::*;
pub use codec::*;
pub use entity::*;

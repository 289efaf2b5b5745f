//! # REST Resource
//!
//! > **Map in-memory models onto RESTful JSON endpoints.**
//!
//! This crate is a thin adapter between your structs and a REST API. A model
//! knows its endpoint, serializes itself into a request body, and absorbs the
//! server's JSON response. A collection mirrors a list endpoint.
//!
//! ## 🏗️ Design Philosophy
//!
//! - **Type-level configuration**: endpoint, wrapper key and field list are
//!   associated consts on [`Resource`](resource::Resource), readable before any
//!   instance exists.
//! - **Transport as a collaborator**: resources only see the
//!   [`Transport`](framework::Transport) trait. Production code plugs in
//!   [`HttpTransport`](http::HttpTransport); tests plug in
//!   [`MockTransport`](framework::mock::MockTransport).
//! - **Last response wins**: no caching, no retries, no request sequencing.
//!   Every failure reaches the caller unchanged.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Plumbing ([`framework`])
//! - **Key items**: [`Transport`](framework::Transport),
//!   [`Completion`](framework::Completion), [`ResourceError`](framework::ResourceError).
//!
//! ### 2. Single Entities ([`resource`])
//! - **Key items**: [`Resource`](resource::Resource), [`FieldCodecs`](resource::FieldCodecs),
//!   [`resource_fields!`].
//!
//! ### 3. Collections ([`collection`])
//! - **Key items**: [`ResourceCollection`](collection::ResourceCollection).
//!
//! ### 4. The Wire ([`http`]) and the Process ([`runtime`])
//! - **Key items**: [`HttpTransport`](http::HttpTransport),
//!   [`HttpConfig`](runtime::HttpConfig), [`setup_tracing`](runtime::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```rust,no_run
//! use rest_resource::collection::ResourceCollection;
//! use rest_resource::domain::Contact;
//! use rest_resource::http::HttpTransport;
//! use rest_resource::resource::Resource;
//! use rest_resource::runtime::HttpConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new(&HttpConfig::from_env())?;
//!
//! let mut contact = Contact::new("Joe", "Blow");
//! contact.save(&transport).await?; // POST /contacts, picks up the new id
//!
//! let mut contacts = ResourceCollection::<Contact>::new();
//! contacts.find_all(&transport).await?; // GET /contacts
//!
//! contact.destroy(&transport).await?; // DELETE /contacts/<id>
//! if let Some(id) = contact.identity() {
//!     contacts.evict(&id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod collection;
pub mod domain;
pub mod framework;
pub mod http;
pub mod resource;
pub mod runtime;

#[doc(hidden)]
pub mod __private {
    pub use serde_json::{from_value, to_value, Value};
}

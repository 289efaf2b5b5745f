//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Resource operations**: Save, Destroy, Fetch with `entity`, `method` and `url`
//! - **Collection fetches**: Find all, with the resulting `size`
//! - **Transport**: every request sent, non-success statuses, unparsable bodies
//! - **Errors**: validation failures and transport errors at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Completed operations only
//! RUST_LOG=info cargo run
//!
//! # Request bodies and URLs as they go out
//! RUST_LOG=debug cargo run
//!
//! # Only the transport layer
//! RUST_LOG=rest_resource::http=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a save looks like:
//!
//! ```text
//! DEBUG Save entity="contact" method=POST url=/contacts body={"contact":{...}}
//! DEBUG Sending request method=POST url=http://localhost:3000/contacts
//! INFO Saved entity="contact" method=POST url=/contacts
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // `entity` already says where a line comes from
        .compact()
        .init();
}

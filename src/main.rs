use anyhow::Context;
use rest_resource::collection::ResourceCollection;
use rest_resource::domain::Contact;
use rest_resource::http::HttpTransport;
use rest_resource::runtime::{setup_tracing, HttpConfig};
use std::future::IntoFuture;
use tracing::{info, info_span, warn, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = HttpConfig::from_env();
    info!(base_url = %config.base_url, "Starting contacts listing");
    let transport = HttpTransport::new(&config).context("building HTTP transport")?;

    let mut contacts = ResourceCollection::<Contact>::new();
    contacts
        .find_all(&transport)
        .fail(|e| warn!(error = %e, "Could not list contacts"))
        .into_future()
        .instrument(info_span!("list_contacts"))
        .await
        .context("listing contacts")?;

    for contact in &contacts {
        info!(
            id = ?contact.id,
            name = contact.full_name(),
            email = contact.email.as_deref().unwrap_or("-"),
            "Contact"
        );
    }
    info!(count = contacts.len(), "Done");
    Ok(())
}

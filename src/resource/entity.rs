//! # The Resource Trait
//!
//! A [`Resource`] is a single addressable entity: it knows its endpoint, how to
//! turn itself into a JSON request body, and how to absorb a JSON response.
//!
//! Implementors provide the type-level configuration (`BASE_URL`,
//! `ENTITY_NAME`, `FIELDS`) and raw field access (`read_field` /
//! `write_field`, usually generated with [`resource_fields!`](crate::resource_fields)).
//! Everything else is a provided method.
//!
//! ```rust
//! use rest_resource::resource::Resource;
//! use rest_resource::resource_fields;
//!
//! #[derive(Debug, Default)]
//! struct Note {
//!     id: Option<u64>,
//!     body: String,
//! }
//!
//! impl Resource for Note {
//!     const BASE_URL: &'static str = "/notes";
//!     const ENTITY_NAME: &'static str = "note";
//!     const FIELDS: &'static [&'static str] = &["body"];
//!
//!     resource_fields!(id, body);
//! }
//!
//! let note = Note { id: Some(4), body: "hi".into() };
//! assert_eq!(note.resource_url(), "/notes/4");
//! assert!(!note.is_new());
//! ```

use crate::framework::{Completion, Method, Request, ResourceError, Result, Transport};
use crate::resource::{ChangeSet, FieldCodecs};
use serde_json::{Map, Value};
use tracing::{debug, info, info_span, warn, Instrument};

/// A model mapped onto a RESTful endpoint.
pub trait Resource: Default + Send + Sync + 'static {
    /// Collection endpoint, e.g. `/contacts`.
    const BASE_URL: &'static str;

    /// Wrapper key for the serialized fields.
    const ENTITY_NAME: &'static str;

    /// Fields included in the request body, in order.
    const FIELDS: &'static [&'static str];

    /// Field holding the remote identity.
    const ID_FIELD: &'static str = "id";

    /// Current JSON value of `field`, or `None` if the type has no such field.
    fn read_field(&self, field: &str) -> Option<Value>;

    /// Stores `value` into `field`. Returns `Ok(false)` for unknown fields.
    fn write_field(&mut self, field: &str, value: Value) -> Result<bool>;

    /// Custom encode/decode per field. Identity for every field by default.
    fn field_codecs(&self) -> FieldCodecs {
        FieldCodecs::default()
    }

    /// Checked by [`save`](Resource::save) before any request is sent.
    /// `Some(non-empty message)` aborts the save.
    fn validate(&self) -> Option<String> {
        None
    }

    /// Called once after a batch of field writes has been applied.
    fn did_change(&mut self, _changes: &ChangeSet) {}

    // --- Identity ---

    /// The identity value; `null` counts as absent.
    fn identity(&self) -> Option<Value> {
        self.read_field(Self::ID_FIELD).filter(|id| !id.is_null())
    }

    fn is_new(&self) -> bool {
        self.identity().is_none()
    }

    /// `BASE_URL` for new records, `BASE_URL/identity` otherwise.
    fn resource_url(&self) -> String {
        match self.identity() {
            Some(id) => format!("{}/{}", Self::BASE_URL, url_segment(&id)),
            None => Self::BASE_URL.to_string(),
        }
    }

    // --- Serialization ---

    /// Wire value of one field. Override to customize a single field; the
    /// default applies [`field_codecs`](Resource::field_codecs).
    fn serialize_field(&self, field: &str) -> Result<Value> {
        let value = self.read_field(field).unwrap_or(Value::Null);
        self.field_codecs().encode(field, value)
    }

    /// `{ ENTITY_NAME: { field: serialize_field(field), ... } }` over `FIELDS`.
    fn serialize(&self) -> Result<Value> {
        let mut fields = Map::new();
        for &field in Self::FIELDS {
            fields.insert(field.to_string(), self.serialize_field(field)?);
        }

        let mut wrapped = Map::new();
        wrapped.insert(Self::ENTITY_NAME.to_string(), Value::Object(fields));
        Ok(Value::Object(wrapped))
    }

    /// Decodes and writes a single field. Returns `Ok(false)` for unknown fields.
    /// Override to customize a single field; `deserialize` routes every key here.
    fn deserialize_field(&mut self, field: &str, value: Value) -> Result<bool> {
        let decoded = self.field_codecs().decode(field, value)?;
        self.write_field(field, decoded)
    }

    /// Writes every key of `json` onto the matching field as one batch.
    /// Unknown keys are ignored.
    fn deserialize(&mut self, json: &Value) -> Result<&mut Self> {
        let object = json.as_object().ok_or_else(|| {
            ResourceError::InvalidPayload(format!(
                "expected a JSON object for `{}`, got {}",
                Self::ENTITY_NAME,
                json
            ))
        })?;

        let writes = object
            .iter()
            .map(|(field, value)| (field.as_str(), value.clone()));
        apply_batch(self, writes, |resource, field, value| {
            resource.deserialize_field(field, value)
        })?;
        Ok(self)
    }

    /// Builds a fresh instance from a flat JSON object.
    fn from_json(json: &Value) -> Result<Self> {
        let mut resource = Self::default();
        resource.deserialize(json)?;
        Ok(resource)
    }

    /// Copies every field in `FIELDS` from `source`.
    fn duplicate_properties(&mut self, source: &Self) -> Result<()> {
        self.duplicate_fields(source, Self::FIELDS)
    }

    /// Copies the named fields from `source`, raw (no codecs).
    fn duplicate_fields(&mut self, source: &Self, fields: &[&str]) -> Result<()> {
        let writes = fields
            .iter()
            .map(|&field| (field, source.read_field(field).unwrap_or(Value::Null)));
        apply_batch(self, writes, |resource, field, value| {
            resource.write_field(field, value)
        })
    }

    // --- Remote operations ---

    /// `POST` (new) or `PUT` (existing) the serialized record.
    ///
    /// A failing [`validate`](Resource::validate) settles the completion with
    /// [`ResourceError::Validation`] and never touches the transport. The
    /// request body is captured here, at call time. A JSON object in the
    /// response is deserialized into `self` (server-assigned id and fields).
    fn save<'a, T>(&'a mut self, transport: &'a T) -> Completion<'a, Value>
    where
        T: Transport + ?Sized,
    {
        let entity = Self::ENTITY_NAME;

        if let Some(error) = self.validate().filter(|e| !e.is_empty()) {
            warn!(entity, %error, "Validation failed");
            return Completion::failed(ResourceError::Validation(error));
        }

        let method = if self.is_new() { Method::Post } else { Method::Put };
        let url = self.resource_url();
        let body = match self.serialize() {
            Ok(body) => body,
            Err(e) => {
                warn!(entity, error = %e, "Serialize failed");
                return Completion::failed(e);
            }
        };
        debug!(entity, %method, %url, %body, "Save");
        let span = info_span!("save", entity, %method, %url);
        let request = Request::new(method, url).with_body(body);

        let save = async move {
            let url = request.url.clone();
            let response = transport.send(request).await.map_err(|e| {
                warn!(entity, %method, %url, error = %e, "Save failed");
                ResourceError::from(e)
            })?;

            if has_content(&response) {
                self.deserialize(&response)?;
            }
            info!(entity, %method, %url, "Saved");
            Ok(response)
        };
        Completion::new(save.instrument(span))
    }

    /// `DELETE` this record. Evicting it from collections is up to the caller.
    fn destroy<'a, T>(&'a self, transport: &'a T) -> Completion<'a, Value>
    where
        T: Transport + ?Sized,
    {
        let entity = Self::ENTITY_NAME;
        let url = self.resource_url();
        if self.is_new() {
            warn!(entity, %url, "Destroying a record without identity");
        }
        debug!(entity, %url, "Destroy");
        let span = info_span!("destroy", entity, %url);

        let destroy = async move {
            let response = transport
                .send(Request::new(Method::Delete, url.clone()))
                .await
                .map_err(|e| {
                    warn!(entity, %url, error = %e, "Destroy failed");
                    ResourceError::from(e)
                })?;
            info!(entity, %url, "Destroyed");
            Ok(response)
        };
        Completion::new(destroy.instrument(span))
    }

    /// `GET` this record and deserialize the response into `self`.
    fn fetch<'a, T>(&'a mut self, transport: &'a T) -> Completion<'a, Value>
    where
        T: Transport + ?Sized,
    {
        let entity = Self::ENTITY_NAME;
        let url = self.resource_url();
        debug!(entity, %url, "Fetch");
        let span = info_span!("fetch", entity, %url);

        let fetch = async move {
            let response = transport
                .send(Request::new(Method::Get, url.clone()))
                .await
                .map_err(|e| {
                    warn!(entity, %url, error = %e, "Fetch failed");
                    ResourceError::from(e)
                })?;

            if has_content(&response) {
                self.deserialize(&response)?;
            }
            info!(entity, %url, "Fetched");
            Ok(response)
        };
        Completion::new(fetch.instrument(span))
    }
}

/// Runs `write` for each entry in order and notifies `did_change` once with
/// the fields it reported as written. Fields written before a failing write
/// stay written and are still reported.
fn apply_batch<'f, R, I, W>(resource: &mut R, writes: I, mut write: W) -> Result<()>
where
    R: Resource,
    I: IntoIterator<Item = (&'f str, Value)>,
    W: FnMut(&mut R, &str, Value) -> Result<bool>,
{
    let mut changes = ChangeSet::new();
    let mut outcome = Ok(());

    for (field, value) in writes {
        match write(resource, field, value) {
            Ok(true) => changes.insert(field),
            Ok(false) => {}
            Err(e) => {
                outcome = Err(e);
                break;
            }
        }
    }

    if !changes.is_empty() {
        resource.did_change(&changes);
    }
    outcome
}

/// Strings are used verbatim, anything else as compact JSON (`1`, `true`).
fn url_segment(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Only JSON objects carry fields to absorb.
fn has_content(response: &Value) -> bool {
    response.as_object().is_some_and(|o| !o.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default)]
    struct Slug {
        slug: Option<String>,
        title: String,
    }

    impl Resource for Slug {
        const BASE_URL: &'static str = "/posts";
        const ENTITY_NAME: &'static str = "post";
        const FIELDS: &'static [&'static str] = &["title"];
        const ID_FIELD: &'static str = "slug";

        crate::resource_fields!(slug, title);
    }

    #[test]
    fn custom_identity_field() {
        let mut post = Slug::default();
        assert!(post.is_new());
        assert_eq!(post.resource_url(), "/posts");

        post.slug = Some("hello-world".into());
        assert!(!post.is_new());
        assert_eq!(post.resource_url(), "/posts/hello-world");
    }

    #[test]
    fn null_identity_counts_as_absent() {
        let mut post = Slug { slug: Some("x".into()), title: String::new() };
        post.deserialize(&json!({"slug": null})).unwrap();
        assert!(post.is_new());
    }

    #[test]
    fn url_segments() {
        assert_eq!(url_segment(&json!(1)), "1");
        assert_eq!(url_segment(&json!("abc")), "abc");
    }

    #[test]
    fn only_non_empty_objects_have_content() {
        assert!(has_content(&json!({"id": 1})));
        assert!(!has_content(&json!({})));
        assert!(!has_content(&Value::Null));
        assert!(!has_content(&json!("ok")));
    }

    #[test]
    fn deserialize_rejects_non_objects() {
        let mut post = Slug::default();
        let err = post.deserialize(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, ResourceError::InvalidPayload(_)));
    }

    #[test]
    fn type_mismatch_is_a_field_error() {
        let mut post = Slug::default();
        let err = post.deserialize(&json!({"title": 42})).unwrap_err();
        assert!(matches!(err, ResourceError::Field { ref field, .. } if field == "title"));
    }
}

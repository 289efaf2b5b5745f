//! # Resource Collections
//!
//! [`ResourceCollection<R>`] is an ordered, in-memory mirror of a remote list
//! endpoint. Items keep load order. [`find_all`](ResourceCollection::find_all)
//! replaces the whole content with whatever the server returned; nothing is
//! merged and no fetch is de-duplicated.

use crate::framework::{Completion, Method, Request, ResourceError, Result, Transport};
use crate::resource::Resource;
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, info_span, warn, Instrument};

/// Ordered container of `R`, backed by a list endpoint.
pub struct ResourceCollection<R: Resource> {
    items: Vec<R>,
    url: Option<String>,
}

impl<R: Resource> Default for ResourceCollection<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            url: None,
        }
    }
}

impl<R: Resource + fmt::Debug> fmt::Debug for ResourceCollection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceCollection")
            .field("url", &self.collection_url())
            .field("items", &self.items)
            .finish()
    }
}

impl<R: Resource> ResourceCollection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection listing from `url` instead of `R::BASE_URL`,
    /// e.g. `/contacts/active`.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            url: Some(url.into()),
        }
    }

    /// The override if one was given, otherwise `R::BASE_URL`.
    pub fn collection_url(&self) -> &str {
        self.url.as_deref().unwrap_or(R::BASE_URL)
    }

    // --- Local operations ---

    /// Builds one `R` from `json` and appends it.
    pub fn load(&mut self, json: &Value) -> Result<&mut R> {
        let resource = R::from_json(json)?;
        self.items.push(resource);
        let last = self.items.len() - 1;
        Ok(&mut self.items[last])
    }

    /// Loads every element of a JSON array, in order. Stops at the first
    /// element that fails; the ones before it stay loaded.
    pub fn load_all(&mut self, json: &Value) -> Result<()> {
        let elements = json.as_array().ok_or_else(|| {
            ResourceError::InvalidPayload(format!(
                "expected a JSON array for `{}`, got {}",
                R::ENTITY_NAME,
                json
            ))
        })?;

        self.items.reserve(elements.len());
        for element in elements {
            self.load(element)?;
        }
        Ok(())
    }

    /// Clears, then loads `json`.
    pub fn replace_all(&mut self, json: &Value) -> Result<()> {
        self.clear_all();
        self.load_all(json)
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, resource: R) {
        self.items.push(resource);
    }

    /// Removes and returns the item with the given identity, if present.
    pub fn evict(&mut self, identity: &Value) -> Option<R> {
        let index = self
            .items
            .iter()
            .position(|item| item.identity().as_ref() == Some(identity))?;
        Some(self.items.remove(index))
    }

    // --- Accessors ---

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut R> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // --- Remote operations ---

    /// `GET` the collection URL and replace all items with the response.
    /// On failure the items are left untouched.
    pub fn find_all<'a, T>(&'a mut self, transport: &'a T) -> Completion<'a, Value>
    where
        T: Transport + ?Sized,
    {
        let entity = R::ENTITY_NAME;
        let url = self.collection_url().to_string();
        debug!(entity, %url, previous = self.items.len(), "Find all");
        let span = info_span!("find_all", entity, %url);

        let find_all = async move {
            let response = transport
                .send(Request::new(Method::Get, url.clone()))
                .await
                .map_err(|e| {
                    warn!(entity, %url, error = %e, "Find all failed");
                    ResourceError::from(e)
                })?;

            self.replace_all(&response).inspect_err(|e| {
                warn!(entity, %url, error = %e, "Find all returned an unusable payload");
            })?;
            info!(entity, %url, size = self.items.len(), "Found all");
            Ok(response)
        };
        Completion::new(find_all.instrument(span))
    }
}

impl<R: Resource> IntoIterator for ResourceCollection<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'c, R: Resource> IntoIterator for &'c ResourceCollection<R> {
    type Item = &'c R;
    type IntoIter = std::slice::Iter<'c, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

//! Batched change notification.
//!
//! Writes made by `deserialize` / `duplicate_properties` are collected into a
//! [`ChangeSet`]; observers get a single
//! [`Resource::did_change`](crate::resource::Resource::did_change) call once
//! the whole batch has been applied.

/// Names of the fields written during one batch, in first-write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    fields: Vec<String>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a write; repeated writes to a field are kept once.
    pub fn insert(&mut self, field: impl Into<String>) {
        let field = field.into();
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

use crate::resource::{ChangeSet, FieldCodec, FieldCodecs, Resource};
use chrono::NaiveDate;

/// Wire format of [`Contact::birthday`].
pub const BIRTHDAY_FORMAT: &str = "%m/%d/%Y";

/// An address-book entry served from `/contacts`.
///
/// `full_name` is derived: it is recomputed once per batch of writes
/// (see [`Resource::did_change`]) and never sent to the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub id: Option<u64>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub birthday: Option<NaiveDate>,
    full_name: String,
}

impl Contact {
    /// Creates a new, unsaved contact.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let mut contact = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        };
        contact.refresh_full_name();
        contact
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    fn refresh_full_name(&mut self) {
        self.full_name = format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string();
    }
}

impl Resource for Contact {
    const BASE_URL: &'static str = "/contacts";
    const ENTITY_NAME: &'static str = "contact";
    const FIELDS: &'static [&'static str] = &["first_name", "last_name", "email", "birthday"];

    crate::resource_fields!(id, first_name, last_name, email, birthday);

    fn field_codecs(&self) -> FieldCodecs {
        FieldCodecs::new().with("birthday", FieldCodec::date(BIRTHDAY_FORMAT))
    }

    fn validate(&self) -> Option<String> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Some("Contacts require a first and a last name.".to_string());
        }
        None
    }

    fn did_change(&mut self, changes: &ChangeSet) {
        if changes.contains("first_name") || changes.contains("last_name") {
            self.refresh_full_name();
        }
    }
}

use crate::domain::email::valid_email;
use crate::domain::lenient::{optional_string, string_or_empty};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub role: String,
    #[serde(
        default,
        deserialize_with = "optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

/// Identity of a contact for deduplication. A missing LinkedIn URL keys as
/// the empty string; email does not take part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactKey<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub linkedin_url: &'a str,
}

impl Contact {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            linkedin_url: None,
            email: None,
        }
    }

    pub fn with_linkedin(mut self, url: impl Into<String>) -> Self {
        self.linkedin_url = Some(url.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn key(&self) -> ContactKey<'_> {
        ContactKey {
            name: &self.name,
            role: &self.role,
            linkedin_url: self.linkedin_url.as_deref().unwrap_or(""),
        }
    }

    pub fn valid_email(&self) -> Option<&str> {
        valid_email(self.email.as_deref())
    }
}

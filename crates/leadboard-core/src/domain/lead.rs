use crate::domain::contact::Contact;
use crate::domain::lenient::{optional_string, vec_or_empty};
use crate::error::CoreError;
use crate::rules::normalize::normalize_contacts;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub company: String,
    #[serde(
        default,
        deserialize_with = "optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub decision_makers: Vec<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_of_data: Option<Contact>,
}

impl Lead {
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            url: None,
            decision_makers: Vec::new(),
            head_of_data: None,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.company.trim().is_empty() {
            return Err(CoreError::EmptyCompany);
        }
        Ok(())
    }

    /// Raw count of the source list, before merging in the head of data.
    pub fn decision_maker_count(&self) -> usize {
        self.decision_makers.len()
    }

    pub fn has_head_of_data(&self) -> bool {
        self.head_of_data.is_some()
    }

    pub fn normalized_contacts(&self) -> Vec<&Contact> {
        normalize_contacts(self)
    }
}

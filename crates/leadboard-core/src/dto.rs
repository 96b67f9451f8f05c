use crate::domain::Lead;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDto {
    pub name: String,
    pub role: String,
    pub linkedin_url: Option<String>,
    pub email: Option<String>,
    pub is_head_of_data: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCardDto {
    pub company: String,
    pub url: Option<String>,
    pub decision_maker_count: usize,
    pub has_head_of_data: bool,
    pub contacts: Vec<ContactDto>,
}

impl From<&Lead> for LeadCardDto {
    fn from(lead: &Lead) -> Self {
        let head_key = lead.head_of_data.as_ref().map(|contact| contact.key());
        let contacts = lead
            .normalized_contacts()
            .into_iter()
            .map(|contact| ContactDto {
                name: contact.name.clone(),
                role: contact.role.clone(),
                linkedin_url: contact.linkedin_url.clone(),
                email: contact.valid_email().map(str::to_string),
                is_head_of_data: head_key == Some(contact.key()),
            })
            .collect();

        Self {
            company: lead.company.clone(),
            url: lead.url.clone(),
            decision_maker_count: lead.decision_maker_count(),
            has_head_of_data: lead.has_head_of_data(),
            contacts,
        }
    }
}

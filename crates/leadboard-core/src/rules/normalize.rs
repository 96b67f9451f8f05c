use crate::domain::{Contact, Lead};
use std::collections::HashSet;

/// Decision makers followed by the head of data, keeping the first contact
/// seen for each [`ContactKey`](crate::domain::ContactKey). A later duplicate
/// is dropped even when its email differs.
pub fn normalize_contacts(lead: &Lead) -> Vec<&Contact> {
    let mut seen = HashSet::new();
    lead.decision_makers
        .iter()
        .chain(lead.head_of_data.iter())
        .filter(|contact| seen.insert(contact.key()))
        .collect()
}

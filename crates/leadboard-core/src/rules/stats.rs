use crate::domain::Lead;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadStats {
    pub leads: usize,
    pub decision_makers: usize,
    pub with_head_of_data: usize,
    pub contacts: usize,
    pub contacts_with_email: usize,
}

impl LeadStats {
    pub fn collect<'a, I>(leads: I) -> Self
    where
        I: IntoIterator<Item = &'a Lead>,
    {
        let mut stats = LeadStats::default();
        for lead in leads {
            stats.leads += 1;
            stats.decision_makers += lead.decision_maker_count();
            if lead.has_head_of_data() {
                stats.with_head_of_data += 1;
            }
            for contact in lead.normalized_contacts() {
                stats.contacts += 1;
                if contact.valid_email().is_some() {
                    stats.contacts_with_email += 1;
                }
            }
        }
        stats
    }
}

mod sort;

use crate::domain::Lead;
use crate::index::build_haystack;
use serde::{Deserialize, Serialize};

pub use sort::{compare_company, sort_leads, SortKey};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadQuery {
    pub search_text: String,
    pub min_contacts: usize,
    pub require_head_of_data: bool,
    pub sort_by: Option<SortKey>,
}

impl LeadQuery {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..Self::default()
        }
    }

    fn needle(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.to_lowercase())
    }

    /// All predicates AND-combined; `needle` is the prepared search text.
    fn accepts(&self, lead: &Lead, needle: Option<&str>) -> bool {
        if lead.decision_maker_count() < self.min_contacts {
            return false;
        }
        if self.require_head_of_data && !lead.has_head_of_data() {
            return false;
        }
        match needle {
            Some(needle) => build_haystack(lead).contains(needle),
            None => true,
        }
    }
}

/// Filters `leads` and, when a sort key is set, orders the survivors.
/// Without a key the dataset order is kept.
pub fn query<'a>(leads: &'a [Lead], options: &LeadQuery) -> Vec<&'a Lead> {
    let needle = options.needle();
    let mut matched: Vec<&Lead> = leads
        .iter()
        .filter(|lead| options.accepts(lead, needle.as_deref()))
        .collect();

    if let Some(key) = options.sort_by {
        sort_leads(&mut matched, key);
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::{query, LeadQuery, SortKey};
    use crate::domain::{Contact, Lead};
    use crate::index::build_haystack;

    fn scenario() -> Vec<Lead> {
        let zeta = Lead::new("Zeta");
        let mut alpha = Lead::new("Alpha");
        alpha.decision_makers = vec![Contact::new("Jo", "VP")];
        vec![zeta, alpha]
    }

    fn companies(leads: &[&Lead]) -> Vec<String> {
        leads.iter().map(|lead| lead.company.clone()).collect()
    }

    #[test]
    fn sort_by_company_orders_alphabetically() {
        let leads = scenario();
        let options = LeadQuery {
            sort_by: Some(SortKey::Company),
            ..LeadQuery::default()
        };
        assert_eq!(companies(&query(&leads, &options)), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn min_contacts_filters_on_raw_count() {
        let leads = scenario();
        let options = LeadQuery {
            min_contacts: 1,
            ..LeadQuery::default()
        };
        assert_eq!(companies(&query(&leads, &options)), vec!["Alpha"]);
    }

    #[test]
    fn min_contacts_ignores_head_of_data() {
        let mut lead = Lead::new("Solo");
        lead.head_of_data = Some(Contact::new("Kim", "Head of Data"));
        let leads = vec![lead];
        let options = LeadQuery {
            min_contacts: 1,
            ..LeadQuery::default()
        };
        assert!(query(&leads, &options).is_empty());
    }

    #[test]
    fn no_sort_keeps_dataset_order() {
        let leads = scenario();
        assert_eq!(
            companies(&query(&leads, &LeadQuery::default())),
            vec!["Zeta", "Alpha"]
        );
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() {
        let leads = scenario();
        let options = LeadQuery::search("  JO ");
        assert_eq!(companies(&query(&leads, &options)), vec!["Alpha"]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let leads = scenario();
        assert_eq!(query(&leads, &LeadQuery::search("   ")).len(), 2);
    }

    #[test]
    fn require_head_of_data_filters() {
        let mut leads = scenario();
        leads[0].head_of_data = Some(Contact::new("Kim", "Head of Data"));
        let options = LeadQuery {
            require_head_of_data: true,
            ..LeadQuery::default()
        };
        assert_eq!(companies(&query(&leads, &options)), vec!["Zeta"]);
    }

    #[test]
    fn predicates_are_combined() {
        let mut leads = scenario();
        leads[0].head_of_data = Some(Contact::new("Kim", "Head of Data"));
        let options = LeadQuery {
            search_text: "zeta".to_string(),
            min_contacts: 1,
            require_head_of_data: true,
            sort_by: None,
        };
        assert!(query(&leads, &options).is_empty());
    }

    #[test]
    fn every_haystack_substring_matches_its_lead() {
        let mut lead = Lead::new("Acme");
        lead.url = Some("https://acme.test".to_string());
        lead.decision_makers = vec![Contact::new("Jo", "VP").with_email("jo@acme.test")];
        let haystack = build_haystack(&lead);
        let leads = vec![lead];
        let chars: Vec<char> = haystack.chars().collect();
        for start in 0..chars.len() {
            for end in (start + 1)..=chars.len() {
                let needle: String = chars[start..end].iter().collect();
                assert_eq!(query(&leads, &LeadQuery::search(needle.clone())).len(), 1, "{needle:?}");
            }
        }
    }
}

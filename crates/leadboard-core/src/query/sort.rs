use crate::domain::Lead;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Company,
    #[serde(rename = "contacts")]
    ContactCount,
    HeadOfData,
}

impl SortKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Company => "company",
            SortKey::ContactCount => "contacts",
            SortKey::HeadOfData => "head-of-data",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "company" => Some(SortKey::Company),
            "contacts" => Some(SortKey::ContactCount),
            "head-of-data" => Some(SortKey::HeadOfData),
            _ => None,
        }
    }

    pub const fn all() -> &'static [SortKey] {
        &[SortKey::Company, SortKey::ContactCount, SortKey::HeadOfData]
    }

    pub fn compare(self, a: &Lead, b: &Lead) -> Ordering {
        match self {
            SortKey::Company => compare_company(&a.company, &b.company),
            SortKey::ContactCount => b
                .decision_maker_count()
                .cmp(&a.decision_maker_count()),
            SortKey::HeadOfData => b.has_head_of_data().cmp(&a.has_head_of_data()),
        }
    }
}

/// Collation-style ordering: base letters first (accents and case ignored),
/// then accents, then lowercase before uppercase. Raw text settles the rest
/// so the result stays total.
pub fn compare_company(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(value: &str) -> impl Iterator<Item = char> + '_ {
    value
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
}

fn accented_letters(value: &str) -> impl Iterator<Item = char> + '_ {
    value.nfd().flat_map(char::to_lowercase)
}

fn case_pattern(value: &str) -> impl Iterator<Item = bool> + '_ {
    value.nfd().map(char::is_uppercase)
}

/// Stable: leads that compare equal keep their incoming order.
pub fn sort_leads(leads: &mut [&Lead], key: SortKey) {
    leads.sort_by(|a, b| key.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::{compare_company, sort_leads, SortKey};
    use crate::domain::{Contact, Lead};
    use std::cmp::Ordering;

    #[test]
    fn parse_round_trip() {
        for key in SortKey::all() {
            let parsed = SortKey::parse(key.as_str()).expect("parse sort key");
            assert_eq!(*key, parsed);
        }
    }

    #[test]
    fn parse_unknown_returns_none() {
        assert!(SortKey::parse("revenue").is_none());
    }

    #[test]
    fn compare_company_ignores_case() {
        assert_eq!(compare_company("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_company("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(compare_company("Acme", "Acme"), Ordering::Equal);
        assert_eq!(compare_company("acme", "Acme"), Ordering::Less);
    }

    #[test]
    fn company_sort_folds_accents_and_puts_lowercase_first() {
        let leads: Vec<Lead> = ["Zeta", "Émile Analytics", "acme", "Acme"]
            .into_iter()
            .map(Lead::new)
            .collect();
        let mut refs: Vec<&Lead> = leads.iter().collect();
        sort_leads(&mut refs, SortKey::Company);
        let names: Vec<&str> = refs.iter().map(|lead| lead.company.as_str()).collect();
        assert_eq!(names, vec!["acme", "Acme", "Émile Analytics", "Zeta"]);
    }

    #[test]
    fn accented_company_follows_its_plain_spelling() {
        assert_eq!(compare_company("Emile", "Émile"), Ordering::Less);
        assert_eq!(compare_company("Émile", "Emilia"), Ordering::Less);
        assert_eq!(compare_company("Ölfabrik", "Zeta"), Ordering::Less);
    }

    #[test]
    fn contact_count_sorts_descending_and_stable() {
        let mut one = Lead::new("One");
        one.decision_makers = vec![Contact::new("A", "CEO")];
        let mut two = Lead::new("Two");
        two.decision_makers = vec![Contact::new("A", "CEO"), Contact::new("B", "CTO")];
        let also_one = {
            let mut lead = Lead::new("AlsoOne");
            lead.decision_makers = vec![Contact::new("C", "VP")];
            lead
        };

        let mut leads = vec![&one, &two, &also_one];
        sort_leads(&mut leads, SortKey::ContactCount);
        let names: Vec<&str> = leads.iter().map(|lead| lead.company.as_str()).collect();
        assert_eq!(names, vec!["Two", "One", "AlsoOne"]);
    }

    #[test]
    fn head_of_data_sorts_first() {
        let without = Lead::new("Without");
        let mut with = Lead::new("With");
        with.head_of_data = Some(Contact::new("D", "Head of Data"));
        let other_without = Lead::new("OtherWithout");

        let mut leads = vec![&without, &with, &other_without];
        sort_leads(&mut leads, SortKey::HeadOfData);
        let names: Vec<&str> = leads.iter().map(|lead| lead.company.as_str()).collect();
        assert_eq!(names, vec!["With", "Without", "OtherWithout"]);
    }
}

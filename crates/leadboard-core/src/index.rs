use crate::domain::{Contact, Lead};

/// Lowercased text that search terms are matched against as plain substrings.
pub fn build_haystack(lead: &Lead) -> String {
    let contacts = lead.normalized_contacts();
    let names = join_with(&contacts, |contact| contact.name.as_str());
    let roles = join_with(&contacts, |contact| contact.role.as_str());
    let emails = join_with(&contacts, |contact| contact.valid_email().unwrap_or(""));

    let head = lead.head_of_data.as_ref();
    let parts = [
        lead.company.as_str(),
        lead.url.as_deref().unwrap_or(""),
        names.as_str(),
        roles.as_str(),
        emails.as_str(),
        head.map(|contact| contact.name.as_str()).unwrap_or(""),
        head.map(|contact| contact.role.as_str()).unwrap_or(""),
        head.and_then(Contact::valid_email).unwrap_or(""),
    ];
    parts.join(" ").to_lowercase()
}

fn join_with<'a, F>(contacts: &[&'a Contact], field: F) -> String
where
    F: Fn(&'a Contact) -> &'a str,
{
    contacts
        .iter()
        .map(|contact| field(*contact))
        .collect::<Vec<_>>()
        .join(" ")
}

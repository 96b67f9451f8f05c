use crate::domain::{Contact, Lead};
use std::borrow::Cow;

pub const CSV_HEADER: [&str; 10] = [
    "company",
    "url",
    "decision_makers",
    "decision_maker_roles",
    "decision_maker_linkedins",
    "decision_maker_emails",
    "head_of_data_name",
    "head_of_data_role",
    "head_of_data_linkedin",
    "head_of_data_email",
];

const LIST_SEPARATOR: &str = " | ";

/// Header line followed by one line per lead, joined by `\n` with no
/// trailing newline.
pub fn to_csv<'a, I>(leads: I) -> String
where
    I: IntoIterator<Item = &'a Lead>,
{
    let mut lines = vec![CSV_HEADER.join(",")];
    for lead in leads {
        lines.push(
            lead_row(lead)
                .iter()
                .map(|field| escape_csv_field(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

fn lead_row(lead: &Lead) -> [String; 10] {
    let contacts = lead.normalized_contacts();
    let head = lead.head_of_data.as_ref();
    [
        lead.company.clone(),
        lead.url.clone().unwrap_or_default(),
        join_contacts(&contacts, |contact| Some(contact.name.as_str())),
        join_contacts(&contacts, |contact| Some(contact.role.as_str())),
        join_contacts(&contacts, |contact| {
            Some(contact.linkedin_url.as_deref().unwrap_or(""))
        }),
        join_contacts(&contacts, Contact::valid_email),
        head.map(|contact| contact.name.clone()).unwrap_or_default(),
        head.map(|contact| contact.role.clone()).unwrap_or_default(),
        head.and_then(|contact| contact.linkedin_url.clone())
            .unwrap_or_default(),
        head.and_then(Contact::valid_email)
            .map(str::to_string)
            .unwrap_or_default(),
    ]
}

/// `None` drops the contact from the column instead of leaving an empty slot.
fn join_contacts<'a, F>(contacts: &[&'a Contact], field: F) -> String
where
    F: Fn(&'a Contact) -> Option<&'a str>,
{
    contacts
        .iter()
        .filter_map(|contact| field(*contact))
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Quotes a field only when it contains a comma, double quote or newline.
pub fn escape_csv_field(value: &str) -> Cow<'_, str> {
    if !value.contains([',', '"', '\n']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
    Cow::Owned(out)
}

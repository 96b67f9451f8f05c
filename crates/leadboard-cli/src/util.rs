use chrono::{Local, NaiveDate};
use leadboard_core::dto::{ContactDto, LeadCardDto};

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn decision_maker_badge(count: usize) -> String {
    match count {
        1 => "1 decision maker".to_string(),
        n => format!("{n} decision makers"),
    }
}

pub fn format_card_header(card: &LeadCardDto) -> String {
    let mut header = format!(
        "{} [{}]",
        card.company,
        decision_maker_badge(card.decision_maker_count)
    );
    if card.has_head_of_data {
        header.push_str(" [head of data]");
    }
    header
}

pub fn format_contact_line(contact: &ContactDto) -> String {
    let mut parts = vec![contact.name.as_str()];
    if !contact.role.trim().is_empty() {
        parts.push(&contact.role);
    }
    if let Some(email) = contact.email.as_deref() {
        parts.push(email);
    }
    if let Some(linkedin) = contact.linkedin_url.as_deref().filter(|url| !url.is_empty()) {
        parts.push(linkedin);
    }
    let mut line = parts.join(" | ");
    if contact.is_head_of_data {
        line.push_str(" (head of data)");
    }
    line
}

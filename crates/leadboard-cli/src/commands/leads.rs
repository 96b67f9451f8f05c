use crate::commands::{print_json, select_leads, Context, QueryArgs};
use crate::error::not_found;
use crate::util::{format_card_header, format_contact_line};
use anyhow::Result;
use clap::Args;
use leadboard_core::dto::LeadCardDto;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub company: String,
}

pub fn list_leads(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let view = select_leads(ctx, &args.query)?;
    let cards: Vec<LeadCardDto> = view.into_iter().map(LeadCardDto::from).collect();

    if ctx.json {
        return print_json(&cards);
    }

    if cards.is_empty() {
        println!("no leads match");
        return Ok(());
    }

    for card in &cards {
        print_card(card);
    }
    println!("{} of {} leads", cards.len(), ctx.dataset.len());
    Ok(())
}

pub fn show_lead(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let lead = ctx
        .dataset
        .find_company(&args.company)
        .ok_or_else(|| not_found(format!("lead not found: {}", args.company.trim())))?;
    let card = LeadCardDto::from(lead);

    if ctx.json {
        return print_json(&card);
    }
    print_card(&card);
    Ok(())
}

fn print_card(card: &LeadCardDto) {
    println!("{}", format_card_header(card));
    if let Some(url) = card.url.as_deref().filter(|url| !url.is_empty()) {
        println!("  {}", url);
    }
    if card.contacts.is_empty() {
        println!("  contacts: none");
        return;
    }
    for contact in &card.contacts {
        println!("  - {}", format_contact_line(contact));
    }
}

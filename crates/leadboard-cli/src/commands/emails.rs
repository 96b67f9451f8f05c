use crate::commands::{print_json, select_leads, Context, QueryArgs};
use anyhow::Result;
use clap::Args;
use leadboard_core::Lead;
use std::collections::HashSet;

#[derive(Debug, Args)]
pub struct EmailsArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

pub fn list_emails(ctx: &Context<'_>, args: EmailsArgs) -> Result<()> {
    let view = select_leads(ctx, &args.query)?;
    let emails = collect_emails(&view);

    if ctx.json {
        return print_json(&emails);
    }
    for email in emails {
        println!("{}", email);
    }
    Ok(())
}

/// Valid addresses of the normalized contacts, first occurrence order.
fn collect_emails<'a>(leads: &[&'a Lead]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    leads
        .iter()
        .flat_map(|&lead| lead.normalized_contacts())
        .filter_map(|contact| contact.valid_email())
        .filter(|email| seen.insert(*email))
        .collect()
}

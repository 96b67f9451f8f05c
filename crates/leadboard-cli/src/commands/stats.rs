use crate::commands::{print_json, select_leads, Context, QueryArgs};
use anyhow::Result;
use clap::Args;
use leadboard_core::LeadStats;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

pub fn show_stats(ctx: &Context<'_>, args: StatsArgs) -> Result<()> {
    let view = select_leads(ctx, &args.query)?;
    let stats = LeadStats::collect(view);

    if ctx.json {
        return print_json(&stats);
    }

    println!("leads: {}", stats.leads);
    println!("decision makers: {}", stats.decision_makers);
    println!("with head of data: {}", stats.with_head_of_data);
    println!("unique contacts: {}", stats.contacts);
    println!("contacts with email: {}", stats.contacts_with_email);
    Ok(())
}

use anyhow::Result;
use clap::{ArgAction, Args};
use leadboard_config::AppConfig;
use leadboard_core::{query, Lead, LeadQuery, SortKey};
use leadboard_dataset::Dataset;
use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

use crate::error::invalid_input;

pub mod completions;
pub mod emails;
pub mod export;
pub mod leads;
pub mod stats;

pub struct Context<'a> {
    pub dataset: &'a Dataset,
    pub json: bool,
    pub config: &'a AppConfig,
}

/// Filter flags shared by every command that works on a view of the dataset.
/// Unset flags fall back to the `[query]` config section.
#[derive(Debug, Default, Args)]
pub struct QueryArgs {
    #[arg(long, short)]
    pub search: Option<String>,
    #[arg(long, value_name = "N")]
    pub min_contacts: Option<usize>,
    #[arg(long, action = ArgAction::SetTrue)]
    pub require_head_of_data: bool,
    /// Drop a configured head-of-data requirement
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "require_head_of_data")]
    pub any_head_of_data: bool,
    /// company | contacts | head-of-data
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "sort")]
    pub no_sort: bool,
}

impl QueryArgs {
    pub fn to_query(&self, config: &AppConfig) -> Result<LeadQuery> {
        let mut query = config.query.to_query();
        if let Some(search) = &self.search {
            query.search_text = search.clone();
        }
        if let Some(min_contacts) = self.min_contacts {
            query.min_contacts = min_contacts;
        }
        if self.require_head_of_data {
            query.require_head_of_data = true;
        }
        if self.any_head_of_data {
            query.require_head_of_data = false;
        }
        if let Some(raw) = &self.sort {
            query.sort_by = Some(parse_sort_key(raw)?);
        }
        if self.no_sort {
            query.sort_by = None;
        }
        Ok(query)
    }
}

pub fn parse_sort_key(raw: &str) -> Result<SortKey> {
    SortKey::parse(raw.trim()).ok_or_else(|| {
        invalid_input(format!(
            "invalid sort key {raw:?}: expected company|contacts|head-of-data"
        ))
    })
}

pub fn select_leads<'a>(ctx: &Context<'a>, args: &QueryArgs) -> Result<Vec<&'a Lead>> {
    let options = args.to_query(ctx.config)?;
    let view = query(ctx.dataset.leads(), &options);
    debug!(
        matched = view.len(),
        total = ctx.dataset.len(),
        sort = options.sort_by.map(SortKey::as_str).unwrap_or("none"),
        "query evaluated"
    );
    Ok(view)
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

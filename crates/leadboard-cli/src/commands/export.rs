use crate::commands::{print_json, select_leads, Context, QueryArgs};
use crate::error::invalid_input;
use crate::util::{format_date, today_local};
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Args};
use leadboard_core::{to_csv, Lead};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub query: QueryArgs,
    /// Export every lead in dataset order, ignoring filters
    #[arg(long, action = ArgAction::SetTrue)]
    pub all: bool,
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Directory for a date-stamped file name
    #[arg(long, conflicts_with = "out")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportScope {
    All,
    Filtered,
}

impl ExportScope {
    pub const fn as_str(self) -> &'static str {
        match self {
            ExportScope::All => "all",
            ExportScope::Filtered => "filtered",
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportReport {
    format: String,
    scope: ExportScope,
    count: usize,
    output: Option<String>,
}

pub fn export_file_name(scope: ExportScope, date: NaiveDate) -> String {
    format!("leads-{}-{}.csv", scope.as_str(), format_date(date))
}

pub fn export_csv(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let (scope, leads): (ExportScope, Vec<&Lead>) = if args.all {
        (ExportScope::All, ctx.dataset.leads().iter().collect())
    } else {
        (ExportScope::Filtered, select_leads(ctx, &args.query)?)
    };
    let data = to_csv(leads.iter().copied());

    let out = match (args.out, args.dir.or_else(|| ctx.config.export.dir.clone())) {
        (Some(path), _) => Some(path),
        (None, Some(dir)) => Some(dir.join(export_file_name(scope, today_local()))),
        (None, None) => None,
    };

    write_export(
        ctx,
        ExportReport {
            format: "csv".to_string(),
            scope,
            count: leads.len(),
            output: out.as_ref().map(|path| path.display().to_string()),
        },
        out.as_deref(),
        &data,
    )
}

fn write_export(
    ctx: &Context<'_>,
    report: ExportReport,
    out: Option<&Path>,
    data: &str,
) -> Result<()> {
    if ctx.json && out.is_none() {
        return Err(invalid_input("--json requires --out or --dir for export"));
    }

    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("create export directory {}", parent.display()))?;
                }
            }
            fs::write(path, data)
                .with_context(|| format!("write export file {}", path.display()))?;
            debug!(path = %path.display(), count = report.count, "export written");
            if ctx.json {
                print_json(&report)?;
            } else {
                println!("Exported {} leads to {}", report.count, path.display());
            }
            Ok(())
        }
        None => {
            println!("{}", data);
            Ok(())
        }
    }
}

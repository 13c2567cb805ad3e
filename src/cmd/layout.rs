use crate::reports;
use agegrid::category::CategoryTable;
use agegrid::error::{GridError, GridResult};
use agegrid::record::Record;
use agegrid::view::{build_view, ViewKind, ViewLayout};
use clap::Args;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use strum::IntoEnumIterator;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Views to build; all of them when omitted.
    #[arg(short, long = "view")]
    pub views: Vec<ViewKind>,

    /// Write JSON here instead of stdout and print a summary table.
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

#[derive(Serialize)]
struct NamedView<'a> {
    view: ViewKind,
    #[serde(flatten)]
    layout: &'a ViewLayout,
}

pub fn run(args: LayoutArgs, records: &[Record], table: &CategoryTable) -> GridResult<()> {
    let kinds: Vec<ViewKind> = if args.views.is_empty() {
        ViewKind::iter().collect()
    } else {
        args.views.clone()
    };

    // Views share nothing, so they are built side by side.
    let results: Vec<(ViewKind, GridResult<ViewLayout>)> = kinds
        .par_iter()
        .map(|&kind| (kind, build_view(records, &kind.config(), table)))
        .collect();

    let mut built = Vec::with_capacity(results.len());
    let mut first_error = None;
    for (kind, result) in results {
        match result {
            Ok(layout) => built.push((kind, layout)),
            Err(e) => {
                error!("View '{}' failed: {}", kind, e);
                first_error.get_or_insert(e);
            }
        }
    }

    if built.is_empty() {
        return Err(first_error.unwrap_or(GridError::EmptyInput));
    }

    let named: Vec<NamedView<'_>> = built
        .iter()
        .map(|(view, layout)| NamedView {
            view: *view,
            layout,
        })
        .collect();

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_json(&mut writer, &named, args.pretty)?;
            info!("Wrote {} views to {}", named.len(), path);
            reports::print_view_summary(&built);
        }
        None => {
            let stdout = io::stdout();
            write_json(&mut stdout.lock(), &named, args.pretty)?;
        }
    }

    Ok(())
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T, pretty: bool) -> GridResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

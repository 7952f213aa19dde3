use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::config::{OutputTarget, RunConfig};
use crate::error::GramError;
use crate::gram_counter::count_multiple_with_progress;
use crate::loader::{file_source, TextSource};
use crate::ranking::{combined_records, serialize};
use crate::record::CountRecord;
use crate::tokenizer::Tokenizer;
use crate::writer::{write_combined, write_per_order};

fn progress_bar(enabled: bool) -> Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(0);
    pb.set_style(ProgressStyle::with_template(
        "[{elapsed}/{eta}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
    )?);
    pb.set_message("orders counted");
    Ok(pb)
}

/// Reads the configured input file and writes the ranked n-gram tables.
/// Returns the paths of the files written.
pub fn run(config: &RunConfig) -> Result<Vec<PathBuf>> {
    let source = file_source(&config.input, config.format);
    run_with_source(source.as_ref(), config)
}

/// Like [`run`], taking the text from `source` instead of the input file.
///
/// Every table is ranked in memory before the first file is opened.
pub fn run_with_source<S: TextSource + ?Sized>(
    source: &S,
    config: &RunConfig,
) -> Result<Vec<PathBuf>> {
    let text = source.read_text()?;
    let tokens = Tokenizer::new()
        .fold_case(config.fold_case)
        .tokenize(&text);
    info!(
        input = %config.input.display(),
        tokens = tokens.len(),
        orders = ?config.orders,
        "tokenized input"
    );

    let pb = progress_bar(config.progress)?;
    let tables = count_multiple_with_progress(&tokens, &config.orders, &pb)?;
    pb.finish_and_clear();
    for (n, table) in &tables {
        debug!(n, distinct = table.len(), total = table.total(), "counted n-grams");
    }

    let limit = config.row_limit();
    let written = match &config.output {
        OutputTarget::Directory(dir) => {
            let rows = tables
                .iter()
                .map(|(&n, table)| Ok((n, serialize(table, limit)?)))
                .collect::<Result<BTreeMap<usize, Vec<CountRecord>>, GramError>>()?;
            write_per_order(dir, &rows)?
        }
        OutputTarget::Combined(path) => {
            let rows = combined_records(&tables, limit)?;
            write_combined(path, &rows)?;
            vec![path.clone()]
        }
    };
    info!(files = written.len(), "done");
    Ok(written)
}

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::record::{CountRecord, OrderedRecord};

/// File name of the per-order output for grams of order `n`.
pub fn ngram_file_name(n: usize) -> String {
    format!("{}-grams.tsv", n)
}

/// Writes one row per line, each terminated by a newline.
pub fn write_rows<W: Write, R: Display>(mut writer: W, rows: &[R]) -> std::io::Result<()> {
    for row in rows {
        writeln!(writer, "{}", row)?;
    }
    writer.flush()
}

fn write_file<R: Display>(path: &Path, rows: &[R]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write_rows(BufWriter::new(file), rows)
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), rows = rows.len(), "wrote file");
    Ok(())
}

/// Writes each order's rows to `{n}-grams.tsv` under `dir`, creating `dir`
/// when missing. Returns the paths written, in order of `n`.
pub fn write_per_order(
    dir: &Path,
    rows_by_order: &BTreeMap<usize, Vec<CountRecord<'_>>>,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let mut written = Vec::new();
    for (&n, rows) in rows_by_order {
        let path = dir.join(ngram_file_name(n));
        write_file(&path, rows)?;
        written.push(path);
    }
    Ok(written)
}

/// Writes all orders into a single combined file.
pub fn write_combined(path: &Path, rows: &[OrderedRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    write_file(path, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gram::WordGram;

    #[test]
    fn test_write_rows() {
        let tokens: Vec<String> = vec!["a".into(), "b".into()];
        let rows = [
            CountRecord {
                gram: WordGram::new(&tokens),
                count: 3,
            },
            CountRecord {
                gram: WordGram::new(&tokens[1..]),
                count: 1,
            },
        ];
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a b\t3\nb\t1\n");
    }

    #[test]
    fn test_write_no_rows() {
        let mut buf = Vec::new();
        write_rows::<_, CountRecord>(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_file_name() {
        assert_eq!(ngram_file_name(3), "3-grams.tsv");
    }
}

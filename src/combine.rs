// src/combine.rs
//
// Merge every per-league CSV in a directory into one file. Headers are the
// union of all inputs (first-seen order) plus `Source_File`.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::consts::{COMBINED_PREFIX, DEDUP_PREFIX, SOURCE_FILE_COL, TIMESTAMP_FMT};
use crate::csv::{read_table, write_table, Table};
use crate::error::SinkError;

#[derive(Debug, Default)]
pub struct CombineSummary {
    /// None when there was nothing to combine.
    pub output: Option<PathBuf>,
    pub dedup_output: Option<PathBuf>,
    pub files_read: usize,
    pub files_skipped: usize,
    pub rows: usize,
    pub duplicates_removed: usize,
}

/// `combine_csv_files("data", None)` → `data/combined_fifa_players_<ts>.csv`.
///
/// Earlier combined/dedup outputs in the same directory are not inputs.
/// Duplicate detection ignores `Source_File`; the first occurrence wins.
pub fn combine_csv_files(dir: &Path, output_name: Option<&str>) -> Result<CombineSummary, SinkError> {
    let mut summary = CombineSummary::default();

    let output_name = match output_name {
        Some(n) if n.ends_with(".csv") => s!(n),
        Some(n) => format!("{n}.csv"),
        None => format!("{COMBINED_PREFIX}_{}.csv", Local::now().format(TIMESTAMP_FMT)),
    };

    let inputs = csv_inputs(dir, &output_name)?;
    if inputs.is_empty() {
        loge!("No CSV files found in {}", dir.display());
        return Ok(summary);
    }
    logf!("Found {} CSV files to combine", inputs.len());

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<(usize, String)>> = Vec::new();

    for path in &inputs {
        let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let table = match File::open(path).map_err(SinkError::from).and_then(read_table) {
            Ok(t) => t,
            Err(e) => {
                loge!("Error reading {}: {e}", path.display());
                summary.files_skipped += 1;
                continue;
            }
        };
        logd!("Reading {} ({} rows)", path.display(), table.rows.len());

        let idx: Vec<usize> = table.headers.iter().map(|h| column_index(&mut headers, h)).collect();
        let src = column_index(&mut headers, SOURCE_FILE_COL);
        for row in table.rows {
            let mut cells: Vec<(usize, String)> = idx.iter().copied().zip(row).collect();
            cells.push((src, stem.clone()));
            rows.push(cells);
        }
        summary.files_read += 1;
    }

    if summary.files_read == 0 {
        loge!("No CSV files could be read in {}", dir.display());
        return Ok(summary);
    }

    // Source_File goes last, whatever order inputs introduced it in.
    let src_at = column_index(&mut headers, SOURCE_FILE_COL);
    let mut order: Vec<usize> = (0..headers.len()).filter(|&i| i != src_at).collect();
    order.push(src_at);

    let combined = Table {
        headers: order.iter().map(|&i| headers[i].clone()).collect(),
        rows: rows
            .into_iter()
            .map(|cells| {
                let mut wide = vec![s!(); headers.len()];
                for (i, v) in cells {
                    wide[i] = v;
                }
                order.iter().map(|&i| std::mem::take(&mut wide[i])).collect()
            })
            .collect(),
    };
    summary.rows = combined.rows.len();

    let out = dir.join(&output_name);
    write_table(BufWriter::new(File::create(&out)?), &combined)?;
    logf!("Combined {} files into {} ({} rows)", summary.files_read, out.display(), summary.rows);
    logd!("Columns: {}", combined.headers.join(", "));
    summary.output = Some(out);

    let deduped = dedup(&combined);
    summary.duplicates_removed = combined.rows.len() - deduped.rows.len();
    if summary.duplicates_removed > 0 {
        let dedup_out = dir.join(join!(DEDUP_PREFIX, &output_name));
        write_table(BufWriter::new(File::create(&dedup_out)?), &deduped)?;
        logf!(
            "Removed {} duplicate rows; saved {}",
            summary.duplicates_removed,
            dedup_out.display()
        );
        summary.dedup_output = Some(dedup_out);
    }

    Ok(summary)
}

fn csv_inputs(dir: &Path, output_name: &str) -> Result<Vec<PathBuf>, SinkError> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else { continue };
        let is_csv = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if !is_csv || !path.is_file() {
            continue;
        }
        if name == output_name || name.starts_with(COMBINED_PREFIX) || name.starts_with(DEDUP_PREFIX) {
            continue;
        }
        out.push(path);
    }
    out.sort();
    Ok(out)
}

fn column_index(headers: &mut Vec<String>, name: &str) -> usize {
    match headers.iter().position(|h| h == name) {
        Some(i) => i,
        None => {
            headers.push(s!(name));
            headers.len() - 1
        }
    }
}

fn dedup(table: &Table) -> Table {
    let key_cols: Vec<usize> = (0..table.headers.len())
        .filter(|&i| table.headers[i] != SOURCE_FILE_COL)
        .collect();
    let mut seen = HashSet::new();
    let rows = table
        .rows
        .iter()
        .filter(|row| seen.insert(key_cols.iter().map(|&i| row[i].as_str()).collect::<Vec<_>>()))
        .cloned()
        .collect();
    Table { headers: table.headers.clone(), rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_ignores_source_column() {
        let t = Table {
            headers: vec![s!("Player"), s!(SOURCE_FILE_COL)],
            rows: vec![
                vec![s!("A"), s!("one")],
                vec![s!("A"), s!("two")],
                vec![s!("B"), s!("two")],
            ],
        };
        let d = dedup(&t);
        assert_eq!(d.rows, vec![vec![s!("A"), s!("one")], vec![s!("B"), s!("two")]]);
    }

    #[test]
    fn column_index_appends_unknown() {
        let mut h = vec![s!("a")];
        assert_eq!(column_index(&mut h, "a"), 0);
        assert_eq!(column_index(&mut h, "b"), 1);
        assert_eq!(h, vec!["a", "b"]);
    }
}

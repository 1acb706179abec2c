//! Emit the labeled table. Junked rows get the junk marker in the label
//! column; kept rows keep whatever the cell already held, so user-applied
//! tags (e.g. "favorite") survive a run. Output goes to a temp file first and
//! is promoted atomically, so a failed run leaves no partial artifact.

use crate::config::TriageOptions;
use crate::csv::CsvWriter;
use crate::item::ArmorItem;
use crate::loader::RawTable;
use crate::schema::ColumnMap;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn write_labeled(
    table: &RawTable,
    items: &[ArmorItem],
    cols: &ColumnMap,
    out_path: &Path,
    opts: &TriageOptions,
) -> Result<()> {
    let tmp = tmp_path(out_path);
    let mut w = CsvWriter::create(&tmp, opts.write_buffer_bytes)
        .with_context(|| format!("creating {}", tmp.display()))?;

    // Reuse the existing label column when present, append it otherwise.
    let (label_idx, width) = match cols.label {
        Some(i) => (i, table.header.len()),
        None => (table.header.len(), table.header.len() + 1),
    };

    let mut header = table.header.clone();
    if cols.label.is_none() {
        header.push(opts.label_column.clone());
    }
    w.write_record(&header)?;

    let mut out_row: Vec<String> = Vec::with_capacity(width);
    for (row, item) in table.rows.iter().zip(items) {
        out_row.clear();
        out_row.extend(row.iter().cloned());
        // Makes room for the label cell when the column is newly appended.
        out_row.resize(width, String::new());
        if !item.is_keep() {
            out_row[label_idx] = opts.junk_marker.clone();
        }
        w.write_record(&out_row)?;
    }

    w.finish_atomic(out_path)
        .with_context(|| format!("writing {}", out_path.display()))
}

fn tmp_path(out_path: &Path) -> PathBuf {
    let mut s = out_path.as_os_str().to_os_string();
    s.push(".tmp");
    PathBuf::from(s)
}

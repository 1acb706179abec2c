//! Load the export into memory: raw rows for byte-level pass-through plus a
//! parsed `ArmorItem` per row for the ranker.

use crate::csv::CsvReader;
use crate::item::{ArmorItem, GuardianClass, ArmorSlot, RarityTier, Stat, StatBlock};
use crate::schema::ColumnMap;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// The table exactly as read: header plus one `Vec<String>` per data row.
/// Rows keep every column, known or not, so the writer can emit them as-is.
#[derive(Clone, Debug)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read the whole file. Errors if the file cannot be opened, has no header
/// row, or contains a row whose field count differs from the header's; zero
/// data rows is fine.
pub fn load_table(path: &Path, read_buf_bytes: usize) -> Result<RawTable> {
    let mut rdr = CsvReader::open(path, read_buf_bytes)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut header: Vec<String> = Vec::new();
    if !rdr.read_record(&mut header).with_context(|| format!("reading {}", path.display()))? {
        bail!("{} is empty (no header row)", path.display());
    }
    // Some exporters prepend a UTF-8 BOM; strip it so column matching works.
    if let Some(first) = header.first_mut() {
        if let Some(rest) = first.strip_prefix('\u{feff}') {
            *first = rest.to_string();
        }
    }

    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    while rdr.read_record(&mut row).with_context(|| format!("reading {}", path.display()))? {
        // Ragged rows mean a corrupt export; refuse rather than guess.
        if row.len() != header.len() {
            bail!(
                "row {}: expected {} fields, found {}",
                rows.len() + 2,
                header.len(),
                row.len()
            );
        }
        rows.push(std::mem::take(&mut row));
    }
    Ok(RawTable { header, rows })
}

/// Parse one `ArmorItem` per raw row. Unrecognized class/slot/tier values are
/// tolerated (the item just never competes); a non-numeric stat cell is fatal.
pub fn parse_items(table: &RawTable, cols: &ColumnMap) -> Result<Vec<ArmorItem>> {
    let mut items = Vec::with_capacity(table.rows.len());
    for (n, row) in table.rows.iter().enumerate() {
        // 1-based, counting the header, so messages match what editors show.
        let line = n + 2;

        let class = match row[cols.class].parse::<GuardianClass>() {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::warn!(row = line, "{e}, treating as classless");
                None
            }
        };
        let slot = match row[cols.slot].parse::<ArmorSlot>() {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::warn!(row = line, "{e}, item will not be ranked");
                None
            }
        };
        let rarity = match row[cols.rarity].parse::<RarityTier>() {
            Ok(t) => Some(t),
            Err(e) => {
                tracing::warn!(row = line, "{e}, ranking below Legendary");
                None
            }
        };

        let mut stats = StatBlock::default();
        for stat in Stat::ALL {
            let raw = row[cols.stats[stat.idx()]].trim();
            let value = if raw.is_empty() {
                0
            } else {
                raw.parse::<u16>().with_context(|| {
                    format!("row {}: bad value '{}' in column '{}'", line, raw, stat.base_column())
                })?
            };
            stats.set(stat, value);
        }

        items.push(ArmorItem::new(class, slot, rarity, stats));
    }
    Ok(items)
}

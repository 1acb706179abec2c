//! Header resolution: locate the required columns in the export's header row.
//! Column names come from the exporting tool and are matched as-is.

use crate::item::Stat;
use anyhow::{bail, Result};

pub const CLASS_COLUMN: &str = "Equippable";
pub const SLOT_COLUMN: &str = "Type";
pub const RARITY_COLUMN: &str = "Tier";

/// Indices of the columns the ranker reads, plus the label column if the
/// input already carries one (DIM exports ship a `Tag` column; re-runs on our
/// own output do too).
#[derive(Clone, Debug)]
pub struct ColumnMap {
    pub class: usize,
    pub slot: usize,
    pub rarity: usize,
    pub stats: [usize; 6],
    pub label: Option<usize>,
}

/// Resolve all required columns, reporting every missing one at once.
pub fn resolve_columns(header: &[String], label_column: &str) -> Result<ColumnMap> {
    let find = |name: &str| header.iter().position(|h| h.trim() == name);

    let mut missing: Vec<String> = Vec::new();
    let mut require = |name: &str| match find(name) {
        Some(i) => i,
        None => {
            missing.push(name.to_string());
            usize::MAX
        }
    };

    let class = require(CLASS_COLUMN);
    let slot = require(SLOT_COLUMN);
    let rarity = require(RARITY_COLUMN);
    let mut stats = [usize::MAX; 6];
    for stat in Stat::ALL {
        stats[stat.idx()] = require(&stat.base_column());
    }

    if !missing.is_empty() {
        bail!("missing required column(s): {}", missing.join(", "));
    }

    Ok(ColumnMap {
        class,
        slot,
        rarity,
        stats,
        label: find(label_column),
    })
}

use std::path::{Path, PathBuf};
use vault_triage::{
    ArmorItem, ArmorSlot, CsvReader, CsvWriter, GuardianClass, RarityTier, StatBlock,
};

/// Column order used by the test fixtures. `Perks` carries embedded commas to
/// exercise quoting through the whole pipeline.
pub fn header() -> Vec<String> {
    let mut h: Vec<String> = ["Name", "Tag", "Tier", "Type", "Equippable", "Perks"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for stat in vault_triage::Stat::ALL {
        h.push(stat.base_column());
    }
    h
}

/// Same fixture header minus the `Tag` column, for append-behavior tests.
pub fn header_without_tag() -> Vec<String> {
    header().into_iter().filter(|c| c != "Tag").collect()
}

/// One armor row matching `header()`. Stats are in `Stat::ALL` order
/// (Mobility, Resilience, Recovery, Discipline, Intellect, Strength).
pub fn armor_row(name: &str, tier: &str, armor_type: &str, class: &str, stats: [u16; 6]) -> Vec<String> {
    armor_row_tagged(name, "", tier, armor_type, class, stats)
}

pub fn armor_row_tagged(
    name: &str,
    tag: &str,
    tier: &str,
    armor_type: &str,
    class: &str,
    stats: [u16; 6],
) -> Vec<String> {
    let mut row = vec![
        name.to_string(),
        tag.to_string(),
        tier.to_string(),
        armor_type.to_string(),
        class.to_string(),
        "Mobile Retrofit, Shield Break".to_string(),
    ];
    row.extend(stats.iter().map(|v| v.to_string()));
    row
}

/// Drop the `Tag` cell from a row built by `armor_row*`, for use with
/// `header_without_tag()`.
pub fn without_tag_cell(mut row: Vec<String>) -> Vec<String> {
    row.remove(1);
    row
}

pub fn write_csv(path: &Path, header: &[String], rows: &[Vec<String>]) {
    let mut w = CsvWriter::create(path, 8 * 1024).unwrap();
    w.write_record(header).unwrap();
    for row in rows {
        w.write_record(row).unwrap();
    }
    w.finish().unwrap();
}

pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = CsvReader::open(path, 8 * 1024).unwrap();
    let mut header = Vec::new();
    assert!(rdr.read_record(&mut header).unwrap(), "missing header in {}", path.display());
    let mut rows = Vec::new();
    let mut row = Vec::new();
    while rdr.read_record(&mut row).unwrap() {
        rows.push(std::mem::take(&mut row));
    }
    (header, rows)
}

pub fn col(header: &[String], name: &str) -> usize {
    header
        .iter()
        .position(|h| h == name)
        .unwrap_or_else(|| panic!("no column '{}' in {:?}", name, header))
}

/// Fresh temp dir holding a `destinyArmor.csv` with the given rows.
/// Returns (dir, input path); keep the dir alive for the test's duration.
pub fn vault_fixture(header_row: &[String], rows: &[Vec<String>]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("destinyArmor.csv");
    write_csv(&input, header_row, rows);
    (dir, input)
}

/// In-memory item shorthand for ranker-only tests.
pub fn item(
    class: Option<GuardianClass>,
    slot: Option<ArmorSlot>,
    rarity: Option<RarityTier>,
    stats: [u16; 6],
) -> ArmorItem {
    ArmorItem::new(class, slot, rarity, StatBlock::from_array(stats))
}

pub fn legendary(class: GuardianClass, slot: ArmorSlot, stats: [u16; 6]) -> ArmorItem {
    item(Some(class), Some(slot), Some(RarityTier::Legendary), stats)
}

#[path = "common/mod.rs"]
mod common;

use common::*;
use vault_triage::VaultTriage;

/// Full pass over a small vault: the dominated legendary and the rare get
/// tagged junk, everything else rides through untouched (including the quoted
/// perk list with embedded commas).
#[test]
fn tags_junk_and_writes_sibling_file() {
    let rows = vec![
        armor_row("Wildwood Helm", "Legendary", "Helmet", "Titan", [20, 20, 20, 20, 20, 20]),
        armor_row("Shelter in Place", "Legendary", "Helmet", "Titan", [10, 10, 10, 10, 10, 10]),
        armor_row("An Insurmountable Skullfort", "Exotic", "Helmet", "Titan", [1, 1, 1, 1, 1, 1]),
        armor_row("Prodigal Helm", "Rare", "Helmet", "Titan", [30, 30, 30, 30, 30, 30]),
        armor_row("Mark of the Great Hunt", "Legendary", "Titan Mark", "Titan", [0, 0, 0, 0, 0, 0]),
    ];
    let (_dir, input) = vault_fixture(&header(), &rows);

    let summary = VaultTriage::new().run(&input).unwrap();
    assert_eq!(summary.output.file_name().unwrap().to_str().unwrap(), "destinyArmor_mod.csv");
    assert_eq!(summary.rows, 5);
    assert_eq!(summary.kept, 3);
    assert_eq!(summary.junked, 2);

    let (out_header, out_rows) = read_csv(&summary.output);
    assert_eq!(out_header, header(), "schema unchanged when Tag already exists");

    let tag = col(&out_header, "Tag");
    let perks = col(&out_header, "Perks");
    assert_eq!(out_rows[0][tag], "");
    assert_eq!(out_rows[1][tag], "junk");
    assert_eq!(out_rows[2][tag], "");
    assert_eq!(out_rows[3][tag], "junk");
    assert_eq!(out_rows[4][tag], "");
    for row in &out_rows {
        assert_eq!(row[perks], "Mobile Retrofit, Shield Break");
    }
}

/// Kept rows keep whatever tag the user had; junked rows are overwritten.
#[test]
fn existing_tags_preserved_on_kept_rows() {
    let rows = vec![
        armor_row_tagged("Keeper", "favorite", "Legendary", "Gauntlets", "Warlock", [20, 20, 20, 20, 20, 20]),
        armor_row_tagged("Loser", "favorite", "Legendary", "Gauntlets", "Warlock", [5, 5, 5, 5, 5, 5]),
    ];
    let (_dir, input) = vault_fixture(&header(), &rows);

    let summary = VaultTriage::new().run(&input).unwrap();
    let (out_header, out_rows) = read_csv(&summary.output);
    let tag = col(&out_header, "Tag");
    assert_eq!(out_rows[0][tag], "favorite");
    assert_eq!(out_rows[1][tag], "junk");
}

/// Without a Tag column in the input, one is appended at the end.
#[test]
fn appends_label_column_when_missing() {
    let rows = vec![
        without_tag_cell(armor_row("Solo Chest", "Legendary", "Chest Armor", "Hunter", [10, 10, 10, 10, 10, 10])),
        without_tag_cell(armor_row("Blue Chest", "Rare", "Chest Armor", "Hunter", [10, 10, 10, 10, 10, 10])),
    ];
    let (_dir, input) = vault_fixture(&header_without_tag(), &rows);

    let summary = VaultTriage::new().run(&input).unwrap();
    let (out_header, out_rows) = read_csv(&summary.output);

    let mut expected = header_without_tag();
    expected.push("Tag".to_string());
    assert_eq!(out_header, expected);

    let tag = out_header.len() - 1;
    assert_eq!(out_rows[0][tag], "", "sole legendary wins its buckets");
    assert_eq!(out_rows[1][tag], "junk");
}

/// Running the tool over its own output yields the same tags again.
#[test]
fn rerun_on_output_is_stable() {
    let rows = vec![
        armor_row("A", "Legendary", "Leg Armor", "Hunter", [20, 5, 5, 5, 5, 5]),
        armor_row("B", "Legendary", "Leg Armor", "Hunter", [5, 20, 5, 5, 5, 5]),
        armor_row("C", "Legendary", "Leg Armor", "Hunter", [4, 4, 4, 4, 4, 4]),
    ];
    let (_dir, input) = vault_fixture(&header(), &rows);

    let first = VaultTriage::new().run(&input).unwrap();
    let second = VaultTriage::new().run(&first.output).unwrap();
    assert_eq!(second.output.file_name().unwrap().to_str().unwrap(), "destinyArmor_mod_mod.csv");

    let (h1, rows1) = read_csv(&first.output);
    let (h2, rows2) = read_csv(&second.output);
    assert_eq!(h1, h2);
    let tag = col(&h1, "Tag");
    let tags1: Vec<_> = rows1.iter().map(|r| r[tag].clone()).collect();
    let tags2: Vec<_> = rows2.iter().map(|r| r[tag].clone()).collect();
    assert_eq!(tags1, tags2);
}

/// Zero data rows is not an error: the output is just the header.
#[test]
fn header_only_input_writes_header_only_output() {
    let (_dir, input) = vault_fixture(&header(), &[]);

    let summary = VaultTriage::new().run(&input).unwrap();
    assert_eq!(summary.rows, 0);

    let (out_header, out_rows) = read_csv(&summary.output);
    assert_eq!(out_header, header());
    assert!(out_rows.is_empty());
}

/// Quoted fields with embedded quotes and line breaks, CRLF endings, and a
/// missing final newline all survive the pass; the break inside the quoted
/// field round-trips with its original terminator.
#[test]
fn quoted_fields_and_crlf_survive() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("destinyArmor.csv");
    let mut raw = header().join(",");
    raw.push_str("\r\n");
    raw.push_str("\"He said \"\"hi\"\"\",,Legendary,Helmet,Titan,\"Line1\r\nLine2\",1,2,3,4,5,6");
    std::fs::write(&input, raw).unwrap();

    let summary = VaultTriage::new().run(&input).unwrap();
    let (out_header, out_rows) = read_csv(&summary.output);
    assert_eq!(out_rows.len(), 1);
    let name = col(&out_header, "Name");
    let perks = col(&out_header, "Perks");
    assert_eq!(out_rows[0][name], "He said \"hi\"");
    assert_eq!(out_rows[0][perks], "Line1\r\nLine2");
}

/// Blank separator lines and a trailing double newline are not data rows.
#[test]
fn blank_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("destinyArmor.csv");
    let mut raw = header().join(",");
    raw.push('\n');
    raw.push_str("A,,Legendary,Helmet,Titan,Restorative,10,10,10,10,10,10\n");
    raw.push('\n');
    raw.push_str("B,,Rare,Helmet,Titan,Restorative,1,1,1,1,1,1\n\n");
    std::fs::write(&input, raw).unwrap();

    let summary = VaultTriage::new().run(&input).unwrap();
    assert_eq!(summary.rows, 2);

    let (out_header, out_rows) = read_csv(&summary.output);
    assert_eq!(out_rows.len(), 2);
    let name = col(&out_header, "Name");
    assert_eq!(out_rows[0][name], "A");
    assert_eq!(out_rows[1][name], "B");
}

/// A UTF-8 BOM on the header doesn't break column resolution.
#[test]
fn bom_on_header_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("destinyArmor.csv");
    let mut raw = String::from("\u{feff}");
    raw.push_str(&header().join(","));
    raw.push('\n');
    raw.push_str("Helm,,Legendary,Helmet,Titan,Restorative,10,10,10,10,10,10\n");
    std::fs::write(&input, raw).unwrap();

    let summary = VaultTriage::new().run(&input).unwrap();
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.kept, 1);
}

/// The output file name follows the configured suffix.
#[test]
fn custom_output_suffix() {
    let rows = vec![armor_row("X", "Legendary", "Helmet", "Titan", [10; 6])];
    let (_dir, input) = vault_fixture(&header(), &rows);

    let summary = VaultTriage::new().output_suffix("_tagged").run(&input).unwrap();
    assert_eq!(summary.output.file_name().unwrap().to_str().unwrap(), "destinyArmor_tagged.csv");
}

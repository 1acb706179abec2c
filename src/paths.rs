use std::path::{Path, PathBuf};

/// Derive the output path: same directory, suffix spliced in before the
/// extension. `vault/destinyArmor.csv` with `_mod` becomes
/// `vault/destinyArmor_mod.csv`; an extensionless input just gets the suffix
/// appended.
pub fn sibling_with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext),
        None => format!("{}{}", stem, suffix),
    };
    input.with_file_name(name)
}

use crate::config::TriageOptions;
use crate::loader::{load_table, parse_items};
use crate::paths::sibling_with_suffix;
use crate::ranker::assign_labels;
use crate::schema::resolve_columns;
use crate::util::init_tracing_once;
use crate::writer::write_labeled;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// The whole Loader -> Ranker -> Writer pass behind a builder, mirroring the
/// options struct. One call to `run` per input file.
#[derive(Clone)]
pub struct VaultTriage {
    pub(crate) opts: TriageOptions,
}

impl Default for VaultTriage {
    fn default() -> Self {
        Self::new()
    }
}

/// What a run did, for the caller to report.
#[derive(Clone, Debug)]
pub struct TriageSummary {
    pub rows: usize,
    pub kept: usize,
    pub junked: usize,
    pub output: PathBuf,
}

impl VaultTriage {
    pub fn new() -> Self {
        Self { opts: TriageOptions::default() }
    }

    // -------- Builder methods --------
    pub fn label_column(mut self, name: impl Into<String>) -> Self { self.opts = self.opts.with_label_column(name); self }
    pub fn output_suffix(mut self, suffix: impl Into<String>) -> Self { self.opts = self.opts.with_output_suffix(suffix); self }
    pub fn min_stat(mut self, value: u16) -> Self { self.opts = self.opts.with_min_stat(value); self }
    pub fn min_stat_total(mut self, value: u32) -> Self { self.opts = self.opts.with_min_stat_total(value); self }
    pub fn junk_marker(mut self, marker: impl Into<String>) -> Self { self.opts = self.opts.with_junk_marker(marker); self }
    pub fn io_read_buffer(mut self, bytes: usize) -> Self { self.opts = self.opts.with_io_read_buffer(bytes); self }
    pub fn io_write_buffer(mut self, bytes: usize) -> Self { self.opts = self.opts.with_io_write_buffer(bytes); self }

    /// Load `input`, label every row, and write the tagged copy next to it.
    /// The input file is never modified.
    pub fn run(self, input: &Path) -> Result<TriageSummary> {
        init_tracing_once();

        let table = load_table(input, self.opts.read_buffer_bytes)?;
        let cols = resolve_columns(&table.header, &self.opts.label_column)
            .with_context(|| format!("resolving columns in {}", input.display()))?;
        let mut items = parse_items(&table, &cols)?;

        assign_labels(&mut items, &self.opts);

        let output = sibling_with_suffix(input, &self.opts.output_suffix);
        write_labeled(&table, &items, &cols, &output, &self.opts)?;

        let kept = items.iter().filter(|i| i.is_keep()).count();
        let summary = TriageSummary {
            rows: items.len(),
            kept,
            junked: items.len() - kept,
            output,
        };
        tracing::info!(
            rows = summary.rows,
            kept = summary.kept,
            junked = summary.junked,
            "wrote {}",
            summary.output.display()
        );
        Ok(summary)
    }
}

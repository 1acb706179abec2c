/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct TriageOptions {
    pub label_column: String,     // column the junk marker is written to ("Tag" in DIM exports)
    pub output_suffix: String,    // inserted before the extension of the output file name
    pub min_stat: u16,            // both stats of a pair must reach this for the pair to count
    pub min_stat_total: u32,      // six-stat base total below this is never kept
    pub junk_marker: String,      // cell value written for junked rows

    // IO tuning
    pub read_buffer_bytes: usize, // BufReader capacity
    pub write_buffer_bytes: usize, // BufWriter capacity
}

impl Default for TriageOptions {
    fn default() -> Self {
        // Thresholds default to 0 (off): every legendary competes.
        Self {
            label_column: "Tag".to_string(),
            output_suffix: "_mod".to_string(),
            min_stat: 0,
            min_stat_total: 0,
            junk_marker: crate::item::Label::junk_marker().to_string(),

            read_buffer_bytes: 64 * 1024,
            write_buffer_bytes: 64 * 1024,
        }
    }
}

impl TriageOptions {
    pub fn with_label_column(mut self, name: impl Into<String>) -> Self {
        self.label_column = name.into();
        self
    }
    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = suffix.into();
        self
    }
    /// Require both stats of a pair to reach `value` before the pair's bucket
    /// will accept the item.
    pub fn with_min_stat(mut self, value: u16) -> Self {
        self.min_stat = value;
        self
    }
    /// Exclude items whose base stat total is below `value` from competition.
    pub fn with_min_stat_total(mut self, value: u32) -> Self {
        self.min_stat_total = value;
        self
    }
    pub fn with_junk_marker(mut self, marker: impl Into<String>) -> Self {
        self.junk_marker = marker.into();
        self
    }

    // IO buffers tuning
    pub fn with_io_read_buffer(mut self, bytes: usize) -> Self {
        self.read_buffer_bytes = bytes.max(8 * 1024);
        self
    }
    pub fn with_io_write_buffer(mut self, bytes: usize) -> Self {
        self.write_buffer_bytes = bytes.max(8 * 1024);
        self
    }
}

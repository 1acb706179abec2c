mod config;
mod item;
mod schema;
mod paths;
mod util;

mod csv;
mod loader;
mod writer;

mod bucketing;
mod ranker;
mod pipeline;

pub use crate::config::TriageOptions;
pub use crate::pipeline::{TriageSummary, VaultTriage};

// Expose the domain model so callers and tests can build items directly.
pub use crate::item::{
    stat_pairs, ArmorItem, ArmorSlot, GuardianClass, Label, RarityTier, Stat, StatBlock,
};

// Expose ranking internals for library-level use (labeling without the IO).
pub use crate::bucketing::{build_buckets, BucketKey};
pub use crate::ranker::{assign_labels, pair_score};

// Expose the table layer for callers that pre/post-process the export.
pub use crate::csv::{CsvReader, CsvWriter};
pub use crate::loader::{load_table, parse_items, RawTable};
pub use crate::schema::{resolve_columns, ColumnMap};
pub use crate::paths::sibling_with_suffix;

// Expose robust file ops so binaries can import from the crate root.
pub use crate::util::{create_with_backoff, open_with_backoff, replace_file_atomic_backoff};

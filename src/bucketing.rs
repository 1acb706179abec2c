//! Partition eligible legendaries into (class, slot, stat-pair) buckets.
//! Each item joins up to 15 buckets, one per unordered stat pair; buckets hold
//! item indices so a Keep promotion in one bucket is visible everywhere.

use crate::config::TriageOptions;
use crate::item::{stat_pairs, ArmorItem, ArmorSlot, GuardianClass, RarityTier, Stat};
use ahash::RandomState;
use std::collections::HashMap;

/// One niche an item can win: a class, a ranked slot, and a stat pair.
/// The pair is stored in `Stat::ALL` order so (A, B) and (B, A) collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub class: GuardianClass,
    pub slot: ArmorSlot,
    pub pair: (Stat, Stat),
}

/// True when the item is subject to stat-pair competition at all.
pub fn competes(item: &ArmorItem, opts: &TriageOptions) -> bool {
    item.rarity == Some(RarityTier::Legendary)
        && item.class.is_some()
        && matches!(item.slot, Some(s) if ArmorSlot::RANKED.contains(&s))
        && item.stats.total() >= opts.min_stat_total
}

/// Build the bucket map over the whole collection. An item enters a pair's
/// bucket only if both stats of the pair meet `opts.min_stat`.
pub fn build_buckets(
    items: &[ArmorItem],
    opts: &TriageOptions,
) -> HashMap<BucketKey, Vec<usize>, RandomState> {
    let mut buckets: HashMap<BucketKey, Vec<usize>, RandomState> = HashMap::default();
    for (idx, item) in items.iter().enumerate() {
        if !competes(item, opts) {
            continue;
        }
        // competes() guarantees these.
        let (class, slot) = match (item.class, item.slot) {
            (Some(c), Some(s)) => (c, s),
            _ => continue,
        };
        for (a, b) in stat_pairs() {
            if item.stats.get(a) < opts.min_stat || item.stats.get(b) < opts.min_stat {
                continue;
            }
            buckets
                .entry(BucketKey { class, slot, pair: (a, b) })
                .or_default()
                .push(idx);
        }
    }
    buckets
}

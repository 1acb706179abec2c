//! Label assignment: exemption rules first, then per-bucket dominance.
//!
//! Exemption precedence (class items beat the rarity rule: the game's own
//! tooling never junks cloaks/marks/bonds, whatever their tier):
//!   1. class item        -> Keep
//!   2. Exotic            -> Keep
//!   3. everything else   -> Junk, until promoted by winning a bucket
//!
//! A legendary is promoted to Keep if it holds the top combined score in at
//! least one of its stat-pair buckets. Ties share the win. The pass is
//! deterministic and idempotent: re-running it over the same items yields the
//! same labels.

use crate::bucketing::{build_buckets, BucketKey};
use crate::config::TriageOptions;
use crate::item::{ArmorItem, Label, RarityTier, Stat};

/// Combined score of the two stats defining a bucket. Plain sum, not a Pareto
/// front: a piece trailing on one axis can still win on the total.
#[inline]
pub fn pair_score(item: &ArmorItem, pair: (Stat, Stat)) -> u32 {
    item.stats.get(pair.0) as u32 + item.stats.get(pair.1) as u32
}

fn base_label(item: &ArmorItem) -> Label {
    if item.is_class_item() {
        return Label::Keep;
    }
    if item.rarity == Some(RarityTier::Exotic) {
        return Label::Keep;
    }
    Label::Junk
}

/// Assign a label to every item. After this returns no item is unlabeled.
pub fn assign_labels(items: &mut [ArmorItem], opts: &TriageOptions) {
    for item in items.iter_mut() {
        item.label = Some(base_label(item));
    }

    let buckets = build_buckets(items, opts);
    for (key, members) in &buckets {
        promote_bucket_winners(items, key, members);
    }
}

/// Promote every member tied at the bucket's top score. A singleton bucket
/// trivially promotes its only member; an empty bucket is a no-op.
fn promote_bucket_winners(items: &mut [ArmorItem], key: &BucketKey, members: &[usize]) {
    let Some(best) = members.iter().map(|&i| pair_score(&items[i], key.pair)).max() else {
        return;
    };
    for &i in members {
        if pair_score(&items[i], key.pair) == best {
            items[i].label = Some(Label::Keep);
        }
    }
}

//! Domain model for armor rows: class/slot/rarity enums, the fixed stat
//! vocabulary, and the in-memory item record the ranker labels.

use std::fmt;
use std::str::FromStr;

/// The three classes whose armor competes for vault space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardianClass {
    Hunter,
    Titan,
    Warlock,
}

impl GuardianClass {
    pub const ALL: [GuardianClass; 3] = [GuardianClass::Hunter, GuardianClass::Titan, GuardianClass::Warlock];
}

impl fmt::Display for GuardianClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GuardianClass::Hunter => "Hunter",
            GuardianClass::Titan => "Titan",
            GuardianClass::Warlock => "Warlock",
        };
        f.write_str(s)
    }
}

impl FromStr for GuardianClass {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for c in Self::ALL {
            if s.eq_ignore_ascii_case(&c.to_string()) {
                return Ok(c);
            }
        }
        Err(format!("unrecognized class '{}'", s))
    }
}

/// Armor slot. The DIM export calls this column `Type` and uses per-class
/// names for class items (cloak/mark/bond); those all collapse to `ClassItem`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArmorSlot {
    Helmet,
    Gauntlets,
    Chest,
    Legs,
    ClassItem,
}

impl ArmorSlot {
    /// Slots that take part in stat-pair competition (class items are exempt).
    pub const RANKED: [ArmorSlot; 4] =
        [ArmorSlot::Helmet, ArmorSlot::Gauntlets, ArmorSlot::Chest, ArmorSlot::Legs];
}

impl fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArmorSlot::Helmet => "Helmet",
            ArmorSlot::Gauntlets => "Gauntlets",
            ArmorSlot::Chest => "Chest Armor",
            ArmorSlot::Legs => "Leg Armor",
            ArmorSlot::ClassItem => "Class Item",
        };
        f.write_str(s)
    }
}

impl FromStr for ArmorSlot {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            t if t.eq_ignore_ascii_case("Helmet") => Ok(ArmorSlot::Helmet),
            t if t.eq_ignore_ascii_case("Gauntlets") => Ok(ArmorSlot::Gauntlets),
            t if t.eq_ignore_ascii_case("Chest Armor") => Ok(ArmorSlot::Chest),
            t if t.eq_ignore_ascii_case("Leg Armor") => Ok(ArmorSlot::Legs),
            t if t.eq_ignore_ascii_case("Hunter Cloak")
                || t.eq_ignore_ascii_case("Titan Mark")
                || t.eq_ignore_ascii_case("Warlock Bond") => Ok(ArmorSlot::ClassItem),
            t => Err(format!("unrecognized armor type '{}'", t)),
        }
    }
}

/// Rarity tiers in ascending order; the derived `Ord` is the ranking the
/// junk rules compare against (`< Legendary` means automatic junk).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RarityTier {
    Common,
    Uncommon,
    Rare,
    Legendary,
    Exotic,
}

impl RarityTier {
    const ALL: [RarityTier; 5] = [
        RarityTier::Common,
        RarityTier::Uncommon,
        RarityTier::Rare,
        RarityTier::Legendary,
        RarityTier::Exotic,
    ];
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RarityTier::Common => "Common",
            RarityTier::Uncommon => "Uncommon",
            RarityTier::Rare => "Rare",
            RarityTier::Legendary => "Legendary",
            RarityTier::Exotic => "Exotic",
        };
        f.write_str(s)
    }
}

impl FromStr for RarityTier {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for t in Self::ALL {
            if s.eq_ignore_ascii_case(&t.to_string()) {
                return Ok(t);
            }
        }
        Err(format!("unrecognized tier '{}'", s))
    }
}

/// Fixed stat vocabulary. The export carries one `"<Stat> (Base)"` column per
/// entry; `ALL` fixes the in-memory ordering used by `StatBlock`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stat {
    Mobility,
    Resilience,
    Recovery,
    Discipline,
    Intellect,
    Strength,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Mobility,
        Stat::Resilience,
        Stat::Recovery,
        Stat::Discipline,
        Stat::Intellect,
        Stat::Strength,
    ];

    #[inline]
    pub fn idx(self) -> usize {
        match self {
            Stat::Mobility => 0,
            Stat::Resilience => 1,
            Stat::Recovery => 2,
            Stat::Discipline => 3,
            Stat::Intellect => 4,
            Stat::Strength => 5,
        }
    }

    /// Name of the base-value column in the export.
    pub fn base_column(self) -> String {
        format!("{} (Base)", self)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stat::Mobility => "Mobility",
            Stat::Resilience => "Resilience",
            Stat::Recovery => "Recovery",
            Stat::Discipline => "Discipline",
            Stat::Intellect => "Intellect",
            Stat::Strength => "Strength",
        };
        f.write_str(s)
    }
}

/// All 15 unordered pairs of distinct stats, in a fixed deterministic order.
pub fn stat_pairs() -> impl Iterator<Item = (Stat, Stat)> {
    Stat::ALL.iter().enumerate().flat_map(|(i, &a)| {
        Stat::ALL[i + 1..].iter().map(move |&b| (a, b))
    })
}

/// Base stat values for one item, indexed by `Stat::ALL` order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatBlock {
    values: [u16; 6],
}

impl StatBlock {
    pub fn from_array(values: [u16; 6]) -> Self {
        Self { values }
    }

    #[inline]
    pub fn get(&self, stat: Stat) -> u16 {
        self.values[stat.idx()]
    }

    #[inline]
    pub fn set(&mut self, stat: Stat, value: u16) {
        self.values[stat.idx()] = value;
    }

    /// Six-stat base total.
    pub fn total(&self) -> u32 {
        self.values.iter().map(|&v| v as u32).sum()
    }
}

/// Terminal label assigned to every row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Keep,
    Junk,
}

impl Label {
    /// Marker string written to the tag column for junked rows.
    pub fn junk_marker() -> &'static str {
        "junk"
    }
}

/// One parsed armor row. `None` in `class`/`slot`/`rarity` means the source
/// cell didn't match the known vocabulary; such items never enter a bucket.
/// `label` is `None` until the ranker runs.
#[derive(Clone, Debug)]
pub struct ArmorItem {
    pub class: Option<GuardianClass>,
    pub slot: Option<ArmorSlot>,
    pub rarity: Option<RarityTier>,
    pub stats: StatBlock,
    pub label: Option<Label>,
}

impl ArmorItem {
    pub fn new(
        class: Option<GuardianClass>,
        slot: Option<ArmorSlot>,
        rarity: Option<RarityTier>,
        stats: StatBlock,
    ) -> Self {
        Self { class, slot, rarity, stats, label: None }
    }

    pub fn is_class_item(&self) -> bool {
        self.slot == Some(ArmorSlot::ClassItem)
    }

    pub fn is_keep(&self) -> bool {
        self.label == Some(Label::Keep)
    }
}

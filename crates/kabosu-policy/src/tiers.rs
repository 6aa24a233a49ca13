//! Fee priority tiers for locally originated transactions.

/// Priority tier a sender requests when creating a transaction,
/// ordered by expense from cheapest to most expensive.
///
/// The open integer space of external callers (RPC, UI combo boxes)
/// enters through [`PriorityTier::from_index`]; unknown indices map to
/// `None` and the mapping functions in [`crate::fees`] fall back to
/// the default behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriorityTier {
    Minimum,
    More,
    Wow,
    Amaze,
    ManyGenerous,
    SuchExpensive,
}

impl PriorityTier {
    /// All tiers, cheapest first.
    pub const ALL: [PriorityTier; 6] = [
        PriorityTier::Minimum,
        PriorityTier::More,
        PriorityTier::Wow,
        PriorityTier::Amaze,
        PriorityTier::ManyGenerous,
        PriorityTier::SuchExpensive,
    ];

    /// Map an external tier index to a tier. Unrecognized values
    /// return `None`.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(PriorityTier::Minimum),
            1 => Some(PriorityTier::More),
            2 => Some(PriorityTier::Wow),
            3 => Some(PriorityTier::Amaze),
            4 => Some(PriorityTier::ManyGenerous),
            5 => Some(PriorityTier::SuchExpensive),
            _ => None,
        }
    }

    /// The tier's external index.
    pub fn index(&self) -> i32 {
        *self as i32
    }
}

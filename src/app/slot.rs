// SPDX-License-Identifier: MPL-2.0
//! Upload slots hosted by the intake window.

/// Identifies one upload slot. Used as subscription identity, so each slot
/// keeps its own paste listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Reference,
    Comparison,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Reference, Slot::Comparison];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Slot::Reference => 0,
            Slot::Comparison => 1,
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Slot::Reference => "slot-reference-label",
            Slot::Comparison => "slot-comparison-label",
        }
    }

    /// Stable name used in the activity log.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Reference => "reference",
            Slot::Comparison => "comparison",
        }
    }
}

use core::fmt;
use core::num::NonZeroU32;

use crate::error::{WrError, WrResult};

/// Compact identifier handed out by builders and tables.
///
/// - `u32` keeps memory small
/// - `NonZero` lets `Option<Id>` stay the same size as `Id`
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    ///
    /// Fails once the index no longer fits below `u32::MAX`.
    pub fn from_index(index: usize) -> WrResult<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|i| NonZeroU32::MIN.checked_add(i))
            .map(Self)
            .ok_or(WrError::InvalidArg {
                what: "index exceeds the id range",
            })
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

pub type NodeId = Id;
pub type ParameterId = Id;

/// Selects one terminal of a multi-terminal node.
///
/// Single-terminal node kinds use `None` wherever an `Option<SubIndex>` is taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SubIndex(pub u32);

impl fmt::Display for SubIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render an optional sub-index the way error messages and logs show it.
pub fn display_sub_index(sub_index: &Option<SubIndex>) -> String {
    match sub_index {
        Some(s) => s.to_string(),
        None => "None".to_string(),
    }
}

// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use smallvec::SmallVec;
use std::fmt;

/// A prefix-structured position tag on an event.
///
/// An ordinal is a sequence of integers. The ordinal of a nested suite's
/// events has the parent suite's ordinal as a proper prefix, and two events
/// belong to the same suite-run generation iff their ordinals agree on all
/// but the last component. The derived lexicographic order is total and
/// consistent with emission order across all concurrently running suites.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ordinal(SmallVec<[u32; 4]>);

impl Ordinal {
    /// Creates an ordinal from its components.
    pub fn new(components: impl IntoIterator<Item = u32>) -> Self {
        Self(components.into_iter().collect())
    }

    /// Returns the components of this ordinal.
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// Returns the ordinal with the last component dropped: the suite
    /// lineage this event belongs to.
    ///
    /// Returns `None` for an empty ordinal.
    pub fn parent(&self) -> Option<Ordinal> {
        let (_, parent) = self.0.split_last()?;
        Some(Ordinal(parent.iter().copied().collect()))
    }

    /// Returns true if `self` and `other` belong to the same suite-run
    /// generation, i.e. their components agree on all but the last.
    pub fn same_generation(&self, other: &Ordinal) -> bool {
        match (self.0.split_last(), other.0.split_last()) {
            (Some((_, a)), Some((_, b))) => a == b,
            _ => false,
        }
    }
}

impl From<&[u32]> for Ordinal {
    fn from(components: &[u32]) -> Self {
        Ordinal::new(components.iter().copied())
    }
}

impl<const N: usize> From<[u32; N]> for Ordinal {
    fn from(components: [u32; N]) -> Self {
        Ordinal::new(components)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.0.iter();
        if let Some(first) = components.next() {
            write!(f, "{first}")?;
            for component in components {
                write!(f, ".{component}")?;
            }
        }
        Ok(())
    }
}

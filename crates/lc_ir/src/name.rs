//! Interned register identifier.

use std::fmt;

/// Interned register name.
///
/// A plain index into the [`Interner`](crate::Interner) that produced it.
/// Two names from the same interner are equal iff their strings are equal,
/// so the evaluator compares registers without touching string data.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Create from a raw interner index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get the raw interner index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into interner storage.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

//! String interner for register names.
//!
//! A session owns exactly one interner; it is single-threaded and never
//! forgets a name.

use super::Name;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More distinct names than fit in a `u32` index.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "register table exceeded capacity: {} names, max is {}",
                count,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Maps register strings to [`Name`]s and back.
#[derive(Default, Debug)]
pub struct Interner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl Interner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `s`, returning the existing name if it was seen before.
    pub fn try_intern(&mut self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.map.get(s) {
            return Ok(name);
        }

        let raw = u32::try_from(self.strings.len()).map_err(|_| InternError::Overflow {
            count: self.strings.len(),
        })?;
        let name = Name::from_raw(raw);
        self.strings.push(s.into());
        self.map.insert(s.into(), name);
        Ok(name)
    }

    /// Look up a name without interning it.
    #[inline]
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Resolve a name back to its string.
    ///
    /// Names from a different interner resolve to `"<unknown>"`.
    #[inline]
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("<unknown>", |s| &**s)
    }

    /// Number of interned names.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

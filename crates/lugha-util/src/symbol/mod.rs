//! Interned identifiers.
//!
//! Identifiers (variable, function and parameter names) are interned into
//! a small `u32` handle so that later stages can compare names by value
//! equality instead of hashing strings repeatedly. Since every
//! compilation unit runs to completion on a single thread before another
//! one starts, the interner lives behind a simple [`std::sync::Mutex`]
//! rather than anything lock-free.

mod interner;

use std::fmt;

pub use interner::Interner;

/// A handle to an interned string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Interns `text`, returning a handle to it.
    pub fn intern(text: &str) -> Symbol {
        interner::with_global(|i| i.intern(text))
    }

    /// Looks up the text behind this handle.
    pub fn as_str(&self) -> String {
        interner::with_global(|i| i.resolve(*self).to_owned())
    }

    pub(crate) const fn from_u32(raw: u32) -> Symbol {
        Symbol(raw)
    }

    pub(crate) const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl serde::Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_interning() {
        let a = Symbol::intern("دالة");
        let b = Symbol::intern("دالة");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "دالة");
    }

    #[test]
    fn distinct_strings_get_distinct_symbols() {
        let a = Symbol::intern("س");
        let b = Symbol::intern("ص");
        assert_ne!(a, b);
    }
}

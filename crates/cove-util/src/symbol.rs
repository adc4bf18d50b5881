//! String interning for section and atom names.
//!
//! Configuration files repeat the same handful of names over and over, so
//! the lexer interns every section and atom name it emits. A [`Symbol`] is
//! a 4-byte handle into a global, append-only string table; comparing two
//! symbols is an integer comparison and retrieving the text is an indexed
//! load.
//!
//! The table is thread-safe: concurrent lexes of independent inputs may
//! intern simultaneously without coordinating.
//!
//! # Example
//!
//! ```
//! use cove_util::Symbol;
//!
//! let a = Symbol::intern("server");
//! let b = Symbol::intern("server");
//! let c = Symbol::intern("client");
//!
//! assert_eq!(a, b);
//! assert_ne!(a, c);
//! assert_eq!(a.as_str(), "server");
//! ```

use ahash::RandomState;
use dashmap::DashMap;
use std::fmt;
use std::sync::{LazyLock, RwLock};

/// An interned string.
///
/// Symbols are handed out by [`Symbol::intern`] and remain valid for the
/// lifetime of the process. Equality and ordering are by table index, so
/// two symbols are equal exactly when their texts are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

static_assertions::assert_eq_size!(Symbol, u32);

impl Symbol {
    /// Interns a string, returning its symbol.
    ///
    /// Interning the same text twice returns the same symbol.
    pub fn intern(string: &str) -> Self {
        TABLE.intern(string)
    }

    /// Returns the interned text.
    pub fn as_str(self) -> &'static str {
        TABLE.get(self)
    }

    /// Returns the raw table index.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The global string table.
static TABLE: LazyLock<StringTable> = LazyLock::new(StringTable::new);

/// Append-only table of interned strings.
///
/// Interned strings are boxed and leaked to obtain `'static` references;
/// the table lives for the whole process and entries are never removed, so
/// the leak is bounded by the number of distinct names seen.
struct StringTable {
    /// Text to index, for deduplicating interns.
    map: DashMap<&'static str, u32, RandomState>,

    /// Index to text, for `as_str`. Push-only, guarded for the rare write.
    strings: RwLock<Vec<&'static str>>,
}

impl StringTable {
    fn new() -> Self {
        Self {
            map: DashMap::with_hasher(RandomState::new()),
            strings: RwLock::new(Vec::new()),
        }
    }

    fn intern(&self, string: &str) -> Symbol {
        if let Some(index) = self.map.get(string) {
            return Symbol(*index);
        }

        // Writers serialize on the reverse table; re-check under the lock
        // so racing interns of the same new text agree on one index.
        let mut strings = self
            .strings
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(index) = self.map.get(string) {
            return Symbol(*index);
        }

        let leaked: &'static str = Box::leak(string.to_owned().into_boxed_str());
        let index = u32::try_from(strings.len()).expect("string table full");
        strings.push(leaked);
        self.map.insert(leaked, index);
        Symbol(index)
    }

    fn get(&self, symbol: Symbol) -> &'static str {
        let strings = self
            .strings
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        strings[symbol.0 as usize]
    }
}

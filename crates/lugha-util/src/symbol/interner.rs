use std::sync::{Mutex, OnceLock};

use rustc_hash::FxHashMap;

use super::Symbol;

/// A string interner backed by a growable arena of owned strings.
///
/// Kept deliberately simple: the pipeline this crate supports is
/// single-threaded end to end, so there is no need for sharded locks or
/// thread-local caches the way a concurrent compiler would want.
#[derive(Default)]
pub struct Interner {
    strings: Vec<String>,
    lookup: FxHashMap<String, Symbol>,
}

impl Interner {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `text`, returning its handle. Returns the existing handle
    /// if `text` was interned before.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(sym) = self.lookup.get(text) {
            return *sym;
        }
        let sym = Symbol::from_u32(self.strings.len() as u32);
        self.strings.push(text.to_owned());
        self.lookup.insert(text.to_owned(), sym);
        sym
    }

    /// Resolves a handle back to its text.
    ///
    /// # Panics
    ///
    /// Panics if `sym` was not produced by this interner.
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.as_u32() as usize]
    }
}

static GLOBAL: OnceLock<Mutex<Interner>> = OnceLock::new();

pub(crate) fn with_global<R>(f: impl FnOnce(&mut Interner) -> R) -> R {
    let lock = GLOBAL.get_or_init(|| Mutex::new(Interner::new()));
    let mut guard = lock.lock().expect("interner lock poisoned");
    f(&mut guard)
}

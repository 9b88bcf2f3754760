//! Thread-safe interner handle.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Interner, Symbol, SymbolTable};

/// Cloneable handle to an [`Interner`] shared between threads.
///
/// Backed by a single `RwLock` around the bidirectional map. Hits only take
/// the read lock; a novel string takes the write lock and re-checks, since
/// another thread may have inserted it in between.
#[derive(Debug, Clone, Default)]
pub struct SharedInterner {
    inner: Arc<RwLock<Interner>>,
}

impl SharedInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing interner, keeping all of its symbols.
    pub fn from_interner(interner: Interner) -> Self {
        Self {
            inner: Arc::new(RwLock::new(interner)),
        }
    }

    /// Thread-safe insert-or-lookup with read-lock fast path.
    pub fn intern(&self, s: &str) -> Symbol {
        {
            let inner = self.inner.read();
            if let Some(sym) = inner.lookup(s) {
                return sym;
            }
        }
        self.inner.write().intern(s)
    }

    pub fn lookup(&self, s: &str) -> Option<Symbol> {
        self.inner.read().lookup(s)
    }

    pub fn resolve(&self, sym: Symbol) -> Option<String> {
        self.inner.read().try_resolve(sym).map(str::to_owned)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copy of the current table contents.
    pub fn snapshot(&self) -> Interner {
        self.inner.read().clone()
    }
}

impl SymbolTable for SharedInterner {
    fn put(&mut self, s: &str) -> Symbol {
        self.intern(s)
    }

    fn get_id(&self, s: &str) -> Option<Symbol> {
        self.lookup(s)
    }

    fn get_string(&self, sym: Symbol) -> Option<String> {
        self.resolve(sym)
    }

    fn len(&self) -> usize {
        SharedInterner::len(self)
    }
}

/// Lets every thread intern through a plain shared reference.
impl SymbolTable for &SharedInterner {
    fn put(&mut self, s: &str) -> Symbol {
        self.intern(s)
    }

    fn get_id(&self, s: &str) -> Option<Symbol> {
        self.lookup(s)
    }

    fn get_string(&self, sym: Symbol) -> Option<String> {
        self.resolve(sym)
    }

    fn len(&self) -> usize {
        SharedInterner::len(self)
    }
}

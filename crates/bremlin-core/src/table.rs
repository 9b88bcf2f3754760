//! The symbol-table capability consumed by the internalizer.

use crate::Symbol;

/// Bidirectional string ⇄ [`Symbol`] mapping.
///
/// `put` is idempotent: the same string always yields the same symbol for
/// the lifetime of the table, and a symbol is never handed out for two
/// different strings.
pub trait SymbolTable {
    /// Insert-or-lookup.
    fn put(&mut self, s: &str) -> Symbol;

    fn get_id(&self, s: &str) -> Option<Symbol>;

    /// Owned, so that lock-guarded tables can hand the string out.
    fn get_string(&self, sym: Symbol) -> Option<String>;

    /// Number of distinct strings in the table.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: SymbolTable + ?Sized> SymbolTable for &mut T {
    fn put(&mut self, s: &str) -> Symbol {
        (**self).put(s)
    }

    fn get_id(&self, s: &str) -> Option<Symbol> {
        (**self).get_id(s)
    }

    fn get_string(&self, sym: Symbol) -> Option<String> {
        (**self).get_string(sym)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

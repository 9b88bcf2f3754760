#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Symbol interning for bremlin step chains.
//!
//! Identifier arguments of a parsed command (type iris, relationship iris,
//! field names) are replaced by [`Symbol`] handles before evaluation.
//! The evaluator only ever compares symbols, never strings.
//!
//! Two tables implement the [`SymbolTable`] capability:
//! - [`Interner`]: plain `HashMap` + `Vec`, for single-threaded use
//! - [`SharedInterner`]: cloneable `RwLock`-guarded handle, for tables shared
//!   by many parsing threads

mod interner;
mod shared;
mod table;


pub use interner::{Interner, Symbol};
pub use shared::SharedInterner;
pub use table::SymbolTable;

//! Grammar Modules
//!
//! Each module extends `Parser` with methods for specific grammar productions:
//!
//! - [`list`]: comma-separated lists, `[...]` brackets, identifiers
//! - [`ty`]: type expressions (`ptr T`, `[] T`, `[N] T`, `pkg.name[lo..hi]`)
//! - [`expr`]: operands, postfix chains and the one-level binary layer
//! - [`assert`]: assertions and `pre`/`inv`/`post` chains
//! - [`stmt`]: statements of function and loop bodies
//! - [`item`]: top-level declarations
//!
//! There is no operator precedence. A binary operator combines exactly two
//! operands, or folds a run of the same associative operator into one node;
//! anything else needs explicit parentheses.

mod assert;
mod expr;
mod item;
mod list;
mod stmt;
mod ty;

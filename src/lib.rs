//! Exhaustive solver for the 24 game.
//!
//! Given four integers, [`solve`] tries every expression tree over `+ - * /`
//! and reports the ones equal to the target. Expressions that differ only by
//! reordering or regrouping `+` and `*` are reported once, as a single
//! canonical form.
//!
//! The pipeline follows the modules: [`enumerate`] generates candidate
//! [`tree`]s, [`eval`] filters them, [`canon`] normalizes the survivors,
//! [`fingerprint`] packs each normal form into 16 bits and [`cache`] keeps
//! the fingerprints already reported.

pub mod cache;
pub mod canon;
pub mod enumerate;
pub mod error;
pub mod eval;
pub mod fingerprint;
pub mod input;
mod pool;
pub mod solver;
pub mod tree;

pub use error::{Error, Result};
pub use solver::{solve, Solution, Solver, DEFAULT_TARGET};
pub use tree::{Node, Op, Slot, SyntaxTree};

//! The error type for the solver's fallible surface: reading the input.
//!
//! Invalid arithmetic is not an error (it is an evaluation that yields
//! `None`), and broken internal invariants panic rather than surface here.

use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input ended before all four numbers were read.
    #[error("Input is malformed: expected 4 integers, found {found}")]
    TooFewNumbers { found: usize },

    /// A token in the input is not an integer.
    #[error("Input is malformed: number {position} ({token:?}) is not an integer: {source}")]
    Malformed {
        position: usize,
        token: String,
        source: ParseIntError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for configuration validation and the binomial counter.
//!
//! All errors are raised synchronously before generation begins; once a
//! configuration validates, enumeration itself cannot fail (the backtracking
//! bounds are derived arithmetically from validated sizes). Nothing here is
//! caught or retried internally — every error propagates to the caller with
//! a human-readable message.

use crate::constants::{PICK_SIZE, UNIVERSE_SIZE};
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
///
/// Callers that only care about the contract category (bad input vs. bad
/// arithmetic domain) can match on this instead of individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-supplied configuration is invalid.
    InvalidArgument,
    /// Binomial coefficient requested outside its domain.
    ArithmeticPrecondition,
}

/// Errors that can occur while validating a run configuration or computing
/// the expected combination count.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("required number {value} is outside the universe 1..={}", UNIVERSE_SIZE)]
    RequiredOutOfRange { value: i64 },

    #[error("required number {value} appears more than once")]
    DuplicateRequired { value: u8 },

    #[error("too many required numbers: {len} (maximum {})", PICK_SIZE)]
    TooManyRequired { len: usize },

    #[error("cannot parse required number {token:?}")]
    UnparseableNumber { token: String },

    #[error("rank window start must be at least 1")]
    WindowStartTooSmall,

    #[error("rank window count must be positive")]
    WindowCountZero,

    #[error("sample interval must be positive")]
    SampleIntervalZero,

    #[error("binomial coefficient undefined for n={n}, k={k}")]
    BinomialDomain { n: i64, k: i64 },
}

impl Error {
    /// Classify this error by contract category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BinomialDomain { .. } => ErrorKind::ArithmeticPrecondition,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

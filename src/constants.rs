// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the combination universe.
//!
//! The universe is fixed: combinations always draw [`PICK_SIZE`] numbers from
//! `1..=UNIVERSE_SIZE`. These are constants rather than runtime parameters
//! because every consumer of this crate works with the same 15-of-25 game;
//! the generator itself is generic and does not depend on them.

/// Size of the number universe. Valid numbers are `1..=UNIVERSE_SIZE`.
pub const UNIVERSE_SIZE: usize = 25;

/// How many numbers every complete combination contains.
pub const PICK_SIZE: usize = 15;

/// Default required numbers when none are configured.
pub const DEFAULT_REQUIRED: [u8; 2] = [1, 2];

/// Default step interval between instrumentation samples.
pub const DEFAULT_SAMPLE_INTERVAL: u64 = 10_000;

/// A complete combination: [`PICK_SIZE`] distinct numbers in ascending order,
/// always a superset of the configured required set.
pub type Combination = [u8; PICK_SIZE];

/// Compile-time assertion that the pick size fits in the universe.
const _: () = assert!(
    PICK_SIZE <= UNIVERSE_SIZE,
    "PICK_SIZE must not exceed UNIVERSE_SIZE"
);

/// Compile-time assertion that universe values fit in u8.
const _: () = assert!(UNIVERSE_SIZE <= u8::MAX as usize);

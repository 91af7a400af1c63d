// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Streaming enumerator for 15-of-25 number combinations.
//!
//! Enumerates every 15-element combination of the universe `1..=25`,
//! optionally pinning a required subset of numbers into every combination
//! and optionally surfacing only a contiguous rank window of the
//! lexicographic output. Long runs are observable through an
//! instrumentation sampler that records (elapsed-time, memory) pairs at
//! fixed step intervals.
//!
//! # Architecture
//!
//! The algorithmic core is a lazy backtracking cursor; everything else is
//! accounting around it:
//!
//! - [`generator`] — the backtracking cursor over k-subsets of the free
//!   pool, and the stream that merges the required numbers back in. Fully
//!   lazy: a consumer that stops pulling stops all further work, which is
//!   what makes billion-combination search spaces tractable to slice.
//! - [`binomial`] — exact `C(n, k)`, used to cross-check the streamed total
//!   against an independent count.
//! - [`config`] — validated configuration: [`config::RequiredSet`],
//!   [`config::RankWindow`], sample interval. All invariants are enforced
//!   here, before generation starts.
//! - [`sampler`] — periodic (elapsed, memory-MB) sampling with a pluggable
//!   memory probe and a guaranteed non-empty result.
//! - [`run`] — the orchestrator wiring configuration to generator, sampler,
//!   window filter, and final report.
//! - [`chart`] — collaborator seams: chart sink and GC event interfaces.
//!
//! # Example
//!
//! ```
//! use combigen::config::{RequiredSet, RunConfig};
//! use combigen::run::Orchestrator;
//! use combigen::sampler::FixedMemoryProbe;
//!
//! // Pin 13 numbers; only C(12, 2) = 66 combinations remain.
//! let required = RequiredSet::new(1..=13).unwrap();
//! let config = RunConfig::new(required, None, 10_000).unwrap();
//!
//! let mut total = 0u64;
//! let report = Orchestrator::new(config)
//!     .run_with_probe(Box::new(FixedMemoryProbe(0)), |_, _| total += 1)
//!     .unwrap();
//!
//! assert_eq!(total, 66);
//! assert_eq!(report.generated, report.expected);
//! ```

pub mod binomial;
pub mod chart;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod run;
pub mod sampler;

// Re-export commonly used types
pub use config::{RankWindow, RequiredSet, RunConfig};
pub use constants::{Combination, PICK_SIZE, UNIVERSE_SIZE};
pub use error::{Error, ErrorKind, Result};
pub use run::{Orchestrator, RunReport};

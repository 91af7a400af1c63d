// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The run orchestrator: configuration in, combinations and a report out.
//!
//! Wiring only — the algorithmic work lives in [`crate::generator`]. The
//! orchestrator derives the free pool from the validated configuration,
//! drives the combination stream, feeds every generation step to the
//! sampler, applies the optional rank window, and cross-checks the streamed
//! total against the independently computed binomial count.
//!
//! # Rank window semantics
//!
//! The window is a streaming filter, not an index jump: positions before the
//! window are still generated (and sampled), only forwarding to the consumer
//! is suppressed. Once the position passes the window end the orchestrator
//! stops consuming, and the lazy cursor generates nothing further. Jumping
//! straight to the window start via combinatorial unranking would skip the
//! prefix entirely; that optimization is deliberately not taken, to keep the
//! instrumentation's view of a run identical with and without a window.

use crate::binomial::binomial;
use crate::config::RunConfig;
use crate::constants::Combination;
use crate::error::Result;
use crate::generator::CombinationStream;
use crate::sampler::{MemoryProbe, ProcessMemoryProbe, SampleSeries, Sampler};

/// Final accounting for one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Combinations forwarded to the consumer (in-window positions).
    pub forwarded: u64,
    /// Free subsets actually generated before consumption stopped.
    pub generated: u64,
    /// Expected unfiltered total, `C(25 - r, 15 - r)`, computed without
    /// enumeration. Equals `generated` when no window is configured.
    pub expected: u64,
    /// Instrumentation series; never empty.
    pub samples: SampleSeries,
}

/// Drives one enumeration run from a validated [`RunConfig`].
pub struct Orchestrator {
    config: RunConfig,
}

impl Orchestrator {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// The unfiltered combination count this configuration would produce.
    pub fn expected_total(&self) -> Result<u64> {
        let free = self.config.required.free_pool().len() as i64;
        let k_free = self.config.required.k_free() as i64;
        binomial(free, k_free)
    }

    /// Run with the process memory probe.
    ///
    /// `consumer` receives each surfaced combination along with its 1-based
    /// position in generation order.
    pub fn run(&self, consumer: impl FnMut(u64, &Combination)) -> Result<RunReport> {
        self.run_with_probe(Box::new(ProcessMemoryProbe::new()), consumer)
    }

    /// Run with an explicit memory probe (tests substitute a fixed one).
    pub fn run_with_probe(
        &self,
        probe: Box<dyn MemoryProbe>,
        mut consumer: impl FnMut(u64, &Combination),
    ) -> Result<RunReport> {
        let expected = self.expected_total()?;

        let required = self.config.required.as_slice().to_vec();
        let free_pool = self.config.required.free_pool();
        let k_free = self.config.required.k_free();

        let mut sampler = Sampler::new(self.config.sample_interval, probe);
        let stream = CombinationStream::new(required, free_pool, k_free);

        let mut generated: u64 = 0;
        let mut forwarded: u64 = 0;

        for combination in stream {
            generated += 1;
            sampler.observe_step(generated);

            match self.config.window {
                None => {
                    forwarded += 1;
                    consumer(generated, &combination);
                }
                Some(window) => {
                    if window.contains(generated) {
                        forwarded += 1;
                        consumer(generated, &combination);
                    }
                    if generated >= window.end() {
                        // Window closed: stop consuming. The cursor is lazy,
                        // so nothing past this point is ever generated.
                        break;
                    }
                }
            }
        }

        Ok(RunReport {
            forwarded,
            generated,
            expected,
            samples: sampler.finish(),
        })
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Instrumentation sampling for long-running enumeration.
//!
//! The sampler records an `(elapsed_seconds, memory_MB)` pair every
//! `sample_interval` generated subsets, kept as two index-aligned vectors so
//! a chart consumer can plot them directly. The memory figure comes from a
//! [`MemoryProbe`], so tests can substitute a fixed probe and the process
//! probe stays a collaborator detail.
//!
//! # Post-run guarantee
//!
//! A run shorter than one interval would otherwise record nothing, and a
//! chart consumer must never receive empty series. [`Sampler::finish`]
//! records one final sample in that case, using the total elapsed time and
//! current memory.

use std::time::Instant;

use log::info;
use sysinfo::{Pid, PidExt, ProcessExt, ProcessRefreshKind, RefreshKind, System, SystemExt};

/// Source of the current memory consumption in megabytes.
///
/// The returned figure is best-effort; the only contract is a non-negative
/// integer. Implementations must not fail — a probe that cannot read memory
/// reports 0.
pub trait MemoryProbe {
    fn memory_mb(&mut self) -> u64;
}

/// Memory probe reading the current process's resident memory via sysinfo.
pub struct ProcessMemoryProbe {
    system: System,
    pid: Pid,
}

impl ProcessMemoryProbe {
    pub fn new() -> Self {
        let refresh = RefreshKind::new().with_processes(ProcessRefreshKind::new());
        Self {
            system: System::new_with_specifics(refresh),
            pid: Pid::from_u32(std::process::id()),
        }
    }
}

impl Default for ProcessMemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProbe for ProcessMemoryProbe {
    fn memory_mb(&mut self) -> u64 {
        self.system.refresh_process(self.pid);
        self.system
            .process(self.pid)
            .map(|p| p.memory() / (1024 * 1024))
            .unwrap_or(0)
    }
}

/// Memory probe returning a constant value. Test collaborator.
pub struct FixedMemoryProbe(pub u64);

impl MemoryProbe for FixedMemoryProbe {
    fn memory_mb(&mut self) -> u64 {
        self.0
    }
}

/// Two index-aligned series: elapsed seconds and memory megabytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    pub elapsed_secs: Vec<f64>,
    pub memory_mb: Vec<u64>,
}

impl SampleSeries {
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.elapsed_secs.len(), self.memory_mb.len());
        self.elapsed_secs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elapsed_secs.is_empty()
    }
}

/// Records instrumentation samples at fixed step intervals.
///
/// The orchestrator calls [`observe_step`](Sampler::observe_step) exactly
/// once per generated subset, so a sample is taken at most once per distinct
/// step value.
pub struct Sampler {
    start: Instant,
    interval: u64,
    series: SampleSeries,
    probe: Box<dyn MemoryProbe>,
}

impl Sampler {
    /// Start a sampler; the elapsed-time origin is now.
    ///
    /// `interval` must be positive (enforced by configuration validation).
    pub fn new(interval: u64, probe: Box<dyn MemoryProbe>) -> Self {
        debug_assert!(interval > 0);
        Self {
            start: Instant::now(),
            interval,
            series: SampleSeries::default(),
            probe,
        }
    }

    /// Observe one generation step; records a sample on interval multiples.
    pub fn observe_step(&mut self, step: u64) {
        if step % self.interval == 0 {
            self.record(step);
        }
    }

    /// Samples recorded so far.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Finish the run and hand over the series.
    ///
    /// If no sample was recorded during generation, records exactly one
    /// using the total elapsed time, so consumers never see empty series.
    pub fn finish(mut self) -> SampleSeries {
        if self.series.is_empty() {
            self.record(0);
        }
        self.series
    }

    fn record(&mut self, step: u64) {
        let elapsed = self.start.elapsed().as_secs_f64();
        let memory = self.probe.memory_mb();
        self.series.elapsed_secs.push(elapsed);
        self.series.memory_mb.push(memory);
        info!("step {step}: {memory} MB after {elapsed:.3}s");
    }
}

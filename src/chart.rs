// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! External collaborator interfaces: chart rendering and GC event records.
//!
//! The core's obligation ends at producing well-formed, non-empty,
//! index-aligned sample series; what a consumer does with them is its own
//! concern. This module defines those seams as traits plus a console
//! implementation that summarizes the series through the logger.
//!
//! GC events exist only as a record shape and sink trait: the original host
//! runtime emitted collector notifications, but nothing in this crate
//! produces them. A chart implementation may accept them as an optional
//! overlay series.

use log::info;

use crate::sampler::SampleSeries;

/// One garbage-collection event as reported by a host runtime's collector.
///
/// Produced externally; the core only defines the shape and passes records
/// through to consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct GcEvent {
    /// Seconds since an arbitrary origin chosen by the producer.
    pub timestamp_secs: f64,
    pub action: String,
    pub cause: String,
    pub duration_ms: u64,
    pub used_before_mb: u64,
    pub used_after_mb: u64,
}

/// Receiver of GC event records.
pub trait GcSink {
    fn record(&mut self, event: GcEvent);
}

/// Collects GC events into a vector. Useful for tests and for building a
/// chart overlay at end of run.
#[derive(Debug, Default)]
pub struct GcLog {
    pub events: Vec<GcEvent>,
}

impl GcLog {
    /// `(time, memory-after)` points for a chart overlay.
    pub fn overlay_points(&self) -> Vec<(f64, u64)> {
        self.events
            .iter()
            .map(|e| (e.timestamp_secs, e.used_after_mb))
            .collect()
    }
}

impl GcSink for GcLog {
    fn record(&mut self, event: GcEvent) {
        self.events.push(event);
    }
}

/// Consumer of the instrumentation series at end of run.
pub trait ChartSink {
    /// Render the memory-over-time series, optionally with GC event points
    /// overlaid. `series` is guaranteed non-empty and index-aligned.
    fn render(&mut self, series: &SampleSeries, gc_overlay: Option<&[(f64, u64)]>);
}

/// Chart sink that logs a text summary instead of drawing anything.
#[derive(Debug, Default)]
pub struct ConsoleChart;

impl ChartSink for ConsoleChart {
    fn render(&mut self, series: &SampleSeries, gc_overlay: Option<&[(f64, u64)]>) {
        let peak = series.memory_mb.iter().copied().max().unwrap_or(0);
        let last = series.elapsed_secs.last().copied().unwrap_or(0.0);
        info!(
            "memory over time: {} samples across {last:.3}s, peak {peak} MB",
            series.len()
        );
        for (t, mb) in series.elapsed_secs.iter().zip(&series.memory_mb) {
            info!("  {t:>10.3}s  {mb:>6} MB");
        }
        if let Some(points) = gc_overlay {
            info!("gc overlay: {} events", points.len());
        }
    }
}

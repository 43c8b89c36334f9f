//! Metrics hooks for facade operations
//!
//! ## Usage
//!
//! ```ignore
//! use ef_02_facade_builder::{FacadeBuilder, FacadeMetrics};
//!
//! let metrics = Arc::new(FacadeMetrics::new());
//! let facade_type = FacadeBuilder::new(factory)
//!     .synthesis(table)
//!     .metrics(metrics.clone())
//!     .build()?;
//!
//! let facade = facade_type.construct(&[])?;
//! println!("{:?}", metrics.snapshot());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Kind of forwarded operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardOp {
    Get,
    Set,
    Call,
}

/// Thread-safe counters for facade operations
#[derive(Debug, Default)]
pub struct FacadeMetrics {
    /// Successful constructions
    pub constructions: AtomicU64,
    /// Constructions that failed in the factory or while installing callbacks
    pub construction_failures: AtomicU64,
    /// Forwarded accessor reads
    pub forwarded_gets: AtomicU64,
    /// Forwarded accessor writes
    pub forwarded_sets: AtomicU64,
    /// Forwarded method calls
    pub forwarded_calls: AtomicU64,
    /// Forwarded operations the wrapped object rejected
    pub forwarding_failures: AtomicU64,
    /// Native callbacks turned into events
    pub native_events: AtomicU64,
}

impl FacadeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> FacadeMetricsSnapshot {
        FacadeMetricsSnapshot {
            constructions: self.constructions.load(Ordering::Relaxed),
            construction_failures: self.construction_failures.load(Ordering::Relaxed),
            forwarded_gets: self.forwarded_gets.load(Ordering::Relaxed),
            forwarded_sets: self.forwarded_sets.load(Ordering::Relaxed),
            forwarded_calls: self.forwarded_calls.load(Ordering::Relaxed),
            forwarding_failures: self.forwarding_failures.load(Ordering::Relaxed),
            native_events: self.native_events.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time facade counters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacadeMetricsSnapshot {
    pub constructions: u64,
    pub construction_failures: u64,
    pub forwarded_gets: u64,
    pub forwarded_sets: u64,
    pub forwarded_calls: u64,
    pub forwarding_failures: u64,
    pub native_events: u64,
}

/// Trait for recording facade metrics
pub trait MetricsRecorder: Send + Sync {
    /// Record one construction attempt
    fn record_construction(&self, succeeded: bool);

    /// Record one forwarded operation
    fn record_forward(&self, op: ForwardOp, succeeded: bool);

    /// Record one native callback delivered as an event
    fn record_native_event(&self, kind: &str);
}

impl MetricsRecorder for FacadeMetrics {
    fn record_construction(&self, succeeded: bool) {
        let counter = if succeeded {
            &self.constructions
        } else {
            &self.construction_failures
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn record_forward(&self, op: ForwardOp, succeeded: bool) {
        let counter = match op {
            ForwardOp::Get => &self.forwarded_gets,
            ForwardOp::Set => &self.forwarded_sets,
            ForwardOp::Call => &self.forwarded_calls,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        if !succeeded {
            self.forwarding_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn record_native_event(&self, _kind: &str) {
        self.native_events.fetch_add(1, Ordering::Relaxed);
    }
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_construction(&self, _: bool) {}
    fn record_forward(&self, _: ForwardOp, _: bool) {}
    fn record_native_event(&self, _: &str) {}
}

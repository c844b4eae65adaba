//! Engine-agnostic trace metrics: per-trace counters and pass timings.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when disabled.
//!
//! # Usage
//!
//! ```ignore
//! use quad_contour::metrics::{TraceMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! metrics.record_curve(true, false);
//! metrics.record_pass1_timing(120);
//! ```

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  /// Create a new rolling window with the given capacity.
  pub fn new(capacity: usize) -> Self {
    Self { buffer: VecDeque::with_capacity(capacity), capacity }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: T) {
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  /// Get the number of values in the window.
  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  /// Check if the window is empty.
  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  /// Clear all values.
  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  /// Iterate over values (oldest to newest).
  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.buffer.iter()
  }

  /// Get the most recent value.
  pub fn last(&self) -> Option<&T> {
    self.buffer.back()
  }
}

impl<T: Copy + Default + std::ops::Add<Output = T>> RollingWindow<T> {
  /// Compute the sum of all values.
  pub fn sum(&self) -> T {
    self.buffer.iter().copied().fold(T::default(), |acc, x| acc + x)
  }
}

impl RollingWindow<u64> {
  /// Compute the average of all values.
  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.sum() as f64 / self.buffer.len() as f64
    }
  }

  /// Get min and max values.
  pub fn min_max(&self) -> Option<(u64, u64)> {
    if self.buffer.is_empty() {
      None
    } else {
      let min = *self.buffer.iter().min().unwrap();
      let max = *self.buffer.iter().max().unwrap();
      Some((min, max))
    }
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    Self::new(128)
  }
}

/// Per-trace statistics, updated once per `Session::trace` call.
#[derive(Debug, Clone)]
pub struct TraceMetrics {
  /// Curves that closed cleanly (code 3).
  pub curves_closed: u64,
  /// Curves that ended as a line-mode or unresolved-pass-1 open end.
  pub curves_open: u64,
  /// Curves that required a slit join to reach the enclosing curve.
  pub curves_slit_joined: u64,

  /// Points emitted during pass 1 (topology sizing, `|n|` summed over curves).
  pub points_pass1: u64,
  /// Points emitted during pass 2 (coordinate output).
  pub points_pass2: u64,

  /// Rolling window of pass 1 wall-clock times in microseconds.
  pub pass1_timings: RollingWindow<u64>,
  /// Rolling window of pass 2 wall-clock times in microseconds.
  pub pass2_timings: RollingWindow<u64>,
  /// Rolling window of reorder wall-clock times in microseconds.
  pub reorder_timings: RollingWindow<u64>,
  /// Rolling window of full-trace (init + pass 1 + pass 2 + reorder) times.
  pub trace_timings: RollingWindow<u64>,

  /// Last full-trace time in microseconds, for UI-style snapshots.
  pub last_trace_us: u64,
  /// Total traces run this session.
  pub total_traces: u64,
}

impl Default for TraceMetrics {
  fn default() -> Self {
    Self {
      curves_closed: 0,
      curves_open: 0,
      curves_slit_joined: 0,
      points_pass1: 0,
      points_pass2: 0,
      pass1_timings: RollingWindow::new(128),
      pass2_timings: RollingWindow::new(128),
      reorder_timings: RollingWindow::new(128),
      trace_timings: RollingWindow::new(128),
      last_trace_us: 0,
      total_traces: 0,
    }
  }
}

impl TraceMetrics {
  /// Create new metrics with default values.
  pub fn new() -> Self {
    Self::default()
  }

  /// Reset all metrics to zero.
  pub fn reset(&mut self) {
    self.curves_closed = 0;
    self.curves_open = 0;
    self.curves_slit_joined = 0;
    self.points_pass1 = 0;
    self.points_pass2 = 0;
    self.pass1_timings.clear();
    self.pass2_timings.clear();
    self.reorder_timings.clear();
    self.trace_timings.clear();
    self.last_trace_us = 0;
    // total_traces is cumulative, not reset.
  }

  /// Record one curve's disposition, as decided by pass 1.
  pub fn record_curve(&mut self, closed: bool, slit_joined: bool) {
    if !is_enabled() {
      return;
    }
    if slit_joined {
      self.curves_slit_joined += 1;
    } else if closed {
      self.curves_closed += 1;
    } else {
      self.curves_open += 1;
    }
  }

  /// Record the total point count a pass produced.
  pub fn record_points(&mut self, pass1: u64, pass2: u64) {
    if !is_enabled() {
      return;
    }
    self.points_pass1 += pass1;
    self.points_pass2 += pass2;
  }

  pub fn record_pass1_timing(&mut self, timing_us: u64) {
    if is_enabled() {
      self.pass1_timings.push(timing_us);
    }
  }

  pub fn record_pass2_timing(&mut self, timing_us: u64) {
    if is_enabled() {
      self.pass2_timings.push(timing_us);
    }
  }

  pub fn record_reorder_timing(&mut self, timing_us: u64) {
    if is_enabled() {
      self.reorder_timings.push(timing_us);
    }
  }

  /// Record one full trace's wall-clock time and bump the session total.
  pub fn record_trace_timing(&mut self, timing_us: u64) {
    if !is_enabled() {
      return;
    }
    self.total_traces += 1;
    self.trace_timings.push(timing_us);
    self.last_trace_us = timing_us;
  }

  /// Average full-trace time in microseconds over the rolling window.
  pub fn avg_trace_timing_us(&self) -> f64 {
    self.trace_timings.average()
  }
}

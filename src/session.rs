//! Public entry point: construct a session over one mesh, then trace it for
//! one or more `(z0, z1)` level pairs (spec.md §6).

use std::time::Instant;

use crate::driver;
use crate::error::ContourError;
use crate::initializer;
use crate::region;
use crate::reorder;
use crate::state::{SaddleCache, StateGrid};
use crate::tracer::TraceCtx;
use crate::types::{Levels, Part, Scalar, TraceConfig, TraceOutput};
use crate::mesh::Mesh;

#[cfg(feature = "metrics")]
use crate::metrics::TraceMetrics;

/// A contour-tracing session over one immutable mesh. Re-traceable: call
/// [`Session::trace`] repeatedly with different levels without rebuilding
/// the session (spec.md §3 Lifecycle).
pub struct Session {
  mesh: Mesh,
  reg: Option<Vec<u8>>,
  #[cfg(feature = "metrics")]
  pub metrics: TraceMetrics,
}

impl Session {
  /// Validate shapes and derive `reg` from an optional mask. Chunk sizes
  /// live on [`TraceConfig`] and are supplied per-call to `trace`, since
  /// spec.md §3 allows re-tracing the same session at different chunk
  /// sizes without reconstructing it.
  pub fn new(
    imax: usize,
    jmax: usize,
    x: Vec<Scalar>,
    y: Vec<Scalar>,
    z: Vec<Scalar>,
    mask: Option<Vec<bool>>,
  ) -> Result<Self, ContourError> {
    let mesh = Mesh::new(imax, jmax, x, y, z)?;

    let reg = match mask {
      Some(mask) => {
        if mask.len() != imax * jmax {
          return Err(ContourError::MaskShapeMismatch);
        }
        Some(region::mask_zones(imax, jmax, &mask))
      }
      None => None,
    };

    Ok(Self {
      mesh,
      reg,
      #[cfg(feature = "metrics")]
      metrics: TraceMetrics::new(),
    })
  }

  /// Trace one iso-level (`z1 = None`, line mode) or a filled strip between
  /// two levels (`z1 = Some(..)`, filled mode when `z0 != z1`).
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "session::trace"))]
  pub fn trace(&mut self, z0: Scalar, z1: Option<Scalar>, config: &TraceConfig) -> Result<TraceOutput, ContourError> {
    let trace_start = Instant::now();

    if !z0.is_finite() {
      return Err(ContourError::NonFiniteLevel);
    }
    let z1 = z1.unwrap_or(z0);
    if !z1.is_finite() {
      return Err(ContourError::NonFiniteLevel);
    }
    if z1 < z0 {
      return Err(ContourError::InvalidLevelOrder);
    }
    let levels = if z0 == z1 { Levels::Line(z0) } else { Levels::Filled(z0, z1) };
    let two_levels = levels.is_filled();

    let chunks = initializer::normalize_chunk_sizes(
      config.i_chunk_size,
      config.j_chunk_size,
      self.mesh.imax,
      self.mesh.jmax,
      levels,
    );
    let init = initializer::initialize(&self.mesh, levels, self.reg.as_deref(), chunks);

    let mut grid: StateGrid = init.grid;
    let mut saddle = SaddleCache::new(self.mesh.imax, self.mesh.jmax);
    let mut ctx =
      TraceCtx { mesh: &self.mesh, grid: &mut grid, saddle: &mut saddle, z0: levels.z0(), z1: levels.z1(), two_levels, count: init.count };

    let pass1_start = Instant::now();
    let sizes = {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("pass1_topology").entered();
      driver::run_pass1(&mut ctx)
    };
    let pass1_us = pass1_start.elapsed().as_micros() as u64;

    let pass2_start = Instant::now();
    let emitted = {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("pass2_emit").entered();
      driver::run_pass2(&mut ctx, &sizes)
    };
    let pass2_us = pass2_start.elapsed().as_micros() as u64;

    let reorder_start = Instant::now();
    let mut parts = Vec::with_capacity(sizes.len());
    let mut raw_all = if config.all_kinds { Some(Vec::new()) } else { None };
    {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("reorder").entered();
      for (size, part) in sizes.iter().zip(emitted.iter()) {
        let np = size.n.unsigned_abs() as usize;
        let subpaths = reorder::build_part(&part.points, np, two_levels)?;
        if let Some(raw) = raw_all.as_mut() {
          raw.extend_from_slice(&part.points);
        }
        parts.push(Part { subpaths });
      }
    }
    let reorder_us = reorder_start.elapsed().as_micros() as u64;

    #[cfg(feature = "metrics")]
    {
      for size in &sizes {
        self.metrics.record_curve(size.n >= 0, false);
      }
      let points1: u64 = sizes.iter().map(|s| s.n.unsigned_abs()).sum();
      let points2: u64 = emitted.iter().map(|e| e.points.len() as u64).sum();
      self.metrics.record_points(points1, points2);
      self.metrics.record_pass1_timing(pass1_us);
      self.metrics.record_pass2_timing(pass2_us);
      self.metrics.record_reorder_timing(reorder_us);
      self.metrics.record_trace_timing(trace_start.elapsed().as_micros() as u64);
    }
    #[cfg(not(feature = "metrics"))]
    {
      let _ = (pass1_us, pass2_us, reorder_us, trace_start);
    }

    Ok(TraceOutput { parts, raw: raw_all })
  }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

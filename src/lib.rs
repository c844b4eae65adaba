//! quad_contour - structured-quad contour tracing (Mpl2005 state machine)
//!
//! A framework-independent port of the classical edge-based, two-pass
//! contour tracer for structured quadrilateral meshes: given a mesh of
//! `(x, y, z)` samples laid out on an `imax x jmax` grid, trace either a
//! single iso-level (line mode) or the filled region between two levels
//! (filled mode) into polygon paths.
//!
//! # Example
//!
//! ```ignore
//! use quad_contour::{Session, TraceConfig};
//!
//! let (imax, jmax) = (3, 3);
//! let mut x = Vec::new();
//! let mut y = Vec::new();
//! let mut z = Vec::new();
//! for j in 0..jmax {
//!     for i in 0..imax {
//!         x.push(i as f64);
//!         y.push(j as f64);
//!         z.push((i + j) as f64);
//!     }
//! }
//!
//! let mut session = Session::new(imax, jmax, x, y, z, None).unwrap();
//! let output = session.trace(2.0, None, &TraceConfig::new()).unwrap();
//! println!("traced {} part(s)", output.parts.len());
//! ```

pub mod constants;
pub mod driver;
pub mod error;
pub mod initializer;
pub mod mesh;
pub mod metrics;
pub mod region;
pub mod reorder;
pub mod session;
pub mod site;
pub mod state;
pub mod tracer;
pub mod types;

pub use error::ContourError;
pub use mesh::Mesh;
pub use session::Session;
pub use types::{LevelSide, Levels, LineType, PathCode, Part, Point, PointKind, RawPoint, Scalar, Subpath, TraceConfig, TraceOutput};

//! motionscope: a real-time charting engine for animation debug overlays.
//!
//! The crate accumulates a live stream of `(time, value, velocity?)` samples,
//! computes an adaptive data-to-screen mapping with an optional sliding time
//! window, and produces a backend-agnostic list of draw primitives. Executing
//! those primitives is the embedding application's responsibility.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{GraphSurface, GraphSurfaceConfig};
pub use error::{GraphError, GraphResult};

//! Directional pad model
//!
//! A pad is a rectangular touch area that reports how far a finger reaches
//! toward each of the directions it was built with. Its visual feedback is a
//! stack of rounded planes that rise from the full bounds toward a smaller
//! "peak" region following the finger.
//!
//! 1. [`directions`] - Direction flags and per-axis behavior
//! 2. [`control`] - Touch handling, values and geometry
//! 3. [`session`] - Idle/Active touch state machine
//! 4. [`scene`] - Shape descriptors and the return-to-rest animation
//!
//! # Flow
//!
//! ```text
//! touch ──► PadControl ──► ValueChanged ──► host polls values
//!               │
//!               └──► PadScene ──► PlaneAnimator ──► host paints
//! ```
//!
//! Everything runs on the host's UI thread; nothing here blocks or spawns.

pub mod control;
pub mod directions;
pub mod geometry;
pub mod scene;
pub mod session;

pub use control::{Elevation, PadControl, PadValues, TouchKind, ValueChanged};
pub use directions::{Axis, AxisMode, Direction, DirectionSet};
pub use geometry::{Point, Rect, Size};
pub use scene::{DotShape, PadScene, PlaneAnimator, PlaneShape};
pub use session::TouchId;

/// Errors raised while building or laying out a pad
#[derive(Debug, thiserror::Error)]
pub enum PadError {
    /// A pad needs at least one plane to draw
    #[error("Pad needs at least one plane")]
    NoPlanes,

    #[error("Invalid bounds: {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },

    /// A tuning value would let the peak outgrow the bounds
    #[error("Invalid pad setting {name} = {value}")]
    InvalidSettings { name: &'static str, value: f64 },
}

//! Touch-driven directional pad control.
//!
//! [`pad`] holds the toolkit-independent model: direction flags, the touch
//! state machine, value reporting and plane geometry. [`ui`] hosts pads in an
//! egui app, and [`config`] loads tuning values and the demo layout.

pub mod config;
pub mod pad;
pub mod ui;

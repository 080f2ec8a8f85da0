//! Interactive sine-curve graph.
//!
//! The curve is sampled into a fixed-size polyline, projected onto a padded
//! pixel canvas, and reshaped by dragging it: horizontally to change how many
//! periods are visible, vertically to change the amplitude. Everything here is
//! independent of a windowing toolkit; the binary wires it to `nannou`.
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | [`CurveWidget`]: paint and pointer handlers |
//! | [`curve`] | Parameters, canvas and the sampling projections |
//! | [`hit`] | Point-near-curve test |
//! | [`drag`] | Press/move/release state machine |
//! | [`line_segment`], [`pos`] | Screen-space geometry |
//! | [`config`] | Command line options of the host |
//! | [`consts`] | Fixed numeric constants |

pub mod config;
pub mod consts;
pub mod curve;
pub mod drag;
pub mod hit;
pub mod line_segment;
pub mod pos;
pub mod widget;

pub use curve::{Canvas, CurveParameters, SamplePoint};
pub use drag::DragState;
pub use pos::Pos;
pub use widget::{Color, CurveWidget, DrawCall, PointerButton, Stroke};

//! # Gauge Module
//!
//! Circular savings-goal gauge: a grey ring with a filled slice whose sweep is
//! proportional to goal progress, plus the percentage and a caption.
//!
//! ## Key Components:
//! - `geometry.rs` - Gauge configuration and sweep-angle math
//! - `renderer.rs` - Records the gauge shapes onto a [`Canvas`](super::canvas::Canvas)

pub mod geometry;
pub mod renderer;

pub use renderer::GaugeRenderer;

//! # UI Components Module
//!
//! This module organizes all UI components for the finance dashboard.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `canvas` - Retained drawing surface that charts draw into
//! - `gauge` - Savings goal progress gauge
//! - `line_chart` - Monthly spending trend
//! - `bar_chart` - Stacked category expenses with legend
//! - `input_form` - Amount inputs and the update button
//! - `metric_panels` - Colored metric summary boxes
//! - `dashboard_refresh` - Parse, compute and redraw cycle
//! - `styling` / `theme` - Global style and color constants

pub mod bar_chart;
pub mod canvas;
pub mod dashboard_refresh;
pub mod gauge;
pub mod input_form;
pub mod line_chart;
pub mod metric_panels;
pub mod styling;
pub mod theme;

pub use styling::setup_dashboard_style;

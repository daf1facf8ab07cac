//! # State Module
//!
//! Application state split by concern:
//! - `form_state` - raw input text and the last validation errors
//! - `metrics_state` - formatted metric panel text
//! - `chart_state` - retained chart canvases
//! - `ui_state` - user feedback messages

pub mod chart_state;
pub mod form_state;
pub mod metrics_state;
pub mod ui_state;

pub use chart_state::ChartState;
pub use form_state::FormState;
pub use metrics_state::{MetricKind, MetricLabels};
pub use ui_state::UIState;

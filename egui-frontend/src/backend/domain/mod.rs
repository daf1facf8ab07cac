pub mod formatting;
pub mod input_service;
pub mod metrics_service;
pub mod sample_data_service;

pub use formatting::{format_currency, format_percent};
pub use input_service::{InputErrors, InputService};
pub use metrics_service::{MetricsError, MetricsService};
pub use sample_data_service::SampleDataService;

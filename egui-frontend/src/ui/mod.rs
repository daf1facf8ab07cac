pub mod components;
pub mod state;
pub mod app_state;
pub mod app_coordinator;

pub use components::*;
pub use app_state::*;

//! Dashboard screen
//!
//! State fed by the controller's board and events, plus the components that draw it

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::DashboardState;

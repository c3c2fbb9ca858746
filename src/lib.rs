// src/lib.rs

pub mod api;
pub mod audio;
pub mod classifier;
pub mod config;
pub mod pipeline;
pub mod simplify;
pub mod state;

// Export commonly used items
pub use config::CONFIG;
pub use state::AppState;

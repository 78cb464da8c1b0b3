pub mod cli;
pub mod config;
pub mod picker;
pub mod state_manager;

pub use cli::*;
pub use config::*;
pub use picker::*;
pub use state_manager::*;

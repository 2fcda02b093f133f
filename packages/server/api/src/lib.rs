pub mod config;
pub mod handlers;
pub mod router;
pub mod services;
pub mod state;

pub use config::ServerConfig;
pub use router::app;
pub use state::AppState;

pub mod config;
pub mod edit;

pub use config::ServerConfig;
pub use edit::Edit;

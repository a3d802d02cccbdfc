pub mod config;
pub mod hh;

pub use config::SourceConfig;
pub use hh::HhClient;

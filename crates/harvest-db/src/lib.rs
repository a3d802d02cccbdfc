pub mod config;
pub mod database;
pub mod error;
pub mod loader;
pub mod queries;
pub mod schema;

pub use config::DbConfig;
pub use database::Database;
pub use loader::Loader;
pub use queries::VacancyRepository;

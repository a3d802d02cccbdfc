use harvest_core::AppError;
use harvest_core::util::parse_id_list;

use crate::hh::DEFAULT_BASE_URL;

/// Employers loaded when `HH_EMPLOYER_IDS` is not set.
pub const DEFAULT_EMPLOYER_IDS: &[&str] = &[
    "1740",   // Yandex
    "3529",   // Sber
    "78638",  // T-Bank
    "15478",  // VK
    "2180",   // Ozon
    "1057",   // Kaspersky
    "84585",  // Avito
    "64174",  // 2GIS
    "87021",  // Wildberries
    "4181",   // VTB
];

/// Configuration for the job-board source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub base_url: String,
    /// Employers to load, in load order.
    pub employer_ids: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            employer_ids: DEFAULT_EMPLOYER_IDS.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl SourceConfig {
    /// Read configuration from environment variables.
    ///
    /// - `HH_BASE_URL` (optional, defaults to `https://api.hh.ru`)
    /// - `HH_EMPLOYER_IDS` (optional, comma-separated, defaults to [`DEFAULT_EMPLOYER_IDS`])
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup("HH_BASE_URL") {
            config.base_url = base_url;
        }

        if let Some(raw) = lookup("HH_EMPLOYER_IDS") {
            let ids = parse_id_list(&raw);
            if ids.is_empty() {
                return Err(AppError::ConfigError(format!(
                    "Invalid HH_EMPLOYER_IDS '{raw}': expected a comma-separated list of employer ids"
                )));
            }
            config.employer_ids = ids;
        }

        Ok(config)
    }
}

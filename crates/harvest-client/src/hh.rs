use harvest_core::error::AppError;
use harvest_core::models::{EmployerRecord, VacancyPage, VacancyRecord};
use harvest_core::traits::{EmployerSource, VACANCIES_PER_PAGE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";

/// hh.ru rejects requests without an identifying User-Agent.
const USER_AGENT: &str = "Harvest/0.1 (vacancy loader)";

/// Job-board API client for hh.ru.
///
/// One request per call, no retries and no timeout: any transport error or
/// non-success status surfaces as [`AppError::SourceUnavailable`].
#[derive(Clone)]
pub struct HhClient {
    client: Client,
    base_url: Url,
}

impl HhClient {
    pub fn new() -> Result<Self, AppError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| AppError::ConfigError(format!("Invalid API base URL '{base_url}': {e}")))?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AppError::ConfigError(format!(
                    "API base URL scheme '{scheme}' is not allowed (only http/https)"
                )));
            }
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::SourceUnavailable(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn employer_url(&self, employer_id: &str) -> Result<Url, AppError> {
        self.endpoint(&["employers", employer_id])
    }

    fn vacancies_url(&self, employer_id: &str) -> Result<Url, AppError> {
        let mut url = self.endpoint(&["vacancies"])?;
        url.query_pairs_mut()
            .append_pair("employer_id", employer_id)
            .append_pair("per_page", &VACANCIES_PER_PAGE.to_string());
        Ok(url)
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::ConfigError(format!("API base URL '{}' cannot have a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AppError::SourceUnavailable(format!("Request to {url} failed: {e}")))?;

        check_status(response.status(), &url)?;

        response
            .json()
            .await
            .map_err(|e| AppError::SourceUnavailable(format!("Invalid JSON from {url}: {e}")))
    }
}

/// Reject any non-2xx status.
fn check_status(status: StatusCode, url: &Url) -> Result<(), AppError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(AppError::SourceUnavailable(format!(
            "HTTP {} for {}",
            status.as_u16(),
            url
        )))
    }
}

impl EmployerSource for HhClient {
    async fn employer(&self, employer_id: &str) -> Result<EmployerRecord, AppError> {
        self.get_json(self.employer_url(employer_id)?).await
    }

    async fn vacancies(&self, employer_id: &str) -> Result<Vec<VacancyRecord>, AppError> {
        let page: VacancyPage = self.get_json(self.vacancies_url(employer_id)?).await?;
        Ok(page.items)
    }
}

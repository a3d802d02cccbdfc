//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit and integration tests.
//! All mocks use `Arc<Mutex<_>>` for interior mutability, allowing
//! test assertions on recorded calls.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::{
    CompanyVacancyCount, EmployerRecord, EmployerRef, Salary, VacancyListing, VacancyRecord,
    VacancySummary,
};
use crate::traits::{EmployerSource, VacancyQueries};
use crate::util::round_to_cents;

/// Build an employer record the way the API would return it.
pub fn employer_record(id: &str, name: &str) -> EmployerRecord {
    EmployerRecord {
        id: id.to_string(),
        name: name.to_string(),
        alternate_url: Some(format!("https://hh.ru/employer/{id}")),
    }
}

/// Build a vacancy record; a `None` range means the API sent `"salary": null`.
pub fn vacancy_record(
    employer_id: &str,
    title: &str,
    salary: Option<(Option<i32>, Option<i32>)>,
) -> VacancyRecord {
    VacancyRecord {
        name: title.to_string(),
        alternate_url: Some(format!(
            "https://hh.ru/vacancy/{employer_id}-{}",
            title.to_lowercase().replace(' ', "-")
        )),
        employer: EmployerRef {
            id: employer_id.to_string(),
        },
        salary: salary.map(|(from, to)| Salary { from, to }),
    }
}

// ---------------------------------------------------------------------------
// MockSource
// ---------------------------------------------------------------------------

/// Mock job-board API backed by in-memory maps.
///
/// Unknown employer ids answer like a 404 from the real API.
#[derive(Clone, Default)]
pub struct MockSource {
    employers: Arc<Mutex<HashMap<String, EmployerRecord>>>,
    vacancies: Arc<Mutex<HashMap<String, Vec<VacancyRecord>>>>,
    failing_vacancies: Arc<Mutex<HashSet<String>>>,
    /// Every call as `"employer:<id>"` or `"vacancies:<id>"`, in order.
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employer(self, id: &str, name: &str) -> Self {
        self.employers
            .lock()
            .unwrap()
            .insert(id.to_string(), employer_record(id, name));
        self
    }

    pub fn with_vacancy(
        self,
        employer_id: &str,
        title: &str,
        salary: Option<(Option<i32>, Option<i32>)>,
    ) -> Self {
        self.vacancies
            .lock()
            .unwrap()
            .entry(employer_id.to_string())
            .or_default()
            .push(vacancy_record(employer_id, title, salary));
        self
    }

    /// Make the vacancy lookup for `employer_id` fail with `SourceUnavailable`.
    pub fn with_failing_vacancies(self, employer_id: &str) -> Self {
        self.failing_vacancies
            .lock()
            .unwrap()
            .insert(employer_id.to_string());
        self
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl EmployerSource for MockSource {
    async fn employer(&self, employer_id: &str) -> Result<EmployerRecord, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("employer:{employer_id}"));
        self.employers
            .lock()
            .unwrap()
            .get(employer_id)
            .cloned()
            .ok_or_else(|| {
                AppError::SourceUnavailable(format!("HTTP 404 for /employers/{employer_id}"))
            })
    }

    async fn vacancies(&self, employer_id: &str) -> Result<Vec<VacancyRecord>, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("vacancies:{employer_id}"));
        if self.failing_vacancies.lock().unwrap().contains(employer_id) {
            return Err(AppError::SourceUnavailable(format!(
                "HTTP 503 for /vacancies?employer_id={employer_id}"
            )));
        }
        Ok(self
            .vacancies
            .lock()
            .unwrap()
            .get(employer_id)
            .cloned()
            .unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// MockQueries
// ---------------------------------------------------------------------------

/// In-memory query layer evaluated over a fixed list of companies and vacancies.
#[derive(Clone, Default)]
pub struct MockQueries {
    companies: Vec<String>,
    vacancies: Vec<VacancyListing>,
    /// Keywords passed to `vacancies_matching_keyword`, in order.
    pub keywords: Arc<Mutex<Vec<String>>>,
}

impl MockQueries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_company(mut self, name: &str) -> Self {
        self.companies.push(name.to_string());
        self
    }

    pub fn with_vacancy(
        mut self,
        company: &str,
        title: &str,
        salary_from: Option<i32>,
        salary_to: Option<i32>,
    ) -> Self {
        self.vacancies.push(VacancyListing {
            employer_name: company.to_string(),
            title: title.to_string(),
            salary_from,
            salary_to,
            url: Some(format!("https://hh.ru/vacancy/{}", self.vacancies.len() + 1)),
        });
        self
    }

    fn summaries<P>(&self, predicate: P) -> Vec<VacancySummary>
    where
        P: Fn(&VacancyListing) -> bool,
    {
        self.vacancies
            .iter()
            .filter(|v| predicate(v))
            .map(|v| VacancySummary {
                employer_name: v.employer_name.clone(),
                title: v.title.clone(),
                salary_from: v.salary_from,
                url: v.url.clone(),
            })
            .collect()
    }

    fn mean_salary_from(&self) -> f64 {
        let salaries: Vec<f64> = self
            .vacancies
            .iter()
            .filter_map(|v| v.salary_from.map(f64::from))
            .collect();
        if salaries.is_empty() {
            0.0
        } else {
            round_to_cents(salaries.iter().sum::<f64>() / salaries.len() as f64)
        }
    }
}

impl VacancyQueries for MockQueries {
    async fn companies_with_vacancy_counts(&self) -> Result<Vec<CompanyVacancyCount>, AppError> {
        Ok(self
            .companies
            .iter()
            .map(|name| CompanyVacancyCount {
                name: name.clone(),
                vacancy_count: self
                    .vacancies
                    .iter()
                    .filter(|v| &v.employer_name == name)
                    .count() as i64,
            })
            .collect())
    }

    async fn all_vacancies(&self) -> Result<Vec<VacancyListing>, AppError> {
        Ok(self.vacancies.clone())
    }

    async fn average_salary(&self) -> Result<f64, AppError> {
        Ok(self.mean_salary_from())
    }

    async fn vacancies_above_average_salary(&self) -> Result<Vec<VacancySummary>, AppError> {
        let average = self.mean_salary_from();
        Ok(self.summaries(|v| v.salary_from.is_some_and(|s| f64::from(s) > average)))
    }

    async fn vacancies_matching_keyword(
        &self,
        keyword: &str,
    ) -> Result<Vec<VacancySummary>, AppError> {
        self.keywords.lock().unwrap().push(keyword.to_string());
        let needle = keyword.to_lowercase();
        Ok(self.summaries(|v| v.title.to_lowercase().contains(&needle)))
    }
}

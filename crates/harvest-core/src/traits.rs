use std::future::Future;

use crate::error::AppError;
use crate::models::{
    CompanyVacancyCount, EmployerRecord, VacancyListing, VacancyRecord, VacancySummary,
};

/// Fixed page size for vacancy lookups. Vacancies beyond the first page are not fetched.
pub const VACANCIES_PER_PAGE: u32 = 100;

/// Source of employer and vacancy records (the job-board API).
pub trait EmployerSource: Send + Sync + Clone {
    /// Fetch the detail record for one employer.
    fn employer(
        &self,
        employer_id: &str,
    ) -> impl Future<Output = Result<EmployerRecord, AppError>> + Send;

    /// Fetch the first page (at most [`VACANCIES_PER_PAGE`] items) of an employer's vacancies.
    fn vacancies(
        &self,
        employer_id: &str,
    ) -> impl Future<Output = Result<Vec<VacancyRecord>, AppError>> + Send;
}

/// Read-only aggregate queries over the employers/vacancies tables.
pub trait VacancyQueries: Send + Sync {
    /// Every employer with its number of vacancies, including employers with none.
    fn companies_with_vacancy_counts(
        &self,
    ) -> impl Future<Output = Result<Vec<CompanyVacancyCount>, AppError>> + Send;

    /// Every vacancy together with its employer name.
    fn all_vacancies(&self) -> impl Future<Output = Result<Vec<VacancyListing>, AppError>> + Send;

    /// Mean `salary_from` over vacancies that have one, rounded to 2 decimals; 0.0 if none do.
    fn average_salary(&self) -> impl Future<Output = Result<f64, AppError>> + Send;

    /// Vacancies whose `salary_from` strictly exceeds [`average_salary`](Self::average_salary).
    fn vacancies_above_average_salary(
        &self,
    ) -> impl Future<Output = Result<Vec<VacancySummary>, AppError>> + Send;

    /// Vacancies whose title contains `keyword`, ignoring case.
    fn vacancies_matching_keyword(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<VacancySummary>, AppError>> + Send;
}

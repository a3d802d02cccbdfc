use harvest_core::AppError;
use harvest_core::models::{CompanyVacancyCount, VacancyListing, VacancySummary};
use harvest_core::traits::VacancyQueries;
use harvest_core::util::round_to_cents;
use sqlx::{PgPool, Pool, Postgres};

use crate::error::classify;

/// Read-only aggregate queries over employers ⋈ vacancies.
#[derive(Clone)]
pub struct VacancyRepository {
    pool: Pool<Postgres>,
}

impl VacancyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every employer with its vacancy count, grouped by employer name.
    pub async fn companies_with_vacancy_counts(
        &self,
    ) -> Result<Vec<CompanyVacancyCount>, AppError> {
        let rows = sqlx::query_as::<_, CompanyCountRow>(
            r#"
            SELECT e.name, COUNT(v.vacancy_id) AS vacancy_count
            FROM employers e
            LEFT JOIN vacancies v ON e.employer_id = v.employer_id
            GROUP BY e.name
            ORDER BY e.name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Every vacancy with its employer name and salary range.
    pub async fn all_vacancies(&self) -> Result<Vec<VacancyListing>, AppError> {
        let rows = sqlx::query_as::<_, VacancyListingRow>(
            r#"
            SELECT e.name AS employer_name, v.title, v.salary_from, v.salary_to, v.url
            FROM vacancies v
            JOIN employers e ON v.employer_id = e.employer_id
            ORDER BY v.vacancy_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Mean of the non-null `salary_from` values, rounded to 2 decimals; 0.0 when there are none.
    pub async fn average_salary(&self) -> Result<f64, AppError> {
        let average: Option<f64> = sqlx::query_scalar(
            r#"
            SELECT AVG(salary_from)::float8
            FROM vacancies
            WHERE salary_from IS NOT NULL
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        Ok(round_to_cents(average.unwrap_or(0.0)))
    }

    /// Vacancies paying strictly more than [`average_salary`](Self::average_salary).
    pub async fn vacancies_above_average_salary(&self) -> Result<Vec<VacancySummary>, AppError> {
        let average = self.average_salary().await?;

        let rows = sqlx::query_as::<_, VacancySummaryRow>(
            r#"
            SELECT e.name AS employer_name, v.title, v.salary_from, v.url
            FROM vacancies v
            JOIN employers e ON v.employer_id = e.employer_id
            WHERE v.salary_from > $1::float8
            ORDER BY v.vacancy_id
            "#,
        )
        .bind(average)
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Vacancies whose title contains `keyword`, case-insensitively.
    ///
    /// Plain substring match: `%` and `_` in the keyword are literal.
    pub async fn vacancies_matching_keyword(
        &self,
        keyword: &str,
    ) -> Result<Vec<VacancySummary>, AppError> {
        let rows = sqlx::query_as::<_, VacancySummaryRow>(
            r#"
            SELECT e.name AS employer_name, v.title, v.salary_from, v.url
            FROM vacancies v
            JOIN employers e ON v.employer_id = e.employer_id
            WHERE strpos(lower(v.title), lower($1)) > 0
            ORDER BY v.vacancy_id
            "#,
        )
        .bind(keyword)
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

// -- Internal row types for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct CompanyCountRow {
    name: String,
    vacancy_count: i64,
}

impl From<CompanyCountRow> for CompanyVacancyCount {
    fn from(row: CompanyCountRow) -> Self {
        CompanyVacancyCount {
            name: row.name,
            vacancy_count: row.vacancy_count,
        }
    }
}

#[derive(sqlx::FromRow)]
struct VacancyListingRow {
    employer_name: String,
    title: String,
    salary_from: Option<i32>,
    salary_to: Option<i32>,
    url: Option<String>,
}

impl From<VacancyListingRow> for VacancyListing {
    fn from(row: VacancyListingRow) -> Self {
        VacancyListing {
            employer_name: row.employer_name,
            title: row.title,
            salary_from: row.salary_from,
            salary_to: row.salary_to,
            url: row.url,
        }
    }
}

#[derive(sqlx::FromRow)]
struct VacancySummaryRow {
    employer_name: String,
    title: String,
    salary_from: Option<i32>,
    url: Option<String>,
}

impl From<VacancySummaryRow> for VacancySummary {
    fn from(row: VacancySummaryRow) -> Self {
        VacancySummary {
            employer_name: row.employer_name,
            title: row.title,
            salary_from: row.salary_from,
            url: row.url,
        }
    }
}

// -- Trait implementation --

impl VacancyQueries for VacancyRepository {
    async fn companies_with_vacancy_counts(&self) -> Result<Vec<CompanyVacancyCount>, AppError> {
        VacancyRepository::companies_with_vacancy_counts(self).await
    }

    async fn all_vacancies(&self) -> Result<Vec<VacancyListing>, AppError> {
        VacancyRepository::all_vacancies(self).await
    }

    async fn average_salary(&self) -> Result<f64, AppError> {
        VacancyRepository::average_salary(self).await
    }

    async fn vacancies_above_average_salary(&self) -> Result<Vec<VacancySummary>, AppError> {
        VacancyRepository::vacancies_above_average_salary(self).await
    }

    async fn vacancies_matching_keyword(
        &self,
        keyword: &str,
    ) -> Result<Vec<VacancySummary>, AppError> {
        VacancyRepository::vacancies_matching_keyword(self, keyword).await
    }
}

use std::time::Instant;

use harvest_core::AppError;
use harvest_core::models::{NewEmployer, NewVacancy, RefreshSummary};
use harvest_core::traits::EmployerSource;
use sqlx::{PgConnection, PgPool};

use crate::error::classify;
use crate::schema::TRUNCATE;

/// Full-refresh ingest: truncate both tables, then re-fetch and re-insert
/// every configured employer with its vacancies.
///
/// The whole refresh runs in one transaction. Any failure, from the source
/// or the database, rolls back to the previous contents.
pub struct Loader<S: EmployerSource> {
    pool: PgPool,
    source: S,
}

impl<S: EmployerSource> Loader<S> {
    pub fn new(pool: PgPool, source: S) -> Self {
        Self { pool, source }
    }

    /// Replace the table contents with fresh data for `employer_ids`, loaded in order.
    pub async fn refresh(&self, employer_ids: &[String]) -> Result<RefreshSummary, AppError> {
        let started = Instant::now();
        let mut tx = self.pool.begin().await.map_err(classify)?;

        for statement in TRUNCATE {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(classify)?;
        }

        let mut summary = RefreshSummary::default();
        for employer_id in employer_ids {
            let record = self.source.employer(employer_id).await?;
            let employer = NewEmployer::from(&record);
            insert_employer(&mut tx, &employer).await?;

            let vacancies: Vec<NewVacancy> = self
                .source
                .vacancies(employer_id)
                .await?
                .iter()
                .map(NewVacancy::from)
                .collect();
            for vacancy in &vacancies {
                insert_vacancy(&mut tx, vacancy).await?;
            }

            tracing::info!(
                employer_id = %employer.employer_id,
                name = %employer.name,
                vacancies = vacancies.len(),
                "Loaded employer"
            );
            summary.employers += 1;
            summary.vacancies += vacancies.len();
        }

        tx.commit().await.map_err(classify)?;

        tracing::info!(
            employers = summary.employers,
            vacancies = summary.vacancies,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Refresh complete"
        );
        Ok(summary)
    }
}

async fn insert_employer(conn: &mut PgConnection, employer: &NewEmployer) -> Result<(), AppError> {
    sqlx::query("INSERT INTO employers (employer_id, name, url) VALUES ($1, $2, $3)")
        .bind(&employer.employer_id)
        .bind(&employer.name)
        .bind(&employer.url)
        .execute(conn)
        .await
        .map_err(classify)?;
    Ok(())
}

async fn insert_vacancy(conn: &mut PgConnection, vacancy: &NewVacancy) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO vacancies (vacancy_id, employer_id, title, salary_from, salary_to, url)
        VALUES (DEFAULT, $1, $2, $3, $4, $5)
        "#,
    )
    .bind(&vacancy.employer_id)
    .bind(&vacancy.title)
    .bind(vacancy.salary_from)
    .bind(vacancy.salary_to)
    .bind(&vacancy.url)
    .execute(conn)
    .await
    .map_err(classify)?;
    Ok(())
}

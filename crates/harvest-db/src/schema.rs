/// Table definitions, executed one at a time in order.
///
/// `vacancies.employer_id` references `employers`, so employers come first.
pub const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS employers (
        employer_id VARCHAR(20) PRIMARY KEY,
        name TEXT NOT NULL,
        url TEXT
    )"#,
    r#"CREATE TABLE IF NOT EXISTS vacancies (
        vacancy_id SERIAL PRIMARY KEY,
        employer_id VARCHAR(20) REFERENCES employers(employer_id),
        title TEXT NOT NULL,
        salary_from INTEGER,
        salary_to INTEGER,
        url TEXT
    )"#,
];

/// Truncation order for a full refresh; also resets the `vacancy_id` sequence.
pub const TRUNCATE: &[&str] = &[
    "TRUNCATE TABLE vacancies RESTART IDENTITY CASCADE",
    "TRUNCATE TABLE employers RESTART IDENTITY CASCADE",
];

/// Quote a name as a PostgreSQL identifier.
///
/// `CREATE DATABASE` cannot take a bind parameter, so the name is spliced in.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

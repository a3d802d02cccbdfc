use serde::Deserialize;

// ---- Job-board API records ----

/// Employer detail as returned by `GET /employers/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployerRecord {
    pub id: String,
    pub name: String,
    /// Public profile page on the job board.
    #[serde(default)]
    pub alternate_url: Option<String>,
}

/// One page of `GET /vacancies?employer_id=...`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VacancyPage {
    #[serde(default)]
    pub items: Vec<VacancyRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VacancyRecord {
    pub name: String,
    #[serde(default)]
    pub alternate_url: Option<String>,
    pub employer: EmployerRef,
    #[serde(default)]
    pub salary: Option<Salary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmployerRef {
    pub id: String,
}

/// Salary range; either bound may be missing for open-ended ranges.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Salary {
    #[serde(default)]
    pub from: Option<i32>,
    #[serde(default)]
    pub to: Option<i32>,
}

// ---- Rows written by the loader ----

/// DTO for inserting an employer row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployer {
    pub employer_id: String,
    pub name: String,
    pub url: Option<String>,
}

impl From<&EmployerRecord> for NewEmployer {
    fn from(record: &EmployerRecord) -> Self {
        Self {
            employer_id: record.id.clone(),
            name: record.name.clone(),
            url: record.alternate_url.clone(),
        }
    }
}

/// DTO for inserting a vacancy row. The surrogate key is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVacancy {
    pub employer_id: String,
    pub title: String,
    pub salary_from: Option<i32>,
    pub salary_to: Option<i32>,
    pub url: Option<String>,
}

impl From<&VacancyRecord> for NewVacancy {
    fn from(record: &VacancyRecord) -> Self {
        let salary = record.salary.unwrap_or_default();
        Self {
            employer_id: record.employer.id.clone(),
            title: record.name.clone(),
            salary_from: salary.from,
            salary_to: salary.to,
            url: record.alternate_url.clone(),
        }
    }
}

/// Row counts written by one full refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub employers: usize,
    pub vacancies: usize,
}

// ---- Query results ----

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyVacancyCount {
    pub name: String,
    pub vacancy_count: i64,
}

/// A vacancy with its employer name and full salary range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyListing {
    pub employer_name: String,
    pub title: String,
    pub salary_from: Option<i32>,
    pub salary_to: Option<i32>,
    pub url: Option<String>,
}

/// A vacancy with only the lower salary bound, as returned by the filtered queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancySummary {
    pub employer_name: String,
    pub title: String,
    pub salary_from: Option<i32>,
    pub url: Option<String>,
}

pub mod error;
pub mod models;
pub mod testutil;
pub mod traits;
pub mod util;

pub use error::AppError;
pub use models::{
    CompanyVacancyCount, EmployerRecord, NewEmployer, NewVacancy, RefreshSummary, VacancyListing,
    VacancyRecord, VacancySummary,
};
pub use traits::{EmployerSource, VACANCIES_PER_PAGE, VacancyQueries};

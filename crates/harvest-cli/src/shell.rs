//! Interactive text menu over the query layer.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Result;
use harvest_core::models::{VacancyListing, VacancySummary};
use harvest_core::traits::VacancyQueries;

const MENU: &str = "
1. Companies and vacancy counts
2. All vacancies
3. Average salary
4. Vacancies with above-average salary
5. Search vacancies by keyword
0. Exit";

/// Run the menu loop until the user picks 0 or input ends.
///
/// Unknown choices are ignored and the menu is shown again.
pub async fn run<Q, R, W>(queries: &Q, mut input: R, mut output: W) -> Result<()>
where
    Q: VacancyQueries,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut output, "Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                writeln!(output, "\nCompanies and vacancy counts:")?;
                for company in queries.companies_with_vacancy_counts().await? {
                    writeln!(output, "{}: {}", company.name, company.vacancy_count)?;
                }
            }
            "2" => {
                writeln!(output, "\nAll vacancies:")?;
                for vacancy in queries.all_vacancies().await? {
                    writeln!(output, "{}", format_listing(&vacancy))?;
                }
            }
            "3" => {
                let average = queries.average_salary().await?;
                writeln!(output, "\nAverage salary: {average:.2} RUB")?;
            }
            "4" => {
                writeln!(output, "\nVacancies with above-average salary:")?;
                for vacancy in queries.vacancies_above_average_salary().await? {
                    writeln!(output, "{}", format_summary(&vacancy))?;
                }
            }
            "5" => {
                let keyword = prompt(&mut input, &mut output, "\nEnter a keyword: ")?
                    .unwrap_or_default();
                writeln!(output, "Results for '{keyword}':")?;
                for vacancy in queries.vacancies_matching_keyword(&keyword).await? {
                    writeln!(output, "{}", format_summary(&vacancy))?;
                }
            }
            "0" => break,
            _ => {}
        }
    }

    writeln!(output, "\nGoodbye")?;
    output.flush()?;
    Ok(())
}

/// Print `label`, read one line, and return it trimmed. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn or_unknown<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

fn format_listing(vacancy: &VacancyListing) -> String {
    format!(
        "{}: {} ({}-{}) | {}",
        vacancy.employer_name,
        vacancy.title,
        or_unknown(vacancy.salary_from),
        or_unknown(vacancy.salary_to),
        vacancy.url.as_deref().unwrap_or("-"),
    )
}

fn format_summary(vacancy: &VacancySummary) -> String {
    format!(
        "{}: {} (from {} RUB) | {}",
        vacancy.employer_name,
        vacancy.title,
        or_unknown(vacancy.salary_from),
        vacancy.url.as_deref().unwrap_or("-"),
    )
}

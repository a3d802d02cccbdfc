use harvest_core::testutil::MockSource;
use harvest_db::Database;

use crate::integration::common::{ids, setup_test_db};

async fn load(db: &Database, source: MockSource, employer_ids: &[&str]) {
    db.loader(source)
        .refresh(&ids(employer_ids))
        .await
        .expect("Failed to load fixtures");
}

fn job_board() -> MockSource {
    MockSource::new()
        .with_employer("1", "Acme")
        .with_employer("2", "Globex")
        .with_employer("3", "Initech")
        .with_vacancy("1", "Senior Python Developer", Some((Some(100000), Some(150000))))
        .with_vacancy("1", "python intern", Some((Some(200000), None)))
        .with_vacancy("2", "Data Engineer", None)
        .with_vacancy("2", "100%_remote QA", Some((None, Some(80000))))
}

#[tokio::test]
async fn company_counts_include_employers_without_vacancies() {
    let (db, _config, _container) = setup_test_db().await;
    load(&db, job_board(), &["1", "2", "3"]).await;

    let counts = db.queries().companies_with_vacancy_counts().await.unwrap();

    let pairs: Vec<(&str, i64)> = counts
        .iter()
        .map(|c| (c.name.as_str(), c.vacancy_count))
        .collect();
    assert_eq!(pairs, vec![("Acme", 2), ("Globex", 2), ("Initech", 0)]);
}

#[tokio::test]
async fn company_counts_on_empty_tables() {
    let (db, _config, _container) = setup_test_db().await;

    let counts = db.queries().companies_with_vacancy_counts().await.unwrap();
    assert!(counts.is_empty());
}

#[tokio::test]
async fn all_vacancies_joins_employer_names() {
    let (db, _config, _container) = setup_test_db().await;
    load(&db, job_board(), &["1", "2", "3"]).await;

    let vacancies = db.queries().all_vacancies().await.unwrap();

    assert_eq!(vacancies.len(), 4);
    assert!(vacancies.iter().all(|v| v.employer_name != "Initech"));
    assert_eq!(vacancies[0].employer_name, "Acme");
    assert_eq!(vacancies[0].title, "Senior Python Developer");
    assert_eq!(vacancies[0].salary_from, Some(100000));
    assert_eq!(vacancies[0].salary_to, Some(150000));
    assert_eq!(vacancies[2].salary_from, None);
}

#[tokio::test]
async fn average_salary_ignores_absent_values() {
    let (db, _config, _container) = setup_test_db().await;
    let source = MockSource::new()
        .with_employer("1", "Acme")
        .with_vacancy("1", "A", Some((Some(100000), None)))
        .with_vacancy("1", "B", Some((Some(200000), None)))
        .with_vacancy("1", "C", None);
    load(&db, source, &["1"]).await;

    let average = db.queries().average_salary().await.unwrap();
    assert_eq!(average, 150000.00);
}

#[tokio::test]
async fn average_salary_is_zero_without_salaries() {
    let (db, _config, _container) = setup_test_db().await;
    assert_eq!(db.queries().average_salary().await.unwrap(), 0.0);

    let source = MockSource::new()
        .with_employer("1", "Acme")
        .with_vacancy("1", "A", None)
        .with_vacancy("1", "B", Some((None, Some(50000))));
    load(&db, source, &["1"]).await;
    assert_eq!(db.queries().average_salary().await.unwrap(), 0.0);
}

#[tokio::test]
async fn average_salary_rounds_to_cents() {
    let (db, _config, _container) = setup_test_db().await;
    let source = MockSource::new()
        .with_employer("1", "Acme")
        .with_vacancy("1", "A", Some((Some(1), None)))
        .with_vacancy("1", "B", Some((Some(1), None)))
        .with_vacancy("1", "C", Some((Some(2), None)));
    load(&db, source, &["1"]).await;

    assert_eq!(db.queries().average_salary().await.unwrap(), 1.33);
}

#[tokio::test]
async fn average_salary_ties_round_to_even() {
    let (db, _config, _container) = setup_test_db().await;
    // seven at 100000 and one at 100001: mean is exactly 100000.125
    let mut source = MockSource::new().with_employer("1", "Acme");
    for i in 0..7 {
        source = source.with_vacancy("1", &format!("Engineer {i}"), Some((Some(100000), None)));
    }
    source = source.with_vacancy("1", "Lead", Some((Some(100001), None)));
    load(&db, source, &["1"]).await;

    assert_eq!(db.queries().average_salary().await.unwrap(), 100000.12);
}

#[tokio::test]
async fn above_average_excludes_absent_and_equal_salaries() {
    let (db, _config, _container) = setup_test_db().await;
    let source = MockSource::new()
        .with_employer("1", "Acme")
        .with_vacancy("1", "Low", Some((Some(100000), None)))
        .with_vacancy("1", "Mid", Some((Some(150000), None)))
        .with_vacancy("1", "High", Some((Some(200000), None)))
        .with_vacancy("1", "Unknown", None);
    load(&db, source, &["1"]).await;

    let queries = db.queries();
    let average = queries.average_salary().await.unwrap();
    let above = queries.vacancies_above_average_salary().await.unwrap();

    assert_eq!(average, 150000.0);
    assert_eq!(above.len(), 1);
    assert_eq!(above[0].title, "High");
    assert!(
        above
            .iter()
            .all(|v| v.salary_from.is_some_and(|s| f64::from(s) > average))
    );
}

#[tokio::test]
async fn above_average_on_empty_tables() {
    let (db, _config, _container) = setup_test_db().await;

    let above = db.queries().vacancies_above_average_salary().await.unwrap();
    assert!(above.is_empty());
}

#[tokio::test]
async fn keyword_search_is_case_insensitive() {
    let (db, _config, _container) = setup_test_db().await;
    load(&db, job_board(), &["1", "2", "3"]).await;

    let queries = db.queries();
    let upper = queries.vacancies_matching_keyword("PYTHON").await.unwrap();
    let lower = queries.vacancies_matching_keyword("python").await.unwrap();

    assert_eq!(upper, lower);
    let titles: Vec<&str> = upper.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(titles, vec!["Senior Python Developer", "python intern"]);
}

#[tokio::test]
async fn empty_keyword_matches_all_vacancies() {
    let (db, _config, _container) = setup_test_db().await;
    load(&db, job_board(), &["1", "2", "3"]).await;

    let queries = db.queries();
    let all = queries.all_vacancies().await.unwrap();
    let matched = queries.vacancies_matching_keyword("").await.unwrap();

    assert_eq!(matched.len(), all.len());
    for (m, a) in matched.iter().zip(&all) {
        assert_eq!(m.employer_name, a.employer_name);
        assert_eq!(m.title, a.title);
        assert_eq!(m.salary_from, a.salary_from);
        assert_eq!(m.url, a.url);
    }
}

#[tokio::test]
async fn keyword_wildcards_are_literal() {
    let (db, _config, _container) = setup_test_db().await;
    load(&db, job_board(), &["1", "2", "3"]).await;

    let queries = db.queries();
    let percent = queries.vacancies_matching_keyword("%").await.unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "100%_remote QA");

    let underscore = queries.vacancies_matching_keyword("n_").await.unwrap();
    assert!(underscore.is_empty());
}

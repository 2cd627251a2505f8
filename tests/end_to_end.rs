use std::io::Write;

use chrono::NaiveDate;
use tandem::ingest::IngestError;
use tandem::{load_assignments, Analysis, Config, Error, PairKey, Roster, Summary, TextReport};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn config() -> Config {
    Config {
        today: Some(fixed_today()),
        ..Config::default()
    }
}

fn write_input(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn analyse(contents: &str, config: &Config) -> Analysis {
    let file = write_input(contents);
    let assignments = load_assignments(file.path(), config).expect("load assignments");
    Analysis::run(assignments.into_iter().collect::<Roster>())
}

fn key(a: &str, b: &str) -> PairKey {
    PairKey::new(a.into(), b.into()).unwrap()
}

#[test]
fn longest_pair_across_projects() {
    let analysis = analyse(
        "\
A, P1, 2024-06-01, 2024-06-15
B, P1, 2024-05-01, 2024-07-01
A, P2, 2024-06-10, 2024-06-20
B, P2, 2024-06-01, 2024-06-25
C, P3, 2024-01-01, 2024-03-01
D, P3, 2024-01-15, 2024-02-14
A, P3, 2024-02-10, 2024-02-15
",
        &config(),
    );

    let totals = analysis.totals();
    assert_eq!(totals[&key("A", "B")].total_days(), 19);
    assert_eq!(totals[&key("C", "D")].total_days(), 30);
    assert_eq!(totals[&key("A", "C")].total_days(), 5);
    assert_eq!(totals[&key("A", "D")].total_days(), 4);
    assert_eq!(totals.get(&key("B", "C")), None);

    let longest = analysis.longest().unwrap();
    assert_eq!(longest.pair, key("C", "D"));
    assert_eq!(
        Summary(analysis.longest()).to_string(),
        "The employees with ids C, D have worked the most time together, 30 days in total\n"
    );
}

#[test]
fn open_assignments_end_on_injected_today() {
    let analysis = analyse(
        "\
EmpID, ProjectID, DateFrom, DateTo
1, 7, 2024-06-01, NULL
2, 7, 2024-06-10, null
",
        &Config {
            header: true,
            ..config()
        },
    );

    let total = &analysis.totals()[&key("1", "2")];
    assert_eq!(total.total_days(), 20);
    assert_eq!(total.merged.intervals()[0].end(), fixed_today());
}

#[test]
fn touching_assignments_are_not_together() {
    let analysis = analyse(
        "\
1, 7, 2024-01-01, 2024-02-01
2, 7, 2024-02-01, 2024-03-01
",
        &config(),
    );
    assert!(analysis.overlaps().is_empty());
    assert_eq!(analysis.longest(), None);
    assert!(TextReport(&analysis)
        .to_string()
        .ends_with("No employees have worked together\n"));
}

#[test]
fn empty_file_has_no_pairs() {
    let analysis = analyse("", &config());
    assert!(analysis.roster().is_empty());
    assert_eq!(analysis.longest(), None);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = load_assignments(dir.path().join("absent.csv"), &config()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn bad_row_is_reported_with_its_line() {
    let file = write_input("1, 7, 2024-01-01, 2024-02-01\n2, 7, 01/02/2024, NULL\n");
    let err = load_assignments(file.path(), &config()).unwrap_err();
    match err {
        Error::Ingest(inner) => {
            assert!(matches!(inner, IngestError::InvalidDate { line: 2, .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

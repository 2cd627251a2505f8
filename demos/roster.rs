use chrono::{Duration, NaiveDate};
use tandem::{Analysis, Assignment, DateInterval, Roster, TextReport};

fn main() {
    let start_of_roster = NaiveDate::from_ymd_opt(2019, 1, 7).unwrap();
    let weeks = |from: i64, to: i64| {
        DateInterval::new(
            start_of_roster + Duration::weeks(from),
            start_of_roster + Duration::weeks(to),
        )
    };

    let roster: Roster = vec![
        // Alice and Bob overlap for two weeks on the website...
        Assignment::new("Alice", "website", weeks(0, 6)),
        Assignment::new("Bob", "website", weeks(4, 10)),
        // ...and for three more on billing, one of them
        // the same week they were both on the website.
        Assignment::new("Alice", "billing", weeks(5, 8)),
        Assignment::new("Bob", "billing", weeks(3, 12)),
        // Carol joins the website the week Alice leaves,
        // so they never actually work together.
        Assignment::new("Carol", "website", weeks(6, 9)),
    ]
    .into_iter()
    .collect();

    let analysis = Analysis::run(roster);

    // Observe that Alice and Bob are credited with four weeks,
    // not five, because the overlapping week is counted once.
    print!("{}", TextReport(&analysis));
}

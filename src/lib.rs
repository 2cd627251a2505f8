/*!
Finds the pair of employees who spent the most days working together
on common projects.

Each input row records one employee's assignment to one project, as a
span of calendar days. For every project, each pair of attendees whose
assignments overlapped is credited with the overlapping days. A pair that
shared several projects at the same time would have those days credited
more than once, so each pair's overlaps are [merged] into disjoint runs
before they are summed.


# Days and boundaries

A [`DateInterval`] is half-open: `2024-01-01..2024-01-10` covers the
nine days from the first up to, but not including, the tenth. An
assignment that ends on the day another starts shares no day with it,
so two such colleagues are not credited with any time together, and
two such runs of shared time are kept apart when merging.


# Example

```rust
use chrono::NaiveDate;
use tandem::{Analysis, Assignment, DateInterval, Roster};

let june = |day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
let roster: Roster = vec![
    Assignment::new("A", "P1", DateInterval::new(june(1), june(15))),
    Assignment::new("B", "P1", DateInterval::new(june(1), june(30))),
    Assignment::new("A", "P2", DateInterval::new(june(10), june(20))),
    Assignment::new("B", "P2", DateInterval::new(june(5), june(25))),
]
.into_iter()
.collect();

let analysis = Analysis::run(roster);
let longest = analysis.longest().unwrap();

// 14 days on P1 and 10 on P2, but June 10 to 14 count only once.
assert_eq!(longest.pair.to_string(), "A, B");
assert_eq!(longest.total_days(), 19);
```


## Crate features

If you enable the **serde1** feature (on by default) the data types in
this crate implement `Serialize` (and `Deserialize` where construction
can be validated), and [`to_json`] renders an analysis as JSON.

[merged]: crate::merge()
*/

pub mod analysis;
pub mod config;
pub mod error;
pub mod ingest;
pub mod interval;
pub mod merge;
pub mod overlap;
pub mod pair;
pub mod report;
pub mod roster;

#[cfg(test)]
mod dense;
#[cfg(test)]
mod fixed_point;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub use analysis::{longest_collaboration, pair_overlaps, pair_totals, Analysis, PairOverlap, PairTotal};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use interval::DateInterval;
pub use merge::{merge, Merged};
pub use overlap::overlap;
pub use pair::{EmployeeId, PairKey, ProjectId};
#[cfg(feature = "serde1")]
pub use report::to_json;
pub use report::{Summary, TextReport};
pub use roster::{Assignment, Roster};

/// Reads every assignment in the file at `path`.
///
/// Open assignments end on [`Config::today`], resolved once for the
/// whole file.
pub fn load_assignments(path: impl AsRef<Path>, config: &Config) -> Result<Vec<Assignment>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let today = config.today();
    tracing::info!(path = %path.display(), %today, "reading assignments");
    Ok(ingest::parse_assignments(BufReader::new(file), config, today)?)
}

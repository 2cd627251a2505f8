use crate::interval::DateInterval;

// A slow, quadratic version of `merge` for testing.
//
// Grows one accumulator at a time by repeatedly scanning every
// interval not yet consumed, until a full scan consumes nothing.
// The sorting sweep in `merge` must agree with it on every input.
pub fn fixed_point_merge(intervals: &[DateInterval]) -> Vec<DateInterval> {
    let mut remaining: Vec<DateInterval> = intervals.to_vec();
    let mut finished = Vec::new();

    while !remaining.is_empty() {
        let first = remaining.remove(0);
        let (mut start, mut end) = (first.start(), first.end());

        loop {
            let before = remaining.len();
            let mut index = 0;
            while index < remaining.len() {
                let (s2, e2) = (remaining[index].start(), remaining[index].end());
                if s2 < start && e2 > start && e2 <= end {
                    // Hangs off the front.
                    start = s2;
                    remaining.remove(index);
                } else if s2 >= start && e2 <= end {
                    // Wholly inside.
                    remaining.remove(index);
                } else if s2 >= start && s2 < end && e2 > end {
                    // Hangs off the back.
                    end = e2;
                    remaining.remove(index);
                } else if s2 < start && e2 > end {
                    // Wholly covers the accumulator.
                    start = s2;
                    end = e2;
                    remaining.remove(index);
                } else {
                    // Disjoint, or only touching; maybe later.
                    index += 1;
                }
            }
            if remaining.len() == before {
                break;
            }
        }

        let run = DateInterval::new(start, end);
        if !run.is_empty() {
            finished.push(run);
        }
    }

    finished.sort_unstable();
    finished
}

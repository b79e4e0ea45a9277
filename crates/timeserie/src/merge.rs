use jiff::Timestamp;

use crate::function::Function;
use crate::support::Support;

/// Chronological union of the event times of `functions`, each time yielded once.
pub fn iterate<'a>(functions: &[&'a Function]) -> Merge<'a> {
    Merge::new(functions.iter().map(|f| f.support()).collect())
}

/// Coalescing k-way merge over already sorted supports.
///
/// Holds one cursor per support. Each step yields the smallest pending
/// timestamp and advances every cursor sitting exactly on it.
#[derive(Debug, Clone)]
pub struct Merge<'a> {
    supports: Vec<&'a Support>,
    cursors: Vec<usize>,
}

impl<'a> Merge<'a> {
    pub fn new(supports: Vec<&'a Support>) -> Self {
        let cursors = vec![0; supports.len()];
        Merge { supports, cursors }
    }

    fn pending(&self) -> impl Iterator<Item = (usize, Timestamp)> + '_ {
        self.supports
            .iter()
            .zip(&self.cursors)
            .enumerate()
            .filter(|(_, (s, pos))| **pos < s.len())
            .map(|(i, (s, &pos))| (i, s.at(pos).0))
    }
}

impl Iterator for Merge<'_> {
    type Item = Timestamp;

    fn next(&mut self) -> Option<Timestamp> {
        let min = self.pending().map(|(_, t)| t).min()?;
        let reached: Vec<usize> = self
            .pending()
            .filter(|&(_, t)| t == min)
            .map(|(i, _)| i)
            .collect();
        for i in reached {
            self.cursors[i] += 1;
        }
        Some(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::day_date;
    use crate::function::Mode;

    fn day(n: i8) -> Timestamp {
        day_date(2000, 1, 1 + n).unwrap()
    }

    fn nullset(points: &[(i8, f64)]) -> Function {
        let s: Support = points.iter().map(|&(d, v)| (day(d), v)).collect();
        Function::new(s, Mode::NullSet)
    }

    #[test]
    fn test_iterate_union_without_repetition() {
        let f1 = nullset(&[(0, 1.0), (1, 2.0)]);
        let f2 = nullset(&[(0, 1.0), (2, 3.0)]);

        let x: Vec<_> = iterate(&[&f1, &f2]).collect();
        assert_eq!(x, vec![day(0), day(1), day(2)]);
    }

    #[test]
    fn test_iterate_interleaved() {
        let f1 = nullset(&[(0, 1.0), (3, 1.0), (5, 1.0)]);
        let f2 = nullset(&[(1, 1.0), (3, 1.0)]);
        let f3 = nullset(&[(3, 1.0), (4, 1.0), (6, 1.0)]);

        let x: Vec<_> = iterate(&[&f1, &f2, &f3]).collect();
        let want: Vec<_> = [0, 1, 3, 4, 5, 6].into_iter().map(day).collect();
        assert_eq!(x, want);
    }

    #[test]
    fn test_iterate_empty_inputs() {
        assert_eq!(iterate(&[]).count(), 0);

        let empty = nullset(&[]);
        let f = nullset(&[(1, 1.0)]);
        let x: Vec<_> = iterate(&[&empty, &f, &empty]).collect();
        assert_eq!(x, vec![day(1)]);
    }

    #[test]
    fn test_iterate_single_is_identity() {
        let f = nullset(&[(0, 1.0), (2, 1.0), (4, 1.0)]);
        let x: Vec<_> = iterate(&[&f]).collect();
        assert_eq!(x, f.times().collect::<Vec<_>>());
    }
}

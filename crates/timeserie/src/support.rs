use jiff::Timestamp;

use crate::scan::{KeepIf, Scanner, ValueCond};

/// Finite, time-based [support] of a real-valued function: the event times at which
/// the function is defined, each paired with its value.
///
/// Points are kept in ascending timestamp order. NaN values are never stored.
/// Duplicate timestamps are accepted and keep their insertion order, but a function
/// over them is ill-defined: [`find`](Support::find) lands on the last of the run and
/// [`position`](Support::position) on the first.
///
/// [support]: https://en.wikipedia.org/wiki/Support_(mathematics)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Support {
    times: Vec<Timestamp>,
    values: Vec<f64>,
}

impl Support {
    pub fn new() -> Self {
        Support::default()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Point at position `i`.
    ///
    /// # Panics
    ///
    /// If `i >= self.len()`.
    pub fn at(&self, i: usize) -> (Timestamp, f64) {
        (self.times[i], self.values[i])
    }

    /// Adds a point and restores chronological order. A NaN value is silently dropped.
    pub fn append(&mut self, on: Timestamp, value: f64) {
        if value.is_nan() {
            return;
        }
        self.times.push(on);
        self.values.push(value);
        self.sort();
    }

    /// Index of the latest point at or before `t`, `None` if `t` precedes every point.
    pub fn find(&self, t: Timestamp) -> Option<usize> {
        self.times.partition_point(|&x| x <= t).checked_sub(1)
    }

    /// Index of the first point stamped exactly `t`.
    pub fn position(&self, t: Timestamp) -> Option<usize> {
        let pos = self.times.partition_point(|&x| x < t);
        (self.times.get(pos) == Some(&t)).then_some(pos)
    }

    /// Value stored at the first point stamped exactly `t`.
    pub fn get(&self, t: Timestamp) -> Option<f64> {
        self.position(t).map(|i| self.values[i])
    }

    pub fn first(&self) -> Option<(Timestamp, f64)> {
        (!self.is_empty()).then(|| self.at(0))
    }

    pub fn last(&self) -> Option<(Timestamp, f64)> {
        self.len().checked_sub(1).map(|i| self.at(i))
    }

    /// Points in chronological order. Each call starts a fresh traversal.
    pub fn values(&self) -> Values<'_> {
        Values {
            times: &self.times,
            values: &self.values,
            pos: 0,
        }
    }

    /// Event times in chronological order. Each call starts a fresh traversal.
    pub fn times(&self) -> Times<'_> {
        Times {
            times: &self.times,
            pos: 0,
        }
    }

    /// Difference between each point and its predecessor, stamped at the later point.
    /// The first point has no predecessor and yields nothing.
    pub fn delta(&self) -> Support {
        let mut result = Support::new();
        for i in 1..self.len() {
            result.append(self.times[i], self.values[i] - self.values[i - 1]);
        }
        result
    }

    /// Folds the points in chronological order: starting with `c = initial`, each
    /// point `(t, v)` sets `c = scanner.apply(c, v)` and appends `(t, c)`.
    ///
    /// A NaN accumulator is not stored, yet it is still threaded into the next step.
    pub fn scan(&self, initial: f64, scanner: &impl Scanner) -> Support {
        let mut result = Support::new();
        let mut c = initial;
        for (t, v) in self.values() {
            c = scanner.apply(c, v);
            result.append(t, c);
        }
        result
    }

    /// Keeps only the points whose value satisfies `cond`.
    pub fn keep_if<C: ValueCond>(&self, cond: C) -> Support {
        self.scan(0.0, &KeepIf(cond))
    }

    // Stable, so equal timestamps keep their insertion order.
    fn sort(&mut self) {
        if self.times.is_sorted() {
            return;
        }
        let mut indices: Vec<usize> = (0..self.times.len()).collect();
        indices.sort_by_key(|&i| self.times[i]);
        self.times = indices.iter().map(|&i| self.times[i]).collect();
        self.values = indices.iter().map(|&i| self.values[i]).collect();
    }
}

impl Extend<(Timestamp, f64)> for Support {
    fn extend<I: IntoIterator<Item = (Timestamp, f64)>>(&mut self, iter: I) {
        for (t, v) in iter {
            if !v.is_nan() {
                self.times.push(t);
                self.values.push(v);
            }
        }
        self.sort();
    }
}

impl FromIterator<(Timestamp, f64)> for Support {
    fn from_iter<I: IntoIterator<Item = (Timestamp, f64)>>(iter: I) -> Self {
        let mut support = Support::new();
        support.extend(iter);
        support
    }
}

impl<'a> IntoIterator for &'a Support {
    type Item = (Timestamp, f64);
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Values<'a> {
        self.values()
    }
}

/// Cursor over the points of a [`Support`].
#[derive(Debug, Clone)]
pub struct Values<'a> {
    times: &'a [Timestamp],
    values: &'a [f64],
    pos: usize,
}

impl Iterator for Values<'_> {
    type Item = (Timestamp, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let t = *self.times.get(self.pos)?;
        let v = self.values[self.pos];
        self.pos += 1;
        Some((t, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.times.len() - self.pos;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Values<'_> {}

/// Cursor over the event times of a [`Support`].
#[derive(Debug, Clone)]
pub struct Times<'a> {
    times: &'a [Timestamp],
    pos: usize,
}

impl Iterator for Times<'_> {
    type Item = Timestamp;

    fn next(&mut self) -> Option<Timestamp> {
        let t = *self.times.get(self.pos)?;
        self.pos += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.times.len() - self.pos;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Times<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::day_date;
    use crate::scan::{Accumulate, Negative, Positive};
    use jiff::SignedDuration;
    use proptest::prelude::*;

    fn day(n: i8) -> Timestamp {
        day_date(2000, 1, 1 + n).unwrap()
    }

    fn support(points: &[(Timestamp, f64)]) -> Support {
        let mut s = Support::new();
        for &(t, v) in points {
            s.append(t, v);
        }
        s
    }

    #[test]
    fn test_len_grows_with_append() {
        let mut s = Support::new();
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());

        s.append(day(0), 1.0);
        assert_eq!(s.len(), 1);
        assert_eq!(s.at(0), (day(0), 1.0));

        s.append(day(1), 2.0);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_append_drops_nan_and_sorts() {
        let mut s = support(&[(day(0), 1.0), (day(1), 2.0)]);

        s.append(day(2), f64::NAN);
        assert_eq!(s.len(), 2);

        let earlier = day_date(1999, 1, 1).unwrap();
        s.append(earlier, 3.0);
        assert_eq!(s.len(), 3);
        assert_eq!(s.at(0), (earlier, 3.0));
        assert_eq!(s.at(2), (day(1), 2.0));
    }

    #[test]
    fn test_append_keeps_infinity() {
        let mut s = Support::new();
        s.append(day(0), f64::INFINITY);
        s.append(day(1), f64::NEG_INFINITY);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_find_edges() {
        let low = day_date(2000, 1, 1).unwrap();
        let high = day_date(3000, 1, 1).unwrap();
        let eps = SignedDuration::from_hours(48);
        let s = support(&[(low, 1.0), (high, 2.0)]);

        assert_eq!(s.find(low - eps), None);
        assert_eq!(s.find(low), Some(0));
        assert_eq!(s.find(low + eps), Some(0));
        assert_eq!(s.find(high - eps), Some(0));
        assert_eq!(s.find(high), Some(1));
        assert_eq!(s.find(high + eps), Some(1));
    }

    #[test]
    fn test_find_on_empty() {
        assert_eq!(Support::new().find(day(0)), None);
    }

    #[test]
    fn test_position_is_exact() {
        let s = support(&[(day(0), 1.0), (day(2), 2.0)]);
        assert_eq!(s.position(day(0)), Some(0));
        assert_eq!(s.position(day(1)), None);
        assert_eq!(s.position(day(2)), Some(1));
        assert_eq!(s.get(day(2)), Some(2.0));
        assert_eq!(s.get(day(3)), None);
    }

    #[test]
    fn test_values_and_times_restart() {
        let s = support(&[(day(1), 2.0), (day(0), 1.0)]);

        let pts: Vec<_> = s.values().collect();
        assert_eq!(pts, vec![(day(0), 1.0), (day(1), 2.0)]);
        let again: Vec<_> = s.values().collect();
        assert_eq!(pts, again);

        let times: Vec<_> = s.times().collect();
        assert_eq!(times, vec![day(0), day(1)]);
        assert_eq!(s.times().len(), 2);
    }

    #[test]
    fn test_delta() {
        let s = support(&[(day(0), 1.0), (day(1), 2.0), (day(2), 4.0)]);
        let d = s.delta();
        assert_eq!(d.len(), 2);
        assert_eq!(d.at(0), (day(1), 1.0));
        assert_eq!(d.at(1), (day(2), 2.0));

        assert!(support(&[(day(0), 1.0)]).delta().is_empty());
        assert!(Support::new().delta().is_empty());
    }

    #[test]
    fn test_scan_accumulates() {
        let s = support(&[(day(0), 1.0), (day(1), 2.0)]);
        let c = s.scan(0.0, &Accumulate);
        assert_eq!(c.len(), 2);
        assert_eq!(c.at(0), (day(0), 1.0));
        assert_eq!(c.at(1), (day(1), 3.0));
    }

    #[test]
    fn test_scan_threads_nan_accumulator() {
        // Once the accumulator turns NaN it stays NaN, so nothing further is stored.
        let s = support(&[(day(0), 1.0), (day(1), 2.0), (day(2), 3.0)]);
        let scanned = s.scan(0.0, &|c: f64, v: f64| if v == 2.0 { f64::NAN } else { c + v });
        assert_eq!(scanned.len(), 1);
        assert_eq!(scanned.at(0), (day(0), 1.0));
    }

    #[test]
    fn test_keep_if() {
        let s = support(&[(day(0), -1.0), (day(1), 2.0), (day(2), 0.0), (day(3), 4.0)]);

        let pos = s.keep_if(Positive);
        assert_eq!(pos.values().collect::<Vec<_>>(), vec![(day(1), 2.0), (day(3), 4.0)]);

        let neg = s.keep_if(Negative);
        assert_eq!(neg.values().collect::<Vec<_>>(), vec![(day(0), -1.0)]);

        let big = s.keep_if(|v: f64| v >= 2.0);
        assert_eq!(big.len(), 2);
    }

    #[test]
    fn test_collect_matches_append() {
        let pts = [(day(2), 3.0), (day(0), 1.0), (day(1), f64::NAN), (day(1), 2.0)];
        let collected: Support = pts.iter().copied().collect();
        assert_eq!(collected, support(&pts));
    }

    proptest! {
        #[test]
        fn prop_times_sorted_after_appends(
            points in prop::collection::vec((0i64..10_000, -1e6f64..1e6), 0..64)
        ) {
            let mut s = Support::new();
            for &(secs, v) in &points {
                s.append(Timestamp::from_second(secs).unwrap(), v);
            }
            prop_assert_eq!(s.len(), points.len());
            let times: Vec<_> = s.times().collect();
            prop_assert!(times.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn prop_nan_never_stored(
            points in prop::collection::vec((0i64..10_000, prop::bool::ANY), 0..64)
        ) {
            let mut s = Support::new();
            let mut kept = 0;
            for &(secs, nan) in &points {
                let v = if nan { f64::NAN } else { secs as f64 };
                s.append(Timestamp::from_second(secs).unwrap(), v);
                if !nan {
                    kept += 1;
                }
            }
            prop_assert_eq!(s.len(), kept);
            prop_assert!(s.values().all(|(_, v)| !v.is_nan()));
        }
    }
}

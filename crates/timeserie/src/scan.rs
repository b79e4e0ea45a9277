//! Strategies plugged into [`Support::scan`](crate::Support::scan) and
//! [`Support::keep_if`](crate::Support::keep_if).

/// One step of a fold over support values: `(accumulator, value) -> accumulator`.
pub trait Scanner {
    fn apply(&self, acc: f64, value: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> Scanner for F {
    fn apply(&self, acc: f64, value: f64) -> f64 {
        self(acc, value)
    }
}

/// Predicate over a single value.
pub trait ValueCond {
    fn accept(&self, value: f64) -> bool;
}

impl<F: Fn(f64) -> bool> ValueCond for F {
    fn accept(&self, value: f64) -> bool {
        self(value)
    }
}

/// Running sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulate;

impl Scanner for Accumulate {
    fn apply(&self, acc: f64, value: f64) -> f64 {
        acc + value
    }
}

/// Passes the value through when the condition holds, NaN otherwise.
/// The accumulator is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepIf<C>(pub C);

impl<C: ValueCond> Scanner for KeepIf<C> {
    fn apply(&self, _acc: f64, value: f64) -> f64 {
        if self.0.accept(value) {
            value
        } else {
            f64::NAN
        }
    }
}

/// Strictly positive values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Positive;

impl ValueCond for Positive {
    fn accept(&self, value: f64) -> bool {
        value > 0.0
    }
}

/// Strictly negative values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Negative;

impl ValueCond for Negative {
    fn accept(&self, value: f64) -> bool {
        value < 0.0
    }
}

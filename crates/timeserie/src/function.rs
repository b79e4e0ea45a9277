use std::ops::Deref;

use jiff::Timestamp;

use crate::support::Support;

/// How a [`Function`] is valued between the points of its support.
///
/// The variant order is meaningful: combining functions yields the most
/// restrictive of their modes, which is the smallest under this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// Defined only at support points, NaN everywhere else.
    NullSet,
    /// Holds the latest support value; 0.0 before the first support point.
    Step,
}

impl Mode {
    /// Mode of a function combined from functions with the given modes.
    /// `None` when there are no operands.
    pub fn most_restrictive(modes: impl IntoIterator<Item = Mode>) -> Option<Mode> {
        modes.into_iter().min()
    }
}

/// A [`Support`] read under a [`Mode`].
///
/// The function owns its copy of the support; it never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    support: Support,
    mode: Mode,
}

impl Function {
    pub fn new(support: Support, mode: Mode) -> Self {
        Function { support, mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn support(&self) -> &Support {
        &self.support
    }

    pub fn into_support(self) -> Support {
        self.support
    }

    /// Value of the function at `t`. Never fails: outside its domain a
    /// `NullSet` function is NaN and a `Step` function is 0.0.
    pub fn eval(&self, t: Timestamp) -> f64 {
        match self.mode {
            Mode::NullSet => self.support.get(t).unwrap_or(f64::NAN),
            Mode::Step => match self.support.find(t) {
                Some(i) => self.support.at(i).1,
                None => 0.0,
            },
        }
    }
}

impl Deref for Function {
    type Target = Support;

    fn deref(&self) -> &Support {
        &self.support
    }
}

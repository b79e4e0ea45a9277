//! Sparse, irregularly sampled real-valued time series and their algebra.
//!
//! A [`Support`] stores the sorted event times of a series with their values. A
//! [`Function`] reads a support under a [`Mode`], and the [`ops`] combine functions
//! pointwise over the merged event times of their operands.

mod error;
mod function;
mod merge;
mod support;

pub mod calendar;
pub mod ops;
pub mod scan;

pub use error::{Result, TimeserieError};
pub use function::{Function, Mode};
pub use merge::{Merge, iterate};
pub use scan::{Accumulate, KeepIf, Negative, Positive, Scanner, ValueCond};
pub use support::{Support, Times, Values};

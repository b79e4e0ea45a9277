//! Pointwise arithmetic between functions.
//!
//! Every operator walks the merged event times of its operands and evaluates each
//! operand there with [`Function::eval`]. A `NullSet` operand is NaN away from its own
//! support, the NaN spreads through the arithmetic and the point is dropped. Two
//! `NullSet` operands therefore only combine where both are defined.
//!
//! The result takes the most restrictive mode of its operands.

use jiff::Timestamp;

use crate::function::{Function, Mode};
use crate::merge::iterate;
use crate::support::Support;

/// Sum of all `functions`.
pub fn add(functions: &[&Function]) -> Function {
    fold(functions, 0.0, |acc, v| acc + v)
}

/// Product of all `functions`.
pub fn mul(functions: &[&Function]) -> Function {
    fold(functions, 1.0, |acc, v| acc * v)
}

/// `a - b`.
pub fn sub(a: &Function, b: &Function) -> Function {
    binary(a, b, |x, y| x - y)
}

/// `a / b`. Division by zero follows IEEE 754: infinities are kept, NaN is dropped.
pub fn div(a: &Function, b: &Function) -> Function {
    binary(a, b, |x, y| x / y)
}

/// Evaluates `f` on a caller-chosen grid of times, keeping `f`'s mode.
pub fn sample(times: &[Timestamp], f: &Function) -> Function {
    let mut result = Support::new();
    for &t in times {
        result.append(t, f.eval(t));
    }
    Function::new(result, f.mode())
}

// With no operands the result is an empty NullSet function.
fn combined_mode(functions: &[&Function]) -> Mode {
    Mode::most_restrictive(functions.iter().map(|f| f.mode())).unwrap_or(Mode::NullSet)
}

fn fold(functions: &[&Function], identity: f64, op: impl Fn(f64, f64) -> f64) -> Function {
    let mut result = Support::new();
    for on in iterate(functions) {
        let v = functions.iter().fold(identity, |acc, f| op(acc, f.eval(on)));
        result.append(on, v);
    }
    Function::new(result, combined_mode(functions))
}

fn binary(a: &Function, b: &Function, op: impl Fn(f64, f64) -> f64) -> Function {
    let mut result = Support::new();
    for on in iterate(&[a, b]) {
        result.append(on, op(a.eval(on), b.eval(on)));
    }
    Function::new(result, a.mode().min(b.mode()))
}

impl std::ops::Add for &Function {
    type Output = Function;

    fn add(self, rhs: &Function) -> Function {
        add(&[self, rhs])
    }
}

impl std::ops::Sub for &Function {
    type Output = Function;

    fn sub(self, rhs: &Function) -> Function {
        sub(self, rhs)
    }
}

impl std::ops::Mul for &Function {
    type Output = Function;

    fn mul(self, rhs: &Function) -> Function {
        mul(&[self, rhs])
    }
}

impl std::ops::Div for &Function {
    type Output = Function;

    fn div(self, rhs: &Function) -> Function {
        div(self, rhs)
    }
}

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A natural-log probability with an explicit negative-infinity sentinel.
///
/// `NegInfinity` stands for a probability of exactly zero. It orders below
/// every finite value and absorbs addition, so no `-inf` float ever flows
/// through comparisons or serialization.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum LogProb {
	NegInfinity,
	Finite(f64),
}

impl LogProb {
	/// `ln(1)`.
	pub const CERTAIN: LogProb = LogProb::Finite(0.0);

	/// Wraps a raw natural log, mapping `-inf` and NaN to the sentinel.
	pub fn from_ln(value: f64) -> Self {
		if value.is_nan() || value == f64::NEG_INFINITY {
			LogProb::NegInfinity
		} else {
			LogProb::Finite(value)
		}
	}

	/// `ln(p)`, or the sentinel when `p` is not strictly positive.
	pub fn from_probability(p: f64) -> Self {
		if p > 0.0 {
			Self::from_ln(p.ln())
		} else {
			LogProb::NegInfinity
		}
	}

	/// Back to the linear domain; the sentinel maps to 0.
	pub fn probability(self) -> f64 {
		match self {
			LogProb::NegInfinity => 0.0,
			LogProb::Finite(value) => value.exp(),
		}
	}

	/// The finite value, if any.
	pub fn value(self) -> Option<f64> {
		match self {
			LogProb::NegInfinity => None,
			LogProb::Finite(value) => Some(value),
		}
	}

	pub fn is_neg_infinity(self) -> bool {
		matches!(self, LogProb::NegInfinity)
	}

	/// Subtracts a finite offset; the sentinel is left untouched.
	pub fn shift(self, offset: f64) -> Self {
		match self {
			LogProb::NegInfinity => LogProb::NegInfinity,
			LogProb::Finite(value) => Self::from_ln(value - offset),
		}
	}
}

impl Add for LogProb {
	type Output = LogProb;

	fn add(self, rhs: LogProb) -> LogProb {
		match (self, rhs) {
			(LogProb::Finite(a), LogProb::Finite(b)) => LogProb::from_ln(a + b),
			_ => LogProb::NegInfinity,
		}
	}
}

impl fmt::Display for LogProb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LogProb::NegInfinity => write!(f, "-inf"),
			LogProb::Finite(value) => write!(f, "{value}"),
		}
	}
}

/// Log of the sum of the probabilities behind `logs` (log-sum-exp).
///
/// An empty slice, or one made only of sentinels, sums to `NegInfinity`.
pub fn sum_logs(logs: &[LogProb]) -> LogProb {
	let max = match logs.iter().filter_map(|l| l.value()).reduce(f64::max) {
		Some(max) => max,
		None => return LogProb::NegInfinity,
	};
	let sum: f64 = logs.iter().map(|l| l.shift(max).probability()).sum();
	LogProb::from_ln(max + sum.ln())
}

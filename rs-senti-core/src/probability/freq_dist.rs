use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Counts how often each discrete value was observed.
///
/// Values are remembered in the order they were first counted, so iteration
/// (and everything derived from it, like label ordering) is deterministic.
///
/// ## Invariants
/// - `total` equals the sum of all per-value counts
/// - Every value listed in `order` has a strictly positive count
#[derive(Clone, Debug)]
pub struct FrequencyDistribution<T> {
	/// Occurrence count per value.
	/// Example: { "positive" => 5, "negative" => 5 }
	counts: HashMap<T, u64>,
	/// Values in first-seen order.
	order: Vec<T>,
	total: u64,
}

impl<T: Eq + Hash + Clone> FrequencyDistribution<T> {
	/// Creates an empty distribution.
	pub fn new() -> Self {
		Self {
			counts: HashMap::new(),
			order: Vec::new(),
			total: 0,
		}
	}

	/// Records one occurrence of `value`.
	pub fn inc(&mut self, value: T) {
		self.increment(value, 1);
	}

	/// Adds `amount` occurrences of `value`.
	///
	/// - If the value was never seen, it starts from a count of 0.
	/// - An amount of 0 is a no-op and does not register the value.
	pub fn increment(&mut self, value: T, amount: u64) {
		if amount == 0 {
			return;
		}
		let count = self.counts.entry(value.clone()).or_insert(0);
		if *count == 0 {
			self.order.push(value);
		}
		*count += amount;
		self.total += amount;
	}

	/// Returns the count of `value`, 0 if never seen.
	pub fn count<Q>(&self, value: &Q) -> u64
	where
		T: Borrow<Q>,
		Q: Eq + Hash + ?Sized,
	{
		self.counts.get(value).copied().unwrap_or(0)
	}

	/// Sum of all counts (`N`).
	pub fn total(&self) -> u64 {
		self.total
	}

	/// Number of values with a non-zero count (`B`).
	pub fn distinct_count(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// Values with a non-zero count, in first-seen order.
	pub fn distinct_values(&self) -> impl Iterator<Item = &T> {
		self.order.iter()
	}

	/// `(value, count)` pairs in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> {
		self.order.iter().map(|value| (value, self.counts[value]))
	}

	/// Values sorted by descending count; ties keep first-seen order.
	pub fn most_common(&self) -> Vec<(&T, u64)> {
		let mut entries: Vec<(&T, u64)> = self.iter().collect();
		// Stable sort keeps first-seen order among equal counts
		entries.sort_by(|a, b| b.1.cmp(&a.1));
		entries
	}
}

impl<T: Eq + Hash + Clone> Default for FrequencyDistribution<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Eq + Hash + Clone> FromIterator<T> for FrequencyDistribution<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut freq = Self::new();
		for value in iter {
			freq.inc(value);
		}
		freq
	}
}

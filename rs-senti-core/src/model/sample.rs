use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Maps a feature name to the value observed for one document.
///
/// Presence features use `bool`, which is the default.
pub type FeatureSet<V = bool> = HashMap<String, V>;

/// A feature value as counted by the trainer.
///
/// `Unseen` is the reserved marker padding a label's counts for examples
/// where the feature was absent. It can never collide with a real value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sample<V> {
	Value(V),
	Unseen,
}

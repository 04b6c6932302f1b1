//! Models the vocabulary records produced by the ingestion tooling.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Records keyed by their id.
pub type Records = BTreeMap<String, Record>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// The item in the two-line convention.
    pub japanese: String,
    #[serde(default)]
    pub english: Option<String>,
    /// The group of the item, `"Verb"` for verbs.
    #[serde(default)]
    pub grp: Option<String>,
}

impl Record {
    pub fn is_verb(&self) -> bool {
        self.grp.as_deref() == Some("Verb")
    }
}

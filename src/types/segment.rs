//! Run segments and their named comparisons

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Time;

/// One timed section of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Display name of the split
    pub name: String,

    /// Time of this split in the current attempt. Not persisted; the host
    /// clears it on every reset.
    #[serde(skip)]
    pub split_time: Time,

    /// Named alternate timelines, e.g. personal best or the ongoing attempt
    #[serde(default)]
    pub comparisons: HashMap<String, Time>,
}

impl Segment {
    /// Create a segment with no recorded times
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), split_time: Time::new(), comparisons: HashMap::new() }
    }

    /// Look up a comparison value by name
    pub fn comparison(&self, name: &str) -> Option<&Time> {
        self.comparisons.get(name)
    }

    /// Store a comparison value, overwriting any previous one.
    ///
    /// Overwrites reuse the existing key so repeated writes do not allocate.
    pub fn set_comparison(&mut self, name: &str, time: Time) {
        match self.comparisons.get_mut(name) {
            Some(slot) => *slot = time,
            None => {
                self.comparisons.insert(name.to_owned(), time);
            }
        }
    }

    /// Erase a comparison value, returning it if it was present
    pub fn remove_comparison(&mut self, name: &str) -> Option<Time> {
        self.comparisons.remove(name)
    }
}

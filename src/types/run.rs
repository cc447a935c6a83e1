//! Runs: the ordered segments of one category

use serde::{Deserialize, Serialize};

use super::Segment;

/// The full sequence of segments for one speedrun category.
///
/// Owned by the host; components mutate it in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Game the run belongs to
    #[serde(default)]
    pub game_name: String,

    /// Category within the game
    #[serde(default)]
    pub category_name: String,

    /// Segments in split order
    #[serde(default)]
    pub segments: Vec<Segment>,

    /// Names of comparisons registered beyond the built-in ones
    #[serde(default)]
    pub custom_comparisons: Vec<String>,

    /// Number of attempts started on this run
    #[serde(default)]
    pub attempt_count: u32,

    /// Whether the run has unsaved modifications. Not persisted.
    #[serde(skip)]
    pub has_changed: bool,
}

impl Run {
    /// Create an empty run
    pub fn new(game_name: impl Into<String>, category_name: impl Into<String>) -> Self {
        Self { game_name: game_name.into(), category_name: category_name.into(), ..Self::default() }
    }

    /// Append a segment
    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the run has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First segment, if any
    pub fn first(&self) -> Option<&Segment> {
        self.segments.first()
    }

    /// Last segment, if any
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Segment at `index`
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Mutable segment at `index`
    pub fn segment_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    /// Check if a custom comparison is registered
    pub fn has_custom_comparison(&self, name: &str) -> bool {
        self.custom_comparisons.iter().any(|existing| existing == name)
    }

    /// Register a custom comparison name.
    ///
    /// Returns `false` without modifying the list if the name is already
    /// registered.
    pub fn add_custom_comparison(&mut self, name: &str) -> bool {
        if self.has_custom_comparison(name) {
            return false;
        }
        self.custom_comparisons.push(name.to_owned());
        true
    }

    /// Clear the split time of every segment
    pub fn clear_split_times(&mut self) {
        for segment in &mut self.segments {
            segment.split_time = Default::default();
        }
    }
}

impl<'a> IntoIterator for &'a Run {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a mut Run {
    type Item = &'a mut Segment;
    type IntoIter = std::slice::IterMut<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter_mut()
    }
}

use crate::dataset::{Dataset, Sibling};

/// Result of stepping forward through the siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'a> {
    Moved(&'a Sibling),
    /// Walked past the last sibling; navigation has been reset.
    Exhausted,
}

/// Previous/next stepping through the subtopics that share a scope with the
/// one the user opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiblingNavigator {
    items: Vec<Sibling>,
    current: Option<usize>,
}

impl SiblingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the sibling list for `(branch, topic)` and point at the first
    /// sibling named `subtopic`.
    ///
    /// Matching is by text, so when a scope holds the same subtopic name twice
    /// the first one wins.
    pub fn rebuild(&mut self, dataset: &Dataset, branch: &str, topic: Option<&str>, subtopic: &str) {
        self.items = dataset.sibling_scope(branch, topic);
        self.current = self.items.iter().position(|item| item.subtopic == subtopic);
        log::debug!(
            "sibling scope {}/{} has {} items, current {:?}",
            branch,
            topic.unwrap_or(""),
            self.items.len(),
            self.current
        );
    }

    pub fn items(&self) -> &[Sibling] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the shown sibling, `None` when navigation is inactive.
    pub fn position(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&Sibling> {
        self.current.and_then(|i| self.items.get(i))
    }

    pub fn has_previous(&self) -> bool {
        self.current.is_some_and(|i| i > 0)
    }

    pub fn has_next(&self) -> bool {
        self.next_index() < self.items.len()
    }

    /// Step back one sibling. Does nothing at the first sibling or when
    /// navigation is inactive.
    pub fn previous(&mut self) -> Option<&Sibling> {
        let index = self.current.filter(|&i| i > 0)? - 1;
        self.current = Some(index);
        self.items.get(index)
    }

    /// Step forward one sibling. Past the last one the position is reset
    /// instead of wrapping.
    pub fn next(&mut self) -> Step<'_> {
        let index = self.next_index();
        if index < self.items.len() {
            self.current = Some(index);
            Step::Moved(&self.items[index])
        } else {
            self.current = None;
            Step::Exhausted
        }
    }

    /// Leave navigation; the sibling list stays until the next rebuild.
    pub fn reset(&mut self) {
        self.current = None;
    }

    fn next_index(&self) -> usize {
        self.current.map_or(0, |i| i + 1)
    }
}

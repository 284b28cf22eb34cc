//! Derived views over a [`Dataset`].
//!
//! Nothing here is cached. The sheet is small and static, so every render
//! recomputes the branch and topic lists straight from the records.

use crate::dataset::{Dataset, Record, Sibling};

/// What sits directly under an open branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchLayer<'a> {
    /// The branch groups its subtopics under topics. Topic-less rows of the
    /// same branch are not shown.
    Topics(Vec<&'a str>),
    /// The branch lists its subtopics directly.
    Direct(Vec<Sibling>),
    Empty,
}

fn push_unique<'a>(seen: &mut Vec<&'a str>, value: &'a str) {
    if !seen.contains(&value) {
        seen.push(value);
    }
}

impl Dataset {
    /// Unique branch names in first-seen order.
    pub fn branches(&self) -> Vec<&str> {
        let mut branches = Vec::new();
        for record in self.records() {
            push_unique(&mut branches, &record.branch);
        }
        branches
    }

    /// Unique non-empty topics of `branch`, or `None` if the branch has none.
    pub fn topics_of(&self, branch: &str) -> Option<Vec<&str>> {
        let mut topics = Vec::new();
        for record in self.records() {
            if record.branch == branch && record.has_topic() {
                push_unique(&mut topics, &record.topic);
            }
        }
        if topics.is_empty() { None } else { Some(topics) }
    }

    pub fn has_direct_subtopics(&self, branch: &str) -> bool {
        self.records()
            .iter()
            .any(|r| r.branch == branch && !r.has_topic())
    }

    /// Every topic-less row of `branch`, in sheet order. Duplicate subtopic
    /// names are kept.
    pub fn direct_subtopics_of(&self, branch: &str) -> Vec<Sibling> {
        self.project(|r| r.branch == branch && !r.has_topic())
    }

    pub fn subtopics_of(&self, branch: &str, topic: &str) -> Vec<Sibling> {
        self.project(|r| r.branch == branch && r.topic == topic)
    }

    /// Subtopics sharing the `(branch, topic)` pair. A missing or empty topic
    /// selects the branch's direct subtopics.
    pub fn sibling_scope(&self, branch: &str, topic: Option<&str>) -> Vec<Sibling> {
        match topic {
            Some(topic) if !topic.is_empty() => self.subtopics_of(branch, topic),
            _ => self.direct_subtopics_of(branch),
        }
    }

    /// Which layer to render under `branch`. Topics win over direct rows.
    pub fn layer_of(&self, branch: &str) -> BranchLayer<'_> {
        if let Some(topics) = self.topics_of(branch) {
            BranchLayer::Topics(topics)
        } else if self.has_direct_subtopics(branch) {
            BranchLayer::Direct(self.direct_subtopics_of(branch))
        } else {
            BranchLayer::Empty
        }
    }

    fn project(&self, keep: impl Fn(&Record) -> bool) -> Vec<Sibling> {
        self.records()
            .iter()
            .filter(|r| keep(r))
            .map(Record::to_sibling)
            .collect()
    }
}

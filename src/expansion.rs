//! Which parts of the tree are open.
//!
//! At most one branch, one topic and one subtopic are open at a time. Opening
//! a branch closes any topic and subtopic; opening a topic closes any
//! subtopic. Toggling the root closes everything below it.

/// Heading that should be scrolled into view once the new state is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Branch(String),
    Topic(String),
}

impl ScrollTarget {
    /// DOM id of the heading element, `branch-<name>` or `topic-<name>`.
    pub fn element_id(&self) -> String {
        match self {
            ScrollTarget::Branch(name) => format!("branch-{}", name),
            ScrollTarget::Topic(name) => format!("topic-{}", name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    root_expanded: bool,
    open_branch: Option<String>,
    open_topic: Option<String>,
    open_subtopic: Option<String>,
    pending_scroll: Option<ScrollTarget>,
}

fn toggle(slot: &mut Option<String>, value: &str) {
    if slot.as_deref() == Some(value) {
        *slot = None;
    } else {
        *slot = Some(value.to_string());
    }
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_expanded(&self) -> bool {
        self.root_expanded
    }

    pub fn open_branch(&self) -> Option<&str> {
        self.open_branch.as_deref()
    }

    pub fn open_topic(&self) -> Option<&str> {
        self.open_topic.as_deref()
    }

    pub fn open_subtopic(&self) -> Option<&str> {
        self.open_subtopic.as_deref()
    }

    pub fn is_branch_open(&self, branch: &str) -> bool {
        self.open_branch() == Some(branch)
    }

    pub fn is_topic_open(&self, topic: &str) -> bool {
        self.open_topic() == Some(topic)
    }

    pub fn is_subtopic_open(&self, subtopic: &str) -> bool {
        self.open_subtopic() == Some(subtopic)
    }

    /// Flip the root and clear every inner selection, in both directions.
    pub fn toggle_root(&mut self) {
        self.root_expanded = !self.root_expanded;
        self.open_branch = None;
        self.open_topic = None;
        self.open_subtopic = None;
    }

    pub fn select_branch(&mut self, branch: &str) {
        toggle(&mut self.open_branch, branch);
        self.open_topic = None;
        self.open_subtopic = None;
        self.pending_scroll = Some(ScrollTarget::Branch(branch.to_string()));
    }

    pub fn select_topic(&mut self, topic: &str) {
        toggle(&mut self.open_topic, topic);
        self.open_subtopic = None;
        self.pending_scroll = Some(ScrollTarget::Topic(topic.to_string()));
    }

    /// Open `subtopic`, or close it if it is already the open one.
    pub fn toggle_subtopic(&mut self, subtopic: &str) {
        toggle(&mut self.open_subtopic, subtopic);
    }

    /// Point the open subtopic at `subtopic` without toggling.
    pub fn show_subtopic(&mut self, subtopic: &str) {
        self.open_subtopic = Some(subtopic.to_string());
    }

    /// Hand the pending scroll request to the renderer. Call after the state
    /// it refers to has been rendered.
    pub fn take_scroll(&mut self) -> Option<ScrollTarget> {
        self.pending_scroll.take()
    }
}

//! The viewer state store.
//!
//! [`StudyViewer`] owns the dataset together with the expansion state, the
//! sibling navigator and the selected description. Every user action is a
//! method here; renderers only ever see a [`ViewSnapshot`].

use crate::dataset::{Dataset, Sibling};
use crate::expansion::ExpansionState;
use crate::modal::{Description, ModalView};
use crate::navigator::{SiblingNavigator, Step};
use crate::tree::BranchLayer;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafNode {
    pub subtopic: String,
    pub description: String,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicNode {
    pub name: String,
    pub open: bool,
    /// Present only while the topic is open.
    pub subtopics: Option<Vec<LeafNode>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BranchChildren {
    Topics { topics: Vec<TopicNode> },
    Direct { subtopics: Vec<LeafNode> },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchNode {
    pub name: String,
    pub open: bool,
    /// Present only while the branch is open.
    pub children: Option<BranchChildren>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub title: String,
    pub expanded: bool,
    /// Empty while the root is collapsed.
    pub branches: Vec<BranchNode>,
    pub modal: Option<ModalView>,
    /// The dataset is still being loaded; poll again until this clears.
    pub loading: bool,
    /// Element id to scroll into view after this snapshot is rendered.
    pub scroll_to: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StudyViewer {
    title: String,
    dataset: Dataset,
    expansion: ExpansionState,
    navigator: SiblingNavigator,
    description: Option<Description>,
    loading: bool,
}

impl StudyViewer {
    pub fn new(title: impl Into<String>, dataset: Dataset) -> Self {
        StudyViewer {
            title: title.into(),
            dataset,
            ..Default::default()
        }
    }

    /// A viewer whose dataset is still on its way; see [`install_dataset`].
    ///
    /// [`install_dataset`]: StudyViewer::install_dataset
    pub fn loading(title: impl Into<String>) -> Self {
        StudyViewer {
            title: title.into(),
            loading: true,
            ..Default::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn navigator(&self) -> &SiblingNavigator {
        &self.navigator
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.description.is_some()
    }

    /// Replace the dataset in one go, as when a background load completes.
    pub fn install_dataset(&mut self, dataset: Dataset) {
        log::debug!("installing dataset with {} records", dataset.len());
        self.dataset = dataset;
        self.loading = false;
    }

    pub fn toggle_root(&mut self) {
        self.expansion.toggle_root();
        log::debug!("root expanded: {}", self.expansion.root_expanded());
    }

    pub fn select_branch(&mut self, branch: &str) {
        self.expansion.select_branch(branch);
        log::debug!("open branch: {:?}", self.expansion.open_branch());
    }

    pub fn select_topic(&mut self, topic: &str) {
        self.expansion.select_topic(topic);
        log::debug!("open topic: {:?}", self.expansion.open_topic());
    }

    /// Handle a click on a subtopic.
    ///
    /// Re-clicking the open subtopic closes it in the tree, but the clicked
    /// description is still shown, so the modal stays open.
    pub fn select_subtopic(
        &mut self,
        subtopic: &str,
        description: impl Into<Description>,
        branch: &str,
        topic: Option<&str>,
    ) {
        self.expansion.toggle_subtopic(subtopic);
        self.description = Some(description.into());
        self.navigator.rebuild(&self.dataset, branch, topic, subtopic);
    }

    /// Select a subtopic by name among the leaves currently visible under
    /// the open branch (and open topic, when the branch has topics).
    ///
    /// Returns `false` if no such leaf is visible.
    pub fn select_visible_subtopic(&mut self, subtopic: &str) -> bool {
        let Some(branch) = self.expansion.open_branch().map(str::to_string) else {
            return false;
        };
        let topic = match self.dataset.layer_of(&branch) {
            BranchLayer::Topics(_) => match self.expansion.open_topic() {
                Some(topic) => Some(topic.to_string()),
                None => return false,
            },
            BranchLayer::Direct(_) => None,
            BranchLayer::Empty => return false,
        };

        let found: Option<Sibling> = self
            .dataset
            .sibling_scope(&branch, topic.as_deref())
            .into_iter()
            .find(|leaf| leaf.subtopic == subtopic);

        match found {
            Some(leaf) => {
                self.select_subtopic(&leaf.subtopic, leaf.description, &branch, topic.as_deref());
                true
            }
            None => false,
        }
    }

    /// Step back one sibling. Only acts while the modal is open.
    pub fn previous(&mut self) {
        if !self.is_modal_open() {
            return;
        }
        if let Some(item) = self.navigator.previous() {
            self.expansion.show_subtopic(&item.subtopic);
            self.description = Some(Description::Text(item.description.clone()));
        }
    }

    /// Step to the next sibling; past the last one the modal closes. Only
    /// acts while the modal is open.
    pub fn next(&mut self) {
        if !self.is_modal_open() {
            return;
        }
        match self.navigator.next() {
            Step::Moved(item) => {
                self.expansion.show_subtopic(&item.subtopic);
                self.description = Some(Description::Text(item.description.clone()));
            }
            Step::Exhausted => {
                log::debug!("navigation exhausted, closing modal");
                self.description = None;
            }
        }
    }

    /// Explicit close: hides the modal and ends sibling navigation.
    pub fn close_modal(&mut self) {
        self.description = None;
        self.navigator.reset();
    }

    pub fn modal(&self) -> Option<ModalView> {
        ModalView::present(
            self.expansion.open_subtopic(),
            self.description.as_ref(),
            &self.navigator,
        )
    }

    /// The tree as it should be rendered right now.
    pub fn tree(&self) -> Vec<BranchNode> {
        if !self.expansion.root_expanded() {
            return Vec::new();
        }

        self.dataset
            .branches()
            .into_iter()
            .map(|branch| {
                let open = self.expansion.is_branch_open(branch);
                BranchNode {
                    name: branch.to_string(),
                    open,
                    children: open.then(|| self.children_of(branch)),
                }
            })
            .collect()
    }

    /// Render model for the current state. Drains the pending scroll, so
    /// call it once per rendered frame.
    pub fn snapshot(&mut self) -> ViewSnapshot {
        ViewSnapshot {
            title: self.title.clone(),
            expanded: self.expansion.root_expanded(),
            branches: self.tree(),
            modal: self.modal(),
            loading: self.loading,
            scroll_to: self.expansion.take_scroll().map(|target| target.element_id()),
        }
    }

    fn children_of(&self, branch: &str) -> BranchChildren {
        match self.dataset.layer_of(branch) {
            BranchLayer::Topics(topics) => BranchChildren::Topics {
                topics: topics
                    .into_iter()
                    .map(|topic| {
                        let open = self.expansion.is_topic_open(topic);
                        TopicNode {
                            name: topic.to_string(),
                            open,
                            subtopics: open
                                .then(|| self.leaves(self.dataset.subtopics_of(branch, topic))),
                        }
                    })
                    .collect(),
            },
            BranchLayer::Direct(subtopics) => BranchChildren::Direct {
                subtopics: self.leaves(subtopics),
            },
            BranchLayer::Empty => BranchChildren::Empty,
        }
    }

    fn leaves(&self, siblings: Vec<Sibling>) -> Vec<LeafNode> {
        siblings
            .into_iter()
            .map(|s| LeafNode {
                open: self.expansion.is_subtopic_open(&s.subtopic),
                subtopic: s.subtopic,
                description: s.description,
            })
            .collect()
    }
}

use crate::navigator::SiblingNavigator;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r?\n").unwrap();
}

/// Body of the description modal.
///
/// Both forms end up as an ordered list of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    /// One text; every line becomes a paragraph.
    Text(String),
    /// Already split into paragraphs.
    Paragraphs(Vec<String>),
}

impl Description {
    /// Paragraph texts in display order. Blank lines are kept as empty
    /// paragraphs.
    pub fn paragraphs(&self) -> Vec<String> {
        match self {
            Description::Text(text) => LINE_BREAK.split(text).map(str::to_string).collect(),
            Description::Paragraphs(items) => items.clone(),
        }
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Description::Text(text)
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::Text(text.to_string())
    }
}

impl From<Vec<String>> for Description {
    fn from(items: Vec<String>) -> Self {
        Description::Paragraphs(items)
    }
}

/// What the modal shows. Only exists while a description is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalView {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub show_previous: bool,
    pub show_next: bool,
}

impl ModalView {
    /// Present the modal for the selected description, or `None` when nothing
    /// is selected and the modal is closed.
    pub fn present(
        title: Option<&str>,
        description: Option<&Description>,
        navigator: &SiblingNavigator,
    ) -> Option<Self> {
        let description = description?;
        Some(ModalView {
            title: title.unwrap_or_default().to_string(),
            paragraphs: description.paragraphs(),
            show_previous: navigator.has_previous(),
            show_next: navigator.has_next(),
        })
    }
}

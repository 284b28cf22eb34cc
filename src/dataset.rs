use serde::{Deserialize, Serialize};

/// One row of the study sheet.
///
/// `branch` and `subtopic` are never empty once a record has been built through
/// [`Record::from_row`]. An empty `topic` means the subtopic hangs directly off
/// its branch.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Record {
    pub branch: String,
    pub topic: String,
    pub subtopic: String,
    pub description: String,
}

/// A leaf as it is shown in the tree and stepped through in the modal.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Sibling {
    pub subtopic: String,
    pub description: String,
}

impl Record {
    pub fn new(
        branch: impl Into<String>,
        topic: impl Into<String>,
        subtopic: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Record {
            branch: branch.into(),
            topic: topic.into(),
            subtopic: subtopic.into(),
            description: description.into(),
        }
    }

    /// Build a record from positional cells (branch, topic, subtopic, description).
    ///
    /// Missing cells count as empty. Returns `None` when branch or subtopic is
    /// empty, which is how incomplete rows get dropped at load time.
    pub fn from_row<S: AsRef<str>>(cells: &[Option<S>]) -> Option<Self> {
        let cell = |i: usize| -> String {
            cells
                .get(i)
                .and_then(|c| c.as_ref())
                .map(|c| c.as_ref().to_string())
                .unwrap_or_default()
        };

        let record = Record::new(cell(0), cell(1), cell(2), cell(3));
        if record.branch.is_empty() || record.subtopic.is_empty() {
            return None;
        }
        Some(record)
    }

    pub fn has_topic(&self) -> bool {
        !self.topic.is_empty()
    }

    pub fn to_sibling(&self) -> Sibling {
        Sibling {
            subtopic: self.subtopic.clone(),
            description: self.description.clone(),
        }
    }
}

/// Ordered, immutable collection of records loaded from the sheet.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn empty() -> Self {
        Dataset::default()
    }

    /// Build a dataset from raw rows, skipping the header and every row that
    /// fails [`Record::from_row`].
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: AsRef<[Option<S>]>,
        S: AsRef<str>,
    {
        let records = rows
            .into_iter()
            .skip(1)
            .filter_map(|row| Record::from_row(row.as_ref()))
            .collect();
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

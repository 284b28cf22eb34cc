/*!
# Study Tree

A browser-based study viewer built in Rust.

## Overview

A study sheet lists subjects as rows of `branch, topic, subtopic, description`.
The viewer loads the sheet, shows it as a collapsible tree under a single root
toggle and opens a subtopic's description in a modal. Inside the modal the user
can step to the previous or next subtopic of the same branch/topic without going
back to the tree.

## Architecture

### Data Layer
- **dataset**: `Record` and `Dataset`, the immutable rows of the sheet
- **loader**: xlsx/xls/ods (via calamine) and CSV input, header skipping, row filtering
- **tree**: derived views (branches, topics per branch, direct subtopics, sibling scopes)

### State Layer
- **expansion**: root/branch/topic/subtopic open state and deferred scroll requests
- **navigator**: previous/next stepping through sibling subtopics
- **modal**: description paragraphs and previous/next visibility
- **viewer**: the state store tying the above together and producing `ViewSnapshot`s

### Presentation Layer
- **app** (feature `web`): axum server with a single HTML page and a JSON API
- **render**: plain-text rendering used by the `study-cli` terminal viewer

## REST API Endpoints

- `GET /api/view` - Current snapshot
- `POST /api/root` - Toggle the root
- `POST /api/branch`, `/api/topic` - Toggle a branch or topic
- `POST /api/subtopic` - Open a subtopic's description
- `POST /api/modal/previous`, `/api/modal/next`, `/api/modal/close` - Modal controls
*/

pub mod config;
pub mod dataset;
pub mod error;
pub mod expansion;
pub mod loader;
pub mod modal;
pub mod navigator;
pub mod render;
pub mod tree;
pub mod viewer;

#[cfg(feature = "web")]
pub mod app;

pub use dataset::{Dataset, Record, Sibling};
pub use error::LoadError;
pub use expansion::{ExpansionState, ScrollTarget};
pub use modal::{Description, ModalView};
pub use navigator::{SiblingNavigator, Step};
pub use viewer::{StudyViewer, ViewSnapshot};

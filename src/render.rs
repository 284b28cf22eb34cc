use crate::viewer::{BranchChildren, LeafNode, ViewSnapshot};
use std::fmt::Write;

const OPEN: &str = "▾";
const CLOSED: &str = "▸";

fn marker(open: bool) -> &'static str {
    if open { OPEN } else { CLOSED }
}

fn push_leaves(out: &mut String, leaves: &[LeafNode], indent: &str) {
    for leaf in leaves {
        let bullet = if leaf.open { "•" } else { "·" };
        let _ = writeln!(out, "{}{} {}", indent, bullet, leaf.subtopic);
    }
}

/// Render the tree part of a snapshot as indented text.
pub fn render_tree(snapshot: &ViewSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", marker(snapshot.expanded), snapshot.title);

    if snapshot.expanded && snapshot.branches.is_empty() {
        let _ = writeln!(out, "    (no branches)");
    }

    for branch in &snapshot.branches {
        let _ = writeln!(out, "  {} {}", marker(branch.open), branch.name);
        match &branch.children {
            Some(BranchChildren::Topics { topics }) => {
                for topic in topics {
                    let _ = writeln!(out, "    {} {}", marker(topic.open), topic.name);
                    if let Some(leaves) = &topic.subtopics {
                        push_leaves(&mut out, leaves, "      ");
                    }
                }
            }
            Some(BranchChildren::Direct { subtopics }) => push_leaves(&mut out, subtopics, "    "),
            Some(BranchChildren::Empty) | None => {}
        }
    }
    out
}

/// Render the modal part of a snapshot, or an empty string when it is closed.
pub fn render_modal(snapshot: &ViewSnapshot) -> String {
    let Some(modal) = &snapshot.modal else {
        return String::new();
    };

    let rule = "─".repeat(60);
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{}", modal.title);
    let _ = writeln!(out, "{}", rule);
    for paragraph in &modal.paragraphs {
        let _ = writeln!(out, "{}", paragraph);
    }
    let _ = writeln!(out, "{}", rule);

    let mut controls = vec!["[close]"];
    if modal.show_previous {
        controls.insert(0, "[prev]");
    }
    if modal.show_next {
        controls.push("[next]");
    }
    let _ = writeln!(out, "{}", controls.join("  "));
    out
}

pub fn render(snapshot: &ViewSnapshot) -> String {
    let mut out = render_tree(snapshot);
    out.push_str(&render_modal(snapshot));
    out
}

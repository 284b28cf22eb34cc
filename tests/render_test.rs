mod common;

use common::physics;
use study_tree::render::{render, render_modal, render_tree};
use study_tree::{Dataset, StudyViewer};

#[test]
fn collapsed_root_renders_title_only() {
    let mut viewer = StudyViewer::new("Physics", physics());
    let text = render(&viewer.snapshot());
    assert_eq!(text, "▸ Physics\n");
}

#[test]
fn empty_tree_says_so() {
    let mut viewer = StudyViewer::new("Physics", Dataset::empty());
    viewer.toggle_root();
    assert_eq!(render_tree(&viewer.snapshot()), "▾ Physics\n    (no branches)\n");
}

#[test]
fn open_topic_and_modal() {
    let mut viewer = StudyViewer::new("Physics", physics());
    viewer.toggle_root();
    viewer.select_branch("Optics");
    viewer.select_topic("Wave");
    viewer.select_subtopic("Interference", "Waves add.", "Optics", Some("Wave"));

    let snapshot = viewer.snapshot();
    assert_eq!(
        render_tree(&snapshot),
        "▾ Physics\n  ▾ Optics\n    ▸ Geometric\n    ▾ Wave\n      • Interference\n      · Diffraction\n  ▸ Mechanics\n"
    );

    let modal = render_modal(&snapshot);
    assert!(modal.contains("Interference\n"));
    assert!(modal.contains("Waves add.\n"));
    assert!(modal.ends_with("[close]  [next]\n"));
    assert!(!modal.contains("[prev]"));
}

#[test]
fn closed_modal_renders_nothing() {
    let mut viewer = StudyViewer::new("Physics", physics());
    assert_eq!(render_modal(&viewer.snapshot()), "");
}

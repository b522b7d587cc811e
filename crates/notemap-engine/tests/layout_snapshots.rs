use std::sync::Arc;

use notemap_engine::{LayoutOptions, MountTree, NodePath, layout};
use notemap_testing::fixtures::{geography_tree, notebook_tree, sample_tree};

fn render(mounted: &MountTree, options: &LayoutOptions) -> String {
    layout(mounted, options).to_plain_lines().join("\n")
}

#[test]
fn test_sample_tree_layout() {
    let mounted = MountTree::mount(Arc::new(sample_tree()));

    insta::assert_snapshot!(render(&mounted, &LayoutOptions::default()), @r"
    [-] root ──┬── [-] a ──┬── a1
               │           └── a2
               └── b
    ");
}

#[test]
fn test_collapsed_branch_closes_spine() {
    let mut mounted = MountTree::mount(Arc::new(sample_tree()));
    mounted.toggle_expanded(&NodePath::from(vec![0]));

    insta::assert_snapshot!(render(&mounted, &LayoutOptions::default()), @r"
    [-] root ──┬── [+] a
               └── b
    ");
}

#[test]
fn test_only_child_is_a_straight_line() {
    let mounted = MountTree::mount(Arc::new(geography_tree()));

    insta::assert_snapshot!(render(&mounted, &LayoutOptions::default()), @"[-] Geography ───── France");
    insta::assert_snapshot!(
        render(&mounted, &LayoutOptions::for_zoom(0.5, 24)),
        @"[-] Geography ─── France"
    );
}

#[test]
fn test_open_popup_is_marked() {
    let mut mounted = MountTree::mount(Arc::new(geography_tree()));
    mounted.toggle_popup(&NodePath::from(vec![0]));

    insta::assert_snapshot!(render(&mounted, &LayoutOptions::default()), @"[-] Geography ───── France *");
}

#[test]
fn test_notebook_tree_layout() {
    let mounted = MountTree::mount(Arc::new(notebook_tree()));

    insta::assert_snapshot!(render(&mounted, &LayoutOptions::default()), @r"
    [-] Photosynthesis ──┬── [-] Light reactions ──┬── Photosystem II
                         │                         ├── Electron transport chain
                         │                         └── Photosystem I
                         ├── [-] Calvin cycle ───── RuBisCO
                         └── Outputs
    ");
}

#[test]
fn test_zoomed_out_truncates_labels() {
    let mounted = MountTree::mount(Arc::new(notebook_tree()));
    let result = layout(&mounted, &LayoutOptions::for_zoom(0.5, 24));
    let lines = result.to_plain_lines();

    assert!(lines[1].ends_with("Electron tr…"));
    assert!(result.width < layout(&mounted, &LayoutOptions::default()).width);
}

#[test]
fn test_hit_and_position_agree() {
    let mounted = MountTree::mount(Arc::new(notebook_tree()));
    let result = layout(&mounted, &LayoutOptions::default());

    for path in mounted.visible_paths() {
        let (row, col) = result.position_of(&path).expect("every mounted node is placed");
        assert_eq!(result.hit(col, row).map(|hit| hit.path), Some(path));
    }
    assert_eq!(result.height(), 5);
}

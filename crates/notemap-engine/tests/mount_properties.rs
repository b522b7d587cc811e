use std::sync::Arc;

use notemap_engine::{MountTree, NodePath, PointerHub};
use notemap_testing::fixtures::{chain_tree, generated_tree, geography_tree, sample_tree, wide_tree};

#[test]
fn test_fully_expanded_mounts_every_node() {
    for seed in 1..=40 {
        let tree = generated_tree(seed, 6, 4);
        let expected = tree.node_count();
        let mut mounted = MountTree::mount(Arc::new(tree));

        assert_eq!(mounted.mounted_count(), expected, "seed {}", seed);
        assert_eq!(mounted.visible_paths().len(), expected);

        mounted.toggle_expanded(&NodePath::root());
        let root_expandable = mounted.root().is_expandable();
        assert_eq!(mounted.mounted_count(), 1, "seed {}", seed);
        assert_eq!(mounted.root().is_expanded(), !root_expandable);
    }
}

#[test]
fn test_wide_and_deep_trees() {
    let wide = MountTree::mount(Arc::new(wide_tree(200)));
    assert_eq!(wide.mounted_count(), 201);

    let deep = MountTree::mount(Arc::new(chain_tree(300)));
    assert_eq!(deep.mounted_count(), 300);
    let deepest = NodePath::from(vec![0; 299]);
    assert!(deep.node(&deepest).is_some());
}

#[test]
fn test_geography_expand_availability() {
    let mounted = MountTree::mount(Arc::new(geography_tree()));
    let france = NodePath::from(vec![0]);

    assert!(mounted.root().is_expandable());
    assert!(!mounted.node(&france).unwrap().is_expandable());
    assert_eq!(
        mounted.model_at(&france).map(|n| n.label.as_str()),
        Some("France")
    );
}

#[test]
fn test_popup_independent_of_expand() {
    let mut mounted = MountTree::mount(Arc::new(sample_tree()));
    let a = NodePath::from(vec![0]);

    assert_eq!(mounted.toggle_popup(&a), Some(true));
    mounted.toggle_expanded(&a);
    let node = mounted.node(&a).unwrap();
    assert!(!node.is_expanded());
    assert!(node.is_popup_open());

    assert_eq!(mounted.toggle_popup(&a), Some(false));
    assert!(!mounted.node(&a).unwrap().is_expanded());
}

#[test]
fn test_popup_does_not_survive_remount() {
    let mut mounted = MountTree::mount(Arc::new(sample_tree()));
    let a = NodePath::from(vec![0]);

    mounted.toggle_popup(&a);
    mounted.toggle_expanded(&NodePath::root());
    mounted.toggle_expanded(&NodePath::root());

    assert!(!mounted.node(&a).unwrap().is_popup_open());
    assert!(mounted.open_popups().is_empty());
}

#[test]
fn test_listener_released_on_every_exit_path() {
    let mut mounted = MountTree::mount(Arc::new(sample_tree()));
    let a = NodePath::from(vec![0]);
    let a2 = NodePath::from(vec![0, 1]);
    let b = NodePath::from(vec![1]);

    // explicit close
    mounted.toggle_popup(&b);
    assert_eq!(mounted.hub().active_count(), 1);
    assert!(mounted.close_popup(&b));
    assert_eq!(mounted.hub().active_count(), 0);
    assert!(!mounted.close_popup(&b));

    // toggle off
    mounted.toggle_popup(&b);
    mounted.toggle_popup(&b);
    assert_eq!(mounted.hub().active_count(), 0);

    // ancestor collapse
    mounted.toggle_popup(&a2);
    mounted.toggle_expanded(&a);
    assert_eq!(mounted.hub().active_count(), 0);

    // whole tree unmounted while popups are open
    mounted.toggle_expanded(&a);
    mounted.toggle_popup(&a2);
    mounted.toggle_popup(&b);
    let hub: PointerHub = mounted.hub().clone();
    assert_eq!(hub.active_count(), 2);
    drop(mounted);
    assert_eq!(hub.active_count(), 0);
}

#[test]
fn test_outside_press_closes_other_popups() {
    let mut mounted = MountTree::mount(Arc::new(sample_tree()));
    let a = NodePath::from(vec![0]);
    let b = NodePath::from(vec![1]);

    mounted.toggle_popup(&a);
    mounted.toggle_popup(&b);

    // press inside b: only a closes
    let closed = mounted.pointer_pressed(Some(&b));
    assert_eq!(closed, vec![a.clone()]);
    assert!(mounted.node(&b).unwrap().is_popup_open());

    // press on a node without a popup
    let closed = mounted.pointer_pressed(Some(&NodePath::root()));
    assert_eq!(closed, vec![b.clone()]);
    assert!(mounted.open_popups().is_empty());

    // nothing open: a press is a no-op
    assert!(mounted.pointer_pressed(None).is_empty());
}

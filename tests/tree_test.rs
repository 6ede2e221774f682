//! Tests for the materialized tree view

use rstest::{fixture, rstest};
use serde_json::json;

use menuid::domain::entities::tree_depth;
use menuid::util::testing;
use menuid::{IdManage, MenuTreeNode};

/// A(10) -> D(1010), E(1011) -> F(101110); B(11); C(12)
#[fixture]
fn menus() -> IdManage {
    testing::init_test_setup();
    let mut registry = IdManage::new();
    for name in ["A", "B", "C"] {
        registry.create(None, name).unwrap();
    }
    assert_eq!(registry.create(Some(10), "D").unwrap().id, 1010);
    assert_eq!(registry.create(Some(10), "E").unwrap().id, 1011);
    assert_eq!(registry.create(Some(1011), "F").unwrap().id, 101110);
    registry
}

#[rstest]
fn given_fresh_hierarchy_when_building_tree_then_matches_nested_view(menus: IdManage) {
    let tree = serde_json::to_value(menus.tree()).unwrap();

    assert_eq!(
        tree,
        json!({
            "10": {
                "name": "A",
                "children": {
                    "1010": { "name": "D", "children": null },
                    "1011": {
                        "name": "E",
                        "children": {
                            "101110": { "name": "F", "children": null }
                        }
                    }
                }
            },
            "11": { "name": "B", "children": null },
            "12": { "name": "C", "children": null }
        })
    );
    assert_eq!(menus.depth(), 3);
}

#[test]
fn given_empty_registry_when_building_tree_then_empty() {
    let registry = IdManage::new();
    assert!(registry.tree().is_empty());
    assert_eq!(registry.depth(), 0);
}

#[rstest]
fn given_removed_top_level_when_building_tree_then_subtree_hidden(mut menus: IdManage) {
    menus.remove(10).unwrap();

    let tree = menus.tree();

    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![11, 12]);
}

#[rstest]
fn given_removed_top_level_with_reactivated_descendant_when_building_tree_then_still_hidden(
    mut menus: IdManage,
) {
    menus.remove(10).unwrap();
    menus.remove(1011).unwrap();
    // re-create reactivates the stored record
    assert_eq!(menus.create(Some(10), "E").unwrap().id, 1011);
    assert!(menus.get(1011).unwrap().active);

    let tree = menus.tree();

    assert!(!tree.contains_key(&10));
    assert!(!tree.contains_key(&1011));
    assert_eq!(tree.len(), 2);
}

#[rstest]
fn given_removed_intermediate_when_building_tree_then_active_descendants_pruned(
    mut menus: IdManage,
) {
    menus.remove(1011).unwrap();
    assert!(menus.get(101110).unwrap().active);

    let tree = menus.tree();
    let a = &tree[&10];
    let children = a.children.as_ref().unwrap();

    assert_eq!(children.keys().copied().collect::<Vec<_>>(), vec![1010]);
    assert_eq!(menus.depth(), 2);
}

#[rstest]
fn given_all_children_removed_when_building_tree_then_empty_map_not_null(mut menus: IdManage) {
    menus.remove(1010).unwrap();
    menus.remove(1011).unwrap();

    let tree = menus.tree();

    assert_eq!(
        tree[&10],
        MenuTreeNode {
            name: "A".into(),
            children: Some(Default::default()),
        }
    );
    assert_eq!(
        serde_json::to_value(&tree[&10]).unwrap(),
        json!({ "name": "A", "children": {} })
    );
}

#[rstest]
fn given_reactivated_menu_when_building_tree_then_visible_again(mut menus: IdManage) {
    menus.remove(1011).unwrap();
    menus.create(Some(10), "E").unwrap();

    let tree = menus.tree();
    let e = &tree[&10].children.as_ref().unwrap()[&1011];

    assert_eq!(e.name, "E");
    assert!(e.children.as_ref().unwrap().contains_key(&101110));
    assert_eq!(tree_depth(&tree), 3);
}

#[rstest]
fn given_new_sibling_after_removal_when_building_tree_then_ordered_by_creation(
    mut menus: IdManage,
) {
    menus.remove(1011).unwrap();
    assert_eq!(menus.create(Some(10), "G").unwrap().id, 1012);

    let tree = menus.tree();
    let ids: Vec<u64> = tree[&10].children.as_ref().unwrap().keys().copied().collect();

    assert_eq!(ids, vec![1010, 1012]);
}

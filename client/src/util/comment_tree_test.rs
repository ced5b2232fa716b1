use super::*;

use crate::net::types::test_helpers::make_comment;

fn ids(items: &[&Comment]) -> Vec<String> {
    items.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn roots_and_replies_keep_input_order() {
    let comments = vec![
        make_comment("cm1", "p1", None),
        make_comment("cm2", "p1", Some("cm1")),
        make_comment("cm3", "p1", None),
        make_comment("cm4", "p1", Some("cm1")),
    ];
    let tree = CommentTree::build(&comments, "p1");
    assert_eq!(ids(tree.roots()), ["cm1", "cm3"]);
    assert_eq!(ids(tree.replies_to("cm1")), ["cm2", "cm4"]);
    assert!(tree.replies_to("cm3").is_empty());
    assert_eq!(tree.len(), 4);
}

#[test]
fn other_posts_are_excluded() {
    let comments = vec![make_comment("cm1", "p1", None), make_comment("cm2", "p2", None)];
    let tree = CommentTree::build(&comments, "p2");
    assert_eq!(ids(tree.roots()), ["cm2"]);
}

#[test]
fn orphan_replies_are_dropped() {
    let comments = vec![make_comment("cm1", "p1", None), make_comment("cm2", "p1", Some("gone"))];
    let tree = CommentTree::build(&comments, "p1");
    assert_eq!(tree.len(), 1);
    assert!(tree.replies_to("gone").is_empty());
}

#[test]
fn empty_input_builds_empty_tree() {
    let tree = CommentTree::build(&[], "p1");
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

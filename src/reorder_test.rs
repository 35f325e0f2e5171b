use super::*;
use crate::test_helpers::{board_of, column_ids, task_ids};

fn loc(container: &str, index: usize) -> Location {
    Location::new(container, index)
}

// =============================================================
// Sequence primitives
// =============================================================

#[test]
fn remove_at_splits_element() {
    let (item, rest) = remove_at(&[1, 2, 3], 1).unwrap();
    assert_eq!(item, 2);
    assert_eq!(rest, vec![1, 3]);
}

#[test]
fn remove_at_past_end_is_none() {
    assert!(remove_at(&[1, 2, 3], 3).is_none());
    assert!(remove_at::<i32>(&[], 0).is_none());
}

#[test]
fn insert_clamped_within_range() {
    let mut v = vec![1, 2, 3];
    assert_eq!(insert_clamped(&mut v, 1, 9), 1);
    assert_eq!(v, vec![1, 9, 2, 3]);
}

#[test]
fn insert_clamped_past_end_appends() {
    let mut v = vec![1, 2];
    assert_eq!(insert_clamped(&mut v, 99, 9), 2);
    assert_eq!(v, vec![1, 2, 9]);
}

#[test]
fn move_within_uses_post_removal_indices() {
    // Splice semantics: after removing index 0, index 2 is past the old "c".
    assert_eq!(move_within(&["a", "b", "c", "d"], 0, 2).unwrap(), vec!["b", "c", "a", "d"]);
    assert_eq!(move_within(&["a", "b", "c", "d"], 3, 0).unwrap(), vec!["d", "a", "b", "c"]);
}

#[test]
fn move_within_self_move_is_identity() {
    let seq = ["a", "b", "c"];
    for i in 0..seq.len() {
        assert_eq!(move_within(&seq, i, i).unwrap(), seq.to_vec());
    }
}

// =============================================================
// Container reorder
// =============================================================

#[test]
fn container_reorder_moves_column() {
    let board = board_of(&[("A", &["t1"]), ("B", &[]), ("C", &["t2"])]);
    let next = resolve(&board, DragKind::ContainerReorder, &loc("all-columns", 0), &loc("all-columns", 2));
    assert_eq!(column_ids(&next), vec!["B", "C", "A"]);
    assert_eq!(task_ids(&next, "A"), vec!["t1"]);
    assert_eq!(next.task_count(), board.task_count());
}

#[test]
fn container_reorder_unknown_list_is_noop() {
    let board = board_of(&[("A", &[]), ("B", &[])]);

    let err = try_resolve(&board, DragKind::ContainerReorder, &loc("nope", 0), &loc("Z", 1)).unwrap_err();
    assert_eq!(err, ResolveError::UnknownContainer("nope".into()));

    let err = try_resolve(&board, DragKind::ContainerReorder, &loc("all-columns", 1), &loc("A", 0)).unwrap_err();
    assert_eq!(err, ResolveError::UnknownContainer("A".into()));

    assert_eq!(resolve(&board, DragKind::ContainerReorder, &loc("nope", 0), &loc("Z", 1)), board);
}

#[test]
fn container_reorder_clamps_destination() {
    let board = board_of(&[("A", &[]), ("B", &[]), ("C", &[])]);
    let next = resolve(&board, DragKind::ContainerReorder, &loc("all-columns", 0), &loc("all-columns", 50));
    assert_eq!(column_ids(&next), vec!["B", "C", "A"]);
}

#[test]
fn container_reorder_self_move_is_identity() {
    let board = board_of(&[("A", &["t1"]), ("B", &["t2"])]);
    let next = resolve(&board, DragKind::ContainerReorder, &loc("all-columns", 1), &loc("all-columns", 1));
    assert_eq!(next, board);
}

#[test]
fn container_reorder_bad_source_index_is_noop() {
    let board = board_of(&[("A", &[]), ("B", &[])]);
    let err = try_resolve(&board, DragKind::ContainerReorder, &loc("all-columns", 5), &loc("all-columns", 0))
        .unwrap_err();
    assert!(matches!(err, ResolveError::SourceIndexOutOfRange { index: 5, len: 2, .. }));
    assert_eq!(resolve(&board, DragKind::ContainerReorder, &loc("all-columns", 5), &loc("all-columns", 0)), board);
}

// =============================================================
// Item reorder: same container
// =============================================================

#[test]
fn same_column_moves_task_down() {
    let board = board_of(&[("A", &["t1", "t2", "t3"])]);
    let next = resolve(&board, DragKind::ItemReorder, &loc("A", 0), &loc("A", 2));
    assert_eq!(task_ids(&next, "A"), vec!["t2", "t3", "t1"]);
}

#[test]
fn same_column_moves_task_up() {
    let board = board_of(&[("A", &["t1", "t2", "t3"])]);
    let next = resolve(&board, DragKind::ItemReorder, &loc("A", 2), &loc("A", 0));
    assert_eq!(task_ids(&next, "A"), vec!["t3", "t1", "t2"]);
}

#[test]
fn same_column_clamps_to_post_removal_length() {
    let board = board_of(&[("A", &["t1", "t2", "t3"])]);
    let next = resolve(&board, DragKind::ItemReorder, &loc("A", 0), &loc("A", 3));
    assert_eq!(task_ids(&next, "A"), vec!["t2", "t3", "t1"]);
}

#[test]
fn same_column_self_move_is_identity() {
    let board = board_of(&[("A", &["t1", "t2"]), ("B", &["t3"])]);
    let next = resolve(&board, DragKind::ItemReorder, &loc("A", 1), &loc("A", 1));
    assert_eq!(next, board);
}

#[test]
fn same_column_leaves_siblings_untouched() {
    let board = board_of(&[("A", &["t1", "t2"]), ("B", &["t3"])]);
    let next = resolve(&board, DragKind::ItemReorder, &loc("A", 0), &loc("A", 1));
    assert_eq!(next.columns[1], board.columns[1]);
}

// =============================================================
// Item reorder: cross container
// =============================================================

#[test]
fn scenario_a_cross_column_append() {
    let board = board_of(&[("A", &["t1", "t2"]), ("B", &["t3"])]);
    let next = resolve(&board, DragKind::ItemReorder, &loc("A", 0), &loc("B", 1));
    assert_eq!(task_ids(&next, "A"), vec!["t2"]);
    assert_eq!(task_ids(&next, "B"), vec!["t3", "t1"]);
}

#[test]
fn cross_column_insert_at_front() {
    let board = board_of(&[("A", &["t1", "t2"]), ("B", &["t3"])]);
    let next = resolve(&board, DragKind::ItemReorder, &loc("A", 1), &loc("B", 0));
    assert_eq!(task_ids(&next, "A"), vec!["t1"]);
    assert_eq!(task_ids(&next, "B"), vec!["t2", "t3"]);
}

#[test]
fn cross_column_clamps_destination_index() {
    let board = board_of(&[("A", &["t1"]), ("B", &["t2", "t3"])]);
    let next = resolve(&board, DragKind::ItemReorder, &loc("A", 0), &loc("B", 40));
    assert_eq!(task_ids(&next, "B"), vec!["t2", "t3", "t1"]);
}

#[test]
fn cross_column_into_empty_column() {
    let board = board_of(&[("A", &["t1"]), ("B", &[])]);
    let next = resolve(&board, DragKind::ItemReorder, &loc("A", 0), &loc("B", 3));
    assert!(task_ids(&next, "A").is_empty());
    assert_eq!(task_ids(&next, "B"), vec!["t1"]);
}

#[test]
fn cross_column_conserves_identity_and_count() {
    let board = board_of(&[("A", &["t1", "t2"]), ("B", &["t3"]), ("C", &["t4"])]);
    let next = resolve(&board, DragKind::ItemReorder, &loc("A", 1), &loc("C", 0));

    assert_eq!(next.task_count(), board.task_count());
    let hits: Vec<_> = next
        .columns
        .iter()
        .filter(|c| c.tasks.iter().any(|t| t.id == "t2"))
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(hits, vec!["C"]);
    assert_eq!(next.columns[1], board.columns[1]);
}

#[test]
fn cross_column_leftward_move() {
    let board = board_of(&[("A", &["t1"]), ("B", &["t2", "t3"])]);
    let next = resolve(&board, DragKind::ItemReorder, &loc("B", 1), &loc("A", 0));
    assert_eq!(task_ids(&next, "A"), vec!["t3", "t1"]);
    assert_eq!(task_ids(&next, "B"), vec!["t2"]);
}

// =============================================================
// Fail-closed edges
// =============================================================

#[test]
fn unknown_source_container_is_noop() {
    let board = board_of(&[("A", &["t1"]), ("B", &[])]);
    let err = try_resolve(&board, DragKind::ItemReorder, &loc("Z", 0), &loc("B", 0)).unwrap_err();
    assert_eq!(err, ResolveError::UnknownContainer("Z".into()));
    assert_eq!(resolve(&board, DragKind::ItemReorder, &loc("Z", 0), &loc("B", 0)), board);
}

#[test]
fn unknown_destination_container_is_noop() {
    let board = board_of(&[("A", &["t1"]), ("B", &[])]);
    let err = try_resolve(&board, DragKind::ItemReorder, &loc("A", 0), &loc("all-columns", 0)).unwrap_err();
    assert_eq!(err, ResolveError::UnknownContainer("all-columns".into()));
}

#[test]
fn empty_source_slot_is_noop() {
    let board = board_of(&[("A", &["t1"]), ("B", &[])]);
    let err = try_resolve(&board, DragKind::ItemReorder, &loc("A", 1), &loc("B", 0)).unwrap_err();
    assert!(matches!(err, ResolveError::SourceIndexOutOfRange { index: 1, len: 1, .. }));
    assert_eq!(resolve(&board, DragKind::ItemReorder, &loc("A", 1), &loc("B", 0)), board);
}

#[test]
fn count_conserved_over_many_moves() {
    let board = board_of(&[("A", &["t1", "t2", "t3"]), ("B", &["t4"]), ("C", &[])]);
    let moves = [
        (loc("A", 0), loc("B", 0)),
        (loc("B", 1), loc("C", 9)),
        (loc("A", 1), loc("A", 0)),
        (loc("C", 0), loc("A", 2)),
        (loc("Q", 0), loc("A", 0)),
    ];
    let mut current = board.clone();
    for (src, dst) in &moves {
        current = resolve(&current, DragKind::ItemReorder, src, dst);
        assert_eq!(current.task_count(), board.task_count());
    }
}

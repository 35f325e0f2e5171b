use super::*;
use crate::test_helpers::{board_of, TEST_BOARD_ID};

#[tokio::test]
async fn replace_columns_updates_board_and_records_write() {
    let store = MemoryBoardStore::with_boards(vec![board_of(&[("A", &["t1"])])]);
    let next = board_of(&[("A", &[]), ("B", &["t1"])]);

    store.replace_columns(TEST_BOARD_ID, &next.columns).await.unwrap();

    assert_eq!(store.board(TEST_BOARD_ID).await.unwrap().columns, next.columns);
    let writes = store.writes().await;
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].board_id, TEST_BOARD_ID);
    assert_eq!(writes[0].columns, next.columns);
}

#[tokio::test]
async fn unknown_board_is_not_found() {
    let store = MemoryBoardStore::new();
    let err = store.replace_columns("nope", &[]).await.unwrap_err();
    assert!(matches!(err, StoreError::BoardNotFound(ref id) if id == "nope"));
    assert!(store.writes().await.is_empty());
}

#[tokio::test]
async fn armed_failure_rejects_writes_until_cleared() {
    let store = MemoryBoardStore::with_boards(vec![board_of(&[("A", &[])])]);
    store.set_failure(Some("offline")).await;

    let err = store.replace_columns(TEST_BOARD_ID, &[]).await.unwrap_err();
    assert!(matches!(err, StoreError::Injected(ref m) if m == "offline"));
    assert_eq!(store.board(TEST_BOARD_ID).await.unwrap().columns.len(), 1);

    store.set_failure(None).await;
    store.replace_columns(TEST_BOARD_ID, &[]).await.unwrap();
    assert!(store.board(TEST_BOARD_ID).await.unwrap().columns.is_empty());
}

#[tokio::test]
async fn fetch_boards_sorted_by_id() {
    let mut b2 = board_of(&[]);
    b2.id = "board-2".into();
    let store = MemoryBoardStore::with_boards(vec![b2, board_of(&[("A", &[])])]);

    let boards = store.fetch_boards().await.unwrap();
    let ids: Vec<_> = boards.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["board-1", "board-2"]);
}

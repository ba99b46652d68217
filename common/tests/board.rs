mod helpers;

use chrono::Utc;
use helpers::{client, memo_json, FakeTransport};
use memo_common::{Board, Memo, MemoId};
use serde_json::json;

fn fetched() -> Vec<Memo> {
    serde_json::from_value(json!([
        memo_json(3, "Groceries", "milk", &["home", "errands"]),
        memo_json(1, "Standup", "notes", &[]),
        memo_json(2, "Ideas", "more", &["x"]),
    ]))
    .unwrap()
}

#[test]
fn renders_one_card_per_memo_in_fetch_order() {
    let mut board = Board::default();
    board.replace(fetched());

    let cards = board.cards(&Utc);

    let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Groceries", "Standup", "Ideas"]);
    assert_eq!(cards[0].tag_text, "#home, errands");
    assert_eq!(cards[1].tag_text, "#");
    assert_eq!(cards[2].tag_text, "#x");
    for card in &cards {
        assert_eq!(card.updated_label, "2024-05-02 10:15:30");
    }
}

#[test]
fn begin_edit_prefills_the_draft() {
    let mut board = Board::default();
    board.replace(fetched());

    let draft = board.begin_edit(&MemoId::Number(3)).cloned().unwrap();

    assert_eq!(draft.title, "Groceries");
    assert_eq!(draft.content, "milk");
    assert_eq!(draft.tags, "home, errands");
    assert_eq!(board.draft_for(&MemoId::Number(3)), Some(&draft));
    assert_eq!(board.draft_for(&MemoId::Number(1)), None);
}

#[test]
fn only_one_card_is_edited_at_a_time() {
    let mut board = Board::default();
    board.replace(fetched());

    board.begin_edit(&MemoId::Number(3));
    board.begin_edit(&MemoId::Number(2));

    assert!(board.draft_for(&MemoId::Number(3)).is_none());
    assert_eq!(board.editing().map(|d| &d.id), Some(&MemoId::Number(2)));
}

#[test]
fn begin_edit_on_unknown_id_leaves_board_unchanged() {
    let mut board = Board::default();
    board.replace(fetched());

    assert!(board.begin_edit(&MemoId::Number(42)).is_none());
    assert!(board.editing().is_none());
}

#[test]
fn cancel_discards_changes_and_keeps_the_original_title() {
    let api = client(FakeTransport::default());
    let mut board = Board::default();
    board.replace(fetched());
    let before = board.memos().to_vec();

    let mut draft = board.begin_edit(&MemoId::Number(1)).cloned().unwrap();
    draft.title = "Something else".into();
    let discarded = board.cancel_edit();

    assert_eq!(discarded.map(|d| d.title), Some("Standup".to_owned()));
    assert!(board.editing().is_none());
    assert_eq!(board.memos(), before.as_slice());
    assert_eq!(board.cards(&Utc)[1].title, "Standup");
    assert!(api.transport().requests().is_empty());
}

#[test]
fn replacing_the_list_closes_the_editor() {
    let mut board = Board::default();
    board.replace(fetched());
    board.begin_edit(&MemoId::Number(2));

    board.replace(fetched());

    assert!(board.editing().is_none());
}

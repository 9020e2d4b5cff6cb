use super::*;
use crate::fixture;

#[test]
fn test_first_conversation_selected_and_read() {
    let board = ChatBoard::new(fixture::conversations());
    let selected = board.selected().unwrap();
    assert_eq!(selected.id, 1);
    assert_eq!(selected.unread, 0);
    assert!(board.is_selected(1));
    assert!(!board.is_selected(2));
}

#[test]
fn test_select_clears_unread() {
    let mut board = ChatBoard::new(fixture::conversations());
    let before = board.total_unread();

    let chat = board.select(2).unwrap();
    assert_eq!(chat.name, "Study Group - Physics");
    assert_eq!(board.total_unread(), before - 5);
}

#[test]
fn test_select_unknown_keeps_current() {
    let mut board = ChatBoard::new(fixture::conversations());
    board.select(3).unwrap();
    assert!(board.select(42).unwrap_err().is_not_found());
    assert!(board.is_selected(3));
}

#[test]
fn test_send_appends_to_selected_conversation() {
    let mut board = ChatBoard::new(fixture::conversations());
    board.select(3).unwrap();
    let before = board.selected().unwrap().messages.len();

    let sent = board.send("  Thank you, professor! ", "3:05 PM").unwrap();
    assert_eq!(sent.text, "Thank you, professor!");
    assert!(sent.is_mine());

    let chat = board.selected().unwrap();
    assert_eq!(chat.messages.len(), before + 1);
    assert_eq!(chat.last_message, "Thank you, professor!");
    assert_eq!(chat.time, "3:05 PM");
    // 其他会话不受影响
    assert_eq!(board.conversations()[0].last_message, fixture::conversations()[0].last_message);
}

#[test]
fn test_send_blank_message_is_rejected() {
    let mut board = ChatBoard::new(fixture::conversations());
    let before = board.selected().unwrap().clone();
    let err = board.send("   ", "3:05 PM").unwrap_err();
    assert_eq!(err.status, crate::PortalErrorStatus::InvalidInput);
    assert_eq!(board.selected(), Some(&before));
}

#[test]
fn test_send_without_selection_is_not_found() {
    let mut board = ChatBoard::default();
    assert!(board.send("hello", "3:05 PM").unwrap_err().is_not_found());
}

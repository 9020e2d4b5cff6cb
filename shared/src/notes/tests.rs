use super::*;
use crate::fixture;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
}

fn draft(title: &str) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        content: "Ohm's law: V = IR".to_string(),
        subject: "Physics".to_string(),
        tags: " circuits, ,physics ".to_string(),
        color: NoteColor::Red,
    }
}

// =========================================================
// 搜索与选择
// =========================================================

#[test]
fn test_first_note_selected_initially() {
    let notes = NoteList::new(fixture::notes());
    assert_eq!(notes.selected().map(|n| n.id), Some(1));
    assert_eq!(NoteList::default().selected(), None);
}

#[test]
fn test_search_matches_title_content_and_subject() {
    let mut notes = NoteList::new(fixture::notes());

    notes.set_query("NEWTON");
    let ids: Vec<u32> = notes.visible().map(|n| n.id).collect();
    assert_eq!(ids, vec![2]);

    // 只出现在正文中
    notes.set_query("mitosis");
    let ids: Vec<u32> = notes.visible().map(|n| n.id).collect();
    assert_eq!(ids, vec![4]);

    notes.set_query("chemistry");
    assert_eq!(notes.visible().count(), 1);

    notes.set_query("   ");
    assert_eq!(notes.visible().count(), 4);
}

#[test]
fn test_search_keeps_selection() {
    let mut notes = NoteList::new(fixture::notes());
    notes.set_query("biology");
    assert_eq!(notes.selected().map(|n| n.id), Some(1));
}

#[test]
fn test_select_unknown_note_is_not_found() {
    let mut notes = NoteList::new(fixture::notes());
    let err = notes.select(99).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(notes.selected().map(|n| n.id), Some(1));

    assert_eq!(notes.select(3).unwrap().subject, "Chemistry");
}

// =========================================================
// 新建
// =========================================================

#[test]
fn test_add_inserts_first_and_selects() {
    let mut notes = NoteList::new(fixture::notes());
    let added = notes.add(draft("  Electricity "), today()).unwrap();
    assert_eq!(added.id, 5);
    assert_eq!(added.title, "Electricity");
    assert_eq!(added.tags, vec!["circuits", "physics"]);
    assert_eq!(added.date, today());

    assert_eq!(notes.notes()[0].id, 5);
    assert_eq!(notes.selected().map(|n| n.id), Some(5));
}

#[test]
fn test_add_rejects_blank_title() {
    let mut notes = NoteList::new(fixture::notes());
    let err = notes.add(draft("  "), today()).unwrap_err();
    assert_eq!(err.status, crate::PortalErrorStatus::InvalidInput);
    assert_eq!(notes.notes().len(), 4);
    assert_eq!(notes.selected().map(|n| n.id), Some(1));
}

#[test]
fn test_add_rejects_exhausted_id_space() {
    let mut notes = NoteList::new(vec![Note {
        id: u32::MAX,
        title: "Imported".to_string(),
        content: String::new(),
        subject: String::new(),
        date: today(),
        tags: Vec::new(),
        color: NoteColor::Blue,
    }]);
    let err = notes.add(draft("New"), today()).unwrap_err();
    assert_eq!(err.status, crate::PortalErrorStatus::InvalidInput);
    assert_eq!(notes.notes().len(), 1);
}

#[test]
fn test_unknown_color_falls_back_to_blue() {
    assert_eq!(NoteColor::parse("Purple"), NoteColor::Purple);
    assert_eq!(NoteColor::parse("teal"), NoteColor::Blue);
}

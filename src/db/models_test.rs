//! Tests for the domain model.

use chrono::Utc;

use crate::db::{DoneFilter, Todo};

#[test]
fn new_todo_starts_not_done_with_no_id() {
    let todo = Todo::new("buy milk", Utc::now());
    assert_eq!(todo.title, "buy milk");
    assert!(!todo.done);
    assert!(todo.id.is_none());
}

#[test]
fn unsaved_todo_serializes_without_an_id_field() {
    // The store assigns `_id`; an explicit null would defeat that.
    let todo = Todo::new("buy milk", Utc::now());
    let doc = bson::to_document(&todo).unwrap();
    assert!(!doc.contains_key("_id"));
    assert_eq!(doc.get_str("title").unwrap(), "buy milk");
    assert!(!doc.get_bool("done").unwrap());
}

#[test]
fn done_filter_parses_truthy_aliases() {
    for value in ["true", "1", "t", "on", "TRUE", "On", "T"] {
        assert_eq!(value.parse::<DoneFilter>(), Ok(DoneFilter::Only(true)), "{value}");
    }
}

#[test]
fn done_filter_parses_falsy_aliases() {
    for value in ["false", "0", "f", "off", "FALSE", "Off", "F"] {
        assert_eq!(value.parse::<DoneFilter>(), Ok(DoneFilter::Only(false)), "{value}");
    }
}

#[test]
fn done_filter_treats_empty_as_match_all() {
    assert_eq!("".parse::<DoneFilter>(), Ok(DoneFilter::All));
}

#[test]
fn done_filter_rejects_unknown_values() {
    for value in ["xyz", "yes", "no", "2", "truee", " true"] {
        assert!(value.parse::<DoneFilter>().is_err(), "{value}");
    }
}

#[test]
fn done_filter_matches_items() {
    let mut todo = Todo::new("buy milk", Utc::now());
    assert!(DoneFilter::All.matches(&todo));
    assert!(DoneFilter::Only(false).matches(&todo));
    assert!(!DoneFilter::Only(true).matches(&todo));

    todo.done = true;
    assert!(DoneFilter::Only(true).matches(&todo));
}

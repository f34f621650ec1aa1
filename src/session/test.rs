use super::*;

fn session() -> Session {
    Session::new(&AppConfig::default())
}

#[test]
fn test_action_lines_and_state() {
    let mut s = session();
    assert_eq!(s.run_line("move"), vec!["The character moves."]);
    assert_eq!(s.stance(), Stance::Moving);
    assert_eq!(s.active, Target::Character);

    let lines = s.run_line("undo");
    assert_eq!(lines, vec!["The character stops its action.", "Undid move (character)"]);
    assert_eq!(s.stance(), Stance::Idle);

    let lines = s.run_line("redo");
    assert_eq!(lines, vec!["The character moves. (replayed)", "Redid move (character)"]);
}

#[test]
fn test_write_switches_active_target() {
    let mut s = session();
    s.run_line("attack");
    assert_eq!(s.run_line("write hello"), vec!["[written] hello"]);
    assert_eq!(s.active, Target::Editor);

    // bare undo goes to the editor now
    s.run_line("undo");
    assert_eq!(s.memo(), "");
    assert_eq!(s.stance(), Stance::Attacking);

    s.run_line("undo character");
    assert_eq!(s.stance(), Stance::Idle);
}

#[test]
fn test_use_and_empty_undo() {
    let mut s = session();
    assert_eq!(s.run_line("use editor"), vec!["Active target: editor"]);
    assert_eq!(s.run_line("undo"), vec!["Nothing to undo"]);
    assert_eq!(s.run_line("redo"), vec!["Nothing to redo"]);
    assert_eq!(s.run_line("undo"), vec!["Nothing to undo"]);
}

#[test]
fn test_history_listing() {
    let mut s = session();
    s.run_line("write a");
    s.run_line("write b");
    s.run_line("undo");

    assert_eq!(s.run_line("history"), vec![
        "done (1): [snapshot \"a\"]",
        "undone (1): [snapshot \"b\"]",
        "next undo: snapshot \"a\" | next redo: snapshot \"b\"",
        "limit: unbounded",
    ]);
    assert!(s.run_line("status")[0].ends_with("can undo: true | can redo: true | has history: true"));
}

#[test]
fn test_listing_on_empty_history() {
    let config = AppConfig { history_limit: 4, ..AppConfig::default() };
    let mut s = Session::new(&config);
    s.run_line("move");
    s.run_line("undo");

    assert_eq!(s.run_line("history"), vec![
        "done (0): []",
        "undone (1): [move]",
        "next undo: none | next redo: move",
        "limit: 4",
    ]);
    assert!(s.run_line("status")[0].ends_with("can undo: false | can redo: true | has history: false"));
}

#[test]
fn test_clear_keeps_receiver_state() {
    let mut s = session();
    s.run_line("defend");
    assert_eq!(s.run_line("clear"), vec!["Cleared character history"]);
    assert_eq!(s.stance(), Stance::Defending);
    assert_eq!(s.run_line("undo"), vec!["Nothing to undo"]);
}

#[test]
fn test_history_limit_from_config() {
    let config = AppConfig { history_limit: 2, ..AppConfig::default() };
    let mut s = Session::new(&config);
    s.run_line("write 1");
    s.run_line("write 2");
    s.run_line("write 3");

    assert_eq!(s.edits.undo_len(), 2);
    s.run_line("undo");
    s.run_line("undo");
    assert_eq!(s.memo(), "1");
    assert_eq!(s.run_line("undo"), vec!["Nothing to undo"]);
}

#[test]
fn test_unknown_and_quit() {
    let mut s = session();
    assert_eq!(s.run_line("dance"), vec!["Unknown command: dance"]);
    assert!(s.run_line("").is_empty());
    assert!(!s.should_quit);
    s.run_line("quit");
    assert!(s.should_quit);
}

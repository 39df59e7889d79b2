//! Tests for incremental reply printing.

use client::{APOLOGY, Conversation, GREETING, Turn};
use fitb_cli::repl::TurnPrinter;

fn print(printer: &mut TurnPrinter, turns: &[Turn]) -> String {
    let mut out = Vec::new();
    printer
        .write(&Conversation::new(turns.to_vec()), &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn prints_only_new_text() {
    let mut printer = TurnPrinter::default();
    let user = Turn::user("hi");

    assert_eq!(print(&mut printer, &[user.clone(), Turn::assistant("")]), "");
    assert_eq!(
        print(&mut printer, &[user.clone(), Turn::assistant("Great")]),
        "Great"
    );
    assert_eq!(
        print(&mut printer, &[user, Turn::assistant("Great question!")]),
        " question!"
    );
}

#[test]
fn skips_user_turns() {
    let mut printer = TurnPrinter::default();
    assert_eq!(print(&mut printer, &[Turn::user("hi")]), "");
}

#[test]
fn apology_after_partial_starts_new_line() {
    let mut printer = TurnPrinter::default();
    let partial = [Turn::assistant(GREETING), Turn::user("hi"), Turn::assistant("Do ten")];
    assert_eq!(print(&mut printer, &partial), "Do ten");

    let mut failed = partial.to_vec();
    failed.push(Turn::assistant(APOLOGY));
    assert_eq!(print(&mut printer, &failed), format!("\n{APOLOGY}"));
}

#[test]
fn apology_filling_placeholder_prints_once() {
    let mut printer = TurnPrinter::default();
    let mut turns = vec![Turn::user("hi"), Turn::assistant("")];
    assert_eq!(print(&mut printer, &turns), "");

    turns[1] = Turn::assistant(APOLOGY);
    assert_eq!(print(&mut printer, &turns), APOLOGY);
    assert_eq!(print(&mut printer, &turns), "");
}

//! Scripted end-to-end sessions: stdin is a prepared script, stdout is
//! captured, the data file lives in a temp directory, and the document
//! opener is a recording fake.

use std::cell::RefCell;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use chrono::NaiveDate;
use satchel_cli::menu::Session;
use satchel_cli::opener::{DocumentOpener, OpenError};
use satchel_store::AssignmentStore;
use tempfile::tempdir;

#[derive(Default)]
struct FakeOpener {
    opened: RefCell<Vec<String>>,
}

impl DocumentOpener for FakeOpener {
    fn open(&self, path: &str) -> Result<(), OpenError> {
        self.opened.borrow_mut().push(path.to_string());
        Ok(())
    }
}

struct FailingOpener;

impl DocumentOpener for FailingOpener {
    fn open(&self, path: &str) -> Result<(), OpenError> {
        Err(OpenError {
            path: path.to_string(),
            source: std::io::Error::other("no handler registered"),
        })
    }
}

/// Runs one scripted session against `path` with today fixed to
/// 10/06/2025; returns everything written to the output stream.
fn run_session(path: &Path, opener: &dyn DocumentOpener, script: &str) -> String {
    let store = AssignmentStore::load(path).unwrap();
    let mut output = Vec::new();
    let mut session = Session::new(store, Cursor::new(script.to_string()), &mut output, opener, || {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    });
    session.run().unwrap();
    drop(session);
    String::from_utf8(output).unwrap()
}

#[test]
fn add_then_exit_persists_the_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");

    let output = run_session(
        &path,
        &FakeOpener::default(),
        "1\nEssay\nHistory\n01/01/2030\n\n\n4\n",
    );

    assert!(output.contains("Assignment #1 added."));
    assert_eq!(fs::read(&path).unwrap(), b"1|Essay|History|01/01/2030|\n");
}

#[test]
fn view_opens_the_attached_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");
    fs::write(&path, "1|Essay|History|11/06/2025|notes/essay.pdf\n").unwrap();

    let opener = FakeOpener::default();
    let output = run_session(&path, &opener, "2\n1\n\n4\n");

    assert!(output.contains("URGENT"));
    assert!(output.contains("1 days"));
    assert!(output.contains("Opening notes/essay.pdf"));
    assert_eq!(*opener.opened.borrow(), ["notes/essay.pdf"]);
}

#[test]
fn view_reports_missing_documents_and_unknown_ids_the_same_way() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");
    fs::write(&path, "1|Essay|History|11/06/2025|\n").unwrap();

    let opener = FakeOpener::default();
    let no_document = run_session(&path, &opener, "2\n1\n\n4\n");
    assert!(no_document.contains("No such assignment or no document attached."));

    let unknown_id = run_session(&path, &opener, "2\n9\n\n4\n");
    assert!(unknown_id.contains("No such assignment or no document attached."));

    assert!(opener.opened.borrow().is_empty());
}

#[test]
fn zero_at_the_open_prompt_goes_back_silently() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");
    fs::write(&path, "1|Essay|History|11/06/2025|notes.pdf\n").unwrap();

    let opener = FakeOpener::default();
    let output = run_session(&path, &opener, "2\n0\n\n4\n");

    assert!(!output.contains("No such assignment"));
    assert!(opener.opened.borrow().is_empty());
}

#[test]
fn a_blank_line_at_an_id_prompt_cancels() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");
    fs::write(&path, "1|Essay|History|01/01/2030|\n").unwrap();
    let before = fs::read(&path).unwrap();

    let output = run_session(&path, &FakeOpener::default(), "3\n\n\n4\n");

    assert!(!output.contains("is not an assignment id"));
    assert!(!output.contains("marked complete"));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn complete_removes_the_record_and_rewrites_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");
    fs::write(
        &path,
        "1|Essay|History|01/01/2030|\n2|Quiz|Maths|05/01/2030|\n",
    )
    .unwrap();

    let output = run_session(&path, &FakeOpener::default(), "3\n1\n\n4\n");

    assert!(output.contains("Assignment #1 marked complete."));
    assert_eq!(fs::read(&path).unwrap(), b"2|Quiz|Maths|05/01/2030|\n");
}

#[test]
fn completing_an_unknown_id_leaves_the_file_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");
    fs::write(&path, "1|Essay|History|01/01/2030|\n").unwrap();
    let before = fs::read(&path).unwrap();

    let output = run_session(&path, &FakeOpener::default(), "3\n9\n\n4\n");

    assert!(output.contains("No assignment with id 9."));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn invalid_menu_choices_are_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");

    let output = run_session(&path, &FakeOpener::default(), "x\n\n4\n");

    assert!(output.contains("'x' is not a menu option."));
    assert!(output.contains("Goodbye"));
}

#[test]
fn end_of_input_behaves_like_exit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");

    let output = run_session(&path, &FakeOpener::default(), "");

    assert!(output.contains("Main menu"));
    assert!(output.contains("Goodbye"));
}

#[test]
fn end_of_input_mid_prompt_cancels_the_add() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");

    let output = run_session(&path, &FakeOpener::default(), "1\nEssay");

    assert!(!output.contains("added"));
    assert!(output.contains("Goodbye"));
    assert!(!path.exists());
}

#[test]
fn empty_store_notices_for_view_and_complete() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");

    let output = run_session(&path, &FakeOpener::default(), "2\n\n3\n\n4\n");

    assert!(output.contains("No assignments yet."));
    assert!(output.contains("No assignments to mark complete."));
    assert!(!path.exists());
}

#[test]
fn opener_failures_are_reported_and_the_session_continues() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");
    fs::write(&path, "1|Essay|History|11/06/2025|gone.pdf\n").unwrap();

    let output = run_session(&path, &FailingOpener, "2\n1\n\n4\n");

    assert!(output.contains("Could not open the document"));
    assert!(output.contains("Goodbye"));
}

#[test]
fn failed_saves_are_reported_and_the_session_continues() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");
    fs::create_dir(dir.path().join("assignments_data.tmp")).unwrap();

    let output = run_session(
        &path,
        &FakeOpener::default(),
        "1\nEssay\nHistory\n01/01/2030\n\n\n3\n0\n\n4\n",
    );

    assert!(output.contains("Assignment #1 added."));
    assert!(output.contains("Warning: your changes could not be saved"));
    assert!(output.contains("Current assignments"));
    assert!(output.contains("Goodbye"));
    assert!(!path.exists());
}

#[test]
fn rejected_adds_report_the_field_and_burn_the_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");

    let output = run_session(
        &path,
        &FakeOpener::default(),
        "1\nbad|title\nMaths\n01/01/2030\n\n\n1\nGood\nMaths\n01/01/2030\n\n\n4\n",
    );

    assert!(output.contains("Cannot add assignment"));
    assert!(output.contains("Assignment #2 added."));
    assert_eq!(fs::read(&path).unwrap(), b"2|Good|Maths|01/01/2030|\n");
}

#[test]
fn unreadable_due_dates_show_the_sentinel_in_later() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments_data.txt");
    fs::write(&path, "1|Mystery|Art|whenever|\n").unwrap();

    let output = run_session(&path, &FakeOpener::default(), "2\n0\n\n4\n");

    assert!(output.contains("LATER"));
    assert!(output.contains("whenever"));
    assert!(output.contains('?'));
}

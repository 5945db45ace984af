//! The interactive menu session.
//!
//! The session runs a blocking read-eval loop over injected input and
//! output streams, an injected document opener, and an injected clock.
//! No recoverable condition crosses the session boundary: failed saves,
//! rejected input, and opener failures are reported to the user and the
//! loop continues. Only stream I/O errors propagate.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use satchel_model::{AssignmentRecord, RecordId};
use satchel_store::AssignmentStore;
use satchel_triage::triage;

use crate::opener::DocumentOpener;
use crate::render;

/// Outcome of an id prompt: a parsed id, the go-back sentinel, or input
/// that was not a number.
enum IdEntry {
    Id(RecordId),
    Cancelled,
    NotANumber(String),
}

pub struct Session<'a, R, W, C> {
    store: AssignmentStore,
    input: R,
    output: W,
    opener: &'a dyn DocumentOpener,
    today: C,
}

impl<'a, R, W, C> Session<'a, R, W, C>
where
    R: BufRead,
    W: Write,
    C: Fn() -> NaiveDate,
{
    pub fn new(
        store: AssignmentStore,
        input: R,
        output: W,
        opener: &'a dyn DocumentOpener,
        today: C,
    ) -> Self {
        Self {
            store,
            input,
            output,
            opener,
            today,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Assignment Tracker")?;
        writeln!(self.output, "Data file: {}", self.store.path().display())?;
        loop {
            self.show_menu()?;
            let Some(choice) = read_line(&mut self.input)? else {
                break;
            };
            match choice.trim() {
                "1" => self.add_assignment()?,
                "2" => self.view_schedule()?,
                "3" => self.mark_complete()?,
                "4" => break,
                other => {
                    writeln!(self.output, "'{other}' is not a menu option.")?;
                }
            }
            self.pause()?;
        }
        writeln!(self.output, "Goodbye. Stay on top of it!")?;
        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Main menu")?;
        writeln!(self.output, "  1. Add assignment")?;
        writeln!(self.output, "  2. View assignments by urgency")?;
        writeln!(self.output, "  3. Mark assignment complete")?;
        writeln!(self.output, "  4. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    /// Prompts for the record fields, then allocates an id and appends.
    ///
    /// A reserved character in any field abandons the add after the
    /// prompts; the id allocated for the attempt is not reused.
    fn add_assignment(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Adding a new assignment")?;
        let Some(title) = prompt(&mut self.input, &mut self.output, "Enter title: ")? else {
            return Ok(());
        };
        let Some(subject) = prompt(&mut self.input, &mut self.output, "Enter subject: ")? else {
            return Ok(());
        };
        let Some(due) = prompt(
            &mut self.input,
            &mut self.output,
            "Enter due date (DD/MM/YYYY): ",
        )?
        else {
            return Ok(());
        };
        let Some(document) = prompt(
            &mut self.input,
            &mut self.output,
            "Enter document path (or press Enter to skip): ",
        )?
        else {
            return Ok(());
        };

        let id = self.store.next_id();
        let record = match AssignmentRecord::new(id, title, subject, due, document) {
            Ok(record) => record,
            Err(error) => {
                writeln!(self.output, "Cannot add assignment: {error}.")?;
                return Ok(());
            }
        };
        self.store.add(record);
        writeln!(self.output, "Assignment #{id} added.")?;
        self.report_save()
    }

    /// Renders the schedule bucket by bucket, then offers to open an
    /// attached document.
    fn view_schedule(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            writeln!(self.output)?;
            writeln!(self.output, "No assignments yet.")?;
            return Ok(());
        }
        let today = (self.today)();
        let schedule = triage(self.store.records(), today);
        for (urgency, rows) in schedule.buckets() {
            if rows.is_empty() {
                continue;
            }
            writeln!(self.output)?;
            writeln!(self.output, "{}", urgency.label())?;
            writeln!(self.output, "{}", render::bucket_table(rows))?;
        }

        let entry = match prompt_id(
            &mut self.input,
            &mut self.output,
            "Enter an assignment id to open its document (0 to go back): ",
        )? {
            Some(entry) => entry,
            None => return Ok(()),
        };
        match entry {
            IdEntry::Cancelled => Ok(()),
            IdEntry::NotANumber(raw) => {
                writeln!(self.output, "'{raw}' is not an assignment id.")
            }
            IdEntry::Id(id) => match schedule.find(id).and_then(|t| t.record.document.as_deref()) {
                Some(path) => match self.opener.open(path) {
                    Ok(()) => writeln!(self.output, "Opening {path}"),
                    Err(error) => {
                        tracing::warn!(%error, "document opener failed");
                        writeln!(self.output, "Could not open the document: {error}")
                    }
                },
                None => writeln!(self.output, "No such assignment or no document attached."),
            },
        }
    }

    /// Lists everything, prompts for an id, removes it, and saves.
    ///
    /// Only a successful removal touches the file.
    fn mark_complete(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            writeln!(self.output)?;
            writeln!(self.output, "No assignments to mark complete.")?;
            return Ok(());
        }
        writeln!(self.output)?;
        writeln!(self.output, "Current assignments")?;
        writeln!(self.output, "{}", render::record_table(self.store.records()))?;

        let entry = match prompt_id(
            &mut self.input,
            &mut self.output,
            "Enter the assignment id to mark complete (0 to cancel): ",
        )? {
            Some(entry) => entry,
            None => return Ok(()),
        };
        match entry {
            IdEntry::Cancelled => Ok(()),
            IdEntry::NotANumber(raw) => {
                writeln!(self.output, "'{raw}' is not an assignment id.")
            }
            IdEntry::Id(id) => {
                if self.store.remove(id) {
                    writeln!(self.output, "Assignment #{id} marked complete.")?;
                    self.report_save()
                } else {
                    writeln!(self.output, "No assignment with id {id}.")
                }
            }
        }
    }

    /// Saves the store, reporting failure to the user without ending the
    /// session; in-memory state stays valid either way.
    fn report_save(&mut self) -> io::Result<()> {
        if let Err(error) = self.store.save() {
            tracing::error!(%error, "save failed");
            writeln!(
                self.output,
                "Warning: your changes could not be saved: {error}"
            )?;
        }
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        read_line(&mut self.input).map(|_| ())
    }
}

/// Reads one line; `None` at end of input. The trailing line break is
/// stripped, interior whitespace is kept.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

/// Prompts for an id; `0` and a blank line both count as cancelling.
fn prompt_id<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<IdEntry>> {
    let Some(raw) = prompt(input, output, text)? else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "0" {
        return Ok(Some(IdEntry::Cancelled));
    }
    Ok(Some(match trimmed.parse::<u64>() {
        Ok(id) => IdEntry::Id(RecordId::new(id)),
        Err(_) => IdEntry::NotANumber(trimmed.to_string()),
    }))
}

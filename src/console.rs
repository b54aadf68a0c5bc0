//! Console narration for the exercises. Every operation reports what happened
//! in plain text; the data structures underneath never print.

use std::io::{self, BufRead, Write};

use crate::circular_list::CircularList;
use crate::command::{HistoryCommand, RoundsCommand};
use crate::hanoi::{self, IterativeSolution, Move};
use crate::undo_redo::History;

const ROUNDS_RULE: usize = 46;
const HISTORY_RULE: usize = 30;
const BANNER_RULE: usize = 50;

/// Round-robin check-ups over a circular list of patient names.
pub struct RoundsConsole<W> {
    patients: CircularList<String>,
    out: W,
}

impl<W: Write> RoundsConsole<W> {
    pub fn new(out: W) -> RoundsConsole<W> {
        RoundsConsole {
            patients: CircularList::new(),
            out,
        }
    }

    pub fn patients(&self) -> &CircularList<String> {
        &self.patients
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn create(&mut self, names: Vec<String>) -> io::Result<bool> {
        let count = names.len();
        if !self.patients.create_from(names) {
            writeln!(self.out, "Input list is empty. Nothing created.")?;
            return Ok(false);
        }
        writeln!(
            self.out,
            "Successfully created Circular Linked List with {} patients.",
            count
        )?;
        Ok(true)
    }

    pub fn add(&mut self, patient: &str) -> io::Result<()> {
        self.patients.append(patient.to_string());
        writeln!(self.out, "Added '{}' to the end of the rounds.", patient)
    }

    pub fn display(&mut self) -> io::Result<()> {
        if self.patients.is_empty() {
            return writeln!(self.out, "The patient list is empty.");
        }
        writeln!(self.out)?;
        writeln!(self.out, "--- Current Check-Up Order (Circular Cycle) ---")?;
        writeln!(self.out, "{}", self.patients)?;
        writeln!(self.out, "{}", "-".repeat(ROUNDS_RULE))?;
        writeln!(self.out, "Total Patients: {}", self.patients.len())
    }

    pub fn insert_after(&mut self, target: &str, patient: &str) -> io::Result<bool> {
        if self.patients.is_empty() {
            writeln!(self.out, "Cannot insert: List is empty.")?;
            return Ok(false);
        }
        if !self
            .patients
            .insert_after(&target.to_string(), patient.to_string())
        {
            writeln!(self.out, "Insertion failed: '{}' not found.", target)?;
            return Ok(false);
        }
        writeln!(self.out, "Inserted '{}' after '{}'.", patient, target)?;
        Ok(true)
    }

    pub fn delete(&mut self, patient: &str) -> io::Result<bool> {
        if self.patients.is_empty() {
            writeln!(self.out, "Deletion failed: List is empty.")?;
            return Ok(false);
        }
        let was_head = self.patients.head().map(String::as_str) == Some(patient);
        if !self.patients.delete(&patient.to_string()) {
            writeln!(self.out, "Deletion failed: '{}' not found.", patient)?;
            return Ok(false);
        }
        match self.patients.head() {
            None => writeln!(self.out, "Deleted '{}'. The list is now empty.", patient)?,
            Some(head) if was_head => {
                writeln!(self.out, "Deleted Head: '{}'. New head is '{}'.", patient, head)?
            }
            Some(_) => writeln!(self.out, "Deleted '{}'.", patient)?,
        }
        Ok(true)
    }

    /// Sees the patient at the head and sends them to the back of the rounds.
    pub fn next(&mut self) -> io::Result<bool> {
        match self.patients.rotate() {
            Some(patient) => {
                writeln!(self.out, "Now seeing '{}'.", patient)?;
                Ok(true)
            }
            None => {
                writeln!(self.out, "No patients waiting.")?;
                Ok(false)
            }
        }
    }

    /// The check-up walkthrough: build the rounds, let `newcomer` in after
    /// the second patient, then discharge the last one.
    pub fn demo(&mut self, patients: Vec<String>, newcomer: &str) -> io::Result<()> {
        let target = patients.get(1).or_else(|| patients.first()).cloned();
        let leaving = patients.last().cloned();
        writeln!(
            self.out,
            "--- Circular Linked List Demo: Round-Robin Check-Up System ---"
        )?;

        writeln!(self.out, "\n[Action 1] Creating the list:")?;
        self.create(patients)?;
        self.display()?;

        let target = target.unwrap_or_default();
        writeln!(
            self.out,
            "\n[Action 2] Insert '{}' after '{}':",
            newcomer, target
        )?;
        self.insert_after(&target, newcomer)?;
        self.display()?;

        let leaving = leaving.unwrap_or_default();
        writeln!(self.out, "\n[Action 3] Delete '{}':", leaving)?;
        self.delete(&leaving)?;
        self.display()
    }

    /// Runs one command. Returns `false` once the session should stop.
    pub fn execute(&mut self, command: RoundsCommand) -> io::Result<bool> {
        match command {
            RoundsCommand::Create(names) => {
                self.create(names)?;
            }
            RoundsCommand::Add(patient) => self.add(&patient)?,
            RoundsCommand::Insert { target, patient } => {
                self.insert_after(&target, &patient)?;
            }
            RoundsCommand::Delete(patient) => {
                self.delete(&patient)?;
            }
            RoundsCommand::Next => {
                self.next()?;
            }
            RoundsCommand::Show => self.display()?,
            RoundsCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Reads commands line by line until `quit` or end of input. Lines that
    /// fail to parse are reported and skipped.
    pub fn run_session<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match RoundsCommand::from_line(&line) {
                Ok(Some(command)) => {
                    log::debug!("rounds command: {:?}", command);
                    if !self.execute(command)? {
                        break;
                    }
                }
                Ok(None) => continue,
                Err(err) => writeln!(self.out, "Error: {}", err)?,
            }
        }
        Ok(())
    }
}

/// Undo/redo over plain-text actions, printing both stacks after each step.
pub struct HistoryConsole<W> {
    history: History<String>,
    out: W,
}

impl<W: Write> HistoryConsole<W> {
    pub fn new(out: W) -> HistoryConsole<W> {
        HistoryConsole {
            history: History::new(),
            out,
        }
    }

    pub fn history(&self) -> &History<String> {
        &self.history
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn push(&mut self, action: &str) -> io::Result<()> {
        self.history.push(action.to_string());
        self.state(&format!("Action '{}' performed.", action))
    }

    pub fn undo(&mut self) -> io::Result<bool> {
        let message = match self.history.undo() {
            Some(action) => format!("Action '{}' undone.", action),
            None => {
                self.state("Cannot undo. History is empty.")?;
                return Ok(false);
            }
        };
        self.state(&message)?;
        Ok(true)
    }

    pub fn redo(&mut self) -> io::Result<bool> {
        let message = match self.history.redo() {
            Some(action) => format!("Action '{}' redone.", action),
            None => {
                self.state("Cannot redo. No actions have been undone.")?;
                return Ok(false);
            }
        };
        self.state(&message)?;
        Ok(true)
    }

    pub fn state(&mut self, operation: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- {} ---", operation)?;
        writeln!(self.out, "{}", self.history)?;
        writeln!(self.out, "{}", "-".repeat(HISTORY_RULE))
    }

    /// Performs every action, then undoes and redoes the last one.
    pub fn demo(&mut self, actions: &[String]) -> io::Result<()> {
        writeln!(self.out, "Starting Simplified Undo/Redo Demo")?;
        for action in actions {
            self.push(action)?;
        }
        self.undo()?;
        self.redo()?;
        Ok(())
    }

    pub fn execute(&mut self, command: HistoryCommand) -> io::Result<bool> {
        match command {
            HistoryCommand::Push(action) => self.push(&action)?,
            HistoryCommand::Undo => {
                self.undo()?;
            }
            HistoryCommand::Redo => {
                self.redo()?;
            }
            HistoryCommand::Show => self.state("Current state")?,
            HistoryCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    pub fn run_session<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match HistoryCommand::from_line(&line) {
                Ok(Some(command)) => {
                    log::debug!("history command: {:?}", command);
                    if !self.execute(command)? {
                        break;
                    }
                }
                Ok(None) => continue,
                Err(err) => writeln!(self.out, "Error: {}", err)?,
            }
        }
        Ok(())
    }
}

fn banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(BANNER_RULE))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(BANNER_RULE))
}

fn print_moves<W: Write>(out: &mut W, moves: &[Move]) -> io::Result<()> {
    for step in moves {
        writeln!(out, "{}", step)?;
    }
    Ok(())
}

pub fn print_recursive<W: Write>(out: &mut W, disks: u32, pegs: [char; 3]) -> io::Result<()> {
    banner(
        out,
        &format!("TOWERS OF HANOI (N={}) - RECURSIVE SOLUTION", disks),
    )?;
    print_moves(out, &hanoi::solve_recursive(disks, pegs[0], pegs[1], pegs[2]))?;
    writeln!(out, "{}", "=".repeat(BANNER_RULE))
}

pub fn print_iterative<W: Write>(out: &mut W, solution: &IterativeSolution) -> io::Result<()> {
    let disks = solution.initial.disks(0).len();
    banner(
        out,
        &format!("TOWERS OF HANOI (N={}) - ITERATIVE STACK-BASED SOLUTION", disks),
    )?;
    writeln!(out)?;
    writeln!(out, "Initial State: {}", solution.initial)?;
    print_moves(out, &solution.moves)?;
    writeln!(out)?;
    writeln!(out, "Final State: {}", solution.finished)?;
    writeln!(out, "{}", "=".repeat(BANNER_RULE))
}

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),
}

#[derive(Debug, PartialEq, Eq)]
pub enum RoundsCommand {
    Create(Vec<String>),
    Add(String),
    Insert { target: String, patient: String },
    Delete(String),
    Next,
    Show,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum HistoryCommand {
    Push(String),
    Undo,
    Redo,
    Show,
    Quit,
}

/// Splits a line into its verb and the (trimmed) rest. Blank lines and
/// `#` comments yield `None`.
fn split_verb(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => Some((verb, rest.trim())),
        None => Some((line, "")),
    }
}

/// Patient names are separated by `|` so they may contain spaces.
fn names(rest: &str) -> Vec<String> {
    rest.split('|')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}

fn one_name(rest: &str, command: &'static str) -> Result<String, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            expected: "a patient name",
        });
    }
    Ok(rest.to_string())
}

fn bare<C>(rest: &str, command: &'static str, parsed: C) -> Result<C, ParseError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ParseError::UnexpectedArgument(command))
    }
}

impl RoundsCommand {
    pub fn from_line(line: &str) -> Result<Option<RoundsCommand>, ParseError> {
        let (verb, rest) = match split_verb(line) {
            Some(parts) => parts,
            None => return Ok(None),
        };
        let command = match verb {
            // An empty roster still parses; the console reports the no-op.
            "create" => RoundsCommand::Create(names(rest)),
            "add" | "append" => RoundsCommand::Add(one_name(rest, "add")?),
            "insert" | "after" => match names(rest).as_slice() {
                [target, patient] => RoundsCommand::Insert {
                    target: target.clone(),
                    patient: patient.clone(),
                },
                _ => {
                    return Err(ParseError::MissingArgument {
                        command: "insert",
                        expected: "<target> | <new patient>",
                    })
                }
            },
            "delete" | "del" | "rm" => RoundsCommand::Delete(one_name(rest, "delete")?),
            "next" | "rotate" => bare(rest, "next", RoundsCommand::Next)?,
            "show" | "display" | "ls" => bare(rest, "show", RoundsCommand::Show)?,
            "q" | "quit" | "exit" => bare(rest, "quit", RoundsCommand::Quit)?,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

impl HistoryCommand {
    pub fn from_line(line: &str) -> Result<Option<HistoryCommand>, ParseError> {
        let (verb, rest) = match split_verb(line) {
            Some(parts) => parts,
            None => return Ok(None),
        };
        let command = match verb {
            "push" | "do" => {
                if rest.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "push",
                        expected: "an action",
                    });
                }
                HistoryCommand::Push(rest.to_string())
            }
            "u" | "undo" => bare(rest, "undo", HistoryCommand::Undo)?,
            "r" | "redo" => bare(rest, "redo", HistoryCommand::Redo)?,
            "show" | "display" => bare(rest, "show", HistoryCommand::Show)?,
            "q" | "quit" | "exit" => bare(rest, "quit", HistoryCommand::Quit)?,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

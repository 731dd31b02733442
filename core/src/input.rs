use log::debug;

use crate::command::Command;
use crate::date::{looks_like_date, normalize_date};
use crate::error::{Result, TaskError};
use crate::repository::file::FIELD_DELIMITER;

const DEADLINE_MARKER: &str = " /by ";
const EVENT_MARKER: &str = " /at ";

/// Parses one raw input line into a [`Command`].
///
/// Unknown keywords are not an error: they come back as
/// [`Command::Unrecognized`] so the caller can report them. Descriptions are
/// cut from the line at fixed offsets rather than re-joined from tokens, so
/// repeated spaces inside them survive.
pub fn parse(line: &str) -> Result<Command> {
    let (keyword, rest) = split_keyword(line);
    let token_count = line.split_whitespace().count();

    let command = match keyword {
        "bye" => Command::Exit,
        "list" => Command::ListAll,
        "help" => Command::Help,
        "clear" => Command::Clear,
        "find" => Command::Find {
            term: rest.to_string(),
        },
        "done" => Command::MarkDone {
            index: parse_index(line)?,
        },
        "delete" => Command::Delete {
            index: parse_index(line)?,
        },
        "todo" => {
            if token_count <= 1 {
                return Err(TaskError::MissingDescription);
            }
            check_single_line(rest)?;
            Command::AddToDo {
                description: rest.to_string(),
            }
        }
        "deadline" => {
            let (description, by) = split_dated(line, token_count, DEADLINE_MARKER)?;
            Command::AddDeadline { description, by }
        }
        "event" => {
            let (description, at) = split_dated(line, token_count, EVENT_MARKER)?;
            Command::AddEvent { description, at }
        }
        other => Command::Unrecognized {
            keyword: other.to_string(),
        },
    };

    debug!("parsed {:?} from {:?}", command, line);
    Ok(command)
}

/// Splits at the first whitespace character; the remainder starts right
/// after it.
fn split_keyword(line: &str) -> (&str, &str) {
    line.split_once(char::is_whitespace).unwrap_or((line, ""))
}

fn parse_index(line: &str) -> Result<usize> {
    let argument = line
        .split_whitespace()
        .nth(1)
        .ok_or(TaskError::MissingTask)?;
    argument.parse().map_err(|_| TaskError::InvalidArgument {
        argument: argument.to_string(),
    })
}

/// Description is everything before the first marker, date everything after
/// the last one.
fn split_dated(line: &str, token_count: usize, marker: &str) -> Result<(String, String)> {
    if token_count <= 1 {
        return Err(TaskError::MissingDescription);
    }
    let (head, _) = line.split_once(marker).ok_or(TaskError::MissingDate)?;
    let (_, date) = line.rsplit_once(marker).ok_or(TaskError::MissingDate)?;

    let (_, description) = split_keyword(head);
    if description.trim().is_empty() {
        return Err(TaskError::MissingDescription);
    }
    if date.trim().is_empty() {
        return Err(TaskError::MissingDate);
    }
    check_single_line(description)?;
    check_single_line(date)?;
    // the stored date is the last column, so it may not contain the delimiter
    if date.contains(FIELD_DELIMITER) {
        return Err(TaskError::UnstorableText {
            reason: "a date cannot contain ' ~ '",
        });
    }

    let date = if looks_like_date(date) {
        let mut tokens = date.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(day), Some(time)) => normalize_date(day, time)?,
            _ => return Err(TaskError::InvalidDate),
        }
    } else {
        date.to_string()
    };

    Ok((description.to_string(), date))
}

fn check_single_line(text: &str) -> Result<()> {
    if text.contains(['\n', '\r']) {
        return Err(TaskError::UnstorableText {
            reason: "a task has to fit on a single line",
        });
    }
    Ok(())
}

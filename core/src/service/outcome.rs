use std::fmt;

use crate::model::task::Task;

pub const HELP_TEXT: &str = "Commands:
todo <task description> : To add task to list
event <task description> /at <date> : To add event to list
deadline <task description> /by <date> : To add deadline to list
list : Retrieves all the tasks you have so far
done <task index> : Checks task as done
delete <task index> : Deletes task at a particular index
clear : clear all tasks in the list and wipe all data
bye : Exit program
find <term> : Find tasks with the term in the description/name
Note: Currently, Slave can only read date in the form 'DD/MM/YYYY HHMM'
(E.g. 2/1/2020 1254 will be read as 2nd of January 2020 12.54pm)";

pub const FAREWELL_TEXT: &str = "Bye! Thanks for using me! Will be right here when you need me.";

/// What a command did, rendered for the user through `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { task: Task, size: usize },
    Listed(Vec<Task>),
    MarkedDone(Task),
    Deleted { task: Task, size: usize },
    Cleared,
    /// Matches paired with their 1-based position in the result
    Found(Vec<(usize, Task)>),
    Help,
    Exit,
    Unknown { keyword: String },
}

impl Outcome {
    /// True only for `bye`; the console loop stops after printing it.
    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added { task, size } => write!(
                f,
                "Got it. I've added this task:\n  {}\nNow you have {} tasks in the list.",
                task, size
            ),
            Outcome::Listed(tasks) => {
                write!(f, "Here are the tasks in your list:")?;
                for task in tasks {
                    write!(f, "\n{}.{}", task.id, task)?;
                }
                Ok(())
            }
            Outcome::MarkedDone(task) => {
                write!(f, "Nice! I've marked this task as done:\n  {}", task)
            }
            Outcome::Deleted { task, size } => write!(
                f,
                "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list.",
                task, size
            ),
            Outcome::Cleared => write!(f, "Clearing List..."),
            Outcome::Found(matches) => {
                write!(f, "Here are the matching tasks in your list:")?;
                for (position, task) in matches {
                    write!(f, "\n{}) {}.{}", position, task.id, task)?;
                }
                Ok(())
            }
            Outcome::Help => write!(f, "{}", HELP_TEXT),
            Outcome::Exit => write!(f, "{}", FAREWELL_TEXT),
            Outcome::Unknown { keyword } => write!(
                f,
                "Sorry, I don't know what '{}' means. Type 'help' for commands!",
                keyword
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_added_and_deleted() {
        let task = Task::todo(1, "read book");
        let added = Outcome::Added {
            task: task.clone(),
            size: 1,
        };
        assert_eq!(
            added.to_string(),
            "Got it. I've added this task:\n  [T][✗] read book\nNow you have 1 tasks in the list."
        );

        let deleted = Outcome::Deleted { task, size: 0 };
        assert!(deleted.to_string().starts_with("Noted. I've removed this task:"));
        assert!(deleted.to_string().ends_with("Now you have 0 tasks in the list."));
    }

    #[test]
    fn test_render_listings() {
        let tasks = vec![Task::todo(1, "a"), Task::deadline(2, "b", "Friday")];
        assert_eq!(
            Outcome::Listed(tasks.clone()).to_string(),
            "Here are the tasks in your list:\n1.[T][✗] a\n2.[D][✗] b (by: Friday)"
        );

        let found = Outcome::Found(vec![(1, tasks[1].clone())]);
        assert_eq!(
            found.to_string(),
            "Here are the matching tasks in your list:\n1) 2.[D][✗] b (by: Friday)"
        );
    }

    #[test]
    fn test_unknown_names_keyword() {
        let outcome = Outcome::Unknown {
            keyword: "blah".to_string(),
        };
        assert!(outcome.to_string().contains("'blah'"));
        assert!(!outcome.is_exit());
        assert!(Outcome::Exit.is_exit());
    }
}

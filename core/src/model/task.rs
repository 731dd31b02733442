use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    ToDo,
    Deadline { by: String },
    Event { at: String },
}

impl TaskKind {
    /// Label written to the storage file.
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::ToDo => "ToDo",
            TaskKind::Deadline { .. } => "Deadline",
            TaskKind::Event { .. } => "Event",
        }
    }

    fn icon(&self) -> char {
        match self {
            TaskKind::ToDo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// The `by`/`at` display string, if this kind carries one.
    pub fn date(&self) -> Option<&str> {
        match self {
            TaskKind::ToDo => None,
            TaskKind::Deadline { by } => Some(by),
            TaskKind::Event { at } => Some(at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// 1-based position in the list, not a stable key.
    pub id: usize,
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn new(id: usize, description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            id,
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn todo(id: usize, description: impl Into<String>) -> Self {
        Self::new(id, description, TaskKind::ToDo)
    }

    pub fn deadline(id: usize, description: impl Into<String>, by: impl Into<String>) -> Self {
        Self::new(id, description, TaskKind::Deadline { by: by.into() })
    }

    pub fn event(id: usize, description: impl Into<String>, at: impl Into<String>) -> Self {
        Self::new(id, description, TaskKind::Event { at: at.into() })
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn status_icon(&self) -> char {
        if self.done {
            '✓'
        } else {
            '✗'
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}] {}", self.kind.icon(), self.status_icon(), self.description)?;
        match &self.kind {
            TaskKind::ToDo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { at } => write!(f, " (at: {})", at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut todo = Task::todo(1, "read book");
        assert_eq!(todo.to_string(), "[T][✗] read book");
        todo.mark_done();
        assert_eq!(todo.to_string(), "[T][✓] read book");

        let deadline = Task::deadline(2, "return book", "Sunday");
        assert_eq!(deadline.to_string(), "[D][✗] return book (by: Sunday)");

        let event = Task::event(3, "meeting", "2nd of January 2020, 12.54pm");
        assert_eq!(
            event.to_string(),
            "[E][✗] meeting (at: 2nd of January 2020, 12.54pm)"
        );
    }
}

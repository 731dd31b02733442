/// One parsed user instruction, consumed once by [`crate::TaskService::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddToDo { description: String },
    /// `by` is already normalized, or the raw text when it had no date shape
    AddDeadline { description: String, by: String },
    AddEvent { description: String, at: String },
    ListAll,
    MarkDone { index: usize },
    Delete { index: usize },
    Clear,
    Find { term: String },
    Help,
    Exit,
    Unrecognized { keyword: String },
}

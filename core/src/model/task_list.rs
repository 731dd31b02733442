use crate::error::{Result, TaskError};
use crate::model::task::Task;

/// Ordered tasks; insertion order is display order is id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id a new task must carry before it is appended.
    pub fn next_id(&self) -> usize {
        self.tasks.len() + 1
    }

    /// Adds `task` at the end. The caller stamps `task.id` with
    /// [`TaskList::next_id`] beforehand; the list does not assign or fix ids,
    /// and release builds do not check them.
    pub fn append(&mut self, task: Task) {
        debug_assert_eq!(task.id, self.next_id(), "task appended with a stale id");
        self.tasks.push(task);
    }

    pub fn mark_done(&mut self, index: usize) -> Result<&Task> {
        let pos = self.position(index)?;
        let task = &mut self.tasks[pos];
        task.mark_done();
        Ok(task)
    }

    /// Removes the task at a 1-based index. Remaining ids are left as they
    /// were; call [`TaskList::renumber`] to close the gap.
    pub fn remove(&mut self, index: usize) -> Result<Task> {
        let pos = self.position(index)?;
        Ok(self.tasks.remove(pos))
    }

    /// Case-sensitive substring search over descriptions, in list order.
    pub fn find(&self, term: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.description.contains(term))
            .collect()
    }

    pub fn renumber(&mut self) {
        for (pos, task) in self.tasks.iter_mut().enumerate() {
            task.id = pos + 1;
        }
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn position(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(TaskError::IndexOutOfRange {
                index,
                size: self.tasks.len(),
            });
        }
        Ok(index - 1)
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut list = TaskList {
            tasks: iter.into_iter().collect(),
        };
        list.renumber();
        list
    }
}

use crate::error::Result;
use crate::model::task::Task;
use crate::model::task_list::TaskList;

pub trait TaskRepository {
    fn load(&self) -> Result<TaskList>;
    fn append(&self, task: &Task) -> Result<()>;
    /// Replaces the stored records with the given list, in order.
    fn rewrite_all(&self, tasks: &TaskList) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

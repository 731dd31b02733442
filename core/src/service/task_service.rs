use log::{debug, info};

use crate::command::Command;
use crate::error::Result;
use crate::model::task::{Task, TaskKind};
use crate::model::task_list::TaskList;
use crate::repository::TaskRepository;
use crate::service::outcome::Outcome;

/// Applies commands to the in-memory list and keeps the repository in step.
pub struct TaskService<R: TaskRepository> {
    repo: R,
    tasks: TaskList,
    /// Set when the stored file could not be loaded; the next write must
    /// replace it instead of appending to it.
    out_of_sync: bool,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            tasks: TaskList::new(),
            out_of_sync: false,
        }
    }

    /// Replaces the in-memory list with the stored one. On failure the list
    /// is left as it was and the next mutation rewrites the whole file.
    pub fn load(&mut self) -> Result<usize> {
        match self.repo.load() {
            Ok(tasks) => {
                self.tasks = tasks;
                self.out_of_sync = false;
                Ok(self.tasks.size())
            }
            Err(e) => {
                self.out_of_sync = true;
                Err(e)
            }
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!("executing {:?}", command);
        match command {
            Command::AddToDo { description } => self.add(description, TaskKind::ToDo),
            Command::AddDeadline { description, by } => {
                self.add(description, TaskKind::Deadline { by })
            }
            Command::AddEvent { description, at } => {
                self.add(description, TaskKind::Event { at })
            }
            Command::ListAll => Ok(Outcome::Listed(self.tasks.tasks().to_vec())),
            Command::MarkDone { index } => {
                let mut staged = self.tasks.clone();
                let task = staged.mark_done(index)?.clone();
                self.commit(staged)?;
                Ok(Outcome::MarkedDone(task))
            }
            Command::Delete { index } => {
                let mut staged = self.tasks.clone();
                let task = staged.remove(index)?;
                staged.renumber();
                self.commit(staged)?;
                Ok(Outcome::Deleted {
                    task,
                    size: self.tasks.size(),
                })
            }
            Command::Clear => {
                self.repo.clear()?;
                self.tasks.clear();
                self.out_of_sync = false;
                info!("task list cleared");
                Ok(Outcome::Cleared)
            }
            Command::Find { term } => Ok(Outcome::Found(
                self.tasks
                    .find(&term)
                    .into_iter()
                    .cloned()
                    .enumerate()
                    .map(|(pos, task)| (pos + 1, task))
                    .collect(),
            )),
            Command::Help => Ok(Outcome::Help),
            Command::Exit => Ok(Outcome::Exit),
            Command::Unrecognized { keyword } => Ok(Outcome::Unknown { keyword }),
        }
    }

    fn add(&mut self, description: String, kind: TaskKind) -> Result<Outcome> {
        let task = Task::new(self.tasks.next_id(), description, kind);
        if self.out_of_sync {
            let mut staged = self.tasks.clone();
            staged.append(task.clone());
            self.commit(staged)?;
        } else {
            self.repo.append(&task)?;
            self.tasks.append(task.clone());
        }
        Ok(Outcome::Added {
            task,
            size: self.tasks.size(),
        })
    }

    /// Writes `staged` out in full and only then makes it the current list.
    fn commit(&mut self, staged: TaskList) -> Result<()> {
        self.repo.rewrite_all(&staged)?;
        self.tasks = staged;
        self.out_of_sync = false;
        Ok(())
    }
}

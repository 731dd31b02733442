use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Result, TaskError};
use crate::model::task::{Task, TaskKind};
use crate::model::task_list::TaskList;
use crate::repository::traits::TaskRepository;

const DEFAULT_DIR_NAME: &str = ".slave";
const DEFAULT_FILE_NAME: &str = "tasks.txt";
/// Separates the columns of a record.
pub const FIELD_DELIMITER: &str = " ~ ";
const DONE: &str = "Done";
const NOT_DONE: &str = "Not Done";

/// Line-oriented store: `<id> ~ <type> ~ <status> ~ <description>[ ~ <date>]`.
#[derive(Clone, Debug)]
pub struct FileTaskRepository {
    file_path: PathBuf,
}

impl FileTaskRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => dirs::home_dir()
                .ok_or(TaskError::HomeDirectory)?
                .join(DEFAULT_DIR_NAME),
        };
        Self::with_file(dir.join(DEFAULT_FILE_NAME))
    }

    pub fn with_file(path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TaskError::io(parent, e))?;
        }
        if !file_path.exists() {
            File::create(&file_path).map_err(|e| TaskError::io(&file_path, e))?;
            info!("created storage file {}", file_path.display());
        }
        Ok(FileTaskRepository { file_path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn truncate(&self) -> Result<File> {
        File::create(&self.file_path).map_err(|_| TaskError::NoStorageFileDetected {
            path: self.file_path.clone(),
        })
    }
}

impl TaskRepository for FileTaskRepository {
    fn load(&self) -> Result<TaskList> {
        let content =
            fs::read_to_string(&self.file_path).map_err(|e| TaskError::io(&self.file_path, e))?;

        let mut tasks = TaskList::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let task = parse_record(line, tasks.next_id())
                .ok_or(TaskError::UnableToReadFile { line: number + 1 })?;
            tasks.append(task);
        }

        info!("loaded {} task(s) from {}", tasks.size(), self.file_path.display());
        Ok(tasks)
    }

    fn append(&self, task: &Task) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.file_path)
            .map_err(|e| TaskError::io(&self.file_path, e))?;
        writeln!(file, "{}", format_record(task)).map_err(|e| TaskError::io(&self.file_path, e))?;
        debug!("appended task {} to {}", task.id, self.file_path.display());
        Ok(())
    }

    fn rewrite_all(&self, tasks: &TaskList) -> Result<()> {
        let mut writer = BufWriter::new(self.truncate()?);
        for task in tasks.tasks() {
            writeln!(writer, "{}", format_record(task))
                .map_err(|e| TaskError::io(&self.file_path, e))?;
        }
        writer.flush().map_err(|e| TaskError::io(&self.file_path, e))?;
        info!("rewrote {} task(s) to {}", tasks.size(), self.file_path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.truncate()?;
        info!("cleared {}", self.file_path.display());
        Ok(())
    }
}

fn format_record(task: &Task) -> String {
    let status = if task.done { DONE } else { NOT_DONE };
    let mut record = [
        task.id.to_string().as_str(),
        task.kind.label(),
        status,
        task.description.as_str(),
    ]
    .join(FIELD_DELIMITER);
    if let Some(date) = task.kind.date() {
        record.push_str(FIELD_DELIMITER);
        record.push_str(date);
    }
    record
}

/// The stored id column is ignored; the record takes `id`, its position.
fn parse_record(line: &str, id: usize) -> Option<Task> {
    let mut columns = line.splitn(4, FIELD_DELIMITER);
    let _stored_id = columns.next()?;
    let label = columns.next()?;
    let status = columns.next()?;
    let rest = columns.next()?;

    let kind_with = |make: fn(String) -> TaskKind| -> Option<(String, TaskKind)> {
        let (description, date) = rest.rsplit_once(FIELD_DELIMITER)?;
        Some((description.to_string(), make(date.to_string())))
    };

    let (description, kind) = match label {
        "ToDo" => (rest.to_string(), TaskKind::ToDo),
        "Deadline" => kind_with(|by| TaskKind::Deadline { by })?,
        "Event" => kind_with(|at| TaskKind::Event { at })?,
        _ => return None,
    };

    let mut task = Task::new(id, description, kind);
    task.done = status == DONE;
    Some(task)
}

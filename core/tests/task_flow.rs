use slave_core::{
    parse, FileTaskRepository, Outcome, Task, TaskError, TaskKind, TaskRepository, TaskService,
};
use tempfile::TempDir;

fn service_in(dir: &TempDir) -> TaskService<FileTaskRepository> {
    let repo = FileTaskRepository::new(Some(dir.path().to_path_buf())).unwrap();
    let mut service = TaskService::new(repo);
    service.load().unwrap();
    service
}

fn run(service: &mut TaskService<FileTaskRepository>, line: &str) -> Outcome {
    let command = parse(line).unwrap();
    service.execute(command).unwrap()
}

#[test]
fn test_tasks_survive_reload() {
    let dir = TempDir::new().unwrap();
    {
        let mut service = service_in(&dir);
        run(&mut service, "todo read  the book");
        run(&mut service, "deadline return book /by 2/1/2020 1254");
        run(&mut service, "event party ~ cake /at Sunday night");
        run(&mut service, "done 2");
    }

    let service = service_in(&dir);
    let tasks = service.tasks().tasks();
    assert_eq!(tasks.len(), 3);

    assert_eq!(tasks[0], Task::todo(1, "read  the book"));
    assert_eq!(tasks[1].description, "return book");
    assert_eq!(
        tasks[1].kind,
        TaskKind::Deadline {
            by: "2nd of January 2020, 12.54pm".to_string()
        }
    );
    assert!(tasks[1].done);
    assert_eq!(tasks[2], Task::event(3, "party ~ cake", "Sunday night"));
}

#[test]
fn test_delete_renumbers_list_and_file() {
    let dir = TempDir::new().unwrap();
    let mut service = service_in(&dir);
    for line in ["todo a", "todo b", "todo c", "todo d"] {
        run(&mut service, line);
    }

    match run(&mut service, "delete 2") {
        Outcome::Deleted { task, size } => {
            assert_eq!(task.description, "b");
            assert_eq!(size, 3);
        }
        other => panic!("unexpected {:?}", other),
    }

    match run(&mut service, "list") {
        Outcome::Listed(tasks) => {
            let listed: Vec<(usize, &str)> = tasks
                .iter()
                .map(|t| (t.id, t.description.as_str()))
                .collect();
            assert_eq!(listed, vec![(1, "a"), (2, "c"), (3, "d")]);
        }
        other => panic!("unexpected {:?}", other),
    }

    let content = std::fs::read_to_string(dir.path().join("tasks.txt")).unwrap();
    assert!(content.starts_with("1 ~ ToDo ~ Not Done ~ a\n2 ~ ToDo ~ Not Done ~ c\n"));
}

#[test]
fn test_find_then_list_shows_no_mutation() {
    let dir = TempDir::new().unwrap();
    let mut service = service_in(&dir);
    run(&mut service, "todo buy milk");
    run(&mut service, "todo walk dog");

    let listed_before = run(&mut service, "list");
    match run(&mut service, "find ") {
        Outcome::Found(matches) => {
            let ids: Vec<usize> = matches.iter().map(|(_, t)| t.id).collect();
            assert_eq!(ids, vec![1, 2]);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(run(&mut service, "list"), listed_before);
}

#[test]
fn test_clear_then_load_is_empty() {
    let dir = TempDir::new().unwrap();
    let mut service = service_in(&dir);
    run(&mut service, "todo a");
    run(&mut service, "event b /at c");

    assert_eq!(run(&mut service, "clear"), Outcome::Cleared);
    assert!(service.tasks().is_empty());

    let repo = FileTaskRepository::new(Some(dir.path().to_path_buf())).unwrap();
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn test_errors_do_not_touch_state() {
    let dir = TempDir::new().unwrap();
    let mut service = service_in(&dir);
    run(&mut service, "todo a");

    assert!(matches!(
        parse("event Test /at 10000/1000/11 4444"),
        Err(TaskError::InvalidDate)
    ));
    let command = parse("delete 5").unwrap();
    assert!(matches!(
        service.execute(command),
        Err(TaskError::IndexOutOfRange { index: 5, size: 1 })
    ));
    assert_eq!(service.tasks().size(), 1);
}

#[test]
fn test_add_after_unreadable_file_starts_fresh_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tasks.txt"),
        "1 ~ ToDo ~ Done ~ old\n2 ~ Chore ~ Done ~ bad\n",
    )
    .unwrap();

    let repo = FileTaskRepository::new(Some(dir.path().to_path_buf())).unwrap();
    let mut service = TaskService::new(repo);
    assert!(matches!(
        service.load(),
        Err(TaskError::UnableToReadFile { line: 2 })
    ));
    run(&mut service, "todo new");
    run(&mut service, "todo newer");

    let service = service_in(&dir);
    let tasks = service.tasks().tasks();
    assert_eq!(tasks, &[Task::todo(1, "new"), Task::todo(2, "newer")]);
}

#[test]
fn test_unstorable_text_is_rejected_before_saving() {
    let dir = TempDir::new().unwrap();
    let mut service = service_in(&dir);

    assert!(matches!(
        parse("event gig /at Fri ~ Sat"),
        Err(TaskError::UnstorableText { .. })
    ));
    assert!(matches!(
        parse("todo one\ntwo"),
        Err(TaskError::UnstorableText { .. })
    ));

    run(&mut service, "event gig ~ party /at Fri");
    let service = service_in(&dir);
    assert_eq!(
        service.tasks().tasks(),
        &[Task::event(1, "gig ~ party", "Fri")]
    );
}

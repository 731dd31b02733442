mod ui;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use slave_core::{parse, FileTaskRepository, TaskRepository, TaskService};

#[derive(Parser)]
#[command(name = "slave")]
#[command(about = "Your very own productivity assistant", long_about = None)]
struct Cli {
    /// Directory holding tasks.txt (defaults to ~/.slave)
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Storage file to use instead of <data-dir>/tasks.txt
    #[arg(long, conflicts_with = "data_dir")]
    file: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Run one command and exit (usage: slave deadline essay /by 2/1/2020 1254)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let repo = match cli.file {
        Some(path) => FileTaskRepository::with_file(path),
        None => FileTaskRepository::new(cli.data_dir),
    }
    .context("Failed to open task storage")?;
    info!("using storage file {}", repo.path().display());

    let mut service = TaskService::new(repo);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // A broken file should not keep the user out; start empty instead.
    if let Err(e) = service.load() {
        warn!("starting with an empty list: {}", e);
        write!(out, "{}", ui::frame(&e.to_string()))?;
    }

    if !cli.command.is_empty() {
        respond(&mut service, &cli.command.join(" "), &mut out)?;
        return Ok(());
    }

    write!(out, "{}", ui::frame(ui::WELCOME))?;
    run_loop(io::stdin().lock(), &mut out, &mut service)
}

/// Reads lines until `bye` or end of input.
fn run_loop<R, I, W>(input: I, out: &mut W, service: &mut TaskService<R>) -> Result<()>
where
    R: TaskRepository,
    I: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if respond(service, &line, out)? {
            break;
        }
    }
    Ok(())
}

/// Runs one line and prints its reply or error. Returns true on exit.
fn respond<R, W>(service: &mut TaskService<R>, line: &str, out: &mut W) -> Result<bool>
where
    R: TaskRepository,
    W: Write,
{
    let result = parse(line).and_then(|command| service.execute(command));
    let exit = match result {
        Ok(outcome) => {
            write!(out, "{}", ui::frame(&outcome.to_string()))?;
            outcome.is_exit()
        }
        Err(e) => {
            warn!("{:?} failed: {}", line, e);
            write!(out, "{}", ui::frame(&e.to_string()))?;
            false
        }
    };
    out.flush()?;
    Ok(exit)
}

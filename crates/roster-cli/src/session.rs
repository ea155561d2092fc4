//! Session command interpreter.
//!
//! The shell and script front ends feed lines through the same interpreter
//! so behavior stays identical between them. Each session owns one store;
//! command failures, export I/O included, are reported and counted but
//! never terminate the session.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use comfy_table::Table;

use roster_core::error::StoreError;
use roster_core::store::RecordStore;

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        id: String,
        name: String,
        age: u32,
        grade: String,
    },
    Get {
        id: String,
    },
    List,
    Update {
        id: String,
        name: String,
        age: u32,
        grade: String,
    },
    Delete {
        id: String,
    },
    Clear,
    Export {
        format: ExportFormat,
        path: Option<PathBuf>,
    },
    Count,
    Help,
    Quit,
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

impl Command {
    /// Parse one input line. Returns `Ok(None)` for blank lines and
    /// `#`-comments. Quoted arguments work the usual shell way, so names
    /// with spaces are fine.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let tokens = shlex::split(line).context("unbalanced quotes in command")?;
        let Some((head, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match head.to_lowercase().as_str() {
            "add" => {
                let (id, name, age, grade) = record_args("add", args)?;
                Command::Add {
                    id,
                    name,
                    age,
                    grade,
                }
            }
            "get" | "search" => Command::Get {
                id: one_arg("get", args)?,
            },
            "list" => {
                no_args("list", args)?;
                Command::List
            }
            "update" => {
                let (id, name, age, grade) = record_args("update", args)?;
                Command::Update {
                    id,
                    name,
                    age,
                    grade,
                }
            }
            "delete" => Command::Delete {
                id: one_arg("delete", args)?,
            },
            "clear" => {
                no_args("clear", args)?;
                Command::Clear
            }
            "export" => parse_export(args)?,
            "count" => {
                no_args("count", args)?;
                Command::Count
            }
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command: {other} (try 'help')"),
        };
        Ok(Some(command))
    }
}

fn record_args(cmd: &str, args: &[String]) -> Result<(String, String, u32, String)> {
    let [id, name, age, grade] = args else {
        bail!("usage: {cmd} <id> <name> <age> <grade>");
    };
    let age = age
        .parse::<u32>()
        .with_context(|| format!("invalid age: '{age}'"))?;
    Ok((id.clone(), name.clone(), age, grade.clone()))
}

fn one_arg(cmd: &str, args: &[String]) -> Result<String> {
    let [id] = args else {
        bail!("usage: {cmd} <id>");
    };
    Ok(id.clone())
}

fn no_args(cmd: &str, args: &[String]) -> Result<()> {
    if !args.is_empty() {
        bail!("'{cmd}' takes no arguments");
    }
    Ok(())
}

fn parse_export(args: &[String]) -> Result<Command> {
    let mut format = ExportFormat::Csv;
    let mut path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--format" {
            let value = iter.next().context("--format requires a value")?;
            format = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            bail!("unexpected argument: {arg}");
        }
    }
    Ok(Command::Export { format, path })
}

/// What the interpreter asks the front end to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// A live session: one store plus command dispatch against it.
#[derive(Default)]
pub struct Session {
    store: RecordStore,
    errors: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Number of failed commands so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Feed one input line through the interpreter.
    ///
    /// Every failure, parse, store, or export I/O, is reported on stderr
    /// and counted; none reaches the caller, so the session always
    /// survives a bad command.
    pub fn feed_line(&mut self, line: &str) -> Outcome {
        let command = match Command::parse(line) {
            Ok(None) => return Outcome::Continue,
            Ok(Some(command)) => command,
            Err(e) => {
                self.errors += 1;
                eprintln!("error: {e:#}");
                return Outcome::Continue;
            }
        };
        self.execute(command)
    }

    /// Execute a parsed command against the store.
    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Add {
                id,
                name,
                age,
                grade,
            } => match self.store.add(id, name.clone(), age, grade) {
                Ok(()) => println!("Added student {name}."),
                Err(e) => self.report(e),
            },
            Command::Get { id } => match self.store.get(&id) {
                Ok(record) => println!("{record}"),
                Err(e) => self.report(e),
            },
            Command::List => {
                if self.store.is_empty() {
                    println!("No students found.");
                } else {
                    println!("{}", render_table(&self.store));
                }
            }
            Command::Update {
                id,
                name,
                age,
                grade,
            } => match self.store.update(&id, name.clone(), age, grade) {
                Ok(()) => println!("Updated student {name}."),
                Err(e) => self.report(e),
            },
            Command::Delete { id } => match self.store.delete(&id) {
                Ok(record) => println!("Deleted student {}.", record.name),
                Err(e) => self.report(e),
            },
            Command::Clear => {
                self.store.clear();
                println!("All student records cleared.");
            }
            Command::Export { format, path } => {
                if let Err(e) = self.export(format, path.as_deref()) {
                    self.errors += 1;
                    eprintln!("error: {e:#}");
                }
            }
            Command::Count => println!("{} record(s).", self.store.len()),
            Command::Help => print_help(),
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Continue
    }

    fn report(&mut self, error: StoreError) {
        self.errors += 1;
        // Field problems are warnings, matching the form UI's severity split.
        if error.is_validation() {
            eprintln!("warning: {error}");
        } else {
            eprintln!("error: {error}");
        }
    }

    fn export(&mut self, format: ExportFormat, path: Option<&Path>) -> Result<()> {
        match (format, path) {
            (ExportFormat::Csv, Some(path)) => {
                roster_export::csv::write_csv_file(self.store.list(), path)?;
                println!(
                    "Exported {} record(s) to {}.",
                    self.store.len(),
                    path.display()
                );
            }
            (ExportFormat::Csv, None) => {
                print!("{}", roster_export::csv::csv_string(self.store.list())?);
            }
            (ExportFormat::Json, Some(path)) => {
                roster_export::json::write_json_file(self.store.list(), path)?;
                println!(
                    "Exported {} record(s) to {}.",
                    self.store.len(),
                    path.display()
                );
            }
            (ExportFormat::Json, None) => {
                println!("{}", roster_export::json::json_string(self.store.list())?);
            }
        }
        Ok(())
    }
}

fn render_table(store: &RecordStore) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Student ID", "Name", "Age", "Grade"]);
    for record in store.list() {
        table.add_row(vec![
            record.id.clone(),
            record.name.clone(),
            record.age.to_string(),
            record.grade.clone(),
        ]);
    }
    table
}

fn print_help() {
    println!(
        "Commands:\n\
         \x20 add <id> <name> <age> <grade>     add a new student\n\
         \x20 get <id>                          show one student (alias: search)\n\
         \x20 list                              show all students\n\
         \x20 update <id> <name> <age> <grade>  replace a student's fields\n\
         \x20 delete <id>                       remove a student\n\
         \x20 clear                             remove all students\n\
         \x20 export [--format csv|json] [PATH] export records (stdout if no PATH)\n\
         \x20 count                             number of records\n\
         \x20 help                              this message\n\
         \x20 quit                              end the session"
    );
}

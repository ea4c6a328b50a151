use std::io::{self, BufRead, Write};

use crate::shared::errors::StoreError;
use crate::tasks::TaskStore;

/// What the user asked for, parsed from one input line.
///
/// Positions are typed 1-based and converted to store indices here; a
/// missing or unparseable position becomes `None` and is reported as a
/// selection error without touching the store.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Add(&'a str),
    Edit(Option<usize>, &'a str),
    Delete(Option<usize>),
    Done(Option<usize>),
    List,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

fn parse_position(token: &str) -> Option<usize> {
    token
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .map(|n| n - 1)
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "add" => Command::Add(rest),
        "edit" => match rest.split_once(char::is_whitespace) {
            Some((position, title)) => Command::Edit(parse_position(position), title.trim()),
            None => Command::Edit(parse_position(rest), ""),
        },
        "del" | "delete" => Command::Delete(parse_position(rest)),
        "done" => Command::Done(parse_position(rest)),
        "list" => Command::List,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(verb),
    }
}

/// Print the full task sequence, one line per task.
fn render(out: &mut impl Write, store: &TaskStore) -> io::Result<()> {
    let tasks = store.list();
    if tasks.is_empty() {
        writeln!(out, "(no tasks)")?;
        return Ok(());
    }

    for (position, task) in tasks.iter().enumerate() {
        let status = if task.completed { "[✓] " } else { "[✗] " };
        writeln!(out, "{:>2}. {}{}", position + 1, status, task.title)?;
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  add <title>        add a task")?;
    writeln!(out, "  edit <n> <title>   change the title of task n")?;
    writeln!(out, "  del <n>            delete task n")?;
    writeln!(out, "  done <n>           mark task n complete")?;
    writeln!(out, "  list               show all tasks")?;
    writeln!(out, "  quit               exit")?;
    Ok(())
}

fn report_error(out: &mut impl Write, err: &StoreError) -> io::Result<()> {
    let kind = match err {
        StoreError::EmptyTitle => "Input error",
        StoreError::NoSuchTask(_) => "Selection error",
        StoreError::Persistence(_) => "Storage error",
    };
    writeln!(out, "{}: {}", kind, err)
}

fn report_no_selection(out: &mut impl Write, action: &str) -> io::Result<()> {
    writeln!(out, "Selection error: No task selected to {}.", action)
}

/// Re-render after a successful mutation, or report why it was rejected.
fn finish_mutation(
    out: &mut impl Write,
    store: &TaskStore,
    result: Result<(), StoreError>,
) -> io::Result<()> {
    match result {
        Ok(()) => render(out, store),
        Err(err) => report_error(out, &err),
    }
}

/// Line-oriented front end over the store. Reads commands from stdin until
/// EOF or `quit`, re-rendering the whole list after every mutation.
pub fn run(store: &mut TaskStore) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();

    render(&mut out, store)?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => print_help(&mut out)?,
            Command::List => render(&mut out, store)?,
            Command::Add(title) => {
                let result = store.add_task(title).map(|_| ());
                finish_mutation(&mut out, store, result)?;
            }
            Command::Edit(None, _) => report_no_selection(&mut out, "edit")?,
            Command::Edit(Some(index), title) => {
                let result = store.edit_task(index, title);
                finish_mutation(&mut out, store, result)?;
            }
            Command::Delete(None) => report_no_selection(&mut out, "delete")?,
            Command::Delete(Some(index)) => {
                let result = store.delete_task(index);
                finish_mutation(&mut out, store, result)?;
            }
            Command::Done(None) => report_no_selection(&mut out, "mark as complete")?,
            Command::Done(Some(index)) => {
                let result = store.mark_complete(index);
                finish_mutation(&mut out, store, result)?;
            }
            Command::Unknown(verb) => {
                writeln!(out, "Unknown command: {} (try 'help')", verb)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_keeps_raw_title() {
        assert_eq!(parse_command("add Buy milk"), Command::Add("Buy milk"));
        assert_eq!(parse_command("add    spaced   "), Command::Add("spaced"));
    }

    #[test]
    fn test_parse_edit_converts_position_to_index() {
        assert_eq!(
            parse_command("edit 2 New title"),
            Command::Edit(Some(1), "New title")
        );
        assert_eq!(parse_command("edit 1"), Command::Edit(Some(0), ""));
    }

    #[test]
    fn test_parse_rejects_zero_and_garbage_positions() {
        assert_eq!(parse_command("del 0"), Command::Delete(None));
        assert_eq!(parse_command("done x"), Command::Done(None));
        assert_eq!(parse_command("done"), Command::Done(None));
    }

    #[test]
    fn test_parse_misc_commands() {
        assert_eq!(parse_command("list"), Command::List);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("   "), Command::Empty);
        assert_eq!(parse_command("frobnicate"), Command::Unknown("frobnicate"));
    }

    #[test]
    fn test_render_shows_status_and_one_based_positions() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(dir.path().join("tasks.json")).unwrap();
        store.add_task("Buy milk").unwrap();
        store.add_task("Walk the dog").unwrap();
        store.mark_complete(1).unwrap();

        let mut out = Vec::new();
        render(&mut out, &store).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(" 1. [✗] Buy milk"));
        assert!(text.contains(" 2. [✓] Walk the dog"));
    }

    #[test]
    fn test_render_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::open(dir.path().join("tasks.json")).unwrap();

        let mut out = Vec::new();
        render(&mut out, &store).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(no tasks)\n");
    }

    #[test]
    fn test_report_error_categories() {
        let mut out = Vec::new();
        report_error(&mut out, &StoreError::EmptyTitle).unwrap();
        report_error(&mut out, &StoreError::NoSuchTask(3)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Input error: Task title cannot be empty"));
        assert!(text.contains("Selection error: No task at position 3"));
    }
}

// Interactive session: the terminal stand-in for the single page UI.
//
// Responsibilities
// - Load the events on entry, then read one command per line until quit or end of input.
// - Run each command to completion before reading the next one.
// - Print failures as their generic message and keep going.

use crate::modules::user_events::core::event::UserEventId;
use crate::modules::user_events::use_cases::toggle_recorder::handler::RecorderTransition;
use crate::shell::render::{render_day_groups, render_event, render_recorder};
use crate::shell::state::AppState;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP: &str = "\
Commands:
  toggle (or empty line)  start or stop recording
  status                  show the recorder and the last error
  list                    show events grouped by day
  reload                  fetch events from the backend again
  rename <id> <title>     rename an event
  delete <id>             delete an event
  help                    show this help
  quit                    leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Toggle,
    Status,
    List,
    Reload,
    Rename { id: UserEventId, title: String },
    Delete { id: UserEventId },
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<SessionCommand, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(word, rest)| (word, rest.trim()))
        .unwrap_or((line, ""));

    match word {
        "" | "toggle" | "t" => Ok(SessionCommand::Toggle),
        "status" | "s" => Ok(SessionCommand::Status),
        "list" | "ls" => Ok(SessionCommand::List),
        "reload" => Ok(SessionCommand::Reload),
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
        "delete" | "rm" => Ok(SessionCommand::Delete {
            id: parse_id(rest)?,
        }),
        "rename" => {
            let (id, title) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: rename <id> <title>".to_string())?;
            let title = title.trim();
            if title.is_empty() {
                return Err("usage: rename <id> <title>".to_string());
            }
            Ok(SessionCommand::Rename {
                id: parse_id(id)?,
                title: title.to_string(),
            })
        }
        other => Err(format!("unknown command `{other}`, type help")),
    }
}

fn parse_id(value: &str) -> Result<UserEventId, String> {
    value
        .trim()
        .trim_start_matches('#')
        .parse::<u64>()
        .map(UserEventId)
        .map_err(|_| format!("`{value}` is not an event id"))
}

pub async fn run<R, W>(state: &AppState, input: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    reload(state, out).await?;
    write!(out, "{HELP}")?;
    out.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };
        if command == SessionCommand::Quit {
            break;
        }
        execute(state, command, out).await?;
        out.flush()?;
    }

    if state.recorder.select(|recorder| recorder.is_recording()).await {
        tracing::warn!("session ended while recording, the interval is discarded");
    }
    Ok(())
}

async fn execute<W: Write>(
    state: &AppState,
    command: SessionCommand,
    out: &mut W,
) -> std::io::Result<()> {
    match command {
        SessionCommand::Toggle => match state.toggle_handler.handle().await {
            Ok(RecorderTransition::Started { at }) => {
                writeln!(out, "Recording since {} UTC", at.format("%H:%M:%S"))
            }
            Ok(RecorderTransition::Stopped { event }) => {
                writeln!(out, "Saved {}", render_event(&event))
            }
            Err(err) => writeln!(out, "{err}"),
        },
        SessionCommand::Status => {
            let recorder = state.recorder.snapshot().await;
            let events = state.store.snapshot().await;
            writeln!(out, "{}", render_recorder(&recorder, state.clock.now()))?;
            writeln!(out, "{} event(s) loaded", events.len())?;
            if let Some(error) = events.error {
                writeln!(out, "Last error: {error}")?;
            }
            Ok(())
        }
        SessionCommand::List => {
            let groups = state.day_groups.handle().await;
            write!(out, "{}", render_day_groups(&groups))
        }
        SessionCommand::Reload => reload(state, out).await,
        SessionCommand::Rename { id, title } => match state.rename(id, &title).await {
            Ok(event) => writeln!(out, "Renamed {}", render_event(&event)),
            Err(err) => writeln!(out, "{err}"),
        },
        SessionCommand::Delete { id } => match state.delete_handler.handle(id).await {
            Ok(()) => writeln!(out, "Deleted #{id}"),
            Err(err) => writeln!(out, "{err}"),
        },
        SessionCommand::Help => write!(out, "{HELP}"),
        SessionCommand::Quit => Ok(()),
    }
}

async fn reload<W: Write>(state: &AppState, out: &mut W) -> std::io::Result<()> {
    match state.load_handler.handle().await {
        Ok(_) => {
            let groups = state.day_groups.handle().await;
            write!(out, "{}", render_day_groups(&groups))
        }
        Err(err) => writeln!(out, "{err}"),
    }
}

// Command line surface and the one-shot commands.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::sync::mpsc;

use crate::modules::user_events::adapters::outbound::http_user_events_api::HttpUserEventsApi;
use crate::modules::user_events::adapters::outbound::in_memory_user_events_api::InMemoryUserEventsApi;
use crate::modules::user_events::core::event::UserEventId;
use crate::modules::user_events::use_cases::toggle_recorder::handler::RecorderTransition;
use crate::shared::core::clock::SystemClock;
use crate::shell::config::AppConfig;
use crate::shell::http::serve;
use crate::shell::render::{render_day_groups, render_event};
use crate::shell::session;
use crate::shell::state::{AppState, BackendState};

#[derive(Debug, Parser)]
#[command(name = "time_recorder")]
#[command(about = "Record time intervals and keep them as events on a REST backend")]
pub struct Cli {
    /// Base URL of the events API (overrides TIME_RECORDER_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the events API from memory
    Serve {
        /// Address to listen on (overrides TIME_RECORDER_BIND)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    #[command(flatten)]
    Client(ClientCommand),
}

/// Commands that talk to an events API over HTTP.
#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// Print events grouped by day
    List,
    /// Record until Enter or Ctrl-C, then save the interval
    Record,
    /// Rename an event
    Rename { id: u64, title: String },
    /// Delete an event
    Delete { id: u64 },
    /// Interactive session (default)
    Session,
}

pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Command::Client(ClientCommand::Session)) {
        Command::Serve { bind } => {
            let state = BackendState {
                api: Arc::new(InMemoryUserEventsApi::new()),
            };
            serve(state, bind.unwrap_or(config.bind)).await
        }
        Command::Client(command) => {
            let api_url = cli.api_url.unwrap_or(config.api_url);
            run_client(command, &api_url, config.timeout).await
        }
    }
}

async fn run_client(command: ClientCommand, api_url: &str, timeout: Duration) -> anyhow::Result<()> {
    let api = HttpUserEventsApi::new(api_url, timeout)
        .with_context(|| format!("cannot build a client for {api_url}"))?;
    let state = AppState::new(Arc::new(api), Arc::new(SystemClock));
    tracing::debug!(%api_url, ?command, "running");

    match command {
        ClientCommand::List => {
            state.load_handler.handle().await?;
            print!("{}", render_day_groups(&state.day_groups.handle().await));
        }
        ClientCommand::Record => record(&state).await?,
        ClientCommand::Rename { id, title } => {
            state.load_handler.handle().await?;
            let event = state.rename(UserEventId(id), &title).await?;
            println!("Renamed {}", render_event(&event));
        }
        ClientCommand::Delete { id } => {
            state.delete_handler.handle(UserEventId(id)).await?;
            println!("Deleted #{id}");
        }
        ClientCommand::Session => {
            let stdin = BufReader::new(tokio::io::stdin());
            session::run(&state, stdin, &mut std::io::stdout()).await?;
        }
    }
    Ok(())
}

async fn record(state: &AppState) -> anyhow::Result<()> {
    state.toggle_handler.handle().await?;
    println!("Recording, press Enter or Ctrl-C to stop.");

    let mut lines = spawn_line_reader(std::io::BufReader::new(std::io::stdin()));
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "cannot listen for Ctrl-C, stop with Enter");
            std::future::pending::<()>().await;
        }
    };
    let reason = wait_for_stop(state, &mut lines, interrupt, &mut std::io::stdout()).await?;
    println!();
    tracing::debug!(?reason, "recording stopped");

    if let RecorderTransition::Stopped { event } = state.toggle_handler.handle().await? {
        println!("Saved {}", render_event(&event));
    }
    Ok(())
}

/// Reads lines on a plain thread so a pending read never holds up runtime shutdown.
/// The thread is left behind when the receiver goes away mid-read.
fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<String>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    std::thread::spawn(move || {
        for line in reader.lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    Enter,
    Interrupted,
}

async fn wait_for_stop<F, W>(
    state: &AppState,
    lines: &mut mpsc::Receiver<String>,
    interrupt: F,
    out: &mut W,
) -> io::Result<StopReason>
where
    F: Future<Output = ()>,
    W: Write,
{
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let elapsed = state
                    .recorder
                    .select(|recorder| recorder.elapsed(state.clock.now()))
                    .await;
                write!(out, "\r{elapsed}")?;
                out.flush()?;
            }
            // A closed channel means stdin hit end of input, which also stops.
            _ = lines.recv() => return Ok(StopReason::Enter),
            _ = &mut interrupt => return Ok(StopReason::Interrupted),
        }
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use crate::tests::fixtures::clock::FixedClock;
    use rstest::{fixture, rstest};

    struct Context {
        clock: Arc<FixedClock>,
        state: AppState,
    }

    #[fixture]
    fn before_each() -> Context {
        let clock = Arc::new(FixedClock::default());
        let state = AppState::new(Arc::new(InMemoryUserEventsApi::new()), clock.clone());
        Context { clock, state }
    }

    #[rstest]
    fn it_should_default_to_the_session() {
        let cli = Cli::try_parse_from(["time_recorder"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.api_url.is_none());
    }

    #[rstest]
    fn it_should_accept_the_api_url_after_the_subcommand() {
        let cli =
            Cli::try_parse_from(["time_recorder", "list", "--api-url", "http://x.test"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Client(ClientCommand::List))));
        assert_eq!(cli.api_url.as_deref(), Some("http://x.test"));
    }

    #[rstest]
    fn it_should_parse_rename_and_serve() {
        let cli = Cli::try_parse_from(["time_recorder", "rename", "3", "Code review"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Client(ClientCommand::Rename { id: 3, ref title })) if title == "Code review"
        ));

        let cli = Cli::try_parse_from(["time_recorder", "serve", "--bind", "0.0.0.0:9000"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Serve { bind: Some(addr) }) if addr.port() == 9000
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_stop_on_interrupt_while_stdin_stays_open(before_each: Context) {
        let ctx = before_each;
        ctx.state.toggle_handler.handle().await.unwrap();
        ctx.clock.advance(chrono::Duration::minutes(5));
        let (_keep_open, mut lines) = mpsc::channel::<String>(1);
        let mut out = Vec::new();

        let reason = tokio::time::timeout(
            Duration::from_secs(5),
            wait_for_stop(
                &ctx.state,
                &mut lines,
                tokio::time::sleep(Duration::from_millis(50)),
                &mut out,
            ),
        )
        .await
        .expect("recording did not stop")
        .unwrap();

        assert_eq!(reason, StopReason::Interrupted);
        assert!(String::from_utf8(out).unwrap().contains("\r00:05:00"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_stop_on_enter(before_each: Context) {
        let ctx = before_each;
        let (tx, mut lines) = mpsc::channel::<String>(1);
        tx.send(String::new()).await.unwrap();
        let mut out = Vec::new();

        let reason = wait_for_stop(&ctx.state, &mut lines, std::future::pending(), &mut out)
            .await
            .unwrap();

        assert_eq!(reason, StopReason::Enter);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_forward_lines_until_end_of_input() {
        let mut lines = spawn_line_reader(std::io::Cursor::new("a\nb\n"));
        assert_eq!(lines.recv().await.as_deref(), Some("a"));
        assert_eq!(lines.recv().await.as_deref(), Some("b"));
        assert_eq!(lines.recv().await, None);
    }

    #[rstest]
    #[case(&["time_recorder", "delete", "abc"])]
    #[case(&["time_recorder", "rename", "3"])]
    fn it_should_reject_bad_arguments(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }
}

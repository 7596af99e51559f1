//! Interactive list browsing
//!
//! Every plain input line replaces the search query. Lines starting with
//! `:` are commands acting on the currently visible list.

use anyhow::bail;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::commands;
use crate::context::AppContext;
use crate::render;
use crate::selector::Selector;

const HELP: &str = "Type to search. Commands: :show N, :map N, :call N, :help, :quit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Replace the search query
    Query(String),
    /// Show hospital details
    Show(Selector),
    /// Open a hospital in the maps app
    Map(Selector),
    /// Dial a hospital
    Call(Selector),
    /// Print usage
    Help,
    /// Leave the browser
    Quit,
}

/// Parse an input line
pub fn parse_line(line: &str) -> Result<BrowseCommand, String> {
    let Some(command) = line.trim().strip_prefix(':') else {
        return Ok(BrowseCommand::Query(line.to_string()));
    };

    let (name, argument) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(name, rest)| (name, rest.trim()));

    let selector = || {
        if argument.is_empty() {
            return Err(format!(":{name} needs a list position or name"));
        }
        argument.parse::<Selector>()
    };

    match name {
        "q" | "quit" | "exit" => Ok(BrowseCommand::Quit),
        "h" | "help" => Ok(BrowseCommand::Help),
        "show" => selector().map(BrowseCommand::Show),
        "map" => selector().map(BrowseCommand::Map),
        "call" => selector().map(BrowseCommand::Call),
        other => Err(format!("Unknown command :{other}. {HELP}")),
    }
}

/// Run the browser on stdin until `:quit` or end of input
pub async fn run(context: &AppContext) -> anyhow::Result<()> {
    let mut screen = context.list_screen();
    screen.mount();
    let status = screen.loaded().await;
    if let Some(message) = status.error() {
        bail!("{message}");
    }

    println!("{}", render::hospital_list(&screen.visible()));
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            },
        };
        debug!(?command, "Browse command");

        let output = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => HELP.to_string(),
            BrowseCommand::Query(query) => {
                screen.set_query(query);
                render::hospital_list(&screen.visible())
            },
            BrowseCommand::Show(selector) => match open(context, &screen, &selector) {
                Ok(detail) => commands::show(detail).await,
                Err(e) => e.to_string(),
            },
            BrowseCommand::Map(selector) => match open(context, &screen, &selector) {
                Ok(detail) => commands::open_map(detail, context.dry_run()).await,
                Err(e) => e.to_string(),
            },
            BrowseCommand::Call(selector) => match open(context, &screen, &selector) {
                Ok(detail) => commands::call(detail, context.dry_run()).await,
                Err(e) => e.to_string(),
            },
        };
        println!("{output}");
    }

    screen.unmount();
    Ok(())
}

fn open(
    context: &AppContext,
    screen: &application::HospitalListScreen,
    selector: &Selector,
) -> anyhow::Result<application::HospitalDetailScreen> {
    let hospital = commands::pick(screen, selector)?;
    context
        .detail_screen(&hospital)
        .map_err(|e| commands::user_error(&e))
}

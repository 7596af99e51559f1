//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use domain::Platform;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "vino-cli")]
#[command(author, version, about = "COVID-19 referral hospital directory", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    platform: Option<Platform>,

    #[arg(long, global = true)]
    deny_location: bool,

    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    List {
        #[arg(short, long, default_value = "")]
        query: String,
    },
    Show(Target),
    OpenMap(Target),
    Call(Target),
    Browse,
}

#[derive(Args)]
struct Target {
    #[arg(required_unless_present = "hospital_json", conflicts_with = "hospital_json")]
    selector: Option<String>,

    #[arg(short, long, default_value = "", conflicts_with = "hospital_json")]
    query: String,

    #[arg(long)]
    hospital_json: Option<String>,
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_list_command() {
    let cli = parse_args(&["vino-cli", "list"]).unwrap();
    if let Commands::List { query } = cli.command {
        assert_eq!(query, "");
    } else {
        panic!("Expected List command");
    }
}

#[test]
fn cli_parses_list_with_query() {
    let cli = parse_args(&["vino-cli", "list", "--query", "Jakarta Timur"]).unwrap();
    if let Commands::List { query } = cli.command {
        assert_eq!(query, "Jakarta Timur");
    } else {
        panic!("Expected List command");
    }
}

#[test]
fn cli_parses_show_with_index() {
    let cli = parse_args(&["vino-cli", "show", "#3"]).unwrap();
    if let Commands::Show(target) = cli.command {
        assert_eq!(target.selector.as_deref(), Some("#3"));
        assert!(target.hospital_json.is_none());
    } else {
        panic!("Expected Show command");
    }
}

#[test]
fn cli_parses_show_with_query_and_name() {
    let cli = parse_args(&["vino-cli", "show", "-q", "bogor", "RS Hermina Bogor"]).unwrap();
    if let Commands::Show(target) = cli.command {
        assert_eq!(target.query, "bogor");
        assert_eq!(target.selector.as_deref(), Some("RS Hermina Bogor"));
    } else {
        panic!("Expected Show command");
    }
}

#[test]
fn cli_parses_hospital_json() {
    let cli = parse_args(&[
        "vino-cli",
        "open-map",
        "--hospital-json",
        r#"{"name":"RS A","address":"Jl. B"}"#,
    ])
    .unwrap();
    if let Commands::OpenMap(target) = cli.command {
        assert!(target.selector.is_none());
        assert!(target.hospital_json.unwrap().contains("RS A"));
    } else {
        panic!("Expected OpenMap command");
    }
}

#[test]
fn cli_requires_selector_or_json() {
    assert!(parse_args(&["vino-cli", "call"]).is_err());
}

#[test]
fn cli_rejects_selector_with_json() {
    assert!(parse_args(&["vino-cli", "show", "1", "--hospital-json", "{}"]).is_err());
}

#[test]
fn cli_parses_global_flags_after_subcommand() {
    let cli = parse_args(&[
        "vino-cli",
        "call",
        "2",
        "--platform",
        "ios",
        "--dry-run",
        "--deny-location",
        "-vv",
    ])
    .unwrap();
    assert_eq!(cli.platform, Some(Platform::Ios));
    assert!(cli.dry_run);
    assert!(cli.deny_location);
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.command, Commands::Call(_)));
}

#[test]
fn cli_rejects_unknown_platform() {
    assert!(parse_args(&["vino-cli", "list", "--platform", "symbian"]).is_err());
}

#[test]
fn cli_parses_config_path() {
    let cli = parse_args(&["vino-cli", "--config", "/etc/vino/config.toml", "browse"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/etc/vino/config.toml")));
    assert!(matches!(cli.command, Commands::Browse));
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["vino-cli"]).is_err());
}

#[test]
fn cli_help_is_generated() {
    let err = parse_args(&["vino-cli", "--help"]).err().unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

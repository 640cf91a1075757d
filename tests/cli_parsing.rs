use clap::Parser;
use std::path::PathBuf;

use mld::cli::commands::file::FileCommands;
use mld::cli::commands::session::SessionCommands;
use mld::cli::{Cli, Commands};

#[test]
fn test_cli_help() {
    let result = Cli::try_parse_from(vec!["mld", "--help"]);
    assert!(result.is_err()); // --help causes early exit with error
}

#[test]
fn test_global_options() {
    let cli = Cli::try_parse_from(vec![
        "mld",
        "--config",
        "/custom/config.yaml",
        "session",
        "list",
        "--json",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("/custom/config.yaml")));
}

#[test]
fn test_parse_session_add() {
    let cli = Cli::try_parse_from(vec![
        "mld",
        "session",
        "add",
        "baseline",
        "--description",
        "first run",
        "-g",
        "abc123",
    ])
    .unwrap();

    match cli.command {
        Commands::Session(args) => match args.command {
            SessionCommands::Add {
                name,
                description,
                git_hash,
            } => {
                assert_eq!(name, "baseline");
                assert_eq!(description, "first run");
                assert_eq!(git_hash, "abc123");
            }
            _ => panic!("Wrong session command"),
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_session_add_requires_description_and_git_hash() {
    let missing_both = Cli::try_parse_from(vec!["mld", "session", "add", "baseline"]);
    assert!(missing_both.is_err());

    let missing_hash = Cli::try_parse_from(vec!["mld", "session", "add", "baseline", "-d", "run"]);
    assert!(missing_hash.is_err());
}

#[test]
fn test_parse_session_update_partial() {
    let cli = Cli::try_parse_from(vec!["mld", "session", "update", "abc", "--iteration", "5"]).unwrap();

    match cli.command {
        Commands::Session(args) => match args.command {
            SessionCommands::Update {
                id,
                name,
                description,
                git_hash,
                iteration,
                epoch,
                loss,
            } => {
                assert_eq!(id, "abc");
                assert_eq!(iteration, Some(5));
                assert!(name.is_none());
                assert!(description.is_none());
                assert!(git_hash.is_none());
                assert!(epoch.is_none());
                assert!(loss.is_none());
            }
            _ => panic!("Wrong session command"),
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_session_update_rejects_non_numeric_loss() {
    let result = Cli::try_parse_from(vec!["mld", "session", "update", "abc", "--loss", "low"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_file_get_with_output() {
    let cli = Cli::try_parse_from(vec!["mld", "file", "get", "weights.bin", "-o", "/tmp/w.bin"]).unwrap();

    match cli.command {
        Commands::File(args) => match args.command {
            FileCommands::Get { name, output } => {
                assert_eq!(name, "weights.bin");
                assert_eq!(output, Some(PathBuf::from("/tmp/w.bin")));
            }
            _ => panic!("Wrong file command"),
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_init_defaults() {
    let cli = Cli::try_parse_from(vec!["mld", "init"]).unwrap();

    match cli.command {
        Commands::Init(args) => {
            assert!(!args.force);
            assert_eq!(args.path, PathBuf::from("."));
        }
        _ => panic!("Wrong top-level command"),
    }
}

//! Tests for check and the global --db / --verbose flags.

use super::{parse, parse_cli};
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_check() {
    match parse(&["mimedb", "check", "/tmp/db.json"]) {
        CliCommand::Check { path } => assert_eq!(path, Path::new("/tmp/db.json")),
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_db_before_subcommand() {
    let cli = parse_cli(&["mimedb", "--db", "local.json", "ext", "png"]);
    assert_eq!(cli.db.as_deref(), Some(Path::new("local.json")));
    assert!(!cli.verbose);
}

#[test]
fn cli_parse_db_after_subcommand() {
    let cli = parse_cli(&["mimedb", "file", "a.png", "--db", "local.json", "-v"]);
    assert_eq!(cli.db.as_deref(), Some(Path::new("local.json")));
    assert!(cli.verbose);
}

#[test]
fn cli_parse_no_db_by_default() {
    let cli = parse_cli(&["mimedb", "url", "https://example.com/x.pdf"]);
    assert!(cli.db.is_none());
}

//! Tests for the inject subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_inject_defaults_to_stdin() {
    match parse(&["metaup", "inject", "https://fava.example.com/income_statement/"]) {
        CliCommand::Inject {
            url,
            path,
            in_place,
            output,
            force,
        } => {
            assert_eq!(url, "https://fava.example.com/income_statement/");
            assert_eq!(path, "-");
            assert!(!in_place);
            assert!(output.is_none());
            assert!(!force);
        }
        _ => panic!("expected Inject"),
    }
}

#[test]
fn cli_parse_inject_with_file() {
    match parse(&["metaup", "inject", "https://fava.example.com/", "page.html"]) {
        CliCommand::Inject { url, path, .. } => {
            assert_eq!(url, "https://fava.example.com/");
            assert_eq!(path, "page.html");
        }
        _ => panic!("expected Inject with file"),
    }
}

#[test]
fn cli_parse_inject_in_place() {
    match parse(&[
        "metaup",
        "inject",
        "https://fava.example.com/",
        "page.html",
        "--in-place",
    ]) {
        CliCommand::Inject { in_place, output, .. } => {
            assert!(in_place);
            assert!(output.is_none());
        }
        _ => panic!("expected Inject with --in-place"),
    }
}

#[test]
fn cli_parse_inject_output_file() {
    match parse(&[
        "metaup",
        "inject",
        "https://fava.example.com/",
        "page.html",
        "-o",
        "out.html",
    ]) {
        CliCommand::Inject { output, .. } => {
            assert_eq!(output.as_deref(), Some("out.html"));
        }
        _ => panic!("expected Inject with -o"),
    }
}

#[test]
fn cli_parse_inject_force() {
    match parse(&["metaup", "inject", "https://fava.example.com/", "--force"]) {
        CliCommand::Inject { force, .. } => assert!(force),
        _ => panic!("expected Inject with --force"),
    }
}

#[test]
fn cli_parse_inject_in_place_conflicts_with_output() {
    let result = Cli::try_parse_from([
        "metaup",
        "inject",
        "https://fava.example.com/",
        "page.html",
        "--in-place",
        "-o",
        "out.html",
    ]);
    assert!(result.is_err());
}

//! Tests for check, scan, userscript, completions.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;

#[test]
fn cli_parse_check() {
    match parse(&["metaup", "check", "https://fava.example.com/"]) {
        CliCommand::Check { url } => assert_eq!(url, "https://fava.example.com/"),
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_scan_defaults_to_stdin() {
    match parse(&["metaup", "scan"]) {
        CliCommand::Scan { path } => assert_eq!(path, "-"),
        _ => panic!("expected Scan"),
    }
}

#[test]
fn cli_parse_scan_with_file() {
    match parse(&["metaup", "scan", "page.html"]) {
        CliCommand::Scan { path } => assert_eq!(path, "page.html"),
        _ => panic!("expected Scan with file"),
    }
}

#[test]
fn cli_parse_userscript() {
    match parse(&["metaup", "userscript"]) {
        CliCommand::Userscript => {}
        _ => panic!("expected Userscript"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["metaup", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

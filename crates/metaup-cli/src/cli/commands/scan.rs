//! `metaup scan [path]` – report CSP meta tags already present in a document.

use anyhow::Result;
use metaup_core::injector;

use super::inject::read_input;

pub fn run_scan(path: &str) -> Result<()> {
    let html = read_input(path)?;
    match injector::tag_count(&html) {
        0 => println!("no upgrade-insecure-requests meta tag"),
        1 => println!("1 upgrade-insecure-requests meta tag"),
        n => println!("{n} upgrade-insecure-requests meta tags (duplicates)"),
    }
    Ok(())
}

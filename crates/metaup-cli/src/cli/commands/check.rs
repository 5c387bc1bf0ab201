//! `metaup check <url>` – test a URL against the configured match patterns.

use anyhow::Result;
use metaup_core::config::MetaupConfig;
use metaup_core::injector::Injector;

/// Print whether `url` matches; exit 1 on no match so scripts can branch.
pub fn run_check(cfg: &MetaupConfig, url: &str) -> Result<()> {
    let injector = Injector::from_config(cfg)?;
    if injector.matches_str(url)? {
        println!("{url}: matches");
        Ok(())
    } else {
        println!("{url}: no match");
        std::process::exit(1);
    }
}

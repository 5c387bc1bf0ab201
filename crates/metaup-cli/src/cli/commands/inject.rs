//! `metaup inject <url> [path]` – rewrite an HTML document.

use anyhow::{bail, Context, Result};
use metaup_core::config::MetaupConfig;
use metaup_core::injector::{self, InjectOutcome, Injector};
use std::io::Read;

pub fn run_inject(
    cfg: &MetaupConfig,
    url: &str,
    path: &str,
    in_place: bool,
    output: Option<&str>,
    force: bool,
) -> Result<()> {
    if in_place && path == "-" {
        bail!("--in-place requires a file path, not stdin");
    }
    let html = read_input(path)?;

    let (rewritten, outcome) = if force {
        (injector::inject_document(&html)?, InjectOutcome::Injected)
    } else {
        let injector = Injector::from_config(cfg)?;
        injector.inject(url, &html)?
    };

    match outcome {
        InjectOutcome::Injected => {}
        InjectOutcome::AlreadyPresent => {
            eprintln!("meta tag already present; document unchanged");
        }
        InjectOutcome::Skipped => {
            eprintln!("{url} matches no configured pattern; document unchanged");
        }
    }

    write_output(path, in_place, output, &rewritten)
}

/// Read the whole document from a file, or from stdin when `path` is `-`.
pub(super) fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read {path}"))
    }
}

fn write_output(path: &str, in_place: bool, output: Option<&str>, html: &str) -> Result<()> {
    if in_place {
        std::fs::write(path, html).with_context(|| format!("write {path}"))?;
        eprintln!("rewrote {path}");
    } else if let Some(out) = output {
        std::fs::write(out, html).with_context(|| format!("write {out}"))?;
        eprintln!("wrote {out}");
    } else {
        print!("{html}");
    }
    Ok(())
}

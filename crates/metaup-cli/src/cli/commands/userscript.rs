//! `metaup userscript` – emit the configured Tampermonkey userscript.

use anyhow::Result;
use metaup_core::config::MetaupConfig;
use metaup_core::manifest;

pub fn run_userscript(cfg: &MetaupConfig) -> Result<()> {
    let manifest_cfg = cfg.manifest.clone().unwrap_or_default();
    print!(
        "{}",
        manifest::render_userscript(&manifest_cfg, &cfg.match_patterns)
    );
    Ok(())
}

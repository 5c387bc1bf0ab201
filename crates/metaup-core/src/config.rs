use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Userscript metadata used by `metaup userscript` (optional section in
/// config.toml). None of this influences injection itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Script display name (`@name`).
    pub name: String,
    /// Script version string (`@version`).
    pub version: String,
    /// Optional namespace URL (`@namespace`).
    #[serde(default)]
    pub namespace: Option<String>,
    /// Optional one-line description (`@description`).
    #[serde(default)]
    pub description: Option<String>,
    /// Optional icon URL (`@icon`).
    #[serde(default)]
    pub icon: Option<String>,
    /// External scripts the hosting runtime must evaluate before the injector
    /// runs (`@require`). Recorded for emission, never fetched.
    #[serde(default)]
    pub requires: Vec<String>,
    /// Host capability grants (`@grant`).
    #[serde(default)]
    pub grants: Vec<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: "upgrade insecure requests".to_string(),
            version: "0.1".to_string(),
            namespace: None,
            description: Some(
                "Appends an upgrade-insecure-requests Content-Security-Policy meta tag"
                    .to_string(),
            ),
            icon: None,
            requires: Vec::new(),
            grants: vec!["none".to_string()],
        }
    }
}

/// Global configuration loaded from `~/.config/metaup/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaupConfig {
    /// Userscript-style `@match` patterns gating injection. The default
    /// matches everything; narrow this to the origins you actually serve.
    pub match_patterns: Vec<String>,
    /// Skip injection when the head already carries the tag. Off by default:
    /// the injector appends unconditionally, once per invocation.
    #[serde(default)]
    pub dedupe: bool,
    /// Optional userscript metadata for the `userscript` command.
    #[serde(default)]
    pub manifest: Option<ManifestConfig>,
}

impl Default for MetaupConfig {
    fn default() -> Self {
        Self {
            match_patterns: vec!["<all_urls>".to_string()],
            dedupe: false,
            manifest: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("metaup")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MetaupConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] but against an explicit path (used by tests).
pub fn load_or_init_at(path: &Path) -> Result<MetaupConfig> {
    if !path.exists() {
        let default_cfg = MetaupConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: MetaupConfig = toml::from_str(&data)?;
    Ok(cfg)
}

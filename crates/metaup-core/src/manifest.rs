//! Userscript emission: renders the configured metadata and match patterns
//! as a Tampermonkey-compatible userscript whose body performs the same
//! head append this crate does natively.

use std::fmt::Write;

use crate::config::ManifestConfig;
use crate::injector::CSP_META_TAG;

/// Render a complete userscript: the `==UserScript==` metadata block plus a
/// strict-mode IIFE that appends the CSP meta tag once on page load.
pub fn render_userscript(manifest: &ManifestConfig, match_patterns: &[String]) -> String {
    let mut out = String::new();
    out.push_str("// ==UserScript==\n");
    push_field(&mut out, "@name", &manifest.name);
    if let Some(namespace) = &manifest.namespace {
        push_field(&mut out, "@namespace", namespace);
    }
    push_field(&mut out, "@version", &manifest.version);
    if let Some(description) = &manifest.description {
        push_field(&mut out, "@description", description);
    }
    if let Some(icon) = &manifest.icon {
        push_field(&mut out, "@icon", icon);
    }
    for pattern in match_patterns {
        push_field(&mut out, "@match", pattern);
    }
    for require in &manifest.requires {
        push_field(&mut out, "@require", require);
    }
    for grant in &manifest.grants {
        push_field(&mut out, "@grant", grant);
    }
    out.push_str("// ==/UserScript==\n");
    out.push('\n');
    out.push_str("(function() {\n");
    out.push_str("    'use strict';\n");
    let _ = writeln!(
        out,
        "    document.head.insertAdjacentHTML('beforeend', `{CSP_META_TAG}`);"
    );
    out.push_str("})();\n");
    out
}

fn push_field(out: &mut String, key: &str, value: &str) {
    // Column-aligned like hand-written userscript headers.
    let _ = writeln!(out, "// {key:<13} {value}");
}

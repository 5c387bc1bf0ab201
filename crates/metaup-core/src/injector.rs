//! Page-load injector: appends the upgrade-insecure-requests
//! Content-Security-Policy meta tag to the head section of matching pages.

use url::Url;

use crate::config::MetaupConfig;
use crate::html;
use crate::match_pattern::{compile_patterns, MatchPattern, PatternError};

/// `http-equiv` value of the injected tag.
pub const CSP_HTTP_EQUIV: &str = "Content-Security-Policy";

/// `content` value of the injected tag.
pub const UPGRADE_INSECURE_REQUESTS: &str = "upgrade-insecure-requests";

/// The exact element appended to the head section.
pub const CSP_META_TAG: &str =
    r#"<meta http-equiv="Content-Security-Policy" content="upgrade-insecure-requests">"#;

#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    /// The document has no head close tag to append before. Not recovered:
    /// target pages are server-rendered and always carry one.
    #[error("document has no head section to append the meta tag to")]
    HeadNotFound,
    #[error("invalid page URL: {0}")]
    Url(#[from] url::ParseError),
}

/// What [`Injector::inject`] did with the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    /// The tag was appended to the head section.
    Injected,
    /// Dedupe is enabled and the head already carries the tag; unchanged.
    AlreadyPresent,
    /// The page URL matches no configured pattern; unchanged.
    Skipped,
}

/// The injector: match patterns plus the dedupe switch, compiled once from
/// configuration and reusable across documents.
#[derive(Debug, Clone)]
pub struct Injector {
    patterns: Vec<MatchPattern>,
    dedupe: bool,
}

impl Injector {
    pub fn from_config(cfg: &MetaupConfig) -> Result<Self, PatternError> {
        Ok(Self {
            patterns: compile_patterns(&cfg.match_patterns)?,
            dedupe: cfg.dedupe,
        })
    }

    /// True if any configured pattern matches `url`.
    pub fn matches(&self, url: &Url) -> bool {
        self.patterns.iter().any(|p| p.matches(url))
    }

    /// String-URL form of [`Injector::matches`].
    pub fn matches_str(&self, url: &str) -> Result<bool, InjectError> {
        Ok(self.matches(&Url::parse(url)?))
    }

    /// Rewrite `html` for the page at `page_url`: when a pattern matches,
    /// append the CSP meta tag as the last child of the head section. The
    /// rest of the document is passed through byte for byte.
    pub fn inject(
        &self,
        page_url: &str,
        html: &str,
    ) -> Result<(String, InjectOutcome), InjectError> {
        let url = Url::parse(page_url)?;
        if !self.matches(&url) {
            tracing::debug!(%url, "no match pattern applies; document unchanged");
            return Ok((html.to_string(), InjectOutcome::Skipped));
        }
        if self.dedupe && tag_count(html) > 0 {
            tracing::debug!(%url, "meta tag already present and dedupe is on");
            return Ok((html.to_string(), InjectOutcome::AlreadyPresent));
        }
        let rewritten = inject_document(html)?;
        tracing::info!(%url, "appended upgrade-insecure-requests meta tag");
        Ok((rewritten, InjectOutcome::Injected))
    }
}

/// Append the CSP meta tag as the last child of the head section,
/// unconditionally. This is the leaf operation; activation and dedupe checks
/// live in [`Injector::inject`]. Each call appends one tag, so calling twice
/// on the same document yields two.
pub fn inject_document(html: &str) -> Result<String, InjectError> {
    let at = html::head_close_offset(html).ok_or(InjectError::HeadNotFound)?;
    let mut out = String::with_capacity(html.len() + CSP_META_TAG.len());
    out.push_str(&html[..at]);
    out.push_str(CSP_META_TAG);
    out.push_str(&html[at..]);
    Ok(out)
}

/// Number of upgrade-insecure-requests CSP meta tags in the document's head
/// section (0 when there is no well-formed head).
pub fn tag_count(html: &str) -> usize {
    match html::head_span(html) {
        Some(span) => html::count_meta_http_equiv(
            &html[span.content_start..span.content_end],
            CSP_HTTP_EQUIV,
            UPGRADE_INSECURE_REQUESTS,
        ),
        None => 0,
    }
}

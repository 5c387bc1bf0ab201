//! Userscript-style `@match` pattern parsing and URL matching.
//!
//! Implements the match-pattern grammar used by userscript managers:
//! `<scheme>://<host><path>`, where scheme is `*` (http or https), `http`,
//! `https`, or `file`; host is `*`, `*.domain` (the domain or any subdomain),
//! or a literal host; path is `/`-rooted with `*` wildcards. The special
//! pattern `<all_urls>` matches every http, https, and file URL.

use url::Url;

/// Reasons a match pattern fails to parse.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("match pattern `{0}` has no `://` separator")]
    MissingSchemeSeparator(String),
    #[error("match pattern `{0}` uses an unsupported scheme (expected *, http, https, or file)")]
    UnsupportedScheme(String),
    #[error("match pattern `{0}` has an invalid host (`*` alone or a `*.` prefix only)")]
    InvalidHost(String),
    #[error("match pattern `{0}` is missing a `/`-rooted path")]
    MissingPath(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchemePattern {
    /// `*://` — http or https.
    Any,
    /// `<all_urls>` — http, https, or file.
    AllUrls,
    Http,
    Https,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HostPattern {
    Any,
    /// `*.example.com`: the domain itself or any subdomain (stored lowercase).
    Subdomain(String),
    /// Literal host (stored lowercase).
    Exact(String),
}

/// A parsed `@match` pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPattern {
    scheme: SchemePattern,
    host: HostPattern,
    path: String,
}

impl MatchPattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let pattern = pattern.trim();
        if pattern == "<all_urls>" {
            return Ok(Self {
                scheme: SchemePattern::AllUrls,
                host: HostPattern::Any,
                path: "/*".to_string(),
            });
        }

        let (scheme_str, rest) = pattern
            .split_once("://")
            .ok_or_else(|| PatternError::MissingSchemeSeparator(pattern.to_string()))?;
        let scheme = match scheme_str {
            "*" => SchemePattern::Any,
            "http" => SchemePattern::Http,
            "https" => SchemePattern::Https,
            "file" => SchemePattern::File,
            _ => return Err(PatternError::UnsupportedScheme(pattern.to_string())),
        };

        let (host_str, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => return Err(PatternError::MissingPath(pattern.to_string())),
        };

        let host = if scheme == SchemePattern::File {
            // file URLs have no host; `file:///path` leaves it empty.
            if !host_str.is_empty() {
                return Err(PatternError::InvalidHost(pattern.to_string()));
            }
            HostPattern::Any
        } else {
            match host_str {
                "" => return Err(PatternError::InvalidHost(pattern.to_string())),
                "*" => HostPattern::Any,
                h if h.starts_with("*.") => {
                    let domain = &h[2..];
                    if domain.is_empty() || domain.contains('*') {
                        return Err(PatternError::InvalidHost(pattern.to_string()));
                    }
                    HostPattern::Subdomain(domain.to_ascii_lowercase())
                }
                h if h.contains('*') => {
                    return Err(PatternError::InvalidHost(pattern.to_string()))
                }
                h => HostPattern::Exact(h.to_ascii_lowercase()),
            }
        };

        Ok(Self {
            scheme,
            host,
            path: path.to_string(),
        })
    }

    /// True if `url` falls within this pattern. Scheme and host compare
    /// case-insensitively; the path glob is case-sensitive and is matched
    /// against the URL path plus `?query` when a query is present.
    pub fn matches(&self, url: &Url) -> bool {
        if !self.scheme_matches(url.scheme()) {
            return false;
        }
        if !self.host_matches(url.host_str().unwrap_or("")) {
            return false;
        }
        let mut target = url.path().to_string();
        if let Some(query) = url.query() {
            target.push('?');
            target.push_str(query);
        }
        glob_matches(&self.path, &target)
    }

    fn scheme_matches(&self, scheme: &str) -> bool {
        match self.scheme {
            SchemePattern::Any => scheme == "http" || scheme == "https",
            SchemePattern::AllUrls => matches!(scheme, "http" | "https" | "file"),
            SchemePattern::Http => scheme == "http",
            SchemePattern::Https => scheme == "https",
            SchemePattern::File => scheme == "file",
        }
    }

    fn host_matches(&self, host: &str) -> bool {
        match &self.host {
            HostPattern::Any => true,
            HostPattern::Exact(h) => host.eq_ignore_ascii_case(h),
            HostPattern::Subdomain(domain) => {
                let host = host.to_ascii_lowercase();
                host == *domain
                    || host
                        .strip_suffix(domain.as_str())
                        .map_or(false, |prefix| prefix.ends_with('.'))
            }
        }
    }
}

/// Parse a list of pattern strings, failing on the first invalid one.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<MatchPattern>, PatternError> {
    patterns.iter().map(|p| MatchPattern::parse(p)).collect()
}

/// Glob match where `*` matches any (possibly empty) span of bytes.
fn glob_matches(pattern: &str, text: &str) -> bool {
    let p = pattern.as_bytes();
    let t = text.as_bytes();
    let (mut pi, mut ti) = (0usize, 0usize);
    // Last `*` seen and the text position its expansion currently ends at,
    // for backtracking when a literal run fails further on.
    let mut star: Option<(usize, usize)> = None;
    while ti < t.len() {
        if pi < p.len() && p[pi] == b'*' {
            star = Some((pi, ti));
            pi += 1;
        } else if pi < p.len() && p[pi] == t[ti] {
            pi += 1;
            ti += 1;
        } else if let Some((star_pi, star_ti)) = star {
            pi = star_pi + 1;
            ti = star_ti + 1;
            star = Some((star_pi, star_ti + 1));
        } else {
            return false;
        }
    }
    while pi < p.len() && p[pi] == b'*' {
        pi += 1;
    }
    pi == p.len()
}

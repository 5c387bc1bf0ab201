//! Head-section location in raw HTML.

/// Byte range of the head section's content: from just past the `<head ...>`
/// open tag to the start of the `</head>` close tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadSpan {
    pub content_start: usize,
    pub content_end: usize,
}

/// Byte offset of the start of the `</head>` close tag, or `None` when the
/// document has no head close tag (the malformed-document case: callers
/// surface this as an error rather than repairing the document).
pub fn head_close_offset(html: &str) -> Option<usize> {
    scan_head(html).close_start
}

/// Content range of the head section, requiring both the open and close tag.
pub fn head_span(html: &str) -> Option<HeadSpan> {
    let scan = scan_head(html);
    match (scan.open_end, scan.close_start) {
        (Some(start), Some(end)) if start <= end => Some(HeadSpan {
            content_start: start,
            content_end: end,
        }),
        _ => None,
    }
}

struct HeadScan {
    open_end: Option<usize>,
    close_start: Option<usize>,
}

/// Single pass over the document, tracking the first `<head>` open tag and
/// stopping at the first `</head>` close tag that is not inside a comment or
/// script/style raw text.
fn scan_head(html: &str) -> HeadScan {
    let bytes = html.as_bytes();
    let mut open_end = None;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }
        let rest = &html[i..];
        if rest.starts_with("<!--") {
            match rest.find("-->") {
                Some(j) => {
                    i += j + 3;
                    continue;
                }
                None => break,
            }
        }
        if let Some(name) = tag_name(rest, true) {
            if name.eq_ignore_ascii_case("head") {
                return HeadScan {
                    open_end,
                    close_start: Some(i),
                };
            }
            match tag_end(rest) {
                Some(j) => {
                    i += j;
                    continue;
                }
                None => break,
            }
        }
        if let Some(name) = tag_name(rest, false) {
            let end = match tag_end(rest) {
                Some(j) => i + j,
                None => break,
            };
            if open_end.is_none() && name.eq_ignore_ascii_case("head") {
                open_end = Some(end);
            }
            if name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style") {
                match skip_raw_text(html, end, &name) {
                    Some(next) => {
                        i = next;
                        continue;
                    }
                    None => break,
                }
            }
            i = end;
            continue;
        }
        i += 1;
    }
    HeadScan {
        open_end,
        close_start: None,
    }
}

/// Tag name directly after `<` (open) or `</` (close), or `None` when the
/// text at this position is not a tag of the requested kind.
pub(super) fn tag_name(rest: &str, closing: bool) -> Option<String> {
    let body = if closing {
        rest.strip_prefix("</")?
    } else {
        let body = rest.strip_prefix('<')?;
        if body.starts_with('/') || body.starts_with('!') || body.starts_with('?') {
            return None;
        }
        body
    };
    let name: String = body
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Offset just past the closing `>` of the tag starting at `rest[0] == '<'`,
/// honoring quoted attribute values. `None` for an unterminated tag.
pub(super) fn tag_end(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => {
                let quote = bytes[i];
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                if i >= bytes.len() {
                    return None;
                }
            }
            b'>' => return Some(i + 1),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Skip past the raw text of a `script`/`style` element, returning the offset
/// just past its close tag.
fn skip_raw_text(html: &str, from: usize, name: &str) -> Option<usize> {
    let bytes = html.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'<' {
            if let Some(close) = tag_name(&html[i..], true) {
                if close.eq_ignore_ascii_case(name) {
                    return tag_end(&html[i..]).map(|j| i + j);
                }
            }
        }
        i += 1;
    }
    None
}

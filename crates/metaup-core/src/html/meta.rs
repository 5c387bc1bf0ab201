//! Meta-tag counting inside a head fragment.

use super::scan::{tag_end, tag_name};

/// Number of `<meta>` elements in `head` carrying the given
/// `http-equiv`/`content` pair. Attribute order and quoting do not matter;
/// names and both values compare ASCII case-insensitively after trimming.
pub fn count_meta_http_equiv(head: &str, http_equiv: &str, content: &str) -> usize {
    let bytes = head.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }
        let rest = &head[i..];
        if rest.starts_with("<!--") {
            match rest.find("-->") {
                Some(j) => {
                    i += j + 3;
                    continue;
                }
                None => break,
            }
        }
        if tag_name(rest, false).is_some() || tag_name(rest, true).is_some() {
            let end = match tag_end(rest) {
                Some(j) => j,
                None => break,
            };
            if tag_name(rest, false).map_or(false, |n| n.eq_ignore_ascii_case("meta")) {
                // Attribute text between the tag name and the closing `>`.
                let body = &rest["<meta".len()..end - 1];
                let attrs = parse_attrs(body);
                let equiv_ok = attr_value(&attrs, "http-equiv")
                    .map_or(false, |v| v.trim().eq_ignore_ascii_case(http_equiv));
                let content_ok = attr_value(&attrs, "content")
                    .map_or(false, |v| v.trim().eq_ignore_ascii_case(content));
                if equiv_ok && content_ok {
                    count += 1;
                }
            }
            i += end;
            continue;
        }
        i += 1;
    }
    count
}

/// Loose attribute parsing for a single tag body: `name`, `name=value`,
/// `name="value"`, `name='value'`. Names are lowercased.
fn parse_attrs(body: &str) -> Vec<(String, String)> {
    let bytes = body.as_bytes();
    let mut attrs = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        let start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && bytes[i] != b'='
            && bytes[i] != b'/'
        {
            i += 1;
        }
        if i == start {
            i += 1;
            continue;
        }
        let name = body[start..i].to_ascii_lowercase();
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let mut value = String::new();
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i];
                i += 1;
                let vstart = i;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                value = body[vstart..i].to_string();
                if i < bytes.len() {
                    i += 1;
                }
            } else {
                let vstart = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                value = body[vstart..i].to_string();
            }
        }
        attrs.push((name, value));
    }
    attrs
}

fn attr_value<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
}

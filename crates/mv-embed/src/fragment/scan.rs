//! Lightweight HTML tag scanning
//!
//! A quote-aware, byte-level scanner over pasted embed markup. It does not
//! build a DOM; it yields start/end tags with their attributes plus byte
//! ranges, which is all fragment recognition needs. Comments, doctypes,
//! and processing instructions are skipped.

/// One scanned tag
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Tag {
    /// Lowercased tag name
    pub name: String,
    /// Attributes in document order, names lowercased, values entity-decoded
    pub attrs: Vec<(String, String)>,
    /// Whether this is a `</...>` end tag
    pub is_end: bool,
    /// Whether the tag ends with `/>`
    pub self_closing: bool,
    /// Byte offset of the opening `<`
    pub start: usize,
    /// Byte offset just past the closing `>`
    pub end: usize,
}

impl Tag {
    /// First value of an attribute, if present and non-empty
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Check for a whitespace-separated class token
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(class)))
    }
}

/// Scan all tags in a fragment.
pub(crate) fn scan_tags(html: &str) -> Vec<Tag> {
    let bytes = html.as_bytes();
    let mut tags = Vec::new();
    let mut idx = 0_usize;

    while idx < bytes.len() {
        if bytes[idx] != b'<' {
            idx += 1;
            continue;
        }

        if starts_with(bytes, idx, b"<!--") {
            idx = skip_comment(bytes, idx);
            continue;
        }

        if starts_with(bytes, idx, b"<!") || starts_with(bytes, idx, b"<?") {
            idx = skip_to_gt(bytes, idx + 2);
            continue;
        }

        match parse_tag(html, idx) {
            Some(tag) => {
                let next = tag.end;
                // Raw-text elements swallow everything up to their end tag
                let raw_name = (!tag.is_end
                    && !tag.self_closing
                    && (tag.name == "script" || tag.name == "style"))
                    .then(|| tag.name.clone());
                tags.push(tag);
                idx = match raw_name {
                    Some(name) => skip_raw_text(html, next, &name),
                    None => next,
                };
            }
            None => idx += 1,
        }
    }

    tags
}

/// Remove `<script>` elements (tags and contents) from a fragment.
pub(crate) fn strip_scripts(html: &str) -> String {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len());
    let mut idx = 0_usize;

    while idx < bytes.len() {
        if bytes[idx] == b'<' {
            if let Some(tag) = parse_tag(html, idx) {
                if tag.name == "script" && !tag.is_end {
                    idx = if tag.self_closing {
                        tag.end
                    } else {
                        skip_raw_text(html, tag.end, "script")
                    };
                    continue;
                }
            }
        }
        let next = html[idx..]
            .char_indices()
            .nth(1)
            .map(|(o, _)| idx + o)
            .unwrap_or(bytes.len());
        out.push_str(&html[idx..next]);
        idx = next;
    }

    out
}

/// Leading-integer parse of a dimension attribute (`"560"`, `"560px"`).
pub(crate) fn parse_dimension(value: &str) -> Option<f32> {
    let trimmed = value.trim();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f32>().ok()
}

fn parse_tag(html: &str, start: usize) -> Option<Tag> {
    let bytes = html.as_bytes();
    if bytes.get(start).copied() != Some(b'<') {
        return None;
    }

    let mut idx = start + 1;
    let mut is_end = false;
    if bytes.get(idx).copied() == Some(b'/') {
        is_end = true;
        idx += 1;
    }

    let name_start = idx;
    while idx < bytes.len() && is_tag_name_char(bytes[idx]) {
        idx += 1;
    }
    if idx == name_start {
        return None;
    }
    let name = html[name_start..idx].to_ascii_lowercase();

    let mut attrs = Vec::new();
    let mut self_closing = false;

    loop {
        idx = skip_spaces(bytes, idx);
        match bytes.get(idx).copied() {
            None => return None,
            Some(b'>') => {
                idx += 1;
                break;
            }
            Some(b'/') => {
                self_closing = true;
                idx += 1;
            }
            Some(_) => {
                let (attr, next) = parse_attr(html, idx)?;
                if let Some(attr) = attr {
                    attrs.push(attr);
                }
                idx = next;
            }
        }
    }

    Some(Tag {
        name,
        attrs,
        is_end,
        self_closing,
        start,
        end: idx,
    })
}

/// Parse one attribute at `start`; `None` outer means malformed tag.
#[allow(clippy::type_complexity)]
fn parse_attr(html: &str, start: usize) -> Option<(Option<(String, String)>, usize)> {
    let bytes = html.as_bytes();
    let mut idx = start;

    let name_start = idx;
    while idx < bytes.len() && is_attr_name_char(bytes[idx]) {
        idx += 1;
    }
    if idx == name_start {
        // Unparseable byte inside the tag; step over it
        return Some((None, idx + 1));
    }
    let name = html[name_start..idx].to_ascii_lowercase();

    idx = skip_spaces(bytes, idx);
    if bytes.get(idx).copied() != Some(b'=') {
        // Boolean attribute
        return Some((Some((name, String::new())), idx));
    }
    idx = skip_spaces(bytes, idx + 1);

    let value = match bytes.get(idx).copied() {
        Some(quote @ (b'"' | b'\'')) => {
            idx += 1;
            let value_start = idx;
            while idx < bytes.len() && bytes[idx] != quote {
                idx += 1;
            }
            let value = &html[value_start..idx];
            if idx < bytes.len() {
                idx += 1;
            }
            value
        }
        _ => {
            let value_start = idx;
            while idx < bytes.len() && !bytes[idx].is_ascii_whitespace() && bytes[idx] != b'>' {
                idx += 1;
            }
            &html[value_start..idx]
        }
    };

    Some((Some((name, decode_entities(value))), idx))
}

/// Decode the entities that show up in embed attribute values.
pub(crate) fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    value
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

fn skip_raw_text(html: &str, from: usize, name: &str) -> usize {
    let lower = html.to_ascii_lowercase();
    let close = format!("</{}", name);
    match lower[from.min(lower.len())..].find(&close) {
        Some(offset) => {
            let at = from + offset;
            skip_to_gt(html.as_bytes(), at)
        }
        None => html.len(),
    }
}

fn skip_comment(bytes: &[u8], start: usize) -> usize {
    let mut idx = start + 4;
    while idx + 2 < bytes.len() {
        if &bytes[idx..idx + 3] == b"-->" {
            return idx + 3;
        }
        idx += 1;
    }
    bytes.len()
}

fn skip_to_gt(bytes: &[u8], from: usize) -> usize {
    let mut idx = from.min(bytes.len());
    while idx < bytes.len() {
        if bytes[idx] == b'>' {
            return idx + 1;
        }
        idx += 1;
    }
    bytes.len()
}

#[inline]
fn skip_spaces(bytes: &[u8], mut idx: usize) -> usize {
    while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
        idx += 1;
    }
    idx
}

#[inline]
fn is_tag_name_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}

#[inline]
fn is_attr_name_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' || byte == b':'
}

#[inline]
fn starts_with(bytes: &[u8], idx: usize, needle: &[u8]) -> bool {
    bytes.len() >= idx + needle.len() && &bytes[idx..idx + needle.len()] == needle
}

//! Character name extraction from birthday pages
//!
//! The birthday page lists characters as tiles inside the `tile1` container:
//! one `<ul>`, one `<li>` per character, with the display name in a
//! `tile1bottom` div. Extraction scans locally within that known block rather
//! than parsing the whole document, tolerates attribute noise and missing
//! labels, and treats any structural absence as "no entries", since a day can
//! legitimately have zero birthdays.

/// Extracts the deduplicated, sorted character names from a birthday page
///
/// Duplicate labels collapse to their first occurrence; the result is sorted
/// in ascending lexicographic order. Returns an empty list when the character
/// container, list, or labels are missing. Never fails.
pub fn extract_names(document: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let Some(list) = character_list(document) else {
        return names;
    };
    for item in list_items(list) {
        let Some(label) = bottom_label(item) else {
            continue;
        };
        if names.contains(&label) {
            continue;
        }
        names.push(label);
    }
    names.sort();
    names
}

/// Locates the inner HTML of the first `<ul>` inside the `tile1` container
fn character_list(document: &str) -> Option<&str> {
    let container = find_ci(document, "id=\"tile1\"", 0)?;
    let ul = find_ci(document, "<ul", container)?;
    let start = document[ul..].find('>').map(|i| ul + i + 1)?;
    let end = find_ci(document, "</ul", start)?;
    document.get(start..end)
}

/// Splits the list body into per-`<li>` fragments
///
/// Each fragment runs from one `<li` tag to the next; closing tags are not
/// required, matching how the page is actually served.
fn list_items(list: &str) -> Vec<&str> {
    let mut starts = Vec::new();
    let mut at = 0;
    while let Some(pos) = find_ci(list, "<li", at) {
        let follows = list[pos + 3..].chars().next();
        if matches!(follows, Some('>') | Some(' ') | Some('\t') | Some('\n') | Some('\r')) {
            starts.push(pos);
        }
        at = pos + 3;
    }

    let mut items = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(list.len());
        items.push(&list[start..end]);
    }
    items
}

/// Extracts the text of an item's `tile1bottom` label div, if present
///
/// Returns `None` for items without a label and for labels that are empty
/// after tag stripping and whitespace trimming.
fn bottom_label(item: &str) -> Option<String> {
    let class = find_ci(item, "tile1bottom", 0)?;
    let open_end = item[class..].find('>').map(|i| class + i + 1)?;
    let close = find_ci(item, "</div", open_end)?;
    let text = decode_entities(&strip_tags(&item[open_end..close]));
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Case-insensitive substring search starting at byte offset `from`
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
        .map(|pos| from + pos)
}

/// Removes every `<...>` tag, keeping only text content
fn strip_tags(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Replaces common HTML entities with their characters
///
/// Handles the named entities that actually occur in character names plus
/// decimal numeric references. Anything unrecognized is kept literally.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';') {
            Some(semi) if semi <= 8 => {
                match decode_entity(&tail[1..semi]) {
                    Some(decoded) => out.push(decoded),
                    None => out.push_str(&tail[..semi + 1]),
                }
                rest = &tail[semi + 1..];
            }
            _ => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => entity
            .strip_prefix('#')
            .and_then(|digits| digits.parse::<u32>().ok())
            .and_then(char::from_u32),
    }
}

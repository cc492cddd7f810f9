//! Line-oriented parsing and editing of markdown checklists.
//!
//! A document is handled as the sequence of lines produced by splitting on
//! `\n` and is rejoined with `\n`, so trailing newlines survive every
//! operation untouched. In a CRLF document the `\r` stays on the end of each
//! line: rewritten lines keep it and inserted bullets get one. All functions
//! here are pure: they take the document text and return a new one.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static ITEM_RE: OnceLock<Regex> = OnceLock::new();
static OPEN_MARKER_RE: OnceLock<Regex> = OnceLock::new();
static MARKER_PREFIX_RE: OnceLock<Regex> = OnceLock::new();
static ANY_MARKER_RE: OnceLock<Regex> = OnceLock::new();

fn item_re() -> &'static Regex {
    ITEM_RE.get_or_init(|| Regex::new(r"^\s*-\s*\[( |x|X)\]\s*(.+)$").unwrap())
}

fn open_marker_re() -> &'static Regex {
    OPEN_MARKER_RE.get_or_init(|| Regex::new(r"^\s*-\s*\[ \]").unwrap())
}

fn marker_prefix_re() -> &'static Regex {
    MARKER_PREFIX_RE.get_or_init(|| Regex::new(r"^(\s*-\s*\[[ xX]\]\s*)").unwrap())
}

fn any_marker_re() -> &'static Regex {
    ANY_MARKER_RE.get_or_init(|| Regex::new(r"(?i)^\s*-\s*\[[ x]\]").unwrap())
}

/// Prefix written by [`mark_done`] in place of the open marker.
pub const DONE_MARKER: &str = "- [x]";

/// Prefix of every bullet written by [`add_todo`].
pub const OPEN_BULLET: &str = "- [ ] ";

// ---------------------------------------------------------------------------
// ChecklistItem
// ---------------------------------------------------------------------------

/// One checklist line as seen in a particular document snapshot.
///
/// `line_no` indexes the snapshot the item was parsed from and nothing else.
/// After [`add_todo`] or [`remove_todo`] has changed the line count, discard
/// every item parsed from the old text and parse again. [`mark_done`] and
/// [`edit_todo`] rewrite a single line in place, so other items stay usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub line_no: usize,
    pub raw: String,
    pub done: bool,
    pub text: String,
}

impl ChecklistItem {
    /// True if `document` still holds this exact line at `line_no`.
    pub fn is_current(&self, document: &str) -> bool {
        document.split('\n').nth(self.line_no) == Some(self.raw.as_str())
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Extract every checklist item, in document order.
pub fn parse_todos(document: &str) -> Vec<ChecklistItem> {
    document
        .split('\n')
        .enumerate()
        .filter_map(|(line_no, line)| {
            let caps = item_re().captures(line)?;
            Some(ChecklistItem {
                line_no,
                raw: line.to_string(),
                done: caps[1].eq_ignore_ascii_case("x"),
                text: caps[2].trim().to_string(),
            })
        })
        .collect()
}

/// Open items only, in document order.
pub fn open_todos(document: &str) -> Vec<ChecklistItem> {
    parse_todos(document).into_iter().filter(|t| !t.done).collect()
}

// ---------------------------------------------------------------------------
// Line mutators
// ---------------------------------------------------------------------------

fn rewrite_line(document: &str, line_no: usize, f: impl FnOnce(&str) -> Option<String>) -> String {
    let mut lines: Vec<String> = document.split('\n').map(str::to_string).collect();
    if let Some(line) = lines.get_mut(line_no) {
        if let Some(updated) = f(line) {
            *line = updated;
        }
    }
    lines.join("\n")
}

/// Turn the open marker on `item`'s line into `- [x]`.
///
/// Indentation before the dash is dropped; the label is left as is. A line
/// that has no open marker (already done, or no longer a checklist line) is
/// returned unchanged, so applying this twice is harmless.
pub fn mark_done(document: &str, item: &ChecklistItem) -> String {
    rewrite_line(document, item.line_no, |line| {
        let m = open_marker_re().find(line)?;
        Some(format!("{DONE_MARKER}{}", &line[m.end()..]))
    })
}

/// Replace the label on `item`'s line with `new_text`.
///
/// The marker prefix is kept byte for byte, including indentation and the
/// done state, as is a trailing `\r`. Lines without a marker are left alone.
pub fn edit_todo(document: &str, item: &ChecklistItem, new_text: &str) -> String {
    rewrite_line(document, item.line_no, |line| {
        let caps = marker_prefix_re().captures(line)?;
        let cr = if line.ends_with('\r') { "\r" } else { "" };
        Some(format!("{}{new_text}{cr}", &caps[1]))
    })
}

/// Delete `item`'s line. Following lines move up by one.
pub fn remove_todo(document: &str, item: &ChecklistItem) -> String {
    let mut lines: Vec<&str> = document.split('\n').collect();
    if item.line_no < lines.len() {
        lines.remove(item.line_no);
    }
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Where a new bullet goes, or `None` to append at the end.
///
/// The line after the first one containing `section_header`
/// (case-insensitive) wins; otherwise the line after the last checklist
/// marker. Blank lines directly at that point are skipped.
pub fn insertion_point(lines: &[&str], section_header: Option<&str>) -> Option<usize> {
    let after_header = section_header
        .filter(|h| !h.is_empty())
        .and_then(|header| {
            let needle = header.to_lowercase();
            lines
                .iter()
                .position(|line| line.to_lowercase().contains(&needle))
        });

    let mut at = after_header
        .or_else(|| lines.iter().rposition(|line| any_marker_re().is_match(line)))?
        + 1;

    while at < lines.len() && lines[at].trim().is_empty() {
        at += 1;
    }
    Some(at)
}

/// Insert an open `- [ ] <text>` bullet, placed by [`insertion_point`].
///
/// A document whose every line break is `\r\n` is edited as if it used `\n`
/// and converted back, so the result keeps a single line-ending style.
pub fn add_todo(document: &str, text: &str, section_header: Option<&str>) -> String {
    if is_crlf(document) {
        let lf = document.replace("\r\n", "\n");
        return add_todo(&lf, text, section_header).replace('\n', "\r\n");
    }
    let bullet = format!("{OPEN_BULLET}{text}");
    let mut lines: Vec<&str> = document.split('\n').collect();
    match insertion_point(&lines, section_header) {
        Some(at) => lines.insert(at, &bullet),
        None => lines.push(&bullet),
    }
    lines.join("\n")
}

/// True if the document has line breaks and all of them are `\r\n`.
fn is_crlf(document: &str) -> bool {
    let breaks = document.matches('\n').count();
    breaks > 0 && document.matches("\r\n").count() == breaks
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

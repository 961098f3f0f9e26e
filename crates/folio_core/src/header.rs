//! Front-matter extraction for article files.
//!
//! An article starts with a small header block:
//!
//! ```text
//! title: "Meet my setup!"
//! date: 30/06/2022
//! tags: setup, pc
//! --EOH--
//! <body>
//! ```
//!
//! Extraction is positional and driven by the *last* occurrence of the marker
//! and of each label. Nothing is validated: text that does not follow the
//! layout still produces a header, just with empty or garbled fields.

use crate::types::ArticleHeader;

/// Literal line separating the header block from the body.
pub const HEADER_MARKER: &str = "--EOH--";

/// Maximum number of characters kept in [`ArticleHeader::summary`].
pub const SUMMARY_LENGTH: usize = 500;

const TITLE_LABEL: &str = "title";
const DATE_LABEL: &str = "date";
const TAGS_LABEL: &str = "tags";

/// Parses raw article text. Never fails and never panics.
pub fn parse(text: &str) -> ArticleHeader {
    let text = Chars::new(text);

    let marker = text.last_index_of(HEADER_MARKER);
    if marker < 0 {
        tracing::debug!("no {} marker in article text", HEADER_MARKER);
    }
    let header = Chars::new(&text.range(0, Some(marker)));

    let title_at = header.last_index_of(TITLE_LABEL);
    let date_at = header.last_index_of(DATE_LABEL);
    let tags_at = header.last_index_of(TAGS_LABEL);

    let title = strip_newlines(&header.range(title_at + label_len("title: "), Some(date_at)));
    let title = unquote(&title);

    let date = strip_newlines(&header.range(date_at + label_len("date: "), Some(tags_at)));

    let mut tags: Vec<String> = header
        .range(tags_at + label_len("tags: "), None)
        .split(',')
        .map(str::to_string)
        .collect();
    if let Some(last) = tags.last_mut() {
        *last = strip_newlines(last);
    }

    let content = text.tail(marker + label_len(HEADER_MARKER));
    let summary = content.chars().take(SUMMARY_LENGTH).collect();

    ArticleHeader {
        path: String::new(),
        title,
        date,
        tags,
        summary,
        content,
    }
}

/// Text indexed by character rather than by byte, so offsets computed from
/// label positions can never land inside a code point.
struct Chars(Vec<char>);

impl Chars {
    fn new(text: &str) -> Self {
        Self(text.chars().collect())
    }

    fn len(&self) -> isize {
        self.0.len() as isize
    }

    /// Character offset of the last occurrence of `needle`, or -1.
    fn last_index_of(&self, needle: &str) -> isize {
        let needle: Vec<char> = needle.chars().collect();
        if needle.len() > self.0.len() {
            return -1;
        }
        self.0
            .windows(needle.len())
            .rposition(|window| window == needle.as_slice())
            .map_or(-1, |i| i as isize)
    }

    /// Characters between two offsets. Offsets are clamped to `0..=len` and
    /// swapped when reversed; a missing end means "to the end".
    fn range(&self, start: isize, end: Option<isize>) -> String {
        let len = self.len();
        let start = start.clamp(0, len);
        let end = end.unwrap_or(len).clamp(0, len);
        let (from, to) = if start <= end { (start, end) } else { (end, start) };
        self.0[from as usize..to as usize].iter().collect()
    }

    /// Characters from `start` to the end; empty once `start` passes the end.
    fn tail(&self, start: isize) -> String {
        let start = if start < 0 {
            (self.len() + start).max(0)
        } else {
            start.min(self.len())
        };
        self.0[start as usize..].iter().collect()
    }
}

fn label_len(label: &str) -> isize {
    label.chars().count() as isize
}

fn strip_newlines(value: &str) -> String {
    value.replace('\n', "")
}

/// Drops exactly one leading and one trailing character.
fn unquote(value: &str) -> String {
    let count = value.chars().count();
    if count < 2 {
        return String::new();
    }
    value.chars().skip(1).take(count - 2).collect()
}

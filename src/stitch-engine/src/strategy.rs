//! The matching strategies.
//!
//! Each strategy is a pure function from `(content, find)` to the list of
//! non-overlapping spans it can locate, in document order. Strategies are a
//! closed set: the cascade order in [`Strategy::CASCADE`] is load-bearing
//! (earlier entries interpret the fragment more literally) and is not
//! configurable.

use std::fmt;

use crate::span::{GraphemeBoundaries, MatchSpan};

/// A single matching rule in the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Byte-for-byte substring match. An empty fragment matches once at
    /// position 0 with zero length, which makes pure insertions possible.
    Exact,
    /// Line-windowed match where every corresponding line is identical
    /// after stripping leading and trailing whitespace. The span covers the
    /// untrimmed window, so replacement discards the original padding.
    LineTrimmed,
    /// Substring match after collapsing every run of spaces and tabs to a
    /// single space in both the document and the fragment.
    WhitespaceNormalized,
    /// Line-windowed match after removing each side's own minimum common
    /// leading whitespace, allowing a block to sit at a different
    /// indentation depth as long as its internal shape is unchanged.
    IndentationFlexible,
    /// Substring match after unescaping `\n`, `\t`, `\\`, `` \` ``, `\$`,
    /// `\'` and `\"` in the fragment. One direction only: an escaped
    /// fragment against literal document text.
    EscapeNormalized,
}

impl Strategy {
    /// The cascade, most literal first. The first strategy producing at
    /// least one span wins and later ones are never consulted.
    pub const CASCADE: [Strategy; 5] = [
        Strategy::Exact,
        Strategy::LineTrimmed,
        Strategy::WhitespaceNormalized,
        Strategy::IndentationFlexible,
        Strategy::EscapeNormalized,
    ];

    /// Returns every non-overlapping occurrence of `find` in `content`
    /// under this strategy's matching rule, in ascending document order.
    pub fn find_matches(self, content: &str, find: &str) -> Vec<MatchSpan> {
        match self {
            Strategy::Exact => exact_matches(content, find),
            Strategy::LineTrimmed => line_trimmed_matches(content, find),
            Strategy::WhitespaceNormalized => whitespace_normalized_matches(content, find),
            Strategy::IndentationFlexible => indentation_flexible_matches(content, find),
            Strategy::EscapeNormalized => escape_normalized_matches(content, find),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Exact => "exact",
            Strategy::LineTrimmed => "line-trimmed",
            Strategy::WhitespaceNormalized => "whitespace-normalized",
            Strategy::IndentationFlexible => "indentation-flexible",
            Strategy::EscapeNormalized => "escape-normalized",
        };
        f.write_str(name)
    }
}

/// A content line together with the byte range of its text, excluding the
/// `\n` terminator.
struct Line<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

/// Splits `content` on `\n`, keeping each line's position. The empty
/// document yields a single empty line.
fn lines_of(content: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for text in content.split('\n') {
        lines.push(Line {
            text,
            start,
            end: start + text.len(),
        });
        start += text.len() + 1;
    }
    lines
}

fn exact_matches(content: &str, find: &str) -> Vec<MatchSpan> {
    if find.is_empty() {
        // Insertion point at the top of the document.
        return vec![MatchSpan::new(0, 0)];
    }

    let boundaries = GraphemeBoundaries::of(content);
    content
        .match_indices(find)
        .map(|(start, matched)| MatchSpan::new(start, start + matched.len()))
        .filter(|span| boundaries.aligns(*span))
        .collect()
}

fn line_trimmed_matches(content: &str, find: &str) -> Vec<MatchSpan> {
    let mut find_lines: Vec<&str> = find.split('\n').collect();
    // A trailing newline on the fragment contributes an empty final line
    // with nothing to compare.
    if find_lines.len() > 1 && find_lines.last().is_some_and(|line| line.is_empty()) {
        find_lines.pop();
    }
    let trimmed_find: Vec<&str> = find_lines.iter().map(|line| line.trim()).collect();

    let content_lines = lines_of(content);
    let mut spans = Vec::new();
    let mut i = 0;
    while i + trimmed_find.len() <= content_lines.len() {
        let window = &content_lines[i..i + trimmed_find.len()];
        let matched = window
            .iter()
            .zip(&trimmed_find)
            .all(|(line, want)| line.text.trim() == *want);
        if matched {
            let last = &window[window.len() - 1];
            spans.push(MatchSpan::new(window[0].start, last.end));
            i += trimmed_find.len();
        } else {
            i += 1;
        }
    }
    spans
}

fn is_inline_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Collapses every maximal run of spaces and tabs to a single space.
/// Newlines are structural and pass through untouched.
fn normalize_inline_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if is_inline_whitespace(ch) {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// One character of the whitespace-normalized view of a document, carrying
/// the byte range of the raw text it stands for. A run of spaces and tabs
/// becomes a single unit spanning the whole run.
struct NormalizedUnit {
    ch: char,
    start: usize,
    end: usize,
}

fn normalized_units(content: &str) -> Vec<NormalizedUnit> {
    let mut units = Vec::new();
    let mut iter = content.char_indices().peekable();
    while let Some((start, ch)) = iter.next() {
        if is_inline_whitespace(ch) {
            let mut end = start + ch.len_utf8();
            while let Some(&(next_start, next)) = iter.peek() {
                if !is_inline_whitespace(next) {
                    break;
                }
                end = next_start + next.len_utf8();
                iter.next();
            }
            units.push(NormalizedUnit {
                ch: ' ',
                start,
                end,
            });
        } else {
            units.push(NormalizedUnit {
                ch,
                start,
                end: start + ch.len_utf8(),
            });
        }
    }
    units
}

fn whitespace_normalized_matches(content: &str, find: &str) -> Vec<MatchSpan> {
    let needle: Vec<char> = normalize_inline_whitespace(find).chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let units = normalized_units(content);
    let boundaries = GraphemeBoundaries::of(content);
    let mut spans = Vec::new();
    let mut i = 0;
    while i + needle.len() <= units.len() {
        let window = &units[i..i + needle.len()];
        if window.iter().zip(&needle).all(|(unit, ch)| unit.ch == *ch) {
            let span = MatchSpan::new(window[0].start, window[window.len() - 1].end);
            if boundaries.aligns(span) {
                spans.push(span);
            }
            i += needle.len();
        } else {
            i += 1;
        }
    }
    spans
}

/// Byte length of the leading space/tab run of `line`. Leading whitespace
/// characters are single bytes, so this doubles as a character count.
fn leading_whitespace_len(line: &str) -> usize {
    line.len() - line.trim_start_matches(is_inline_whitespace).len()
}

/// Minimum common leading whitespace across the non-empty lines of a block.
fn deindent_width(lines: &[&str]) -> usize {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| leading_whitespace_len(line))
        .min()
        .unwrap_or(0)
}

/// Removes up to `width` characters of leading whitespace from `line`.
/// Whitespace-only lines shorter than `width` come out empty.
fn strip_indent(line: &str, width: usize) -> &str {
    let cut = width.min(leading_whitespace_len(line));
    &line[cut..]
}

fn indentation_flexible_matches(content: &str, find: &str) -> Vec<MatchSpan> {
    let find_lines: Vec<&str> = find.split('\n').collect();
    let find_width = deindent_width(&find_lines);
    let deindented_find: Vec<&str> = find_lines
        .iter()
        .map(|line| strip_indent(line, find_width))
        .collect();

    let content_lines = lines_of(content);
    let mut spans = Vec::new();
    let mut i = 0;
    while i + find_lines.len() <= content_lines.len() {
        let window = &content_lines[i..i + find_lines.len()];
        let window_texts: Vec<&str> = window.iter().map(|line| line.text).collect();
        let window_width = deindent_width(&window_texts);
        let matched = window_texts
            .iter()
            .zip(&deindented_find)
            .all(|(line, want)| strip_indent(line, window_width) == *want);
        if matched {
            let last = &window[window.len() - 1];
            spans.push(MatchSpan::new(window[0].start, last.end));
            i += find_lines.len();
        } else {
            i += 1;
        }
    }
    spans
}

/// Rewrites the escaped representations of control characters and
/// delimiters to the literal characters they stand for. Unrecognized
/// escapes keep their backslash.
fn unescape_fragment(find: &str) -> String {
    let mut out = String::with_capacity(find.len());
    let mut chars = find.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.peek().copied() {
            Some('n') => {
                out.push('\n');
                chars.next();
            }
            Some('t') => {
                out.push('\t');
                chars.next();
            }
            Some('\\') => {
                out.push('\\');
                chars.next();
            }
            Some('`') => {
                out.push('`');
                chars.next();
            }
            Some('$') => {
                out.push('$');
                chars.next();
            }
            Some('\'') => {
                out.push('\'');
                chars.next();
            }
            Some('"') => {
                out.push('"');
                chars.next();
            }
            _ => out.push('\\'),
        }
    }
    out
}

fn escape_normalized_matches(content: &str, find: &str) -> Vec<MatchSpan> {
    let unescaped = unescape_fragment(find);
    if unescaped.is_empty() {
        return Vec::new();
    }

    let boundaries = GraphemeBoundaries::of(content);
    content
        .match_indices(unescaped.as_str())
        .map(|(start, matched)| MatchSpan::new(start, start + matched.len()))
        .filter(|span| boundaries.aligns(*span))
        .collect()
}

//! Tag-value line grammar
//!
//! One physical stanza line has the shape
//!
//! ```text
//! <tag>: <value> [{<trailing modifier>}] [! <comment>]
//! ```
//!
//! The tag runs up to the first unescaped `:`. The value is the shortest text
//! after the separator that leaves a valid tail: an optional whitespace-led
//! `{...}` block, then an optional whitespace-led `!` comment, then only
//! whitespace. A `{` or `!` directly after a backslash can never start the tail
//! because the tail parts must follow whitespace, so `\!` and `\{` stay in the
//! value verbatim.

use crate::errors::{ParseError, ParseResult};

/// One parsed tag-value line, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagLine<'a> {
    /// Tag name (text before the separator)
    pub tag: &'a str,
    /// Value, possibly empty
    pub value: &'a str,
    /// Contents of a trailing `{...}` block, without braces
    pub trailing_modifier: Option<&'a str>,
    /// Text after a trailing `!`, without the `!` and one following space
    pub comment: Option<&'a str>,
}

/// Whether a line is a full-line comment. Such lines never reach the grammar.
pub fn is_comment_line(line: &str) -> bool {
    line.starts_with('!')
}

/// Parse a single tag-value line.
///
/// Trailing newlines and whitespace are ignored.
///
/// # Errors
///
/// Returns [`ParseError::InvalidTagLine`] when the line has no tag separator or
/// the value would have to span an embedded newline.
pub fn parse_tag_line(line: &str) -> ParseResult<TagLine<'_>> {
    let colon = find_separator(line).ok_or_else(|| ParseError::invalid_tag_line(line))?;
    let tag = &line[..colon];
    if tag.contains('\n') {
        return Err(ParseError::invalid_tag_line(line));
    }

    let body = line[colon + 1..].trim_start();
    let (value, tail) = split_value(body).ok_or_else(|| ParseError::invalid_tag_line(line))?;

    Ok(TagLine {
        tag,
        value,
        trailing_modifier: tail.modifier,
        comment: tail.comment,
    })
}

/// Byte offset of the first `:` that is not the first character and is not
/// preceded by a backslash.
fn find_separator(line: &str) -> Option<usize> {
    line.char_indices()
        .skip(1)
        .find(|&(index, ch)| ch == ':' && !is_escaped(line, index))
        .map(|(index, _)| index)
}

fn is_escaped(text: &str, index: usize) -> bool {
    text[..index].ends_with('\\')
}

#[derive(Debug, Default, Clone, Copy)]
struct Tail<'a> {
    modifier: Option<&'a str>,
    comment: Option<&'a str>,
}

/// Find the shortest value prefix of `body` whose remainder is a valid tail.
///
/// Tails start with whitespace or are empty, so only whitespace positions are
/// candidates. The value may not contain a newline.
fn split_value(body: &str) -> Option<(&str, Tail<'_>)> {
    for (end, ch) in body.char_indices() {
        if ch.is_whitespace() {
            if let Some(tail) = parse_tail(&body[end..]) {
                return Some((&body[..end], tail));
            }
        }
        if ch == '\n' {
            return None;
        }
    }
    Some((body, Tail::default()))
}

fn parse_tail(text: &str) -> Option<Tail<'_>> {
    if let Some((modifier, rest)) = take_modifier(text) {
        if let Some(comment) = take_comment(rest) {
            return Some(Tail {
                modifier: Some(modifier),
                comment,
            });
        }
    }
    take_comment(text).map(|comment| Tail {
        modifier: None,
        comment,
    })
}

/// Match `\s{[^{}]*}` at the start of `text`, returning the inner text and the rest.
fn take_modifier(text: &str) -> Option<(&str, &str)> {
    let after_space = skip_one_whitespace(text)?;
    let inner_start = after_space.strip_prefix('{')?;
    let close = inner_start.find(['{', '}'])?;
    if !inner_start[close..].starts_with('}') {
        return None;
    }
    Some((&inner_start[..close], &inner_start[close + 1..]))
}

/// Match an optional `\s![^\n]*` followed by trailing whitespace only.
///
/// The outer `Option` is whether the text is a valid comment tail; the inner one
/// is the comment itself.
fn take_comment(text: &str) -> Option<Option<&str>> {
    if let Some(bang) = skip_one_whitespace(text).and_then(|rest| rest.strip_prefix('!')) {
        let (comment, rest) = bang.split_once('\n').unwrap_or((bang, ""));
        if rest.trim().is_empty() {
            let comment = comment.strip_prefix(' ').unwrap_or(comment);
            return Some(Some(comment.trim_end()));
        }
    }
    text.trim().is_empty().then_some(None)
}

fn skip_one_whitespace(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    chars.next().filter(|ch| ch.is_whitespace())?;
    Some(chars.as_str())
}

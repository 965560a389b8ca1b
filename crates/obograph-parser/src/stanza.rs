//! Stanza parser: tag-value lines plus a cardinality table into an attribute map.

use crate::cardinality::CardinalityTable;
use crate::errors::ParseResult;
use crate::grammar::{is_comment_line, parse_tag_line};
use obograph::AttrMap;

/// Parse the lines of one stanza.
///
/// Full-line comments are skipped. Trailing modifiers and comments are parsed
/// but dropped. Singular tags keep their last value; every other tag collects
/// its values in file order, duplicates included.
///
/// # Errors
///
/// Returns [`crate::ParseError::InvalidTagLine`] for the first line that does not
/// match the tag-value grammar.
pub fn parse_stanza<I, S>(lines: I, table: &CardinalityTable) -> ParseResult<AttrMap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stanza = AttrMap::new();
    for line in lines {
        apply_line(&mut stanza, line.as_ref(), table)?;
    }
    Ok(stanza)
}

/// Fold one stanza line into `stanza`.
pub(crate) fn apply_line(
    stanza: &mut AttrMap,
    line: &str,
    table: &CardinalityTable,
) -> ParseResult<()> {
    if is_comment_line(line) {
        return Ok(());
    }
    let parsed = parse_tag_line(line)?;
    if table.is_singular(parsed.tag) {
        stanza.insert(parsed.tag, parsed.value);
    } else {
        stanza.push_text(parsed.tag, parsed.value);
    }
    Ok(())
}

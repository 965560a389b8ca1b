//! Section splitter
//!
//! Partitions a line sequence into blank-line separated blocks and routes each
//! block to the stanza parser with the table for its kind.

use crate::cardinality::StanzaKind;
use crate::errors::ParseResult;
use crate::stanza::apply_line;
use obograph::AttrMap;
use tracing::{debug, warn};

/// Parsed stanzas of one OBO document, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    /// `[Typedef]` stanzas in file order
    pub typedefs: Vec<AttrMap>,
    /// `[Term]` stanzas in file order
    pub terms: Vec<AttrMap>,
    /// `[Instance]` stanzas in file order
    pub instances: Vec<AttrMap>,
    /// Ontology header; empty when the document has none
    pub header: AttrMap,
}

impl Sections {
    /// Total number of typed stanzas.
    pub fn stanza_count(&self) -> usize {
        self.typedefs.len() + self.terms.len() + self.instances.len()
    }

    fn stanzas_mut(&mut self, kind: StanzaKind) -> Option<&mut Vec<AttrMap>> {
        match kind {
            StanzaKind::Term => Some(&mut self.terms),
            StanzaKind::Typedef => Some(&mut self.typedefs),
            StanzaKind::Instance => Some(&mut self.instances),
            StanzaKind::Header => None,
        }
    }
}

/// Split a full document into stanzas.
///
/// A block whose first line is not a `[Term]`, `[Typedef]` or `[Instance]`
/// marker is header content, first line included. A later header block replaces
/// an earlier one.
///
/// # Errors
///
/// Returns [`crate::ParseError::InvalidTagLine`] carrying the 1-based line number
/// of the first line that fails the grammar.
pub fn parse_sections<I, S>(lines: I) -> ParseResult<Sections>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sections = Sections::default();
    let mut header = None;
    let mut block: Vec<(usize, S)> = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        if line.as_ref().trim().is_empty() {
            if !block.is_empty() {
                absorb_block(&mut sections, &mut header, &block)?;
                block.clear();
            }
        } else {
            block.push((index + 1, line));
        }
    }
    if !block.is_empty() {
        absorb_block(&mut sections, &mut header, &block)?;
    }

    match header {
        Some(header) => sections.header = header,
        None => warn!("got no header information"),
    }
    debug!(
        typedefs = sections.typedefs.len(),
        terms = sections.terms.len(),
        instances = sections.instances.len(),
        header_tags = sections.header.len(),
        "Split document into sections"
    );

    Ok(sections)
}

fn absorb_block<S: AsRef<str>>(
    sections: &mut Sections,
    header: &mut Option<AttrMap>,
    block: &[(usize, S)],
) -> ParseResult<()> {
    let Some((_, first)) = block.first() else {
        return Ok(());
    };

    match StanzaKind::from_marker(first.as_ref()) {
        Some(kind) => {
            let stanza = parse_numbered(&block[1..], kind)?;
            if let Some(stanzas) = sections.stanzas_mut(kind) {
                stanzas.push(stanza);
            }
        }
        None => {
            let parsed = parse_numbered(block, StanzaKind::Header)?;
            if header.replace(parsed).is_some() {
                debug!("Replacing previously captured header block");
            }
        }
    }
    Ok(())
}

fn parse_numbered<S: AsRef<str>>(lines: &[(usize, S)], kind: StanzaKind) -> ParseResult<AttrMap> {
    let table = kind.table();
    let mut stanza = AttrMap::new();
    for (number, line) in lines {
        apply_line(&mut stanza, line.as_ref(), table).map_err(|e| e.at_line(*number))?;
    }
    Ok(stanza)
}

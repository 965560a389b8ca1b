//! Graph assembler
//!
//! Turns parsed sections into an [`OboGraph`]. Term attributes are extracted
//! first and all relationship edges are inserted afterwards.

use crate::cardinality::StanzaKind;
use crate::errors::{ParseError, ParseResult};
use crate::metrics::ReadStats;
use crate::sections::Sections;
use obograph::{AttrMap, AttrValue, OboGraph, IS_A};
use tracing::{debug, warn};

/// Graph attribute holding the list of `[Typedef]` stanzas.
pub const TYPEDEFS_ATTR: &str = "typedefs";

/// Graph attribute holding the list of `[Instance]` stanzas.
pub const INSTANCES_ATTR: &str = "instances";

/// A relationship waiting to be inserted as an edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdge {
    /// Term the relationship is declared on
    pub source: String,
    /// Relationship type (`is_a` or a typedef id)
    pub key: String,
    /// Referenced term, which need not be declared
    pub target: String,
}

/// A term stanza split into node identity, node attributes and outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRecord {
    /// Value of the `id` tag
    pub id: String,
    /// Every tag except `id`, `is_a` and `relationship`
    pub attributes: AttrMap,
    /// `is_a` edges first, then `relationship` edges, each in file order
    pub edges: Vec<PendingEdge>,
}

impl TermRecord {
    /// Split a parsed `[Term]` stanza.
    ///
    /// `index` is the stanza's position among terms, used for error reporting.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MissingIdentifier`] if the stanza has no `id`
    /// - [`ParseError::MalformedRelationship`] if a `relationship` value is not
    ///   exactly two whitespace-separated tokens
    pub fn from_stanza(mut term: AttrMap, index: usize) -> ParseResult<Self> {
        let id = term
            .remove("id")
            .and_then(AttrValue::into_text)
            .ok_or_else(|| ParseError::missing_identifier(StanzaKind::Term, index))?;

        let parents = take_list(&mut term, IS_A);
        let relationships = take_list(&mut term, "relationship");

        let mut edges = Vec::with_capacity(parents.len() + relationships.len());
        for target in parents {
            edges.push(PendingEdge {
                source: id.clone(),
                key: IS_A.to_string(),
                target,
            });
        }
        for value in relationships {
            let mut tokens = value.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(typedef), Some(target), None) => edges.push(PendingEdge {
                    source: id.clone(),
                    key: typedef.to_string(),
                    target: target.to_string(),
                }),
                _ => return Err(ParseError::malformed_relationship(id, value)),
            }
        }

        Ok(Self {
            id,
            attributes: term,
            edges,
        })
    }
}

/// Whether a term stanza is marked obsolete.
pub fn is_obsolete(term: &AttrMap) -> bool {
    term.get_text("is_obsolete") == Some("true")
}

/// Fill in `name` from `ontology` when only the latter is present.
///
/// Logs a warning when the header ends up without a `name`.
pub fn resolve_header_name(header: &mut AttrMap) {
    if !header.contains_key("name") {
        if let Some(ontology) = header.get("ontology").cloned() {
            header.insert("name", ontology);
        }
    }
    if !header.contains_key("name") {
        warn!("name and ontology keys are both missing");
    }
}

/// Assemble the final graph.
///
/// Graph attributes are the header tags plus [`TYPEDEFS_ATTR`] and
/// [`INSTANCES_ATTR`]. When `ignore_obsolete` is set, terms with
/// `is_obsolete: true` contribute neither a node nor edges.
///
/// # Errors
///
/// Fails on the first Typedef, Instance or kept Term without an `id`, or on a
/// malformed `relationship`. Nothing is returned on failure.
pub fn build_graph(sections: Sections, ignore_obsolete: bool) -> ParseResult<(OboGraph, ReadStats)> {
    let Sections {
        typedefs,
        terms,
        instances,
        header,
    } = sections;

    require_ids(&typedefs, StanzaKind::Typedef)?;
    require_ids(&instances, StanzaKind::Instance)?;

    let mut stats = ReadStats {
        typedefs: typedefs.len(),
        terms: terms.len(),
        instances: instances.len(),
        ..ReadStats::default()
    };

    let mut attributes = header;
    resolve_header_name(&mut attributes);
    for reserved in [TYPEDEFS_ATTR, INSTANCES_ATTR] {
        if attributes.contains_key(reserved) {
            warn!(tag = reserved, "header tag shadowed by stanza list");
        }
    }
    attributes.insert(TYPEDEFS_ATTR, typedefs);
    attributes.insert(INSTANCES_ATTR, instances);
    let mut graph = OboGraph::with_attributes(attributes);

    let mut pending = Vec::new();
    for (index, term) in terms.into_iter().enumerate() {
        if ignore_obsolete && is_obsolete(&term) {
            stats.obsolete_skipped += 1;
            continue;
        }
        let record = TermRecord::from_stanza(term, index)?;
        pending.extend(record.edges);
        graph.add_node(record.id, record.attributes);
    }

    debug!(
        nodes = graph.node_count(),
        pending_edges = pending.len(),
        "Inserting relationship edges"
    );
    graph.add_edges(
        pending
            .into_iter()
            .map(|edge| (edge.source, edge.target, edge.key)),
    );

    stats.nodes = graph.node_count();
    stats.edges = graph.edge_count();
    Ok((graph, stats))
}

fn require_ids(stanzas: &[AttrMap], kind: StanzaKind) -> ParseResult<()> {
    match stanzas.iter().position(|stanza| stanza.get_text("id").is_none()) {
        Some(index) => Err(ParseError::missing_identifier(kind, index)),
        None => Ok(()),
    }
}

fn take_list(stanza: &mut AttrMap, key: &str) -> Vec<String> {
    stanza
        .remove(key)
        .map(AttrValue::into_text_list)
        .unwrap_or_default()
}

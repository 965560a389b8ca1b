//! Per-stanza-kind tag cardinality.
//!
//! Each table lists which tags are singular (`true`) and which may repeat (`false`).
//! Tags missing from a table are treated as repeatable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an OBO stanza
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StanzaKind {
    /// The untyped block of ontology-level tags
    Header,
    /// `[Term]`
    Term,
    /// `[Typedef]`
    Typedef,
    /// `[Instance]`
    Instance,
}

impl StanzaKind {
    /// Classify a stanza by its first line.
    ///
    /// Returns `None` when the line is not a type marker, in which case the
    /// block is header content.
    pub fn from_marker(line: &str) -> Option<Self> {
        if line.starts_with("[Typedef]") {
            Some(StanzaKind::Typedef)
        } else if line.starts_with("[Term]") {
            Some(StanzaKind::Term)
        } else if line.starts_with("[Instance]") {
            Some(StanzaKind::Instance)
        } else {
            None
        }
    }

    /// The cardinality table used for this kind.
    pub fn table(self) -> &'static CardinalityTable {
        match self {
            StanzaKind::Header => &HEADER_TAGS,
            StanzaKind::Term => &TERM_TAGS,
            StanzaKind::Typedef => &TYPEDEF_TAGS,
            StanzaKind::Instance => &INSTANCE_TAGS,
        }
    }
}

impl fmt::Display for StanzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StanzaKind::Header => write!(f, "Header"),
            StanzaKind::Term => write!(f, "Term"),
            StanzaKind::Typedef => write!(f, "Typedef"),
            StanzaKind::Instance => write!(f, "Instance"),
        }
    }
}

/// Fixed mapping from tag name to "is singular".
#[derive(Debug)]
pub struct CardinalityTable {
    kind: StanzaKind,
    entries: &'static [(&'static str, bool)],
}

impl CardinalityTable {
    /// Stanza kind this table applies to.
    pub fn kind(&self) -> StanzaKind {
        self.kind
    }

    /// Whether `tag` holds at most one value. Unknown tags are repeatable.
    pub fn is_singular(&self, tag: &str) -> bool {
        self.entries
            .iter()
            .find(|(name, _)| *name == tag)
            .is_some_and(|&(_, singular)| singular)
    }

    /// All declared `(tag, is_singular)` entries.
    pub fn entries(&self) -> &'static [(&'static str, bool)] {
        self.entries
    }
}

/// Header tags.
pub static HEADER_TAGS: CardinalityTable = CardinalityTable {
    kind: StanzaKind::Header,
    entries: &[
        ("format-version", true),
        ("data-version", true),
        ("version", true), // deprecated
        ("ontology", true),
        ("date", true),
        ("saved-by", true),
        ("auto-generated-by", true),
        ("subsetdef", false),
        ("import", false),
        ("synonymtypedef", false),
        ("idspace", false),
        ("default-relationship-id-prefix", true),
        ("id-mapping", false),
        ("remark", false),
        // OBO 1.4
        ("treat-xrefs-as-equivalent", false),
        ("treat-xrefs-as-genus-differentia", false),
        ("treat-xrefs-as-relationship", false),
        ("treat-xrefs-as-is_a", false),
        ("relax-unique-identifier-assumption-for-namespace", false),
        ("relax-unique-label-assumption-for-namespace", false),
    ],
};

/// `[Term]` tags.
pub static TERM_TAGS: CardinalityTable = CardinalityTable {
    kind: StanzaKind::Term,
    entries: &[
        ("id", true),
        ("is_anonymous", true),
        ("name", true),
        ("namespace", true),
        ("alt_id", false),
        ("def", true),
        ("comment", true),
        ("subset", false),
        ("synonym", false),
        ("exact_synonym", false),  // deprecated
        ("narrow_synonym", false), // deprecated
        ("broad_synonym", false),  // deprecated
        ("xref", false),
        ("xref_unk", false),
        ("is_a", false),
        ("intersection_of", false),
        ("union_of", false),
        ("disjoint_from", false),
        ("relationship", false),
        ("is_obsolete", true),
        ("replaced_by", false),
        ("consider", false),
        ("use_term", false), // deprecated
        ("builtin", true),
        // OBO 1.4
        ("created_by", true),
        ("creation_date", true),
    ],
};

/// `[Typedef]` tags.
pub static TYPEDEF_TAGS: CardinalityTable = CardinalityTable {
    kind: StanzaKind::Typedef,
    entries: &[
        ("id", true),
        ("is_anonymous", true),
        ("name", true),
        ("namespace", true),
        ("alt_id", false),
        ("def", true),
        ("domain", true),
        ("range", true),
        ("inverse_of", false),
        ("transitive_over", false),
        ("is_cyclic", true),
        ("is_reflexive", true),
        ("is_symmetric", true),
        ("is_anti_symmetric", true),
        ("is_transitive", true),
        ("is_metadata_tag", true),
        ("is_class_level", true),
        // OBO 1.4
        ("union_of", false),
        ("intersection_of", false),
        ("disjoint_from", false),
    ],
};

/// `[Instance]` tags.
pub static INSTANCE_TAGS: CardinalityTable = CardinalityTable {
    kind: StanzaKind::Instance,
    entries: &[
        ("id", true),
        ("is_anonymous", true),
        ("name", true),
        ("namespace", true),
        ("alt_id", false),
        ("def", false),
        ("comment", true),
        ("subset", false),
        ("synonym", false),
        ("xref", false),
        ("instance_of", true),
        ("property_value", false),
        ("relationship", false),
        ("created_by", true),
        ("creation_date", true),
        ("is_obsolete", true),
        ("replaced_by", false),
        ("consider", false),
    ],
};

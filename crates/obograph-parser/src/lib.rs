//! OBO ontology reader for obograph
//!
//! Reads OBO flat files into an [`obograph::OboGraph`]: one node per term,
//! one keyed edge per `is_a` or `relationship` line.
//!
//! The pipeline runs in four stages:
//!
//! - **grammar**: splits a physical line into tag, value, trailing modifier and comment
//! - **stanza**: folds the lines of one stanza into an attribute map using a cardinality table
//! - **sections**: splits a document on blank lines and routes blocks by their `[...]` marker
//! - **builder**: turns sections into a graph, filtering obsolete terms
//!
//! # Example
//!
//! ```rust
//! use obograph::Direction;
//! use obograph_parser::OboReader;
//!
//! let text = "ontology: demo\n\n[Term]\nid: X:1\n\n[Term]\nid: X:2\nis_a: X:1 ! parent\n";
//! let graph = OboReader::new().read_str(text).unwrap();
//!
//! assert_eq!(graph.name(), Some("demo"));
//! assert_eq!(graph.neighbors("X:2", Direction::Outgoing).unwrap(), vec!["X:1"]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod builder;
pub mod cardinality;
pub mod config;
pub mod errors;
pub mod grammar;
pub mod metrics;
pub mod reader;
pub mod sections;
pub mod source;
pub mod stanza;

// Re-export commonly used types
pub use builder::{build_graph, PendingEdge, TermRecord, INSTANCES_ATTR, TYPEDEFS_ATTR};
pub use cardinality::{
    CardinalityTable, StanzaKind, HEADER_TAGS, INSTANCE_TAGS, TERM_TAGS, TYPEDEF_TAGS,
};
pub use config::{Compression, ReaderConfig};
pub use errors::{ParseError, ParseResult};
pub use grammar::{parse_tag_line, TagLine};
pub use metrics::ReadStats;
pub use reader::{read_obo, read_obo_with, OboReader};
pub use sections::{parse_sections, Sections};
pub use stanza::parse_stanza;

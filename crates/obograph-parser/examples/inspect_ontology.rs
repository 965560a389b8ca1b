//! Ontology inspection example
//!
//! Reads an OBO file (plain or `.gz`) and prints what it contains.
//!
//! ```text
//! cargo run -p obograph-parser --example inspect_ontology -- go-basic.obo [--keep-obsolete]
//! ```

use obograph::Direction;
use obograph_parser::{OboReader, ReaderConfig, TYPEDEFS_ATTR};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: inspect_ontology <file.obo[.gz]> [--keep-obsolete]");
        return ExitCode::FAILURE;
    };
    let config = if args.any(|arg| arg == "--keep-obsolete") {
        ReaderConfig::keep_obsolete()
    } else {
        ReaderConfig::default()
    };

    let text = match std::fs::metadata(&path) {
        Ok(meta) => format!("{} bytes", meta.len()),
        Err(_) => "size unknown".to_string(),
    };
    println!("Reading {path} ({text})...\n");

    let reader = OboReader::with_config(config);
    let graph = match reader.read_path(&path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Ontology: {}", graph.name().unwrap_or("<unnamed>"));
    if let Some(version) = graph.attributes().get_text("data-version") {
        println!("Version:  {version}");
    }
    println!("Terms:    {}", graph.node_count());
    println!("Edges:    {}", graph.edge_count());
    let typedefs = graph
        .attributes()
        .get_records(TYPEDEFS_ATTR)
        .map_or(0, <[_]>::len);
    println!("Typedefs: {typedefs}\n");

    println!("--- Sample edges ---");
    for edge in graph.edges().take(10) {
        let label = |id: &str| {
            graph
                .node(id)
                .ok()
                .and_then(|node| node.name())
                .unwrap_or("?")
                .to_string()
        };
        println!(
            "  {} ({}) --{}--> {} ({})",
            edge.source,
            label(&edge.source),
            edge.key,
            edge.target,
            label(&edge.target)
        );
    }

    // Terms with no outgoing is_a edges
    let roots: Vec<&str> = graph
        .node_ids()
        .filter(|id| {
            graph
                .out_edges(id)
                .map(|edges| edges.iter().all(|edge| edge.key != obograph::IS_A))
                .unwrap_or(false)
        })
        .take(5)
        .collect();
    println!("\n--- Roots (first 5) ---");
    for root in roots {
        let children = graph
            .neighbors(root, Direction::Incoming)
            .map_or(0, |n| n.len());
        println!("  {root} ({children} direct neighbors)");
    }

    ExitCode::SUCCESS
}

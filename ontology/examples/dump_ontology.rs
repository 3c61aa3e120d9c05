//! Prints the built-in package vocabulary and a preview of each serialization.
//!
//! Run with: `cargo run --example dump_ontology -p packagegraph-ontology`

use packagegraph_ontology::serializer::{serialize, RdfFormat};

fn main() {
    let ontology = packagegraph_ontology::Ontology::full();

    println!("packagegraph vocabulary v{}", ontology.version);
    println!("  Namespaces:   {}", ontology.namespaces.len());
    println!("  Classes:      {}", ontology.class_count());
    println!("  Properties:   {}", ontology.property_count());
    println!();

    for module in &ontology.namespaces {
        let ns = &module.namespace;
        println!(
            "  {:6} {:50} {:>2} classes, {:>2} properties",
            ns.prefix,
            ns.iri,
            module.classes.len(),
            module.properties.len(),
        );
    }
    println!();

    let graph = ontology.to_graph();
    for format in RdfFormat::ALL {
        let text = serialize(&graph, format).unwrap_or_else(|e| format!("{format} error: {e}"));
        let preview_end = text.char_indices().nth(200).map_or(text.len(), |(i, _)| i);
        println!("{format} output ({} bytes):", text.len());
        println!("{}...", &text[..preview_end]);
        println!();
    }
}

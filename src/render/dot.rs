//! Serialize a `VizGraph` into Graphviz DOT text.
//!
//! All identifiers and attribute values are emitted quoted, with quotes,
//! backslashes, and newlines escaped, so operator labels like
//! `Convolution\n3x3/1x1, 64` survive verbatim. Layout and drawing belong
//! to Graphviz; this is just the hand-off format.

use crate::viz::VizGraph;
use std::collections::BTreeMap;
use std::fmt::Write;

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn attr_list(attrs: &BTreeMap<String, String>) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape(v)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_dot(graph: &VizGraph) -> String {
    let mut dot = String::new();
    let keyword = if graph.directed { "digraph" } else { "graph" };
    let arrow = if graph.directed { "->" } else { "--" };

    // write! to String cannot fail; let-drop keeps the calls tidy.
    let _ = writeln!(dot, "{} \"{}\" {{", keyword, escape(&graph.name));

    for (k, v) in &graph.attrs {
        let _ = writeln!(dot, "    {}=\"{}\";", k, escape(v));
    }

    for node in &graph.nodes {
        let _ = writeln!(
            dot,
            "    \"{}\" [{}];",
            escape(&node.id),
            attr_list(&node.attrs)
        );
    }

    for edge in &graph.edges {
        let _ = writeln!(
            dot,
            "    \"{}\" {} \"{}\" [{}];",
            escape(&edge.from),
            arrow,
            escape(&edge.to),
            attr_list(&edge.attrs)
        );
    }

    dot.push_str("}\n");
    dot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viz::{VizEdge, VizNode};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_nodes_edges_and_graph_attrs() {
        let graph = VizGraph {
            name: "net".to_string(),
            directed: true,
            attrs: vec![("nodesep".to_string(), "1".to_string())],
            nodes: vec![VizNode {
                id: "conv1".to_string(),
                attrs: [("label", "Convolution\n3x3/1, 64"), ("shape", "box")]
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }],
            edges: vec![VizEdge {
                from: "out".to_string(),
                to: "conv1".to_string(),
                attrs: [("arrowtail", "open"), ("dir", "back")]
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                slot: None,
            }],
        };

        let dot = render_dot(&graph);
        assert_eq!(
            dot,
            "digraph \"net\" {\n    nodesep=\"1\";\n    \"conv1\" [label=\"Convolution\\n3x3/1, 64\", shape=\"box\"];\n    \"out\" -> \"conv1\" [arrowtail=\"open\", dir=\"back\"];\n}\n"
        );
    }

    #[test]
    fn escapes_quotes_in_identifiers() {
        let graph = VizGraph {
            name: "a\"b".to_string(),
            directed: true,
            attrs: vec![],
            nodes: vec![],
            edges: vec![],
        };
        assert!(render_dot(&graph).starts_with("digraph \"a\\\"b\" {"));
    }
}

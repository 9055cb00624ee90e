//! Graph assembly: hidden-node set, node emission, edge resolution.
//!
//! Edge resolution keeps a function-local remaining-output-count table per
//! producer (seeded from the node's `num_outputs` parameter on first visit,
//! decremented per referencing edge) instead of writing the count back into
//! the shared node parameters the way the upstream converter did. The
//! resulting slot-key sequence is identical for the single pass in graph
//! order, and the input graph stays read-only.

use crate::symbol::SymbolGraph;
use crate::viz::classify::Classifier;
use crate::viz::{VizEdge, VizGraph, VizNode, VizOptions};
use anyhow::bail;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Names of the leaf nodes elided from the output: `null`-op nodes whose
/// name carries a weight-like suffix. Empty when hiding is off.
pub fn hidden_weight_nodes(graph: &SymbolGraph, opts: &VizOptions) -> BTreeSet<String> {
    if !opts.hide_weights {
        return BTreeSet::new();
    }
    graph
        .nodes
        .iter()
        .filter(|n| n.op == "null" && super::is_weight_like(&n.name))
        .map(|n| n.name.clone())
        .collect()
}

/// Shared fixed-size styling, before per-operator specialization.
fn default_node_attrs() -> BTreeMap<String, String> {
    [
        ("shape", "box"),
        ("fixedsize", "true"),
        ("width", "1.3"),
        ("height", "0.8034"),
        ("style", "filled"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Transform a symbol graph into the attributed viz graph.
///
/// Fails only on a dangling input reference (an entry whose `node_id` is
/// outside the node list); malformed numeric parameters degrade to default
/// substitution or edge omission instead.
pub fn build(graph: &SymbolGraph, opts: &VizOptions) -> anyhow::Result<VizGraph> {
    let classifier = Classifier::new()?;

    let mut attrs = vec![
        ("nodesep".to_string(), "1".to_string()),
        ("ranksep".to_string(), "1.5 equally".to_string()),
    ];
    match opts.layout {
        Some(super::Layout::Vertical) => attrs.push(("rankdir".to_string(), "TB".to_string())),
        Some(super::Layout::Horizontal) => attrs.push(("rankdir".to_string(), "RL".to_string())),
        None => {}
    }

    let mut out = VizGraph {
        name: opts.graph_name.clone(),
        directed: true,
        attrs,
        nodes: Vec::new(),
        edges: Vec::new(),
    };

    // 1) Freeze the elision set; node and edge emission both consult it.
    let hidden = hidden_weight_nodes(graph, opts);

    // 2) Nodes, in definition order.
    for node in &graph.nodes {
        if hidden.contains(node.name.as_str()) {
            continue;
        }
        let style = classifier.classify(node);
        let mut node_attrs = default_node_attrs();
        node_attrs.insert("shape".to_string(), style.shape.to_string());
        node_attrs.insert("fillcolor".to_string(), style.fill.to_string());
        node_attrs.insert("label".to_string(), style.label);
        out.nodes.push(VizNode {
            id: node.name.clone(),
            attrs: node_attrs,
        });
    }

    // 3) Edges, one pass: outer loop in graph order, inner loop in input
    // order. The slot keys depend on this traversal order.
    let mut remaining_outputs: HashMap<u64, i64> = HashMap::new();

    for node in &graph.nodes {
        if node.op == "null" {
            continue;
        }
        for entry in &node.inputs {
            let Some(producer) = graph.node(entry.node_id) else {
                bail!(
                    "node {} has a dangling input reference to id {} (graph has {} nodes)",
                    node.name,
                    entry.node_id,
                    graph.nodes.len()
                );
            };
            if hidden.contains(producer.name.as_str()) {
                continue;
            }

            let mut slot = None;
            if opts.draw_shapes && producer.op != "null" {
                let mut key = format!("{}_output", producer.name);
                if let Some(raw) = producer.params.get("num_outputs") {
                    let n = match remaining_outputs.get(&entry.node_id) {
                        Some(&n) => n,
                        None => match raw.parse::<i64>() {
                            Ok(n) => n,
                            // Malformed count: drop this edge only.
                            Err(_) => continue,
                        },
                    };
                    key.push_str(&(n - 1).to_string());
                    remaining_outputs.insert(entry.node_id, n - 1);
                }
                slot = Some(key);
            }

            out.edges.push(VizEdge {
                from: node.name.clone(),
                to: producer.name.clone(),
                attrs: [("dir", "back"), ("arrowtail", "open")]
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                slot,
            });
        }
    }

    Ok(out)
}

//! Symbol graph: a flat, ordered list of operator nodes.
//!
//! JSON shape (MXNet `*-symbol.json`):
//! {
//!   "nodes": [
//!     { "op": "null", "name": "data", "param": {}, "inputs": [] },
//!     { "op": "Convolution", "name": "conv1",
//!       "param": { "kernel": "(3, 3)", "num_filter": "64" },
//!       "inputs": [["0","0"]] }
//!   ],
//!   "arg_nodes": [0],
//!   "heads": [["1","0"]]
//! }
//!
//! Node order doubles as the index space: `inputs` entries reference producer
//! nodes by their position in `nodes`. We decode the document permissively
//! (newer exporters spell `param` as `attrs` or `attr`) and keep the
//! top-level bookkeeping fields so a full symbol file survives a round trip.

use crate::symbol::NodeEntry;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub op: String,
    pub name: String,

    /// Free-form operator attributes (kernel, stride, act_type, ...),
    /// all string-valued on the wire.
    #[serde(
        rename = "param",
        alias = "attrs",
        alias = "attr",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub params: BTreeMap<String, String>,

    #[serde(default)]
    pub inputs: Vec<NodeEntry>,
}

impl Node {
    /// Parameter lookup with empty-string fallback, matching the upstream
    /// map semantics so label formatting never fails over a missing key.
    pub fn param(&self, key: &str) -> &str {
        self.params.get(key).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolGraph {
    #[serde(default)]
    pub nodes: Vec<Node>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arg_nodes: Vec<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub heads: Vec<NodeEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub node_row_ptr: Vec<u64>,
}

impl SymbolGraph {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("decode symbol document")
    }

    pub fn node(&self, id: u64) -> Option<&Node> {
        usize::try_from(id).ok().and_then(|i| self.nodes.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_a_symbol_document() {
        let doc = r#"{
            "nodes": [
                { "op": "null", "name": "data", "param": {}, "inputs": [] },
                { "op": "Convolution", "name": "conv1",
                  "param": { "kernel": "(3, 3)", "num_filter": "64" },
                  "inputs": [["0","0"]] }
            ],
            "arg_nodes": [0],
            "heads": [["1","0"]]
        }"#;

        let g = SymbolGraph::from_json(doc).unwrap();
        assert_eq!(g.nodes.len(), 2);
        assert_eq!(g.nodes[1].param("kernel"), "(3, 3)");
        assert_eq!(g.nodes[1].inputs, vec![NodeEntry::new(0, 0)]);
        assert_eq!(g.arg_nodes, vec![0]);
        assert_eq!(g.heads, vec![NodeEntry::new(1, 0)]);
    }

    #[test]
    fn accepts_attrs_spelling_and_bare_integer_inputs() {
        let doc = r#"{
            "nodes": [
                { "op": "null", "name": "data", "inputs": [] },
                { "op": "Flatten", "name": "flat",
                  "attrs": { "foo": "bar" },
                  "inputs": [[0, 0]] }
            ]
        }"#;

        let g = SymbolGraph::from_json(doc).unwrap();
        assert_eq!(g.nodes[1].param("foo"), "bar");
        assert_eq!(g.nodes[1].inputs[0].node_id, 0);
    }

    #[test]
    fn missing_param_reads_as_empty_string() {
        let doc = r#"{ "nodes": [ { "op": "Softmax", "name": "out", "inputs": [] } ] }"#;
        let g = SymbolGraph::from_json(doc).unwrap();
        assert_eq!(g.nodes[0].param("num_outputs"), "");
    }
}

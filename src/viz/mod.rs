//! Transformation engine: symbol graph in, attributed viz graph out.
//!
//! The engine is a single synchronous pass over an already-decoded
//! `SymbolGraph`; it does no I/O and takes the input by shared reference.
//! Rendering to DOT text lives in `crate::render`.

pub mod build;
pub mod classify;

pub use build::{build, hidden_weight_nodes};
pub use classify::{Classifier, NodeStyle, is_weight_like};

use std::collections::BTreeMap;

/// Rank direction of the rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Layout {
    /// Top-to-bottom (`rankdir=TB`).
    Vertical,
    /// Right-to-left (`rankdir=RL`).
    Horizontal,
}

/// Builder configuration. Defaults match the upstream converter: weight
/// leaves hidden, output-slot tracking on.
#[derive(Debug, Clone)]
pub struct VizOptions {
    pub graph_name: String,
    /// `None` leaves the layout direction to the renderer.
    pub layout: Option<Layout>,
    pub hide_weights: bool,
    pub draw_shapes: bool,
}

impl Default for VizOptions {
    fn default() -> Self {
        Self {
            graph_name: "network".to_string(),
            layout: None,
            hide_weights: true,
            draw_shapes: true,
        }
    }
}

/// One display node. `id` is the source node's name; every style attribute,
/// label included, lives uniformly in `attrs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VizNode {
    pub id: String,
    pub attrs: BTreeMap<String, String>,
}

/// One display edge, added consumer -> producer with `dir=back` so rendered
/// arrows point along the data flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VizEdge {
    pub from: String,
    pub to: String,
    pub attrs: BTreeMap<String, String>,

    /// Producer output-slot key (e.g. `conv1_output2`), tracked so a
    /// downstream tool can look up per-slot tensor shapes. `None` when
    /// shape tracking is off or the producer is a leaf.
    pub slot: Option<String>,
}

/// The attributed directed graph handed to the renderer. Built fresh per
/// call; never modified afterwards.
#[derive(Debug, Clone)]
pub struct VizGraph {
    pub name: String,
    pub directed: bool,
    /// Graph-level attributes in emission order (nodesep, ranksep, rankdir).
    pub attrs: Vec<(String, String)>,
    pub nodes: Vec<VizNode>,
    pub edges: Vec<VizEdge>,
}

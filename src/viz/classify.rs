//! Per-operator display rules.
//!
//! Every operator maps to a (shape, fill color, label) triple; anything not
//! recognized falls through to the last palette slot with its op name (or,
//! for `Custom`, its `op_type` parameter) as the label. Tuple-ish parameter
//! values like `"(3, 3)"` or `"[1,1]"` are read by scanning for digit runs
//! rather than with a structured parser, so any bracket/separator style
//! works.

use crate::symbol::Node;
use regex::Regex;

/// Fill colors by operator category. Index assignments follow the upstream
/// converter so renderings stay comparable.
pub const FILL_PALETTE: [&str; 8] = [
    "#8dd3c7", "#fb8072", "#ffffb3", "#bebada", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
];

const WEIGHT_SUFFIXES: [&str; 6] = [
    "_weight",
    "_bias",
    "_beta",
    "_gamma",
    "_moving_var",
    "_moving_mean",
];

/// Does this name look like a learned-parameter leaf (weight, bias, or a
/// BatchNorm statistic)?
pub fn is_weight_like(name: &str) -> bool {
    WEIGHT_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// Display triple for one node. The fixed-size box defaults shared by all
/// nodes are applied by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStyle {
    pub shape: &'static str,
    pub fill: &'static str,
    pub label: String,
}

pub struct Classifier {
    digits: Regex,
}

impl Classifier {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            digits: Regex::new(r"\d+")?,
        })
    }

    /// All maximal digit runs of `s`, left to right, joined with `x`:
    /// `"(3, 3)"` -> `"3x3"`, `"3"` -> `"3"`.
    fn joined_runs(&self, s: &str) -> String {
        self.digits
            .find_iter(s)
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join("x")
    }

    /// `stride` rendered like `kernel`, defaulting to `"1"` when absent.
    fn stride(&self, node: &Node) -> String {
        match node.params.get("stride") {
            Some(v) => self.joined_runs(v),
            None => "1".to_string(),
        }
    }

    pub fn classify(&self, node: &Node) -> NodeStyle {
        let op = node.op.as_str();
        match op {
            "null" => NodeStyle {
                shape: "oval",
                fill: FILL_PALETTE[0],
                label: node.name.clone(),
            },
            "Convolution" => NodeStyle {
                shape: "box",
                fill: FILL_PALETTE[1],
                label: format!(
                    "Convolution\n{}/{}, {}",
                    self.joined_runs(node.param("kernel")),
                    self.stride(node),
                    node.param("num_filter"),
                ),
            },
            "FullyConnected" => NodeStyle {
                shape: "box",
                fill: FILL_PALETTE[1],
                label: format!("FullyConnected\n{}", node.param("num_hidden")),
            },
            "BatchNorm" => NodeStyle {
                shape: "box",
                fill: FILL_PALETTE[3],
                label: op.to_string(),
            },
            "Activation" | "LeakyReLU" => NodeStyle {
                shape: "box",
                fill: FILL_PALETTE[2],
                label: format!("{}\n{}", op, node.param("act_type")),
            },
            "Pooling" => NodeStyle {
                shape: "box",
                fill: FILL_PALETTE[4],
                label: format!(
                    "Pooling\n{}, {}/{}",
                    node.param("pool_type"),
                    self.joined_runs(node.param("kernel")),
                    self.stride(node),
                ),
            },
            "Concat" | "Flatten" | "Reshape" => NodeStyle {
                shape: "box",
                fill: FILL_PALETTE[5],
                label: op.to_string(),
            },
            "Softmax" => NodeStyle {
                shape: "box",
                fill: FILL_PALETTE[6],
                label: op.to_string(),
            },
            _ => NodeStyle {
                shape: "box",
                fill: FILL_PALETTE[7],
                label: if op == "Custom" {
                    node.param("op_type").to_string()
                } else {
                    op.to_string()
                },
            },
        }
    }
}

//! Turn a serialized MXNet-style symbol graph into an attributed
//! visualization graph (and, for the CLI, a Graphviz DOT file).
//!
//! Layering, decode to render:
//! - symbol: JSON schema + validated in-memory graph
//! - viz: classification + edge resolution into a `VizGraph`
//! - render: DOT text emission for a downstream layout tool

pub mod render;
pub mod symbol;
pub mod viz;

pub type Result<T> = anyhow::Result<T>;

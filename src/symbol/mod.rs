//! Decode layer: symbol JSON schema + in-memory graph.
//!
//! This module is intentionally separate from the transformation engine and
//! the DOT renderer. It owns:
//! - NodeEntry (input reference) and its wire codec
//! - Node / SymbolGraph and the symbol-document (de)serialization

pub mod entry;
pub mod graph;

pub use entry::NodeEntry;
pub use graph::{Node, SymbolGraph};

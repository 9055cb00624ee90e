//! DOT emission for the attributed viz graph.

pub mod dot;

pub use dot::render_dot;

//! Input reference ("node entry") codec.
//!
//! Wire shape is a flat array of 2 or 3 integers, each quoted as a decimal
//! string to match the upstream format:
//!
//!   ["3","0"]       =>  node 3, output 0, version 0
//!   ["3","1","2"]   =>  node 3, output 1, version 2
//!
//! Decoding also accepts bare integers ([3,0]) since real symbol files carry
//! those; encoding always emits quoted strings, and the 2-element form iff
//! version == 0, so both forms round-trip byte-identically.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// A reference to one specific output of one producer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeEntry {
    /// Index into the symbol graph's node list.
    pub node_id: u64,
    /// Which output slot of the producer.
    pub output_index: u64,
    /// Mutation counter; 0 when absent from the wire form.
    pub version: u64,
}

impl NodeEntry {
    pub fn new(node_id: u64, output_index: u64) -> Self {
        Self {
            node_id,
            output_index,
            version: 0,
        }
    }
}

/// One element of the wire array: quoted ("3") or bare (3).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndex {
    Num(u64),
    Text(String),
}

impl RawIndex {
    fn value<E: DeError>(&self) -> Result<u64, E> {
        match self {
            Self::Num(n) => Ok(*n),
            Self::Text(s) => s
                .parse()
                .map_err(|_| E::custom(format!("node entry index is not an integer: {s:?}"))),
        }
    }
}

impl<'de> Deserialize<'de> for NodeEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<RawIndex>::deserialize(deserializer)?;
        if raw.len() < 2 {
            return Err(D::Error::custom(format!(
                "node entry must have at least 2 elements, got {}",
                raw.len()
            )));
        }
        Ok(Self {
            node_id: raw[0].value()?,
            output_index: raw[1].value()?,
            version: match raw.get(2) {
                Some(v) => v.value()?,
                None => 0,
            },
        })
    }
}

impl Serialize for NodeEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.version == 0 { 2 } else { 3 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.node_id.to_string())?;
        seq.serialize_element(&self.output_index.to_string())?;
        if self.version != 0 {
            seq.serialize_element(&self.version.to_string())?;
        }
        seq.end()
    }
}

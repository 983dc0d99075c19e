//! JSON export of the node snapshot
//!
//! Serialization only: the JSON shape mirrors [NodeSnapshot](crate::tree::NodeSnapshot), with
//! empty names, values, attributes and children left out.

use crate::error::FormatError;
use crate::formats::format::Format;
use crate::tree::{snapshot_node, Node};

#[derive(Debug, Clone)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Node snapshot as JSON"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        let snapshot = snapshot_node(root);
        let result = if self.pretty {
            serde_json::to_string_pretty(&snapshot)
        } else {
            serde_json::to_string(&snapshot)
        };
        result.map_err(|e| FormatError::Serialization(e.to_string()))
    }
}

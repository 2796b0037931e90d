use serde::Deserialize;
use serde_json::Value;

use super::error::{SnapshotError, SnapshotResult};
use super::model::{Column, Node};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawSnapshot {
    #[serde(default)]
    pub(super) label: Option<String>,
    #[serde(default)]
    pub(super) topology_id: Option<String>,
    #[serde(default)]
    pub(super) columns: Vec<Column>,
    #[serde(default)]
    pub(super) nodes: Vec<Node>,
}

pub(super) fn parse_snapshot_json(raw: &str) -> SnapshotResult<RawSnapshot> {
    let parsed: Value = serde_json::from_str(raw)?;

    match parsed {
        Value::Array(_) => {
            let nodes = Vec::<Node>::deserialize(parsed)?;
            Ok(RawSnapshot {
                label: None,
                topology_id: None,
                columns: Vec::new(),
                nodes,
            })
        }
        Value::Object(ref object) => {
            if !object.contains_key("nodes") {
                return Err(SnapshotError::Shape(
                    "snapshot object has no \"nodes\" key".to_owned(),
                ));
            }
            Ok(RawSnapshot::deserialize(parsed)?)
        }
        other => Err(SnapshotError::Shape(format!(
            "expected an object or an array, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number.as_f64().map(Self::Number),
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Bool(flag) => Some(Self::Text(flag.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataType {
    Ip,
    Number,
    String,
    Datetime,
    Other(String),
}

impl From<String> for DataType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ip" => Self::Ip,
            "number" => Self::Number,
            "string" => Self::String,
            "datetime" => Self::Datetime,
            _ => Self::Other(value),
        }
    }
}

impl From<DataType> for String {
    fn from(value: DataType) -> Self {
        match value {
            DataType::Ip => "ip".to_owned(),
            DataType::Number => "number".to_owned(),
            DataType::String => "string".to_owned(),
            DataType::Datetime => "datetime".to_owned(),
            DataType::Other(other) => other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricFormat {
    Integer,
    Number,
    Percent,
    Filesize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub value: FieldValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<MetricFormat>,
}

impl Field {
    pub fn new(id: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            value: value.into(),
            data_type: None,
            format: None,
        }
    }

    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn with_format(mut self, format: MetricFormat) -> Self {
        self.format = Some(format);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relative {
    pub topology_id: String,
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub metrics: Vec<Field>,
    #[serde(default)]
    pub metadata: Vec<Field>,
    #[serde(default)]
    pub parents: Vec<Relative>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_metric(mut self, field: Field) -> Self {
        self.metrics.push(field);
        self
    }

    pub fn with_metadata(mut self, field: Field) -> Self {
        self.metadata.push(field);
        self
    }

    pub fn with_parent(mut self, parent: Relative) -> Self {
        self.parents.push(parent);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Scalar attribute lookup; `null` and structured values count as missing.
    pub fn attribute(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => self.id.clone().map(FieldValue::Text),
            "label" => self.label.clone().map(FieldValue::Text),
            _ => self.attributes.get(key).and_then(FieldValue::from_json),
        }
    }

    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or_default()
    }

    pub fn has_metric(&self, id: &str) -> bool {
        self.metrics.iter().any(|field| field.id == id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub default_sort: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_desc: Option<bool>,
}

impl Column {
    pub const LABEL_ID: &'static str = "label";

    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            default_sort: false,
            data_type: None,
            sort_desc: None,
        }
    }

    pub fn label_column(label: impl Into<String>) -> Self {
        Self::new(Self::LABEL_ID, label)
    }

    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn with_default_sort(mut self) -> Self {
        self.default_sort = true;
        self
    }

    pub fn with_sort_desc(mut self, sort_desc: bool) -> Self {
        self.sort_desc = Some(sort_desc);
        self
    }

    pub fn is_number(&self) -> bool {
        self.data_type == Some(DataType::Number)
    }
}

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// --- Field types and operators ---

/// Column type of a grid field, as named in Ext JS filter configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[serde(alias = "str")]
    String,
    #[serde(alias = "num")]
    Number,
    Date,
    #[serde(alias = "bool")]
    Boolean,
    List,
}

impl FieldType {
    pub const ALL: [FieldType; 5] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Date,
        FieldType::Boolean,
        FieldType::List,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
            FieldType::List => "list",
        }
    }

    /// Abbreviation used in the prompt's field table.
    pub fn short_name(self) -> &'static str {
        match self {
            FieldType::String => "str",
            FieldType::Number => "num",
            FieldType::Date => "date",
            FieldType::Boolean => "bool",
            FieldType::List => "list",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Eq,
    Lt,
    Gt,
    Like,
    In,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Eq,
        Operator::Lt,
        Operator::Gt,
        Operator::Like,
        Operator::In,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Lt => "lt",
            Operator::Gt => "gt",
            Operator::Like => "like",
            Operator::In => "in",
        }
    }

    /// Operators usable as keys of a ranged numeric/date value.
    pub fn is_comparison(self) -> bool {
        matches!(self, Operator::Eq | Operator::Lt | Operator::Gt)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Filter values ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// The `value` of a filter: a single scalar, a list for `in` filters, or an
/// operator object such as `{ "gt": 1000, "lt": 1500 }` for ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bounds(BTreeMap<Operator, Scalar>),
    List(Vec<Scalar>),
    Scalar(Scalar),
}

// --- FilterSpec ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Filter {
    pub property: String,
    pub value: FilterValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sorter {
    pub property: String,
    pub direction: Direction,
}

/// Filter and sort configuration handed to the Ext JS grid store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub filters: Vec<Filter>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sorters: Vec<Sorter>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

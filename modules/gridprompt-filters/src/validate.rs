//! Check extracted model output against a domain's field table.

use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use thiserror::Error;

use gridprompt_common::{
    DomainSchema, FieldSpec, FieldType, Filter, FilterSpec, FilterValue, Operator, Scalar,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaViolation {
    #[error("reply is not a filter spec: {0}")]
    Shape(String),

    #[error("unknown property \"{property}\"")]
    UnknownProperty { property: String },

    #[error("property \"{property}\" is declared as {expected}, reply says {actual}")]
    TypeMismatch {
        property: String,
        expected: FieldType,
        actual: FieldType,
    },

    #[error("operator \"{operator}\" is not valid for {field_type} property \"{property}\"")]
    OperatorMismatch {
        property: String,
        operator: Operator,
        field_type: FieldType,
    },

    #[error("invalid value for property \"{property}\": {reason}")]
    InvalidValue { property: String, reason: String },

    #[error("value {value} is not allowed for property \"{property}\"")]
    DisallowedValue { property: String, value: String },
}

/// Convert extracted JSON into a [`FilterSpec`] and check every filter and
/// sorter against `domain`. Nonconforming output is rejected, never repaired.
pub fn validate(value: Value, domain: &DomainSchema) -> Result<FilterSpec, SchemaViolation> {
    match &value {
        Value::Object(map) if map.contains_key("filters") || map.contains_key("sorters") => {}
        Value::Object(_) => {
            return Err(SchemaViolation::Shape(
                "expected a \"filters\" and/or \"sorters\" key".to_string(),
            ))
        }
        _ => return Err(SchemaViolation::Shape("expected a JSON object".to_string())),
    }

    let spec: FilterSpec =
        serde_json::from_value(value).map_err(|e| SchemaViolation::Shape(e.to_string()))?;

    for filter in &spec.filters {
        check_filter(filter, domain)?;
    }
    for sorter in &spec.sorters {
        declared_field(domain, &sorter.property)?;
    }

    Ok(spec)
}

fn declared_field<'a>(
    domain: &'a DomainSchema,
    property: &str,
) -> Result<&'a FieldSpec, SchemaViolation> {
    domain
        .field(property)
        .ok_or_else(|| SchemaViolation::UnknownProperty {
            property: property.to_string(),
        })
}

fn check_filter(filter: &Filter, domain: &DomainSchema) -> Result<(), SchemaViolation> {
    let field = declared_field(domain, &filter.property)?;

    if filter.field_type != field.field_type {
        return Err(SchemaViolation::TypeMismatch {
            property: filter.property.clone(),
            expected: field.field_type,
            actual: filter.field_type,
        });
    }

    if let Some(operator) = filter.operator {
        if !operator_allowed(field.field_type, operator) {
            return Err(operator_mismatch(field, operator));
        }
    }

    match field.field_type {
        FieldType::String => check_text(field, &filter.value),
        FieldType::List => check_list(field, &filter.value),
        FieldType::Boolean => check_boolean(field, &filter.value),
        FieldType::Number | FieldType::Date => check_comparison(field, &filter.value),
    }
}

/// Which operators a field type accepts; an omitted operator is always fine.
fn operator_allowed(field_type: FieldType, operator: Operator) -> bool {
    match field_type {
        FieldType::String => operator == Operator::Like,
        FieldType::List => operator == Operator::In,
        FieldType::Boolean => operator == Operator::Eq,
        FieldType::Number | FieldType::Date => operator.is_comparison(),
    }
}

fn operator_mismatch(field: &FieldSpec, operator: Operator) -> SchemaViolation {
    SchemaViolation::OperatorMismatch {
        property: field.name.to_string(),
        operator,
        field_type: field.field_type,
    }
}

fn invalid(field: &FieldSpec, reason: impl Into<String>) -> SchemaViolation {
    SchemaViolation::InvalidValue {
        property: field.name.to_string(),
        reason: reason.into(),
    }
}

fn check_text(field: &FieldSpec, value: &FilterValue) -> Result<(), SchemaViolation> {
    match value {
        FilterValue::Scalar(Scalar::Text(text)) => {
            if text.contains('%') || text.contains('*') {
                return Err(invalid(field, "wildcards are not allowed"));
            }
            Ok(())
        }
        _ => Err(invalid(field, "expected a string")),
    }
}

fn check_list(field: &FieldSpec, value: &FilterValue) -> Result<(), SchemaViolation> {
    let items: Vec<&Scalar> = match value {
        FilterValue::Scalar(scalar) => vec![scalar],
        FilterValue::List(items) if !items.is_empty() => items.iter().collect(),
        FilterValue::List(_) => return Err(invalid(field, "expected at least one value")),
        FilterValue::Bounds(_) => return Err(invalid(field, "expected a value or a list of values")),
    };

    for item in items {
        let text = item
            .as_text()
            .ok_or_else(|| invalid(field, format!("expected string values, got {item}")))?;
        if !field.allows(text) {
            return Err(SchemaViolation::DisallowedValue {
                property: field.name.to_string(),
                value: text.to_string(),
            });
        }
    }
    Ok(())
}

fn check_boolean(field: &FieldSpec, value: &FilterValue) -> Result<(), SchemaViolation> {
    match value {
        FilterValue::Scalar(Scalar::Bool(_)) => Ok(()),
        FilterValue::Bounds(bounds) if bounds.len() == 1 => match bounds.get(&Operator::Eq) {
            Some(Scalar::Bool(_)) => Ok(()),
            Some(other) => Err(invalid(field, format!("expected true or false, got {other}"))),
            None => {
                let operator = bounds.keys().next().copied().unwrap_or(Operator::Eq);
                Err(operator_mismatch(field, operator))
            }
        },
        _ => Err(invalid(field, "expected true or false")),
    }
}

/// Numbers and dates: a single bound, or an operator object using eq/lt/gt.
fn check_comparison(field: &FieldSpec, value: &FilterValue) -> Result<(), SchemaViolation> {
    match value {
        FilterValue::Scalar(scalar) => {
            bound_key(field, scalar)?;
            Ok(())
        }
        FilterValue::Bounds(bounds) => {
            if bounds.is_empty() {
                return Err(invalid(field, "operator object is empty"));
            }
            for (operator, scalar) in bounds {
                if !operator.is_comparison() {
                    return Err(operator_mismatch(field, *operator));
                }
                bound_key(field, scalar)?;
            }
            if let (Some(gt), Some(lt)) = (bounds.get(&Operator::Gt), bounds.get(&Operator::Lt)) {
                // Equal bounds select the single value.
                if bound_key(field, gt)? > bound_key(field, lt)? {
                    return Err(invalid(
                        field,
                        format!("range is inverted (gt {gt} is above lt {lt})"),
                    ));
                }
            }
            Ok(())
        }
        FilterValue::List(_) => Err(invalid(
            field,
            "expected a single value or an operator object",
        )),
    }
}

/// Parse a numeric or date bound into a comparable key.
fn bound_key(field: &FieldSpec, scalar: &Scalar) -> Result<f64, SchemaViolation> {
    match (field.field_type, scalar) {
        (FieldType::Number, Scalar::Number(n)) => n
            .as_f64()
            .ok_or_else(|| invalid(field, format!("{n} is not a finite number"))),
        (FieldType::Number, other) => Err(invalid(field, format!("expected a number, got {other}"))),
        (FieldType::Date, Scalar::Text(text)) => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
            .map(|date| f64::from(date.num_days_from_ce()))
            .map_err(|_| invalid(field, format!("expected a YYYY-MM-DD date, got {text:?}"))),
        (FieldType::Date, other) => Err(invalid(field, format!("expected a date, got {other}"))),
        _ => Err(invalid(field, "not a comparable field")),
    }
}

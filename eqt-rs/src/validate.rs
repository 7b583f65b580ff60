//! Structural validation of a batch document before any equation is transformed.

use eqt_compute::transform::TransformKind;
use serde::Serialize;
use serde_json::{Map, Value};

/// The overall shape of the batch.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DataStructure {
    /// The number of equation records.
    pub num_equations: usize,

    /// The fields of the last record, in the order they were written.
    pub fields: Vec<String>,
}

/// The outcome of one check applied to each field of every record.
///
/// `target_variable` is [`None`] (reported as `N/A`) if no record asks for `isolate_variable`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChecks {
    pub equation_id: bool,
    pub original_equation: bool,
    pub transformation_type: bool,
    pub target_variable: Option<bool>,
}

impl FieldChecks {
    /// Returns the checks as `(field name, outcome)` pairs, in report order.
    pub fn entries(&self) -> [(&'static str, Option<bool>); 4] {
        [
            ("equation_id", Some(self.equation_id)),
            ("original_equation", Some(self.original_equation)),
            ("transformation_type", Some(self.transformation_type)),
            ("target_variable", self.target_variable),
        ]
    }

    /// Returns true if no check failed.
    pub fn all_passed(&self) -> bool {
        self.entries().iter().all(|(_, outcome)| *outcome != Some(false))
    }

    /// Combines the checks of one record into the checks of the records before it. A field
    /// passes only if it passes for every record.
    fn merge(&mut self, first: bool, other: FieldChecks) {
        if first {
            *self = FieldChecks { target_variable: None, ..other };
        } else {
            self.equation_id &= other.equation_id;
            self.original_equation &= other.original_equation;
            self.transformation_type &= other.transformation_type;
        }
        if let Some(passed) = other.target_variable {
            self.target_variable = Some(self.target_variable.unwrap_or(true) && passed);
        }
    }
}

/// The result of validating a batch document.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub data_structure: DataStructure,

    /// Whether each required field is present.
    pub required_fields: FieldChecks,

    /// Whether each field has the right type and an accepted value.
    pub data_types: FieldChecks,

    /// Whether the document can be processed.
    pub is_valid: bool,

    /// A description of every problem found.
    pub errors: Vec<String>,
}

/// Checks the fields of a single record, recording problems in `errors`.
fn check_record(
    index: usize,
    record: &Map<String, Value>,
    errors: &mut Vec<String>,
) -> (FieldChecks, FieldChecks) {
    let mut missing = |field: &str| {
        let present = record.contains_key(field);
        if !present {
            errors.push(format!("Record {}: missing field '{}'", index, field));
        }
        present
    };
    let mut required = FieldChecks {
        equation_id: missing("equation_id"),
        original_equation: missing("original_equation"),
        transformation_type: missing("transformation_type"),
        target_variable: None,
    };

    let kind = record.get("transformation_type").and_then(Value::as_str);
    if kind == Some("isolate_variable") {
        required.target_variable = Some(missing("target_variable"));
    }

    let id = record.get("equation_id");
    let target = record.get("target_variable");
    let types = FieldChecks {
        equation_id: id.map_or(false, |id| id.is_string() || id.is_i64() || id.is_u64()),
        original_equation: record.get("original_equation").map_or(false, Value::is_string),
        transformation_type: kind.map_or(false, |kind| TransformKind::NAMES.iter().any(|name| *name == kind)),
        target_variable: target.map(Value::is_string).or(required.target_variable),
    };

    if id.is_some() && !types.equation_id {
        errors.push(format!("Record {}: 'equation_id' must be a string or an integer", index));
    }
    if record.contains_key("original_equation") && !types.original_equation {
        errors.push(format!("Record {}: 'original_equation' must be a string", index));
    }
    if record.contains_key("transformation_type") && !types.transformation_type {
        errors.push(format!(
            "Record {}: 'transformation_type' must be one of {}",
            index,
            TransformKind::NAMES.join(", "),
        ));
    }
    if types.target_variable == Some(false) && target.is_some() {
        errors.push(format!("Record {}: 'target_variable' must be a string", index));
    }

    (required, types)
}

/// Validates a batch document: it must be an object whose `equations` key holds a list of
/// records, and every record must have the fields needed to transform it.
pub fn validate(data: &Value) -> ValidationReport {
    let mut report = ValidationReport { is_valid: true, ..Default::default() };

    let Some(equations) = data.get("equations") else {
        report.is_valid = false;
        report.errors.push("Missing 'equations' key in data".to_string());
        return report;
    };
    let Some(equations) = equations.as_array() else {
        report.is_valid = false;
        report.errors.push("'equations' must be a list of records".to_string());
        return report;
    };

    report.data_structure.num_equations = equations.len();
    for (index, record) in equations.iter().enumerate() {
        let Some(record) = record.as_object() else {
            report.errors.push(format!("Record {}: expected an object", index));
            report.is_valid = false;
            continue;
        };

        report.data_structure.fields = record.keys().cloned().collect();
        let (required, types) = check_record(index, record, &mut report.errors);
        report.required_fields.merge(index == 0, required);
        report.data_types.merge(index == 0, types);
    }

    if !report.errors.is_empty() || !report.required_fields.all_passed() || !report.data_types.all_passed() {
        report.is_valid = false;
    }
    report
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use super::*;

    #[test]
    fn valid_batch() {
        let report = validate(&json!({
            "equations": [
                { "equation_id": "eq101", "original_equation": "2x + 3x = 25", "transformation_type": "simplify" },
                { "equation_id": 2, "original_equation": "4y - 8 = 2y", "transformation_type": "isolate_variable", "target_variable": "y" },
            ]
        }));

        assert!(report.is_valid);
        assert_eq!(report.errors, Vec::<String>::new());
        assert_eq!(report.data_structure.num_equations, 2);
        assert_eq!(
            report.data_structure.fields,
            vec!["equation_id", "original_equation", "transformation_type", "target_variable"],
        );
        assert_eq!(report.required_fields.target_variable, Some(true));
        assert_eq!(report.data_types.target_variable, Some(true));
    }

    #[test]
    fn target_not_applicable() {
        let report = validate(&json!({
            "equations": [
                { "equation_id": "a", "original_equation": "x = 1", "transformation_type": "expand" },
            ]
        }));
        assert!(report.is_valid);
        assert_eq!(report.required_fields.target_variable, None);
        assert_eq!(report.data_types.target_variable, None);
    }

    #[test]
    fn missing_equations_key() {
        let report = validate(&json!({ "records": [] }));
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Missing 'equations' key in data"]);
        assert_eq!(report.data_structure.num_equations, 0);
    }

    #[test]
    fn equations_not_a_list() {
        let report = validate(&json!({ "equations": "x = 1" }));
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["'equations' must be a list of records"]);
    }

    #[test]
    fn missing_field_names_record() {
        let report = validate(&json!({
            "equations": [
                { "equation_id": "a", "original_equation": "x = 1", "transformation_type": "expand" },
                { "equation_id": "b", "transformation_type": "simplify" },
            ]
        }));
        assert!(!report.is_valid);
        assert!(!report.required_fields.original_equation);
        assert!(!report.data_types.original_equation);
        assert_eq!(report.errors, vec!["Record 1: missing field 'original_equation'"]);
    }

    #[test]
    fn isolate_requires_target() {
        let report = validate(&json!({
            "equations": [
                { "equation_id": "a", "original_equation": "x = 1", "transformation_type": "isolate_variable" },
            ]
        }));
        assert!(!report.is_valid);
        assert_eq!(report.required_fields.target_variable, Some(false));
        assert_eq!(report.errors, vec!["Record 0: missing field 'target_variable'"]);
    }

    #[test]
    fn wrong_types() {
        let report = validate(&json!({
            "equations": [
                { "equation_id": 1.5, "original_equation": 3, "transformation_type": "integrate", "target_variable": 4 },
            ]
        }));
        assert!(!report.is_valid);
        assert_eq!(report.data_types, FieldChecks {
            equation_id: false,
            original_equation: false,
            transformation_type: false,
            target_variable: Some(false),
        });
        assert_eq!(report.errors.len(), 4);
        assert!(report.errors[2].starts_with("Record 0: 'transformation_type' must be one of simplify"));
    }
}

//! The records of a batch of equations, as read from JSON.

use eqt_compute::transform::TransformKind;
use eqt_error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier of an equation record, which may be written as a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// A string identifier, such as `"eq101"`.
    Text(String),

    /// An integer identifier.
    Number(serde_json::Number),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

/// One equation to transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationRecord {
    /// The identifier of the equation.
    pub equation_id: RecordId,

    /// The source text of the equation.
    pub original_equation: String,

    /// The name of the transformation to apply.
    pub transformation_type: String,

    /// The variable to solve for, if the transformation is `isolate_variable`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_variable: Option<String>,
}

impl EquationRecord {
    /// Returns the transformation this record asks for.
    pub fn kind(&self) -> Result<TransformKind, Error> {
        TransformKind::from_parts(&self.transformation_type, self.target_variable.as_deref())
    }
}

/// The top-level document: a list of equation records under the `equations` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationBatch {
    /// The records, in input order.
    pub equations: Vec<EquationRecord>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn string_and_integer_ids() {
        let batch: EquationBatch = serde_json::from_str(r#"{
            "equations": [
                { "equation_id": "eq101", "original_equation": "2x + 3x = 25", "transformation_type": "simplify" },
                { "equation_id": 7, "original_equation": "4y - 8 = 2y", "transformation_type": "isolate_variable", "target_variable": "y" }
            ]
        }"#).unwrap();

        assert_eq!(batch.equations[0].equation_id, RecordId::Text("eq101".to_string()));
        assert_eq!(batch.equations[0].equation_id.to_string(), "eq101");
        assert_eq!(batch.equations[1].equation_id.to_string(), "7");
        assert_eq!(batch.equations[0].target_variable, None);
        assert_eq!(batch.equations[1].target_variable.as_deref(), Some("y"));
    }

    #[test]
    fn record_kind() {
        let record = EquationRecord {
            equation_id: RecordId::Text("a".to_string()),
            original_equation: "x = 1".to_string(),
            transformation_type: "isolate_variable".to_string(),
            target_variable: Some("x".to_string()),
        };
        assert_eq!(record.kind().unwrap(), TransformKind::IsolateVariable { target: "x".to_string() });

        let record = EquationRecord { target_variable: None, ..record };
        assert!(record.kind().is_err());
    }

    #[test]
    fn missing_target_is_not_serialized() {
        let record = EquationRecord {
            equation_id: RecordId::Text("a".to_string()),
            original_equation: "x = 1".to_string(),
            transformation_type: "expand".to_string(),
            target_variable: None,
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"equation_id":"a","original_equation":"x = 1","transformation_type":"expand"}"#,
        );
    }
}

//! Transforming every equation of a batch, in parallel.

use eqt_compute::transform::{Engine, TransformationResult};
use rayon::prelude::*;
use serde_json::Value;
use std::time::Instant;
use super::{
    error::BatchError,
    record::{EquationBatch, EquationRecord},
    report::generate_report,
    validate::{validate, ValidationReport},
};
use tracing::{info, warn};

/// Transforms a single record. A record whose transformation type or target variable is
/// unusable results in an error result, just like an equation that fails to parse.
pub fn transform_record(engine: &Engine, record: &EquationRecord) -> TransformationResult {
    let id = record.equation_id.to_string();
    match record.kind() {
        Ok(kind) => engine.transform(&id, &record.original_equation, &kind),
        Err(err) => {
            warn!(id = %id, error = %err, "invalid transformation");
            TransformationResult::error(
                id,
                record.original_equation.clone(),
                record.transformation_type.clone(),
                err.to_string(),
            )
        },
    }
}

/// Transforms every record in parallel. The results are in the same order as the records.
pub fn process_batch(engine: &Engine, records: &[EquationRecord]) -> Vec<TransformationResult> {
    let start = Instant::now();
    let results = records
        .par_iter()
        .map(|record| transform_record(engine, record))
        .collect::<Vec<_>>();

    let failed = results.iter().filter(|result| result.is_error()).count();
    info!(equations = records.len(), failed, elapsed = ?start.elapsed(), "processed batch");
    results
}

/// Parses and validates a batch document, returning the validation report and the records.
///
/// The records are only read if validation succeeds; otherwise the list is empty.
pub fn load_batch(input: &str) -> Result<(ValidationReport, Vec<EquationRecord>), BatchError> {
    let data: Value = serde_json::from_str(input)?;
    let report = validate(&data);
    if !report.is_valid {
        return Ok((report, Vec::new()));
    }

    let batch: EquationBatch = serde_json::from_value(data)?;
    Ok((report, batch.equations))
}

/// Processes a batch document into the markdown report. Input that is not valid JSON produces
/// `Error: Invalid JSON format`.
pub fn process_json(engine: &Engine, input: &str) -> String {
    match load_batch(input) {
        Ok((report, records)) => {
            let results = process_batch(engine, &records);
            generate_report(&report, &records, &results)
        },
        Err(err) => err.to_string(),
    }
}

/// Processes a batch document into the list of results. Unlike [`process_json`], a document that
/// fails validation is an error.
pub fn process_json_results(
    engine: &Engine,
    input: &str,
) -> Result<Vec<TransformationResult>, BatchError> {
    let (report, records) = load_batch(input)?;
    if !report.is_valid {
        return Err(BatchError::Invalid(report.errors));
    }
    Ok(process_batch(engine, &records))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    const INPUT: &str = r#"{
        "equations": [
            { "equation_id": "eq101", "original_equation": "2x + 3x = 25", "transformation_type": "simplify" },
            { "equation_id": "eq102", "original_equation": "4y - 8 = 2y", "transformation_type": "isolate_variable", "target_variable": "y" },
            { "equation_id": "eq103", "original_equation": "(z+2)(z-4) = 0", "transformation_type": "expand" },
            { "equation_id": "eq104", "original_equation": "10a - 5 = 0", "transformation_type": "factorize" },
            { "equation_id": "eq105", "original_equation": "2x +* = 5", "transformation_type": "simplify" },
            { "equation_id": 106, "original_equation": "12c - 18 = 0", "transformation_type": "factorize" }
        ]
    }"#;

    #[test]
    fn failures_do_not_stop_the_batch() {
        let results = process_json_results(&Engine::default(), INPUT).unwrap();
        let summary = results
            .iter()
            .map(|result| (result.id.as_str(), result.final_result.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(summary, vec![
            ("eq101", "5x - 25 = 0"),
            ("eq102", "y = 4"),
            ("eq103", "z^2 - 2z - 8 = 0"),
            ("eq104", "5(2a - 1) = 0"),
            ("eq105", "Error"),
            ("106", "6(2c - 3) = 0"),
        ]);
        assert_eq!(results[4].steps.len(), 1);
        assert_eq!(results[4].steps[0].label, "Error");
    }

    #[test]
    fn results_keep_input_order() {
        let records = (0..200)
            .map(|i| EquationRecord {
                equation_id: super::super::record::RecordId::Text(format!("eq{}", i)),
                original_equation: format!("x + {} = {}", i, 2 * i),
                transformation_type: "isolate_variable".to_string(),
                target_variable: Some("x".to_string()),
            })
            .collect::<Vec<_>>();

        let results = process_batch(&Engine::default(), &records);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.id, format!("eq{}", i));
            assert_eq!(result.final_result, format!("x = {}", i));
        }
    }

    #[test]
    fn unknown_kind_is_an_error_result() {
        let record = EquationRecord {
            equation_id: super::super::record::RecordId::Text("e".to_string()),
            original_equation: "x = 1".to_string(),
            transformation_type: "isolate_variable".to_string(),
            target_variable: None,
        };
        let result = transform_record(&Engine::default(), &record);
        assert!(result.is_error());
        assert_eq!(result.kind, "isolate_variable");
        assert_eq!(result.steps[0].formula, "missing target variable for `isolate_variable`");
        assert_eq!(result.explanation, "Failed to perform isolate_variable transformation");
    }

    #[test]
    fn invalid_json() {
        assert_eq!(process_json(&Engine::default(), "{ not json"), "Error: Invalid JSON format");
        assert!(matches!(
            process_json_results(&Engine::default(), "[1, 2"),
            Err(BatchError::Json(_)),
        ));
    }

    #[test]
    fn invalid_document() {
        let report = process_json(&Engine::default(), r#"{ "items": [] }"#);
        assert!(report.ends_with("- Missing 'equations' key in data\n"));
        assert!(matches!(
            process_json_results(&Engine::default(), r#"{ "items": [] }"#),
            Err(BatchError::Invalid(errors)) if errors == vec!["Missing 'equations' key in data"],
        ));
    }

    #[test]
    fn markdown_report_sections_in_order() {
        let report = process_json(&Engine::default(), INPUT);
        let positions = ["## Equation eq101", "## Equation eq102", "## Equation eq105", "## Equation 106", "# Feedback"]
            .map(|heading| report.find(heading).unwrap());
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(report.contains("$$5(2a - 1) = 0$$"));
    }
}

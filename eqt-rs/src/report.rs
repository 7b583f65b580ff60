//! The markdown report summarizing validation and every transformation of a batch.

use eqt_compute::transform::TransformationResult;
use std::fmt::Write;
use super::{record::EquationRecord, validate::ValidationReport};

/// The symbol for the outcome of a required field check.
fn presence(outcome: Option<bool>) -> &'static str {
    match outcome {
        Some(true) => "✓",
        Some(false) => "✗",
        None => "N/A",
    }
}

/// The word for the outcome of a data type check.
fn validity(outcome: Option<bool>) -> &'static str {
    match outcome {
        Some(true) => "valid",
        Some(false) => "invalid",
        None => "N/A",
    }
}

/// Writes the validation sections of the report. Returns true if transformation can proceed.
fn write_validation(out: &mut String, report: &ValidationReport) -> Result<bool, std::fmt::Error> {
    writeln!(out, "# Data Validation Report\n")?;

    writeln!(out, "## 1. Data Structure Check:")?;
    writeln!(out, "- Number of equations received: {}", report.data_structure.num_equations)?;
    writeln!(out, "- Fields per record: {}\n", report.data_structure.fields.join(", "))?;

    writeln!(out, "## 2. Required Fields Check:")?;
    for (field, outcome) in report.required_fields.entries() {
        writeln!(out, "- {}: {}", field, presence(outcome))?;
    }
    writeln!(out)?;

    writeln!(out, "## 3. Data Type & Value Validation:")?;
    for (field, outcome) in report.data_types.entries() {
        writeln!(out, "- {}: {}", field, validity(outcome))?;
    }
    writeln!(out)?;

    writeln!(out, "## Validation Summary:")?;
    if report.is_valid {
        writeln!(out, "Data validation is successful! Proceeding with transformation analysis...\n")?;
    } else {
        writeln!(out, "Data validation failed. Please correct the following errors:")?;
        for error in &report.errors {
            writeln!(out, "- {}", error)?;
        }
    }
    Ok(report.is_valid)
}

/// Writes the section of one transformed equation.
fn write_equation(
    out: &mut String,
    record: &EquationRecord,
    result: &TransformationResult,
) -> std::fmt::Result {
    writeln!(out, "## Equation {}\n", result.id)?;
    writeln!(out, "### Input Data:")?;
    writeln!(out, "- Original Equation: {}", result.original_text)?;
    writeln!(out, "- Transformation Type: {}", result.kind)?;
    if let Some(target) = &record.target_variable {
        writeln!(out, "- Target Variable: {}", target)?;
    }

    writeln!(out, "\n### Detailed Calculations:")?;
    for step in &result.steps {
        writeln!(out, "**{}**", step.label)?;
        writeln!(out, "$${}$$", step.formula)?;
        writeln!(out, "{}\n", step.explanation)?;
    }

    writeln!(out, "### Final Transformed Equation:")?;
    writeln!(out, "$${}$$\n", result.final_result)?;
    writeln!(out, "### Explanation:\n{}\n", result.explanation)
}

/// Writes the whole report.
fn write_report(
    out: &mut String,
    report: &ValidationReport,
    records: &[EquationRecord],
    results: &[TransformationResult],
) -> std::fmt::Result {
    if !write_validation(out, report)? {
        return Ok(());
    }

    writeln!(out, "# Transformation Process\n")?;
    writeln!(out, "Total Equations Evaluated: {}\n", report.data_structure.num_equations)?;
    for (record, result) in records.iter().zip(results) {
        write_equation(out, record, result)?;
    }

    writeln!(out, "# Feedback\n")?;
    writeln!(out, "Would you like detailed calculations for any specific equation? Rate this analysis (1-5).")
}

/// Generates the markdown report for a batch.
///
/// The report starts with the validation results. If validation failed, it ends with the list
/// of errors; otherwise it continues with one section per equation, pairing each record with its
/// result in input order.
pub fn generate_report(
    report: &ValidationReport,
    records: &[EquationRecord],
    results: &[TransformationResult],
) -> String {
    let mut out = String::new();
    // writing to a `String` never fails
    let _ = write_report(&mut out, report, records, results);
    out
}

#[cfg(test)]
mod tests {
    use eqt_compute::transform::{Engine, TransformKind};
    use pretty_assertions::assert_eq;
    use super::*;
    use super::super::{record::RecordId, validate::{DataStructure, FieldChecks}};

    fn valid_report(num_equations: usize) -> ValidationReport {
        let checks = FieldChecks {
            equation_id: true,
            original_equation: true,
            transformation_type: true,
            target_variable: Some(true),
        };
        ValidationReport {
            data_structure: DataStructure {
                num_equations,
                fields: vec![
                    "equation_id".to_string(),
                    "original_equation".to_string(),
                    "transformation_type".to_string(),
                    "target_variable".to_string(),
                ],
            },
            required_fields: checks.clone(),
            data_types: checks,
            is_valid: true,
            errors: Vec::new(),
        }
    }

    #[test]
    fn full_report() {
        let record = EquationRecord {
            equation_id: RecordId::Text("eq102".to_string()),
            original_equation: "4y - 8 = 2y".to_string(),
            transformation_type: "isolate_variable".to_string(),
            target_variable: Some("y".to_string()),
        };
        let kind = TransformKind::IsolateVariable { target: "y".to_string() };
        let result = Engine::default().transform("eq102", &record.original_equation, &kind);

        let report = generate_report(&valid_report(1), &[record], &[result]);
        assert_eq!(report, "\
# Data Validation Report

## 1. Data Structure Check:
- Number of equations received: 1
- Fields per record: equation_id, original_equation, transformation_type, target_variable

## 2. Required Fields Check:
- equation_id: ✓
- original_equation: ✓
- transformation_type: ✓
- target_variable: ✓

## 3. Data Type & Value Validation:
- equation_id: valid
- original_equation: valid
- transformation_type: valid
- target_variable: valid

## Validation Summary:
Data validation is successful! Proceeding with transformation analysis...

# Transformation Process

Total Equations Evaluated: 1

## Equation eq102

### Input Data:
- Original Equation: 4y - 8 = 2y
- Transformation Type: isolate_variable
- Target Variable: y

### Detailed Calculations:
**Original equation**
$$4y - 8 = 2y$$
Start with the equation

**Solve for variable**
$$y = 4$$
Isolate y

### Final Transformed Equation:
$$y = 4$$

### Explanation:
Successfully solved for y

# Feedback

Would you like detailed calculations for any specific equation? Rate this analysis (1-5).
");
    }

    #[test]
    fn invalid_report_stops_after_errors() {
        let report = ValidationReport {
            data_structure: DataStructure::default(),
            required_fields: FieldChecks::default(),
            data_types: FieldChecks::default(),
            is_valid: false,
            errors: vec!["Missing 'equations' key in data".to_string()],
        };
        let out = generate_report(&report, &[], &[]);
        assert!(out.contains("- equation_id: ✗\n"));
        assert!(out.contains("- target_variable: N/A\n"));
        assert!(out.ends_with(
            "Data validation failed. Please correct the following errors:\n- Missing 'equations' key in data\n",
        ));
        assert!(!out.contains("# Transformation Process"));
    }
}

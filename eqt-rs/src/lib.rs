//! Batch processing of equation records: validation, parallel transformation, and the markdown
//! report, plus the command syntax of the interactive prompt.
//!
//! ```
//! use eqt_compute::transform::Engine;
//! use eqt_rs::batch::process_json_results;
//!
//! let input = r#"{ "equations": [
//!     { "equation_id": "eq1", "original_equation": "10a - 5 = 0", "transformation_type": "factorize" }
//! ] }"#;
//! let results = process_json_results(&Engine::default(), input).unwrap();
//! assert_eq!(results[0].final_result, "5(2a - 1) = 0");
//! ```

pub mod batch;
pub mod error;
pub mod record;
pub mod repl;
pub mod report;
pub mod validate;

pub use batch::{process_batch, process_json};
pub use error::BatchError;
pub use record::{EquationRecord, RecordId};
pub use report::generate_report;
pub use validate::{validate, ValidationReport};

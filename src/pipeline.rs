//! End-to-end run: load → process → write, with console reporting.

use crate::error::{CalcError, CalcResult};
use crate::model::{ResultEntry, process_operations};
use crate::ops::load_operations_file;
use crate::render::write_report;

use std::path::PathBuf;
use tracing::{error, warn};

pub const DEFAULT_INPUT: &str = "input.json";
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Where to read operations from and where to write the report.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// What a run produced: the line to show the user and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    pub success: bool,
}

/// Load and evaluate the input without touching the output path.
pub fn compute(config: &RunConfig) -> CalcResult<Vec<ResultEntry>> {
    let doc = load_operations_file(&config.input)?;
    process_operations(&doc)
}

/// Run the whole batch and describe the result for the console.
pub fn run(config: &RunConfig) -> Outcome {
    let results = match compute(config) {
        Ok(r) => r,
        Err(e) => {
            warn!(input = %config.input.display(), "run aborted: {}", e);
            return Outcome {
                message: load_error_message(&e),
                success: false,
            };
        }
    };

    match write_report(&config.output, &results) {
        Ok(()) => Outcome {
            message: format!("Results written to {}", config.output.display()),
            success: true,
        },
        Err(e) => {
            error!(output = %config.output.display(), "report not written: {}", e);
            Outcome {
                message: format!("Error writing to file: {}", e),
                success: false,
            }
        }
    }
}

fn load_error_message(e: &CalcError) -> String {
    match e {
        CalcError::InvalidInput(_) => format!("Invalid argument: {}", e),
        CalcError::NotFound(_) | CalcError::Io { .. } => format!("Error: {}", e),
    }
}

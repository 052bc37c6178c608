//! The validation pipeline.
//!
//! Stages run in a fixed order and the first one to report anything ends the
//! run:
//!
//! ```text
//! structure → payload size → limits + schema → placeholders → references
//! ```
//!
//! Limits and schema are the one exception to "first failing stage wins":
//! they are independent rule families over an already well-shaped document,
//! so both always run and their errors are merged, limits first.

use crate::config::Limits;
use crate::error::ValidationError;
use crate::{limits, payload, references, schema, structure};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

/// A pipeline stage, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Structure,
    PayloadSize,
    LimitsAndSchema,
    Placeholders,
    References,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Structure => "structure",
            Stage::PayloadSize => "payload_size",
            Stage::LimitsAndSchema => "limits_and_schema",
            Stage::Placeholders => "placeholders",
            Stage::References => "references",
        }
    }
}

/// What a pipeline run produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outcome {
    /// The stage whose errors are returned, `None` for a clean document.
    pub stage: Option<Stage>,
    pub errors: Vec<ValidationError>,
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs the pipeline against a fixed set of [`Limits`].
///
/// Holds no per-run state; one validator can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct Validator {
    limits: Limits,
}

impl Validator {
    pub fn new(limits: Limits) -> Self {
        Validator { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Validate a document and return its errors. Empty means acceptable.
    pub fn validate(&self, doc: &Value) -> Vec<ValidationError> {
        self.run(doc).errors
    }

    /// Validate a document, also reporting which stage stopped the run.
    pub fn run(&self, doc: &Value) -> Outcome {
        trace!("validating requirements document");

        let errors = structure::validate(doc);
        if !errors.is_empty() {
            return stopped(Stage::Structure, errors);
        }

        let errors = payload::validate(doc, self.limits.max_payload_size_bytes);
        if !errors.is_empty() {
            return stopped(Stage::PayloadSize, errors);
        }

        let mut errors = limits::validate(doc, &self.limits);
        errors.extend(schema::validate(doc));
        if !errors.is_empty() {
            return stopped(Stage::LimitsAndSchema, errors);
        }

        let errors = schema::scan_placeholders(doc);
        if !errors.is_empty() {
            return stopped(Stage::Placeholders, errors);
        }

        let errors = references::validate(doc);
        if !errors.is_empty() {
            return stopped(Stage::References, errors);
        }

        Outcome::default()
    }
}

fn stopped(stage: Stage, errors: Vec<ValidationError>) -> Outcome {
    debug!(stage = stage.as_str(), errors = errors.len(), "requirements rejected");
    Outcome {
        stage: Some(stage),
        errors,
    }
}

/// Validate a requirements document against the default platform limits.
/// Returns all errors of the first failing stage.
pub fn validate(doc: &Value) -> Vec<ValidationError> {
    Validator::default().validate(doc)
}

//! Validator for app requirements documents.
//!
//! A requirements document declares the custom objects, fields and triggers
//! an app needs from the host platform before it may be installed. This
//! crate checks such a document and returns an ordered list of
//! [`ValidationError`] records. It never rejects, repairs, or stores
//! anything itself: an empty list means the document is acceptable.
//!
//! ```text
//! parse(text) → Value → validate(&value) → Vec<ValidationError>
//!                                        → serialize_errors(&errors) → yaml
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//!
//! let doc = json!({
//!     "objects": [{
//!         "key": "car",
//!         "title": "Car",
//!         "title_pluralized": "Cars",
//!         "include_in_list_view": true
//!     }],
//!     "object_fields": [{
//!         "key": "make",
//!         "title": "Make",
//!         "type": "text",
//!         "object_key": "truck"
//!     }]
//! });
//!
//! let errors = appreq::validate(&doc);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].kind, appreq::ErrorKind::InvalidObjectReferenceInFields);
//! ```
//!
//! # Limits
//!
//! [`validate`] uses the platform ceilings in [`config`]. To validate against
//! different ceilings, build a [`Validator`] with custom [`Limits`].

pub mod config;
pub mod error;
pub mod helpers;
pub mod limits;
pub mod parse;
pub mod payload;
pub mod references;
pub mod schema;
pub mod serialize;
pub mod structure;
pub mod validate;

pub use config::Limits;
pub use error::*;

pub use parse::parse;
pub use serialize::serialize_errors;
pub use validate::{Outcome, Stage, Validator, validate};

/// Convenience entry point composing parse → validate.
///
/// Returns the parsed document when it is acceptable.
///
/// # Errors
///
/// Returns `Err(Vec<RequirementsError>)` with the parse failure, or with every
/// validation error of the first failing stage.
///
/// # Example
///
/// ```rust
/// let yaml = r#"
/// objects:
///   - key: car
///     title: Car
///     title_pluralized: Cars
///     include_in_list_view: true
/// "#;
///
/// match appreq::load(yaml) {
///     Ok(doc) => println!("accepted {} object(s)", doc["objects"].as_array().map_or(0, Vec::len)),
///     Err(errors) => eprintln!("{} errors", errors.len()),
/// }
/// ```
pub fn load(input: &str) -> Result<serde_json::Value, Vec<RequirementsError>> {
    let doc = parse::parse(input).map_err(|e| vec![RequirementsError::Parse(e)])?;

    let errors = validate::validate(&doc);
    if !errors.is_empty() {
        return Err(errors
            .into_iter()
            .map(RequirementsError::Validation)
            .collect());
    }

    Ok(doc)
}

//! Common types and errors for the CloudFormation model generator
//!
//! This crate contains the shared model entities and error types used
//! across the parser and CLI components. The model is built once from a
//! specification document and never mutated afterwards; every type here is
//! plain owned data.

use thiserror::Error;

pub mod model;

pub use model::{
    Attribute, ItemType, PrimitiveType, Property, Resource, Specification, Subproperty,
    UpdateType, ValueType,
};

/// Errors that can occur while building the specification model
#[derive(Error, Debug)]
pub enum SpecError {
    /// A mandatory key was absent from a definition
    #[error("Missing required field `{field}` in definition of `{name}`")]
    MissingField { name: String, field: &'static str },

    /// `UpdateType` carried a value outside the recognized enumeration
    #[error("Invalid update type: {0}")]
    InvalidUpdateType(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for model building operations
pub type Result<T> = std::result::Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = SpecError::MissingField {
            name: "AWS::S3::Bucket".to_string(),
            field: "Documentation",
        };
        assert_eq!(
            err.to_string(),
            "Missing required field `Documentation` in definition of `AWS::S3::Bucket`"
        );
    }

    #[test]
    fn test_invalid_update_type_display() {
        let err = SpecError::InvalidUpdateType("Sometimes".to_string());
        assert_eq!(err.to_string(), "Invalid update type: Sometimes");
    }
}

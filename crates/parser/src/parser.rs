//! Specification document parser

use crate::converter;
use crate::types::SpecificationDoc;
use cfn_model_generator_common::{Result, SpecError, Specification};
use std::fs;
use std::path::Path;

/// CloudFormation resource specification parser
///
/// Loads a specification document and builds the typed model from it.
#[derive(Debug)]
pub struct SpecificationParser {
    /// Loaded specification document
    doc: SpecificationDoc,
}

impl SpecificationParser {
    /// Load a specification document from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = SpecificationParser::from_file(
    ///     "CloudFormationResourceSpecification.json"
    /// )?;
    /// let specification = parser.parse()?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            SpecError::Parse(format!(
                "Failed to read specification file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse a specification document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: SpecificationDoc = serde_json::from_str(json).map_err(|e| {
            SpecError::Parse(format!("Failed to parse specification JSON: {}", e))
        })?;

        Ok(Self { doc })
    }

    /// Build the typed model from the loaded document
    pub fn parse(&self) -> Result<Specification> {
        converter::convert_specification(&self.doc)
    }

    /// Get a reference to the underlying specification document
    pub fn doc(&self) -> &SpecificationDoc {
        &self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_specification() {
        let spec_json = r#"{
            "ResourceSpecificationVersion": "2.28.0",
            "ResourceTypes": {},
            "PropertyTypes": {}
        }"#;

        let parser = SpecificationParser::from_json(spec_json).unwrap();
        let specification = parser.parse().unwrap();

        assert_eq!(specification.resource_specification_version, "2.28.0");
        assert!(specification.resource_types.is_empty());
        assert!(specification.property_types.is_empty());
    }

    #[test]
    fn test_version_is_mandatory() {
        let spec_json = r#"{ "ResourceTypes": {}, "PropertyTypes": {} }"#;

        let parser = SpecificationParser::from_json(spec_json).unwrap();
        let err = parser.parse().unwrap_err();
        assert!(matches!(
            err,
            SpecError::MissingField {
                field: "ResourceSpecificationVersion",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = SpecificationParser::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SpecError::Parse(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SpecificationParser::from_file("/nonexistent/spec.json").unwrap_err();
        match err {
            SpecError::Parse(message) => assert!(message.contains("/nonexistent/spec.json")),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }
}

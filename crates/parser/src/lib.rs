//! CloudFormation resource specification parsing
//!
//! This crate parses the AWS CloudFormation resource specification into a
//! strongly-typed model (`Specification`) for downstream code generation.
//!
//! Specification documents are published per region, for example:
//! <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/cfn-resource-specification.html>
//!
//! ## Format
//! A specification document contains:
//! - `ResourceTypes`: resource definitions with documentation, read-only
//!   attributes and configurable properties
//! - `PropertyTypes`: shared property group definitions referenced by name
//! - `ResourceSpecificationVersion`: the document's version stamp
//!
//! Type declarations are spread over overlapping optional keys
//! (`PrimitiveType`, `Type`, `PrimitiveItemType`, `ItemType`); the converter
//! resolves them in a fixed precedence order into one tagged type variant.
//!
//! ## Usage
//! ```rust,ignore
//! use cfn_model_generator_parser::SpecificationParser;
//!
//! let parser = SpecificationParser::from_file("CloudFormationResourceSpecification.json")?;
//! let specification = parser.parse()?;
//! ```

mod converter;
mod parser;
mod types;

pub use converter::{convert_attribute, convert_property, convert_resource, convert_specification};
pub use parser::SpecificationParser;
pub use types::*;

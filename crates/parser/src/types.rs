//! Resource specification document type definitions
//!
//! Raw document shapes as published, prior to model resolution. Every field
//! is optional here: the specification format has several overlapping
//! optional keys, and which ones are mandatory depends on the kind of
//! definition, so presence checks belong to the converter rather than to
//! deserialization.

use cfn_model_generator_common::PrimitiveType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Type declaration keys shared by attribute and property definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeDef {
    /// Primitive scalar type (e.g., "String", "Integer")
    #[serde(rename = "PrimitiveType")]
    #[serde(default)]
    pub primitive_type: Option<PrimitiveType>,

    /// Structured type marker: the literals "List" and "Map", or the name
    /// of a property type
    #[serde(rename = "Type")]
    #[serde(default)]
    pub type_name: Option<String>,

    /// Primitive item type of a List or Map declaration
    #[serde(rename = "PrimitiveItemType")]
    #[serde(default)]
    pub primitive_item_type: Option<PrimitiveType>,

    /// Property type name of a List or Map item
    #[serde(rename = "ItemType")]
    #[serde(default)]
    pub item_type: Option<String>,
}

/// Property definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDef {
    /// Documentation link or text
    #[serde(rename = "Documentation")]
    #[serde(default)]
    pub documentation: Option<String>,

    /// Nested property definitions; present only on container properties
    #[serde(rename = "Properties")]
    #[serde(default)]
    pub properties: Option<HashMap<String, PropertyDef>>,

    /// Update semantics ("Immutable", "Mutable" or "Conditional")
    #[serde(rename = "UpdateType")]
    #[serde(default)]
    pub update_type: Option<String>,

    /// Whether the property must be supplied
    #[serde(rename = "Required")]
    #[serde(default)]
    pub required: Option<bool>,

    /// Whether duplicate list entries are allowed
    #[serde(rename = "DuplicatesAllowed")]
    #[serde(default)]
    pub duplicates_allowed: Option<bool>,

    /// Type declaration, shared with attribute definitions
    #[serde(flatten)]
    pub type_decl: AttributeDef,
}

/// Resource type definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDef {
    /// Documentation link or text
    #[serde(rename = "Documentation")]
    #[serde(default)]
    pub documentation: Option<String>,

    /// Read-only attribute definitions
    #[serde(rename = "Attributes")]
    #[serde(default)]
    pub attributes: Option<HashMap<String, AttributeDef>>,

    /// Configurable property definitions
    #[serde(rename = "Properties")]
    #[serde(default)]
    pub properties: Option<HashMap<String, PropertyDef>>,
}

/// Specification document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecificationDoc {
    /// Version stamp of the document (e.g., "2.28.0")
    #[serde(rename = "ResourceSpecificationVersion")]
    #[serde(default)]
    pub resource_specification_version: Option<String>,

    /// Resource type definitions, keyed by fully qualified name
    #[serde(rename = "ResourceTypes")]
    #[serde(default)]
    pub resource_types: HashMap<String, ResourceDef>,

    /// Shared property type definitions, keyed by fully qualified name
    #[serde(rename = "PropertyTypes")]
    #[serde(default)]
    pub property_types: HashMap<String, PropertyDef>,
}

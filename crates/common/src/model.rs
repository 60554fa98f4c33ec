//! Typed model of a parsed resource specification
//!
//! These are the entities the parser produces: a [`Specification`] holding
//! [`Resource`] definitions, which in turn hold named [`Attribute`]s
//! (read-only outputs) and [`Property`]s (configurable inputs). Each entity
//! is fully resolved at construction time; re-parsing a document produces a
//! fresh, independent object graph.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::SpecError;

/// Primitive scalar type tag used by the specification document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveType {
    String,
    Long,
    Integer,
    Double,
    Boolean,
    Timestamp,
    Json,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveType::String => "String",
            PrimitiveType::Long => "Long",
            PrimitiveType::Integer => "Integer",
            PrimitiveType::Double => "Double",
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Timestamp => "Timestamp",
            PrimitiveType::Json => "Json",
        };
        write!(f, "{}", name)
    }
}

/// Classification of how changing a property affects the underlying resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateType {
    /// Changing the property requires replacing the resource
    Immutable,
    /// The property can be changed in place
    Mutable,
    /// Whether a replacement is needed depends on the surrounding change
    Conditional,
}

impl FromStr for UpdateType {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Immutable" => Ok(UpdateType::Immutable),
            "Mutable" => Ok(UpdateType::Mutable),
            "Conditional" => Ok(UpdateType::Conditional),
            other => Err(SpecError::InvalidUpdateType(other.to_string())),
        }
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UpdateType::Immutable => "Immutable",
            UpdateType::Mutable => "Mutable",
            UpdateType::Conditional => "Conditional",
        };
        write!(f, "{}", name)
    }
}

/// Reference to a named property group defined elsewhere in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subproperty {
    /// Name of the referenced property type (e.g., "Tag")
    pub name: String,
}

impl Subproperty {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Item type of a List or Map container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Primitive(PrimitiveType),
    Subproperty(Subproperty),
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Primitive(primitive) => write!(f, "{}", primitive),
            ItemType::Subproperty(subproperty) => write!(f, "{}", subproperty.name),
        }
    }
}

/// Resolved type of an attribute or property declaration
///
/// One variant per resolution branch: a primitive scalar, an ordered
/// collection, a string-keyed collection, or a direct reference to a named
/// property group. Declarations that resolve to none of these are carried
/// as `Option<ValueType>::None` by their owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Primitive(PrimitiveType),
    List(ItemType),
    Map(ItemType),
    Subproperty(Subproperty),
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Primitive(primitive) => write!(f, "{}", primitive),
            ValueType::List(item) => write!(f, "List<{}>", item),
            ValueType::Map(item) => write!(f, "Map<{}>", item),
            ValueType::Subproperty(subproperty) => write!(f, "{}", subproperty.name),
        }
    }
}

/// Read-only attribute of a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Name the attribute is registered under (e.g., "Arn")
    pub name: String,

    /// Resolved type; `None` for a typeless placeholder or an incomplete
    /// List/Map declaration
    pub value_type: Option<ValueType>,
}

/// Configurable property of a resource
///
/// A property is either a container of named sub-properties or a typed
/// leaf. The two forms are mutually exclusive: a container carries only its
/// documentation and nested properties, a leaf carries the full mutability
/// and requiredness metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Property {
    Container {
        /// Name the property is registered under
        name: String,
        /// Documentation string from the definition
        documentation: String,
        /// Nested properties, keyed by their definition names
        properties: HashMap<String, Property>,
    },
    Leaf {
        /// Name the property is registered under
        name: String,
        /// Documentation string from the definition
        documentation: String,
        /// Whether the property must be supplied
        required: bool,
        /// How changing the property affects the resource
        update_type: UpdateType,
        /// Whether duplicate entries are allowed in a list-shaped property;
        /// absent when the definition does not say
        duplicate_allowed: Option<bool>,
        /// Resolved type; `None` for a typeless or incomplete declaration
        value_type: Option<ValueType>,
    },
}

impl Property {
    /// Name the property is registered under
    pub fn name(&self) -> &str {
        match self {
            Property::Container { name, .. } | Property::Leaf { name, .. } => name,
        }
    }

    /// Documentation string from the definition
    pub fn documentation(&self) -> &str {
        match self {
            Property::Container { documentation, .. }
            | Property::Leaf { documentation, .. } => documentation,
        }
    }

    /// Whether this property is a container of named sub-properties
    pub fn is_container(&self) -> bool {
        matches!(self, Property::Container { .. })
    }
}

/// Parsed resource type definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Fully qualified resource type name (e.g., "AWS::S3::Bucket")
    pub name: String,

    /// Documentation string from the definition
    pub documentation: String,

    /// Read-only attributes, keyed by their definition names
    pub attributes: HashMap<String, Attribute>,

    /// Configurable properties, keyed by their definition names
    pub properties: HashMap<String, Property>,
}

/// Whole parsed specification document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    /// Version stamp of the specification document
    pub resource_specification_version: String,

    /// Resource type definitions, keyed by fully qualified name
    pub resource_types: HashMap<String, Resource>,

    /// Shared property type definitions, keyed by fully qualified name
    /// (e.g., "AWS::S3::Bucket.Tag")
    pub property_types: HashMap<String, Property>,
}

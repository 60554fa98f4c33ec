//! Converts raw specification definitions to the typed model
//!
//! The document's type declarations are spread over several overlapping
//! optional keys; resolution inspects them in a fixed precedence order and
//! produces exactly one of the mutually exclusive [`ValueType`] variants,
//! or none at all for the typeless placeholders the format tolerates.

use crate::types::{AttributeDef, PropertyDef, ResourceDef, SpecificationDoc};
use cfn_model_generator_common::{
    Attribute, ItemType, Property, Resource, Result, SpecError, Specification, Subproperty,
    UpdateType, ValueType,
};
use std::collections::HashMap;

/// Resolve the type declaration of an attribute or property definition
///
/// Precedence: a primitive type wins over a structured type; List and Map
/// prefer a primitive item type over a named item type. A List or Map with
/// neither item key, like a declaration with no type keys at all, resolves
/// to `None` rather than failing.
fn resolve_value_type(def: &AttributeDef) -> Option<ValueType> {
    if let Some(primitive) = def.primitive_type {
        return Some(ValueType::Primitive(primitive));
    }

    // The "List" and "Map" literals are structurally significant; any other
    // value names a property type directly. Matching is case-sensitive.
    match def.type_name.as_deref()? {
        "List" => resolve_item_type(def).map(ValueType::List),
        "Map" => resolve_item_type(def).map(ValueType::Map),
        other => Some(ValueType::Subproperty(Subproperty::new(other))),
    }
}

/// Resolve the item type of a List or Map declaration
fn resolve_item_type(def: &AttributeDef) -> Option<ItemType> {
    if let Some(primitive) = def.primitive_item_type {
        Some(ItemType::Primitive(primitive))
    } else {
        def.item_type
            .as_deref()
            .map(|name| ItemType::Subproperty(Subproperty::new(name)))
    }
}

/// Convert an attribute definition
///
/// Never fails: an attribute that declares no resolvable type is a
/// permitted typeless placeholder.
pub fn convert_attribute(name: &str, def: &AttributeDef) -> Attribute {
    Attribute {
        name: name.to_string(),
        value_type: resolve_value_type(def),
    }
}

/// Convert a property definition
///
/// A definition carrying a `Properties` sub-map is a pure container: only
/// its documentation and nested properties are resolved, whatever other
/// keys sit alongside. Everything else is a typed leaf, for which
/// `UpdateType` and `Required` are mandatory.
pub fn convert_property(name: &str, def: &PropertyDef) -> Result<Property> {
    let documentation = def
        .documentation
        .clone()
        .ok_or_else(|| missing(name, "Documentation"))?;

    if let Some(sub_defs) = &def.properties {
        let mut properties = HashMap::with_capacity(sub_defs.len());
        for (sub_name, sub_def) in sub_defs {
            properties.insert(sub_name.clone(), convert_property(sub_name, sub_def)?);
        }
        return Ok(Property::Container {
            name: name.to_string(),
            documentation,
            properties,
        });
    }

    let update_type = def
        .update_type
        .as_deref()
        .ok_or_else(|| missing(name, "UpdateType"))?
        .parse::<UpdateType>()?;
    let required = def.required.ok_or_else(|| missing(name, "Required"))?;

    Ok(Property::Leaf {
        name: name.to_string(),
        documentation,
        required,
        update_type,
        duplicate_allowed: def.duplicates_allowed,
        value_type: resolve_value_type(&def.type_decl),
    })
}

/// Convert a resource type definition
///
/// `Documentation`, `Attributes` and `Properties` are always present in
/// well-formed documents; their absence aborts the build of this resource.
pub fn convert_resource(name: &str, def: &ResourceDef) -> Result<Resource> {
    let documentation = def
        .documentation
        .clone()
        .ok_or_else(|| missing(name, "Documentation"))?;

    let attribute_defs = def
        .attributes
        .as_ref()
        .ok_or_else(|| missing(name, "Attributes"))?;
    let mut attributes = HashMap::with_capacity(attribute_defs.len());
    for (attr_name, attr_def) in attribute_defs {
        attributes.insert(attr_name.clone(), convert_attribute(attr_name, attr_def));
    }

    let property_defs = def
        .properties
        .as_ref()
        .ok_or_else(|| missing(name, "Properties"))?;
    let mut properties = HashMap::with_capacity(property_defs.len());
    for (prop_name, prop_def) in property_defs {
        properties.insert(prop_name.clone(), convert_property(prop_name, prop_def)?);
    }

    Ok(Resource {
        name: name.to_string(),
        documentation,
        attributes,
        properties,
    })
}

/// Convert a whole specification document
pub fn convert_specification(doc: &SpecificationDoc) -> Result<Specification> {
    let resource_specification_version = doc
        .resource_specification_version
        .clone()
        .ok_or_else(|| missing("specification", "ResourceSpecificationVersion"))?;

    let mut resource_types = HashMap::with_capacity(doc.resource_types.len());
    for (name, def) in &doc.resource_types {
        resource_types.insert(name.clone(), convert_resource(name, def)?);
    }

    let mut property_types = HashMap::with_capacity(doc.property_types.len());
    for (name, def) in &doc.property_types {
        property_types.insert(name.clone(), convert_property(name, def)?);
    }

    Ok(Specification {
        resource_specification_version,
        resource_types,
        property_types,
    })
}

fn missing(name: &str, field: &'static str) -> SpecError {
    SpecError::MissingField {
        name: name.to_string(),
        field,
    }
}

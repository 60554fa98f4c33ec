//! Integration test for the specification parser

use cfn_model_generator_common::{
    ItemType, PrimitiveType, Property, SpecError, Subproperty, UpdateType, ValueType,
};
use cfn_model_generator_parser::SpecificationParser;

/// Trimmed-down specification document in the published format
const BUCKET_SPEC: &str = r#"{
    "ResourceSpecificationVersion": "2.28.0",
    "PropertyTypes": {
        "AWS::S3::Bucket.Tag": {
            "Documentation": "http://docs.example/tag",
            "Properties": {
                "Key": {
                    "Documentation": "http://docs.example/tag-key",
                    "PrimitiveType": "String",
                    "Required": true,
                    "UpdateType": "Mutable"
                },
                "Value": {
                    "Documentation": "http://docs.example/tag-value",
                    "PrimitiveType": "String",
                    "Required": true,
                    "UpdateType": "Mutable"
                }
            }
        },
        "AWS::S3::Bucket.VersioningConfiguration": {
            "Documentation": "http://docs.example/versioning",
            "Properties": {
                "Status": {
                    "Documentation": "http://docs.example/versioning-status",
                    "PrimitiveType": "String",
                    "Required": false,
                    "UpdateType": "Mutable"
                }
            }
        }
    },
    "ResourceTypes": {
        "AWS::S3::Bucket": {
            "Documentation": "http://docs.example/bucket",
            "Attributes": {
                "Arn": {
                    "PrimitiveType": "String"
                },
                "DomainName": {
                    "PrimitiveType": "String"
                },
                "WebsiteURL": {
                    "PrimitiveType": "String"
                }
            },
            "Properties": {
                "BucketName": {
                    "Documentation": "http://docs.example/bucket-name",
                    "PrimitiveType": "String",
                    "Required": false,
                    "UpdateType": "Immutable"
                },
                "AccessControl": {
                    "Documentation": "http://docs.example/access-control",
                    "PrimitiveType": "String",
                    "Required": false,
                    "UpdateType": "Conditional"
                },
                "Tags": {
                    "Documentation": "http://docs.example/tags",
                    "DuplicatesAllowed": true,
                    "ItemType": "Tag",
                    "Required": false,
                    "Type": "List",
                    "UpdateType": "Mutable"
                },
                "VersioningConfiguration": {
                    "Documentation": "http://docs.example/versioning",
                    "Required": false,
                    "Type": "VersioningConfiguration",
                    "UpdateType": "Mutable"
                }
            }
        }
    }
}"#;

#[test]
fn test_parse_bucket_specification() {
    let parser = SpecificationParser::from_json(BUCKET_SPEC).unwrap();
    let specification = parser.parse().unwrap();

    assert_eq!(specification.resource_specification_version, "2.28.0");
    assert_eq!(specification.resource_types.len(), 1);
    assert_eq!(specification.property_types.len(), 2);

    let bucket = &specification.resource_types["AWS::S3::Bucket"];
    assert_eq!(bucket.name, "AWS::S3::Bucket");
    assert_eq!(bucket.documentation, "http://docs.example/bucket");
    assert_eq!(bucket.attributes.len(), 3);
    assert_eq!(bucket.properties.len(), 4);
}

#[test]
fn test_attribute_resolution() {
    let parser = SpecificationParser::from_json(BUCKET_SPEC).unwrap();
    let specification = parser.parse().unwrap();

    let bucket = &specification.resource_types["AWS::S3::Bucket"];
    let arn = &bucket.attributes["Arn"];
    assert_eq!(arn.name, "Arn");
    assert_eq!(
        arn.value_type,
        Some(ValueType::Primitive(PrimitiveType::String))
    );
}

#[test]
fn test_property_resolution() {
    let parser = SpecificationParser::from_json(BUCKET_SPEC).unwrap();
    let specification = parser.parse().unwrap();

    let bucket = &specification.resource_types["AWS::S3::Bucket"];

    match &bucket.properties["BucketName"] {
        Property::Leaf {
            required,
            update_type,
            duplicate_allowed,
            value_type,
            ..
        } => {
            assert!(!required);
            assert_eq!(*update_type, UpdateType::Immutable);
            assert_eq!(*duplicate_allowed, None);
            assert_eq!(
                *value_type,
                Some(ValueType::Primitive(PrimitiveType::String))
            );
        }
        Property::Container { .. } => panic!("BucketName should be a leaf"),
    }

    match &bucket.properties["Tags"] {
        Property::Leaf {
            update_type,
            duplicate_allowed,
            value_type,
            ..
        } => {
            assert_eq!(*update_type, UpdateType::Mutable);
            assert_eq!(*duplicate_allowed, Some(true));
            assert_eq!(
                *value_type,
                Some(ValueType::List(ItemType::Subproperty(Subproperty::new(
                    "Tag"
                ))))
            );
        }
        Property::Container { .. } => panic!("Tags should be a leaf"),
    }

    match &bucket.properties["VersioningConfiguration"] {
        Property::Leaf { value_type, .. } => {
            assert_eq!(
                *value_type,
                Some(ValueType::Subproperty(Subproperty::new(
                    "VersioningConfiguration"
                )))
            );
        }
        Property::Container { .. } => panic!("VersioningConfiguration should be a leaf"),
    }
}

#[test]
fn test_property_types_are_containers() {
    let parser = SpecificationParser::from_json(BUCKET_SPEC).unwrap();
    let specification = parser.parse().unwrap();

    match &specification.property_types["AWS::S3::Bucket.Tag"] {
        Property::Container {
            documentation,
            properties,
            ..
        } => {
            assert_eq!(documentation, "http://docs.example/tag");
            assert_eq!(properties.len(), 2);
            match &properties["Key"] {
                Property::Leaf {
                    required,
                    value_type,
                    ..
                } => {
                    assert!(required);
                    assert_eq!(
                        *value_type,
                        Some(ValueType::Primitive(PrimitiveType::String))
                    );
                }
                Property::Container { .. } => panic!("Key should be a leaf"),
            }
        }
        Property::Leaf { .. } => panic!("Tag should be a container"),
    }
}

#[test]
fn test_invalid_update_type_fails_the_build() {
    let spec_json = r#"{
        "ResourceSpecificationVersion": "2.28.0",
        "PropertyTypes": {},
        "ResourceTypes": {
            "AWS::S3::Bucket": {
                "Documentation": "d",
                "Attributes": {},
                "Properties": {
                    "BucketName": {
                        "Documentation": "d",
                        "PrimitiveType": "String",
                        "Required": false,
                        "UpdateType": "Replaceable"
                    }
                }
            }
        }
    }"#;

    let parser = SpecificationParser::from_json(spec_json).unwrap();
    let err = parser.parse().unwrap_err();
    match err {
        SpecError::InvalidUpdateType(value) => assert_eq!(value, "Replaceable"),
        other => panic!("expected InvalidUpdateType, got {:?}", other),
    }
}

#[test]
fn test_resource_without_attributes_section_fails() {
    let spec_json = r#"{
        "ResourceSpecificationVersion": "2.28.0",
        "PropertyTypes": {},
        "ResourceTypes": {
            "AWS::S3::Bucket": {
                "Documentation": "d",
                "Properties": {}
            }
        }
    }"#;

    let parser = SpecificationParser::from_json(spec_json).unwrap();
    let err = parser.parse().unwrap_err();
    assert!(matches!(
        err,
        SpecError::MissingField {
            field: "Attributes",
            ..
        }
    ));
}

#[test]
fn test_model_serializes_to_json() {
    let parser = SpecificationParser::from_json(BUCKET_SPEC).unwrap();
    let specification = parser.parse().unwrap();

    let dumped = serde_json::to_string_pretty(&specification).unwrap();
    assert!(dumped.contains("AWS::S3::Bucket"));
    assert!(dumped.contains("Immutable"));
}

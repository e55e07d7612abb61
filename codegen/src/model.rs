//! Smithy JSON AST model types for deserialization.
//!
//! Covers the subset of the Smithy 1.0 and 2.0 JSON AST that S3 uses. Both
//! enum encodings are understood: 2.0 `enum` shapes and 1.0 string shapes
//! carrying the `smithy.api#enum` trait.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;

/// Trait carrying a shape's or member's documentation.
pub const DOCUMENTATION_TRAIT: &str = "smithy.api#documentation";
/// Smithy 1.0 string enumeration trait.
pub const ENUM_TRAIT: &str = "smithy.api#enum";
/// Explicit wire value of a Smithy 2.0 enum member.
pub const ENUM_VALUE_TRAIT: &str = "smithy.api#enumValue";
/// The empty input/output target.
pub const UNIT: &str = "smithy.api#Unit";

/// Traits attached to a shape or member, keyed by trait shape ID.
pub type Traits = BTreeMap<String, serde_json::Value>;

/// Top-level Smithy model document.
#[derive(Debug, Deserialize)]
pub struct SmithyModel {
    /// Smithy IDL version (e.g. `"2.0"`).
    pub smithy: String,
    /// All shapes defined in the model, keyed by their full shape ID.
    #[serde(default)]
    pub shapes: BTreeMap<String, Shape>,
}

/// A single Smithy shape.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    /// A structure shape.
    Structure(StructureShape),
    /// A tagged union, generated like a structure.
    Union(StructureShape),
    /// An operation shape.
    Operation(OperationShape),
    /// A string, possibly constrained by the 1.0 enum trait.
    String(SimpleShape),
    /// A 2.0 enum shape.
    Enum(EnumShape),
    /// A boolean shape.
    Boolean(SimpleShape),
    /// A 32-bit integer shape.
    Integer(SimpleShape),
    /// A 64-bit integer shape.
    Long(SimpleShape),
    /// A 32-bit float shape.
    Float(SimpleShape),
    /// A 64-bit float shape.
    Double(SimpleShape),
    /// A timestamp shape.
    Timestamp(SimpleShape),
    /// A blob shape.
    Blob(SimpleShape),
    /// A list shape.
    List(ListShape),
    /// A 1.0 set shape, generated like a list.
    Set(ListShape),
    /// A map shape.
    Map(MapShape),
    /// An 8-bit integer shape (unsupported as a member).
    Byte(SimpleShape),
    /// A 16-bit integer shape (unsupported as a member).
    Short(SimpleShape),
    /// An arbitrary-precision integer (unsupported as a member).
    BigInteger(SimpleShape),
    /// An arbitrary-precision decimal (unsupported as a member).
    BigDecimal(SimpleShape),
    /// An untyped document (unsupported as a member).
    Document(SimpleShape),
    /// An integer enum (unsupported as a member).
    IntEnum(SimpleShape),
    /// A service shape (ignored).
    Service(SimpleShape),
    /// A resource shape (ignored).
    Resource(SimpleShape),
}

/// A shape with traits only.
#[derive(Debug, Default, Deserialize)]
pub struct SimpleShape {
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

/// A structure or union shape.
#[derive(Debug, Default, Deserialize)]
pub struct StructureShape {
    /// Members of the structure, ordered by member name.
    #[serde(default)]
    pub members: BTreeMap<String, MemberShape>,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

/// A member within a structure, union or enum.
#[derive(Debug, Deserialize)]
pub struct MemberShape {
    /// Target shape ID this member points to.
    pub target: String,
    /// Traits applied to this member.
    #[serde(default)]
    pub traits: Traits,
}

/// An operation shape.
#[derive(Debug, Deserialize)]
pub struct OperationShape {
    /// Input shape reference.
    pub input: Option<ShapeRef>,
    /// Output shape reference.
    pub output: Option<ShapeRef>,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

/// A reference to another shape.
#[derive(Debug, Deserialize)]
pub struct ShapeRef {
    /// The full shape ID being referenced.
    pub target: String,
}

/// A 2.0 enum shape.
#[derive(Debug, Deserialize)]
pub struct EnumShape {
    /// Enum members (member name -> member shape).
    #[serde(default)]
    pub members: BTreeMap<String, MemberShape>,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

/// A list or set shape.
#[derive(Debug, Deserialize)]
pub struct ListShape {
    /// The shape of the elements.
    pub member: ShapeRef,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

/// A map shape.
#[derive(Debug, Deserialize)]
pub struct MapShape {
    /// The shape of the keys.
    pub key: ShapeRef,
    /// The shape of the values.
    pub value: ShapeRef,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

/// One entry of the 1.0 `smithy.api#enum` trait.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumDefinition {
    /// Wire value.
    pub value: String,
    /// Symbolic name, when the model provides one.
    #[serde(default)]
    pub name: Option<String>,
    /// Entry documentation.
    #[serde(default)]
    pub documentation: Option<String>,
}

impl SmithyModel {
    /// Get the short name from a fully qualified shape ID.
    ///
    /// For example, `com.amazonaws.s3#BucketName` returns `BucketName`.
    pub fn short_name(shape_id: &str) -> &str {
        shape_id.rsplit_once('#').map_or(shape_id, |(_, name)| name)
    }

    /// Look up a shape by its full ID.
    pub fn shape(&self, shape_id: &str) -> Option<&Shape> {
        self.shapes.get(shape_id)
    }
}

impl Shape {
    /// The shape's traits, if its kind carries any.
    pub fn traits(&self) -> &Traits {
        match self {
            Self::Structure(s) | Self::Union(s) => &s.traits,
            Self::Operation(s) => &s.traits,
            Self::Enum(s) => &s.traits,
            Self::List(s) | Self::Set(s) => &s.traits,
            Self::Map(s) => &s.traits,
            Self::String(s)
            | Self::Boolean(s)
            | Self::Integer(s)
            | Self::Long(s)
            | Self::Float(s)
            | Self::Double(s)
            | Self::Timestamp(s)
            | Self::Blob(s)
            | Self::Byte(s)
            | Self::Short(s)
            | Self::BigInteger(s)
            | Self::BigDecimal(s)
            | Self::Document(s)
            | Self::IntEnum(s)
            | Self::Service(s)
            | Self::Resource(s) => &s.traits,
        }
    }

    /// Whether this shape becomes an open enum.
    pub fn is_enum(&self) -> bool {
        match self {
            Self::Enum(_) => true,
            Self::String(s) => s.traits.contains_key(ENUM_TRAIT),
            _ => false,
        }
    }

    /// The 1.0 enum trait entries of a string shape.
    ///
    /// Empty for shapes without the trait. A malformed trait is an error.
    pub fn enum_definitions(&self) -> Result<Vec<EnumDefinition>> {
        let raw = match self {
            Self::String(s) => s.traits.get(ENUM_TRAIT),
            _ => None,
        };
        match raw {
            Some(raw) => Ok(Vec::<EnumDefinition>::deserialize(raw)?),
            None => Ok(Vec::new()),
        }
    }
}

/// Documentation string attached through `smithy.api#documentation`.
pub fn documentation(traits: &Traits) -> Option<&str> {
    traits.get(DOCUMENTATION_TRAIT).and_then(serde_json::Value::as_str)
}

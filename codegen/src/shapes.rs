//! Shape resolution and type mapping from Smithy shapes to member types.
//!
//! Walks the configured operations, collects the transitive closure of the
//! shapes they reference and sorts them into request, output and shared
//! structures plus open enums.

use std::collections::{BTreeMap, BTreeSet};

use heck::{ToPascalCase, ToSnakeCase};
use tracing::{debug, warn};

use crate::config::CodegenConfig;
use crate::error::{CodegenError, Result};
use crate::model::{
    self, ENUM_VALUE_TRAIT, MemberShape, Shape, SmithyModel, StructureShape, UNIT,
};

/// Docs longer than this are dropped rather than truncated mid-sentence.
const MAX_DOC_CHARS: usize = 110;

/// Name of the pre-encoded query string appended to request structures.
pub const CUSTOM_QUERY_PARAMETERS: &str = "custom_query_parameters";

const CUSTOM_QUERY_PARAMETERS_DOC: &str = "Pre-encoded query string appended to the request URI.";

/// Name of the ordered header list appended to request structures.
pub const CUSTOM_HEADERS: &str = "custom_headers";

const CUSTOM_HEADERS_DOC: &str = "Extra HTTP headers sent with the request, in order.";

/// Shared structure holding one entry of [`CUSTOM_HEADERS`].
pub const HTTP_HEADER: &str = "HttpHeader";

/// Identifiers that need a trailing underscore to be used as field names.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// The type of one generated structure member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberType {
    /// Free-form text.
    String,
    /// `bool`.
    Boolean,
    /// `i32`.
    Integer,
    /// `i64`.
    Long,
    /// `f32`.
    Float,
    /// `f64`.
    Double,
    /// A UTC instant.
    Timestamp,
    /// Raw bytes.
    Blob,
    /// An open enum, by short name.
    Enum(String),
    /// A nested structure, by short name.
    Structure(String),
    /// An ordered collection.
    List(Box<MemberType>),
    /// A keyed collection.
    Map(Box<MemberType>, Box<MemberType>),
}

impl MemberType {
    /// The Rust type expression declared in `s3_structure!`.
    pub fn rust_type(&self) -> String {
        match self {
            Self::String => "String".to_owned(),
            Self::Boolean => "bool".to_owned(),
            Self::Integer => "i32".to_owned(),
            Self::Long => "i64".to_owned(),
            Self::Float => "f32".to_owned(),
            Self::Double => "f64".to_owned(),
            Self::Timestamp => "chrono::DateTime<chrono::Utc>".to_owned(),
            Self::Blob => "Vec<u8>".to_owned(),
            Self::Enum(name) | Self::Structure(name) => name.clone(),
            Self::List(inner) => format!("Vec<{}>", inner.rust_type()),
            Self::Map(key, value) => format!("HashMap<{}, {}>", key.rust_type(), value.rust_type()),
        }
    }

    /// Whether the type mentions `HashMap` anywhere.
    pub fn uses_map(&self) -> bool {
        match self {
            Self::Map(..) => true,
            Self::List(inner) => inner.uses_map(),
            _ => false,
        }
    }

    /// Add the enum and structure names this type mentions.
    pub fn collect_names(&self, enums: &mut BTreeSet<String>, structs: &mut BTreeSet<String>) {
        match self {
            Self::Enum(name) => {
                enums.insert(name.clone());
            }
            Self::Structure(name) => {
                structs.insert(name.clone());
            }
            Self::List(inner) => inner.collect_names(enums, structs),
            Self::Map(key, value) => {
                key.collect_names(enums, structs);
                value.collect_names(enums, structs);
            }
            _ => {}
        }
    }
}

/// A member of a generated structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// Original Smithy member name.
    pub smithy_name: String,
    /// Rust field name.
    pub rust_name: String,
    /// Resolved member type.
    pub member_type: MemberType,
    /// One-line doc comment, if the member is documented.
    pub doc: Option<String>,
}

/// A variant of a generated open enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumVariantInfo {
    /// Rust variant name.
    pub rust_name: String,
    /// Wire value.
    pub value: String,
}

/// A configured operation and the structures it uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationInfo {
    /// Operation name (e.g. `"PutObject"`).
    pub name: String,
    /// File category from the configuration.
    pub category: String,
    /// Request structure short name, `None` for a `Unit` input.
    pub input_shape: Option<String>,
    /// Output structure short name, `None` for a `Unit` output.
    pub output_shape: Option<String>,
}

/// Structures keyed by short name.
pub type StructMap = BTreeMap<String, Vec<FieldInfo>>;

/// Everything the renderer needs, in deterministic order.
#[derive(Debug, Default)]
pub struct ResolvedModel {
    /// Operations in configuration order.
    pub operations: Vec<OperationInfo>,
    /// Open enums keyed by short name.
    pub enums: BTreeMap<String, Vec<EnumVariantInfo>>,
    /// Structures referenced from other structures.
    pub shared_structs: StructMap,
    /// Request structures keyed by category.
    pub input_structs: BTreeMap<String, StructMap>,
    /// Output structures keyed by category.
    pub output_structs: BTreeMap<String, StructMap>,
}

impl ResolvedModel {
    /// Total number of generated structures.
    pub fn struct_count(&self) -> usize {
        let nested = |groups: &BTreeMap<String, StructMap>| -> usize {
            groups.values().map(BTreeMap::len).sum()
        };
        self.shared_structs.len() + nested(&self.input_structs) + nested(&self.output_structs)
    }
}

/// Convert a Smithy member name to a Rust field name.
///
/// ```
/// use s3crt_codegen::shapes::rust_field_name;
///
/// assert_eq!(rust_field_name("SSEKMSKeyId"), "ssekms_key_id");
/// assert_eq!(rust_field_name("Type"), "type_");
/// ```
pub fn rust_field_name(smithy_name: &str) -> String {
    let snake = smithy_name.to_snake_case();
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        format!("{snake}_")
    } else {
        snake
    }
}

/// Convert an enum member name or wire value to a Rust variant name.
pub fn variant_name(raw: &str) -> String {
    let pascal = raw.to_pascal_case();
    match pascal.chars().next() {
        None => "Empty".to_owned(),
        Some(c) if c.is_ascii_digit() => format!("V{pascal}"),
        Some(_) if pascal == "Unknown" => "UnknownValue".to_owned(),
        Some(_) => pascal,
    }
}

/// Reduce Smithy HTML documentation to a one-line summary.
///
/// Keeps the first sentence with tags stripped and entities decoded. Returns
/// `None` when nothing is left or the sentence is too long for one line.
pub fn summarize_doc(raw: &str) -> Option<String> {
    let text = unescape_entities(&strip_tags(raw));
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut sentence = first_sentence(&text).to_owned();
    if sentence.ends_with(':') {
        sentence.pop();
        sentence.push('.');
    }
    if sentence.is_empty() || sentence.chars().count() > MAX_DOC_CHARS {
        return None;
    }
    Some(sentence.replace('[', "\\[").replace(']', "\\]"))
}

fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('<') {
        let Some(len) = rest[start..].find('>') else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push(' ');
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}

fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

fn first_sentence(text: &str) -> &str {
    for (i, c) in text.char_indices().skip(1) {
        if c == '.' && is_abbreviation(&text[..i]) {
            continue;
        }
        if c == '.' || c == ':' {
            let rest = &text[i + 1..];
            if rest.is_empty() || rest.starts_with(' ') {
                return &text[..=i];
            }
        }
    }
    text
}

/// Whether a `.` following `before` closes a single-letter abbreviation such
/// as the parts of `e.g.` and `i.e.`.
fn is_abbreviation(before: &str) -> bool {
    let mut tail = before.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(letter), None) => letter.is_ascii_lowercase(),
        (Some(letter), Some(prev)) => {
            letter.is_ascii_lowercase() && (prev == ' ' || prev == '.' || prev == '(')
        }
        _ => false,
    }
}

/// Resolve the configured operations against a parsed model.
pub fn resolve_model(model: &SmithyModel, config: &CodegenConfig) -> Result<ResolvedModel> {
    config.validate()?;
    let resolver = Resolver {
        model,
        namespace: &config.namespace,
    };

    let mut resolved = ResolvedModel::default();
    let mut io_shapes = BTreeSet::new();
    for (name, category) in config.operations() {
        let op = resolver.operation(name, category)?;
        debug!(
            operation = %op.name,
            input = ?op.input_shape,
            output = ?op.output_shape,
            "resolved operation"
        );
        io_shapes.extend(op.input_shape.iter().cloned());
        io_shapes.extend(op.output_shape.iter().cloned());
        resolved.operations.push(op);
    }

    // Shapes reached through members; roots only count once referenced.
    let mut referenced = BTreeSet::new();
    for shape in &io_shapes {
        resolver.collect(&resolver.qualify(shape), &mut referenced, true)?;
    }

    for op in &resolved.operations {
        if let Some(input) = &op.input_shape {
            if !referenced.contains(input) {
                let mut fields = resolver.fields(input)?;
                if config.custom_headers {
                    fields.push(custom_headers_field());
                }
                if config.custom_query_parameters {
                    fields.push(custom_query_parameters_field());
                }
                resolved
                    .input_structs
                    .entry(op.category.clone())
                    .or_default()
                    .insert(input.clone(), fields);
            }
        }
        if let Some(output) = &op.output_shape {
            if !referenced.contains(output) {
                resolved
                    .output_structs
                    .entry(op.category.clone())
                    .or_default()
                    .insert(output.clone(), resolver.fields(output)?);
            }
        }
    }

    for short in &referenced {
        let shape_id = resolver.qualify(short);
        let Some(shape) = model.shape(&shape_id) else {
            return Err(CodegenError::MissingShape(shape_id));
        };
        if shape.is_enum() {
            resolved.enums.insert(short.clone(), enum_variants(short, shape)?);
        } else {
            resolved
                .shared_structs
                .insert(short.clone(), resolver.fields(short)?);
        }
    }

    if config.custom_headers && !resolved.input_structs.is_empty() {
        if resolved.shared_structs.contains_key(HTTP_HEADER) {
            return Err(CodegenError::ReservedShape(HTTP_HEADER.to_owned()));
        }
        resolved
            .shared_structs
            .insert(HTTP_HEADER.to_owned(), http_header_fields());
    }

    Ok(resolved)
}

fn custom_query_parameters_field() -> FieldInfo {
    FieldInfo {
        smithy_name: "customQueryParameters".to_owned(),
        rust_name: CUSTOM_QUERY_PARAMETERS.to_owned(),
        member_type: MemberType::String,
        doc: Some(CUSTOM_QUERY_PARAMETERS_DOC.to_owned()),
    }
}

fn custom_headers_field() -> FieldInfo {
    FieldInfo {
        smithy_name: "customHeaders".to_owned(),
        rust_name: CUSTOM_HEADERS.to_owned(),
        member_type: MemberType::List(Box::new(MemberType::Structure(HTTP_HEADER.to_owned()))),
        doc: Some(CUSTOM_HEADERS_DOC.to_owned()),
    }
}

fn http_header_fields() -> Vec<FieldInfo> {
    ["Name", "Value"]
        .into_iter()
        .map(|name| FieldInfo {
            smithy_name: name.to_owned(),
            rust_name: rust_field_name(name),
            member_type: MemberType::String,
            doc: None,
        })
        .collect()
}

fn enum_variants(name: &str, shape: &Shape) -> Result<Vec<EnumVariantInfo>> {
    let raw: Vec<(String, String)> = match shape {
        Shape::Enum(e) => e
            .members
            .iter()
            .map(|(member, def)| {
                let value = def
                    .traits
                    .get(ENUM_VALUE_TRAIT)
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or(member.as_str());
                (variant_name(member), value.to_owned())
            })
            .collect(),
        _ => shape
            .enum_definitions()?
            .into_iter()
            .map(|def| {
                let rust_name = variant_name(def.name.as_deref().unwrap_or(&def.value));
                (rust_name, def.value)
            })
            .collect(),
    };

    let mut variants: BTreeMap<String, String> = BTreeMap::new();
    for (rust_name, value) in raw {
        if variants.values().any(|known| *known == value) {
            debug!(shape = name, value = %value, "repeated enum value");
            continue;
        }
        let rust_name = unique_variant_name(&variants, rust_name);
        variants.insert(rust_name, value);
    }
    Ok(variants
        .into_iter()
        .map(|(rust_name, value)| EnumVariantInfo { rust_name, value })
        .collect())
}

/// `base`, or `base` suffixed with the first free counter from 2.
fn unique_variant_name(taken: &BTreeMap<String, String>, base: String) -> String {
    if !taken.contains_key(&base) {
        return base;
    }
    let mut n = 2_usize;
    loop {
        let candidate = format!("{base}{n}");
        if !taken.contains_key(&candidate) {
            warn!(variant = %base, renamed = %candidate, "enum variant name collision");
            return candidate;
        }
        n += 1;
    }
}

struct Resolver<'a> {
    model: &'a SmithyModel,
    namespace: &'a str,
}

impl Resolver<'_> {
    fn qualify(&self, short: &str) -> String {
        format!("{}#{short}", self.namespace)
    }

    fn operation(&self, name: &str, category: &str) -> Result<OperationInfo> {
        let shape_id = self.qualify(name);
        let op = match self.model.shape(&shape_id) {
            Some(Shape::Operation(op)) => op,
            Some(_) => return Err(CodegenError::NotAnOperation(name.to_owned())),
            None => return Err(CodegenError::MissingOperation(name.to_owned())),
        };
        let io_name = |r: &Option<model::ShapeRef>| {
            r.as_ref()
                .filter(|r| r.target != UNIT)
                .map(|r| SmithyModel::short_name(&r.target).to_owned())
        };
        Ok(OperationInfo {
            name: name.to_owned(),
            category: category.to_owned(),
            input_shape: io_name(&op.input),
            output_shape: io_name(&op.output),
        })
    }

    fn structure(&self, short: &str) -> Result<&StructureShape> {
        let shape_id = self.qualify(short);
        match self.model.shape(&shape_id) {
            Some(Shape::Structure(s) | Shape::Union(s)) => Ok(s),
            Some(_) | None => Err(CodegenError::MissingShape(shape_id)),
        }
    }

    /// Add every enum or structure reachable from `shape_id` to `seen`.
    ///
    /// `root` shapes are walked but not recorded themselves.
    fn collect(&self, shape_id: &str, seen: &mut BTreeSet<String>, root: bool) -> Result<()> {
        if shape_id.starts_with("smithy.api#") {
            return Ok(());
        }
        let short = SmithyModel::short_name(shape_id);
        let Some(shape) = self.model.shape(shape_id) else {
            return Err(CodegenError::MissingShape(shape_id.to_owned()));
        };
        let records = shape.is_enum() || matches!(shape, Shape::Structure(_) | Shape::Union(_));
        if records && !root && !seen.insert(short.to_owned()) {
            return Ok(());
        }

        match shape {
            Shape::Structure(s) | Shape::Union(s) => {
                for member in s.members.values() {
                    self.collect(&member.target, seen, false)?;
                }
            }
            Shape::List(l) | Shape::Set(l) => self.collect(&l.member.target, seen, false)?,
            Shape::Map(m) => {
                self.collect(&m.key.target, seen, false)?;
                self.collect(&m.value.target, seen, false)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn fields(&self, short: &str) -> Result<Vec<FieldInfo>> {
        let structure = self.structure(short)?;
        structure
            .members
            .iter()
            .map(|(name, member)| {
                Ok(FieldInfo {
                    smithy_name: name.clone(),
                    rust_name: rust_field_name(name),
                    member_type: self.member_type(short, name, member)?,
                    doc: self.member_doc(member),
                })
            })
            .collect()
    }

    fn member_doc(&self, member: &MemberShape) -> Option<String> {
        model::documentation(&member.traits)
            .or_else(|| {
                self.model
                    .shape(&member.target)
                    .and_then(|target| model::documentation(target.traits()))
            })
            .and_then(summarize_doc)
    }

    fn member_type(&self, owner: &str, member: &str, def: &MemberShape) -> Result<MemberType> {
        self.target_type(&def.target).ok_or_else(|| CodegenError::UnsupportedTarget {
            shape: owner.to_owned(),
            member: member.to_owned(),
            target: def.target.clone(),
        })
    }

    fn target_type(&self, target: &str) -> Option<MemberType> {
        if let Some(builtin) = builtin_type(target) {
            return Some(builtin);
        }
        let short = SmithyModel::short_name(target).to_owned();
        let ty = match self.model.shape(target)? {
            shape if shape.is_enum() => MemberType::Enum(short),
            Shape::String(_) => MemberType::String,
            Shape::Boolean(_) => MemberType::Boolean,
            Shape::Integer(_) => MemberType::Integer,
            Shape::Long(_) => MemberType::Long,
            Shape::Float(_) => MemberType::Float,
            Shape::Double(_) => MemberType::Double,
            Shape::Timestamp(_) => MemberType::Timestamp,
            Shape::Blob(_) => MemberType::Blob,
            Shape::Structure(_) | Shape::Union(_) => MemberType::Structure(short),
            Shape::List(l) | Shape::Set(l) => {
                MemberType::List(Box::new(self.target_type(&l.member.target)?))
            }
            Shape::Map(m) => MemberType::Map(
                Box::new(self.target_type(&m.key.target)?),
                Box::new(self.target_type(&m.value.target)?),
            ),
            _ => return None,
        };
        Some(ty)
    }
}

fn builtin_type(target: &str) -> Option<MemberType> {
    let ty = match target {
        "smithy.api#String" => MemberType::String,
        "smithy.api#Boolean" | "smithy.api#PrimitiveBoolean" => MemberType::Boolean,
        "smithy.api#Integer" | "smithy.api#PrimitiveInteger" => MemberType::Integer,
        "smithy.api#Long" | "smithy.api#PrimitiveLong" => MemberType::Long,
        "smithy.api#Float" | "smithy.api#PrimitiveFloat" => MemberType::Float,
        "smithy.api#Double" | "smithy.api#PrimitiveDouble" => MemberType::Double,
        "smithy.api#Timestamp" => MemberType::Timestamp,
        "smithy.api#Blob" => MemberType::Blob,
        _ => return None,
    };
    Some(ty)
}

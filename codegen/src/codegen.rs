//! Rust code generation from resolved Smithy shapes.
//!
//! Takes a [`ResolvedModel`] and produces the source of every generated file
//! of `s3crt-model`, keyed by path relative to its `src/` directory.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use crate::error::Result;
use crate::shapes::{EnumVariantInfo, FieldInfo, OperationInfo, ResolvedModel, StructMap};

/// Header comment placed at the top of every generated file.
pub const FILE_HEADER: &str =
    "//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.";

/// Generated lines are packed up to this width, matching rustfmt.
const MAX_WIDTH: usize = 100;

const ARM_INDENT: &str = "            ";

/// Generate all source files and return them as a map of path -> content.
pub fn generate_all(resolved: &ResolvedModel) -> Result<BTreeMap<String, String>> {
    let mut files = BTreeMap::new();

    files.insert("enums.rs".to_owned(), generate_enums(&resolved.enums)?);
    let shared: BTreeSet<String> = resolved.shared_structs.keys().cloned().collect();
    files.insert(
        "types.rs".to_owned(),
        generate_struct_module(&resolved.shared_structs, &shared)?,
    );
    files.insert(
        "operations.rs".to_owned(),
        generate_operations(&resolved.operations)?,
    );

    for (dir, groups) in [
        ("input", &resolved.input_structs),
        ("output", &resolved.output_structs),
    ] {
        let local = BTreeSet::new();
        for (category, structs) in groups {
            files.insert(
                format!("{dir}/{category}.rs"),
                generate_struct_module(structs, &local)?,
            );
        }
        files.insert(format!("{dir}/mod.rs"), generate_mod(groups)?);
    }

    Ok(files)
}

/// Generate `enums.rs` with one `open_enum!` block per enum.
fn generate_enums(enums: &BTreeMap<String, Vec<EnumVariantInfo>>) -> Result<String> {
    let mut out = String::with_capacity(32 * 1024);
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out, "#![allow(missing_docs)]")?;
    writeln!(out)?;
    if !enums.is_empty() {
        writeln!(out, "use crate::open_enum;")?;
    }

    for (name, variants) in enums {
        writeln!(out)?;
        writeln!(out, "open_enum! {{")?;
        writeln!(out, "    /// S3 {name} enum.")?;
        writeln!(out, "    pub enum {name} {{")?;
        for variant in variants {
            writeln!(
                out,
                "        {} => \"{}\",",
                variant.rust_name,
                escape_str(&variant.value)
            )?;
        }
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
    }

    Ok(out)
}

/// Generate a module of `s3_structure!` blocks.
///
/// Structures named in `local` live in the same file and are not imported.
fn generate_struct_module(structs: &StructMap, local: &BTreeSet<String>) -> Result<String> {
    let mut enums = BTreeSet::new();
    let mut types = BTreeSet::new();
    let mut needs_map = false;
    for field in structs.values().flatten() {
        field.member_type.collect_names(&mut enums, &mut types);
        needs_map |= field.member_type.uses_map();
    }
    let types: Vec<String> = types.into_iter().filter(|t| !local.contains(t)).collect();
    let enums: Vec<String> = enums.into_iter().collect();

    let mut out = String::with_capacity(64 * 1024);
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out, "#![allow(missing_docs)]")?;
    writeln!(out)?;
    if needs_map {
        writeln!(out, "use std::collections::HashMap;")?;
        writeln!(out)?;
    }
    write_use(&mut out, "use", "crate::enums", &enums)?;
    if !structs.is_empty() {
        writeln!(out, "use crate::s3_structure;")?;
    }
    write_use(&mut out, "use", "crate::types", &types)?;

    for (name, fields) in structs {
        writeln!(out)?;
        write_struct(&mut out, name, fields)?;
    }

    Ok(out)
}

/// Write one `s3_structure!` block.
fn write_struct(out: &mut String, name: &str, fields: &[FieldInfo]) -> Result<()> {
    writeln!(out, "s3_structure! {{")?;
    writeln!(out, "    /// S3 {name}.")?;
    writeln!(out, "    pub struct {name} {{")?;
    for field in fields {
        if let Some(doc) = &field.doc {
            writeln!(out, "        /// {doc}")?;
        }
        writeln!(
            out,
            "        {}: {},",
            field.rust_name,
            field.member_type.rust_type()
        )?;
    }
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(())
}

/// Generate `mod.rs` for `input/` or `output/`.
fn generate_mod(groups: &BTreeMap<String, StructMap>) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out)?;
    for category in groups.keys() {
        writeln!(out, "mod {category};")?;
    }
    writeln!(out)?;
    for (category, structs) in groups {
        let names: Vec<String> = structs.keys().cloned().collect();
        write_use(&mut out, "pub use", category, &names)?;
    }
    Ok(out)
}

/// Write a `use` declaration the way rustfmt lays it out.
///
/// Nothing is written for an empty item list.
fn write_use(out: &mut String, keyword: &str, path: &str, items: &[String]) -> Result<()> {
    let one_line = match items {
        [] => return Ok(()),
        [item] => format!("{keyword} {path}::{item};"),
        _ => format!("{keyword} {path}::{{{}}};", items.join(", ")),
    };
    if one_line.len() <= MAX_WIDTH {
        writeln!(out, "{one_line}")?;
        return Ok(());
    }

    writeln!(out, "{keyword} {path}::{{")?;
    let mut line = String::from("   ");
    for item in items {
        if line.len() + item.len() + 2 > MAX_WIDTH {
            writeln!(out, "{line}")?;
            line = String::from("   ");
        }
        write!(line, " {item},")?;
    }
    writeln!(out, "{line}")?;
    writeln!(out, "}};")?;
    Ok(())
}

/// Generate `operations.rs` with the `S3Operation` enum.
fn generate_operations(operations: &[OperationInfo]) -> Result<String> {
    let mut out = String::with_capacity(32 * 1024);
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out)?;
    writeln!(
        out,
        "/// All S3 operations covered by the generated request and output structures."
    )?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
    writeln!(out, "pub enum S3Operation {{")?;
    for op in operations {
        writeln!(out, "    /// The {} operation.", op.name)?;
        writeln!(out, "    {},", op.name)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl S3Operation {{")?;
    writeln!(out, "    /// Every operation, in declaration order.")?;
    writeln!(out, "    pub const ALL: &'static [Self] = &[")?;
    for op in operations {
        writeln!(out, "        Self::{},", op.name)?;
    }
    writeln!(out, "    ];")?;
    writeln!(out)?;

    write_fn_head(
        &mut out,
        "Returns the AWS operation name string.",
        "as_str(&self) -> &'static str",
        "self",
    )?;
    for op in operations {
        writeln!(out, "{ARM_INDENT}Self::{0} => \"{0}\",", op.name)?;
    }
    write_fn_tail(&mut out)?;
    writeln!(out)?;

    write_fn_head(
        &mut out,
        "Look up an operation by its AWS name.",
        "from_name(name: &str) -> Option<Self>",
        "name",
    )?;
    for op in operations {
        writeln!(out, "{ARM_INDENT}\"{0}\" => Some(Self::{0}),", op.name)?;
    }
    writeln!(out, "{ARM_INDENT}_ => None,")?;
    write_fn_tail(&mut out)?;
    writeln!(out)?;

    write_fn_head(
        &mut out,
        "The file category the operation's structures are generated into.",
        "category(&self) -> &'static str",
        "self",
    )?;
    let mut categories: Vec<(&str, Vec<&str>)> = Vec::new();
    for op in operations {
        match categories.iter_mut().find(|(c, _)| *c == op.category) {
            Some((_, names)) => names.push(op.name.as_str()),
            None => categories.push((op.category.as_str(), vec![op.name.as_str()])),
        }
    }
    for (category, names) in &categories {
        write_joined_arm(&mut out, names, &format!("\"{category}\""))?;
    }
    write_fn_tail(&mut out)?;
    writeln!(out)?;

    write_shape_fn(
        &mut out,
        operations,
        "Name of the request structure, `None` when the operation takes no input.",
        "request_shape",
        |op| op.input_shape.as_deref(),
    )?;
    writeln!(out)?;
    write_shape_fn(
        &mut out,
        operations,
        "Name of the output structure, `None` when the operation returns nothing.",
        "output_shape",
        |op| op.output_shape.as_deref(),
    )?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl std::fmt::Display for S3Operation {{")?;
    writeln!(
        out,
        "    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {{"
    )?;
    writeln!(out, "        f.write_str(self.as_str())")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    Ok(out)
}

fn write_fn_head(out: &mut String, doc: &str, signature: &str, scrutinee: &str) -> Result<()> {
    writeln!(out, "    /// {doc}")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn {signature} {{")?;
    writeln!(out, "        match {scrutinee} {{")?;
    Ok(())
}

fn write_fn_tail(out: &mut String) -> Result<()> {
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    Ok(())
}

fn write_shape_fn(
    out: &mut String,
    operations: &[OperationInfo],
    doc: &str,
    name: &str,
    shape: impl Fn(&OperationInfo) -> Option<&str>,
) -> Result<()> {
    write_fn_head(
        out,
        doc,
        &format!("{name}(&self) -> Option<&'static str>"),
        "self",
    )?;
    let mut absent = Vec::new();
    for op in operations {
        match shape(op) {
            Some(shape) => writeln!(out, "{ARM_INDENT}Self::{} => Some(\"{shape}\"),", op.name)?,
            None => absent.push(op.name.as_str()),
        }
    }
    if !absent.is_empty() {
        write_joined_arm(out, &absent, "None")?;
    }
    write_fn_tail(out)
}

/// Write `Self::A | Self::B => value,`, one pattern per line when too wide.
fn write_joined_arm(out: &mut String, names: &[&str], value: &str) -> Result<()> {
    let patterns: Vec<String> = names.iter().map(|n| format!("Self::{n}")).collect();
    let one_line = format!("{ARM_INDENT}{} => {value},", patterns.join(" | "));
    if one_line.len() <= MAX_WIDTH {
        writeln!(out, "{one_line}")?;
        return Ok(());
    }
    let last = patterns.len() - 1;
    for (i, pattern) in patterns.iter().enumerate() {
        let lead = if i == 0 { "" } else { "| " };
        let tail = if i == last {
            format!(" => {value},")
        } else {
            String::new()
        };
        writeln!(out, "{ARM_INDENT}{lead}{pattern}{tail}")?;
    }
    Ok(())
}

fn escape_str(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

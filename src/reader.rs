//! `Reader`: the public facade. Validates the magic, parses the header,
//! and exposes lookup-by-name and data-by-name operations.

use std::fmt::Write as _;

use crate::errors::NetCdfError;
use crate::extractor;
use crate::header::{self, Attribute, Dimension, Header, RecordDimension, Variable};
use crate::types::Value;

/// A parsed NetCDF classic (v1/v2) file, borrowing its byte image for
/// the lifetime of the reader.
pub struct Reader<'a> {
    data: &'a [u8],
    header: Header,
}

impl<'a> Reader<'a> {
    /// Parses `data` as a NetCDF classic file. Rejects a version byte of
    /// `0` (see [`Self::new_permissive`] to accept it).
    pub fn new(data: &'a [u8]) -> Result<Self, NetCdfError> {
        Self::construct(data, false)
    }

    /// Like [`Self::new`], but accepts a version byte of `0`, treating it
    /// identically to version 1 (32-bit offsets).
    pub fn new_permissive(data: &'a [u8]) -> Result<Self, NetCdfError> {
        Self::construct(data, true)
    }

    fn construct(data: &'a [u8], permissive: bool) -> Result<Self, NetCdfError> {
        if data.is_empty() {
            return Err(NetCdfError::EmptyInput);
        }
        let mut cursor = crate::cursor::ByteCursor::new(data);
        let header = header::parse(&mut cursor, permissive)?;
        Ok(Self { data, header })
    }

    /// `"classic format"` for version 1 (and, via [`Self::new_permissive`],
    /// version 0); `"64-bit offset format"` for version 2.
    pub fn version_label(&self) -> &'static str {
        if self.header.version == 2 {
            "64-bit offset format"
        } else {
            "classic format"
        }
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.header.dimensions
    }

    pub fn global_attributes(&self) -> &[Attribute] {
        &self.header.global_attributes
    }

    pub fn variables(&self) -> &[Variable] {
        &self.header.variables
    }

    pub fn record_dimension(&self) -> &RecordDimension {
        &self.header.record_dimension
    }

    /// First global attribute whose name matches `name` (byte equality,
    /// case-sensitive). `None` is the absence sentinel — there is no
    /// separate "absent value" variant, since `Option` already expresses
    /// that idiomatically.
    ///
    /// Name collisions within a namespace are ill-formed input; this
    /// decoder resolves them first-match-wins, a convention of this
    /// implementation rather than a file-format guarantee.
    pub fn get_attribute(&self, name: &str) -> Option<&Value> {
        self.header
            .global_attributes
            .iter()
            .find(|a| a.name.matches(name))
            .map(|a| &a.value)
    }

    pub fn attribute_exists(&self, name: &str) -> bool {
        self.header
            .global_attributes
            .iter()
            .any(|a| a.name.matches(name))
    }

    pub fn variable_exists(&self, name: &str) -> bool {
        self.header.variables.iter().any(|v| v.name.matches(name))
    }

    fn find_variable(&self, name: &str) -> Result<&Variable, NetCdfError> {
        self.header
            .variables
            .iter()
            .find(|v| v.name.matches(name))
            .ok_or_else(|| NetCdfError::NotFound(name.to_string()))
    }

    /// Resolves `name` to a [`Variable`] (first match wins) and decodes
    /// its values.
    pub fn get_variable(&self, name: &str) -> Result<Value, NetCdfError> {
        let variable = self.find_variable(name)?;
        extractor::extract(self.data, &self.header, variable)
    }

    /// Runs [`Self::get_variable`] and renders the result as one string.
    /// Meaningful only for CHAR variables, whose elements are already
    /// concatenated by the extractor; other types are rendered via their
    /// full (untruncated) numeric textual form.
    pub fn get_variable_as_text(&self, name: &str) -> Result<String, NetCdfError> {
        Ok(match self.get_variable(name)? {
            Value::Text(s) => s,
            other => join_full(&other),
        })
    }

    /// Human-readable dump of the whole file: dimensions, global
    /// attributes, and a truncated preview of each variable's values.
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", self.version_label(), self.header.version);

        let _ = writeln!(out, "dimensions:");
        for dim in &self.header.dimensions {
            let marker = if dim.is_record() { " (record)" } else { "" };
            let _ = writeln!(out, "  {} = {}{marker}", dim.name, dim.size);
        }

        let _ = writeln!(out, "global attributes:");
        for attr in &self.header.global_attributes {
            let (preview, _) = format_value(&attr.value);
            let _ = writeln!(out, "  {}: {}", attr.name, preview);
        }

        let _ = writeln!(out, "variables:");
        for var in &self.header.variables {
            let shape: Vec<String> = var
                .dimension_ids
                .iter()
                .map(|id| {
                    self.header
                        .dimensions
                        .get(*id as usize)
                        .map(|d| d.name.to_string())
                        .unwrap_or_else(|| format!("<dim {id}>"))
                })
                .collect();
            let _ = writeln!(
                out,
                "  {} {:?} ({})",
                var.name,
                var.type_name,
                shape.join(", ")
            );
            match extractor::extract(self.data, &self.header, var) {
                Ok(value) => {
                    let (preview, len) = format_value(&value);
                    let _ = writeln!(out, "    = {preview} (length {len})");
                }
                Err(e) => {
                    let _ = writeln!(out, "    = <undecodable: {e}>");
                }
            }
        }

        out
    }
}

fn truncate_preview(s: &str) -> String {
    if s.chars().count() <= 50 {
        s.to_string()
    } else {
        let mut preview: String = s.chars().take(50).collect();
        preview.push_str("...");
        preview
    }
}

fn join_preview<T: std::fmt::Display>(values: &[T]) -> String {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    truncate_preview(&rendered.join(", "))
}

/// Full (untruncated) concatenation of a decoded value's elements, for
/// [`Reader::get_variable_as_text`] — unlike [`format_value`], this never
/// drops data for human-readable display.
fn join_full(value: &Value) -> String {
    match value {
        Value::Bytes(b) => format!("{b:?}"),
        Value::Text(s) => s.clone(),
        Value::I16Scalar(v) => v.to_string(),
        Value::I16Seq(v) => v.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "),
        Value::I32Scalar(v) => v.to_string(),
        Value::I32Seq(v) => v.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "),
        Value::F32Scalar(v) => v.to_string(),
        Value::F32Seq(v) => v.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "),
        Value::F64Scalar(v) => v.to_string(),
        Value::F64Seq(v) => v.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "),
    }
}

/// Renders a decoded value for the debug dump: a short preview plus the
/// element/character count.
fn format_value(value: &Value) -> (String, usize) {
    match value {
        Value::Bytes(b) => (truncate_preview(&format!("{b:?}")), b.len()),
        Value::Text(s) => (truncate_preview(s), s.chars().count()),
        Value::I16Scalar(v) => (v.to_string(), 1),
        Value::I16Seq(v) => (join_preview(v), v.len()),
        Value::I32Scalar(v) => (v.to_string(), 1),
        Value::I32Seq(v) => (join_preview(v), v.len()),
        Value::F32Scalar(v) => (v.to_string(), 1),
        Value::F32Seq(v) => (join_preview(v), v.len()),
        Value::F64Scalar(v) => (v.to_string(), 1),
        Value::F64Seq(v) => (join_preview(v), v.len()),
    }
}

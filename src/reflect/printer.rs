//! Generic introspection report
//!
//! Works from `TypeInfo` alone, so any registered type prints the same way.

use serde::Serialize;
use std::io::Write;

use crate::core::error::{Result, TermFreqError};
use crate::core::render::{OutputFormat, RenderConfig};
use crate::reflect::{TypeInfo, TypeRegistry};

pub const FIELD_TAG: &str = "[field]";
pub const METHOD_TAG: &str = "[method]";
pub const SUPERCLASS_TAG: &str = "[superclass]";
pub const INTERFACE_TAG: &str = "[interface]";

#[derive(Debug, Clone, Serialize)]
pub struct FieldEntry {
    pub name: String,
    pub type_name: String,
}

/// Snapshot of one type, in report order
#[derive(Debug, Clone, Serialize)]
pub struct TypeReport {
    pub name: String,
    pub path: String,
    pub fields: Vec<FieldEntry>,
    pub methods: Vec<String>,
    pub superclasses: Vec<String>,
    pub interfaces: Vec<String>,
}

impl TypeReport {
    pub fn from_info(info: &TypeInfo) -> Self {
        Self {
            name: info.name.to_string(),
            path: info.path.to_string(),
            fields: info
                .fields
                .iter()
                .map(|f| FieldEntry {
                    name: f.name.to_string(),
                    type_name: f.type_name.to_string(),
                })
                .collect(),
            methods: info.methods.iter().map(|m| m.signature()).collect(),
            superclasses: info
                .superclasses()
                .iter()
                .map(|t| t.path.to_string())
                .collect(),
            interfaces: info.interfaces.iter().map(|i| i.to_string()).collect(),
        }
    }

    /// Tagged text lines: fields, methods, superclasses, interfaces
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for field in &self.fields {
            lines.push(format!(
                "{} {} {}: {}",
                FIELD_TAG, self.name, field.name, field.type_name
            ));
        }
        for method in &self.methods {
            lines.push(format!("{} {} {}", METHOD_TAG, self.name, method));
        }
        for superclass in &self.superclasses {
            lines.push(format!("{} {} {}", SUPERCLASS_TAG, self.name, superclass));
        }
        for interface in &self.interfaces {
            lines.push(format!("{} {} {}", INTERFACE_TAG, self.name, interface));
        }
        lines
    }
}

/// Resolve `name` and build its report
pub fn introspect(registry: &TypeRegistry, name: &str) -> Result<TypeReport> {
    registry
        .resolve(name)
        .map(TypeReport::from_info)
        .ok_or_else(|| TermFreqError::TypeNotFound(name.trim().to_string()))
}

/// Write a report in the configured format
pub fn write_report<W: Write + ?Sized>(
    report: &TypeReport,
    config: RenderConfig,
    out: &mut W,
) -> Result<()> {
    match config.format {
        OutputFormat::Json | OutputFormat::Jsonl => {
            let json = if config.pretty {
                serde_json::to_string_pretty(report)
            } else {
                serde_json::to_string(report)
            }
            .map_err(std::io::Error::from)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Text => {
            for line in report.lines() {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of code entity a [`CodeElement`] represents. Mirrors the `elemType`
/// tag embedded in a `ref` (`fn:`, `struct:`, `method:`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Function,
    Method,
    Struct,
    Interface,
    Type,
    Const,
    Var,
    Predicate,
}

impl ElementType {
    /// The `kind:` prefix used when building a `ref` for this element type.
    pub fn ref_prefix(self) -> &'static str {
        match self {
            ElementType::Function => "fn",
            ElementType::Method => "method",
            ElementType::Struct => "struct",
            ElementType::Interface => "interface",
            ElementType::Type => "type",
            ElementType::Const => "const",
            ElementType::Var => "var",
            ElementType::Predicate => "pred",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
    Package,
}

/// A parsed code entity. Produced by parsers (C3), consumed by the
/// Cartographer (C5) when it emits `code_defines`/`code_calls` facts.
///
/// `ref` is structured `kind:package.[parent.]name` and is stable across
/// scans as long as the source construct and its location don't change
/// (I4: unique per scan, disambiguated by package).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeElement {
    pub ref_id: String,
    pub elem_type: ElementType,
    pub file_path: PathBuf,
    pub start_line: u32,
    pub end_line: u32,
    pub signature: String,
    pub body: Option<String>,
    pub parent: Option<String>,
    pub visibility: Visibility,
    pub package: String,
    pub name: String,
}

impl CodeElement {
    /// Builds the `kind:package.[parent.]name` ref for this element.
    pub fn build_ref(
        elem_type: ElementType,
        package: &str,
        parent: Option<&str>,
        name: &str,
    ) -> String {
        match parent {
            Some(parent) => format!("{}:{}.{}.{}", elem_type.ref_prefix(), package, parent, name),
            None => format!("{}:{}.{}", elem_type.ref_prefix(), package, name),
        }
    }
}

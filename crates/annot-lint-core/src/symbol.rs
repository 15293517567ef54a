//! Resolved symbol model for method declarations.
//!
//! Symbols are plain data: a [`crate::resolver::SymbolResolver`]
//! produces them, the scanner consumes them, nothing here touches the
//! syntax tree.

use crate::diagnostics::Location;
use crate::utils::paths;

/// Semantically resolved view of one method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSymbol {
    /// Method name.
    pub name: String,
    /// Parameters in declaration order. Receivers (`self` in its
    /// various forms) are not parameters of the symbol.
    pub params: Vec<ParamSymbol>,
}

/// One parameter of a resolved method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSymbol {
    /// Parameter name. For non-identifier patterns this is the rendered
    /// pattern text (e.g. `(a, b)`).
    pub name: String,
    /// Declared type, rendered from tokens.
    pub ty: String,
    /// Attribute annotations attached to the parameter, in source order.
    pub annotations: Vec<Annotation>,
    /// Location of the parameter name.
    pub location: Location,
}

impl ParamSymbol {
    /// Returns true if any annotation satisfies `predicate`.
    pub fn has_annotation(&self, predicate: impl FnMut(&Annotation) -> bool) -> bool {
        self.annotations.iter().any(predicate)
    }
}

/// An attribute annotation attached to a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Path exactly as written at the use site (e.g. `range` or
    /// `validators::range`).
    pub written: String,
    /// Identity after import resolution: a single-ident path is
    /// expanded through the file's `use` map when an import is in
    /// scope; otherwise the written path carries over unchanged.
    pub resolved: String,
}

impl Annotation {
    /// Simple name of the annotation's resolved identity: the last
    /// segment of the resolved path. An alias at the use site does not
    /// change it.
    #[must_use]
    pub fn name(&self) -> &str {
        paths::last_segment(&self.resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_name_follows_resolved_identity() {
        let imported = Annotation {
            written: "range".to_string(),
            resolved: "validators::range".to_string(),
        };
        assert_eq!(imported.name(), "range");

        let aliased = Annotation {
            written: "bounds".to_string(),
            resolved: "validators::range".to_string(),
        };
        assert_eq!(aliased.name(), "range");
    }

    #[test]
    fn has_annotation_checks_all_entries() {
        let param = ParamSymbol {
            name: "x".to_string(),
            ty: "u8".to_string(),
            annotations: vec![
                Annotation {
                    written: "serde".to_string(),
                    resolved: "serde".to_string(),
                },
                Annotation {
                    written: "range".to_string(),
                    resolved: "range".to_string(),
                },
            ],
            location: Location::new("a.rs".into(), 1, 1),
        };
        assert!(param.has_annotation(|a| a.name() == "range"));
        assert!(!param.has_annotation(|a| a.name() == "length"));
    }
}

//! Per-file import map for resolving annotation identities.

use std::collections::HashMap;

use syn::visit::Visit;

/// Maps locally visible simple names to the full paths they were
/// imported from.
///
/// The map is the union of every `use` item in the file, including
/// those inside inline modules; per-module scoping is not modeled.
/// Glob imports introduce no names and are skipped.
#[derive(Debug, Default)]
pub struct ImportMap {
    entries: HashMap<String, String>,
}

impl ImportMap {
    /// Builds the map from all `use` items in `file`.
    #[must_use]
    pub fn from_file(file: &syn::File) -> Self {
        let mut map = Self::default();
        let mut visitor = UseCollector { map: &mut map };
        visitor.visit_file(file);
        map
    }

    /// Looks up the full imported path for a simple name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of names the map knows about.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no imports were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert_tree(&mut self, tree: &syn::UseTree, prefix: &str) {
        match tree {
            syn::UseTree::Path(p) => {
                let new_prefix = if prefix.is_empty() {
                    p.ident.to_string()
                } else {
                    format!("{prefix}::{}", p.ident)
                };
                self.insert_tree(&p.tree, &new_prefix);
            }
            syn::UseTree::Name(n) => {
                let name = n.ident.to_string();
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}::{name}")
                };
                self.entries.insert(name, path);
            }
            syn::UseTree::Rename(r) => {
                let path = if prefix.is_empty() {
                    r.ident.to_string()
                } else {
                    format!("{prefix}::{}", r.ident)
                };
                self.entries.insert(r.rename.to_string(), path);
            }
            syn::UseTree::Glob(_) => {}
            syn::UseTree::Group(g) => {
                for item in &g.items {
                    self.insert_tree(item, prefix);
                }
            }
        }
    }
}

struct UseCollector<'m> {
    map: &'m mut ImportMap,
}

impl<'ast> Visit<'ast> for UseCollector<'_> {
    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.map.insert_tree(&node.tree, "");
        syn::visit::visit_item_use(self, node);
    }
}

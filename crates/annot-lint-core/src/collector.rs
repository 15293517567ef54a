//! Candidate collection during the syntax walk.
//!
//! Collection is a kind filter, not a traversal: the walk is driven by a
//! [`TreeWalker`] (by default `syn::visit`), which calls the collector
//! back once per node. Method-declaration nodes are recorded in the
//! order they are visited; every other node kind falls through to the
//! default walk.

use proc_macro2::Span;
use syn::visit::Visit;
use syn::{ImplItemFn, ItemFn, Signature, TraitItemFn};

/// A method declaration recorded during a syntax walk.
///
/// Candidates are borrowed references into the visited tree and never
/// outlive the pass that produced them.
#[derive(Debug, Clone, Copy)]
pub enum MethodDecl<'ast> {
    /// Free function (`fn` item, including functions nested in bodies).
    Fn(&'ast ItemFn),
    /// Method inside an `impl` block.
    ImplFn(&'ast ImplItemFn),
    /// Method declared in a trait, with or without a default body.
    TraitFn(&'ast TraitItemFn),
}

impl<'ast> MethodDecl<'ast> {
    /// Returns the declared signature.
    #[must_use]
    pub fn sig(self) -> &'ast Signature {
        match self {
            Self::Fn(f) => &f.sig,
            Self::ImplFn(f) => &f.sig,
            Self::TraitFn(f) => &f.sig,
        }
    }

    /// Returns the method identifier.
    #[must_use]
    pub fn ident(self) -> &'ast syn::Ident {
        &self.sig().ident
    }

    /// Returns the span of the method identifier.
    #[must_use]
    pub fn span(self) -> Span {
        self.ident().span()
    }

    /// Tests whether two candidates are the same node, by pointer
    /// identity.
    #[must_use]
    pub fn ptr_eq(self, other: MethodDecl<'_>) -> bool {
        match (self, other) {
            (Self::Fn(a), MethodDecl::Fn(b)) => std::ptr::eq(a, b),
            (Self::ImplFn(a), MethodDecl::ImplFn(b)) => std::ptr::eq(a, b),
            (Self::TraitFn(a), MethodDecl::TraitFn(b)) => std::ptr::eq(a, b),
            _ => false,
        }
    }
}

/// Collects every method declaration a syntax walk visits.
#[derive(Debug, Default)]
pub struct MethodCollector<'ast> {
    methods: Vec<MethodDecl<'ast>>,
}

impl<'ast> MethodCollector<'ast> {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated candidates, in the order the walk visited them.
    #[must_use]
    pub fn methods(&self) -> &[MethodDecl<'ast>] {
        &self.methods
    }

    /// Consumes the collector, yielding the candidate sequence.
    #[must_use]
    pub fn into_methods(self) -> Vec<MethodDecl<'ast>> {
        self.methods
    }

    /// Number of candidates recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns true if no candidates were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<'ast> Visit<'ast> for MethodCollector<'ast> {
    fn visit_item_fn(&mut self, node: &'ast ItemFn) {
        self.methods.push(MethodDecl::Fn(node));
        syn::visit::visit_item_fn(self, node);
    }

    fn visit_impl_item_fn(&mut self, node: &'ast ImplItemFn) {
        self.methods.push(MethodDecl::ImplFn(node));
        syn::visit::visit_impl_item_fn(self, node);
    }

    fn visit_trait_item_fn(&mut self, node: &'ast TraitItemFn) {
        self.methods.push(MethodDecl::TraitFn(node));
        syn::visit::visit_trait_item_fn(self, node);
    }
}

/// Drives a syntax walk, feeding a collector one node at a time.
///
/// The walker owns the visitation order; candidates come back in
/// whatever order it visits declarations.
pub trait TreeWalker {
    /// Walks `file`, invoking `collector` for every node.
    fn walk<'ast>(&self, file: &'ast syn::File, collector: &mut MethodCollector<'ast>);
}

/// Production walker backed by `syn::visit`.
///
/// Visits depth-first in pre-order, which for a single file is document
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynWalker;

impl TreeWalker for SynWalker {
    fn walk<'ast>(&self, file: &'ast syn::File, collector: &mut MethodCollector<'ast>) {
        collector.visit_file(file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_names(code: &str) -> Vec<String> {
        let file = syn::parse_file(code).expect("Failed to parse test code");
        let mut collector = MethodCollector::new();
        SynWalker.walk(&file, &mut collector);
        collector
            .methods()
            .iter()
            .map(|m| m.ident().to_string())
            .collect()
    }

    #[test]
    fn collects_free_functions() {
        let names = collect_names("fn alpha() {} fn beta() {}");
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn collects_impl_and_trait_methods() {
        let code = r"
            trait Store {
                fn get(&self) -> u8;
                fn put(&mut self, value: u8) {
                    let _ = value;
                }
            }

            struct Mem;

            impl Mem {
                fn reset(&mut self) {}
            }
        ";
        let names = collect_names(code);
        assert_eq!(names, vec!["get", "put", "reset"]);
    }

    #[test]
    fn preserves_document_order_across_kinds() {
        let code = r"
            fn first() {}
            impl Widget {
                fn second(&self) {}
            }
            fn third() {}
        ";
        let names = collect_names(code);
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn skips_non_method_declarations() {
        let code = r#"
            struct Config;
            const LIMIT: u8 = 3;
            static NAME: &str = "ab";
            type Alias = u8;
        "#;
        let names = collect_names(code);
        assert!(names.is_empty());
    }

    #[test]
    fn collects_functions_nested_in_bodies() {
        let code = r"
            fn outer() {
                fn inner() {}
            }
        ";
        let names = collect_names(code);
        assert_eq!(names, vec!["outer", "inner"]);
    }

    #[test]
    fn empty_file_yields_no_candidates() {
        let names = collect_names("");
        assert!(names.is_empty());
    }

    #[test]
    fn ptr_eq_distinguishes_distinct_nodes() {
        let file = syn::parse_file("fn a() {} fn b() {}").expect("Failed to parse test code");
        let mut collector = MethodCollector::new();
        SynWalker.walk(&file, &mut collector);
        let methods = collector.methods();
        assert!(methods[0].ptr_eq(methods[0]));
        assert!(!methods[0].ptr_eq(methods[1]));
    }
}

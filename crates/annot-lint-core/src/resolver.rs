//! Symbol resolution for collected method declarations.

use quote::ToTokens;
use syn::spanned::Spanned;

use crate::collector::{MethodCollector, MethodDecl, SynWalker, TreeWalker};
use crate::context::FileContext;
use crate::diagnostics::Location;
use crate::symbol::{Annotation, MethodSymbol, ParamSymbol};
use crate::utils::imports::ImportMap;
use crate::utils::paths;

/// Maps a collected declaration to its resolved symbol.
///
/// Resolution is allowed to fail per candidate: `None` means "this
/// declaration is not known to the resolver". Callers skip such
/// candidates and keep going; a miss is never a pass-level failure.
pub trait SymbolResolver {
    /// Resolves one method declaration.
    fn resolve(&self, decl: MethodDecl<'_>) -> Option<MethodSymbol>;
}

/// Syntax-level resolver for a single parsed file.
///
/// The resolver answers only for declarations that belong to the tree
/// it was built from; a declaration from any other tree resolves to
/// `None`. This is the same ownership rule a compiler's semantic model
/// enforces, checked here by node identity.
pub struct FileResolver<'a> {
    ctx: &'a FileContext<'a>,
    imports: ImportMap,
    own: Vec<MethodDecl<'a>>,
}

impl<'a> FileResolver<'a> {
    /// Builds a resolver for `file`, walking it once to record its own
    /// declarations and its import map.
    #[must_use]
    pub fn new(ctx: &'a FileContext<'a>, file: &'a syn::File) -> Self {
        let mut collector = MethodCollector::new();
        SynWalker.walk(file, &mut collector);
        Self {
            ctx,
            imports: ImportMap::from_file(file),
            own: collector.into_methods(),
        }
    }

    fn owns(&self, decl: MethodDecl<'_>) -> bool {
        self.own.iter().any(|m| m.ptr_eq(decl))
    }

    fn param_symbol(&self, pat_type: &syn::PatType) -> ParamSymbol {
        let (name, span) = param_name(&pat_type.pat);
        let location = self.location(span, name.len());
        ParamSymbol {
            name,
            ty: render(&pat_type.ty),
            annotations: pat_type
                .attrs
                .iter()
                .map(|attr| self.annotation(attr))
                .collect(),
            location,
        }
    }

    fn annotation(&self, attr: &syn::Attribute) -> Annotation {
        let written = paths::path_to_string(attr.path());
        let resolved = if attr.path().segments.len() == 1 {
            self.imports
                .lookup(&written)
                .map_or_else(|| written.clone(), str::to_string)
        } else {
            written.clone()
        };
        Annotation { written, resolved }
    }

    fn location(&self, span: proc_macro2::Span, length: usize) -> Location {
        let location = Location::from_span(self.ctx.relative_path.clone(), span);
        let offset = self.ctx.offset_for(location.line, location.column);
        location.with_span(offset, length)
    }
}

impl SymbolResolver for FileResolver<'_> {
    fn resolve(&self, decl: MethodDecl<'_>) -> Option<MethodSymbol> {
        if !self.owns(decl) {
            return None;
        }
        let sig = decl.sig();
        let params = sig
            .inputs
            .iter()
            .filter_map(|arg| match arg {
                syn::FnArg::Typed(pat_type) => Some(self.param_symbol(pat_type)),
                // Receivers are part of the signature, not of the
                // parameter list the symbol exposes.
                syn::FnArg::Receiver(_) => None,
            })
            .collect();
        Some(MethodSymbol {
            name: sig.ident.to_string(),
            params,
        })
    }
}

/// Display name for a parameter pattern: the identifier for simple
/// bindings, the rendered pattern text otherwise.
fn param_name(pat: &syn::Pat) -> (String, proc_macro2::Span) {
    match pat {
        syn::Pat::Ident(p) => (p.ident.to_string(), p.ident.span()),
        other => (render(other), other.span()),
    }
}

/// Renders tokens to a string with the worst of the default token
/// spacing removed (`Vec < u8 >` becomes `Vec<u8>`).
fn render<T: ToTokens>(tokens: &T) -> String {
    quote::quote!(#tokens)
        .to_string()
        .replace(" :: ", "::")
        .replace(" < ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace(" ;", ";")
        .replace("& ", "&")
}

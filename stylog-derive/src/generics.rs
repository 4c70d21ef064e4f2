//! Generic parameter handling.
//!
//! A `Loggable` bound is added only to type parameters that appear in
//! included fields. Parameters that only appear inside `PhantomData<_>` or in
//! skipped fields stay unbounded, so `Id<T>` with a `PhantomData<T>` marker is
//! loggable for any `T`.

use syn::{Ident, parse_quote, visit::Visit};

use crate::crate_path;

struct GenericUsage<'a> {
    generics: &'a syn::Generics,
    used: &'a mut Vec<Ident>,
}

impl<'ast> Visit<'ast> for GenericUsage<'_> {
    fn visit_path(&mut self, path: &'ast syn::Path) {
        if path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "PhantomData")
        {
            return;
        }

        if path.leading_colon.is_none() {
            if let Some(first) = path.segments.first() {
                let is_param = self
                    .generics
                    .type_params()
                    .any(|param| param.ident == first.ident);
                if is_param && !self.used.contains(&first.ident) {
                    self.used.push(first.ident.clone());
                }
            }
        }

        syn::visit::visit_path(self, path);
    }
}

/// Records the type parameters of `generics` that occur in `ty`.
pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    used: &mut Vec<Ident>,
) {
    GenericUsage { generics, used }.visit_type(ty);
}

/// Adds `Loggable` bounds to the parameters in `used`.
pub(crate) fn add_loggable_bounds(mut generics: syn::Generics, used: &[Ident]) -> syn::Generics {
    let loggable = crate_path("Loggable");
    for param in generics.type_params_mut() {
        if used.contains(&param.ident) {
            param.bounds.push(parse_quote!(#loggable));
        }
    }
    generics
}

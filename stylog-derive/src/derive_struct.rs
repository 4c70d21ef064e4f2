//! Struct-specific `Loggable` derivation.
//!
//! Named structs become objects keyed by field name, tuple structs become
//! arrays (a newtype becomes its inner value) and unit structs become null.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{DataStruct, Fields, Index, Result, ext::IdentExt as _, spanned::Spanned};

use crate::{
    DeriveOutput, crate_path,
    generics::collect_generics_from_type,
    strategy::{Strategy, parse_field_strategy},
};

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<DeriveOutput> {
    let value = crate_path("Value");
    match data.fields {
        Fields::Named(fields) => derive_named_struct(fields, generics),
        Fields::Unnamed(fields) => derive_unnamed_struct(fields, generics),
        Fields::Unit => Ok(DeriveOutput {
            body: quote! { #value::Null },
            used_generics: Vec::new(),
        }),
    }
}

fn derive_named_struct(fields: syn::FieldsNamed, generics: &syn::Generics) -> Result<DeriveOutput> {
    let object = crate_path("Object");
    let value = crate_path("Value");
    let loggable = crate_path("Loggable");
    let mut inserts = Vec::new();
    let mut used_generics = Vec::new();

    for field in fields.named {
        let span = field.span();
        let Some(ident) = field.ident else {
            return Err(syn::Error::new(span, "named field without an identifier"));
        };
        let key = ident.unraw().to_string();
        let Strategy::Include { key } = parse_field_strategy(&field.attrs, key)? else {
            continue;
        };

        collect_generics_from_type(&field.ty, generics, &mut used_generics);
        inserts.push(quote_spanned! { span =>
            object.insert(#key, #loggable::to_log_value(&self.#ident));
        });
    }

    Ok(DeriveOutput {
        body: quote! {
            let object = #object::new();
            #(#inserts)*
            #value::Object(object)
        },
        used_generics,
    })
}

fn derive_unnamed_struct(
    fields: syn::FieldsUnnamed,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let value = crate_path("Value");
    let loggable = crate_path("Loggable");
    let mut items = Vec::new();
    let mut used_generics = Vec::new();
    let total = fields.unnamed.len();

    for (position, field) in fields.unnamed.into_iter().enumerate() {
        let span = field.span();
        if parse_field_strategy(&field.attrs, position.to_string())? == Strategy::Skip {
            continue;
        }

        collect_generics_from_type(&field.ty, generics, &mut used_generics);
        let index = Index::from(position);
        items.push(quote_spanned! { span =>
            #loggable::to_log_value(&self.#index)
        });
    }

    let body = if total == 1 && items.len() == 1 {
        let item = &items[0];
        quote! { #item }
    } else {
        quote! {{
            let items: ::std::vec::Vec<#value> = ::std::vec![#(#items),*];
            #value::Array(items.into())
        }}
    };

    Ok(DeriveOutput {
        body,
        used_generics,
    })
}

/// Binding names for the fields of a tuple variant.
pub(crate) fn tuple_bindings(count: usize) -> Vec<Ident> {
    (0..count).map(|index| format_ident!("field_{index}")).collect()
}

/// Builds an object from named bindings. Shared with enum struct variants.
pub(crate) fn object_from_bindings(entries: &[(String, Ident)]) -> TokenStream {
    let object = crate_path("Object");
    let value = crate_path("Value");
    let loggable = crate_path("Loggable");
    let inserts = entries.iter().map(|(key, binding)| {
        quote! { object.insert(#key, #loggable::to_log_value(#binding)); }
    });
    quote! {{
        let object = #object::new();
        #(#inserts)*
        #value::Object(object)
    }}
}

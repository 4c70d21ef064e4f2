//! Enum-specific `Loggable` derivation.
//!
//! Unit variants become their name as a string. Every other variant becomes a
//! single-key object `{ Variant: inner }`, where `inner` follows the struct
//! rules: an object for named fields, an array for tuple fields and the inner
//! value for a one-field tuple.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, Fields, Result, ext::IdentExt as _, spanned::Spanned};

use crate::{
    DeriveOutput, crate_path,
    derive_struct::{object_from_bindings, tuple_bindings},
    generics::collect_generics_from_type,
    strategy::{Strategy, parse_field_strategy, parse_variant_tag},
};

pub(crate) fn derive_enum(data: DataEnum, generics: &syn::Generics) -> Result<DeriveOutput> {
    let value = crate_path("Value");
    let object = crate_path("Object");
    let loggable = crate_path("Loggable");
    let mut arms = Vec::new();
    let mut used_generics = Vec::new();

    if data.variants.is_empty() {
        return Ok(DeriveOutput {
            body: quote! { match *self {} },
            used_generics,
        });
    }

    for variant in data.variants {
        let ident = &variant.ident;
        let tag = parse_variant_tag(&variant.attrs, ident.unraw().to_string())?;

        let (pattern, inner): (TokenStream, TokenStream) = match variant.fields {
            Fields::Unit => {
                arms.push(quote! {
                    Self::#ident => #value::String(::std::string::String::from(#tag)),
                });
                continue;
            }
            Fields::Named(fields) => {
                let mut entries = Vec::new();
                for field in fields.named {
                    let span = field.span();
                    let Some(binding) = field.ident else {
                        return Err(syn::Error::new(span, "named field without an identifier"));
                    };
                    let key = binding.unraw().to_string();
                    if let Strategy::Include { key } = parse_field_strategy(&field.attrs, key)? {
                        collect_generics_from_type(&field.ty, generics, &mut used_generics);
                        entries.push((key, binding));
                    }
                }
                let names = entries.iter().map(|(_, binding)| binding);
                (
                    quote! { Self::#ident { #(#names,)* .. } },
                    object_from_bindings(&entries),
                )
            }
            Fields::Unnamed(fields) => {
                let total = fields.unnamed.len();
                let bindings = tuple_bindings(total);
                let mut patterns = Vec::new();
                let mut items = Vec::new();
                for (field, binding) in fields.unnamed.into_iter().zip(bindings) {
                    let position = patterns.len().to_string();
                    if parse_field_strategy(&field.attrs, position)? == Strategy::Skip {
                        patterns.push(quote! { _ });
                        continue;
                    }
                    collect_generics_from_type(&field.ty, generics, &mut used_generics);
                    items.push(quote! { #loggable::to_log_value(#binding) });
                    patterns.push(quote! { #binding });
                }
                let inner = if total == 1 && items.len() == 1 {
                    let item = &items[0];
                    quote! { #item }
                } else {
                    quote! {{
                        let items: ::std::vec::Vec<#value> = ::std::vec![#(#items),*];
                        #value::Array(items.into())
                    }}
                };
                (quote! { Self::#ident(#(#patterns),*) }, inner)
            }
        };

        arms.push(quote! {
            #pattern => {
                let tagged = #object::new();
                tagged.insert(#tag, #inner);
                #value::Object(tagged)
            }
        });
    }

    Ok(DeriveOutput {
        body: quote! {
            match self {
                #(#arms)*
            }
        },
        used_generics,
    })
}

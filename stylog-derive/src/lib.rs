//! Derive macro for `stylog`.
//!
//! `#[derive(Loggable)]` generates a `stylog::Loggable` implementation that
//! converts a struct or enum into the `stylog::Value` graph, so it can be
//! passed to log calls and walked by the redaction plugin.
//!
//! It does **not** decide what is sensitive. Key classification happens at
//! runtime, on the generated object keys.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Ident, Result, parse_macro_input, spanned::Spanned};

mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_loggable_bounds;

/// Derives `stylog::Loggable` for structs and enums.
///
/// # Shapes
///
/// | Input                     | Value                                 |
/// |---------------------------|---------------------------------------|
/// | struct with named fields  | object keyed by field name            |
/// | tuple struct              | array (a newtype is its inner value)  |
/// | unit struct               | null                                  |
/// | unit variant              | string with the variant name          |
/// | other variant             | `{ Variant: inner }`                  |
///
/// Object keys keep the field declaration order.
///
/// # Field Attributes
///
/// - `#[loggable(skip)]`: leave the field out.
/// - `#[loggable(rename = "name")]`: use `name` as the key. Also accepted on
///   variants, where it renames the tag.
///
/// Type parameters used by included fields get a `Loggable` bound;
/// parameters only used inside `PhantomData` do not.
///
/// Unions are rejected at compile time.
#[proc_macro_derive(Loggable, attributes(loggable))]
pub fn derive_loggable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

struct DeriveOutput {
    body: TokenStream,
    used_generics: Vec<Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    let output = match data {
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(data) => derive_enum(data, &generics)?,
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Loggable` cannot be derived for unions",
            ));
        }
    };

    let bounded = add_loggable_bounds(generics, &output.used_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();
    let loggable = crate_path("Loggable");
    let value = crate_path("Value");
    let body = output.body;

    Ok(quote! {
        impl #impl_generics #loggable for #ident #ty_generics #where_clause {
            fn to_log_value(&self) -> #value {
                #body
            }
        }
    })
}

/// Returns the token stream to reference the stylog crate root.
///
/// Handles crate renaming (e.g., `logs = { package = "stylog", ... }`). The
/// runtime crate declares `extern crate self as stylog`, so `::stylog` also
/// resolves from inside it and from its own tests.
fn crate_root() -> TokenStream {
    match crate_name("stylog") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::stylog },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item = format_ident!("{}", item);
    quote! { #root::#item }
}
